use crate::error::{Error, Result};
use crate::parsers::{is_comment, is_potentials_card, potential_row};

use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Single row of the `POTENTIALS` card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Potential {
    /// Potential index, 0 is always the absorbing atom
    pub ipot: usize,
    /// Atomic number
    pub z: u32,
    /// Tag, normally the element symbol
    pub tag: String,
}

/// Potential definitions from the `POTENTIALS` card
///
/// For example:
///
/// ```text
/// POTENTIALS
/// *    ipot   Z  tag  lmax1  lmax2  xnatph(stoichometry)  spinph
///    0   27  Co  -1  -1  0.0001  0
///    1   27  Co  -1  -1  2  0
///    2    8  O  -1  -1  2  0
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Potentials {
    /// Rows in file order
    pub potentials: Vec<Potential>,
}

impl Potentials {
    /// Read the potentials from a `feff.inp` file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::parse(&std::fs::read_to_string(path)?)
    }

    /// Parse the `POTENTIALS` card from the text of a `feff.inp` file
    ///
    /// Comment lines inside the card are skipped, and the card ends at the
    /// first line that is not a potential row.
    pub fn parse(content: &str) -> Result<Self> {
        if !content.lines().any(is_potentials_card) {
            return Err(Error::MissingCard("POTENTIALS".to_string()));
        }

        let lines = content
            .lines()
            .skip_while(|line| !is_potentials_card(line))
            .skip(1)
            .filter(|line| !is_comment(line) && !line.trim().is_empty());

        let mut potentials = Vec::new();
        for line in lines {
            match potential_row(line) {
                Ok((_, potential)) => {
                    trace!("{potential:?}");
                    potentials.push(potential)
                }
                Err(_) => break,
            }
        }

        if potentials.is_empty() {
            return Err(Error::MissingCard("POTENTIALS".to_string()));
        }

        debug!("Potentials  = {}", potentials.len());
        Ok(Self { potentials })
    }

    /// Find the row for a potential index
    pub fn get(&self, ipot: usize) -> Option<&Potential> {
        self.potentials.iter().find(|p| p.ipot == ipot)
    }

    /// Tag of the absorbing atom, which is always potential 0
    pub fn absorbing_atom(&self) -> Result<&str> {
        self.get(0)
            .map(|p| p.tag.as_str())
            .ok_or(Error::MissingAbsorber)
    }

    /// Map of tag to potential index
    ///
    /// Later rows win, so when the absorbing element also appears as a normal
    /// potential its tag maps to that non-absorbing index.
    pub fn symbol_to_ipot(&self) -> BTreeMap<String, usize> {
        self.potentials
            .iter()
            .map(|p| (p.tag.clone(), p.ipot))
            .collect()
    }

    /// Map of potential index to tag
    pub fn ipot_to_symbol(&self) -> BTreeMap<usize, String> {
        self.potentials
            .iter()
            .map(|p| (p.ipot, p.tag.clone()))
            .collect()
    }

    /// Potential indices in ascending order
    pub fn indices(&self) -> Vec<usize> {
        self.ipot_to_symbol().into_keys().collect()
    }
}
