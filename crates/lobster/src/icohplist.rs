//! Reader for the LOBSTER `ICOHPLIST.lobster` and `ICOOPLIST.lobster` files
//!
//! The integrated populations up to the Fermi level, one bond per line after
//! a header line:
//!
//! ```text
//!   COHP#  atomMU  atomNU  distance  ICOHP(eF)  for spin  1
//!      1     Fe8     Fe7     2.83189     -0.10218      2
//!      2     Fe8     Fe9     2.45249     -0.28485      1
//!   COHP#  atomMU  atomNU  distance  ICOHP(eF)  for spin  2
//!      1     Fe8     Fe7     2.83189     -0.19701      2
//!      2     Fe8     Fe9     2.45249     -0.58279      1
//! ```
//!
//! Spin polarised files repeat the table for spin down after a second header,
//! which is always the middle line of the file.

use crate::error::{Error, Result};
use crate::parsers::icohp_row;

use chemtools_electronic::Spin;
use chemtools_utils::f;

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Default file name for ICOHPs
pub const ICOHPLIST: &str = "ICOHPLIST.lobster";

/// Default file name for ICOOPs
pub const ICOOPLIST: &str = "ICOOPLIST.lobster";

/// Integrated population of a single bond
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IcohpValue {
    /// Bond length (Å)
    pub length: f64,
    /// Number of equivalent bonds
    pub number_of_bonds: usize,
    /// Integrated population for each spin channel
    pub icohp: BTreeMap<Spin, f64>,
}

impl IcohpValue {
    /// Sum over the spin channels
    pub fn total(&self) -> f64 {
        self.icohp.values().sum()
    }
}

/// Integrated crystal orbital Hamilton (or overlap) populations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Icohplist {
    /// True for an ICOOPLIST
    pub are_coops: bool,
    /// True if there are two spin channels
    pub is_spin_polarized: bool,
    /// Bond values keyed by label, e.g. `Fe8-Fe7`
    pub icohplist: BTreeMap<String, IcohpValue>,
}

impl Icohplist {
    /// Read an ICOHPLIST file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        IcohplistReader::new().read_file(path)
    }

    /// Parse the text of an ICOHPLIST, or ICOOPLIST if `are_coops` is set
    ///
    /// ```rust
    /// # use chemtools_lobster::Icohplist;
    /// let text = "  COHP#  atomMU  atomNU  distance  ICOHP(eF)  for spin  1
    ///      1     Bi1     Se7     2.88231     -2.18042      3
    /// ";
    /// let icohplist = Icohplist::parse(text, false).unwrap();
    /// assert_eq!(icohplist.icohplist["Bi1-Se7"].number_of_bonds, 3);
    /// ```
    pub fn parse(content: &str, are_coops: bool) -> Result<Self> {
        let name = if are_coops { ICOOPLIST } else { ICOHPLIST };

        // skip the header, ignore trailing blank lines
        let mut data: Vec<&str> = content.lines().skip(1).collect();
        while data.last().is_some_and(|l| l.trim().is_empty()) {
            data.pop();
        }

        if data.is_empty() {
            return Err(Error::NoData(name.to_string()));
        }

        let is_spin_polarized = data[data.len() / 2].contains("distance");
        let n_bonds = if is_spin_polarized {
            data.len() / 2
        } else {
            data.len()
        };
        if n_bonds == 0 {
            return Err(Error::NoData(name.to_string()));
        }
        debug!("Bonds       = {n_bonds}");
        debug!("Spin        = {is_spin_polarized}");

        let mut icohplist = BTreeMap::new();
        for bond in 0..n_bonds {
            let row = icohp_row(data[bond])?.1;
            let mut icohp = BTreeMap::from([(Spin::Up, row.icohp)]);

            if is_spin_polarized {
                let line = data.get(bond + n_bonds + 1).ok_or(Error::UnexpectedLength {
                    context: f!("spin down values of {name}"),
                    expected: n_bonds,
                    found: data.len() - n_bonds - 1,
                })?;
                icohp.insert(Spin::Down, icohp_row(line)?.1.icohp);
            }

            icohplist.insert(
                f!("{}-{}", row.atom1, row.atom2),
                IcohpValue {
                    length: row.distance,
                    number_of_bonds: row.number_of_bonds,
                    icohp,
                },
            );
        }

        Ok(Self {
            are_coops,
            is_spin_polarized,
            icohplist,
        })
    }

    /// Number of bonds
    pub fn len(&self) -> usize {
        self.icohplist.len()
    }

    /// True if there are no bonds
    pub fn is_empty(&self) -> bool {
        self.icohplist.is_empty()
    }

    /// Serialise everything to JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Rebuild from JSON written by [Icohplist::to_json]
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Configurable reader for ICOHPLIST and ICOOPLIST files
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IcohplistReader {
    are_coops: bool,
}

impl IcohplistReader {
    /// Reader for ICOHPLIST files
    pub fn new() -> Self {
        Self::default()
    }

    /// Read ICOOPs rather than ICOHPs
    pub fn set_coops(&mut self, are_coops: bool) {
        self.are_coops = are_coops;
    }

    /// Default file name for the population type
    pub fn default_name(&self) -> &'static str {
        if self.are_coops {
            ICOOPLIST
        } else {
            ICOHPLIST
        }
    }

    /// Read the file at `path`
    pub fn read_file<P: AsRef<Path>>(&self, path: P) -> Result<Icohplist> {
        info!("Reading {}", path.as_ref().display());
        let content = std::fs::read_to_string(path.as_ref())?;
        Icohplist::parse(&content, self.are_coops)
    }

    /// Read the file with the default name in `dir`
    pub fn read_dir<P: AsRef<Path>>(&self, dir: P) -> Result<Icohplist> {
        self.read_file(dir.as_ref().join(self.default_name()))
    }
}

/// Read an ICOHPLIST file
pub fn read_icohplist<P: AsRef<Path>>(path: P) -> Result<Icohplist> {
    IcohplistReader::new().read_file(path)
}

/// Read an ICOOPLIST file
pub fn read_icooplist<P: AsRef<Path>>(path: P) -> Result<Icohplist> {
    let mut reader = IcohplistReader::new();
    reader.set_coops(true);
    reader.read_file(path)
}
