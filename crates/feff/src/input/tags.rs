use crate::error::Result;
use crate::parsers::{card_line, is_comment};

use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Cards that are not simple parameters
const SKIPPED_CARDS: [&str; 4] = ["TITLE", "ATOMS", "POTENTIALS", "END"];

/// Card parameters from `feff.inp`, e.g. `EDGE K` or `XANES 4 0.04 0.1`
///
/// Values are kept as the remainder of the card line with whitespace
/// normalised. Block data following `ATOMS` and `POTENTIALS` is not included.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Tags(BTreeMap<String, String>);

impl Tags {
    /// Read the card parameters from a `feff.inp` file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::parse(&std::fs::read_to_string(path)?))
    }

    /// Parse the card parameters from the text of a `feff.inp` file
    ///
    /// ```rust
    /// # use chemtools_feff::Tags;
    /// let tags = Tags::parse("EDGE      K\nXANES     4 0.04 0.1\nEND\n");
    /// assert_eq!(tags.get("EDGE"), Some("K"));
    /// assert_eq!(tags.get("XANES"), Some("4 0.04 0.1"));
    /// assert!(!tags.contains("EXAFS"));
    /// ```
    pub fn parse(content: &str) -> Self {
        let mut tags = BTreeMap::new();

        for line in content.lines() {
            if is_comment(line) {
                continue;
            }

            if let Ok((_, (name, value))) = card_line(line) {
                if name == "END" {
                    break;
                }
                if SKIPPED_CARDS.contains(&name) {
                    continue;
                }
                trace!("{name} = {value:?}");
                tags.insert(name.to_string(), value);
            }
        }

        debug!("Tags        = {:?}", tags.keys().collect::<Vec<_>>());
        Self(tags)
    }

    /// Value of a card, if present
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Check for the presence of a card
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Iterate over all cards and their values
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of cards
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if no cards were found
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
