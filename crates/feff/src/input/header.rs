use crate::error::{Error, Result};
use crate::parsers::{is_comment, is_title, site_line, title_line};

use chemtools_electronic::Site;
use chemtools_utils::f;
use chemtools_utils::parsers::{nth_usize, vector_of_f64};

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Title block at the top of `feff.inp`
///
/// For example, take the following header:
///
/// ```text
/// * This FEFF.inp file generated by pymatgen
/// TITLE comment: From cif file
/// TITLE Source:  CoO19128.cif
/// TITLE Structure Summary:  Co2 O2
/// TITLE Reduced formula:  CoO
/// TITLE space group: (P6_3mc), space number:  (186)
/// TITLE abc:  3.297078   3.297078   5.254213
/// TITLE angles: 90.000000  90.000000 120.000000
/// TITLE sites: 4
/// * 1 Co     0.333333     0.666667     0.503676
/// * 2 Co     0.666667     0.333333     0.003676
/// * 3 O     0.333333     0.666667     0.121324
/// * 4 O     0.666667     0.333333     0.621325
/// ```
///
/// The block ends at the first line that is neither a `TITLE` nor a `*`
/// comment. Unrecognised titles are ignored.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Header {
    /// Free text comment, e.g. "From cif file"
    pub comment: Option<String>,
    /// Source of the structure, e.g. a cif file name
    pub source: Option<String>,
    /// Formula given by the `Structure Summary` title
    pub formula: Option<String>,
    /// Lattice lengths a, b, c (Å)
    pub abc: Option<[f64; 3]>,
    /// Lattice angles alpha, beta, gamma (degrees)
    pub angles: Option<[f64; 3]>,
    /// Sites listed in the header, fractional coordinates
    pub sites: Vec<Site>,
}

impl Header {
    /// Read the header block from a `feff.inp` file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::parse(&std::fs::read_to_string(path)?)
    }

    /// Parse the header block from the text of a `feff.inp` file
    pub fn parse(content: &str) -> Result<Self> {
        let mut header = Header::default();
        let mut declared_sites: Option<usize> = None;

        let block = content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .take_while(|line| is_title(line) || is_comment(line));

        for line in block {
            if let Ok((_, (key, value))) = title_line(line) {
                match key.as_str() {
                    "comment" => header.comment = Some(value),
                    "source" => header.source = Some(value),
                    "structure summary" => header.formula = Some(value),
                    "abc" => header.abc = Some(triplet(&value)?),
                    "angles" => header.angles = Some(triplet(&value)?),
                    "sites" => declared_sites = Some(nth_usize(&value, 0)?),
                    _ => (),
                }
            } else if let Ok((_, site)) = site_line(line) {
                header.sites.push(site);
            }
        }

        if let Some(expected) = declared_sites {
            if expected != header.sites.len() {
                return Err(Error::UnexpectedSiteCount {
                    expected,
                    found: header.sites.len(),
                });
            }
        }

        debug!("Source      = {:?}", header.source);
        debug!("Formula     = {:?}", header.formula());
        debug!("Sites       = {}", header.sites.len());
        Ok(header)
    }

    /// Number of sites in the structure
    pub fn num_sites(&self) -> usize {
        self.sites.len()
    }

    /// Chemical formula of the material
    ///
    /// Uses the `Structure Summary` title if available, otherwise counts the
    /// species of the listed sites in order of first appearance.
    ///
    /// ```rust
    /// # use chemtools_feff::Header;
    /// let header = Header::parse("TITLE sites: 3
    /// * 1 Co 0.0 0.0 0.0
    /// * 2 O 0.5 0.5 0.5
    /// * 3 O 0.5 0.0 0.5
    /// ").unwrap();
    /// assert_eq!(header.formula(), Some("Co1 O2".to_string()));
    /// ```
    pub fn formula(&self) -> Option<String> {
        if let Some(formula) = &self.formula {
            return Some(formula.clone());
        }

        if self.sites.is_empty() {
            warn!("No formula or sites provided in the header");
            return None;
        }

        let mut counts: Vec<(&str, usize)> = Vec::new();
        for site in &self.sites {
            match counts.iter_mut().find(|(s, _)| *s == site.species) {
                Some((_, n)) => *n += 1,
                None => counts.push((site.species.as_str(), 1)),
            }
        }

        Some(
            counts
                .iter()
                .map(|(species, n)| f!("{species}{n}"))
                .collect::<Vec<String>>()
                .join(" "),
        )
    }
}

/// Three values from a title such as `abc:` or `angles:`
fn triplet(value: &str) -> Result<[f64; 3]> {
    let (_, values) = vector_of_f64(value)?;
    match values.as_slice() {
        [a, b, c] => Ok([*a, *b, *c]),
        _ => Err(Error::ParseError(f!(
            "expected three values, found \"{value}\""
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "* This FEFF.inp file generated by pymatgen
TITLE comment: From cif file
TITLE Source:  CoO19128.cif
TITLE Structure Summary:  Co2 O2
TITLE Reduced formula:  CoO
TITLE space group: (P6_3mc), space number:  (186)
TITLE abc:  3.297078   3.297078   5.254213
TITLE angles: 90.000000  90.000000 120.000000
TITLE sites: 4
* 1 Co     0.333333     0.666667     0.503676
* 2 Co     0.666667     0.333333     0.003676
* 3 O     0.333333     0.666667     0.121324
* 4 O     0.666667     0.333333     0.621325

EDGE      K
POTENTIALS
*    ipot   Z  tag  lmax1  lmax2  xnatph(stoichometry)  spinph
   0   27  Co  -1  -1  0.0001  0
";

    #[test]
    fn parse_header() {
        let header = Header::parse(HEADER).unwrap();
        assert_eq!(header.comment.as_deref(), Some("From cif file"));
        assert_eq!(header.source.as_deref(), Some("CoO19128.cif"));
        assert_eq!(header.formula(), Some("Co2 O2".to_string()));
        assert_eq!(header.abc, Some([3.297078, 3.297078, 5.254213]));
        assert_eq!(header.angles, Some([90.0, 90.0, 120.0]));
        assert_eq!(header.num_sites(), 4);
        assert_eq!(header.sites[1].species, "Co");
        assert_eq!(header.sites[3].coords, [0.666667, 0.333333, 0.621325]);
    }

    #[test]
    fn site_count_must_match() {
        let text = "TITLE sites: 2\n* 1 Co 0.0 0.0 0.0\n";
        assert!(matches!(
            Header::parse(text),
            Err(Error::UnexpectedSiteCount {
                expected: 2,
                found: 1
            })
        ));
    }

    #[test]
    fn missing_formula() {
        let header = Header::parse("EDGE K\n").unwrap();
        assert!(header.formula().is_none());
        assert!(header.sites.is_empty());
    }
}
