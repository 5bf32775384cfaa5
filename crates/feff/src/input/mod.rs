//! Collaborators read from the `feff.inp` input file
//!
//! The output files alone do not say which site uses which potential or what
//! the absorbing atom was, so the ldos and xmu readers also need three pieces
//! of the input file:
//!
//! | Block        | Description                                            |
//! | ------------ | ------------------------------------------------------ |
//! | [Header]     | leading `TITLE`/`*` comment block with the structure   |
//! | [Tags]       | every other card, e.g. `EDGE K`, `XANES 4 0.04 0.1`    |
//! | [Potentials] | rows of the `POTENTIALS` card                          |

mod header;
mod potentials;
mod tags;

pub use header::Header;
pub use potentials::{Potential, Potentials};
pub use tags::Tags;

use crate::error::Result;

use log::info;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Everything the output readers need from `feff.inp`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FeffInput {
    /// Structure and provenance from the title block
    pub header: Header,
    /// Card parameters
    pub tags: Tags,
    /// Potential definitions
    pub potentials: Potentials,
}

impl FeffInput {
    /// Read the header, tags and potentials from a `feff.inp` file
    ///
    /// ```rust, no_run
    /// # use chemtools_feff::FeffInput;
    /// let input = FeffInput::from_file("path/to/feff.inp").unwrap();
    /// println!("absorber: {}", input.potentials.absorbing_atom().unwrap());
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        info!("Reading {}", path.as_ref().display());
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse the full text of a `feff.inp` file
    pub fn parse(content: &str) -> Result<Self> {
        Ok(Self {
            header: Header::parse(content)?,
            tags: Tags::parse(content),
            potentials: Potentials::parse(content)?,
        })
    }
}
