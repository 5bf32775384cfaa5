use serde::{Deserialize, Serialize};

/// Atomic site of a structure
///
/// Only what the readers need to label projections: the species symbol and
/// fractional coordinates.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Site {
    /// Element symbol e.g. 'Co', 'O'
    pub species: String,
    /// Fractional coordinates
    pub coords: [f64; 3],
}

impl Site {
    /// Create a new site
    pub fn new(species: impl Into<String>, coords: [f64; 3]) -> Self {
        Self {
            species: species.into(),
            coords,
        }
    }
}
