use serde::{Deserialize, Serialize};

/// Spin channel
///
/// Files without spin polarisation only ever populate [Spin::Up].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Spin {
    /// Spin up, also the single channel of non-polarised data
    Up,
    /// Spin down
    Down,
}

impl Spin {
    /// The spin channels present for a calculation
    ///
    /// ```rust
    /// # use chemtools_electronic::Spin;
    /// assert_eq!(Spin::channels(false), &[Spin::Up]);
    /// assert_eq!(Spin::channels(true), &[Spin::Up, Spin::Down]);
    /// ```
    pub fn channels(spin_polarized: bool) -> &'static [Spin] {
        if spin_polarized {
            &[Spin::Up, Spin::Down]
        } else {
            &[Spin::Up]
        }
    }
}

impl std::fmt::Display for Spin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Spin::Up => write!(f, "up"),
            Spin::Down => write!(f, "down"),
        }
    }
}
