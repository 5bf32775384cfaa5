use crate::error::{Error, Result};

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Orbital angular momentum character
///
/// FEFF only resolves densities to this level, one column per character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum OrbitalType {
    S,
    P,
    D,
    F,
}

impl OrbitalType {
    /// All orbital types in column order
    pub const ALL: [OrbitalType; 4] = [Self::S, Self::P, Self::D, Self::F];

    /// Infer from the s/p/d/f character
    ///
    /// ```rust
    /// # use chemtools_electronic::OrbitalType;
    /// assert_eq!(OrbitalType::from_char('d').unwrap(), OrbitalType::D);
    /// assert_eq!(OrbitalType::from_char('P').unwrap(), OrbitalType::P);
    /// assert!(OrbitalType::from_char('g').is_err());
    /// ```
    pub fn from_char(c: char) -> Result<Self> {
        match c.to_ascii_lowercase() {
            's' => Ok(Self::S),
            'p' => Ok(Self::P),
            'd' => Ok(Self::D),
            'f' => Ok(Self::F),
            _ => Err(Error::UnknownOrbitalType(c.to_string())),
        }
    }

    /// Angular momentum quantum number
    pub fn l(&self) -> u8 {
        match self {
            Self::S => 0,
            Self::P => 1,
            Self::D => 2,
            Self::F => 3,
        }
    }
}

impl std::fmt::Display for OrbitalType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let c = match self {
            Self::S => "s",
            Self::P => "p",
            Self::D => "d",
            Self::F => "f",
        };
        f.pad(c)
    }
}

/// Real spherical harmonic orbitals in the order LOBSTER uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Orbital {
    S,
    Py,
    Pz,
    Px,
    Dxy,
    Dyz,
    Dz2,
    Dxz,
    Dx2,
    Fm3,
    Fm2,
    Fm1,
    F0,
    F1,
    F2,
    F3,
}

impl Orbital {
    /// Every orbital, indexed the same as [Orbital::LOBSTER_LABELS]
    pub const ALL: [Orbital; 16] = [
        Self::S,
        Self::Py,
        Self::Pz,
        Self::Px,
        Self::Dxy,
        Self::Dyz,
        Self::Dz2,
        Self::Dxz,
        Self::Dx2,
        Self::Fm3,
        Self::Fm2,
        Self::Fm1,
        Self::F0,
        Self::F1,
        Self::F2,
        Self::F3,
    ];

    /// Orbital labels as written in LOBSTER output headers
    pub const LOBSTER_LABELS: [&'static str; 16] = [
        "s",
        "p_y",
        "p_z",
        "p_x",
        "d_xy",
        "d_yz",
        "d_z^2",
        "d_xz",
        "d_x^2-y^2",
        "f_y(3x^2-y^2)",
        "f_xyz",
        "f_yz^2",
        "f_z^3",
        "f_xz^2",
        "f_z(x^2-y^2)",
        "f_x(x^2-3y^2)",
    ];

    /// Map a LOBSTER orbital label, without the principal quantum number
    ///
    /// ```rust
    /// # use chemtools_electronic::Orbital;
    /// assert_eq!(Orbital::from_lobster_label("p_x").unwrap(), Orbital::Px);
    /// assert_eq!(Orbital::from_lobster_label("d_x^2-y^2").unwrap(), Orbital::Dx2);
    /// assert!(Orbital::from_lobster_label("px").is_err());
    /// ```
    pub fn from_lobster_label(label: &str) -> Result<Self> {
        Self::LOBSTER_LABELS
            .iter()
            .position(|l| *l == label)
            .map(|idx| Self::ALL[idx])
            .ok_or_else(|| Error::UnknownOrbital(label.to_string()))
    }

    /// Short name used to build orbital-pair labels, e.g. `px`, `dz2`, `f_3`
    pub fn name(&self) -> &'static str {
        match self {
            Self::S => "s",
            Self::Py => "py",
            Self::Pz => "pz",
            Self::Px => "px",
            Self::Dxy => "dxy",
            Self::Dyz => "dyz",
            Self::Dz2 => "dz2",
            Self::Dxz => "dxz",
            Self::Dx2 => "dx2",
            Self::Fm3 => "f_3",
            Self::Fm2 => "f_2",
            Self::Fm1 => "f_1",
            Self::F0 => "f0",
            Self::F1 => "f1",
            Self::F2 => "f2",
            Self::F3 => "f3",
        }
    }

    /// The s/p/d/f character of the orbital
    pub fn orbital_type(&self) -> OrbitalType {
        match self {
            Self::S => OrbitalType::S,
            Self::Py | Self::Pz | Self::Px => OrbitalType::P,
            Self::Dxy | Self::Dyz | Self::Dz2 | Self::Dxz | Self::Dx2 => OrbitalType::D,
            _ => OrbitalType::F,
        }
    }
}

impl FromStr for Orbital {
    type Err = Error;

    /// Accepts either the short name or the LOBSTER label
    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .find(|orbital| orbital.name() == s)
            .copied()
            .map_or_else(|| Self::from_lobster_label(s), Ok)
    }
}

impl std::fmt::Display for Orbital {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_and_names_line_up() {
        for (orbital, label) in Orbital::ALL.iter().zip(Orbital::LOBSTER_LABELS) {
            assert_eq!(Orbital::from_lobster_label(label).unwrap(), *orbital);
            assert_eq!(orbital.name().parse::<Orbital>().unwrap(), *orbital);
        }
    }

    #[test]
    fn orbital_character() {
        assert_eq!(Orbital::S.orbital_type(), OrbitalType::S);
        assert_eq!(Orbital::Pz.orbital_type(), OrbitalType::P);
        assert_eq!(Orbital::Dz2.orbital_type(), OrbitalType::D);
        assert_eq!(Orbital::Fm1.orbital_type(), OrbitalType::F);
        assert_eq!(OrbitalType::F.l(), 3);
    }

    #[test]
    fn parse_either_form() {
        assert_eq!("f_z^3".parse::<Orbital>().unwrap(), Orbital::F0);
        assert_eq!("f0".parse::<Orbital>().unwrap(), Orbital::F0);
        assert!("g".parse::<Orbital>().is_err());
    }
}
