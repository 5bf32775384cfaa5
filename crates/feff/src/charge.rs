use chemtools_electronic::OrbitalType;
use chemtools_utils::ValueExt;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Charge transfer for a single potential
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtomCharge {
    /// Tag of the potential, normally the element symbol
    pub symbol: String,
    /// Electron count for each orbital character
    pub orbitals: BTreeMap<OrbitalType, f64>,
    /// Net charge transfer
    pub total: f64,
}

impl AtomCharge {
    /// Electron count for an orbital character
    pub fn get(&self, orbital: OrbitalType) -> Option<f64> {
        self.orbitals.get(&orbital).copied()
    }
}

/// Charge transfer table for every potential of a run
///
/// Keyed by potential index, so the absorbing atom (ipot 0) is always first.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChargeTransfer {
    /// Charges keyed by potential index
    pub potentials: BTreeMap<usize, AtomCharge>,
}

impl ChargeTransfer {
    /// Charges of a single potential
    pub fn get(&self, ipot: usize) -> Option<&AtomCharge> {
        self.potentials.get(&ipot)
    }

    /// The absorbing atom, if present
    pub fn absorber(&self) -> Option<&AtomCharge> {
        self.get(0)
    }

    /// Number of potentials in the table
    pub fn len(&self) -> usize {
        self.potentials.len()
    }

    /// True if the table is empty
    pub fn is_empty(&self) -> bool {
        self.potentials.is_empty()
    }
}

impl std::fmt::Display for ChargeTransfer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Charge Transfer")?;
        for (ipot, charge) in &self.potentials {
            writeln!(f)?;
            if *ipot == 0 {
                writeln!(f, "absorbing atom")?;
            }
            writeln!(f, "{} (ipot {ipot})", charge.symbol)?;
            for (orbital, value) in &charge.orbitals {
                writeln!(f, "  {orbital:<4}{:>13}", value.sci(5, 2))?;
            }
            writeln!(f, "  tot {:>13}", charge.total.sci(5, 2))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_table() {
        let orbitals = OrbitalType::ALL.into_iter().zip([0.5, 0.25, 7.0, 0.0]).collect();
        let table = ChargeTransfer {
            potentials: BTreeMap::from([(
                0,
                AtomCharge {
                    symbol: "Co".to_string(),
                    orbitals,
                    total: -0.25,
                },
            )]),
        };

        let text = table.to_string();
        assert!(text.starts_with("Charge Transfer\n\nabsorbing atom\nCo (ipot 0)\n"));
        assert!(text.contains("  s     5.00000e-01\n"));
        assert!(text.contains("  tot  -2.50000e-01\n"));
        assert_eq!(table.absorber().unwrap().get(OrbitalType::D), Some(7.0));
    }
}
