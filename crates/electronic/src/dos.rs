// crate modules
use crate::error::{Error, Result};
use crate::site::Site;
use crate::spin::Spin;

// chemtools modules
use chemtools_utils::{f, ValueExt};

// external crates
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Density values for each spin channel
pub type Densities = BTreeMap<Spin, Vec<f64>>;

/// Element-wise sum of `other` into `total`
///
/// Channels missing from `total` are created. Arrays are assumed to share the
/// same energy grid, any excess values in the longer array are ignored.
///
/// ```rust
/// # use chemtools_electronic::{add_densities, Densities, Spin};
/// let mut total = Densities::new();
/// let partial = Densities::from([(Spin::Up, vec![0.5, 1.0])]);
///
/// add_densities(&mut total, &partial);
/// add_densities(&mut total, &partial);
/// assert_eq!(total[&Spin::Up], vec![1.0, 2.0]);
/// ```
pub fn add_densities(total: &mut Densities, other: &Densities) {
    for (spin, values) in other {
        let target = total
            .entry(*spin)
            .or_insert_with(|| vec![0.0; values.len()]);
        for (t, v) in target.iter_mut().zip(values) {
            *t += v;
        }
    }
}

/// Check every channel has one value per energy
fn check_lengths(densities: &Densities, expected: usize, context: &str) -> Result<()> {
    for (spin, values) in densities {
        if values.len() != expected {
            return Err(Error::InconsistentLength {
                context: f!("{context} ({spin})"),
                expected,
                found: values.len(),
            });
        }
    }
    Ok(())
}

/// Density of states on a single energy grid
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Dos {
    /// Fermi energy (eV)
    pub efermi: f64,
    /// Energy grid (eV)
    pub energies: Vec<f64>,
    /// Densities per spin channel
    pub densities: Densities,
}

impl Dos {
    /// Create a new [Dos], checking each channel matches the energy grid
    ///
    /// ```rust
    /// # use chemtools_electronic::{Densities, Dos, Spin};
    /// let densities = Densities::from([(Spin::Up, vec![0.0, 0.8])]);
    /// assert!(Dos::new(0.0, vec![-1.0, 0.0], densities.clone()).is_ok());
    /// assert!(Dos::new(0.0, vec![-1.0], densities).is_err());
    /// ```
    pub fn new(efermi: f64, energies: Vec<f64>, densities: Densities) -> Result<Self> {
        check_lengths(&densities, energies.len(), "total dos")?;
        Ok(Self {
            efermi,
            energies,
            densities,
        })
    }

    /// True if there is data for the [Spin::Down] channel
    pub fn is_spin_polarized(&self) -> bool {
        self.densities.contains_key(&Spin::Down)
    }

    /// Densities for one spin channel, or the sum of all channels
    ///
    /// ```rust
    /// # use chemtools_electronic::{Densities, Dos, Spin};
    /// let densities = Densities::from([
    ///     (Spin::Up, vec![0.5, 0.25]),
    ///     (Spin::Down, vec![0.5, 0.5]),
    /// ]);
    /// let dos = Dos::new(0.0, vec![-1.0, 0.0], densities).unwrap();
    ///
    /// assert_eq!(dos.get_densities(Some(Spin::Down)), Some(vec![0.5, 0.5]));
    /// assert_eq!(dos.get_densities(None), Some(vec![1.0, 0.75]));
    /// ```
    pub fn get_densities(&self, spin: Option<Spin>) -> Option<Vec<f64>> {
        match spin {
            Some(spin) => self.densities.get(&spin).cloned(),
            None if self.densities.is_empty() => None,
            None => {
                let mut total = Densities::new();
                for values in self.densities.values() {
                    add_densities(&mut total, &Densities::from([(Spin::Up, values.clone())]));
                }
                total.remove(&Spin::Up)
            }
        }
    }

    /// Lowest and highest energies on the grid
    pub fn energy_range(&self) -> Option<(f64, f64)> {
        Some((*self.energies.first()?, *self.energies.last()?))
    }
}

impl std::fmt::Display for Dos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Density of states")?;
        writeln!(f, "  Fermi energy  {} eV", self.efermi.sci(5, 2))?;
        writeln!(f, "  Energy points {}", self.energies.len())?;
        if let Some((emin, emax)) = self.energy_range() {
            writeln!(f, "  Energy range  {} to {} eV", emin.sci(5, 2), emax.sci(5, 2))?;
        }
        write!(f, "  Spin channels {}", self.densities.len())
    }
}

/// Projected densities for a single site
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SitePdos<O: Ord> {
    /// The site these projections belong to
    pub site: Site,
    /// Projected densities keyed by orbital
    pub orbitals: BTreeMap<O, Densities>,
}

/// Total density of states with site and orbital projections
///
/// The orbital key is generic so that each code can keep its own resolution:
/// FEFF projects onto [OrbitalType](crate::OrbitalType), LOBSTER keeps the
/// orbital labels from the file such as `2p_y`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompleteDos<O: Ord> {
    /// Total density of states
    pub total: Dos,
    /// Projections for every site, in structure order
    pub pdos: Vec<SitePdos<O>>,
}

impl<O: Ord + Clone + std::fmt::Debug> CompleteDos<O> {
    /// Create a new [CompleteDos], checking all projections against the grid
    pub fn new(total: Dos, pdos: Vec<SitePdos<O>>) -> Result<Self> {
        let n = total.energies.len();
        for (idx, site) in pdos.iter().enumerate() {
            for (orbital, densities) in &site.orbitals {
                check_lengths(densities, n, &f!("site {idx} {orbital:?}"))?;
            }
        }
        Ok(Self { total, pdos })
    }

    /// Fermi energy (eV)
    pub fn efermi(&self) -> f64 {
        self.total.efermi
    }

    /// Energy grid (eV)
    pub fn energies(&self) -> &[f64] {
        &self.total.energies
    }

    /// Number of sites with projections
    pub fn n_sites(&self) -> usize {
        self.pdos.len()
    }

    /// Total density of states of a single site, summed over its orbitals
    pub fn site_dos(&self, index: usize) -> Result<Dos> {
        let site = self.pdos.get(index).ok_or(Error::SiteOutOfRange {
            index,
            n_sites: self.pdos.len(),
        })?;

        let mut densities = Densities::new();
        for orbital_densities in site.orbitals.values() {
            add_densities(&mut densities, orbital_densities);
        }

        Ok(Dos {
            efermi: self.total.efermi,
            energies: self.total.energies.clone(),
            densities,
        })
    }

    /// Density of states projected onto one orbital, summed over all sites
    ///
    /// Sites without the orbital simply do not contribute. Returns `None` if
    /// no site has it.
    pub fn orbital_dos(&self, orbital: &O) -> Option<Dos> {
        let mut densities = Densities::new();
        for site in &self.pdos {
            if let Some(orbital_densities) = site.orbitals.get(orbital) {
                add_densities(&mut densities, orbital_densities);
            }
        }

        if densities.is_empty() {
            return None;
        }

        Some(Dos {
            efermi: self.total.efermi,
            energies: self.total.energies.clone(),
            densities,
        })
    }

    /// Density of states for every orbital key, summed over all sites
    ///
    /// For FEFF projections this is the usual s/p/d/f decomposition.
    pub fn spd_dos(&self) -> BTreeMap<O, Dos> {
        let mut keys: Vec<&O> = self.pdos.iter().flat_map(|s| s.orbitals.keys()).collect();
        keys.sort();
        keys.dedup();

        keys.into_iter()
            .filter_map(|key| Some((key.clone(), self.orbital_dos(key)?)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OrbitalType;

    fn example() -> CompleteDos<OrbitalType> {
        let total = Dos::new(
            -1.0,
            vec![-2.0, -1.0, 0.0],
            Densities::from([(Spin::Up, vec![0.75, 1.5, 1.75])]),
        )
        .unwrap();

        let first = SitePdos {
            site: Site::new("Co", [0.0, 0.0, 0.0]),
            orbitals: BTreeMap::from([
                (OrbitalType::S, Densities::from([(Spin::Up, vec![0.25, 0.5, 0.25])])),
                (OrbitalType::D, Densities::from([(Spin::Up, vec![0.25, 0.5, 1.0])])),
            ]),
        };
        let second = SitePdos {
            site: Site::new("O", [0.5, 0.5, 0.5]),
            orbitals: BTreeMap::from([(
                OrbitalType::S,
                Densities::from([(Spin::Up, vec![0.25, 0.5, 0.5])]),
            )]),
        };

        CompleteDos::new(total, vec![first, second]).unwrap()
    }

    #[test]
    fn site_dos_sums_orbitals() {
        let dos = example().site_dos(0).unwrap();
        assert_eq!(dos.densities[&Spin::Up], vec![0.5, 1.0, 1.25]);
        assert_eq!(dos.efermi, -1.0);
        assert!(example().site_dos(2).is_err());
    }

    #[test]
    fn spd_dos_sums_sites() {
        let spd = example().spd_dos();
        assert_eq!(spd.len(), 2);
        assert_eq!(spd[&OrbitalType::S].densities[&Spin::Up], vec![0.5, 1.0, 0.75]);
        assert_eq!(spd[&OrbitalType::D].densities[&Spin::Up], vec![0.25, 0.5, 1.0]);
        assert!(example().orbital_dos(&OrbitalType::F).is_none());
    }

    #[test]
    fn projections_must_match_grid() {
        let total = Dos::new(0.0, vec![0.0, 1.0], Densities::new()).unwrap();
        let site = SitePdos {
            site: Site::default(),
            orbitals: BTreeMap::from([(
                OrbitalType::P,
                Densities::from([(Spin::Up, vec![1.0])]),
            )]),
        };
        assert!(CompleteDos::new(total, vec![site]).is_err());
    }

    #[test]
    fn summary_display() {
        let summary = example().total.to_string();
        assert!(summary.contains("Fermi energy  -1.00000e+00 eV"));
        assert!(summary.contains("Energy points 3"));
    }
}
