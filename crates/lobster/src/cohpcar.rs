//! Reader for the LOBSTER `COHPCAR.lobster` and `COOPCAR.lobster` files
//!
//! Both files share one layout. The second line holds the parameters needed to
//! map the rest of the file:
//!
//! ```text
//! COHPCAR file for BiSe, created by LOBSTER
//!        12         1       241      -0.12468      11.92552       5.90043
//! Average
//! No.1:Bi1->Se7(2.882308829886294)
//! ...
//! ```
//!
//! That is the number of bonds plus one for the average, the number of spin
//! channels, the number of energies, the energy range and the Fermi level.
//! Bond labels follow the average line, one per bond, and the data table
//! comes last. Energies in the table are relative to the Fermi level.
//!
//! Each data row starts with the energy, then a COHP/ICOHP column pair for
//! the average and for every bond. Spin down columns follow all of the spin up
//! columns.

// crate modules
use crate::error::{Error, Result};
use crate::parsers::{bond_label, cohp_parameters, BondLabel};

// chemtools modules
use chemtools_electronic::{Densities, Orbital, Spin};
use chemtools_utils::parsers::{is_comment_or_blank, row_of_f64};

// external crates
use log::{debug, info, trace, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Default file name for COHPs
pub const COHPCAR: &str = "COHPCAR.lobster";

/// Default file name for COOPs
pub const COOPCAR: &str = "COOPCAR.lobster";

/// Key of the average COHP in [Cohpcar::cohp_data]
pub const AVERAGE: &str = "average";

/// COHP and ICOHP of a bond, or the average over all bonds
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BondCohp {
    /// Bond length (Å), none for the average
    pub length: Option<f64>,
    /// Zero-based site indices, none for the average
    pub sites: Option<(usize, usize)>,
    /// COHP for each spin channel
    ///
    /// This is none for a bond that only has orbital-resolved data.
    pub cohp: Option<Densities>,
    /// ICOHP for each spin channel, same as for the COHP
    pub icohp: Option<Densities>,
}

/// COHP and ICOHP between two orbitals of a bond
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrbitalCohp {
    /// Principal quantum number and orbital on each site
    pub orbitals: [(u32, Orbital); 2],
    /// COHP for each spin channel
    pub cohp: Densities,
    /// ICOHP for each spin channel
    pub icohp: Densities,
}

/// Orbital-resolved data of one bond, keyed by orbital pair label e.g. `4s-4px`
pub type OrbitalResolved = BTreeMap<String, OrbitalCohp>;

/// Crystal orbital Hamilton (or overlap) populations
///
/// ```rust, no_run
/// # use chemtools_lobster::{Cohpcar, AVERAGE};
/// # use chemtools_electronic::Spin;
/// let cohpcar = Cohpcar::from_file("path/to/COHPCAR.lobster").unwrap();
/// let average = &cohpcar.cohp_data[AVERAGE];
/// let bond = &cohpcar.cohp_data["Bi1-Se7"];
/// println!("{:?} {:?}", bond.length, bond.sites);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cohpcar {
    /// True for a COOPCAR
    pub are_coops: bool,
    /// True if there are two spin channels
    pub is_spin_polarized: bool,
    /// Fermi level (eV)
    pub efermi: f64,
    /// Lowest energy of the calculation (eV)
    pub emin: f64,
    /// Highest energy of the calculation (eV)
    pub emax: f64,
    /// Energies relative to the Fermi level (eV)
    pub energies: Vec<f64>,
    /// Average and total bond data keyed by bond label, e.g. `Bi1-Se7`
    pub cohp_data: BTreeMap<String, BondCohp>,
    /// Orbital-resolved data keyed by bond label, none if the file has none
    pub orb_res_cohp: Option<BTreeMap<String, OrbitalResolved>>,
}

impl Cohpcar {
    /// Read a COHPCAR file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        CohpcarReader::new().read_file(path)
    }

    /// Parse the text of a COHPCAR, or COOPCAR if `are_coops` is set
    pub fn parse(content: &str, are_coops: bool) -> Result<Self> {
        let mut lines = content.lines().enumerate();

        let mut header_line = |line: usize| {
            lines
                .next()
                .map(|(_, l)| l)
                .ok_or_else(|| Error::MissingHeader {
                    file: cohp_name(are_coops).to_string(),
                    line,
                })
        };

        let _title = header_line(1)?;
        let params = cohp_parameters(header_line(2)?)?.1;
        let _average = header_line(3)?;

        let spin_polarized = match params.n_spin {
            1 => false,
            2 => true,
            n => return Err(Error::UnexpectedSpinChannels(n)),
        };
        let n_bonds = params.n_entries.checked_sub(1).ok_or(Error::UnexpectedLength {
            context: "number of bonds".to_string(),
            expected: 1,
            found: 0,
        })?;
        debug!("Bonds       = {n_bonds}");
        debug!("Spin        = {spin_polarized}");
        debug!("Fermi level = {}", params.efermi);

        let mut labels = Vec::new();
        for n in 0..n_bonds {
            let line = header_line(4 + n)?;
            let label = bond_label(line)
                .map_err(|_| Error::InvalidBondLabel(line.trim().to_string()))?
                .1;
            trace!("{label:?}");
            labels.push(label);
        }

        // everything left is the table
        let spins = Spin::channels(spin_polarized);
        let n_columns = params
            .n_entries
            .checked_mul(2 * spins.len())
            .and_then(|n| n.checked_add(1))
            .ok_or_else(|| Error::UnexpectedLength {
                context: "bond entries".to_string(),
                expected: usize::MAX / (2 * spins.len()),
                found: params.n_entries,
            })?;

        // columns are only allocated once a row of the right width is seen
        let mut columns: Vec<Vec<f64>> = Vec::new();

        for (idx, line) in lines {
            if is_comment_or_blank(line) {
                continue;
            }
            let row = row_of_f64(line)?;
            if row.len() != n_columns {
                return Err(Error::UnexpectedColumns {
                    line: idx + 1,
                    expected: n_columns,
                    found: row.len(),
                });
            }
            if columns.is_empty() {
                columns = vec![Vec::new(); n_columns];
            }
            for (column, value) in columns.iter_mut().zip(row) {
                column.push(value);
            }
        }

        if columns.is_empty() {
            return Err(Error::NoData(cohp_name(are_coops).to_string()));
        }
        if columns[0].len() != params.n_energies {
            return Err(Error::UnexpectedLength {
                context: "energies".to_string(),
                expected: params.n_energies,
                found: columns[0].len(),
            });
        }

        let table = Table {
            columns,
            spins,
            n_entries: params.n_entries,
        };

        let mut cohp_data = BTreeMap::new();
        cohp_data.insert(
            AVERAGE.to_string(),
            BondCohp {
                cohp: Some(table.average(0)),
                icohp: Some(table.average(1)),
                ..Default::default()
            },
        );

        let mut orb_res_cohp: BTreeMap<String, OrbitalResolved> = BTreeMap::new();
        for (bond, label) in labels.iter().enumerate() {
            let key = label.label();
            let cohp = table.bond(bond, 0);
            let icohp = table.bond(bond, 1);

            match (label.orbitals(), label.orbital_label()) {
                (Some(orbitals), Some(orb_label)) => {
                    orb_res_cohp.entry(key).or_default().insert(
                        orb_label,
                        OrbitalCohp {
                            orbitals,
                            cohp,
                            icohp,
                        },
                    );
                }
                _ => {
                    cohp_data.insert(
                        key,
                        BondCohp {
                            cohp: Some(cohp),
                            icohp: Some(icohp),
                            ..bond_geometry(label)
                        },
                    );
                }
            }
        }

        // orbital-resolved bonds written without a total line
        for label in &labels {
            let key = label.label();
            if orb_res_cohp.contains_key(&key) && !cohp_data.contains_key(&key) {
                warn!("No total COHP for {key}, only orbital-resolved data");
                cohp_data.insert(key, bond_geometry(label));
            }
        }

        let orb_res_cohp = (!orb_res_cohp.is_empty()).then_some(orb_res_cohp);

        Ok(Self {
            are_coops,
            is_spin_polarized: spin_polarized,
            efermi: params.efermi,
            emin: params.emin,
            emax: params.emax,
            energies: table.columns[0].clone(),
            cohp_data,
            orb_res_cohp,
        })
    }

    /// Lowest and highest energy of the calculation (eV)
    pub fn energy_range(&self) -> (f64, f64) {
        (self.emin, self.emax)
    }

    /// Number of bonds, not counting the average
    pub fn n_bonds(&self) -> usize {
        self.cohp_data.len() - 1
    }

    /// Serialise everything to JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Rebuild from JSON written by [Cohpcar::to_json]
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

fn cohp_name(are_coops: bool) -> &'static str {
    if are_coops {
        COOPCAR
    } else {
        COHPCAR
    }
}

/// Length and sites of a bond without any data
fn bond_geometry(label: &BondLabel) -> BondCohp {
    BondCohp {
        length: Some(label.length),
        sites: Some(label.site_indices()),
        cohp: None,
        icohp: None,
    }
}

/// Column-major data table
struct Table {
    columns: Vec<Vec<f64>>,
    spins: &'static [Spin],
    n_entries: usize,
}

impl Table {
    /// Average COHP (offset 0) or ICOHP (offset 1) for every spin
    fn average(&self, offset: usize) -> Densities {
        self.spins
            .iter()
            .enumerate()
            .map(|(s, spin)| (*spin, self.columns[1 + offset + 2 * s * self.n_entries].clone()))
            .collect()
    }

    /// Bond COHP (offset 0) or ICOHP (offset 1) for every spin
    fn bond(&self, bond: usize, offset: usize) -> Densities {
        self.spins
            .iter()
            .enumerate()
            .map(|(s, spin)| {
                let idx = 2 * (bond + s * self.n_entries) + 3 + offset;
                (*spin, self.columns[idx].clone())
            })
            .collect()
    }
}

/// Configurable reader for COHPCAR and COOPCAR files
///
/// ```rust, no_run
/// # use chemtools_lobster::CohpcarReader;
/// let mut reader = CohpcarReader::new();
/// reader.set_coops(true);
/// let coopcar = reader.read_file("path/to/COOPCAR.lobster").unwrap();
/// assert!(coopcar.are_coops);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CohpcarReader {
    are_coops: bool,
}

impl CohpcarReader {
    /// Reader for COHPCAR files
    pub fn new() -> Self {
        Self::default()
    }

    /// Read COOPs rather than COHPs
    pub fn set_coops(&mut self, are_coops: bool) {
        self.are_coops = are_coops;
    }

    /// Default file name for the population type
    pub fn default_name(&self) -> &'static str {
        cohp_name(self.are_coops)
    }

    /// Read the file at `path`
    pub fn read_file<P: AsRef<Path>>(&self, path: P) -> Result<Cohpcar> {
        info!("Reading {}", path.as_ref().display());
        let content = std::fs::read_to_string(path.as_ref())?;
        Cohpcar::parse(&content, self.are_coops)
    }

    /// Read the file with the default name in `dir`
    pub fn read_dir<P: AsRef<Path>>(&self, dir: P) -> Result<Cohpcar> {
        self.read_file(dir.as_ref().join(self.default_name()))
    }
}

/// Read a COHPCAR file
pub fn read_cohpcar<P: AsRef<Path>>(path: P) -> Result<Cohpcar> {
    CohpcarReader::new().read_file(path)
}

/// Read a COOPCAR file
pub fn read_coopcar<P: AsRef<Path>>(path: P) -> Result<Cohpcar> {
    let mut reader = CohpcarReader::new();
    reader.set_coops(true);
    reader.read_file(path)
}
