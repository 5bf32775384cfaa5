//! Reader for the FEFF `ldosNN.dat` files
//!
//! FEFF writes one file per potential, numbered by the potential index with
//! two digits, e.g. `ldos00.dat`, `ldos01.dat`, ... The first few comment
//! lines carry the Fermi level and the charge transfer:
//!
//! ```text
//! # Fermi level (eV):    -6.213
//! # Charge transfer (e):    -0.252
//! #   Electron counts for each orbital momentum:
//! #      s      0.462
//! #      p      0.684
//! #      d      7.616
//! #      f      0.000
//! #   E(eV)    s-dos    p-dos    d-dos    f-dos
//!   -30.000   0.0000   0.0000   0.0000   0.0000
//! ```
//!
//! Each site of the structure takes the densities of its potential, and the
//! total density is the sum over every site and orbital character. FEFF
//! ldos output carries no spin information, so everything lives on
//! [Spin::Up].

// crate modules
use crate::charge::{AtomCharge, ChargeTransfer};
use crate::error::{Error, Result};
use crate::input::FeffInput;

// chemtools modules
use chemtools_electronic::{add_densities, CompleteDos, Densities, Dos, OrbitalType, SitePdos, Spin};
use chemtools_utils::f;
use chemtools_utils::parsers::{is_comment_or_blank, nth_f64, row_of_f64};

// external crates
use log::{debug, info, trace, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Default prefix of the ldos file names
pub const DEFAULT_PREFIX: &str = "ldos";

/// Minimum number of columns in a data row: energy, s, p, d, f
const MIN_COLUMNS: usize = 5;

/// Full path to the ldos file of a potential, e.g. `ldos` + 1 => `ldos01.dat`
///
/// ```rust
/// # use chemtools_feff::ldos_path;
/// # use std::path::PathBuf;
/// assert_eq!(ldos_path("run/ldos", 1), PathBuf::from("run/ldos01.dat"));
/// assert_eq!(ldos_path("ldos", 12), PathBuf::from("ldos12.dat"));
/// ```
pub fn ldos_path<P: AsRef<Path>>(prefix: P, ipot: usize) -> PathBuf {
    let mut name = OsString::from(prefix.as_ref().as_os_str());
    name.push(f!("{ipot:02}.dat"));
    PathBuf::from(name)
}

/// Contents of a single `ldosNN.dat` file
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LdosFile {
    /// Fermi level (eV)
    pub efermi: f64,
    /// Net charge transfer
    pub charge_transfer: f64,
    /// Electron counts for each orbital character
    pub electron_counts: BTreeMap<OrbitalType, f64>,
    /// Energy grid (eV)
    pub energies: Vec<f64>,
    /// Densities for each orbital character
    pub densities: BTreeMap<OrbitalType, Vec<f64>>,
}

impl LdosFile {
    /// Read a single ldos file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        trace!("Reading {}", path.as_ref().display());
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::parse(&content, &path.as_ref().display().to_string())
    }

    /// Parse the text of a single ldos file, `name` is used for errors
    pub fn parse(content: &str, name: &str) -> Result<Self> {
        let lines: Vec<&str> = content.lines().collect();

        let efermi = nth_f64(header_line(&lines, 0, name)?, 4)?;
        let charge_transfer = nth_f64(header_line(&lines, 1, name)?, 4)?;

        let mut electron_counts = BTreeMap::new();
        for (idx, orbital) in OrbitalType::ALL.into_iter().enumerate() {
            let line = header_line(&lines, 3 + idx, name)?;
            electron_counts.insert(orbital, nth_f64(line, 2)?);
        }

        let mut energies = Vec::new();
        let mut densities: BTreeMap<OrbitalType, Vec<f64>> = OrbitalType::ALL
            .into_iter()
            .map(|orbital| (orbital, Vec::new()))
            .collect();

        for (idx, line) in lines.iter().enumerate() {
            if is_comment_or_blank(line) {
                continue;
            }

            let row = row_of_f64(line)?;
            if row.len() < MIN_COLUMNS {
                return Err(Error::UnexpectedColumns {
                    line: idx + 1,
                    expected: MIN_COLUMNS,
                    found: row.len(),
                });
            }

            energies.push(row[0]);
            for (column, orbital) in OrbitalType::ALL.into_iter().enumerate() {
                if let Some(values) = densities.get_mut(&orbital) {
                    values.push(row[column + 1]);
                }
            }
        }

        if energies.is_empty() {
            return Err(Error::NoData(name.to_string()));
        }

        Ok(Self {
            efermi,
            charge_transfer,
            electron_counts,
            energies,
            densities,
        })
    }

    /// Charge transfer summary for the potential this file belongs to
    pub fn atom_charge(&self, symbol: &str) -> AtomCharge {
        AtomCharge {
            symbol: symbol.to_string(),
            orbitals: self.electron_counts.clone(),
            total: self.charge_transfer,
        }
    }
}

/// Line of the comment header, which must exist
fn header_line<'a>(lines: &[&'a str], idx: usize, name: &str) -> Result<&'a str> {
    lines.get(idx).copied().ok_or_else(|| Error::TruncatedHeader {
        file: name.to_string(),
        line: idx + 1,
    })
}

/// Site and orbital projected densities of states from a FEFF run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ldos {
    /// Total and projected densities of states
    pub complete_dos: CompleteDos<OrbitalType>,
    /// Charge transfer for every potential
    pub charge_transfer: ChargeTransfer,
}

impl Ldos {
    /// Read the ldos files of a run
    ///
    /// `feff_inp` provides the structure and potentials, `prefix` is the path
    /// to the ldos files without the two digit potential index, i.e.
    /// `path/to/ldos` for `path/to/ldos00.dat`, `path/to/ldos01.dat`, etc...
    ///
    /// ```rust, no_run
    /// # use chemtools_feff::Ldos;
    /// let ldos = Ldos::from_file("path/to/feff.inp", "path/to/ldos").unwrap();
    /// println!("{}", ldos.charge_transfer);
    /// ```
    pub fn from_file<P: AsRef<Path>, Q: AsRef<Path>>(feff_inp: P, prefix: Q) -> Result<Self> {
        let input = FeffInput::from_file(feff_inp)?;
        let tables = read_tables(&input, prefix.as_ref())?;
        Self::from_tables(&input, &tables)
    }

    /// Assemble from already parsed ldos files keyed by potential index
    pub fn from_tables(input: &FeffInput, tables: &BTreeMap<usize, LdosFile>) -> Result<Self> {
        let efermi = tables.get(&0).ok_or(Error::MissingPotential(0))?.efermi;
        let energies = tables
            .get(&1)
            .ok_or(Error::MissingPotential(1))?
            .energies
            .clone();
        debug!("Fermi level = {efermi}");
        debug!("Energies    = {}", energies.len());

        for (ipot, table) in tables {
            if table.energies.len() != energies.len() {
                return Err(Error::UnexpectedLength {
                    context: f!("ldos file for potential {ipot}"),
                    expected: energies.len(),
                    found: table.energies.len(),
                });
            }
        }

        let symbol_to_ipot = input.potentials.symbol_to_ipot();
        if input.header.sites.is_empty() {
            warn!("No sites in the feff.inp header, the total dos will be empty");
        }

        let mut pdos = Vec::with_capacity(input.header.num_sites());
        let mut total = Densities::from([(Spin::Up, vec![0.0; energies.len()])]);

        for site in &input.header.sites {
            let ipot = *symbol_to_ipot
                .get(&site.species)
                .ok_or_else(|| Error::UnknownSpecies(site.species.clone()))?;
            let table = tables.get(&ipot).ok_or(Error::MissingPotential(ipot))?;

            let orbitals: BTreeMap<OrbitalType, Densities> = table
                .densities
                .iter()
                .map(|(orbital, values)| (*orbital, Densities::from([(Spin::Up, values.clone())])))
                .collect();

            for densities in orbitals.values() {
                add_densities(&mut total, densities);
            }

            pdos.push(SitePdos {
                site: site.clone(),
                orbitals,
            });
        }

        let total = Dos::new(efermi, energies, total)?;
        let complete_dos = CompleteDos::new(total, pdos)?;
        let charge_transfer = charge_transfer_from_tables(input, tables)?;

        Ok(Self {
            complete_dos,
            charge_transfer,
        })
    }

    /// Serialise everything to JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Rebuild from JSON written by [Ldos::to_json]
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Read the charge transfer of every potential
///
/// Only the comment header of each ldos file is needed, but the files are
/// small so they are read in full.
///
/// ```rust, no_run
/// # use chemtools_feff::charge_transfer_from_file;
/// let charges = charge_transfer_from_file("path/to/feff.inp", "path/to/ldos").unwrap();
/// let absorber = charges.absorber().unwrap();
/// println!("{} {}", absorber.symbol, absorber.total);
/// ```
pub fn charge_transfer_from_file<P: AsRef<Path>, Q: AsRef<Path>>(
    feff_inp: P,
    prefix: Q,
) -> Result<ChargeTransfer> {
    let input = FeffInput::from_file(feff_inp)?;
    let tables = read_tables(&input, prefix.as_ref())?;
    charge_transfer_from_tables(&input, &tables)
}

/// Read every ldos file listed in the potentials
fn read_tables(input: &FeffInput, prefix: &Path) -> Result<BTreeMap<usize, LdosFile>> {
    let mut tables = BTreeMap::new();
    for ipot in input.potentials.indices() {
        let path = ldos_path(prefix, ipot);
        info!("Reading {}", path.display());
        tables.insert(ipot, LdosFile::from_file(&path)?);
    }
    Ok(tables)
}

/// Collect the charge transfer of every potential from parsed tables
fn charge_transfer_from_tables(
    input: &FeffInput,
    tables: &BTreeMap<usize, LdosFile>,
) -> Result<ChargeTransfer> {
    let mut potentials = BTreeMap::new();
    for (ipot, symbol) in input.potentials.ipot_to_symbol() {
        let table = tables.get(&ipot).ok_or(Error::MissingPotential(ipot))?;
        potentials.insert(ipot, table.atom_charge(&symbol));
    }
    Ok(ChargeTransfer { potentials })
}

/// Configurable reader for a directory holding a complete FEFF run
///
/// The convenience function [read_ldos] is preferred for the usual layout, but
/// this allows a different `feff.inp` name or ldos prefix.
///
/// ```rust, no_run
/// # use chemtools_feff::LdosReader;
/// let mut reader = LdosReader::new();
/// reader.set_prefix("ldos_run2");
/// let ldos = reader.parse("path/to/run").unwrap();
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LdosReader {
    input_name: String,
    prefix: String,
}

impl Default for LdosReader {
    fn default() -> Self {
        Self {
            input_name: "feff.inp".to_string(),
            prefix: DEFAULT_PREFIX.to_string(),
        }
    }
}

impl LdosReader {
    /// Reader for `feff.inp` and `ldosNN.dat` files
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the prefix of the ldos file names
    pub fn set_prefix(&mut self, prefix: &str) {
        self.prefix = prefix.to_string();
    }

    /// Set the name of the FEFF input file
    pub fn set_input_name(&mut self, name: &str) {
        self.input_name = name.to_string();
    }

    /// Read the run in `dir`
    pub fn parse<P: AsRef<Path>>(&self, dir: P) -> Result<Ldos> {
        let dir = dir.as_ref();
        Ldos::from_file(dir.join(&self.input_name), dir.join(&self.prefix))
    }
}

/// Read `feff.inp` and `ldosNN.dat` files from a run directory
pub fn read_ldos<P: AsRef<Path>>(dir: P) -> Result<Ldos> {
    LdosReader::new().parse(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LDOS: &str = "# Fermi level (eV):    -6.213
# Charge transfer (e):    -0.252
#   Electron counts for each orbital momentum:
#      s      0.462
#      p      0.684
#      d      7.616
#      f      0.000
#   E(eV)    s-dos    p-dos    d-dos    f-dos
  -30.000   0.0000   0.0000   0.0000   0.0000
  -29.900   0.0010   0.0020   0.0030   0.0000
";

    #[test]
    fn parse_single_file() {
        let file = LdosFile::parse(LDOS, "ldos01.dat").unwrap();
        assert_eq!(file.efermi, -6.213);
        assert_eq!(file.charge_transfer, -0.252);
        assert_eq!(file.electron_counts[&OrbitalType::D], 7.616);
        assert_eq!(file.energies, vec![-30.0, -29.9]);
        assert_eq!(file.densities[&OrbitalType::P], vec![0.0, 0.002]);
    }

    #[test]
    fn short_rows_are_rejected() {
        let text = LDOS.replace("-29.900   0.0010   0.0020   0.0030   0.0000", "-29.900 0.1");
        assert!(matches!(
            LdosFile::parse(&text, "ldos01.dat"),
            Err(Error::UnexpectedColumns {
                line: 10,
                expected: 5,
                found: 2
            })
        ));
    }

    const INPUT: &str = "TITLE sites: 2
* 1 Co     0.0     0.0     0.0
* 2 O      0.5     0.5     0.5

POTENTIALS
   0   27  Co
   1   27  Co
   2    8  O
END
";

    fn tables(text: &str) -> BTreeMap<usize, LdosFile> {
        (0..3)
            .map(|ipot| (ipot, LdosFile::parse(text, "ldos.dat").unwrap()))
            .collect()
    }

    #[test]
    fn assemble_tables() {
        let input = FeffInput::parse(INPUT).unwrap();
        let ldos = Ldos::from_tables(&input, &tables(LDOS)).unwrap();
        let total = &ldos.complete_dos.total.densities[&Spin::Up];
        assert_eq!(total.len(), 2);
        assert!((total[1] - 0.012).abs() < 1e-12);
    }

    #[test]
    fn tables_must_share_energies() {
        let input = FeffInput::parse(INPUT).unwrap();
        let mut tables = tables(LDOS);
        let short = LDOS.replace("  -29.900   0.0010   0.0020   0.0030   0.0000\n", "");
        tables.insert(2, LdosFile::parse(&short, "ldos02.dat").unwrap());

        assert!(matches!(
            Ldos::from_tables(&input, &tables),
            Err(Error::UnexpectedLength {
                expected: 2,
                found: 1,
                ..
            })
        ));
    }

    #[test]
    fn species_without_potential() {
        let input = FeffInput::parse(&INPUT.replace("* 2 O ", "* 2 Ni")).unwrap();
        assert!(matches!(
            Ldos::from_tables(&input, &tables(LDOS)),
            Err(Error::UnknownSpecies(species)) if species == "Ni"
        ));
    }

    #[test]
    fn truncated_header() {
        let text = "# Fermi level (eV):    -6.213\n";
        assert!(matches!(
            LdosFile::parse(text, "ldos01.dat"),
            Err(Error::TruncatedHeader { line: 2, .. })
        ));
    }
}
