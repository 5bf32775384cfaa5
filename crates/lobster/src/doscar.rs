//! Reader for the LOBSTER `DOSCAR.lobster` file
//!
//! The file follows the VASP DOSCAR layout. The first line starts with the
//! number of atoms and is followed by four lines that are not needed here.
//! Then comes one block for the total density of states and one block per
//! atom, each opened by a header line:
//!
//! ```text
//!      7.50000000    -11.25000000     6      0.00000000       1.00000000; 2s 2p_y 2p_z 2p_x
//! ```
//!
//! The total block has the columns `E dos idos` without spin polarisation and
//! `E dos(up) dos(down) idos(up) idos(down)` with it. Atom blocks have one
//! column per orbital label in the header, or an (up, down) pair per orbital
//! when spin polarised.

// crate modules
use crate::error::{Error, Result};
use crate::parsers::{dos_block_header, DosBlockHeader};
use crate::reader::LineReader;

// chemtools modules
use chemtools_electronic::{CompleteDos, Densities, Dos, Site, SitePdos, Spin};
use chemtools_utils::f;
use chemtools_utils::parsers::{nth_usize, row_of_f64};

// external crates
use log::{debug, info, trace};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Default file name written by LOBSTER
pub const DOSCAR: &str = "DOSCAR.lobster";

/// Number of header lines after the atom count
const SKIPPED_HEADER_LINES: usize = 4;

/// Densities for each orbital label of a single atom
pub type AtomPdos = BTreeMap<String, Densities>;

/// Total and projected densities of states from LOBSTER
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doscar {
    /// Total density of states
    pub tdos: Dos,
    /// Integrated total density of states
    pub itdensities: Densities,
    /// Projections for every atom in file order, keyed by orbital label
    pub pdos: Vec<AtomPdos>,
}

impl Doscar {
    /// Read a `DOSCAR.lobster` file
    ///
    /// ```rust, no_run
    /// # use chemtools_lobster::Doscar;
    /// let doscar = Doscar::from_file("path/to/DOSCAR.lobster").unwrap();
    /// let f_2s = &doscar.pdos[0]["2s"];
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        info!("Reading {}", path.as_ref().display());
        let file = File::open(path.as_ref())?;
        Self::read(LineReader::new(BufReader::new(file)))
    }

    /// Parse the full text of a `DOSCAR.lobster` file
    pub fn parse(content: &str) -> Result<Self> {
        Self::read(LineReader::new(content.as_bytes()))
    }

    fn read<R: BufRead>(mut reader: LineReader<R>) -> Result<Self> {
        let n_atoms = nth_usize(reader.next_line()?, 0)?;
        reader.skip_lines(SKIPPED_HEADER_LINES)?;
        debug!("Atoms       = {n_atoms}");

        // total block decides spin polarisation for everything after it
        let (header, rows) = read_block(&mut reader)?;
        let spin_polarized = match rows[0].len() {
            3 => false,
            5 => true,
            n => return Err(Error::UnknownSpinPolarization(n)),
        };
        let expected = if spin_polarized { 5 } else { 3 };
        check_columns(&rows, expected, reader.line_number())?;

        let energies = column(&rows, 0);
        let spins = Spin::channels(spin_polarized);
        let n_spin = spins.len();

        let mut tdensities = Densities::new();
        let mut itdensities = Densities::new();
        for (s, spin) in spins.iter().enumerate() {
            tdensities.insert(*spin, column(&rows, 1 + s));
            itdensities.insert(*spin, column(&rows, 1 + n_spin + s));
        }

        debug!("Fermi level = {}", header.efermi);
        debug!("Energies    = {}", energies.len());
        debug!("Spin        = {spin_polarized}");
        let tdos = Dos::new(header.efermi, energies, tdensities)?;

        let mut pdos = Vec::new();
        for atom in 0..n_atoms {
            let (header, rows) = read_block(&mut reader)?;
            if header.n_energies != tdos.energies.len() {
                return Err(Error::UnexpectedLength {
                    context: f!("atom {} block", atom + 1),
                    expected: tdos.energies.len(),
                    found: header.n_energies,
                });
            }

            let expected = 1 + header.orbitals.len() * n_spin;
            check_columns(&rows, expected, reader.line_number())?;

            let mut atom_pdos = AtomPdos::new();
            for (o, orbital) in header.orbitals.iter().enumerate() {
                let densities: Densities = spins
                    .iter()
                    .enumerate()
                    .map(|(s, spin)| (*spin, column(&rows, 1 + o * n_spin + s)))
                    .collect();
                atom_pdos.insert(orbital.clone(), densities);
            }
            trace!("Atom {} orbitals = {:?}", atom + 1, header.orbitals);
            pdos.push(atom_pdos);
        }

        Ok(Self {
            tdos,
            itdensities,
            pdos,
        })
    }

    /// Fermi energy (eV)
    pub fn efermi(&self) -> f64 {
        self.tdos.efermi
    }

    /// Energy grid (eV)
    pub fn energies(&self) -> &[f64] {
        &self.tdos.energies
    }

    /// Total densities for each spin channel
    pub fn tdensities(&self) -> &Densities {
        &self.tdos.densities
    }

    /// Check for spin polarised data
    pub fn is_spin_polarized(&self) -> bool {
        self.tdos.is_spin_polarized()
    }

    /// Number of atoms with projections
    pub fn n_atoms(&self) -> usize {
        self.pdos.len()
    }

    /// Attach a structure to the projections
    ///
    /// The DOSCAR does not record the structure, so the sites have to come
    /// from elsewhere in the same order as the atom blocks.
    pub fn complete_dos(&self, sites: Vec<Site>) -> Result<CompleteDos<String>> {
        if sites.len() != self.pdos.len() {
            return Err(chemtools_electronic::Error::SiteCountMismatch {
                expected: self.pdos.len(),
                found: sites.len(),
            }
            .into());
        }

        let pdos = sites
            .into_iter()
            .zip(&self.pdos)
            .map(|(site, orbitals)| SitePdos {
                site,
                orbitals: orbitals.clone(),
            })
            .collect();

        Ok(CompleteDos::new(self.tdos.clone(), pdos)?)
    }

    /// Serialise everything to JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Rebuild from JSON written by [Doscar::to_json]
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Read a block header and its data rows
fn read_block<R: BufRead>(reader: &mut LineReader<R>) -> Result<(DosBlockHeader, Vec<Vec<f64>>)> {
    let header = dos_block_header(reader.next_line()?)?.1;
    trace!(
        "Block {} to {} eV, {} points",
        header.emin,
        header.emax,
        header.n_energies
    );

    let mut rows = Vec::new();
    for _ in 0..header.n_energies {
        rows.push(row_of_f64(reader.next_line()?)?);
    }

    if rows.is_empty() {
        return Err(Error::NoData(f!("block ending on line {}", reader.line_number())));
    }

    Ok((header, rows))
}

/// Every row of a block must have the same number of columns
fn check_columns(rows: &[Vec<f64>], expected: usize, last_line: usize) -> Result<()> {
    let first_line = last_line + 1 - rows.len();
    for (idx, row) in rows.iter().enumerate() {
        if row.len() != expected {
            return Err(Error::UnexpectedColumns {
                line: first_line + idx,
                expected,
                found: row.len(),
            });
        }
    }
    Ok(())
}

/// Copy a column out of the row-major block
fn column(rows: &[Vec<f64>], idx: usize) -> Vec<f64> {
    rows.iter().map(|row| row[idx]).collect()
}
