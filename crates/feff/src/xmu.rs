//! Reader for the FEFF `xmu.dat` file
//!
//! Depending on the run, `xmu.dat` contains XANES, EXAFS or NRIXS data as
//! functions of absolute energy, energy relative to the Fermi level and wave
//! number. All `#` lines are comments and every data row has six columns:
//!
//! ```text
//! #  omega    e    k    mu    mu0     chi     @#
//!   7708.686  -3.314  -0.933  1.5185E-03  1.7276E-03 -2.0910E-04
//! ```

// crate modules
use crate::error::{Error, Result};
use crate::input::{FeffInput, Header, Tags};

// chemtools modules
use chemtools_utils::parsers::{is_comment_or_blank, row_of_f64};
use chemtools_utils::{OptionExt, ValueExt};

// external crates
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Number of columns in every data row
const COLUMNS: usize = 6;

/// Returned by [Xmu::material_formula] when the header has no formula
pub const NO_FORMULA: &str = "No formula provided";

/// Type of FEFF calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Calculation {
    /// X-ray absorption near edge structure
    Xanes,
    /// Extended x-ray absorption fine structure
    Exafs,
}

impl std::fmt::Display for Calculation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Xanes => write!(f, "XANES"),
            Self::Exafs => write!(f, "EXAFS"),
        }
    }
}

/// Single row of `xmu.dat`
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct XmuRow {
    /// Absolute energy E (eV)
    pub energy: f64,
    /// Energy relative to the Fermi level, E - E_f (eV)
    pub relative_energy: f64,
    /// Wave number k (Å^-1)
    pub wavenumber: f64,
    /// Total absorption cross-section
    pub mu: f64,
    /// Embedded atomic background absorption
    pub mu0: f64,
    /// Normalised fine structure
    pub chi: f64,
}

impl From<[f64; COLUMNS]> for XmuRow {
    fn from(v: [f64; COLUMNS]) -> Self {
        Self {
            energy: v[0],
            relative_energy: v[1],
            wavenumber: v[2],
            mu: v[3],
            mu0: v[4],
            chi: v[5],
        }
    }
}

/// Absorption spectrum of the absorbing atom
///
/// Holds the cross-section table together with what `feff.inp` says about the
/// run, so the spectrum can be labelled without going back to the input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Xmu {
    /// Header of the input file
    pub header: Header,
    /// Card parameters of the input file
    pub parameters: Tags,
    /// Tag of the absorbing atom
    pub absorbing_atom: String,
    /// Cross-section table in file order
    pub data: Vec<XmuRow>,
}

impl Xmu {
    /// Read `xmu.dat` along with the `feff.inp` of the same run
    ///
    /// ```rust, no_run
    /// # use chemtools_feff::Xmu;
    /// let xmu = Xmu::from_file("path/to/xmu.dat", "path/to/feff.inp").unwrap();
    /// let (energies, mu) = (xmu.energies(), xmu.mu());
    /// ```
    pub fn from_file<P: AsRef<Path>, Q: AsRef<Path>>(path: P, feff_inp: Q) -> Result<Self> {
        let input = FeffInput::from_file(feff_inp)?;
        info!("Reading {}", path.as_ref().display());
        let content = std::fs::read_to_string(path.as_ref())?;
        let data = parse_xmu_table(&content, &path.as_ref().display().to_string())?;
        Self::new(input, data)
    }

    /// Combine an already parsed input file and table
    pub fn new(input: FeffInput, data: Vec<XmuRow>) -> Result<Self> {
        let absorbing_atom = input.potentials.absorbing_atom()?.to_string();
        debug!("Absorber    = {absorbing_atom}");
        debug!("Rows        = {}", data.len());
        Ok(Self {
            header: input.header,
            parameters: input.tags,
            absorbing_atom,
            data,
        })
    }

    fn column(&self, get: impl Fn(&XmuRow) -> f64) -> Vec<f64> {
        self.data.iter().map(get).collect()
    }

    /// Absolute energies (eV)
    pub fn energies(&self) -> Vec<f64> {
        self.column(|r| r.energy)
    }

    /// Energies with respect to the Fermi level, E - E_f (eV)
    pub fn relative_energies(&self) -> Vec<f64> {
        self.column(|r| r.relative_energy)
    }

    /// Wave number k = sqrt(E - E_f) (Å^-1)
    ///
    /// E_f is computed from electron gas theory at the average interstitial
    /// charge density.
    pub fn wavenumber(&self) -> Vec<f64> {
        self.column(|r| r.wavenumber)
    }

    /// Total absorption cross-section
    pub fn mu(&self) -> Vec<f64> {
        self.column(|r| r.mu)
    }

    /// Embedded atomic background absorption
    pub fn mu0(&self) -> Vec<f64> {
        self.column(|r| r.mu0)
    }

    /// Normalised fine structure
    pub fn chi(&self) -> Vec<f64> {
        self.column(|r| r.chi)
    }

    /// Source of the structure from the header
    pub fn source(&self) -> Option<&str> {
        self.header.source.as_deref()
    }

    /// Type of calculation, XANES if the card is present otherwise EXAFS
    pub fn calc(&self) -> Calculation {
        if self.parameters.contains("XANES") {
            Calculation::Xanes
        } else {
            Calculation::Exafs
        }
    }

    /// Chemical formula of the material, or [NO_FORMULA]
    pub fn material_formula(&self) -> String {
        self.header
            .formula()
            .unwrap_or_else(|| NO_FORMULA.to_string())
    }

    /// Absorption edge from the `EDGE` card
    pub fn edge(&self) -> Option<&str> {
        self.parameters.get("EDGE")
    }

    /// Serialise everything to JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Rebuild from JSON written by [Xmu::to_json]
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl std::fmt::Display for Xmu {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} spectrum", self.calc())?;
        writeln!(f, "  absorbing atom {}", self.absorbing_atom)?;
        writeln!(f, "  edge           {}", self.edge().display())?;
        writeln!(f, "  material       {}", self.material_formula())?;
        writeln!(f, "  source         {}", self.source().display())?;
        write!(f, "  points         {}", self.data.len())?;
        if let (Some(first), Some(last)) = (self.data.first(), self.data.last()) {
            write!(
                f,
                "\n  energy range   {} to {} eV",
                first.energy.sci(5, 2),
                last.energy.sci(5, 2)
            )?;
        }
        Ok(())
    }
}

/// Parse the six column cross-section table, `name` is used for errors
pub fn parse_xmu_table(content: &str, name: &str) -> Result<Vec<XmuRow>> {
    let mut data = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        if is_comment_or_blank(line) {
            continue;
        }

        let row = row_of_f64(line)?;
        let row: [f64; COLUMNS] = row
            .as_slice()
            .try_into()
            .map_err(|_| Error::UnexpectedColumns {
                line: idx + 1,
                expected: COLUMNS,
                found: row.len(),
            })?;
        data.push(XmuRow::from(row));
    }

    if data.is_empty() {
        return Err(Error::NoData(name.to_string()));
    }

    Ok(data)
}
