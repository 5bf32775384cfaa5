//! Readers for FEFF output files
//!
//! FEFF output files do not stand on their own. Which site uses which
//! potential, and which atom absorbs, is only recorded in the `feff.inp` input
//! file, so every reader here takes the input file alongside the output.
//!
//! | Reader        | Description                                             |
//! | ------------- | ------------------------------------------------------- |
//! | [FeffInput]   | [Header], [Tags] and [Potentials] from `feff.inp`       |
//! | [Ldos]        | site and orbital projected DOS from `ldosNN.dat` files  |
//! | [Xmu]         | XANES/EXAFS absorption spectrum from `xmu.dat`          |
//!
//! The charge transfer table of the ldos headers is also available on its
//! own with [charge_transfer_from_file].
//!
//! # Quickstart example
//!
//! ```rust, no_run
//! # use chemtools_feff::{read_ldos, Xmu};
//! // Read feff.inp and every ldosNN.dat file in a run directory
//! let ldos = read_ldos("/path/to/run").unwrap();
//! let total = ldos.complete_dos.total.get_densities(None);
//!
//! // Read the absorption spectrum
//! let xmu = Xmu::from_file("/path/to/run/xmu.dat", "/path/to/run/feff.inp").unwrap();
//! println!("{} {} edge", xmu.material_formula(), xmu.edge().unwrap_or("?"));
//! ```

mod charge;
mod error;
mod input;
mod ldos;
mod parsers;
mod xmu;

// flatten public API and inline the documentation
#[doc(inline)]
pub use error::{Error, Result};

#[doc(inline)]
pub use input::{FeffInput, Header, Potential, Potentials, Tags};

#[doc(inline)]
pub use charge::{AtomCharge, ChargeTransfer};

#[doc(inline)]
pub use ldos::{
    charge_transfer_from_file, ldos_path, read_ldos, Ldos, LdosFile, LdosReader, DEFAULT_PREFIX,
};

#[doc(inline)]
pub use xmu::{parse_xmu_table, Calculation, Xmu, XmuRow, NO_FORMULA};
