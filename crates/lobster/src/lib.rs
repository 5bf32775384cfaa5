//! Readers for LOBSTER output files
//!
//! LOBSTER projects plane-wave calculations onto local orbitals for chemical
//! bonding analysis. The readers here cover the bonding and density of states
//! outputs:
//!
//! | Reader      | Files                                                    |
//! | ----------- | -------------------------------------------------------- |
//! | [Cohpcar]   | `COHPCAR.lobster`, `COOPCAR.lobster`                     |
//! | [Icohplist] | `ICOHPLIST.lobster`, `ICOOPLIST.lobster`                 |
//! | [Doscar]    | `DOSCAR.lobster`                                         |
//!
//! COOP files share the layout of their COHP counterparts, so the same reader
//! handles both with [CohpcarReader::set_coops] or [IcohplistReader::set_coops].
//!
//! # Quickstart example
//!
//! ```rust, no_run
//! # use chemtools_lobster::{read_cohpcar, read_icohplist, Doscar};
//! # use chemtools_electronic::Spin;
//! let cohpcar = read_cohpcar("/path/to/COHPCAR.lobster").unwrap();
//! let icohplist = read_icohplist("/path/to/ICOHPLIST.lobster").unwrap();
//!
//! for (label, bond) in &icohplist.icohplist {
//!     println!("{label} {} {}", bond.length, bond.icohp[&Spin::Up]);
//! }
//!
//! let doscar = Doscar::from_file("/path/to/DOSCAR.lobster").unwrap();
//! println!("{} atoms, spin polarised: {}", doscar.n_atoms(), doscar.is_spin_polarized());
//! ```

mod cohpcar;
mod doscar;
mod error;
mod icohplist;
mod parsers;
mod reader;

// flatten public API and inline the documentation
#[doc(inline)]
pub use error::{Error, Result};

#[doc(inline)]
pub use cohpcar::{
    read_cohpcar, read_coopcar, BondCohp, Cohpcar, CohpcarReader, OrbitalCohp, OrbitalResolved,
    AVERAGE, COHPCAR, COOPCAR,
};

#[doc(inline)]
pub use icohplist::{
    read_icohplist, read_icooplist, IcohpValue, Icohplist, IcohplistReader, ICOHPLIST, ICOOPLIST,
};

#[doc(inline)]
pub use doscar::{AtomPdos, Doscar, DOSCAR};
