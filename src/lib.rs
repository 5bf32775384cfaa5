//! `chemtools` is a small toolkit of readers for electronic structure outputs
//!
//! The readers are split into crates by the code that produced the files:
//!
//! | Crate         | Files                                                  |
//! | ------------- | ------------------------------------------------------ |
//! | [electronic]  | shared types: [Spin](electronic::Spin), [Dos](electronic::Dos), orbitals |
//! | `feff`        | `feff.inp` header/tags/potentials, `ldosNN.dat`, `xmu.dat` |
//! | `lobster`     | `COHPCAR`/`COOPCAR`, `ICOHPLIST`/`ICOOPLIST`, `DOSCAR` |
//!
//! The FEFF and LOBSTER readers are behind the `feff` and `lobster` features
//! respectively, or `full` for everything.
#![deny(missing_docs, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

// Re-exports of toolkit crates.
#[doc(inline)]
pub use chemtools_electronic as electronic;

#[doc(inline)]
pub use chemtools_utils as utils;

#[cfg(feature = "feff")]
#[cfg_attr(docsrs, doc(cfg(feature = "feff")))]
#[doc(inline)]
pub use chemtools_feff as feff;

#[cfg(feature = "lobster")]
#[cfg_attr(docsrs, doc(cfg(feature = "lobster")))]
#[doc(inline)]
pub use chemtools_lobster as lobster;
