//! Shared electronic structure types
//!
//! Every reader in the toolkit produces some combination of these:
//!
//! - [Spin] - spin channel labels, with [Spin::Up] as the default channel for
//!   data that carries no spin information
//! - [Orbital] / [OrbitalType] - real orbitals as LOBSTER labels them, and the
//!   s/p/d/f character FEFF reports
//! - [Dos] - total density of states on a single energy grid
//! - [CompleteDos] - a total [Dos] plus per-[Site] projected densities
//!
//! All types are plain values. They implement `serde` traits so that anything
//! parsed can be round-tripped through JSON for persistence or debugging, see
//! [to_json] and [from_json].

mod dos;
mod error;
mod orbital;
mod site;
mod spin;

#[doc(inline)]
pub use dos::{add_densities, CompleteDos, Densities, Dos, SitePdos};

#[doc(inline)]
pub use orbital::{Orbital, OrbitalType};

#[doc(inline)]
pub use site::Site;

#[doc(inline)]
pub use spin::Spin;

#[doc(inline)]
pub use error::{Error, Result};

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Serialise any parsed value to a JSON string
///
/// ```rust
/// # use chemtools_electronic::{to_json, from_json, Spin};
/// let json = to_json(&Spin::Down).unwrap();
/// assert_eq!(json, "\"Down\"");
/// assert_eq!(from_json::<Spin>(&json).unwrap(), Spin::Down);
/// ```
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

/// Deserialise a value previously written by [to_json]
pub fn from_json<T: DeserializeOwned>(json: &str) -> Result<T> {
    Ok(serde_json::from_str(json)?)
}

/// Read a JSON file written from any of the toolkit value types
///
/// The `path` takes anything that can be turned into a `Path` reference, such
/// as a [&str], [String], [Path], etc...
pub fn read_json<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T> {
    let reader = BufReader::new(File::open(path.as_ref())?);
    Ok(serde_json::from_reader(reader)?)
}
