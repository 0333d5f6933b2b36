//! Read WAD files into memory and pull out their data lumps.
//!
//! # Examples
//!
//! Load a custom level's lumps:
//!
//! ```no_run
//! use doom_sectors::wad::{LumpSource, WadFile};
//!
//! let wad = WadFile::load("killer.wad")?;
//! let level = wad.map("E1M1")?.expect("E1M1 missing");
//! assert!(level.contains_lump("THINGS"));
//! #
//! # Ok::<(), doom_sectors::wad::Error>(())
//! ```

pub use error::*;
pub use file::*;
pub use lump::*;
pub use name::*;

mod error;
mod file;
mod lump;
mod name;
