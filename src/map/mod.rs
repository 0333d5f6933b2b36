//! Decode DOOM map lumps and answer questions about where things are.
//!
//! # Examples
//!
//! Find the sector the player starts in:
//!
//! ```no_run
//! use doom_sectors::map::{DecodeConfig, Map};
//! use doom_sectors::wad::WadFile;
//!
//! let wad = WadFile::load("doom.wad")?;
//! let map = Map::load(&wad, "E1M1", &DecodeConfig::default())?.expect("E1M1 missing");
//! let sector = map.locate(f64::from(map.origin.x), f64::from(map.origin.y));
//! #
//! # Ok::<(), doom_sectors::map::Error>(())
//! ```

pub use config::*;
pub use error::*;
pub use linedef::*;
pub use locate::*;
#[allow(clippy::module_inception)]
pub use map::*;
pub use polygon::*;
pub use sector::*;
pub use sidedef::*;
pub use thing::*;
pub use vertex::*;

use cursor::Cursor;

mod config;
mod cursor;
mod error;
mod linedef;
mod locate;
#[allow(clippy::module_inception)]
mod map;
mod polygon;
mod sector;
mod sidedef;
mod thing;
mod vertex;
