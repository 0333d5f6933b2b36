use thiserror::Error;

use crate::wad;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{lump} missing")]
    MissingLump { lump: &'static str },

    #[error("{lump}: expected a multiple of {record_size} bytes, got {size}")]
    MalformedLump {
        lump: &'static str,
        size: usize,
        record_size: usize,
    },

    #[error(transparent)]
    Wad {
        #[from]
        source: wad::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
