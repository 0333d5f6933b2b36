use std::borrow::Cow;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::wad;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("{}: {desc}", path.display())]
    Malformed { path: PathBuf, desc: Cow<'static, str> },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn malformed(path: impl AsRef<Path>, desc: impl Into<Cow<'static, str>>) -> Self {
        Self::Malformed {
            path: path.as_ref().into(),
            desc: desc.into(),
        }
    }
}

/// Import this trait to add an extension methods to convert a [`std::io::Result`] into a
/// [`Result`].
pub trait ResultExt<T> {
    fn err_path(self, path: impl AsRef<Path>) -> wad::Result<T>;
}

impl<T> ResultExt<T> for io::Result<T> {
    /// Maps a [`std::io::Error`] into an [`Error::Io`] by adding a file path for
    /// context.
    fn err_path(self, path: impl AsRef<Path>) -> wad::Result<T> {
        self.map_err(|err| wad::Error::Io {
            path: path.as_ref().into(),
            source: err,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let err = Error::malformed("maps/test.wad", "not a WAD file");
        assert_eq!(err.to_string(), "maps/test.wad: not a WAD file");

        let err: wad::Result<()> =
            Err(io::Error::new(io::ErrorKind::NotFound, "gone")).err_path("doom.wad");
        assert_matches!(err, Err(Error::Io { ref path, .. }) if path == Path::new("doom.wad"));
    }
}
