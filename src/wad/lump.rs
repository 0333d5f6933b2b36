use std::collections::HashMap;
use std::hash::BuildHasher;
use std::ops::Deref;
use std::{fmt, slice, vec};

use bytes::Bytes;

/// A lump of data from a [`WadFile`].
///
/// Lumps are cheap to create and clone as they share the underlying buffer of their WAD file.
///
/// [`WadFile`]: crate::wad::WadFile
#[derive(Clone)]
pub struct Lump {
    name: String,
    data: Bytes,
}

impl Lump {
    /// Creates a lump from a name and a blob of data.
    pub fn new(name: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            data: data.into(),
        }
    }

    /// The lump name, for example `VERTEXES` or `THINGS`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The lump data, a binary blob.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// The size of the lump.
    ///
    /// This is equivalent to `self.data().len()`.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if this is a marker lump with no data.
    ///
    /// This is equivalent to `self.data.len() == 0`.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl fmt::Debug for Lump {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{} ({} bytes)", self.name, self.size())
    }
}

impl fmt::Display for Lump {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{}", self.name)
    }
}

/// A named block of [`Lump`]s, such as all of the lumps making up one map.
///
/// The block's name is the name of its marker lump (`E1M1`, `MAP07`, ...). The marker itself is not
/// part of the block.
#[derive(Clone, Debug)]
pub struct Lumps {
    name: String,
    lumps: Vec<Lump>,
}

impl Lumps {
    /// Creates a block of lumps.
    pub fn new(name: impl Into<String>, lumps: Vec<Lump>) -> Self {
        Self {
            name: name.into(),
            lumps,
        }
    }

    /// The name of the block's marker lump.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Finds a lump by name. If the name appears more than once the first lump wins.
    pub fn get(&self, name: &str) -> Option<&Lump> {
        self.lumps.iter().find(|lump| lump.name == name)
    }
}

impl Deref for Lumps {
    type Target = Vec<Lump>;

    fn deref(&self) -> &Self::Target {
        &self.lumps
    }
}

impl IntoIterator for Lumps {
    type Item = Lump;
    type IntoIter = vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.lumps.into_iter()
    }
}

impl<'a> IntoIterator for &'a Lumps {
    type Item = &'a Lump;
    type IntoIter = slice::Iter<'a, Lump>;

    fn into_iter(self) -> Self::IntoIter {
        self.lumps.iter()
    }
}

/// A collection of named lumps that map data can be decoded from.
///
/// This is the only thing the [map decoders] need from a WAD. [`Lumps`] implements it, and so does
/// a plain `HashMap` of names to byte buffers for data that didn't come from a WAD file.
///
/// [map decoders]: crate::map::Map::decode
pub trait LumpSource {
    /// Looks up a lump's raw data by name.
    fn lump_data(&self, name: &str) -> Option<&[u8]>;

    /// Returns `true` if there's a lump with the given name.
    fn contains_lump(&self, name: &str) -> bool {
        self.lump_data(name).is_some()
    }
}

impl LumpSource for Lumps {
    fn lump_data(&self, name: &str) -> Option<&[u8]> {
        self.get(name).map(Lump::data)
    }
}

impl<S: BuildHasher> LumpSource for HashMap<String, Vec<u8>, S> {
    fn lump_data(&self, name: &str) -> Option<&[u8]> {
        self.get(name).map(Vec::as_slice)
    }
}

impl<T: LumpSource + ?Sized> LumpSource for &T {
    fn lump_data(&self, name: &str) -> Option<&[u8]> {
        (**self).lump_data(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup() {
        let lumps = Lumps::new(
            "E1M1",
            vec![
                Lump::new("THINGS", vec![1u8, 2, 3]),
                Lump::new("VERTEXES", Vec::<u8>::new()),
                Lump::new("THINGS", vec![4u8]),
            ],
        );

        assert_eq!(lumps.name(), "E1M1");
        assert_eq!(lumps.len(), 3);
        assert_eq!(lumps.lump_data("THINGS"), Some(&[1, 2, 3][..]));
        assert!(lumps.contains_lump("VERTEXES"));
        assert!(lumps.get("VERTEXES").unwrap().is_empty());
        assert!(!lumps.contains_lump("SECTORS"));
    }

    #[test]
    fn hash_map_source() {
        let mut lumps = HashMap::new();
        lumps.insert("SECTORS".to_owned(), vec![0u8; 26]);

        assert!(lumps.contains_lump("SECTORS"));
        assert_eq!(lumps.lump_data("SECTORS").map(<[u8]>::len), Some(26));
        assert_eq!(lumps.lump_data("LINEDEFS"), None);
    }

    #[test]
    fn debug() {
        let lump = Lump::new("SIDEDEFS", vec![0u8; 60]);
        assert_eq!(format!("{:?}", lump), "SIDEDEFS (60 bytes)");
        assert_eq!(lump.to_string(), "SIDEDEFS");
    }
}
