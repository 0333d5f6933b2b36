use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io::Read;
use std::ops::Range;
use std::path::{Path, PathBuf};

use bytes::{Buf, Bytes};

use crate::wad::{self, parse_lump_name, Lump, Lumps, NameExt, ResultExt};

/// Names of the lumps that can follow a map marker. DOOM maps always start with `THINGS`.
pub const MAP_LUMP_NAMES: [&str; 11] = [
    "THINGS", "LINEDEFS", "SIDEDEFS", "VERTEXES", "SEGS", "SSECTORS", "NODES", "SECTORS",
    "REJECT", "BLOCKMAP", "BEHAVIOR",
];

const HEADER_SIZE: usize = 12;
const DIR_ENTRY_SIZE: usize = 16;

/// A single IWAD or PWAD, read fully into memory.
///
/// Lumps handed out by a `WadFile` share its buffer, so they're cheap to create and can outlive
/// the file.
pub struct WadFile {
    path: PathBuf,
    raw: Bytes,
    kind: WadKind,
    entries: Vec<DirEntry>,
    by_name: HashMap<String, Vec<usize>>,
}

/// IWADs carry a complete game. PWADs patch levels and resources on top of one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WadKind {
    Iwad,
    Pwad,
}

/// One lump's directory entry. Bounds are checked when the directory is parsed.
#[derive(Debug)]
struct DirEntry {
    name: String,
    data: Range<usize>,
}

impl WadFile {
    /// Loads a WAD file from disk.
    pub fn load(path: impl AsRef<Path>) -> wad::Result<Self> {
        let path = path.as_ref();
        let raw = fs::read(path).err_path(path)?;
        Self::load_raw(path, raw)
    }

    /// Loads a WAD file from a reader, consuming everything it has left.
    ///
    /// The `path` is only used in log and error messages.
    pub fn load_reader(path: impl AsRef<Path>, mut reader: impl Read) -> wad::Result<Self> {
        let path = path.as_ref();
        let mut raw = Vec::new();
        reader.read_to_end(&mut raw).err_path(path)?;
        Self::load_raw(path, raw)
    }

    /// Loads a WAD file from a buffer already in memory.
    ///
    /// The `path` is only used in log and error messages.
    pub fn load_raw(path: impl AsRef<Path>, raw: impl Into<Bytes>) -> wad::Result<Self> {
        let path = path.as_ref();
        let raw = raw.into();

        let (kind, entries) = parse(&raw).map_err(|desc| wad::Error::malformed(path, desc))?;

        let mut by_name: HashMap<String, Vec<usize>> = HashMap::new();
        for (index, entry) in entries.iter().enumerate() {
            by_name.entry(entry.name.clone()).or_default().push(index);
        }

        log::debug!("{}: {:?} with {} lumps", path.display(), kind, entries.len());

        Ok(Self {
            path: path.to_owned(),
            raw,
            kind,
            entries,
            by_name,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn kind(&self) -> WadKind {
        self.kind
    }

    /// The number of lumps in the directory, markers included.
    pub fn lump_count(&self) -> usize {
        self.entries.len()
    }

    /// Retrieves a lump that must appear exactly once.
    pub fn lump(&self, name: &str) -> wad::Result<Lump> {
        self.try_lump(name)?
            .ok_or_else(|| self.error(format!("{} missing", name)))
    }

    /// Retrieves a lump that may appear at most once. Returns `Ok(None)` if it's absent.
    pub fn try_lump(&self, name: &str) -> wad::Result<Option<Lump>> {
        Ok(self.unique_index(name)?.map(|index| self.lump_at(index)))
    }

    /// Retrieves the lumps following a map marker such as `E1M1` or `MAP01`, without the marker.
    ///
    /// Returns `Ok(None)` if there's no such marker, and an error if the marker isn't followed by
    /// map lumps.
    pub fn map(&self, name: &str) -> wad::Result<Option<Lumps>> {
        let marker = match self.unique_index(name)? {
            Some(marker) => marker,
            None => return Ok(None),
        };

        let block = self
            .map_block(marker)
            .ok_or_else(|| self.error(format!("{} is not a map", name)))?;
        Ok(Some(self.lumps_in(name, block)))
    }

    /// Retrieves every map in directory order.
    pub fn maps(&self) -> Vec<Lumps> {
        (0..self.entries.len())
            .filter_map(|marker| {
                let block = self.map_block(marker)?;
                Some(self.lumps_in(&self.entries[marker].name, block))
            })
            .collect()
    }

    /// Directory indices of the map lumps after `marker`, or `None` if `marker` isn't followed by
    /// `THINGS`.
    fn map_block(&self, marker: usize) -> Option<Range<usize>> {
        let first = marker + 1;
        if self.entries.get(first)?.name != MAP_LUMP_NAMES[0] {
            return None;
        }

        let count = self.entries[first..]
            .iter()
            .take_while(|entry| MAP_LUMP_NAMES.contains(&entry.name.as_str()))
            .count();
        Some(first..first + count)
    }

    fn unique_index(&self, name: &str) -> wad::Result<Option<usize>> {
        match self.by_name.get(name).map(Vec::as_slice) {
            None => Ok(None),
            Some(&[index]) => Ok(Some(index)),
            Some(indices) => Err(self.error(format!("{} found {} times", name, indices.len()))),
        }
    }

    fn lump_at(&self, index: usize) -> Lump {
        let entry = &self.entries[index];
        Lump::new(entry.name.clone(), self.raw.slice(entry.data.clone()))
    }

    fn lumps_in(&self, name: &str, block: Range<usize>) -> Lumps {
        Lumps::new(name, block.map(|index| self.lump_at(index)).collect())
    }

    /// Creates a [`wad::Error::Malformed`] blaming this file.
    pub fn error(&self, desc: impl Into<Cow<'static, str>>) -> wad::Error {
        wad::Error::malformed(&self.path, desc)
    }
}

/// Parses the header and directory.
fn parse(raw: &[u8]) -> Result<(WadKind, Vec<DirEntry>), String> {
    let mut header = raw.get(..HEADER_SIZE).ok_or("not a WAD file")?;

    let kind = match &header[..4] {
        b"IWAD" => WadKind::Iwad,
        b"PWAD" => WadKind::Pwad,
        _ => return Err("not a WAD file".to_owned()),
    };
    header.advance(4);
    let count = header.get_u32_le() as usize;
    let offset = header.get_u32_le() as usize;

    let directory = count
        .checked_mul(DIR_ENTRY_SIZE)
        .and_then(|size| offset.checked_add(size))
        .and_then(|end| raw.get(offset..end))
        .ok_or_else(|| format!("lump directory at offset {} has illegal count {}", offset, count))?;

    let entries = directory
        .chunks_exact(DIR_ENTRY_SIZE)
        .map(|mut entry| {
            let start = entry.get_u32_le() as usize;
            let size = entry.get_u32_le() as usize;
            let mut name = [0u8; 8];
            entry.copy_to_slice(&mut name);
            let name = parse_lump_name(&name);

            if !name.is_legal_name() {
                return Err(format!("illegal lump name {:?}", name));
            }

            // Markers have no data, so their offsets are meaningless.
            let data = if size == 0 {
                0..0
            } else {
                match start.checked_add(size) {
                    Some(end) if end <= raw.len() => start..end,
                    _ => return Err(format!("{} has illegal size {} at offset {}", name, size, start)),
                }
            };

            Ok(DirEntry { name, data })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok((kind, entries))
}

impl fmt::Debug for WadFile {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("WadFile")
            .field("path", &self.path)
            .field("kind", &self.kind)
            .field("size", &self.raw.len())
            .field("entries", &self.entries)
            .finish()
    }
}

impl fmt::Display for WadFile {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{}", self.path.display())
    }
}
