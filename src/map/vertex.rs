use std::ops::{Deref, Index};

use bytes::Buf;

use crate::map::{self, cursor, Cursor, DecodeConfig};
use crate::wad::LumpSource;

/// A list of [vertexes] for a particular map, indexed by number.
///
/// Wannabe pedants should note that according to [Merriam-Webster] the plural of "vertex" can be
/// either "vertices" or "vertexes". In this codebase we use id Software's spelling.
///
/// [vertexes]: Vertex
/// [map]: crate::map::Map
/// [Merriam-Webster]: https://www.merriam-webster.com/dictionary/vertex
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Vertexes(Vec<Vertex>);

impl Vertexes {
    pub const LUMP: &'static str = "VERTEXES";
    pub const RECORD_SIZE: usize = 4;

    /// Loads a map's vertexes from its `VERTEXES` lump.
    pub fn load(lumps: &impl LumpSource, config: &DecodeConfig) -> map::Result<Self> {
        Self::decode(cursor::require(lumps, Self::LUMP)?, config)
    }

    /// Decodes the raw contents of a `VERTEXES` lump.
    pub fn decode(data: &[u8], config: &DecodeConfig) -> map::Result<Self> {
        let mut cursor = Cursor::records(Self::LUMP, data, Self::RECORD_SIZE, config)?;
        let mut vertexes = Vec::with_capacity(cursor.record_count());

        while cursor.has_remaining() {
            cursor.need_record()?;
            let x = cursor.get_i16_le();
            let y = cursor.get_i16_le();
            vertexes.push(Vertex { x, y });
        }

        cursor.done()?;

        Ok(Self(vertexes))
    }

    /// Looks up a vertex number.
    pub fn get(&self, number: u16) -> Option<&Vertex> {
        self.0.get(usize::from(number))
    }
}

impl Index<u16> for Vertexes {
    type Output = Vertex;

    /// Looks up a vertex number.
    fn index(&self, number: u16) -> &Self::Output {
        &self.0[usize::from(number)]
    }
}

impl Deref for Vertexes {
    type Target = Vec<Vertex>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<Vertex>> for Vertexes {
    fn from(vertexes: Vec<Vertex>) -> Self {
        Self(vertexes)
    }
}

/// Vertexes are the start and end points of [linedefs], and the corners of sector [polygons].
///
/// [linedefs]: crate::map::Linedef
/// [polygons]: crate::map::Polygon
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Vertex {
    /// X coordinate.
    pub x: i16,

    /// Y coordinate.
    pub y: i16,
}

impl Vertex {
    pub const ORIGIN: Vertex = Vertex { x: 0, y: 0 };

    pub fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }
}

impl From<(i16, i16)> for Vertex {
    fn from((x, y): (i16, i16)) -> Self {
        Self { x, y }
    }
}
