use std::ops::{Deref, Index};

use bytes::Buf;

use crate::map::{self, cursor, Cursor, DecodeConfig, Map, Sidedef, Vertex};
use crate::wad::LumpSource;

/// Raw sidedef number meaning "no sidedef".
pub const NO_SIDEDEF: u16 = 0xFFFF;

/// A list of [linedefs] for a particular [map], indexed by number.
///
/// [linedefs]: Linedef
/// [map]: crate::map::Map
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Linedefs(Vec<Linedef>);

impl Linedefs {
    pub const LUMP: &'static str = "LINEDEFS";
    pub const RECORD_SIZE: usize = 14;

    /// Loads a map's linedefs from its `LINEDEFS` lump.
    pub fn load(lumps: &impl LumpSource, config: &DecodeConfig) -> map::Result<Self> {
        Self::decode(cursor::require(lumps, Self::LUMP)?, config)
    }

    /// Decodes the raw contents of a `LINEDEFS` lump.
    ///
    /// Vertex and sidedef numbers aren't checked here. They're checked when they're looked up.
    pub fn decode(data: &[u8], config: &DecodeConfig) -> map::Result<Self> {
        let mut cursor = Cursor::records(Self::LUMP, data, Self::RECORD_SIZE, config)?;
        let mut linedefs = Vec::with_capacity(cursor.record_count());

        while cursor.has_remaining() {
            cursor.need_record()?;
            let start_vertex = cursor.get_u16_le();
            let end_vertex = cursor.get_u16_le();
            let flags = cursor.get_i16_le();
            let special = cursor.get_i16_le();
            let tag = cursor.get_i16_le();
            let front_sidedef = optional(cursor.get_u16_le());
            let back_sidedef = optional(cursor.get_u16_le());

            linedefs.push(Linedef {
                start_vertex,
                end_vertex,
                flags,
                special,
                tag,
                front_sidedef,
                back_sidedef,
            })
        }

        cursor.done()?;

        Ok(Self(linedefs))
    }

    /// Looks up a linedef number.
    pub fn get(&self, number: u16) -> Option<&Linedef> {
        self.0.get(usize::from(number))
    }
}

fn optional(sidedef: u16) -> Option<u16> {
    match sidedef {
        NO_SIDEDEF => None,
        _ => Some(sidedef),
    }
}

impl Index<u16> for Linedefs {
    type Output = Linedef;

    /// Looks up a linedef number.
    fn index(&self, number: u16) -> &Self::Output {
        &self.0[usize::from(number)]
    }
}

impl Deref for Linedefs {
    type Target = Vec<Linedef>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<Linedef>> for Linedefs {
    fn from(linedefs: Vec<Linedef>) -> Self {
        Self(linedefs)
    }
}

/// A `Linedef` represents a one- or two-sided line between two [vertexes]. Each linedef has
/// optional front and back [sidedefs] that link to the adjoining [sector] or sectors.
///
/// [vertexes]: crate::map::Vertex
/// [sidedefs]: crate::map::Sidedef
/// [sector]: crate::map::Sector
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Linedef {
    /// Starting [vertex] number.
    ///
    /// [vertex]: crate::map::Vertex
    pub start_vertex: u16,

    /// Ending [vertex] number.
    ///
    /// [vertex]: crate::map::Vertex
    pub end_vertex: u16,

    pub flags: i16,

    /// Action triggered by the line, such as opening a door.
    pub special: i16,

    /// A tag number which ties this line's trigger effect to all [sectors] with a matching tag
    /// number.
    ///
    /// [sectors]: crate::map::Sector
    pub tag: i16,

    /// Front [sidedef] number, the side to the right when walking from the start vertex to the
    /// end vertex. `None` if the raw number was `0xFFFF`.
    ///
    /// [sidedef]: crate::map::Sidedef
    pub front_sidedef: Option<u16>,

    /// Back [sidedef] number if this is a two-sided line.
    ///
    /// [sidedef]: crate::map::Sidedef
    pub back_sidedef: Option<u16>,
}

impl Linedef {
    /// Looks up the linedef's start vertex.
    pub fn start_vertex<'map>(&self, map: &'map Map) -> Option<&'map Vertex> {
        map.vertexes.get(self.start_vertex)
    }

    /// Looks up the linedef's end vertex.
    pub fn end_vertex<'map>(&self, map: &'map Map) -> Option<&'map Vertex> {
        map.vertexes.get(self.end_vertex)
    }

    /// Looks up the linedef's front sidedef.
    pub fn front_sidedef<'map>(&self, map: &'map Map) -> Option<&'map Sidedef> {
        map.sidedefs.get(self.front_sidedef?)
    }

    /// Looks up the linedef's back sidedef.
    pub fn back_sidedef<'map>(&self, map: &'map Map) -> Option<&'map Sidedef> {
        map.sidedefs.get(self.back_sidedef?)
    }
}
