use std::ops::{Deref, Index};

use bytes::Buf;

use crate::map::{self, cursor, Cursor, DecodeConfig};
use crate::wad::LumpSource;

/// A list of [sectors] for a particular [map], indexed by number.
///
/// [sectors]: Sector
/// [map]: crate::map::Map
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Sectors(Vec<Sector>);

impl Sectors {
    pub const LUMP: &'static str = "SECTORS";
    pub const RECORD_SIZE: usize = 26;

    /// Loads a map's sectors from its `SECTORS` lump.
    pub fn load(lumps: &impl LumpSource, config: &DecodeConfig) -> map::Result<Self> {
        Self::decode(cursor::require(lumps, Self::LUMP)?, config)
    }

    /// Decodes the raw contents of a `SECTORS` lump.
    pub fn decode(data: &[u8], config: &DecodeConfig) -> map::Result<Self> {
        let mut cursor = Cursor::records(Self::LUMP, data, Self::RECORD_SIZE, config)?;
        let mut sectors = Vec::with_capacity(cursor.record_count());

        while cursor.has_remaining() {
            cursor.need_record()?;
            let floor_height = cursor.get_i16_le();
            let ceiling_height = cursor.get_i16_le();
            let floor_flat = cursor.get_name();
            let ceiling_flat = cursor.get_name();
            let light_level = cursor.get_i16_le();
            let kind = cursor.get_u16_le();
            let tag = cursor.get_u16_le();

            sectors.push(Sector {
                floor_height,
                ceiling_height,
                floor_flat,
                ceiling_flat,
                light_level,
                kind,
                tag,
            })
        }

        cursor.done()?;

        Ok(Self(sectors))
    }

    /// Looks up a sector number.
    pub fn get(&self, number: u16) -> Option<&Sector> {
        self.0.get(usize::from(number))
    }
}

impl Index<u16> for Sectors {
    type Output = Sector;

    /// Looks up a sector number.
    fn index(&self, number: u16) -> &Self::Output {
        &self.0[usize::from(number)]
    }
}

impl Deref for Sectors {
    type Target = Vec<Sector>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<Sector>> for Sectors {
    fn from(sectors: Vec<Sector>) -> Self {
        Self(sectors)
    }
}

/// A horizontal (east-west and north-south) area of the [map] where a floor height and ceiling
/// height are defined. Its shape its defined by the [sidedefs] that point at it. Any change in
/// floor or ceiling height or flat requires a new sector (and therefore separating [linedefs] and
/// sidedefs).
///
/// [map]: crate::map::Map
/// [sidedefs]: crate::map::Sidedef
/// [linedefs]: crate::map::Linedef
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Sector {
    /// Floor height.
    pub floor_height: i16,

    /// Ceiling height.
    pub ceiling_height: i16,

    /// Name of the flat used for the floor texture.
    pub floor_flat: String,

    /// Name of the flat used for the ceiling texture.
    pub ceiling_flat: String,

    /// Light level from 0 (total dark) to 255 (maximum brightness). There are actually only 32
    /// brightnesses possible: 0-7 are the same, ..., 248-255 are the same.
    pub light_level: i16,

    /// Special behavior such as blinking lights or damaging floors.
    pub kind: u16,

    /// A tag number. When [linedefs] with the same tag number are activated something will usually
    /// happen to this sector: its floor will rise, the lights will go out, etc.
    ///
    /// [linedefs]: crate::map::Linedef
    pub tag: u16,
}
