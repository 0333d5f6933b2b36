use std::ops::{Deref, Index};

use bytes::Buf;

use crate::map::{self, cursor, Cursor, DecodeConfig, Map, Sector};
use crate::wad::LumpSource;

/// A list of [sidedefs] for a particular [map], indexed by number.
///
/// [sidedefs]: Sidedef
/// [map]: crate::map::Map
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Sidedefs(Vec<Sidedef>);

impl Sidedefs {
    pub const LUMP: &'static str = "SIDEDEFS";
    pub const RECORD_SIZE: usize = 30;

    /// Loads a map's sidedefs from its `SIDEDEFS` lump.
    pub fn load(lumps: &impl LumpSource, config: &DecodeConfig) -> map::Result<Self> {
        Self::decode(cursor::require(lumps, Self::LUMP)?, config)
    }

    /// Decodes the raw contents of a `SIDEDEFS` lump.
    pub fn decode(data: &[u8], config: &DecodeConfig) -> map::Result<Self> {
        let mut cursor = Cursor::records(Self::LUMP, data, Self::RECORD_SIZE, config)?;
        let mut sidedefs = Vec::with_capacity(cursor.record_count());

        while cursor.has_remaining() {
            cursor.need_record()?;
            let x_offset = cursor.get_i16_le();
            let y_offset = cursor.get_i16_le();
            let upper_texture = cursor.get_name();
            let lower_texture = cursor.get_name();
            let middle_texture = cursor.get_name();
            let sector = cursor.get_u16_le();

            sidedefs.push(Sidedef {
                x_offset,
                y_offset,
                upper_texture,
                lower_texture,
                middle_texture,
                sector,
            })
        }

        cursor.done()?;

        Ok(Self(sidedefs))
    }

    /// Looks up a sidedef number.
    pub fn get(&self, number: u16) -> Option<&Sidedef> {
        self.0.get(usize::from(number))
    }
}

impl Index<u16> for Sidedefs {
    type Output = Sidedef;

    /// Looks up a sidedef number.
    fn index(&self, number: u16) -> &Self::Output {
        &self.0[usize::from(number)]
    }
}

impl Deref for Sidedefs {
    type Target = Vec<Sidedef>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<Sidedef>> for Sidedefs {
    fn from(sidedefs: Vec<Sidedef>) -> Self {
        Self(sidedefs)
    }
}

/// A description of what wall textures to draw along a [linedef]. A group of sidedefs outlines
/// the space of a [sector].
///
/// [linedef]: crate::map::Linedef
/// [sector]: crate::map::Sector
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Sidedef {
    /// X offset to start at when drawing the wall textures. A positive offset moves them left
    /// so the left sides get cut off. A negative offset moves them right.
    pub x_offset: i16,

    /// Y offset to start at when drawing the wall textures. A positive offset moves them up
    /// so the top edges get cut off. A negative offset moves them down.
    pub y_offset: i16,

    /// Upper texture name, drawn if the adjacent sector's ceiling is lower. `-` means none.
    pub upper_texture: String,

    /// Lower texture name, drawn if the adjacent sector's floor is higher. `-` means none.
    pub lower_texture: String,

    /// Middle texture name. One-sided linedefs should always have a middle texture.
    /// Two-sided linedefs are usually transparent, though they sometimes have partially see-through
    /// textures such as for fences or windows.
    pub middle_texture: String,

    /// [Sector] number this sidedef faces or helps to surround.
    ///
    /// [sector]: crate::map::Sector
    pub sector: u16,
}

impl Sidedef {
    /// Looks up the sidedef's sector.
    pub fn sector<'map>(&self, map: &'map Map) -> Option<&'map Sector> {
        map.sectors.get(self.sector)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::Error;
    use crate::test::*;

    #[test]
    fn decode() {
        let data = sidedefs_lump(&[
            (0, 0, "-", "-", "STARTAN3", 0),
            (-16, 8, "BIGDOOR2", "STEP6", "-", 1),
        ]);
        let sidedefs = Sidedefs::decode(&data, &DecodeConfig::default()).unwrap();

        assert_eq!(sidedefs.len(), 2);
        assert_eq!(
            sidedefs[1],
            Sidedef {
                x_offset: -16,
                y_offset: 8,
                upper_texture: "BIGDOOR2".to_owned(),
                lower_texture: "STEP6".to_owned(),
                middle_texture: "-".to_owned(),
                sector: 1,
            }
        );
        assert_eq!(sidedefs[0].middle_texture, "STARTAN3");
    }

    #[test]
    fn padded_names() {
        let mut data = Vec::new();
        data.extend_from_slice(&[0, 0, 0, 0]);
        data.extend_from_slice(b"WALL\0\0\0\0");
        data.extend_from_slice(b"\0\0\0\0\0\0\0\0");
        data.extend_from_slice(b"SW1\0ON\0\0");
        data.extend_from_slice(&[3, 0]);

        let sidedefs = Sidedefs::decode(&data, &DecodeConfig::default()).unwrap();
        let side = &sidedefs[0];

        assert_eq!(side.upper_texture, "WALL");
        assert_eq!(side.upper_texture.len(), 4);
        assert_eq!(side.lower_texture, "");
        assert_eq!(side.middle_texture, "SW1\0ON");
        assert_eq!(side.sector, 3);
    }

    #[test]
    fn wrong_size() {
        assert_matches!(
            Sidedefs::decode(&[0; 29], &DecodeConfig::default()),
            Err(Error::MalformedLump { lump: "SIDEDEFS", size: 29, record_size: 30 })
        );
    }

    #[test]
    fn sector_lookup() {
        let map = &*TWO_ROOMS;
        assert_eq!(map.sidedefs[5].sector(map), Some(&map.sectors[1]));

        let dangling = Sidedef {
            sector: 42,
            ..Sidedef::default()
        };
        assert_eq!(dangling.sector(map), None);
    }
}
