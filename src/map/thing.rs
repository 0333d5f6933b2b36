use std::ops::{Deref, Index};

use bytes::Buf;

use crate::map::{self, cursor, Cursor, DecodeConfig, Vertex};
use crate::wad::LumpSource;

/// A list of [things] for a particular map, in placement order.
///
/// [things]: Thing
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Things(Vec<Thing>);

impl Things {
    pub const LUMP: &'static str = "THINGS";
    pub const RECORD_SIZE: usize = 10;

    /// Loads a map's things from its `THINGS` lump.
    pub fn load(lumps: &impl LumpSource, config: &DecodeConfig) -> map::Result<Self> {
        Self::decode(cursor::require(lumps, Self::LUMP)?, config)
    }

    /// Decodes the raw contents of a `THINGS` lump.
    pub fn decode(data: &[u8], config: &DecodeConfig) -> map::Result<Self> {
        let mut cursor = Cursor::records(Self::LUMP, data, Self::RECORD_SIZE, config)?;
        let mut things = Vec::with_capacity(cursor.record_count());

        while cursor.has_remaining() {
            cursor.need_record()?;
            let x = cursor.get_i16_le();
            let y = cursor.get_i16_le();
            let angle = cursor.get_u16_le();
            let kind = cursor.get_i16_le();
            let flags = cursor.get_i16_le();

            things.push(Thing {
                x,
                y,
                angle,
                kind,
                flags,
            })
        }

        cursor.done()?;

        Ok(Self(things))
    }

    /// Looks up a thing number.
    pub fn get(&self, number: u16) -> Option<&Thing> {
        self.0.get(usize::from(number))
    }

    /// The map's origin: the position of the player 1 start. If there's more than one the last one
    /// wins. Maps without a player 1 start have their origin at `(0, 0)`.
    pub fn origin(&self) -> Vertex {
        self.0
            .iter()
            .rev()
            .find(|thing| thing.is_player_one_start())
            .map_or(Vertex::ORIGIN, Thing::position)
    }
}

impl Index<u16> for Things {
    type Output = Thing;

    /// Looks up a thing number.
    fn index(&self, number: u16) -> &Self::Output {
        &self.0[usize::from(number)]
    }
}

impl Deref for Things {
    type Target = Vec<Thing>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<Thing>> for Things {
    fn from(things: Vec<Thing>) -> Self {
        Self(things)
    }
}

/// An object placed in the map: a player start, monster, weapon, key, decoration, etc.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Thing {
    /// X coordinate.
    pub x: i16,

    /// Y coordinate.
    pub y: i16,

    /// Facing direction in degrees. 0 is east, 90 is north.
    pub angle: u16,

    /// Thing type number.
    pub kind: i16,

    /// Skill levels and multiplayer modes the thing appears in.
    pub flags: i16,
}

impl Thing {
    /// Thing type number of the player 1 start.
    pub const PLAYER_ONE_START: i16 = 1;

    /// The thing's location.
    pub fn position(&self) -> Vertex {
        Vertex::new(self.x, self.y)
    }

    pub fn is_player_one_start(&self) -> bool {
        self.kind == Self::PLAYER_ONE_START
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::Error;
    use crate::test::*;

    #[test]
    fn decode() {
        let data = things_lump(&[(1056, -3616, 90, 1, 7), (-32, 48, 0xB400, 3004, 0x0C)]);
        let things = Things::decode(&data, &DecodeConfig::default()).unwrap();

        assert_eq!(
            *things,
            [
                Thing {
                    x: 1056,
                    y: -3616,
                    angle: 90,
                    kind: 1,
                    flags: 7,
                },
                Thing {
                    x: -32,
                    y: 48,
                    angle: 0xB400,
                    kind: 3004,
                    flags: 12,
                },
            ]
        );
    }

    #[test]
    fn wrong_size() {
        assert_matches!(
            Things::decode(&[0; 9], &DecodeConfig::default()),
            Err(Error::MalformedLump { lump: "THINGS", size: 9, record_size: 10 })
        );
    }

    #[test]
    fn origin() {
        let things = Things::from(vec![Thing {
            x: 128,
            y: -64,
            kind: 1,
            ..Thing::default()
        }]);
        assert_eq!(things.origin(), Vertex::new(128, -64));
    }

    #[test]
    fn last_origin_wins() {
        let data = things_lump(&[(0, 0, 0, 1, 7), (300, 300, 0, 2, 7), (50, 50, 0, 1, 7)]);
        let things = Things::decode(&data, &DecodeConfig::default()).unwrap();
        assert_eq!(things.origin(), Vertex::new(50, 50));
    }

    #[test]
    fn no_origin() {
        let data = things_lump(&[(10, 20, 0, 2, 7), (30, 40, 0, 3001, 7)]);
        let things = Things::decode(&data, &DecodeConfig::default()).unwrap();
        assert_eq!(things.origin(), Vertex::ORIGIN);

        assert_eq!(Things::default().origin(), Vertex::new(0, 0));
    }
}
