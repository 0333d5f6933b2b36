use std::fmt;

use crate::map::{
    self, build_sector_polygon, locate_point, DecodeConfig, Linedefs, Polygon, Sectors, Sidedefs,
    Things, Vertex, Vertexes,
};
use crate::wad::{LumpSource, WadFile};

/// One level's worth of map data.
///
/// The record lists reference each other by number: linedefs point at vertexes and sidedefs, and
/// sidedefs point at sectors. Those numbers only mean something inside the same `Map`.
#[derive(Clone, PartialEq, Eq)]
pub struct Map {
    pub name: String,
    pub vertexes: Vertexes,
    pub linedefs: Linedefs,
    pub sidedefs: Sidedefs,
    pub sectors: Sectors,
    pub things: Things,

    /// Where the player 1 start is, or `(0, 0)` if there isn't one.
    pub origin: Vertex,
}

impl Map {
    /// Loads the named map, typically `"ExMy"` for DOOM or `"MAPnn"` for DOOM II.
    ///
    /// Returns `Ok(None)` if the map is missing.
    pub fn load(wad: &WadFile, name: &str, config: &DecodeConfig) -> map::Result<Option<Self>> {
        match wad.map(name)? {
            Some(lumps) => Ok(Some(Self::decode(name, &lumps, config)?)),
            None => Ok(None),
        }
    }

    /// Decodes a map from its lumps.
    ///
    /// # Errors
    ///
    /// Fails if any of the `VERTEXES`, `LINEDEFS`, `SIDEDEFS`, `SECTORS`, or `THINGS` lumps are
    /// missing or malformed.
    pub fn decode(
        name: impl Into<String>,
        lumps: &impl LumpSource,
        config: &DecodeConfig,
    ) -> map::Result<Self> {
        let name = name.into();
        let vertexes = Vertexes::load(lumps, config)?;
        let linedefs = Linedefs::load(lumps, config)?;
        let sidedefs = Sidedefs::load(lumps, config)?;
        let sectors = Sectors::load(lumps, config)?;
        let things = Things::load(lumps, config)?;
        let origin = things.origin();

        log::debug!(
            "{}: {} vertexes, {} linedefs, {} sidedefs, {} sectors, {} things",
            name,
            vertexes.len(),
            linedefs.len(),
            sidedefs.len(),
            sectors.len(),
            things.len(),
        );

        Ok(Self {
            name,
            vertexes,
            linedefs,
            sidedefs,
            sectors,
            things,
            origin,
        })
    }

    /// Reconstructs the outline of a sector. See [`build_sector_polygon`].
    pub fn sector_polygon(&self, sector: u16) -> Option<Polygon> {
        build_sector_polygon(self, sector)
    }

    /// Finds the sector containing a point. See [`locate_point`].
    pub fn locate(&self, x: f64, y: f64) -> Option<u16> {
        locate_point(self, x, y)
    }
}

/// Decodes a map from its lumps using the default [`DecodeConfig`].
pub fn decode_map(lumps: &impl LumpSource, name: &str) -> map::Result<Map> {
    Map::decode(name, lumps, &DecodeConfig::default())
}

/// Decodes every map in a WAD file, appending them to `maps`.
///
/// A map that fails to decode doesn't stop the rest. Its error is logged and returned alongside
/// the maps that did decode.
pub fn decode_wad(
    wad: &WadFile,
    config: &DecodeConfig,
    mut maps: Vec<Map>,
) -> (Vec<Map>, Vec<map::Error>) {
    let mut errors = Vec::new();

    for lumps in wad.maps() {
        match Map::decode(lumps.name(), &lumps, config) {
            Ok(map) => maps.push(map),
            Err(err) => {
                log::warn!("{}: skipping {}: {}", wad, lumps.name(), err);
                errors.push(err);
            }
        }
    }

    (maps, errors)
}

impl fmt::Debug for Map {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "{:?}", self.name)
    }
}

impl fmt::Display for Map {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::map::{Error, PartialRecords};
    use crate::test::*;

    #[test]
    fn load() {
        let map = Map::load(&TEST_WAD, "E1M1", &DecodeConfig::default())
            .unwrap()
            .unwrap();
        assert_eq!(map, *TWO_ROOMS);
        assert_eq!(map.to_string(), "E1M1");

        assert_matches!(
            Map::load(&TEST_WAD, "E9M9", &DecodeConfig::default()),
            Ok(None)
        );
        assert_matches!(
            Map::load(&TEST_WAD, "E1M2", &DecodeConfig::default()),
            Err(Error::MalformedLump { lump: "VERTEXES", size: 6, .. })
        );
        assert_matches!(
            Map::load(&TEST_WAD, "CREDIT", &DecodeConfig::default()),
            Err(Error::Wad { .. })
        );
    }

    #[test]
    fn records() {
        let map = &*TWO_ROOMS;
        assert_eq!(map.vertexes.len(), 6);
        assert_eq!(map.linedefs.len(), 7);
        assert_eq!(map.sidedefs.len(), 8);
        assert_eq!(map.sectors.len(), 3);
        assert_eq!(map.things.len(), 2);
        assert_eq!(map.origin, Vertex::new(32, 32));
    }

    #[test]
    fn missing_lumps() {
        for &missing in &["VERTEXES", "LINEDEFS", "SIDEDEFS", "SECTORS", "THINGS"] {
            let mut lumps = two_rooms_lumps()
                .iter()
                .map(|lump| (lump.name().to_owned(), lump.data().to_vec()))
                .collect::<HashMap<_, _>>();
            lumps.remove(missing);

            assert_matches!(
                decode_map(&lumps, "E1M1"),
                Err(Error::MissingLump { lump }) if lump == missing
            );
        }
    }

    #[test]
    fn origin() {
        let lumps = map_lumps(
            "MAP01",
            &[],
            &[],
            &[],
            &[],
            &[(128, -64, 0, 1, 7), (16, 16, 0, 2, 7)],
        );
        assert_eq!(decode_map(&lumps, "MAP01").unwrap().origin, Vertex::new(128, -64));

        let lumps = map_lumps("MAP01", &[], &[], &[], &[], &[(0, 0, 0, 1, 7), (50, 50, 0, 1, 7)]);
        assert_eq!(decode_map(&lumps, "MAP01").unwrap().origin, Vertex::new(50, 50));

        let lumps = map_lumps("MAP01", &[], &[], &[], &[], &[]);
        assert_eq!(decode_map(&lumps, "MAP01").unwrap().origin, Vertex::ORIGIN);
    }

    #[test]
    fn batch() {
        let previous = decode_map(&two_rooms_lumps(), "PREVIOUS").unwrap();
        let (maps, errors) = decode_wad(&TEST_WAD, &DecodeConfig::default(), vec![previous]);

        assert_eq!(
            maps.iter().map(|map| map.name.as_str()).collect::<Vec<_>>(),
            ["PREVIOUS", "E1M1"]
        );
        assert_eq!(errors.len(), 1);
        assert_matches!(errors[0], Error::MalformedLump { lump: "VERTEXES", .. });
    }

    #[test]
    fn batch_truncating() {
        let config = DecodeConfig {
            partial_records: PartialRecords::Truncate,
        };
        let (maps, errors) = decode_wad(&TEST_WAD, &config, Vec::new());

        assert!(errors.is_empty());
        assert_eq!(maps.len(), 2);
        assert_eq!(maps[1].name, "E1M2");
        assert_eq!(*maps[1].vertexes, [Vertex::new(0, 0)]);
    }

    // Make sure `Map` is `Send` and `Sync`.
    trait IsSendAndSync: Send + Sync {}
    impl IsSendAndSync for Map {}
}
