#![no_main]
use libfuzzer_sys::fuzz_target;

extern crate doom_sectors;

use doom_sectors::map::{decode_wad, DecodeConfig, PartialRecords};
use doom_sectors::wad::WadFile;

fuzz_target!(|data: &[u8]| {
    let wad = match WadFile::load_raw("fuzz.wad", data.to_vec()) {
        Ok(wad) => wad,
        Err(err) => {
            dbg!(err);
            return;
        }
    };

    let config = DecodeConfig {
        partial_records: PartialRecords::Truncate,
    };
    let (maps, _) = decode_wad(&wad, &config, Vec::new());

    for map in &maps {
        for sector in 0..map.sectors.len() {
            let _ = map.sector_polygon(sector as u16);
        }
        let _ = map.locate(f64::from(map.origin.x), f64::from(map.origin.y));
    }
});
