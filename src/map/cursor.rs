use std::ops::{Deref, DerefMut};

use bytes::Buf;

use crate::map::{self, DecodeConfig, PartialRecords};
use crate::wad::{parse_name, LumpSource};

/// Looks up a required map lump.
pub(super) fn require<'a>(lumps: &'a impl LumpSource, lump: &'static str) -> map::Result<&'a [u8]> {
    lumps
        .lump_data(lump)
        .ok_or(map::Error::MissingLump { lump })
}

/// A thin wrapper around a lump's bytes that reads fixed-size records and checks if there's data
/// available before reading it.
#[derive(Debug)]
pub(super) struct Cursor<'a> {
    lump: &'static str,
    record_size: usize,
    data: &'a [u8],
}

impl<'a> Cursor<'a> {
    /// Prepares to read `record_size`-byte records from a lump.
    ///
    /// If the lump size isn't a multiple of `record_size` it is either rejected or the trailing
    /// partial record is dropped, depending on `config`.
    pub fn records(
        lump: &'static str,
        data: &'a [u8],
        record_size: usize,
        config: &DecodeConfig,
    ) -> map::Result<Self> {
        let partial = data.len() % record_size;
        let data = match (partial, config.partial_records) {
            (0, _) => data,

            (_, PartialRecords::Reject) => {
                return Err(map::Error::MalformedLump {
                    lump,
                    size: data.len(),
                    record_size,
                });
            }

            (_, PartialRecords::Truncate) => {
                log::warn!(
                    "{}: ignoring {} trailing bytes of {}",
                    lump,
                    partial,
                    data.len()
                );
                &data[..data.len() - partial]
            }
        };

        Ok(Self {
            lump,
            record_size,
            data,
        })
    }

    /// The number of whole records left to read.
    pub fn record_count(&self) -> usize {
        self.data.len() / self.record_size
    }

    /// Checks that there is at least one full record remaining.
    ///
    /// Returns `&mut self` for chainability.
    pub fn need_record(&mut self) -> map::Result<&mut Self> {
        if self.data.len() >= self.record_size {
            Ok(self)
        } else {
            Err(self.error())
        }
    }

    /// Checks that all of the data was read, then drops the cursor.
    pub fn done(self) -> map::Result<()> {
        if self.data.is_empty() {
            Ok(())
        } else {
            Err(self.error())
        }
    }

    /// Reads an 8-byte, NUL padded name.
    ///
    /// The caller is responsible for calling `self.need_record()?`.
    ///
    /// # Panics
    ///
    /// Panics if there are fewer than 8 bytes remaining.
    pub fn get_name(&mut self) -> String {
        let mut raw = [0u8; 8];
        self.data.copy_to_slice(&mut raw);
        parse_name(&raw)
    }

    fn error(&self) -> map::Error {
        map::Error::MalformedLump {
            lump: self.lump,
            size: self.data.len(),
            record_size: self.record_size,
        }
    }
}

impl<'a> Deref for Cursor<'a> {
    type Target = &'a [u8];

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl DerefMut for Cursor<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}
