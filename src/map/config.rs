use serde::{Deserialize, Serialize};

/// Options controlling how strictly map lumps are decoded.
///
/// Both types can be embedded in a host application's own config file:
///
/// ```
/// use doom_sectors::map::{DecodeConfig, PartialRecords};
///
/// let config: DecodeConfig = serde_json::from_str(r#"{ "partial_records": "truncate" }"#)?;
/// assert_eq!(config.partial_records, PartialRecords::Truncate);
/// #
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeConfig {
    pub partial_records: PartialRecords,
}

/// What to do with a lump whose size isn't a multiple of its record size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartialRecords {
    /// Fail with [`Error::MalformedLump`].
    ///
    /// [`Error::MalformedLump`]: crate::map::Error::MalformedLump
    Reject,
    /// Drop the trailing partial record and log a warning.
    Truncate,
}

impl Default for PartialRecords {
    fn default() -> Self {
        Self::Reject
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        assert_eq!(DecodeConfig::default().partial_records, PartialRecords::Reject);

        let config: DecodeConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, DecodeConfig::default());
    }

    #[test]
    fn parse() {
        let config: DecodeConfig =
            serde_json::from_str(r#"{ "partial_records": "truncate" }"#).unwrap();
        assert_eq!(config.partial_records, PartialRecords::Truncate);

        assert_matches!(
            serde_json::from_str::<DecodeConfig>(r#"{ "partial_records": "ignore" }"#),
            Err(_)
        );
        assert_eq!(
            serde_json::to_string(&DecodeConfig::default()).unwrap(),
            r#"{"partial_records":"reject"}"#
        );
    }
}
