//! On-disk TOML layout. Every key is optional; missing keys take the
//! engine defaults.

use serde::Deserialize;

/// Top-level config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub peach: PeachSection,
}

/// `[peach]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PeachSection {
    /// First scanned age.
    pub start_age: Option<u32>,
    /// Last scanned age, inclusive.
    pub end_age: Option<u32>,
    /// Minimum strength kept in results.
    pub threshold: Option<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_table_is_default() {
        let file: ConfigFile = toml::from_str("").unwrap();
        assert_eq!(file, ConfigFile::default());
    }

    #[test]
    fn keys_are_independent() {
        let file: ConfigFile = toml::from_str("[peach]\nend_age = 40\n").unwrap();
        assert_eq!(
            file.peach,
            PeachSection {
                start_age: None,
                end_age: Some(40),
                threshold: None
            }
        );
    }
}
