//! Utility functions for the CLI.

use oxilzw_codec::{HashStrictness, LzwConfig};
use std::path::{Path, PathBuf};

/// Extension given to compressed files.
pub const LZW_EXTENSION: &str = "lzw";

/// Stream options shared by all commands.
#[derive(Debug, Clone, Copy)]
pub struct StreamOptions {
    pub early_change: bool,
    pub verified: bool,
}

impl StreamOptions {
    /// Build the codec configuration these options describe.
    pub fn config(self) -> LzwConfig {
        let strictness = if self.verified {
            HashStrictness::Verified
        } else {
            HashStrictness::Trusting
        };
        LzwConfig::DEFAULT
            .with_early_change(self.early_change)
            .with_strictness(strictness)
    }
}

/// `<input>.lzw`
pub fn compressed_path(input: &Path) -> PathBuf {
    let mut name = input.as_os_str().to_owned();
    name.push(".");
    name.push(LZW_EXTENSION);
    PathBuf::from(name)
}

/// `input` without its `.lzw` extension, or `<input>.out` when there is none.
pub fn decompressed_path(input: &Path) -> PathBuf {
    match input.extension() {
        Some(ext) if ext.eq_ignore_ascii_case(LZW_EXTENSION) => input.with_extension(""),
        _ => {
            let mut name = input.as_os_str().to_owned();
            name.push(".out");
            PathBuf::from(name)
        }
    }
}

/// Space saved, as a percentage of the original size.
pub fn savings_percent(original: usize, compressed: usize) -> f64 {
    if original == 0 {
        return 0.0;
    }
    (1.0 - compressed as f64 / original as f64) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compressed_path() {
        assert_eq!(
            compressed_path(Path::new("dir/page.bin")),
            PathBuf::from("dir/page.bin.lzw")
        );
    }

    #[test]
    fn test_decompressed_path() {
        assert_eq!(
            decompressed_path(Path::new("dir/page.bin.lzw")),
            PathBuf::from("dir/page.bin")
        );
        assert_eq!(
            decompressed_path(Path::new("STRIP.LZW")),
            PathBuf::from("STRIP")
        );
        assert_eq!(
            decompressed_path(Path::new("stream.dat")),
            PathBuf::from("stream.dat.out")
        );
    }

    #[test]
    fn test_options_config() {
        let config = StreamOptions {
            early_change: false,
            verified: true,
        }
        .config();
        assert!(!config.early_change);
        assert_eq!(config.strictness, HashStrictness::Verified);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_savings_percent() {
        assert_eq!(savings_percent(0, 2), 0.0);
        assert_eq!(savings_percent(200, 50), 75.0);
    }
}
