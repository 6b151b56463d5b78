//! Decompress command implementation.

use crate::utils::{StreamOptions, decompressed_path};
use oxilzw_codec::{LzwDecoder, StreamEnd};
use std::path::Path;
use tracing::warn;

pub fn cmd_decompress(
    input: &Path,
    output: Option<&Path>,
    options: StreamOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let data = std::fs::read(input)?;
    let decoder = LzwDecoder::new(options.config())?;
    let (decoded, stats) = decoder.decode_with_stats(&data)?;

    match stats.end {
        StreamEnd::EndOfData => {}
        StreamEnd::Exhausted => {
            warn!(input = %input.display(), "stream ended without END_OF_DATA");
        }
        StreamEnd::UnresolvedCode(code) => {
            warn!(
                input = %input.display(),
                code,
                bit_offset = stats.bits_consumed,
                "stream stopped at an unresolvable codeword"
            );
        }
    }

    let target = match output {
        Some(path) => path.to_path_buf(),
        None => decompressed_path(input),
    };
    std::fs::write(&target, &decoded)?;

    println!(
        "{} -> {} ({} -> {} bytes)",
        input.display(),
        target.display(),
        data.len(),
        decoded.len()
    );

    Ok(())
}
