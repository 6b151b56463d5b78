//! Compress command implementation.

use crate::utils::{StreamOptions, compressed_path, savings_percent};
use oxilzw_codec::compress_batch;
use std::path::{Path, PathBuf};
use tracing::info;

pub fn cmd_compress(
    inputs: &[PathBuf],
    output: Option<&Path>,
    options: StreamOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    if output.is_some() && inputs.len() > 1 {
        return Err("--output requires a single input file".into());
    }

    let contents = inputs
        .iter()
        .map(std::fs::read)
        .collect::<Result<Vec<_>, _>>()?;
    let compressed = compress_batch(&contents, options.config())?;

    for ((input, original), packed) in inputs.iter().zip(&contents).zip(&compressed) {
        let target = match output {
            Some(path) => path.to_path_buf(),
            None => compressed_path(input),
        };
        std::fs::write(&target, packed)?;

        info!(input = %input.display(), output = %target.display(), "compressed");
        println!(
            "{} -> {} ({} -> {} bytes, {:.1}% saved)",
            input.display(),
            target.display(),
            original.len(),
            packed.len(),
            savings_percent(original.len(), packed.len())
        );
    }

    Ok(())
}
