//! Inspect command implementation.

use crate::utils::StreamOptions;
use oxilzw_codec::{DecodeStats, LzwDecoder, StreamEnd};
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct InspectJson {
    file: String,
    stream_bytes: usize,
    decoded_bytes: usize,
    codewords: usize,
    clears: usize,
    bits_consumed: usize,
    trailing_bits: usize,
    end: EndJson,
    width_changes: Vec<WidthChangeJson>,
}

#[derive(Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum EndJson {
    EndOfData,
    Exhausted,
    UnresolvedCode { code: u16 },
}

#[derive(Serialize)]
struct WidthChangeJson {
    bit_offset: usize,
    bits: u8,
}

impl From<StreamEnd> for EndJson {
    fn from(end: StreamEnd) -> Self {
        match end {
            StreamEnd::EndOfData => Self::EndOfData,
            StreamEnd::Exhausted => Self::Exhausted,
            StreamEnd::UnresolvedCode(code) => Self::UnresolvedCode { code },
        }
    }
}

impl InspectJson {
    fn new(input: &Path, stream_bytes: usize, decoded_bytes: usize, stats: &DecodeStats) -> Self {
        Self {
            file: input.display().to_string(),
            stream_bytes,
            decoded_bytes,
            codewords: stats.codewords,
            clears: stats.clears,
            bits_consumed: stats.bits_consumed,
            trailing_bits: (stream_bytes * 8).saturating_sub(stats.bits_consumed),
            end: stats.end.into(),
            width_changes: stats
                .width_changes
                .iter()
                .map(|change| WidthChangeJson {
                    bit_offset: change.bit_offset,
                    bits: change.bits,
                })
                .collect(),
        }
    }
}

pub fn cmd_inspect(
    input: &Path,
    options: StreamOptions,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let data = std::fs::read(input)?;
    let decoder = LzwDecoder::new(options.config())?;
    let (decoded, stats) = decoder.decode_with_stats(&data)?;
    let report = InspectJson::new(input, data.len(), decoded.len(), &stats);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Stream Information");
    println!("==================");
    println!("File: {}", report.file);
    println!("Stream size: {} bytes", report.stream_bytes);
    println!("Decoded size: {} bytes", report.decoded_bytes);
    println!("Codewords: {}", report.codewords);
    println!("Table resets: {}", report.clears);
    println!("Bits consumed: {}", report.bits_consumed);
    println!("Trailing bits: {}", report.trailing_bits);
    match stats.end {
        StreamEnd::EndOfData => println!("End: END_OF_DATA"),
        StreamEnd::Exhausted => println!("End: input exhausted (no END_OF_DATA)"),
        StreamEnd::UnresolvedCode(code) => println!("End: unresolvable code {}", code),
    }

    if !report.width_changes.is_empty() {
        println!();
        println!("Width changes:");
        for change in &report.width_changes {
            println!("  bit {:>10}: {} bits", change.bit_offset, change.bits);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxilzw_codec::{LzwConfig, compress};

    fn report_for(stream: &[u8]) -> InspectJson {
        let decoder = LzwDecoder::new(LzwConfig::DEFAULT).unwrap();
        let (decoded, stats) = decoder.decode_with_stats(stream).unwrap();
        InspectJson::new(Path::new("test.lzw"), stream.len(), decoded.len(), &stats)
    }

    #[test]
    fn test_report_for_complete_stream() {
        let stream = compress(b"AAAAAAAA").unwrap();
        let report = report_for(&stream);

        assert_eq!(report.decoded_bytes, 8);
        assert_eq!(report.codewords, 5);
        assert_eq!(report.bits_consumed, 45);
        assert_eq!(report.trailing_bits, 3);
        assert!(matches!(report.end, EndJson::EndOfData));
    }

    #[test]
    fn test_report_json_shape() {
        let stream = compress(b"").unwrap();
        let value = serde_json::to_value(report_for(&stream)).unwrap();

        assert_eq!(value["end"]["kind"], "end_of_data");
        assert_eq!(value["decoded_bytes"], 0);
        assert_eq!(value["width_changes"], serde_json::json!([]));
    }

    #[test]
    fn test_report_unresolved_code() {
        // 9-bit code 300 as the first codeword.
        let report = report_for(&[0x96, 0x00]);
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["end"]["kind"], "unresolved_code");
        assert_eq!(value["end"]["code"], 300);
    }
}
