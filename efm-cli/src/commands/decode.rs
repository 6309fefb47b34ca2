use anyhow::{Context, Result};
use colored::*;
use efm_core::{FrameDecoder, FrameError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Read};
use tracing::{info, warn};

#[derive(Serialize, Deserialize)]
pub struct DecodedFrame {
    pub index: usize,
    pub subcode: u8,
    pub sync0: bool,
    pub sync1: bool,
    pub subcode_error: bool,
    /// Data symbols as a hex string
    pub data: String,
    /// Indices of flagged data symbols
    pub errors: Vec<usize>,
    pub runs_supplied: usize,
    pub runs_consumed: usize,
    pub runs_clamped: usize,
    pub truncated: bool,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodeSummary {
    pub frames_in: usize,
    pub frames_decoded: usize,
    pub missing_input: usize,
    pub sync0: usize,
    pub sync1: usize,
    pub subcode_errors: usize,
    pub symbol_errors: usize,
    pub truncated: usize,
    pub runs_clamped: usize,
}

fn read_stream<R: Read>(mut reader: R) -> Result<String> {
    let mut buf = String::new();
    reader
        .read_to_string(&mut buf)
        .with_context(|| "Failed to read T-values from stdin")?;
    Ok(buf)
}

fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        read_stream(io::stdin().lock())
    } else {
        fs::read_to_string(input).with_context(|| format!("Failed to read input file: {}", input))
    }
}

pub fn execute(input: &str, output: Option<&str>, stats_only: bool) -> Result<DecodeSummary> {
    info!("Decoding T-values from: {}", input);

    let content = read_input(input)?;
    let frames_in: Vec<Vec<i32>> =
        serde_json::from_str(&content).with_context(|| "Failed to parse T-value JSON input")?;

    info!("Found {} frames to decode", frames_in.len());

    let decoder = FrameDecoder::new();
    let mut summary = DecodeSummary {
        frames_in: frames_in.len(),
        ..DecodeSummary::default()
    };
    let mut decoded = Vec::with_capacity(frames_in.len());

    for (index, t_values) in frames_in.iter().enumerate() {
        let (frame, stats) = match decoder.decode_with_stats(t_values) {
            Ok(result) => result,
            Err(FrameError::MissingInput) => {
                warn!("Frame {} has no T-values, skipping", index);
                summary.missing_input += 1;
                continue;
            }
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to decode frame {}", index));
            }
        };

        summary.frames_decoded += 1;
        summary.sync0 += frame.is_sync0() as usize;
        summary.sync1 += frame.is_sync1() as usize;
        summary.subcode_errors += frame.subcode_error() as usize;
        summary.symbol_errors += stats.symbol_errors;
        summary.truncated += stats.expansion.truncated as usize;
        summary.runs_clamped += stats.expansion.runs_clamped;

        decoded.push(DecodedFrame {
            index,
            subcode: frame.subcode_symbol(),
            sync0: frame.is_sync0(),
            sync1: frame.is_sync1(),
            subcode_error: frame.subcode_error(),
            data: hex::encode(frame.data_symbols()),
            errors: frame
                .error_symbols()
                .iter()
                .enumerate()
                .filter(|&(_, &e)| e)
                .map(|(i, _)| i)
                .collect(),
            runs_supplied: stats.runs_supplied,
            runs_consumed: stats.expansion.runs_consumed,
            runs_clamped: stats.expansion.runs_clamped,
            truncated: stats.expansion.truncated,
        });
    }

    print_summary(&summary);

    if stats_only {
        return Ok(summary);
    }

    if let Some(output_path) = output {
        let json = serde_json::to_string_pretty(&decoded)
            .with_context(|| "Failed to serialize decoded frames")?;

        fs::write(output_path, json)
            .with_context(|| format!("Failed to write output file: {}", output_path))?;

        info!("Decoded frames written to: {}", output_path);
    } else {
        println!("=== Decoded Frames ===");
        for frame in &decoded {
            let marker = if frame.sync0 {
                "S0".cyan()
            } else if frame.sync1 {
                "S1".cyan()
            } else if frame.subcode_error {
                "??".red()
            } else {
                format!("{:02x}", frame.subcode).normal()
            };
            println!(
                "Frame {:>5} [{}] {} ({} errors)",
                frame.index,
                marker,
                frame.data,
                frame.errors.len()
            );
        }
    }

    Ok(summary)
}

fn print_summary(summary: &DecodeSummary) {
    println!("\n=== Decode Results ===");
    println!("Frames in:         {}", summary.frames_in);
    println!("Frames decoded:    {}", summary.frames_decoded);
    if summary.missing_input > 0 {
        println!("Missing input:     {}", summary.missing_input.to_string().yellow());
    }
    println!("Sync 0 frames:     {}", summary.sync0);
    println!("Sync 1 frames:     {}", summary.sync1);
    if summary.symbol_errors > 0 {
        println!("Symbol errors:     {}", summary.symbol_errors.to_string().red());
    } else {
        println!("Symbol errors:     {}", summary.symbol_errors.to_string().green());
    }
    println!("Subcode errors:    {}", summary.subcode_errors);
    println!("Truncated frames:  {}", summary.truncated);
    println!("Clamped T-values:  {}", summary.runs_clamped);
    println!();
}
