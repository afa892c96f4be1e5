//! Command-line STL converter.
//!
//! Thin driver around the `stl-codec` crate: reads one `.stl` file,
//! converts it to the requested representation, and writes the result
//! next to the input as `<stem>-converted-<mode>.stl`.
//!
//! # Usage
//!
//! ```text
//! stlconv <input file> <output mode>
//! ```
//!
//! Output modes:
//! - `STLB`: to binary STL
//! - `STLA`: to ASCII STL
//!
//! Mode keywords are case-insensitive; `binary` and `ascii` are
//! accepted aliases.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use stl_codec::{convert, detect_format, StlFormat};
use tracing::{info, warn};

/// Convert STL files between binary and ASCII representations.
#[derive(Parser)]
#[command(name = "stlconv")]
#[command(about = "Convert STL files between binary and ASCII", long_about = None)]
#[command(version)]
struct Cli {
    /// Input STL file path.
    input: PathBuf,

    /// Output mode: STLB (binary) or STLA (ASCII).
    mode: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    let cli = Cli::parse();

    if !cli
        .input
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("stl"))
    {
        bail!("input file {} is not a .stl file", cli.input.display());
    }

    let target: StlFormat = cli.mode.parse()?;

    let bytes = std::fs::read(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;

    let detected = detect_format(&bytes);
    if detected == target {
        warn!("detected same input and output format ({detected})");
    }

    let output = output_path(&cli.input, target);
    info!(
        "converting {} ({detected}) to {} ({target})",
        cli.input.display(),
        output.display()
    );

    let converted = convert(&bytes, target)
        .with_context(|| format!("failed to convert {}", cli.input.display()))?;

    std::fs::write(&output, converted)
        .with_context(|| format!("failed to write {}", output.display()))?;

    info!("file successfully converted to {target} format");
    Ok(())
}

/// Derive the output path: `<stem>-converted-<mode>.stl`, next to the
/// input.
fn output_path(input: &Path, target: StlFormat) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    input.with_file_name(format!("{stem}-converted-{}.stl", target.keyword()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_path_keeps_directory_and_stem() {
        let out = output_path(Path::new("/tmp/parts/bracket.stl"), StlFormat::Ascii);
        assert_eq!(out, Path::new("/tmp/parts/bracket-converted-stla.stl"));

        let out = output_path(Path::new("bracket.STL"), StlFormat::Binary);
        assert_eq!(out, Path::new("bracket-converted-stlb.stl"));
    }
}
