//! huffpack CLI - Huffman file compression
//!
//! Compresses and decompresses single files with Huffman coding.

use clap::{Parser, Subcommand};
use huffpack_huffman::{compress, decompress, inspect};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// Extension given to compressed files.
const PACKED_EXTENSION: &str = "hpk";

#[derive(Parser)]
#[command(name = "huffpack")]
#[command(author, version, about = "Huffman file compression")]
#[command(long_about = "
huffpack compresses single files with Huffman coding. The code tree is
stored in the output, so no side information is needed to decompress.

Examples:
  huffpack compress notes.txt
  huffpack compress notes.txt -o backup.hpk
  huffpack decompress notes.txt.hpk
  huffpack decompress notes.txt.hpk -o restored.txt
  huffpack info notes.txt.hpk
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a file
    #[command(alias = "c")]
    Compress {
        /// File to compress
        input: PathBuf,

        /// Output file (defaults to the input name plus .hpk)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Overwrite the output file if it exists
        #[arg(short, long)]
        force: bool,
    },

    /// Decompress a file
    #[command(alias = "d")]
    Decompress {
        /// File to decompress
        input: PathBuf,

        /// Output file (defaults to the input name without .hpk)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Overwrite the output file if it exists
        #[arg(short, long)]
        force: bool,
    },

    /// Show information about a compressed file
    #[command(alias = "i")]
    Info {
        /// Compressed file to inspect
        input: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Compress {
            input,
            output,
            force,
        } => cmd_compress(&input, output.as_deref(), force),
        Commands::Decompress {
            input,
            output,
            force,
        } => cmd_decompress(&input, output.as_deref(), force),
        Commands::Info { input } => cmd_info(&input),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Default output path for compression: the input name plus `.hpk`.
fn packed_name(input: &Path) -> PathBuf {
    let mut name = input.as_os_str().to_owned();
    name.push(".");
    name.push(PACKED_EXTENSION);
    PathBuf::from(name)
}

/// Default output path for decompression: the input name without
/// `.hpk`, or with `.out` appended when the extension is something
/// else.
fn unpacked_name(input: &Path) -> PathBuf {
    if input.extension().and_then(|e| e.to_str()) == Some(PACKED_EXTENSION) {
        input.with_extension("")
    } else {
        let mut name = input.as_os_str().to_owned();
        name.push(".out");
        PathBuf::from(name)
    }
}

fn check_overwrite(path: &Path, force: bool) -> Result<(), Box<dyn std::error::Error>> {
    if path.exists() && !force {
        return Err(format!(
            "output file {} already exists (use --force to overwrite)",
            path.display()
        )
        .into());
    }
    Ok(())
}

fn cmd_compress(
    input: &Path,
    output: Option<&Path>,
    force: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let default_output;
    let output = match output {
        Some(path) => path,
        None => {
            default_output = packed_name(input);
            &default_output
        }
    };
    check_overwrite(output, force)?;

    let reader = BufReader::new(File::open(input)?);
    let writer = BufWriter::new(File::create(output)?);

    let summary = match compress(reader, writer) {
        Ok(summary) => summary,
        Err(e) => {
            let _ = std::fs::remove_file(output);
            return Err(e.into());
        }
    };

    println!(
        "{} ({} bytes) -> {} ({} bytes)",
        input.display(),
        summary.input_bytes,
        output.display(),
        summary.output_bytes
    );
    println!("Compression ratio: {:.1}%", summary.ratio() * 100.0);
    if summary.output_bytes > summary.input_bytes {
        println!("Note: output is larger than input (header overhead)");
    }

    Ok(())
}

fn cmd_decompress(
    input: &Path,
    output: Option<&Path>,
    force: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let default_output;
    let output = match output {
        Some(path) => path,
        None => {
            default_output = unpacked_name(input);
            &default_output
        }
    };
    check_overwrite(output, force)?;

    let reader = BufReader::new(File::open(input)?);
    let writer = BufWriter::new(File::create(output)?);

    let written = match decompress(reader, writer) {
        Ok(written) => written,
        Err(e) => {
            let _ = std::fs::remove_file(output);
            return Err(e.into());
        }
    };

    println!(
        "{} -> {} ({} bytes)",
        input.display(),
        output.display(),
        written
    );

    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let metadata = std::fs::metadata(input)?;
    let reader = BufReader::new(File::open(input)?);
    let info = inspect(reader)?;

    println!("huffpack stream");
    println!("===============");
    println!("File: {}", input.display());
    println!("Size: {} bytes", metadata.len());
    println!("Distinct symbols: {}", info.symbol_count);
    println!("Longest code: {} bits", info.tree_depth);
    println!(
        "Header: {} bits ({} bytes on disk)",
        info.header_bits,
        info.header_bits.div_ceil(8)
    );

    Ok(())
}
