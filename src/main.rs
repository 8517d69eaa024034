//! bytearray CLI - encode and decode typed binary values.
//!
//! This is the main entry point for the bytearray command-line application.

mod field;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use bytearray::{ByteArray, Endian};

use crate::field::{Kind, Value};

/// bytearray - typed binary encoding tool
#[derive(Parser)]
#[command(name = "bytearray")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log buffer growth and other internals (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode TYPE:VALUE tokens into bytes
    Encode {
        /// Byte order for multi-byte values
        #[arg(short, long, env = "BYTEARRAY_ENDIAN", default_value = "big")]
        endian: Endian,

        /// Output file (hex dump to stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Values such as u32:0x87654321, i16:-2, utf:hello
        #[arg(required = true)]
        values: Vec<Value>,
    },

    /// Decode a file against a list of field types
    Decode {
        /// Byte order for multi-byte values
        #[arg(short, long, env = "BYTEARRAY_ENDIAN", default_value = "big")]
        endian: Endian,

        /// Input file
        #[arg(short, long)]
        input: PathBuf,

        /// Offset to start decoding at
        #[arg(long, default_value_t = 0)]
        offset: usize,

        /// Field types such as u32, i16, utf, utfbytes:5
        #[arg(required = true)]
        fields: Vec<Kind>,
    },

    /// Print a hex dump of a file
    Dump {
        /// Input file
        #[arg(short, long)]
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if cli.verbose { "trace" } else { "warn" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Encode { endian, output, values } => {
            cmd_encode(endian, output.as_ref(), &values)?;
        }
        Commands::Decode { endian, input, offset, fields } => {
            cmd_decode(endian, &input, offset, &fields)?;
        }
        Commands::Dump { input } => {
            cmd_dump(&input)?;
        }
    }

    Ok(())
}

fn cmd_encode(endian: Endian, output: Option<&PathBuf>, values: &[Value]) -> Result<()> {
    let mut buf = ByteArray::new();
    buf.set_endian(endian);

    for (i, value) in values.iter().enumerate() {
        value
            .write_to(&mut buf)
            .with_context(|| format!("Failed to encode value #{} ({})", i + 1, value))?;
    }

    tracing::debug!(bytes = buf.len(), %endian, "encoded values");

    match output {
        Some(path) => {
            fs::write(path, buf.as_bytes()).context("Failed to write output file")?;
            println!("Wrote {} bytes to {}", buf.len(), path.display());
        }
        None => print!("{}", hex_dump(buf.as_bytes())),
    }

    Ok(())
}

fn cmd_decode(endian: Endian, input: &PathBuf, offset: usize, fields: &[Kind]) -> Result<()> {
    let data = fs::read(input).context("Failed to read input file")?;

    let mut buf = ByteArray::from(data);
    buf.set_endian(endian);
    buf.set_position(offset);

    for (i, kind) in fields.iter().enumerate() {
        let position = buf.position();
        let value = kind
            .read_from(&mut buf)
            .with_context(|| format!("Failed to decode field #{} at offset {:#x}", i + 1, position))?;
        println!("{:#010x}  {}", position, value);
    }

    if buf.bytes_available() > 0 {
        println!("\n{} trailing bytes", buf.bytes_available());
    }

    Ok(())
}

fn cmd_dump(input: &PathBuf) -> Result<()> {
    let data = fs::read(input).context("Failed to read input file")?;
    print!("{}", hex_dump(&data));
    println!("\nTotal: {} bytes", data.len());

    Ok(())
}

/// Format bytes as offset / hex / ASCII lines of 16.
fn hex_dump(bytes: &[u8]) -> String {
    let mut out = String::new();

    for (row, chunk) in bytes.chunks(16).enumerate() {
        let hex: Vec<String> = chunk.iter().map(|b| format!("{:02x}", b)).collect();
        let ascii: String = chunk
            .iter()
            .map(|&b| if b.is_ascii_graphic() || b == b' ' { b as char } else { '.' })
            .collect();

        out.push_str(&format!("{:08x}  {:<47}  |{}|\n", row * 16, hex.join(" "), ascii));
    }

    out
}
