//! Command-line interface for converting `.net` files between the OLCA and Hugin dialects.
//!
//! Usage:
//!   net-convert `<path>` --direction to-hugin                  - Convert a file, print to stdout
//!   net-convert `<path>` --direction to-olca --output-dir out  - Save as `out/Hugin2OLCA-<name>`
//!   net-convert - --direction to-olca --output `<path>`        - Convert stdin into a file
//!   net-convert `<path>` --direction to-hugin --json           - Print the response as JSON

use anyhow::Context;
use clap::Parser;
use lib_io_net_dialect::io::{input_filename, load_input, save_output, save_output_to};
use lib_io_net_dialect::{ConversionDirection, ConversionRequest};
use std::io::{self, Read};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "net-convert", version, about = "Convert `.net` files between OLCA and Hugin (Genie)")]
struct Args {
    /// Input `.net` file (`-` or nothing for stdin).
    input: Option<PathBuf>,

    /// Conversion direction: `to-hugin` (OLCA → Hugin) or `to-olca` (Hugin → OLCA).
    #[arg(short, long, default_value_t = ConversionDirection::OlcaToHugin)]
    direction: ConversionDirection,

    /// Write the result into this file.
    #[arg(short, long, conflicts_with = "output_dir")]
    output: Option<PathBuf>,

    /// Write the result into this directory, using the suggested file name.
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Print the conversion response (text and suggested file name) as JSON.
    #[arg(long)]
    json: bool,

    /// Increase logging verbosity (`-v` for debug, `-vv` for trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "lib_io_net_dialect=debug,net_convert=debug",
        _ => "lib_io_net_dialect=trace,net_convert=trace",
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_target(true)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}

fn read_request(args: &Args) -> anyhow::Result<ConversionRequest> {
    match args.input.as_deref() {
        Some(path) if path.as_os_str() != "-" => {
            let text = load_input(path)?;
            let mut request = ConversionRequest::new(text, args.direction);
            request.filename = input_filename(path);
            Ok(request)
        }
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read from stdin")?;
            Ok(ConversionRequest::new(text, args.direction))
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let request = read_request(&args)?;
    info!(direction = %request.direction.label(), "Converting.");
    let response = request.run();

    if args.json {
        let json = response
            .to_json_string_pretty()
            .context("Failed to serialize conversion response")?;
        println!("{json}");
        return Ok(());
    }

    if args.output.is_none() && args.output_dir.is_none() {
        println!("{}", response.text);
        return Ok(());
    }

    if response.is_empty() {
        warn!("Conversion produced no output; nothing was written.");
        return Ok(());
    }

    let path = if let Some(path) = &args.output {
        save_output_to(&response.text, path)?;
        path.clone()
    } else if let Some(dir) = &args.output_dir {
        save_output(&response.text, dir, &response.suggested_filename)?
    } else {
        return Ok(());
    };
    info!(path = %path.display(), "Output written.");
    Ok(())
}
