use anyhow::Context;
use lib_io_net_dialect::{ConversionDirection, convert};
use std::io::{self, Read};

fn main() -> anyhow::Result<()> {
    // Read from stdin
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read from stdin")?;

    // Output in the Hugin (Genie) dialect
    println!("{}", convert(&input, ConversionDirection::OlcaToHugin));
    Ok(())
}
