use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use lhex_rs::source::{load_blocks, DEFAULT_SKIP};
use lhex_rs::{Alphabet, LhexDecoder, OpcodeTable};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum AlphabetArg {
    Standard,
    Revised,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Decode an lhex block file and print the listing")]
struct Opts {
    /// Preamble lines to skip before the first block
    #[arg(long, default_value_t = DEFAULT_SKIP)]
    skip: usize,
    #[arg(long, value_enum, default_value_t = AlphabetArg::Standard)]
    alphabet: AlphabetArg,
    #[arg(value_name = "FILE", default_value = "bkjck.tx")]
    input: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let opts = Opts::parse();
    let alphabet = match opts.alphabet {
        AlphabetArg::Standard => Alphabet::STANDARD,
        AlphabetArg::Revised => Alphabet::REVISED,
    };
    let dec = LhexDecoder::new(alphabet, OpcodeTable::STANDARD);

    for raw in load_blocks(&opts.input, opts.skip)? {
        let block = dec
            .decode_block(&raw.lines)
            .with_context(|| format!("block starting at line {}", raw.first_line))?;
        print!("{block}");
    }

    Ok(())
}
