use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use std::fmt::Write as _;
use std::path::PathBuf;

use lhex_rs::source::{load_blocks, RawBlock, DEFAULT_SKIP};
use lhex_rs::{Alphabet, DecodeError, DecodedBlock, LhexDecoder, OpcodeTable};

mod report;
use report::{BlockError, BlockOut, Report};

#[derive(Parser, Debug)]
#[command(author, version, about = "lhex block disassembler CLI", long_about=None)]
struct Cli {
    /// Digit table to decode with
    #[arg(long, value_enum, default_value_t = AlphabetArg::Standard)]
    alphabet: AlphabetArg,
    /// Subcommand
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decode every block of a file
    Blocks {
        /// Input block file
        #[arg(value_name = "FILE")]
        input: PathBuf,
        /// Preamble lines to skip before the first block
        #[arg(long, default_value_t = DEFAULT_SKIP)]
        skip: usize,
        /// Output format: text or json
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Write output to file instead of stdout
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
        /// Log failing blocks and carry on with the next one
        #[arg(long)]
        keep_going: bool,
    },
    /// Decode single tokens
    Word {
        #[arg(value_name = "TOKEN", num_args = 1..)]
        tokens: Vec<String>,
    },
    /// Decode one delimited line
    Line {
        #[arg(value_name = "LINE")]
        line: String,
    },
    /// Render a number (hex or dec) as lhex digits
    Encode {
        value: String,
        /// Number of digits to emit
        #[arg(long, default_value_t = 8usize)]
        width: usize,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum AlphabetArg { Standard, Revised }

impl From<AlphabetArg> for Alphabet {
    fn from(a: AlphabetArg) -> Self {
        match a {
            AlphabetArg::Standard => Alphabet::STANDARD,
            AlphabetArg::Revised => Alphabet::REVISED,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat { Text, Json }

fn parse_u32(s: &str) -> Result<u32> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Ok(u32::from_str_radix(hex, 16)?)
    } else {
        Ok(s.parse::<u32>()?)
    }
}

/// Decoded blocks keyed by the line they start on. Without `keep_going` the
/// first failure aborts.
fn decode_all(
    dec: &LhexDecoder,
    raw: &[RawBlock],
    keep_going: bool,
) -> Result<Vec<(usize, Result<DecodedBlock, DecodeError>)>> {
    let mut out = Vec::with_capacity(raw.len());
    for rb in raw {
        let res = dec.decode_block(&rb.lines);
        if let Err(e) = &res {
            if !keep_going {
                return Err(anyhow!("block starting at line {}: {e}", rb.first_line));
            }
            warn!(first_line = rb.first_line, error = %e, "skipping block");
        }
        out.push((rb.first_line, res));
    }
    Ok(out)
}

fn build_report(decoded: &[(usize, Result<DecodedBlock, DecodeError>)]) -> Report {
    let mut report = Report::default();
    for (first_line, res) in decoded {
        match res {
            Ok(b) => report.blocks.push(BlockOut::new(*first_line, b)),
            Err(e) => report.errors.push(BlockError { first_line: *first_line, error: e.to_string() }),
        }
    }
    report
}

fn render_text(decoded: &[(usize, Result<DecodedBlock, DecodeError>)]) -> String {
    let mut buf = String::new();
    for (first_line, res) in decoded {
        match res {
            Ok(b) => { let _ = write!(buf, "{b}"); }
            Err(e) => { let _ = writeln!(buf, "; block at line {first_line}: {e}\n"); }
        }
    }
    buf
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let dec = LhexDecoder::new(cli.alphabet.into(), OpcodeTable::STANDARD);

    match cli.cmd {
        Command::Blocks { input, skip, format, out, keep_going } => {
            let raw = load_blocks(&input, skip)?;
            let decoded = decode_all(&dec, &raw, keep_going)?;
            let text = match format {
                OutputFormat::Text => render_text(&decoded),
                OutputFormat::Json => serde_json::to_string_pretty(&build_report(&decoded))? + "\n",
            };
            if let Some(path) = out { std::fs::write(path, text)?; } else { print!("{}", text); }
        }
        Command::Word { tokens } => {
            for t in tokens {
                println!("{:<10} {}", t, dec.decode_word(&t)?);
            }
        }
        Command::Line { line } => {
            for w in dec.decode_line(&line)? {
                println!("{w}");
            }
        }
        Command::Encode { value, width } => {
            let v = parse_u32(&value)?;
            println!("{}", dec.alphabet.encode(v, width));
        }
    }

    Ok(())
}
