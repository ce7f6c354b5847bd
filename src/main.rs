//! speckrand - print a labeled run of Speck128 OFB pseudo-random numbers.

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use speckrand::{entropy, SpeckRng};

#[derive(Parser)]
#[command(name = "speckrand")]
#[command(about = "Generate pseudo-random numbers from Speck128/128 in output-feedback mode")]
#[command(version)]
struct Cli {
    /// Number of values to print
    #[arg(short = 'n', long, default_value_t = 10)]
    count: usize,

    /// Master key as 32 hex digits (default: OS entropy)
    #[arg(long)]
    key: Option<String>,

    /// Initial block as 32 hex digits (default: OS entropy)
    #[arg(long)]
    iv: Option<String>,

    /// Print 32-bit words as 8-digit hex instead of decimal
    #[arg(long)]
    hex: bool,

    /// Print single bytes instead of 32-bit words
    #[arg(long)]
    bytes: bool,
}

fn decode_hex(label: &str, value: &str) -> Result<Vec<u8>> {
    hex::decode(value.trim()).with_context(|| format!("--{} is not valid hex", label))
}

fn build_rng(cli: &Cli) -> Result<SpeckRng> {
    let key = match &cli.key {
        Some(k) => decode_hex("key", k)?,
        None => entropy::random_key()
            .context("failed to draw master key")?
            .to_vec(),
    };
    let iv = match &cli.iv {
        Some(v) => decode_hex("iv", v)?,
        None => entropy::random_iv()
            .context("failed to draw initial block")?
            .to_vec(),
    };
    let rng = SpeckRng::new(&key, &iv).context("failed to construct generator")?;
    info!(
        "generator ready (key: {}, iv: {})",
        if cli.key.is_some() { "fixed" } else { "random" },
        if cli.iv.is_some() { "fixed" } else { "random" }
    );
    Ok(rng)
}

fn render(cli: &Cli, rng: &mut SpeckRng) -> String {
    if cli.bytes {
        let b = rng.generate_byte();
        if cli.hex {
            format!("{:02x}", b)
        } else {
            b.to_string()
        }
    } else {
        let w = rng.generate_word();
        if cli.hex {
            format!("{:08x}", w)
        } else {
            w.to_string()
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let mut rng = build_rng(&cli)?;

    for i in 1..=cli.count {
        println!("RNG{}: {}", i, render(&cli, &mut rng));
    }

    Ok(())
}
