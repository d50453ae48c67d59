use std::fs::File;
use std::io::{Read, stdin};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "webjson-cli",
    about = "Re-encode JSON as ASCII-safe JSON for embedding in web pages",
    version
)]
struct Args {
    /// Decode and print plain JSON instead of re-encoding
    #[arg(short, long)]
    decode: bool,

    /// Maximum container nesting accepted while encoding
    #[arg(long, default_value_t = webjson::options::DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Pretty-print JSON on output (when decoding)
    #[arg(long, default_value_t = false)]
    pretty: bool,

    /// Log encoder decisions to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Input file (defaults to stdin)
    input: Option<PathBuf>,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Parses without serde_json's recursion limit; nesting is bounded by the
/// encoder's `--max-depth` instead.
fn parse_input(buf: &[u8]) -> Result<serde_json::Value> {
    let mut de = serde_json::Deserializer::from_slice(buf);
    de.disable_recursion_limit();
    let value = serde_json::Value::deserialize(&mut de)?;
    de.end()?;
    Ok(value)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut buf = Vec::new();
    match &args.input {
        Some(path) => {
            let mut f = File::open(path)
                .with_context(|| format!("cannot open {}", path.display()))?;
            f.read_to_end(&mut buf)?;
        }
        None => {
            stdin().read_to_end(&mut buf)?;
        }
    }
    debug!(bytes = buf.len(), "read input");

    let plain = parse_input(&buf).context("input is not valid JSON")?;

    if args.decode {
        if args.pretty {
            println!("{}", serde_json::to_string_pretty(&plain)?);
        } else {
            println!("{}", serde_json::to_string(&plain)?);
        }
    } else {
        let value = webjson::Value::from(plain);
        let options = webjson::Options::default().with_max_depth(args.max_depth);
        let out = webjson::encode_to_string(&value, &options).context("encoding failed")?;
        println!("{}", out);
    }

    Ok(())
}
