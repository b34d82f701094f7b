//! Command line key generator.
//!
//! Prints a freshly generated key pair as JSON on stdout. Logs go to stderr so the
//! output can be piped straight into other tools.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use monas_jwk::generate_keys;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Compact JSON on a single line.
    Json,
    /// Indented JSON map.
    Dict,
}

/// jwkgen CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "jwkgen")]
#[command(about = "Generate an RSA or EC key pair as JSON Web Keys")]
struct Args {
    /// Key type: must be RSA or EC.
    kty: String,

    /// Parameters specific to kty. For RSA the key size, one of 1024, 2048, 4096 (default).
    /// For EC the curve, one of P-256, P-384, P-521 (default).
    #[arg(short, long)]
    params: Option<String>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    output: OutputFormat,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level)),
        )
        .init();

    println!("{}", render(&args)?);

    Ok(())
}

/// Generates the requested key pair and formats it for stdout. An error here
/// makes the process exit with a non-zero status.
fn render(args: &Args) -> Result<String> {
    let key_pair = generate_keys(&args.kty, args.params.as_deref())?;
    tracing::info!(kid = ?key_pair.public_key.kid(), "generated key pair");

    let output = match args.output {
        OutputFormat::Json => key_pair.as_text()?,
        OutputFormat::Dict => key_pair.as_pretty_text()?,
    };
    Ok(output)
}
