use std::path::PathBuf;

use anyhow::{ensure, Context, Result};
use clap::Parser;
use kzg_blob_vectors::{ckzg::CKzgBackend, harness::VectorHarness, vector::TestVector};
use tracing_subscriber::EnvFilter;

/// Generates EIP-4844 KZG test vectors for the index blob and checks them
/// against c-kzg.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Trusted setup in the c-kzg text format.
    #[clap(default_value = "./trusted_setup.txt")]
    trusted_setup: PathBuf,
    /// Domain index to open; may be repeated.
    #[clap(short, long = "index", default_values_t = vec![1usize])]
    indices: Vec<usize>,
}

fn render_vectors(vectors: &[TestVector]) -> Result<String> {
    Ok(serde_json::to_string_pretty(vectors)?)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    ensure!(!args.indices.is_empty(), "no indices requested");

    let harness = VectorHarness::<CKzgBackend>::from_trusted_setup(&args.trusted_setup)
        .with_context(|| format!("loading {}", args.trusted_setup.display()))?;
    let vectors = harness
        .run_indices(&args.indices)
        .context("vector checks failed")?;

    println!("{}", render_vectors(&vectors)?);
    Ok(())
}
