use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use clap::{Parser, ValueEnum};
use zone_keys::{Context, FileSession, KeySession, SignAlgorithm};

#[derive(Debug, Clone, ValueEnum)]
enum Algorithm {
    RsaSha256,
    EcdsaP256Sha256,
    Ed25519,
}

impl From<Algorithm> for SignAlgorithm {
    fn from(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::RsaSha256 => SignAlgorithm::RsaSha256,
            Algorithm::EcdsaP256Sha256 => SignAlgorithm::EcdsaP256Sha256,
            Algorithm::Ed25519 => SignAlgorithm::Ed25519,
        }
    }
}

#[derive(Parser)]
struct Args {
    /// File holding the ZSK private key.
    #[clap(long, env = "ZSK_KEY_FILE")]
    zsk_file: PathBuf,
    /// File holding the KSK private key.
    #[clap(long, env = "KSK_KEY_FILE")]
    ksk_file: PathBuf,
    #[clap(long, env = "SIGN_ALGORITHM", default_value = "rsa-sha256")]
    algorithm: Algorithm,
    /// Generate fresh keys, overwriting any existing file content.
    #[clap(long)]
    create_keys: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();
    let ctx = Context {
        algorithm: args.algorithm.into(),
        create_keys: args.create_keys,
    };

    let zsk_file =
        open_key_file(&args.zsk_file, args.create_keys).context("opening ZSK key file")?;
    let ksk_file =
        open_key_file(&args.ksk_file, args.create_keys).context("opening KSK key file")?;

    let mut session = FileSession::new(&ctx, zsk_file, ksk_file);
    let keys = session.keys().context("loading signing keys")?;
    let (zsk_bytes, ksk_bytes) = session
        .public_key_bytes(&keys)
        .context("exporting DNSKEY public keys")?;

    println!("ksk: {}", hex::encode(&ksk_bytes));
    println!("zsk: {}", hex::encode(&zsk_bytes));

    session.end()?;
    Ok(())
}

/// Truncates only when fresh keys are requested; otherwise the existing
/// content must survive to be read back.
fn open_key_file(path: &Path, create: bool) -> std::io::Result<File> {
    OpenOptions::new()
        .read(true)
        .write(true)
        .create(create)
        .truncate(create)
        .open(path)
}
