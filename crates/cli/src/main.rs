use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{bail, Context, Result};
use clap::Parser;
use mecs_algorithms::BinaryVector;
use mecs_api::{Serialize, SerializeSecret};
use mecs_params::pqc::mceliece::MECS_2048_50;
use mecs_pke::{decrypt, encrypt, generate_keypair, McElieceParams, PublicKey, SecretKey};
use rand::{rngs::OsRng, CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use zeroize::Zeroize;

const SECRET_KEY_FILE: &str = "prikey.bin";
const PUBLIC_KEY_FILE: &str = "pubkey.bin";

#[derive(Parser, Debug)]
#[command(
    name = "mecs",
    version,
    about = "Generate a McEliece key pair and run an encrypt/decrypt round trip"
)]
struct Args {
    /// Field exponent: the code has length n = 2^m
    #[arg(short, default_value_t = MECS_2048_50.m)]
    m: usize,

    /// Number of correctable errors
    #[arg(short, default_value_t = MECS_2048_50.t)]
    t: usize,

    /// Write prikey.bin and pubkey.bin
    #[arg(short, long, action = clap::ArgAction::SetTrue)]
    save: bool,

    #[arg(long, value_name = "DIR", default_value = ".")]
    out_dir: PathBuf,

    /// Seed a ChaCha20 generator instead of using the OS RNG
    #[arg(long, value_name = "N")]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    match args.seed {
        Some(seed) => {
            log::info!("using deterministic ChaCha20 RNG with seed {}", seed);
            run(&args, &mut ChaCha20Rng::seed_from_u64(seed))
        }
        None => run(&args, &mut OsRng),
    }
}

fn run<R: RngCore + CryptoRng>(args: &Args, rng: &mut R) -> Result<()> {
    let params = McElieceParams::new(args.m, args.t)
        .with_context(|| format!("initialising parameters m = {}, t = {}", args.m, args.t))?;
    println!(
        "m = {}, n = {}, t = {}, k = {}",
        params.m(),
        params.n(),
        params.t(),
        params.k()
    );

    let (public_key, secret_key) =
        generate_keypair(&params, rng).context("generating key pair")?;
    println!(
        "public key: {} bytes, secret key: {} bytes",
        params.public_key_bytes(),
        params.secret_key_bytes()
    );

    let plaintext = BinaryVector::random(params.k(), rng);
    let ciphertext = encrypt(&public_key, &plaintext, rng).context("encrypting")?;
    let mut recovered = decrypt(&secret_key, &ciphertext).context("decrypting")?;
    log::debug!("ciphertext {}", hex::encode(ciphertext.to_bytes()));

    let matches = recovered == plaintext;
    recovered.zeroize();
    if !matches {
        bail!("decrypted plaintext differs from the original");
    }
    println!("decrypted plaintext matches the original");

    if args.save {
        save_keys(&args.out_dir, &public_key, &secret_key)?;
    }
    Ok(())
}

fn save_keys(dir: &Path, public_key: &PublicKey, secret_key: &SecretKey) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;

    let secret_path = dir.join(SECRET_KEY_FILE);
    let secret_bytes = secret_key.to_bytes_zeroizing();
    fs::write(&secret_path, &*secret_bytes)
        .with_context(|| format!("writing {}", secret_path.display()))?;
    set_mode_if_unix(&secret_path, 0o600)?;

    let public_path = dir.join(PUBLIC_KEY_FILE);
    fs::write(&public_path, public_key.to_bytes())
        .with_context(|| format!("writing {}", public_path.display()))?;

    println!(
        "wrote {} and {}",
        secret_path.display(),
        public_path.display()
    );
    Ok(())
}

#[cfg(unix)]
fn set_mode_if_unix(path: &Path, mode: u32) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(mode))
        .with_context(|| format!("chmod {}", path.display()))?;
    Ok(())
}

#[cfg(not(unix))]
fn set_mode_if_unix(_path: &Path, _mode: u32) -> Result<()> {
    Ok(())
}
