use cipherforge::error::{CfResult, CipherError};
use cipherforge::key::Key;
use cipherforge::optimizer::mutation;
use cipherforge::text::normalize;
use clap::Args;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct EncryptArgs {
    /// Plaintext (or ciphertext with --decrypt). Non-letters are ignored.
    pub text: Option<String>,

    #[arg(short, long, conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Key in alphabet form: position i holds the cipher letter for plain letter i.
    #[arg(short, long)]
    pub key: Option<String>,

    /// Caesar shift instead of a full key.
    #[arg(long, conflicts_with = "key")]
    pub shift: Option<u8>,

    /// Seed for the random key used when neither --key nor --shift is given.
    #[arg(short = 'S', long)]
    pub seed: Option<u64>,

    #[arg(short, long, default_value_t = false)]
    pub decrypt: bool,
}

pub fn run(args: &EncryptArgs) -> CfResult<()> {
    let key = match (&args.key, args.shift) {
        (Some(k), _) => Key::from_alphabet(k)?,
        (None, Some(shift)) => Key::caesar(shift),
        (None, None) if args.decrypt => {
            return Err(CipherError::Config(
                "--decrypt needs --key or --shift".to_string(),
            ))
        }
        (None, None) => {
            let mut rng = match args.seed {
                Some(s) => fastrand::Rng::with_seed(s),
                None => fastrand::Rng::new(),
            };
            mutation::random_key(&mut rng)
        }
    };

    let input = super::read_input(args.text.as_deref(), args.file.as_deref())?;
    let letters = normalize(&input);

    let output = if args.decrypt {
        key.decrypt(&letters)
    } else {
        key.encrypt(&letters)
    };

    info!("🔑 Key: {}", key);
    println!("{}", String::from_utf8_lossy(&output));
    Ok(())
}
