//! `wordseal` - Encode text or bytes as checksummed word mnemonics and back.
//!
//! **Usage:**
//! ```text
//! wordseal encode "Hello, World!"
//! wordseal encode --hex 00ff10
//! wordseal decode access major forget hockey ...
//! wordseal decode --fix "acces majr forgett ..."
//! wordseal fix "hellp, WORLDD"
//! wordseal check access major forget hockey ...
//! ```

#![deny(clippy::unwrap_used, clippy::expect_used, missing_docs)]

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{info, Level};

use wordseal_codec::cleanup;
use wordseal_codec::correction::heuristic_mnemonic_with;
use wordseal_codec::mnemonic::split_words;
use wordseal_codec::{wordlist, CodecConfig, MnemonicCodec};

/// Encode and decode checksummed word mnemonics.
#[derive(Parser)]
#[command(name = "wordseal", version, about)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Comma-separated checksum customization digits (each below 1024).
    #[arg(
        long,
        env = "WORDSEAL_CUSTOMIZATION",
        value_delimiter = ',',
        global = true
    )]
    customization: Vec<u16>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode text (or hex bytes with --hex) as a mnemonic.
    Encode(EncodeArgs),
    /// Decode a mnemonic back to text (or hex bytes with --hex).
    Decode(DecodeArgs),
    /// Normalize and prefix-correct mnemonic text without decoding it.
    Fix(TextArgs),
    /// Verify a mnemonic's checksum without decoding it.
    Check(TextArgs),
}

#[derive(Args)]
struct TextArgs {
    /// Input words; multiple arguments are joined with spaces.
    #[arg(required = true, num_args = 1..)]
    text: Vec<String>,
}

#[derive(Args)]
struct EncodeArgs {
    /// Treat the input as hex-encoded bytes.
    #[arg(long)]
    hex: bool,

    #[command(flatten)]
    input: TextArgs,
}

#[derive(Args)]
struct DecodeArgs {
    /// Print the payload as hex instead of text.
    #[arg(long)]
    hex: bool,

    /// Apply prefix correction to unknown words before decoding.
    #[arg(long)]
    fix: bool,

    #[command(flatten)]
    input: TextArgs,
}

impl TextArgs {
    fn joined(&self) -> String {
        self.text.join(" ")
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = CodecConfig::new(cli.customization);
    let codec = MnemonicCodec::from_config(wordlist::english(), &config)
        .context("invalid --customization")?;
    info!("using customization {:?}", codec.customization());

    match cli.command {
        Command::Encode(args) => {
            let input = args.input.joined();
            let words = if args.hex {
                let bytes = hex::decode(input.trim()).context("input is not valid hex")?;
                codec.encode_bytes(&bytes)
            } else {
                codec.encode(&input)
            };
            println!("{}", words.join(" "));
        }
        Command::Decode(args) => {
            let input = args.input.joined();
            let normalized = if args.fix {
                heuristic_mnemonic_with(&input, codec.wordlist())
            } else {
                cleanup::normalize_with(&input, codec.wordlist())
            };
            info!("decoding {:?}", normalized);
            let words = split_words(&normalized);
            if args.hex {
                let bytes = codec.decode_bytes(&words).context("could not decode mnemonic")?;
                println!("{}", hex::encode(bytes));
            } else {
                let text = codec.decode(&words).context("could not decode mnemonic")?;
                println!("{}", text);
            }
        }
        Command::Fix(args) => {
            println!("{}", heuristic_mnemonic_with(&args.joined(), codec.wordlist()));
        }
        Command::Check(args) => {
            let normalized = cleanup::normalize_with(&args.joined(), codec.wordlist());
            if let Err(err) = codec.validate(&split_words(&normalized)) {
                println!("invalid: {}", err);
                return Ok(ExitCode::FAILURE);
            }
            println!("valid");
        }
    }
    Ok(ExitCode::SUCCESS)
}
