//! `chardetect`: command-line front-end for [`chardet_rs`].
//!
//! Grounded on the original rewrite's `cli.py`: default era filter is
//! `modern_web` unless `--legacy` or `--encoding-era` widens it, `--minimal`
//! prints only the encoding name, and each file (or stdin, if none given)
//! is reported on its own line.

use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use chardet_rs::consts::DEFAULT_MAX_BYTES;
use chardet_rs::enums::EncodingEra;
use chardet_rs::{detect, DetectOptions};

#[derive(Parser, Debug)]
#[command(name = "chardetect", version, about = "Detect character encoding of files.")]
struct Cli {
    /// Files to detect encoding of. Reads stdin if none are given.
    files: Vec<PathBuf>,

    /// Output only the encoding name.
    #[arg(long)]
    minimal: bool,

    /// Include legacy encodings (equivalent to --encoding-era all).
    #[arg(long)]
    legacy: bool,

    /// Restrict candidates to a specific encoding era.
    #[arg(short = 'e', long = "encoding-era", value_enum)]
    encoding_era: Option<EraArg>,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum EraArg {
    ModernWeb,
    LegacyIso,
    LegacyMac,
    LegacyRegional,
    Dos,
    Mainframe,
    All,
}

impl From<EraArg> for EncodingEra {
    fn from(value: EraArg) -> Self {
        match value {
            EraArg::ModernWeb => EncodingEra::MODERN_WEB,
            EraArg::LegacyIso => EncodingEra::LEGACY_ISO,
            EraArg::LegacyMac => EncodingEra::LEGACY_MAC,
            EraArg::LegacyRegional => EncodingEra::LEGACY_REGIONAL,
            EraArg::Dos => EncodingEra::DOS,
            EraArg::Mainframe => EncodingEra::MAINFRAME,
            EraArg::All => EncodingEra::ALL,
        }
    }
}

fn read_up_to(mut reader: impl Read, limit: usize) -> io::Result<Vec<u8>> {
    let mut buf = vec![0u8; limit];
    let mut total = 0;
    loop {
        let n = reader.read(&mut buf[total..])?;
        if n == 0 {
            break;
        }
        total += n;
        if total == limit {
            break;
        }
    }
    buf.truncate(total);
    Ok(buf)
}

fn report(label: &str, data: &[u8], era_mask: EncodingEra, minimal: bool) {
    let options = DetectOptions {
        era_mask,
        ..Default::default()
    };
    match detect(data, Some(options)) {
        Ok(result) => {
            let encoding = result.encoding.as_deref().unwrap_or("None");
            if minimal {
                println!("{encoding}");
            } else {
                println!("{label}: {encoding} with confidence {:.2}", result.confidence);
            }
        }
        Err(e) => eprintln!("chardetect: {label}: {e}"),
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let era_mask = match (cli.encoding_era, cli.legacy) {
        (Some(era), _) => EncodingEra::from(era),
        (None, true) => EncodingEra::ALL,
        (None, false) => EncodingEra::MODERN_WEB,
    };

    if cli.files.is_empty() {
        let data = match read_up_to(io::stdin(), DEFAULT_MAX_BYTES) {
            Ok(data) => data,
            Err(e) => {
                eprintln!("chardetect: stdin: {e}");
                return ExitCode::FAILURE;
            }
        };
        report("stdin", &data, era_mask, cli.minimal);
        return ExitCode::SUCCESS;
    }

    let mut had_error = false;
    for path in &cli.files {
        let label = path.display().to_string();
        match File::open(path).and_then(|f| read_up_to(f, DEFAULT_MAX_BYTES)) {
            Ok(data) => report(&label, &data, era_mask, cli.minimal),
            Err(e) => {
                eprintln!("chardetect: {label}: {e}");
                had_error = true;
            }
        }
    }

    if had_error {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
