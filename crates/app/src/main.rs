//! canonhuff: compress `.txt` files to `.hf` and back.
//!
//! All file handling lives here; the codec itself only sees byte slices.

mod config;
mod error;
mod input_gen;

use std::fs;
use std::path::{Path, PathBuf};

use canonhuff_core::{Codec, CompressionStats};
use log::info;

use config::{print_help, Command, Config};
use error::{AppError, Result};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("error: {message}");
            eprintln!("run with --help for usage");
            std::process::exit(2);
        }
    };

    if config.print_config {
        config.print();
    }

    if let Err(e) = run(&config) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(config: &Config) -> Result<()> {
    let codec = Codec::default();
    match config.command {
        Command::Help => {
            print_help();
            Ok(())
        }
        Command::Compress => {
            let (input, output) = paths(config)?;
            let data = read(input)?;
            let (artifact, stats) =
                codec
                    .compress_with_stats(&data)
                    .map_err(|source| AppError::Codec {
                        path: input.to_path_buf(),
                        source,
                    })?;
            write(output, &artifact)?;
            info!("wrote {}", output.display());
            report(config, &stats);
            Ok(())
        }
        Command::Decompress => {
            let (input, output) = paths(config)?;
            let artifact = read(input)?;
            let data = codec
                .decompress(&artifact)
                .map_err(|source| AppError::Codec {
                    path: input.to_path_buf(),
                    source,
                })?;
            write(output, &data)?;
            info!("wrote {}", output.display());
            if config.print_stats {
                println!(
                    "{} -> {} ({} bytes -> {} bytes)",
                    input.display(),
                    output.display(),
                    artifact.len(),
                    data.len()
                );
            }
            Ok(())
        }
        Command::Demo => {
            let sample = input_gen::generate_sample_text(config.seed, config.sample_bytes);
            let (artifact, stats) = codec.compress_with_stats(&sample)?;
            let restored = codec.decompress(&artifact)?;
            if restored != sample {
                return Err(AppError::Mismatch {
                    expected: sample.len(),
                    actual: restored.len(),
                });
            }
            report(config, &stats);
            println!("Round trip verified (seed {})", config.seed);
            Ok(())
        }
    }
}

fn paths(config: &Config) -> Result<(&Path, &Path)> {
    match (&config.input_file, &config.output_file) {
        (Some(input), Some(output)) => Ok((input.as_path(), output.as_path())),
        _ => Err(AppError::Config("input and output paths are required".into())),
    }
}

fn read(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|source| AppError::Read {
        path: PathBuf::from(path),
        source,
    })
}

fn write(path: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(path, bytes).map_err(|source| AppError::Write {
        path: PathBuf::from(path),
        source,
    })
}

fn report(config: &Config, stats: &CompressionStats) {
    if config.print_stats {
        stats.print_summary();
    }
}
