//! Command-line configuration for the canonhuff tool.
//!
//! Parses arguments by hand into a [`Config`], validates file extensions and
//! derives default output paths. With no arguments at all the tool runs the
//! demo on a generated sample, so every run prints something useful.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::path::{Path, PathBuf};

/// Extension required on files passed to `compress`.
pub const TEXT_EXTENSION: &str = "txt";

/// Extension written by `compress` and required by `decompress`.
pub const COMPRESSED_EXTENSION: &str = "hf";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Compress,
    Decompress,
    Demo,
    Help,
}

/// Fully resolved configuration for one run.
#[derive(Debug, Clone)]
pub struct Config {
    pub command: Command,

    /// Input file (compress/decompress only)
    pub input_file: Option<PathBuf>,

    /// Output file (compress/decompress only)
    pub output_file: Option<PathBuf>,

    // === Demo ===
    /// Seed for sample generation
    pub seed: u64,

    /// Size of the generated sample in bytes
    pub sample_bytes: usize,

    // === Behavior ===
    /// Whether to print the resolved configuration
    pub print_config: bool,

    /// Whether to print the compression summary
    pub print_stats: bool,
}

impl Config {
    /// Parse configuration from command-line arguments (program name excluded).
    ///
    /// The first positional argument is the command, the second the input
    /// file. If no seed is given, a time-based one is used and printed with
    /// the config so the run can be repeated.
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        let mut command: Option<Command> = None;
        let mut input_file: Option<PathBuf> = None;
        let mut output_file: Option<PathBuf> = None;
        let mut seed: Option<u64> = None;
        let mut sample_bytes: Option<usize> = None;
        let mut print_config = false;
        let mut print_stats = true;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--out" | "-o" => {
                    i += 1;
                    let path = args.get(i).ok_or("--out requires a path")?;
                    output_file = Some(PathBuf::from(path));
                }
                "--seed" => {
                    i += 1;
                    let value = args.get(i).ok_or("--seed requires a number")?;
                    seed = Some(value.parse().map_err(|_| format!("invalid seed: {value}"))?);
                }
                "--size" => {
                    i += 1;
                    let value = args.get(i).ok_or("--size requires a number")?;
                    sample_bytes =
                        Some(value.parse().map_err(|_| format!("invalid size: {value}"))?);
                }
                "--print-config" => print_config = true,
                "--no-stats" => print_stats = false,
                "--help" | "-h" => command = Some(Command::Help),
                flag if flag.starts_with('-') => {
                    return Err(format!("unknown argument: {flag}"));
                }
                positional => {
                    if command.is_none() {
                        command = Some(parse_command(positional)?);
                    } else if input_file.is_none() {
                        input_file = Some(PathBuf::from(positional));
                    } else {
                        return Err(format!("unexpected argument: {positional}"));
                    }
                }
            }
            i += 1;
        }

        let command = command.unwrap_or(Command::Demo);
        let seed = seed.unwrap_or_else(time_seed);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let (input_file, output_file) = match command {
            Command::Compress | Command::Decompress => {
                let input = input_file.ok_or("missing input file")?;
                validate_extension(command, &input)?;
                let output = match output_file {
                    Some(path) => path,
                    None => default_output(command, &input),
                };
                (Some(input), Some(output))
            }
            Command::Demo | Command::Help => {
                if let Some(extra) = input_file {
                    return Err(format!("unexpected argument: {}", extra.display()));
                }
                (None, None)
            }
        };

        Ok(Config {
            command,
            input_file,
            output_file,
            seed,
            sample_bytes: sample_bytes.unwrap_or_else(|| rng.gen_range(4 * 1024..=64 * 1024)),
            print_config,
            print_stats,
        })
    }

    /// Print the configuration in human-readable form.
    pub fn print(&self) {
        println!("=== Configuration ===");
        println!("Command: {:?}", self.command);
        match (&self.input_file, &self.output_file) {
            (Some(input), Some(output)) => {
                println!("Input file:  {}", input.display());
                println!("Output file: {}", output.display());
            }
            _ => {
                println!("Seed: {}", self.seed);
                println!("Sample size: {} bytes", self.sample_bytes);
            }
        }
        println!();
    }
}

fn parse_command(word: &str) -> Result<Command, String> {
    match word {
        "compress" | "c" => Ok(Command::Compress),
        "decompress" | "d" => Ok(Command::Decompress),
        "demo" => Ok(Command::Demo),
        "help" => Ok(Command::Help),
        other => Err(format!("unknown command: {other}")),
    }
}

fn time_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or(0)
}

/// Compress only accepts `.txt`, decompress only `.hf`.
pub fn validate_extension(command: Command, path: &Path) -> Result<(), String> {
    let expected = match command {
        Command::Compress => TEXT_EXTENSION,
        Command::Decompress => COMPRESSED_EXTENSION,
        Command::Demo | Command::Help => return Ok(()),
    };
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext == expected => Ok(()),
        _ => Err(format!(
            "file is not .{expected}: {}",
            path.display()
        )),
    }
}

/// `notes.txt` compresses to `notes.txt.hf`, which decompresses to `notes.txt`.
pub fn default_output(command: Command, input: &Path) -> PathBuf {
    match command {
        Command::Compress => {
            let mut name = input.as_os_str().to_owned();
            name.push(".");
            name.push(COMPRESSED_EXTENSION);
            PathBuf::from(name)
        }
        _ => input.with_extension(""),
    }
}

pub fn print_help() {
    println!("canonhuff: canonical Huffman compression for 7-bit text");
    println!();
    println!("USAGE:");
    println!("    canonhuff compress <FILE.txt> [--out <PATH>]");
    println!("    canonhuff decompress <FILE.hf> [--out <PATH>]");
    println!("    canonhuff demo [--seed <N>] [--size <N>]");
    println!();
    println!("OPTIONS:");
    println!("    --out, -o <PATH>   Output file (default: FILE.txt.hf / FILE.hf minus .hf)");
    println!("    --seed <N>         Seed for the demo sample (default: time-based)");
    println!("    --size <N>         Demo sample size in bytes (default: random 4-64 KiB)");
    println!("    --print-config     Print resolved configuration");
    println!("    --no-stats         Don't print the compression summary");
    println!("    --help, -h         Print this help");
    println!();
    println!("Input bytes must be in 0..=126, excluding 0x03 (end-of-text).");
    println!("Set RUST_LOG=debug for codec diagnostics.");
    println!();
}
