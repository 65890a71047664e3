#[cfg(feature = "trace")]
mod trace;

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use color_eyre::Result;
use color_eyre::eyre::WrapErr;
use strutil::config::{Config, EllipsisSide, load_config, load_config_from_path};
use strutil::size::{ByteSize, format_size, parse_size};
use strutil::{list, random, text};

#[derive(Parser)]
#[command(
    name = "strutil",
    about = "Byte sizes, bounded output and ellipsis helpers"
)]
struct Cli {
    /// Path to config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log operation spans to stderr (filter with STRUTIL_LOG).
    #[arg(long, global = true, default_value_t = false)]
    trace: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Format a byte count, e.g. 20000000 -> 20MB
    FormatSize { bytes: u64 },

    /// Parse a size such as 20MB or 1KB into bytes
    ParseSize {
        #[arg(allow_hyphen_values = true)]
        text: String,
    },

    /// Print the tail of FILE (or stdin) within line and byte budgets
    Truncate {
        /// Keep at most this many trailing lines
        #[arg(long)]
        max_lines: Option<usize>,

        /// Keep at most this many trailing bytes, e.g. 4kB
        #[arg(long)]
        max_bytes: Option<ByteSize>,

        file: Option<PathBuf>,
    },

    /// Shorten TEXT to WIDTH codepoints, marking the cut with an ellipsis
    Ellipt {
        #[arg(allow_hyphen_values = true)]
        text: String,

        /// Codepoint budget; zero or less prints a lone ellipsis
        #[arg(long, allow_negative_numbers = true)]
        width: Option<isize>,

        /// Cut from the start instead of the end
        #[arg(long, default_value_t = false)]
        left: bool,
    },

    /// Print a random alphanumeric string
    Random {
        #[arg(long)]
        length: Option<usize>,
    },

    /// Print the items as a quoted, comma-separated list
    Quote { items: Vec<String> },

    /// Split comma-separated arguments, printing one token per line
    Split { texts: Vec<String> },
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    if cli.trace {
        init_trace()?;
    }
    let config = load_config_for_cli(&cli);

    let mut stdout = io::stdout().lock();
    run(&cli.command, &config, &mut stdout)?;
    stdout.flush()?;
    Ok(())
}

fn init_trace() -> Result<()> {
    #[cfg(not(feature = "trace"))]
    {
        Err(color_eyre::eyre::eyre!(
            "--trace requires the `trace` feature; run with `cargo run --features trace -- --trace <COMMAND>`"
        ))
    }

    #[cfg(feature = "trace")]
    {
        trace::init_tracing_stderr()
    }
}

fn load_config_for_cli(cli: &Cli) -> Config {
    let mut config = match &cli.config {
        Some(path) => load_config_from_path(path),
        None => load_config(),
    };

    match &cli.command {
        Command::Truncate {
            max_lines,
            max_bytes,
            ..
        } => {
            if let Some(lines) = max_lines {
                config.output.max_lines = *lines;
            }
            if let Some(bytes) = max_bytes {
                config.output.max_bytes = *bytes;
            }
        }
        Command::Ellipt { width, left, .. } => {
            if let Some(width) = width {
                config.display.width = usize::try_from(*width).unwrap_or(0);
            }
            if *left {
                config.display.side = EllipsisSide::Left;
            }
        }
        Command::Random { length } => {
            if let Some(length) = length {
                config.random.length = *length;
            }
        }
        _ => {}
    }

    config
}

fn run(command: &Command, config: &Config, out: &mut impl Write) -> Result<()> {
    match command {
        Command::FormatSize { bytes } => writeln!(out, "{}", format_size(*bytes))?,
        Command::ParseSize { text } => {
            let bytes = parse_size(text)?;
            writeln!(out, "{bytes}")?;
        }
        Command::Truncate { file, .. } => {
            let data = read_input(file.as_deref())?;
            let max_bytes = usize::try_from(config.output.max_bytes.bytes()).unwrap_or(usize::MAX);
            out.write_all(text::truncate_output(
                &data,
                config.output.max_lines,
                max_bytes,
            ))?;
        }
        Command::Ellipt { text: input, .. } => {
            let shortened = match config.display.side {
                EllipsisSide::Left => text::ellipt_left(input, config.display.width),
                EllipsisSide::Right => text::ellipt_right(input, config.display.width),
            };
            writeln!(out, "{shortened}")?;
        }
        Command::Random { .. } => {
            writeln!(out, "{}", random::random_string(config.random.length))?;
        }
        Command::Quote { items } => writeln!(out, "{}", list::quoted(items))?,
        Command::Split { texts } => {
            for token in list::multi_comma_separated_list(texts) {
                writeln!(out, "{token}")?;
            }
        }
    }
    Ok(())
}

fn read_input(file: Option<&Path>) -> Result<Vec<u8>> {
    match file {
        Some(path) => {
            std::fs::read(path).wrap_err_with(|| format!("failed to read {}", path.display()))
        }
        None => {
            let mut data = Vec::new();
            io::stdin().lock().read_to_end(&mut data)?;
            Ok(data)
        }
    }
}
