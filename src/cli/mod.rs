//! Command-line interface module

use std::ffi::OsString;
use std::path::PathBuf;

use clap::builder::{OsStringValueParser, TypedValueParser};
use clap::Parser;
use console::style;

use crate::bust::BustConfig;
use crate::error::{BustError, BustResult};

/// Long options that may also be spelled with a single dash
const SINGLE_DASH_OPTIONS: &[&str] = &["file", "outdir", "prefix", "noprefix"];

/// Main CLI arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "buster")]
#[command(about = "Copy a file to a cache-busting, content-hashed filename")]
#[command(version)]
#[command(long_about = None)]
pub struct Args {
    /// File to bust
    #[arg(long, value_name = "PATH", allow_hyphen_values = true, value_parser = path_parser())]
    pub file: Option<PathBuf>,

    /// Directory to write file (default: same as file)
    #[arg(long, value_name = "DIR", allow_hyphen_values = true, value_parser = path_parser())]
    pub outdir: Option<PathBuf>,

    /// Prefix of fingerprinted file (default: the base name of file)
    #[arg(long, allow_hyphen_values = true)]
    pub prefix: Option<String>,

    /// Do not prefix filename with original file base name
    #[arg(
        long,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        default_value_t = false,
        action = clap::ArgAction::Set
    )]
    pub noprefix: bool,

    /// Create the output directory if it does not exist
    #[arg(long)]
    pub parents: bool,

    /// Print the derived filename without copying
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose logging
    #[arg(long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(long)]
    pub quiet: bool,
}

impl Args {
    /// Parse the process arguments, accepting `-file`-style options too.
    pub fn parse_normalized() -> Self {
        Self::parse_from(normalize_flags(std::env::args_os()))
    }
}

impl TryFrom<&Args> for BustConfig {
    type Error = BustError;

    fn try_from(args: &Args) -> BustResult<Self> {
        let config = BustConfig::from_options(
            args.file.as_deref(),
            args.outdir.as_deref(),
            args.prefix.as_deref(),
            args.noprefix,
        )?;
        Ok(config.with_create_dirs(args.parents))
    }
}

/// Paths may be given empty (`-file=`); that is reported as a missing file
/// rather than as a usage error.
fn path_parser() -> impl TypedValueParser<Value = PathBuf> {
    OsStringValueParser::new().map(PathBuf::from)
}

/// Rewrite `-file`, `-file=x`, `-noprefix` and friends to their `--` form.
/// Everything else passes through untouched, including the program name.
pub fn normalize_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            arg.to_str()
                .and_then(rewrite_single_dash)
                .map(OsString::from)
                .unwrap_or(arg)
        })
        .collect()
}

fn rewrite_single_dash(arg: &str) -> Option<String> {
    let rest = arg.strip_prefix('-')?;
    if rest.starts_with('-') {
        return None;
    }
    let name = rest.split('=').next().unwrap_or(rest);
    SINGLE_DASH_OPTIONS
        .contains(&name)
        .then(|| format!("--{}", rest))
}

/// CLI utilities and helpers
pub struct CliUtils;

impl CliUtils {
    /// `YYYY/MM/DD HH:MM:SS message`, local time
    pub fn log_line(message: &str) -> String {
        format!(
            "{} {}",
            chrono::Local::now().format("%Y/%m/%d %H:%M:%S"),
            message
        )
    }

    /// Show a success message (if not in quiet mode)
    pub fn show_success(message: &str, quiet: bool) {
        if quiet {
            return;
        }
        let line = Self::log_line(message);
        if Self::should_use_color(atty::Stream::Stdout) {
            println!("{}", style(line).green());
        } else {
            println!("{}", line);
        }
    }

    /// Show an error message
    pub fn show_error(message: &str) {
        let line = Self::log_line(message);
        if Self::should_use_color(atty::Stream::Stderr) {
            eprintln!("{}", style(line).red().bold());
        } else {
            eprintln!("{}", line);
        }
    }

    /// Show a progress detail (only in verbose mode)
    pub fn show_detail(message: &str, verbose: bool) {
        if verbose {
            let line = Self::log_line(message);
            if Self::should_use_color(atty::Stream::Stderr) {
                eprintln!("{}", style(line).dim());
            } else {
                eprintln!("{}", line);
            }
        }
    }

    /// Check if output should be colored
    pub fn should_use_color(stream: atty::Stream) -> bool {
        atty::is(stream) && std::env::var_os("NO_COLOR").is_none()
    }
}

/// Handle a fatal error with a user-friendly message
pub fn handle_error(error: &anyhow::Error) {
    match error.downcast_ref::<BustError>() {
        Some(BustError::MissingInput) => {
            CliUtils::show_error(&error.to_string());
            eprintln!("\nTry 'buster --help' for usage information.");
        }
        Some(bust_error) => CliUtils::show_error(&bust_error.user_message()),
        None => CliUtils::show_error(&format!("Unexpected error: {:#}", error)),
    }
}
