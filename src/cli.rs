use crate::config::{Config, DEFAULT_DPI};
use crate::error::{ConvertError, Result};
use clap::error::ErrorKind;
use clap::{ArgAction, CommandFactory, Parser};
use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

const BIN_NAME: &str = "pdf2bmp";

#[derive(Parser, Debug)]
#[command(
    name = BIN_NAME,
    about = "Convert a page of a PDF document into a 24-bit BMP image",
    override_usage = "pdf2bmp [OPTIONS] input.pdf output.bmp",
    disable_help_flag = true,
    disable_version_flag = true,
    args_override_self = true
)]
struct Cli {
    /// Display this message
    #[arg(short = '?', long, action = ArgAction::SetTrue)]
    help: bool,

    /// Display version information
    #[arg(long, action = ArgAction::SetTrue)]
    version: bool,

    /// Specify DPI (dots per inch)
    #[arg(long, value_name = "DPI", default_value_t = DEFAULT_DPI, allow_negative_numbers = true)]
    dpi: f64,

    /// Specify the page number (starting at 1)
    #[arg(long, value_name = "PAGE", default_value_t = 1)]
    page: u32,

    /// Input PDF file
    #[arg(value_name = "input.pdf", value_hint = clap::ValueHint::FilePath)]
    input: Option<PathBuf>,

    /// Output BMP file
    #[arg(value_name = "output.bmp", value_hint = clap::ValueHint::FilePath)]
    output: Option<PathBuf>,
}

/// コマンドラインから決まる動作
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    Version,
    Convert(Config),
}

/// 使い方の文字列
pub fn usage() -> String {
    Cli::command().render_help().to_string()
}

pub fn version() -> String {
    format!("{} Version {}", BIN_NAME, env!("CARGO_PKG_VERSION"))
}

/// プログラム名を除いた引数をパースする
///
/// `--help` と `--version` は他の引数が不正でも優先する。
pub fn parse<I, T>(args: I) -> Result<Command>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    // Windows流の `/?` も受け付ける
    let args: Vec<OsString> = args
        .into_iter()
        .map(Into::into)
        .map(|arg| if arg == "/?" { "--help".into() } else { arg })
        .collect();

    if args.is_empty() {
        return Err(ConvertError::invalid_arguments("No arguments"));
    }

    let argv = std::iter::once(OsString::from(BIN_NAME)).chain(args.iter().cloned());
    let cli = match Cli::try_parse_from(argv) {
        Ok(cli) => cli,
        Err(e) => {
            if let Some(command) = requested_info(&args) {
                return Ok(command);
            }
            return Err(ConvertError::invalid_arguments(describe(e.kind())));
        }
    };

    if cli.help {
        return Ok(Command::Help);
    }
    if cli.version {
        return Ok(Command::Version);
    }

    Config::new(cli.input, cli.output, cli.dpi, cli.page).map(Command::Convert)
}

// パースに失敗した引数列からヘルプ・バージョン要求を拾う
fn requested_info(args: &[OsString]) -> Option<Command> {
    let has = |names: &[&str]| {
        args.iter()
            .any(|a| names.iter().any(|n| a.as_os_str() == OsStr::new(n)))
    };

    if has(&["--help", "-?"]) {
        Some(Command::Help)
    } else if has(&["--version"]) {
        Some(Command::Version)
    } else {
        None
    }
}

fn describe(kind: ErrorKind) -> String {
    let reason = kind.as_str().unwrap_or("unknown cause");
    format!("Invalid arguments: {}", reason)
}
