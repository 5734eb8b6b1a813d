//! Asset Helper CLI.
//!
//! Thin command-line front end over the library: encode JSON from stdin in
//! the legacy or strict dialect, render tags and doctypes, resolve asset
//! paths from a config file, convert dates and fix permissions.

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};

use asset_helper::assets::{self, AssetConfig};
use asset_helper::json::{self, Limits};
use asset_helper::{logging, Encoder, ErrorCode, HelperResult};

#[derive(Parser)]
#[command(name = "asset-helper")]
#[command(about = "Legacy view helpers and structure serializer", long_about = None)]
#[command(version)]
struct Cli {
    /// Site configuration file (JSON)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show version information
    Version,

    /// Encode JSON read from stdin
    Encode {
        /// Emit standard JSON instead of the legacy encoding
        #[arg(long)]
        strict: bool,

        /// Accept larger and deeper documents
        #[arg(long)]
        lenient: bool,
    },

    /// Print a doctype declaration
    Doctype {
        /// Document kind: html or xhtml
        #[arg(long, default_value = "xhtml")]
        kind: String,

        /// Variant: strict, trans or frame
        #[arg(long, default_value = "trans")]
        variant: String,
    },

    /// Print an asset tag
    Tag {
        /// Tag kind
        #[arg(value_enum)]
        kind: TagKind,

        /// Asset file name or URL
        fname: String,
    },

    /// Print a flash embedding script
    Swf {
        /// Movie file name or URL
        fname: String,

        /// Width in pixels
        width: i64,

        /// Height in pixels
        height: i64,

        /// Background color
        #[arg(long)]
        bgcolor: Option<String>,
    },

    /// Print the page title (requires --config)
    Title {
        /// Text appended to the base title
        #[arg(default_value = "")]
        suffix: String,
    },

    /// Resolve an asset path (requires --config)
    #[command(subcommand)]
    Path(PathCommand),

    /// Date conversions on dd-mm-yyyy dates
    #[command(subcommand)]
    Date(DateCommand),

    /// Recursively set permissions below a directory
    Chmod {
        /// Directory whose contents are changed
        dir: PathBuf,

        /// Octal mode
        #[arg(long, default_value = "777", value_parser = parse_octal)]
        mode: u32,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum TagKind {
    Img,
    Js,
    Css,
}

#[derive(Subcommand)]
enum PathCommand {
    /// Public URL of an asset
    Ext {
        /// Asset kind (configured path name)
        kind: String,
        /// File name
        #[arg(default_value = "")]
        fname: String,
    },

    /// Filesystem path of an asset
    Int {
        /// Asset kind (configured path name)
        kind: String,
        /// File name
        #[arg(default_value = "")]
        fname: String,
    },

    /// Public URL below the internal views directory
    Views {
        /// File name
        #[arg(default_value = "")]
        fname: String,
    },

    /// `<base>` tag pointing at the views directory
    BaseTag,
}

#[derive(Subcommand)]
enum DateCommand {
    /// Check a dd-mm-yyyy date against the current year
    Validate { date: String },

    /// Convert dd-mm-yyyy to a Unix timestamp (0 when invalid)
    ToTimestamp { date: String },

    /// Convert a Unix timestamp to dd-mm-yyyy
    FromTimestamp {
        #[arg(allow_negative_numbers = true)]
        timestamp: i64,
    },

    /// Convert "d-m-yyyy hh:mm:ss" to "yyyy-mm-dd hh:mm:ss"
    Calculate { date: String },
}

fn parse_octal(s: &str) -> Result<u32, String> {
    u32::from_str_radix(s, 8).map_err(|e| format!("invalid octal mode '{}': {}", s, e))
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let _ = logging::init();

    match run(cli) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::debug!(code = err.code(), "command failed");
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn load_config(path: Option<PathBuf>) -> HelperResult<AssetConfig> {
    let path = path.ok_or_else(|| {
        ErrorCode::E300_ConfigUnreadable("this command needs --config FILE".to_string())
    })?;
    AssetConfig::load(path)
}

fn run(cli: Cli) -> HelperResult<String> {
    let Some(command) = cli.command else {
        return Ok(format!(
            "Asset Helper v{}\nUse --help for usage information",
            env!("CARGO_PKG_VERSION")
        ));
    };

    match command {
        Commands::Version => Ok(format!("Asset Helper v{}", env!("CARGO_PKG_VERSION"))),
        Commands::Encode { strict, lenient } => {
            let mut input = Vec::new();
            std::io::stdin().read_to_end(&mut input)?;
            let limits = if lenient {
                Limits::lenient()
            } else {
                Limits::standard()
            };
            let value = json::parse_with_limits(&input, limits)?;
            let encoder = if strict {
                Encoder::strict()
            } else {
                Encoder::legacy()
            };
            encoder.encode(&value)
        }
        Commands::Doctype { kind, variant } => Ok(assets::disp_doctype(&kind, &variant).to_string()),
        Commands::Tag { kind, fname } => Ok(match kind {
            TagKind::Img => assets::disp_img(&fname),
            TagKind::Js => assets::disp_js(&fname),
            TagKind::Css => assets::disp_css(&fname),
        }),
        Commands::Swf {
            fname,
            width,
            height,
            bgcolor,
        } => Ok(assets::disp_swf(&fname, width, height, bgcolor.as_deref())),
        Commands::Title { suffix } => Ok(load_config(cli.config)?.title(&suffix)),
        Commands::Path(path) => {
            let config = load_config(cli.config)?;
            Ok(match path {
                PathCommand::Ext { kind, fname } => config.ext_path(&kind, &fname),
                PathCommand::Int { kind, fname } => config.int_path(&kind, &fname),
                PathCommand::Views { fname } => config.internal_views_path(&fname),
                PathCommand::BaseTag => config.base_tag(),
            })
        }
        Commands::Date(date) => match date {
            DateCommand::Validate { date } => {
                Ok(assets::date_validate(&date, assets::current_year()).to_string())
            }
            DateCommand::ToTimestamp { date } => {
                Ok(assets::to_timestamp(&date, assets::current_year()).to_string())
            }
            DateCommand::FromTimestamp { timestamp } => assets::from_timestamp(timestamp),
            DateCommand::Calculate { date } => assets::calculate_date(&date),
        },
        Commands::Chmod { dir, mode } => {
            let changed = assets::chmod_recursive(&dir, mode)?;
            Ok(format!("{} entries changed", changed))
        }
    }
}
