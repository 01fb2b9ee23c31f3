//! Command line definition.
//!
//! Each subcommand names one transformation followed by its parameters,
//! its source picture(s), and the destination path.

use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use picture_core::encode::DEFAULT_JPEG_QUALITY;
use picture_core::{FlipDirection, OutputFormat};

/// Apply simple transformations to image files.
#[derive(Debug, Parser)]
#[command(name = "picture", version)]
pub struct Cli {
    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output format; chosen from the destination extension when omitted
    #[arg(long, value_enum, global = true)]
    pub format: Option<FormatArg>,

    /// JPEG quality (1-100)
    #[arg(
        long,
        default_value_t = DEFAULT_JPEG_QUALITY,
        value_parser = clap::value_parser!(u8).range(1..=100),
        global = true
    )]
    pub quality: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Replace every channel with its complement
    Invert { source: PathBuf, destination: PathBuf },
    /// Average the channels of every pixel
    Grayscale { source: PathBuf, destination: PathBuf },
    /// Rotate clockwise by a multiple of 90 degrees
    Rotate {
        #[arg(allow_negative_numbers = true)]
        angle: i64,
        source: PathBuf,
        destination: PathBuf,
    },
    /// Mirror horizontally (H) or vertically (V)
    Flip {
        direction: FlipDirection,
        source: PathBuf,
        destination: PathBuf,
    },
    /// Average several pictures over their shared area
    Blend {
        /// Source pictures followed by the destination
        #[arg(required = true, num_args = 2..)]
        paths: Vec<PathBuf>,
    },
    /// Apply a 3x3 box blur
    Blur { source: PathBuf, destination: PathBuf },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Png,
    Jpeg,
}

impl Cli {
    /// Output format for the destination, honouring `--format` and `--quality`.
    pub fn output_format(&self) -> OutputFormat {
        match self.format {
            Some(FormatArg::Png) => OutputFormat::Png,
            Some(FormatArg::Jpeg) => OutputFormat::Jpeg {
                quality: self.quality,
            },
            None => OutputFormat::from_path(self.command.destination(), self.quality),
        }
    }
}

impl Command {
    /// Pictures read by this command, in order.
    pub fn sources(&self) -> &[PathBuf] {
        match self {
            Command::Invert { source, .. }
            | Command::Grayscale { source, .. }
            | Command::Rotate { source, .. }
            | Command::Flip { source, .. }
            | Command::Blur { source, .. } => std::slice::from_ref(source),
            Command::Blend { paths } => &paths[..paths.len().saturating_sub(1)],
        }
    }

    /// Path the result is written to.
    pub fn destination(&self) -> &Path {
        match self {
            Command::Invert { destination, .. }
            | Command::Grayscale { destination, .. }
            | Command::Rotate { destination, .. }
            | Command::Flip { destination, .. }
            | Command::Blur { destination, .. } => destination,
            Command::Blend { paths } => paths.last().map(PathBuf::as_path).unwrap_or(Path::new("")),
        }
    }
}
