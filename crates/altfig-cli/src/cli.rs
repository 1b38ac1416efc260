use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

/// Extract figure bounding boxes from, and inject alt text into, tagged PDFs.
#[derive(Debug, Parser)]
#[command(name = "altfig", about, version)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug). RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print figure bounding boxes as `pages|figures` JSON listings
    Bbox {
        /// Path to the PDF file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Page height used to flip boxes to top-down coordinates.
        /// Default: height of the first page's MediaBox
        #[arg(value_name = "HEIGHT")]
        height: Option<f64>,
    },

    /// Write alt text into figure structure elements
    Inject {
        /// Path to the PDF file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Alt-text JSON (`{"<object>": {"alt": "..."}}`).
        /// Default: output-alt-text.json next to FILE
        #[arg(long, value_name = "JSON")]
        alt_text: Option<PathBuf>,

        /// Output path. Default: FILE with `.pdf` replaced by `_alt_text_added.pdf`
        #[arg(short, long, value_name = "PDF")]
        output: Option<PathBuf>,
    },
}
