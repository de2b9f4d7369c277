use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "uarp")]
#[command(about = "UARP SuperBinary firmware asset analysis toolkit")]
#[command(version)]
pub struct Cli {
    /// Control colored output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Write output to a file instead of stdout
    #[arg(short, long, global = true)]
    pub output: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Decode a SuperBinary asset and display its structure
    Info {
        /// Path to SuperBinary asset file
        #[arg(short, long)]
        file: String,

        /// Display additional information
        #[arg(short, long)]
        verbose: bool,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Extract payload bytes to files
    Extract {
        /// Path to SuperBinary asset file
        #[arg(short, long)]
        file: String,

        /// Directory to write extracted payloads into
        #[arg(short, long, default_value = ".")]
        dir: String,

        /// Extract a single row index instead of every payload
        #[arg(short, long)]
        row: Option<usize>,
    },

    /// Hex dump of raw asset bytes
    Dump {
        /// Path to SuperBinary asset file
        #[arg(short, long)]
        file: String,

        /// Row index whose payload to dump (default: 0)
        #[arg(short, long)]
        row: Option<usize>,

        /// Absolute byte offset to start dumping (bypasses row mode)
        #[arg(long)]
        offset: Option<u64>,

        /// Number of bytes to dump (default: payload size or 256 for offset mode)
        #[arg(short, long)]
        length: Option<usize>,

        /// Output raw binary bytes (no formatting)
        #[arg(long)]
        raw: bool,
    },
}
