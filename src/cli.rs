use clap::Parser;
use color_eyre::{eyre::eyre, Report};
use std::{io, num::NonZeroUsize, path::PathBuf};
use tracing_subscriber::EnvFilter;

/// Load a text file into a balanced rope and inspect it.
#[derive(Debug, Parser)]
#[command(name = "ropebuf", version)]
pub struct Cli {
    /// File to load
    pub path: PathBuf,

    /// Bytes handed to the rope per chunk
    #[arg(short, long, default_value = "64", env = "ROPEBUF_CHUNK_SIZE")]
    pub chunk_size: NonZeroUsize,

    /// Print the tree structure instead of the text
    #[arg(long)]
    pub dump: bool,

    /// Print length, line count, height and leaf count
    #[arg(long)]
    pub stats: bool,

    /// Verify every rope invariant after loading
    #[arg(long)]
    pub check: bool,

    /// Print only this line (zero based)
    #[arg(short, long)]
    pub line: Option<usize>,

    /// Disable colored dump output
    #[arg(long)]
    pub no_color: bool,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    pub verbose: bool,
}

/// Installs the stderr log subscriber. `RUST_LOG` wins over `--verbose`.
pub fn init_tracing(verbose: bool) -> Result<(), Report> {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|e| eyre!("Failed to initialize logging: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["ropebuf", "notes.txt"]).unwrap();

        assert_eq!(cli.path, PathBuf::from("notes.txt"));
        assert!(!cli.dump && !cli.stats && !cli.check);
        assert_eq!(cli.line, None);
    }

    #[test]
    fn flags() {
        let cli = Cli::try_parse_from(["ropebuf", "-c", "2", "--dump", "--line", "3", "a.txt"]).unwrap();

        assert_eq!(cli.chunk_size.get(), 2);
        assert!(cli.dump);
        assert_eq!(cli.line, Some(3));
    }

    #[test]
    fn zero_chunk_size_is_rejected() {
        assert!(Cli::try_parse_from(["ropebuf", "--chunk-size", "0", "a.txt"]).is_err());
    }
}
