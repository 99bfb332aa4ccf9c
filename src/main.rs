use clap::Parser;
use color_eyre::Report;
use std::io::{self, Write};
use tracing::info;

use ropebuf::{
    cli::{init_tracing, Cli},
    util::{load_file, DumpPrinter},
};

fn main() -> Result<(), Report> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let rope = load_file(&cli.path, cli.chunk_size.get())?;
    info!(path = %cli.path.display(), len = rope.len(), "loaded");

    if cli.check {
        rope.assert_valid();
    }

    let mut stdout = io::stdout().lock();

    if cli.dump {
        let mut printer = DumpPrinter::new(&mut stdout, !cli.no_color);
        printer.render(&rope.dump())?;
    }

    if cli.stats {
        writeln!(stdout, "length: {}", rope.len())?;
        writeln!(stdout, "lines:  {}", rope.line_count())?;
        writeln!(stdout, "height: {}", rope.height())?;
        writeln!(stdout, "leaves: {}", rope.leaf_count())?;
    }

    if let Some(line) = cli.line {
        writeln!(stdout, "{}", rope.line(line)?)?;
    } else if !cli.dump && !cli.stats {
        write!(stdout, "{rope}")?;
    }

    stdout.flush()?;
    Ok(())
}
