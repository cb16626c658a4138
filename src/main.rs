//! CLI entry point for the sorting visualizer

use clap::Parser;
use sortvis::io::cli::{Cli, Session};

fn main() -> sortvis::Result<()> {
    let cli = Cli::parse();
    let mut session = Session::new(cli);
    session.run().map(|_| ())
}
