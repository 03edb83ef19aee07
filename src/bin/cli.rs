// src/bin/cli.rs
use clap::Parser;
use perfect_giftcard::cli::{self, Args};

fn main() {
    let _ = color_eyre::install();

    if let Err(e) = cli::run(Args::parse()) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
