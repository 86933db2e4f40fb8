//! Interactive grid search visualizer.
//!
//! Run: cargo run --bin seekgrid -- --strategy bfs --visual cli --grid default

use clap::Parser;
use seekgrid::{app, cli::Args};

fn main() {
    let args = Args::parse();

    if let Err(e) = seekgrid::run(args) {
        if app::is_quit(e.as_ref()) {
            log::info!("Exiting the program.");
            println!("Goodbye!");
            return;
        }
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
