use clap::Parser;

use plaza::cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = plaza::run(cli) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
