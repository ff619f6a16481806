use clap::{Parser, Subcommand};
use std::process;
use tracing::error;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(
    name = "lego",
    author,
    version,
    about = "Simple statistical analysis of text corpora: Zipf's Law, chi-square tests, and the ratio of words used only once, twice, thrice, and so on."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fit the text against the theoretical Zipf distribution
    Zipf(cmd::zipf::ZipfArgs),
    /// Report the word frequency profile of the text
    Wordcount(cmd::wordcount::WordcountArgs),
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Zipf(args) => cmd::zipf::run(args),
        Commands::Wordcount(args) => cmd::wordcount::run(args),
    };

    if let Err(e) = result {
        error!("An error occurred: {}", e);
        process::exit(1);
    }
}
