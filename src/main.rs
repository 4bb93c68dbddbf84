use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

mod parser;

use parser::ParseOptions;

#[derive(Parser)]
#[command(name = "foosball-score")]
#[command(about = "Read both scoreboards from a photograph of a foosball table")]
#[command(version)]
struct Cli {
    /// Photograph of the table.
    image: PathBuf,

    /// Verbose logging and intermediate images.
    #[arg(long)]
    debug: bool,

    /// Where intermediate images go when --debug is set.
    #[arg(long, default_value = "debug")]
    debug_dir: PathBuf,

    /// JSON file overriding detection settings.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn init_logging(debug: bool) {
    let level = if debug { "debug" } else { "error" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let options = ParseOptions {
        config_path: cli.config,
        debug_dir: cli.debug.then_some(cli.debug_dir),
    };

    match parser::parse_score(&cli.image, &options).and_then(|scores| parser::to_json(&scores)) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Score detection failed: {e:#}");
            ExitCode::FAILURE
        }
    }
}
