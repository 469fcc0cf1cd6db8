use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;

use parus_members::{logging, report, Config, Pipeline};

#[derive(Parser)]
#[command(name = "parus_members")]
#[command(about = "Convert the NKO POVS Parus member spreadsheet into JSON for the member directory")]
#[command(version = "0.1.0")]
struct Cli {
    /// Spreadsheet to convert (.xls, .xlsx, .ods or .csv). Defaults to the configured file
    input: Option<PathBuf>,

    /// Config file (TOML). `config.toml` in the working directory is used when present
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory to write members_complete.json and members_search.json into
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Worksheet name to read instead of the first sheet
    #[arg(long)]
    sheet: Option<String>,

    /// Process and print statistics without writing any files
    #[arg(long)]
    dry_run: bool,
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => Config::load().context("loading config.toml")?,
    };

    if let Some(dir) = &cli.output_dir {
        config.output_dir = dir.clone();
    }
    if let Some(sheet) = &cli.sheet {
        config.sheet = Some(sheet.clone());
    }
    Ok(config)
}

fn main() -> ExitCode {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {:#}", e);
            return ExitCode::FAILURE;
        }
    };
    let _log_guard = logging::init_logging(config.log_dir.as_deref());

    let input = cli
        .input
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.default_input));
    println!("Processing: {}\n", input.display());

    let pipeline = Pipeline::new(config);
    match pipeline.run(&input, cli.dry_run) {
        Ok(result) => {
            println!("{}", report::render_summary(&result));
            if result.written.is_some() {
                println!(
                    "\n✅ SUCCESS! Upload {} or {} to your hosting.",
                    pipeline.config().complete_file,
                    pipeline.config().search_file
                );
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Pipeline failed: {}", e);
            println!("ERROR: {}", e);
            println!("\n❌ FAILED! Check the error messages above.");
            ExitCode::FAILURE
        }
    }
}
