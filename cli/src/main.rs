//! docxhtml CLI - DOCX to HTML conversion tool

use std::path::PathBuf;
use std::process;
use std::time::Duration;

use clap::error::ErrorKind;
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use docxhtml::convert::{convert_file, ConvertOptions, ConvertOutcome};
use docxhtml::RenderOptions;

#[derive(Parser, Debug)]
#[command(name = "docxhtml")]
#[command(author = "iyulab")]
#[command(version)]
#[command(
    about = "Convert a DOCX document into a standalone responsive HTML page",
    long_about = None
)]
struct Cli {
    /// Input DOCX file; the HTML is written next to it
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Page title (defaults to the document title)
    #[arg(long, env = "DOCXHTML_TITLE")]
    title: Option<String>,

    /// Print rendering statistics as JSON
    #[arg(long)]
    stats: bool,
}

fn main() {
    env_logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            eprintln!("{}", e);
            println!("{}", "Usage: docxhtml <FILE.docx>".yellow());
            println!("       docxhtml --help for more information");
            process::exit(1);
        }
    };

    match run(&cli) {
        Ok(outcome) => {
            println!(
                "{} {}",
                "Converted:".green().bold(),
                outcome.output_path.display()
            );
            if cli.stats {
                match serde_json::to_string_pretty(&outcome.stats) {
                    Ok(json) => println!("{}", json),
                    Err(e) => log::warn!("Failed to serialize statistics: {}", e),
                }
            }
        }
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<ConvertOutcome, Box<dyn std::error::Error>> {
    let mut render = RenderOptions::new();
    if let Some(title) = &cli.title {
        render = render.with_title(title.clone());
    }
    let options = ConvertOptions::new().with_render_options(render);

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(80));
    pb.set_message(format!("Converting {}...", cli.input.display()));

    let result = convert_file(&cli.input, &options);
    pb.finish_and_clear();

    let outcome = result?;
    log::debug!(
        "Emitted {} blocks, {} table cells",
        outcome.stats.emitted_blocks(),
        outcome.stats.cell_count
    );
    Ok(outcome)
}
