use anyhow::Result;
use clap::Parser;
use log::info;

use tour::{format_reports, render_all, Config, OutputFormat, Page};

/// Walks through the language-feature playground pages and prints what each one does
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Page to render; repeat for several (default: all pages)
    #[arg(short, long, value_enum)]
    page: Vec<Page>,

    /// Output format (text, json)
    #[arg(short, long, default_value = Config::DEFAULT_FORMAT)]
    format: String,

    /// List page names and exit
    #[arg(short, long)]
    list: bool,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let filter = if args.verbose {
        Config::VERBOSE_LOG_FILTER
    } else {
        Config::DEFAULT_LOG_FILTER
    };
    env_logger::init_from_env(env_logger::Env::new().filter_or("RUST_LOG", filter));

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let format = OutputFormat::parse(&args.format)?;

    if args.list {
        for page in Page::ALL {
            println!("{:<14} {}", page.name(), page.title());
        }
        return Ok(());
    }

    let reports = render_all(&args.page);
    info!("rendered {} page(s)", reports.len());

    print!("{}", format_reports(&reports, format)?);
    if format == OutputFormat::Json {
        println!();
    }
    Ok(())
}
