use std::fs;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use jiff::civil::Date;
use rozklad::week::{localized_week_number, WeekOddity};
use rozklad::{render, Catalog};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rozklad", about = "Weekly class schedule for a given date", version)]
struct Cli {
    /// Date inside the week to resolve (YYYY-MM-DD)
    date: String,

    /// Schedule entries JSON file
    #[arg(long, default_value = "pairs.json")]
    pairs: PathBuf,

    /// Supplementary info JSON file
    #[arg(long, default_value = "pair_info.json")]
    info: PathBuf,

    /// First day of the semester (YYYY-MM-DD)
    #[arg(long, default_value = "2024-09-16")]
    semester_start: String,

    /// Print the resolved week number and oddity instead of a schedule
    #[arg(long, conflicts_with_all = ["json", "output"])]
    week: bool,

    /// Output the schedule as JSON instead of markdown
    #[arg(long)]
    json: bool,

    /// Write markdown to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Initialize tracing from CLI verbosity; `RUST_LOG` overrides the flag.
fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("rozklad={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_date(label: &str, s: &str) -> Date {
    match s.parse() {
        Ok(d) => d,
        Err(e) => {
            eprintln!("error: invalid {label} '{s}': {e}");
            process::exit(1);
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let date = parse_date("date", &cli.date);
    let semester_start = parse_date("semester start", &cli.semester_start);

    if cli.week {
        let week = match localized_week_number(date, semester_start) {
            Ok(w) => w,
            Err(e) => {
                eprintln!("error: {e}");
                process::exit(1);
            }
        };
        let oddity = WeekOddity::of_week(week);
        println!("week {week} ({})", oddity.as_str());
        process::exit(0);
    }

    let pairs = match fs::read(&cli.pairs) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("error: cannot read {}: {e}", cli.pairs.display());
            process::exit(1);
        }
    };
    let info = match fs::read(&cli.info) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("error: cannot read {}: {e}", cli.info.display());
            process::exit(1);
        }
    };

    let catalog = match Catalog::from_json(&pairs, &info) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    };

    let days = match catalog.weekly_schedule(date, semester_start) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    };

    if cli.json {
        match serde_json::to_string_pretty(&days) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error: failed to serialize: {e}");
                process::exit(1);
            }
        }
        return;
    }

    let markdown = render::render_markdown(&days, date);
    match cli.output {
        Some(path) => {
            if let Err(e) = fs::write(&path, markdown) {
                eprintln!("error: cannot write {}: {e}", path.display());
                process::exit(1);
            }
        }
        None => print!("{markdown}"),
    }
}
