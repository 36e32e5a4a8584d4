use crate::error::StatsError;
use crate::report::render::{render_plain, render_table};
use crate::report::stats::RouteReport;
use crate::route::Route;
use crate::ticket::Ticket;
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;

mod error;
mod report;
mod route;
mod ticket;
mod time;

const DEFAULT_ORIGIN: &str = "Vladivostok";
const DEFAULT_DESTINATION: &str = "Tel-Aviv";

/// Minimum flight time per carrier and the mean/median price gap for one route.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Path to the JSON tickets file
    #[arg(value_name = "FILE")]
    tickets: PathBuf,

    /// Origin name to filter on (exact match)
    #[arg(long, value_name = "NAME", default_value = DEFAULT_ORIGIN)]
    origin: String,

    /// Destination name to filter on (exact match)
    #[arg(long, value_name = "NAME", default_value = DEFAULT_DESTINATION)]
    destination: String,

    /// Print plain lines instead of a table
    #[arg(long)]
    plain: bool,
}

fn run(args: &Args) -> Result<String, StatsError> {
    let tickets = Ticket::load_from_file(&args.tickets)?;
    let route = Route::new(args.origin.as_str(), args.destination.as_str());
    let report = RouteReport::compute(&tickets, &route)?;
    Ok(if args.plain {
        render_plain(&report)
    } else {
        render_table(&report)
    })
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    match run(&args) {
        Ok(out) => {
            print!("{}", out);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            ExitCode::from(err.exit_code())
        }
    }
}
