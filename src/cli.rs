use crate::chart::TypeChart;
use crate::report::{build_report, render_report, ReportConfig};
use crate::scoring::aggregate::AttackCoverage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Full pipeline report (the default when no command is given).
    Report,
    /// Chart consistency self-check.
    Check,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CliOptions {
    pub command: Command,
    pub json: bool,
    pub config: ReportConfig,
}

/// Parse arguments after the binary name. `None` means unusable input.
pub fn parse_args(args: &[String]) -> Option<CliOptions> {
    let mut options = CliOptions {
        command: Command::Report,
        json: false,
        config: ReportConfig::default(),
    };

    let mut rest = &args[1.min(args.len())..];
    if rest.first().map(String::as_str) == Some("check") {
        options.command = Command::Check;
        rest = &rest[1..];
    }

    for arg in rest {
        match arg.as_str() {
            "--json" => options.json = true,
            "--no-tables" => options.config.score_tables = false,
            "--no-chart" => options.config.chart_dump = false,
            "--no-composite" => options.config.composite = false,
            "--raw" => options.config.normalize = false,
            "--single-coverage" => options.config.coverage = AttackCoverage::SingleOnly,
            _ => return None,
        }
    }
    Some(options)
}

fn usage() {
    eprintln!(
        "usage: porygon [check] [--json] [--no-tables] [--no-chart] [--no-composite] [--raw] [--single-coverage]"
    );
}

pub fn run_with_args(args: &[String]) -> i32 {
    let Some(options) = parse_args(args) else {
        usage();
        return 2;
    };

    match options.command {
        Command::Check => handle_check(),
        Command::Report => handle_report(&options),
    }
}

fn handle_check() -> i32 {
    match TypeChart::standard().verify() {
        Ok(()) => {
            println!("chart check passed: all cells and pairwise products map to scores");
            0
        }
        Err(err) => {
            eprintln!("chart check failed: {err}");
            1
        }
    }
}

fn handle_report(options: &CliOptions) -> i32 {
    let chart = TypeChart::standard();
    if options.json {
        let report = match build_report(chart, &options.config) {
            Ok(report) => report,
            Err(err) => {
                eprintln!("report failed: {err}");
                return 1;
            }
        };
        match serde_json::to_string_pretty(&report) {
            Ok(payload) => {
                println!("{payload}");
                0
            }
            Err(err) => {
                eprintln!("failed to serialize report: {err}");
                1
            }
        }
    } else {
        match render_report(chart, &options.config) {
            Ok(text) => {
                print!("{text}");
                0
            }
            Err(err) => {
                eprintln!("report failed: {err}");
                1
            }
        }
    }
}
