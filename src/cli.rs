// src/cli.rs
use std::path::PathBuf;

use clap::{ArgAction, CommandFactory, Parser, Subcommand, builder::TypedValueParser};
use color_eyre::eyre::{Report, Result, WrapErr};

use crate::{
    config::{
        consts::*,
        options::{AnimateOptions, ChartOptions, ExtractOptions, PlotOptions},
    },
    pipeline::prepare,
    progress::Progress,
    render::{create_animation, plot_cumulative},
    scrape::collect_active_players,
    store::{self, StoreError},
};

/// Exit status for a missing input table.
pub const EXIT_NOT_FOUND: u8 = 1;
/// Exit status for every other failure.
pub const EXIT_FAILURE: u8 = 2;

#[derive(Parser, Debug)]
#[command(name = "goal500", version, about = "Scrape career goal tables and chart cumulative goals")]
pub struct Cli {
    /// More log output (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Append logs to this file instead of stderr
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scrape the roster and write the flat goals table
    Extract {
        #[arg(short, long, default_value = DEFAULT_STATS_FILE)]
        output: PathBuf,

        /// Players fetched concurrently
        #[arg(long, default_value_t = WORKERS, value_parser = clap::value_parser!(u64).range(1..64).map(|n| n as usize))]
        workers: usize,
    },

    /// Draw the cumulative goals chart
    Plot {
        #[arg(short, long, default_value = DEFAULT_STATS_FILE)]
        input: PathBuf,

        #[arg(short, long, default_value = DEFAULT_CHART_FILE)]
        output: PathBuf,

        #[arg(short, long, default_value = DEFAULT_TITLE)]
        title: String,

        #[arg(short, long, default_value = DEFAULT_SUBTITLE)]
        subtitle: String,

        /// Open the chart in a window instead of writing --output
        #[arg(long)]
        show: bool,

        #[arg(long, default_value_t = CHART_WIDTH, value_parser = clap::value_parser!(u32).range(1..))]
        width: u32,

        #[arg(long, default_value_t = CHART_HEIGHT, value_parser = clap::value_parser!(u32).range(1..))]
        height: u32,
    },

    /// Render the growing-lines animation as a looping GIF
    Animate {
        #[arg(short, long, default_value = DEFAULT_STATS_FILE)]
        input: PathBuf,

        #[arg(short, long, default_value = DEFAULT_ANIMATION_FILE)]
        output: PathBuf,

        #[arg(long, default_value_t = DEFAULT_FPS, value_parser = clap::value_parser!(u32).range(1..))]
        fps: u32,

        /// Seconds to hold the final frame
        #[arg(long, default_value_t = DEFAULT_HOLD_SECS)]
        duration: u32,

        #[arg(long, default_value_t = CHART_WIDTH, value_parser = clap::value_parser!(u32).range(1..))]
        width: u32,

        #[arg(long, default_value_t = CHART_HEIGHT, value_parser = clap::value_parser!(u32).range(1..))]
        height: u32,
    },
}

pub fn run(cli: Cli) -> Result<()> {
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    match command {
        Command::Extract { output, workers } => {
            extract(&ExtractOptions { out_path: output, workers, ..ExtractOptions::default() })?;
        }
        Command::Plot { input, output, title, subtitle, show, width, height } => {
            let chart = ChartOptions { title, subtitle, width, height, ..ChartOptions::default() };
            let output = (!show).then_some(output);
            plot(&PlotOptions { input, output, chart })?;
        }
        Command::Animate { input, output, fps, duration, width, height } => {
            let chart = ChartOptions { width, height, ..ChartOptions::default() };
            animate(&AnimateOptions { input, output, fps, hold_secs: duration, chart })?;
        }
    }
    Ok(())
}

pub fn extract(opts: &ExtractOptions) -> Result<usize> {
    let mut progress = ConsoleProgress::default();
    let rows = collect_active_players(opts, Some(&mut progress))
        .wrap_err("could not set up the HTTP client")?;
    store::write_table(&opts.out_path, &rows)?;
    logf!("Saved {} rows to {}", rows.len(), opts.out_path.display());
    Ok(rows.len())
}

pub fn plot(opts: &PlotOptions) -> Result<Option<PathBuf>> {
    let rows = store::read_table(&opts.input)?;
    let entries = prepare(&rows);
    Ok(plot_cumulative(&entries, opts.output.as_deref(), &opts.chart)?)
}

pub fn animate(opts: &AnimateOptions) -> Result<Option<PathBuf>> {
    let rows = store::read_table(&opts.input)?;
    let entries = prepare(&rows);
    Ok(create_animation(&entries, &opts.output, opts.fps, opts.hold_secs, &opts.chart)?)
}

/// Process exit status for a failed run.
pub fn exit_code(report: &Report) -> u8 {
    match report.downcast_ref::<StoreError>() {
        Some(StoreError::NotFound(_)) => EXIT_NOT_FOUND,
        _ => EXIT_FAILURE,
    }
}

/// Per-player status lines on stderr.
#[derive(Default)]
pub struct ConsoleProgress {
    total: usize,
    seen: usize,
    failed: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        eprintln!("Fetching {total} players...");
    }

    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }

    fn item_done(&mut self, name: &str, records: usize) {
        self.seen += 1;
        eprintln!("[{}/{}] {name}: {records} rows", self.seen, self.total);
    }

    fn item_failed(&mut self, name: &str, error: &str) {
        self.seen += 1;
        self.failed += 1;
        eprintln!("[{}/{}] {name}: skipped ({error})", self.seen, self.total);
    }

    fn finish(&mut self) {
        if self.failed > 0 {
            eprintln!("Done, {} of {} players skipped.", self.failed, self.total);
        } else {
            eprintln!("Done.");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("goal500").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn no_subcommand_is_allowed() {
        let cli = parse(&[]);
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn plot_defaults() {
        match parse(&["plot"]).command {
            Some(Command::Plot { input, output, title, subtitle, show, width, height }) => {
                assert_eq!(input, PathBuf::from("player_stats.csv"));
                assert_eq!(output, PathBuf::from("cumulative_goals.png"));
                assert_eq!(title, "Cumulative goals");
                assert_eq!(subtitle, "Active players with most goals");
                assert!(!show);
                assert_eq!((width, height), (1200, 800));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn plot_short_flags() {
        match parse(&["plot", "-i", "a.csv", "-o", "b.png", "-t", "T", "-s", "S"]).command {
            Some(Command::Plot { input, output, title, subtitle, .. }) => {
                assert_eq!(input, PathBuf::from("a.csv"));
                assert_eq!(output, PathBuf::from("b.png"));
                assert_eq!((title.as_str(), subtitle.as_str()), ("T", "S"));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn animate_defaults_and_fps_bound() {
        match parse(&["animate"]).command {
            Some(Command::Animate { output, fps, duration, .. }) => {
                assert_eq!(output, PathBuf::from("cumulative_goals.gif"));
                assert_eq!((fps, duration), (2, 5));
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(Cli::try_parse_from(["goal500", "animate", "--fps", "0"]).is_err());
    }

    #[test]
    fn workers_must_be_positive() {
        match parse(&["extract"]).command {
            Some(Command::Extract { workers, .. }) => assert_eq!(workers, 1),
            other => panic!("unexpected {other:?}"),
        }
        assert!(Cli::try_parse_from(["goal500", "extract", "--workers", "0"]).is_err());
        assert!(Cli::try_parse_from(["goal500", "extract", "--workers", "many"]).is_err());
    }

    #[test]
    fn extract_and_globals() {
        let cli = parse(&["-vv", "extract", "-o", "out/t.csv", "--workers", "4"]);
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Some(Command::Extract { output, workers }) => {
                assert_eq!(output, PathBuf::from("out/t.csv"));
                assert_eq!(workers, 4);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn missing_input_maps_to_exit_one() {
        let opts = PlotOptions { input: PathBuf::from("definitely/not/here.csv"), ..PlotOptions::default() };
        let report = plot(&opts).unwrap_err();
        assert_eq!(exit_code(&report), EXIT_NOT_FOUND);
        assert_eq!(report.to_string(), "File definitely/not/here.csv not found.");
        assert_eq!(exit_code(&Report::msg("boom")), EXIT_FAILURE);
    }
}
