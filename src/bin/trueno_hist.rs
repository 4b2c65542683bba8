//! trueno-hist: equal-width histograms from the command line.
//!
//! Loads integer samples from a file, typed stdin input, or a random
//! generator, then prints the text histogram, writes the text dump, and
//! optionally saves or displays the bar chart.
//!
//! Run: `trueno-hist file samples.txt --stats --save-image chart.png`

use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use trueno_hist::config::Config;
use trueno_hist::debug;
use trueno_hist::input::{self, RandomSpec};
use trueno_hist::output::{ImageSink, TerminalMode, TerminalSink};
use trueno_hist::plots::{AsciiRenderer, BarChart, ChartOptions, Theme};
use trueno_hist::session::{Action, Built, Outcome, Session};

const COMPONENT: &str = "cli";

/// trueno-hist: equal-width histograms of integer samples
#[derive(Parser, Debug)]
#[command(name = "trueno-hist")]
#[command(author = "PAIML Team")]
#[command(version)]
#[command(about = "Equal-width histograms with text, statistics, and PNG output", long_about = None)]
struct Cli {
    #[command(subcommand)]
    source: Source,

    /// Number of intervals (default 10)
    #[arg(short, long, global = true)]
    intervals: Option<usize>,

    /// Text dump path (default histogram_output.txt)
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Save the bar chart as a PNG or JPEG image (by extension, default .png)
    #[arg(long, global = true, value_name = "PATH")]
    save_image: Option<PathBuf>,

    /// Display the bar chart in the terminal
    #[arg(long, global = true)]
    display: bool,

    /// Terminal rendering mode for --display
    #[arg(long, value_enum, global = true)]
    terminal_mode: Option<TerminalMode>,

    /// Chart color theme
    #[arg(long, value_enum, global = true)]
    theme: Option<Theme>,

    /// Print summary statistics
    #[arg(long, global = true)]
    stats: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging to stderr
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Source {
    /// Read one integer per line from a file
    File {
        /// Input file
        path: PathBuf,
    },
    /// Read integers from stdin, one per line, until a line with 0
    Input,
    /// Generate uniformly distributed random integers
    Random {
        /// Number of samples
        #[arg(long)]
        count: usize,
        /// Smallest value (inclusive)
        #[arg(long, allow_negative_numbers = true)]
        min: i64,
        /// Largest value (inclusive)
        #[arg(long, allow_negative_numbers = true)]
        max: i64,
        /// Seed for reproducible samples
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        debug::enable();
    } else {
        debug::enable_from_env();
    }

    if let Err(e) = run(&cli) {
        trueno_hist::error!(COMPONENT, "{e:#}");
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }

    Ok(())
}

fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    let intervals = cli.intervals.unwrap_or(config.histogram.intervals);
    let image = cli.save_image.as_deref().map(ImageSink::new).transpose()?;

    let session = Session::new(intervals)?;
    let (session, outcome) = session.apply(source_action(&cli.source, intervals)?);
    outcome.context("could not load samples")?;

    let (session, outcome) = session.apply(Action::Build);
    let Outcome::Built(built) = outcome? else {
        bail!("build produced no histogram");
    };

    let mut stdout = io::stdout().lock();
    writeln!(stdout)?;
    write!(stdout, "{}", built.ascii)?;

    if cli.stats {
        writeln!(stdout, "\n{}", statistics_report(session)?)?;
    }

    let output = cli.output.clone().unwrap_or_else(|| config.histogram.output.clone());
    match AsciiRenderer::write_to_file(&built.histogram, &output) {
        Ok(()) => eprintln!("Results saved to {}", output.display()),
        // The text dump is best-effort; the chart is still produced.
        Err(e) => eprintln!("Error: could not write {}: {e}", output.display()),
    }

    if image.is_some() || cli.display {
        present_chart(cli, &config, &built, image.as_ref(), &mut stdout)?;
    }
    Ok(())
}

fn statistics_report(session: Session) -> Result<String> {
    let (_, outcome) = session.apply(Action::Statistics);
    let Outcome::Statistics(summary) = outcome.context("could not compute statistics")? else {
        bail!("statistics produced no summary");
    };
    Ok(summary.to_string())
}

fn load_config(cli: &Cli) -> Result<Config> {
    let config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("could not load config {}", path.display()))?,
        None => match Config::default_path() {
            Some(path) => Config::load_or_default(&path)
                .with_context(|| format!("invalid config {}", path.display()))?,
            None => Config::default(),
        },
    };
    Ok(config.apply_env()?)
}

fn source_action(source: &Source, intervals: usize) -> Result<Action> {
    let action = match source {
        Source::File { path } => Action::LoadFile(path.clone()),
        Source::Input => {
            let stdin = io::stdin();
            if stdin.is_terminal() {
                eprintln!("Enter integers, one per line (finish with 0):");
            }
            Action::Load(input::read_until_sentinel(stdin.lock())?)
        }
        Source::Random { count, min, max, seed } => {
            let mut spec = RandomSpec::new(*count, *min, *max);
            if let Some(seed) = seed {
                spec = spec.with_seed(*seed);
            }
            Action::Generate { spec, intervals }
        }
    };
    Ok(action)
}

fn present_chart(
    cli: &Cli,
    config: &Config,
    built: &Built,
    image: Option<&ImageSink>,
    out: &mut impl Write,
) -> Result<()> {
    let chart = BarChart::from_histogram(&built.histogram)
        .dimensions(config.chart.width, config.chart.height)
        .theme(cli.theme.unwrap_or(config.chart.theme));
    let save_to = image.map(|sink| sink.path().to_path_buf());
    let options = ChartOptions { save_to, display: cli.display };
    let mode = cli.terminal_mode.unwrap_or(config.display.mode);
    let mut sink = TerminalSink::new(out, mode, config.display.columns);

    chart.present(&options, &mut sink).context("could not render chart")?;
    if let Some(image) = image {
        eprintln!("Chart saved as {}", image.path().display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_random_negative_bounds() {
        let cli = Cli::parse_from([
            "trueno-hist", "random", "--count", "5", "--min", "-10", "--max", "-2", "-i", "4",
        ]);
        match cli.source {
            Source::Random { count, min, max, seed } => {
                assert_eq!((count, min, max, seed), (5, -10, -2, None));
            }
            other => panic!("unexpected source {other:?}"),
        }
        assert_eq!(cli.intervals, Some(4));
    }

    #[test]
    fn test_statistics_report() {
        let (session, _) = Session::default().apply(Action::Load(vec![1, 3]));
        let report = statistics_report(session).unwrap();
        assert!(report.contains("Median: 2.0\n"));
    }

    #[test]
    fn test_statistics_report_error_is_returned() {
        let err = statistics_report(Session::default()).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("could not compute statistics"), "{msg}");
        assert!(msg.contains("no data to process"), "{msg}");
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "trueno-hist", "file", "data.txt", "--stats", "--theme", "dark", "--display",
        ]);
        assert!(cli.stats);
        assert!(cli.display);
        assert_eq!(cli.theme, Some(Theme::Dark));
    }
}
