//! CLI entry point for the dataset explorer.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use dotenv::dotenv;
use eda::{DatasetExplorer, ExplorerConfig, JsonSurface, Report, TerminalSurface};
use std::io;
use tracing::{debug, info};

/// CLI-compatible report selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum CliReport {
    /// Shape, describe statistics and column info
    Summary,
    /// Histograms of the numeric columns
    Distributions,
    /// Count plots of the categorical columns
    Categorical,
    /// Pearson correlation heatmap
    Correlation,
    /// Null counts per column
    Missing,
    /// Outlier boxplots
    Boxplots,
}

impl From<CliReport> for Report {
    fn from(cli: CliReport) -> Self {
        match cli {
            CliReport::Summary => Report::Summary,
            CliReport::Distributions => Report::Distributions,
            CliReport::Categorical => Report::Categorical,
            CliReport::Correlation => Report::Correlation,
            CliReport::Missing => Report::Missing,
            CliReport::Boxplots => Report::Boxplots,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Exploratory data analysis for delimited text files",
    long_about = "Loads a CSV file and prints an overview, distributions, categorical counts,\n\
                  correlations, missing values and outlier boxplots.\n\n\
                  EXAMPLES:\n  \
                  # Every report, drawn as text\n  \
                  eda data.csv\n\n  \
                  # Only missing values and boxplots of two columns\n  \
                  eda data.csv --only missing --only boxplots --boxplot-columns Amount,Value\n\n  \
                  # Figures as JSON lines for an external renderer\n  \
                  eda data.csv --json > figures.jsonl"
)]
struct Args {
    /// Path to the delimited text file to explore
    input: String,

    /// Write figures as JSON lines to stdout
    ///
    /// Disables logging and moves the report text to stderr so stdout only
    /// carries JSON.
    #[arg(long)]
    json: bool,

    /// Number of histogram bins
    #[arg(long, default_value = "20")]
    bins: usize,

    /// Most frequent values shown per categorical column
    #[arg(long, default_value = "20")]
    max_categories: usize,

    /// Columns to draw boxplots for (default: every numeric column)
    #[arg(long, value_delimiter = ',')]
    boxplot_columns: Option<Vec<String>>,

    /// Keep TransactionId and CurrencyCode in the categorical report
    #[arg(long)]
    keep_columns: bool,

    /// Field delimiter
    #[arg(long, default_value = ",")]
    delimiter: char,

    /// Run only these reports (repeatable)
    #[arg(long, value_enum)]
    only: Vec<CliReport>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Only show warnings and errors in the log
    #[arg(short, long)]
    quiet: bool,
}

/// Initialize the tracing subscriber for logging.
///
/// When `json_output` is true, logging is completely disabled to ensure
/// only JSON is written to stdout. Logs go to stderr.
fn init_logging(level: &str, quiet: bool, json_output: bool) {
    if json_output {
        return;
    }

    use tracing_subscriber::EnvFilter;

    let effective_level = if quiet { "warn" } else { level };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(effective_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    // Load environment variables (RUST_LOG) from .env file before the
    // log filter reads them
    dotenv().ok();

    let args = Args::parse();

    init_logging(&args.log_level, args.quiet, args.json);

    let delimiter = u8::try_from(args.delimiter)
        .map_err(|_| anyhow::anyhow!("Delimiter must be a single ASCII character"))?;

    let mut config_builder = ExplorerConfig::builder()
        .histogram_bins(args.bins)
        .max_categories(args.max_categories)
        .delimiter(delimiter);
    if args.keep_columns {
        config_builder = config_builder.keep_all_columns();
    }
    let config = config_builder.build()?;
    debug!("Explorer configuration: {:?}", config);

    let builder = DatasetExplorer::builder(&args.input).config(config);
    let mut explorer = if args.json {
        builder
            .console(io::stderr())
            .surface(JsonSurface::stdout())
            .build()?
    } else {
        builder.surface(TerminalSurface::stdout()).build()?
    };

    // A failed load has already been reported on the console
    if explorer.load().is_err() {
        return Ok(());
    }

    let reports: Vec<Report> = if args.only.is_empty() {
        Report::ALL.to_vec()
    } else {
        args.only.iter().map(|&r| r.into()).collect()
    };

    let boxplot_columns: Option<Vec<&str>> = args
        .boxplot_columns
        .as_ref()
        .map(|columns| columns.iter().map(String::as_str).collect());

    let mut completed = 0;
    for report in reports {
        let done = match report {
            Report::Boxplots => explorer
                .plot_outlier_boxplots(boxplot_columns.as_deref())?
                .is_done(),
            other => explorer.run(other)?,
        };
        if done {
            completed += 1;
        }
    }
    info!("Finished {} report(s) for {}", completed, args.input);

    Ok(())
}
