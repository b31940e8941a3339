use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;

use bikedash::config::{self, Config, FallbackData};
use bikedash::dashboard::{Dashboard, DataSource};
use bikedash::filter::parse_expression;
use bikedash::input::FileLoader;
use bikedash::listing::{Field, RowPolicy};
use bikedash::report::{self, OutputFormat};

/// Used bike listing dashboard
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Summarize used bike listings as filterable metrics and distributions"
)]
struct Args {
    /// Input listing file (if not provided, reads from stdin)
    input: Option<PathBuf>,

    /// Exact-match filter, FIELD=VALUE (repeatable, "all" clears a field)
    #[arg(short, long = "filter", value_name = "FIELD=VALUE")]
    filters: Vec<String>,

    /// Field to chart (repeatable, replaces the configured charts)
    #[arg(short, long = "chart", value_name = "FIELD")]
    charts: Vec<Field>,

    /// Print the filter options for a field and exit
    #[arg(long, value_name = "FIELD")]
    options: Option<Field>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Reject malformed rows instead of keeping them with warnings
    #[arg(long)]
    strict: bool,

    /// Listings to show when the input cannot be loaded
    #[arg(long, value_enum)]
    fallback: Option<FallbackData>,
}

fn main() -> Result<()> {
    init_logging();
    color_eyre::install()?;

    let args = Args::parse();

    let config_result = config::load_config();
    if let Some(warning) = &config_result.warning {
        eprintln!("Warning: {}", warning);
    }
    let config = apply_overrides(config_result.config, &args);

    // Listings load on a background thread; the report needs all of them
    let policy = config.data.row_policy;
    let mut loader = match &args.input {
        Some(path) => FileLoader::spawn_load(path.clone(), policy),
        None => FileLoader::spawn_load_stdin(policy),
    };
    let result = loader
        .wait()
        .ok_or_else(|| color_eyre::eyre::eyre!("Listing load result was already taken"))?;

    let mut dashboard = Dashboard::from_load_result(result, &config);
    report_source(dashboard.source());

    for expression in &args.filters {
        let (field, selection) = parse_expression(expression)?;
        dashboard.set_filter(field, selection);
    }

    if let Some(field) = args.options {
        print!(
            "{}",
            report::render_options(field, &dashboard.filter_options(field))
        );
        return Ok(());
    }

    let output = report::render(&dashboard.snapshot(), args.format)?;
    print!("{}", output);
    if !output.ends_with('\n') {
        println!();
    }

    Ok(())
}

/// Log to stderr at the level named by `BIKEDASH_LOG` (default: warn)
fn init_logging() {
    use std::io::Write;

    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_env("BIKEDASH_LOG")
        .target(env_logger::Target::Stderr)
        .format(|buf, record| {
            use std::time::SystemTime;
            let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
            writeln!(
                buf,
                "[{}] [{}] {}",
                datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        })
        .init();
}

/// Command line flags take precedence over the config file
fn apply_overrides(mut config: Config, args: &Args) -> Config {
    if args.strict {
        config.data.row_policy = RowPolicy::Strict;
    }
    if let Some(fallback) = args.fallback {
        config.data.fallback = fallback;
    }
    if !args.charts.is_empty() {
        config.dashboard.charts = args.charts.clone();
    }
    config
}

/// Tell the user about anything that changed what the report covers
fn report_source(source: &DataSource) {
    match source {
        DataSource::Loaded {
            warnings,
            rejected,
            ignored_columns,
        } => {
            if !ignored_columns.is_empty() {
                eprintln!("Ignored unknown columns: {}", ignored_columns.join(", "));
            }
            if *warnings > 0 {
                eprintln!("Kept malformed rows ({} warning(s))", warnings);
            }
            if *rejected > 0 {
                eprintln!("Rejected {} malformed row(s)", rejected);
            }
        }
        DataSource::Fallback { reason, data } => {
            let shown = match data {
                FallbackData::Empty => "no listings",
                FallbackData::Sample => "sample listings",
            };
            eprintln!("Could not load listings: {}. Showing {}.", reason, shown);
        }
    }
}
