use clap::Parser;
use perfcheck::{ComparisonReport, compare, load_baseline, load_current, print_report, write_json};
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[command(name = "perfcheck", version)]
#[command(about = "Check for test performance regressions against a stored baseline")]
struct Cli {
    /// Baseline performance report
    baseline: PathBuf,
    /// Current performance report
    current: PathBuf,
    /// Regression threshold (1.5 = 50% slower than baseline)
    #[arg(long, default_value_t = 1.5)]
    threshold: f64,
    /// Exit with an error code if regression detected
    #[arg(long)]
    fail_on_regression: bool,
    /// Save detailed results to a JSON file
    #[arg(long, value_name = "PATH")]
    json_output: Option<PathBuf>,
}

fn main() {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env();
    let env_filter = match "info".parse() {
        Ok(directive) => env_filter.add_directive(directive),
        Err(_) => env_filter, // fallback to default if parsing fails
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .try_init();

    let cli = Cli::parse();
    process::exit(run(&cli));
}

fn run(cli: &Cli) -> i32 {
    let baseline = load_baseline(&cli.baseline);
    let current = load_current(&cli.current);

    // First run: nothing recorded yet, so every current metric is new and
    // the build passes.
    if baseline.is_empty() {
        println!("No baseline data available - treating current run as new baseline");
        print_report(&ComparisonReport::from_new(&current), cli.threshold);
        return 0;
    }

    if current.is_empty() {
        eprintln!("Error: No current performance data available");
        return 1;
    }

    let report = match compare(&baseline, &current, cli.threshold) {
        Ok(report) => report,
        Err(e) => {
            tracing::error!(error = %e, "Comparison failed");
            return 1;
        }
    };

    print_report(&report, cli.threshold);

    if let Some(path) = &cli.json_output
        && let Err(e) = write_json(path, &report, cli.threshold)
    {
        tracing::error!(error = %e, path = %path.display(), "Failed to write JSON results");
    }

    if report.has_regression && cli.fail_on_regression {
        println!("\n❌ Performance regression detected - failing build");
        1
    } else if report.has_regression {
        println!("\n⚠️  Performance regression detected - but not failing build");
        0
    } else {
        println!("\n✅ No performance regressions detected");
        0
    }
}
