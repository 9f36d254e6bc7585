use anyhow::Context;
use begum_compare::adapters::discovery::discover_run_set;
use begum_compare::config::toml_config::ReportFormat;
use begum_compare::core::ConfigProvider;
use begum_compare::utils::error::ErrorSeverity;
use begum_compare::utils::validation::{validate_required_field, Validate};
use begum_compare::utils::logger;
use begum_compare::{CompareError, LocalStorage, RegressionCheck, RegressionConfig, RunSet};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "begum-regression")]
#[command(about = "Regression test to compare results of Begum sort in different environments")]
struct Args {
    /// Directory containing the results of multiple runs of Begum sort
    #[arg(long)]
    results_directory: Option<PathBuf>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Also write the JSON report to this file
    #[arg(long)]
    report_file: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Dry run - list the discovered runs without comparing them
    #[arg(long)]
    dry_run: bool,
}

fn main() {
    let args = Args::parse();

    // 初始化日誌
    if args.log_json {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("🚀 Starting Begum sort regression test");

    let exit_code = match run(&args) {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(e) => report_error(&e),
    };
    std::process::exit(exit_code);
}

fn run(args: &Args) -> anyhow::Result<bool> {
    // 載入 TOML 配置
    let mut config = match &args.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path.display());
            RegressionConfig::from_file(path)?
        }
        None => RegressionConfig::default(),
    };

    // 應用命令列覆蓋設定
    if let Some(dir) = &args.results_directory {
        config.discovery.results_directory = Some(dir.clone());
    }
    if args.json {
        config.report.format = ReportFormat::Json;
    }
    if let Some(path) = &args.report_file {
        config.report.output_path = Some(path.clone());
    }

    // 驗證配置
    config.validate()?;
    let results_directory = validate_required_field(
        "discovery.results_directory (or --results-directory)",
        &config.discovery.results_directory,
    )?;

    let runs = discover_run_set(
        results_directory,
        &config.discovery.summary_extension,
        &config.discovery.tag_info_extension,
        config.min_runs(),
    )?;

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No comparison will occur");
        display_run_set(&runs);
        return Ok(true);
    }

    let check = RegressionCheck::new(LocalStorage::new(), &config);
    let report = check.run(&runs)?;

    match config.report.format {
        ReportFormat::Text => print!("{}", report.render_text()),
        ReportFormat::Json => println!("{}", report.to_json()?),
    }

    if let Some(path) = &config.report.output_path {
        std::fs::write(path, report.to_json()?)
            .with_context(|| format!("Failed to write report to {}", path.display()))?;
        tracing::info!("📁 Report saved to: {}", path.display());
    }

    Ok(report.passed())
}

fn display_run_set(runs: &RunSet) {
    println!("📋 Discovered {} runs:", runs.runs());
    for (index, (summary, tag_info)) in runs
        .summary_files
        .iter()
        .zip(&runs.tag_info_files)
        .enumerate()
    {
        println!("  {}. {}", index + 1, summary.display());
        println!("     {}", tag_info.display());
    }
}

fn report_error(e: &anyhow::Error) -> i32 {
    tracing::error!("❌ Regression test failed: {:#}", e);

    match e.downcast_ref::<CompareError>() {
        Some(compare_error) => {
            eprintln!("❌ {}", compare_error.user_friendly_message());
            eprintln!("💡 Suggestion: {}", compare_error.recovery_suggestion());
            compare_error.severity().exit_code()
        }
        None => {
            eprintln!("❌ {:#}", e);
            ErrorSeverity::Critical.exit_code()
        }
    }
}
