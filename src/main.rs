use begum_compare::utils::{logger, validation::Validate};
use begum_compare::{CliConfig, CompareError, LocalStorage, RegressionCheck};
use clap::Parser;

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting begum-compare");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    std::process::exit(match run(&config) {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(e) => report_error(&e),
    });
}

fn run(config: &CliConfig) -> Result<bool, CompareError> {
    // 驗證配置
    config.validate()?;
    let runs = config.run_set()?;

    let check = RegressionCheck::new(LocalStorage::new(), config);
    let report = check.run(&runs)?;

    if config.json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report.render_text());
    }

    Ok(report.passed())
}

fn report_error(e: &CompareError) -> i32 {
    tracing::error!(
        "❌ Comparison failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    e.severity().exit_code()
}
