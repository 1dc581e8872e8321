use clap::Parser;
use contact_book::utils::error::{BookError, ErrorSeverity};
use contact_book::utils::{logger, validation::Validate};
use contact_book::{BirthdayWindowQuery, CliConfig, JsonFileStorage, Session, SystemClock};
use std::io::{self, Write};

fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = run(&cli) {
        let exit_code = match e.downcast_ref::<BookError>() {
            Some(err) => report(err),
            None => {
                tracing::error!("❌ {:#}", e);
                eprintln!("❌ {:#}", e);
                1
            }
        };
        std::process::exit(exit_code);
    }
}

fn run(cli: &CliConfig) -> anyhow::Result<()> {
    // 載入並驗證配置
    let config = cli.resolve()?;
    config.validate()?;

    let storage = JsonFileStorage::new(config.data_file());
    let query = BirthdayWindowQuery::new(config.window_days(), config.leap_day());
    let (mut session, banner) = Session::open(storage, SystemClock, query)?;

    let mut stdout = io::stdout().lock();
    for line in banner {
        writeln!(stdout, "{}", line)?;
    }

    session.run(io::stdin().lock(), stdout)?;
    Ok(())
}

/// Prints the failure and picks the exit code from its severity.
fn report(err: &BookError) -> i32 {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        err,
        err.category(),
        err.severity()
    );
    eprintln!("❌ {}", err.user_friendly_message());
    eprintln!("💡 {}", err.recovery_suggestion());

    match err.severity() {
        ErrorSeverity::Low | ErrorSeverity::High => 1,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::Critical => 3,
    }
}
