use cinema_ticketing::app::run_session;
use cinema_ticketing::utils::error::ErrorSeverity;
use cinema_ticketing::utils::{logger, validation::Validate};
use cinema_ticketing::{CliConfig, SessionSettings, TicketCounter, TicketingError, TomlConfig};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("🚀 Starting cinema-ticketing");
    tracing::debug!("CLI config: {:?}", cli);

    let result = match cli.config.clone() {
        Some(path) => {
            tracing::info!("📁 Loading session from: {}", path);
            TomlConfig::from_file(&path).and_then(|mut config| {
                config.apply_overrides(&cli);
                execute(&config, cli.dry_run)
            })
        }
        None => {
            tracing::info!("No session file given, running the demo session");
            execute(&cli, cli.dry_run)
        }
    };

    if let Err(e) = result {
        tracing::error!(
            "❌ Session failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

fn execute<C: SessionSettings + Validate>(settings: &C, dry_run: bool) -> Result<(), TicketingError> {
    // 驗證配置
    settings.validate()?;
    tracing::info!(
        "✅ {} ready: {} slots, {:?} output",
        settings.cinema_name(),
        settings.capacity(),
        settings.output_format()
    );

    if dry_run {
        tracing::info!("🔍 DRY RUN MODE - No tickets will be issued");
        for (i, order) in settings.plan().orders.iter().enumerate() {
            println!(
                "{:>2}. {} | {} | {} EGP | {} price change(s){}",
                i + 1,
                order.kind,
                order.movie,
                order.price,
                order.reprice.len(),
                if order.featured { " | featured" } else { "" }
            );
        }
        return Ok(());
    }

    let stdout = std::io::stdout();
    let report = run_session(settings, stdout.lock(), TicketCounter::global().clone())?;

    tracing::info!(
        "🎟️ {} tickets issued in total, {} admitted",
        report.total_issued,
        report.admitted
    );

    Ok(())
}
