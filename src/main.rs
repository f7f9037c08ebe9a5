use std::process::ExitCode;

use clap::Parser;

use sentinel::application::config::AppConfig;
use sentinel::application::services::CycleService;
use sentinel::domain::value_objects::thresholds::ThresholdSet;
use sentinel::infrastructure::actions::working_set::WorkingSetReclaimer;
use sentinel::infrastructure::collectors::battery_sampler::BatterySampler;
use sentinel::infrastructure::collectors::process_ranker::SysinfoRanker;
use sentinel::infrastructure::collectors::sysinfo_sampler::SysinfoSampler;
use sentinel::infrastructure::logging::init_logging;
use sentinel::infrastructure::network::probe::OnlineProbe;
use sentinel::infrastructure::notifications::desktop::DesktopNotifier;
use sentinel::infrastructure::persistence::json_store::JsonStateStore;
use sentinel::presentation::cli::app::Cli;

/// Exit code when CPU, memory, and disk usage cannot be read at all.
const EXIT_SENSORS_UNAVAILABLE: u8 = 2;

fn load_config(cli: &Cli) -> anyhow::Result<AppConfig> {
    if let Some(ref path) = cli.config {
        AppConfig::load_from(path)
    } else {
        AppConfig::load()
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // No subscriber yet, so config errors go straight to stderr.
    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("sentinel: configuration error: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    // Guards must outlive the cycle or buffered log lines are dropped.
    let _guards = match init_logging(&config.storage.expanded_log_path(), cli.verbose) {
        Ok(guards) => guards,
        Err(e) => {
            eprintln!("sentinel: logging setup failed: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!("--- Hardware Health Sentinel started ---");

    // Manual DI: main.rs is the only place that knows concrete types
    let sampler = SysinfoSampler::new();
    let ranker = SysinfoRanker::new();
    let probe = OnlineProbe::new(config.network.timeout());
    let battery = BatterySampler::new();
    let reclaimer = WorkingSetReclaimer::new();
    let notifier = DesktopNotifier::new();
    let store = JsonStateStore::new(config.storage.expanded_state_path());
    let thresholds = ThresholdSet::from(&config.thresholds);

    let service = CycleService::new(
        &sampler,
        &ranker,
        &probe,
        &battery,
        &reclaimer,
        &notifier,
        &store,
        &thresholds,
        config.notifications.cooldown(),
    );

    match service.run_once() {
        Ok(_) => {
            tracing::info!("--- Check finished ---");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Health check aborted: {e:#}");
            ExitCode::from(EXIT_SENSORS_UNAVAILABLE)
        }
    }
}
