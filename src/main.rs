use mimalloc::MiMalloc;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use webui_username_fix::{Config, FixError};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let loaded = Config::load();
    let loglevel = loaded
        .as_ref()
        .map(|cfg| cfg.loglevel.clone())
        .unwrap_or_else(|_| "info".to_string());

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(loglevel));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();

    let cfg = match loaded {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(error = %FixError::from(e), "failed to load configuration");
            return ExitCode::FAILURE;
        }
    };

    info!(
        wrong_name = %cfg.wrong_name,
        correct_name = %cfg.correct_name,
        force = cfg.force_rerun(),
        "OpenWebUI username fix"
    );

    let cwd = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            error!(error = %e, "cannot resolve working directory");
            return ExitCode::FAILURE;
        }
    };

    match webui_username_fix::run(&cfg, &cwd).await {
        Ok(outcome) => {
            info!(?outcome, mutated = outcome.mutated(), "username fix finished");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, location_failure = e.is_location_failure(), "username fix failed");
            ExitCode::FAILURE
        }
    }
}
