use std::process::ExitCode;

use fireworks::{Scene, SceneConfig, SimulationError, WindowBackend};
use tracing::error;
use tracing_subscriber::EnvFilter;

fn run() -> Result<(), SimulationError> {
    let config = SceneConfig::default();
    let mut backend = WindowBackend::new(&config)?;
    Scene::new(config).run(&mut backend)
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
