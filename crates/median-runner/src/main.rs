use std::path::{Path, PathBuf};

use serde::Deserialize;
use stats_heap::{measure_time, median_of, MedianError, Strategy, TextSource};
use thiserror::Error;
use tracing::Level;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub inputs: Vec<PathBuf>,
    #[serde(default)]
    pub strategy: Strategy,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    String::from("info")
}

impl Config {
    /**
    Reads `MEDIAN_INPUTS` (comma separated paths), `MEDIAN_STRATEGY` and
    `MEDIAN_LOG_LEVEL` from the environment.
    */
    pub fn from_env() -> Result<Self, RunnerError> {
        Ok(envy::prefixed("MEDIAN_").from_env::<Config>()?)
    }

    pub fn level(&self) -> Result<Level, RunnerError> {
        self.log_level
            .parse()
            .map_err(|_| RunnerError::LogLevel(self.log_level.clone()))
    }
}

#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("Unable to load the configuration `{0}`")]
    Config(#[from] envy::Error),
    #[error("The log level `{0}` is not recognised")]
    LogLevel(String),
    #[error("Failed to compute the median of `{}`", .path.display())]
    Median { path: PathBuf, source: MedianError },
}

fn run_dataset(path: &Path, strategy: Strategy) -> Result<i32, RunnerError> {
    let wrap = |source: MedianError| RunnerError::Median {
        path: path.to_path_buf(),
        source,
    };
    let source = TextSource::open(path).map_err(|error| wrap(error.into()))?;
    median_of(source, strategy).map_err(wrap)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    let config = Config::from_env()?;
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(config.level()?)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    for path in &config.inputs {
        let (median, duration) = measure_time!(path.display(), {
            run_dataset(path, config.strategy)
        });
        match median {
            Ok(median) => {
                tracing::info!(
                    path = %path.display(),
                    strategy = %config.strategy,
                    median,
                    ?duration,
                    "Computed the median"
                );
                println!("{}: {}", path.display(), median);
            }
            Err(error) => {
                tracing::error!(%error, "Failed to process the dataset");
                return Err(error.into());
            }
        }
    }
    Ok(())
}
