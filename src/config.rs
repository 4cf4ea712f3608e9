use ::config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct SimulationConfig {
    pub arms: usize,
    pub rounds: u64,
    pub epsilons: Vec<f64>,
    pub seed: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    pub log_level: String,
    pub simulation: SimulationConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(File::with_name("config"))
            .add_source(Environment::with_prefix("APP"))
            .build()?;

        builder.try_deserialize()
    }
}
