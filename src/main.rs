use bandit_sim::config::AppConfig;
use bandit_sim::simulation::errors::SimulationError;
use bandit_sim::simulation::{Experiment, TraceRecorder};

use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), SimulationError> {
    let config = AppConfig::from_env().expect("Cannot read config");
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_level))
        .init();

    let mut experiment = Experiment::new(config.simulation)?;
    let report = experiment.run(&mut TraceRecorder)?;

    info!(
        id = %experiment.id(),
        best = report.best_arm_mean,
        worst = report.worst_arm_mean,
        "Experiment complete"
    );
    for agent in &report.agents {
        info!(
            epsilon = agent.epsilon,
            pulls = agent.pulls,
            mean_reward = agent.mean_reward,
            "Agent summary"
        );
    }

    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
