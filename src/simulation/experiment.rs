use super::errors::SimulationError;
use super::recorder::Recorder;

use crate::config::SimulationConfig;
use crate::environment::BanditEnvironment;
use crate::policies::{AgentStats, EpsilonGreedy};

use serde::Serialize;
use tracing::info;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct ExperimentReport {
    pub experiment_id: Uuid,
    pub rounds: u64,
    pub best_arm_mean: f64,
    pub worst_arm_mean: f64,
    pub agents: Vec<AgentStats>,
}

pub struct Experiment {
    id: Uuid,
    environment: BanditEnvironment,
    agents: Vec<EpsilonGreedy>,
    rounds: u64,
}

impl Experiment {
    pub fn new(config: SimulationConfig) -> Result<Self, SimulationError> {
        if config.rounds == 0 {
            return Err(SimulationError::InvalidRoundCount(config.rounds));
        }
        if config.epsilons.is_empty() {
            return Err(SimulationError::NoAgents);
        }

        let environment = BanditEnvironment::new(config.arms, config.seed)?;
        let agents = config
            .epsilons
            .iter()
            .enumerate()
            .map(|(agent_id, &epsilon)| {
                // offset derived seeds so no two components share a stream
                let seed = config.seed.map(|seed| seed.wrapping_add(1 + agent_id as u64));
                EpsilonGreedy::new(epsilon, config.arms, seed)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            id: Uuid::new_v4(),
            environment,
            agents,
            rounds: config.rounds,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn agent_count(&self) -> usize {
        self.agents.len()
    }

    pub fn run<R: Recorder>(
        &mut self,
        recorder: &mut R,
    ) -> Result<ExperimentReport, SimulationError> {
        info!(
            id = %self.id,
            arms = self.environment.arm_count(),
            agents = self.agents.len(),
            rounds = self.rounds,
            "Running experiment"
        );

        for round in 0..self.rounds {
            for (agent_id, agent) in self.agents.iter_mut().enumerate() {
                agent.step(&mut self.environment)?;
                recorder.record(round, agent_id, agent.aggregate_mean());
            }
        }

        Ok(self.report())
    }

    fn report(&self) -> ExperimentReport {
        ExperimentReport {
            experiment_id: self.id,
            rounds: self.rounds,
            best_arm_mean: self.environment.highest_mean(),
            worst_arm_mean: self.environment.lowest_mean(),
            agents: self.agents.iter().map(EpsilonGreedy::stats).collect(),
        }
    }
}
