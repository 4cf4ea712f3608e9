use super::errors::PolicyError;
use super::estimate::RunningEstimate;

use crate::environment::BanditEnvironment;
use crate::errors::PolicyOrEnvironmentError;
use crate::rng::MaybeSeededRng;

use rand::Rng;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ArmStats {
    pub pulls: u64,
    pub mean_reward: f64,
}

#[derive(Debug, Serialize)]
pub struct AgentStats {
    pub epsilon: f64,
    pub pulls: u64,
    pub mean_reward: f64,
    pub arms: Vec<ArmStats>,
}

pub struct EpsilonGreedy {
    epsilon: f64,
    arms: Vec<RunningEstimate>,
    aggregate: RunningEstimate,
    rng: MaybeSeededRng,
}

impl EpsilonGreedy {
    pub fn new(epsilon: f64, arm_count: usize, seed: Option<u64>) -> Result<Self, PolicyError> {
        if !(0.0..=1.0).contains(&epsilon) {
            return Err(PolicyError::InvalidEpsilon(epsilon));
        }
        if arm_count == 0 {
            return Err(PolicyError::InvalidArmCount(arm_count));
        }

        Ok(Self {
            epsilon,
            arms: vec![RunningEstimate::default(); arm_count],
            aggregate: RunningEstimate::default(),
            rng: MaybeSeededRng::new(seed),
        })
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    pub fn arm_count(&self) -> usize {
        self.arms.len()
    }

    pub fn aggregate_mean(&self) -> f64 {
        self.aggregate.mean()
    }

    pub fn select_arm(&mut self, available_arms: usize) -> Result<usize, PolicyError> {
        if available_arms == 0 {
            return Err(PolicyError::NoArmsAvailable);
        }

        if self.rng.get_rng().random::<f64>() < self.epsilon {
            // explore, without excluding the incumbent best
            Ok(self.rng.get_rng().random_range(0..available_arms))
        } else {
            Ok(self.best_arm())
        }
    }

    // single pass with strict greater-than, so the lowest-indexed arm among
    // ties wins
    pub fn best_arm(&self) -> usize {
        let mut best_arm = 0;
        let mut best_mean = self.arms[0].mean();

        for (arm_id, arm) in self.arms.iter().enumerate().skip(1) {
            if arm.mean() > best_mean {
                best_arm = arm_id;
                best_mean = arm.mean();
            }
        }

        best_arm
    }

    pub fn update(&mut self, arm_id: usize, reward: f64) -> Result<(), PolicyError> {
        self.arms
            .get_mut(arm_id)
            .ok_or(PolicyError::ArmNotFound(arm_id))?
            .observe(reward);
        self.aggregate.observe(reward);

        Ok(())
    }

    pub fn step(
        &mut self,
        environment: &mut BanditEnvironment,
    ) -> Result<f64, PolicyOrEnvironmentError> {
        let arm_id = self.select_arm(environment.arm_count())?;
        let reward = environment.sample(arm_id)?;
        self.update(arm_id, reward)?;

        Ok(reward)
    }

    pub fn stats(&self) -> AgentStats {
        AgentStats {
            epsilon: self.epsilon,
            pulls: self.aggregate.count(),
            mean_reward: self.aggregate.mean(),
            arms: self
                .arms
                .iter()
                .map(|arm| ArmStats {
                    pulls: arm.count(),
                    mean_reward: arm.mean(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULT_SEED: Option<u64> = Some(1234);

    fn make_agent(epsilon: f64, arm_count: usize) -> EpsilonGreedy {
        EpsilonGreedy::new(epsilon, arm_count, DEFAULT_SEED).expect("valid agent configuration")
    }

    #[test]
    fn rejects_epsilon_out_of_range() {
        assert!(matches!(
            EpsilonGreedy::new(1.5, 10, DEFAULT_SEED),
            Err(PolicyError::InvalidEpsilon(_))
        ));
        assert!(matches!(
            EpsilonGreedy::new(-0.1, 10, DEFAULT_SEED),
            Err(PolicyError::InvalidEpsilon(_))
        ));
        assert!(matches!(
            EpsilonGreedy::new(f64::NAN, 10, DEFAULT_SEED),
            Err(PolicyError::InvalidEpsilon(_))
        ));
    }

    #[test]
    fn rejects_zero_arms() {
        assert!(matches!(
            EpsilonGreedy::new(0.1, 0, DEFAULT_SEED),
            Err(PolicyError::InvalidArmCount(0))
        ));
    }

    #[test]
    fn fresh_agent_breaks_ties_on_first_arm() {
        let agent = make_agent(0.5, 10);
        assert_eq!(agent.best_arm(), 0);
    }

    #[test]
    fn ties_resolve_to_lowest_index() {
        let mut agent = make_agent(0.0, 4);
        agent.update(1, 2.0).expect("arm exists");
        agent.update(3, 2.0).expect("arm exists");

        assert_eq!(agent.best_arm(), 1);
    }

    #[test]
    fn greedy_always_exploits_strict_best() {
        let mut agent = make_agent(0.0, 5);
        agent.update(3, 1.0).expect("arm exists");

        for _ in 0..1000 {
            assert_eq!(agent.select_arm(5).expect("arms available"), 3);
        }
    }

    #[test]
    fn full_exploration_is_roughly_uniform() {
        let mut agent = make_agent(1.0, 4);
        let draws = 20_000;
        let mut counts = [0u64; 4];

        for _ in 0..draws {
            counts[agent.select_arm(4).expect("arms available")] += 1;
        }

        for &count in &counts {
            let frequency = count as f64 / draws as f64;
            assert!(
                (frequency - 0.25).abs() < 0.02,
                "arm frequency {} too far from uniform",
                frequency
            );
        }
    }

    #[test]
    fn update_rejects_unknown_arm() {
        let mut agent = make_agent(0.1, 3);
        assert!(matches!(
            agent.update(3, 1.0),
            Err(PolicyError::ArmNotFound(3))
        ));
    }

    #[test]
    fn select_arm_requires_arms() {
        let mut agent = make_agent(0.1, 3);
        assert!(matches!(
            agent.select_arm(0),
            Err(PolicyError::NoArmsAvailable)
        ));
    }

    #[test]
    fn aggregate_tracks_all_arm_observations() {
        let mut environment = BanditEnvironment::new(5, DEFAULT_SEED).expect("valid environment");
        let mut agent = make_agent(0.25, 5);

        for _ in 0..100 {
            agent.step(&mut environment).expect("step should succeed");
        }

        let stats = agent.stats();
        assert_eq!(stats.pulls, 100);
        assert_eq!(stats.arms.iter().map(|arm| arm.pulls).sum::<u64>(), 100);
    }

    #[test]
    fn greedy_locks_onto_first_sampled_arm() {
        // std dev 0 makes every draw return the arm's true mean
        let mut environment = BanditEnvironment::from_means(&[1.0, 5.0, 10.0], 0.0, DEFAULT_SEED)
            .expect("valid environment");
        let mut agent = make_agent(0.0, 3);

        for _ in 0..3 {
            let reward = agent.step(&mut environment).expect("step should succeed");
            assert_eq!(reward, 1.0);
        }

        let stats = agent.stats();
        assert_eq!(stats.arms[0].pulls, 3);
        assert_eq!(stats.arms[0].mean_reward, 1.0);
        assert_eq!(stats.arms[1].pulls, 0);
        assert_eq!(stats.arms[2].pulls, 0);
    }
}
