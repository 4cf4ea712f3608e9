use super::arm::GaussianArm;
use super::errors::EnvironmentError;

use crate::rng::MaybeSeededRng;

use rand_distr::{Distribution, Normal};

// True means are drawn once at construction from Normal(MEAN_LOC, MEAN_SCALE);
// rewards are then drawn with unit standard deviation around each arm's mean.
const MEAN_LOC: f64 = 10.0;
const MEAN_SCALE: f64 = 1.0;
const REWARD_STD_DEV: f64 = 1.0;

pub struct BanditEnvironment {
    arms: Vec<GaussianArm>,
    rng: MaybeSeededRng,
}

impl BanditEnvironment {
    pub fn new(arm_count: usize, seed: Option<u64>) -> Result<Self, EnvironmentError> {
        if arm_count == 0 {
            return Err(EnvironmentError::InvalidArmCount(arm_count));
        }

        let mut rng = MaybeSeededRng::new(seed);
        let prior = Normal::new(MEAN_LOC, MEAN_SCALE)
            .map_err(|err| EnvironmentError::Distribution(err.to_string()))?;
        let arms = (0..arm_count)
            .map(|_| GaussianArm::new(prior.sample(rng.get_rng()), REWARD_STD_DEV))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| EnvironmentError::Distribution(err.to_string()))?;

        Ok(Self { arms, rng })
    }

    // Known means and a caller-chosen standard deviation, for evaluation
    // setups where the reward process must be controlled exactly.
    pub fn from_means(
        means: &[f64],
        std_dev: f64,
        seed: Option<u64>,
    ) -> Result<Self, EnvironmentError> {
        if means.is_empty() {
            return Err(EnvironmentError::InvalidArmCount(0));
        }

        let arms = means
            .iter()
            .map(|&mean| GaussianArm::new(mean, std_dev))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| EnvironmentError::Distribution(err.to_string()))?;

        Ok(Self {
            arms,
            rng: MaybeSeededRng::new(seed),
        })
    }

    pub fn arm_count(&self) -> usize {
        self.arms.len()
    }

    pub fn sample(&mut self, arm_id: usize) -> Result<f64, EnvironmentError> {
        let arm = self
            .arms
            .get(arm_id)
            .ok_or(EnvironmentError::ArmNotFound(arm_id))?;

        Ok(arm.sample(self.rng.get_rng()))
    }

    // Evaluation only: policies must never consult the true means.
    pub fn highest_mean(&self) -> f64 {
        self.arms
            .iter()
            .map(GaussianArm::mean)
            .fold(f64::NEG_INFINITY, f64::max)
    }

    pub fn lowest_mean(&self) -> f64 {
        self.arms
            .iter()
            .map(GaussianArm::mean)
            .fold(f64::INFINITY, f64::min)
    }
}
