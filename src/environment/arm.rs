use rand::Rng;
use rand_distr::{Distribution, Normal, NormalError};

// One arm's reward process: a fixed true mean, never revealed to the policy.
#[derive(Clone, Debug)]
pub(super) struct GaussianArm {
    mean: f64,
    distribution: Normal<f64>,
}

impl GaussianArm {
    pub(super) fn new(mean: f64, std_dev: f64) -> Result<Self, NormalError> {
        let distribution = Normal::new(mean, std_dev)?;

        Ok(Self { mean, distribution })
    }

    pub(super) fn mean(&self) -> f64 {
        self.mean
    }

    pub(super) fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.distribution.sample(rng)
    }
}
