use rand::{rngs::SmallRng, SeedableRng};

// Every stochastic component owns one of these, so a seeded run is
// reproducible without any process-wide random state.
#[derive(Debug)]
pub struct MaybeSeededRng {
    rng: SmallRng,
}

impl MaybeSeededRng {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };

        Self { rng }
    }

    pub fn get_rng(&mut self) -> &mut SmallRng {
        &mut self.rng
    }
}
