use serde::Serialize;

// Incremental sample mean: O(1) memory regardless of how many values are
// observed, equal to the exact arithmetic average up to floating-point
// rounding.
#[derive(Clone, Debug, Default, Serialize)]
pub struct RunningEstimate {
    count: u64,
    mean: f64,
}

impl RunningEstimate {
    pub fn observe(&mut self, value: f64) {
        self.count += 1;
        self.mean += (value - self.mean) / self.count as f64;
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let estimate = RunningEstimate::default();
        assert_eq!(estimate.count(), 0);
        assert_eq!(estimate.mean(), 0.0);
    }

    #[test]
    fn single_observation_is_the_mean() {
        let mut estimate = RunningEstimate::default();
        estimate.observe(3.5);
        assert_eq!(estimate.count(), 1);
        assert_eq!(estimate.mean(), 3.5);
    }

    #[test]
    fn matches_arithmetic_average() {
        let values = [2.0, -1.5, 7.25, 0.0, 3.125, -10.0, 42.0];
        let mut estimate = RunningEstimate::default();
        for &value in &values {
            estimate.observe(value);
        }

        let exact = values.iter().sum::<f64>() / values.len() as f64;
        assert_eq!(estimate.count(), values.len() as u64);
        assert!((estimate.mean() - exact).abs() < 1e-9);
    }

    #[test]
    fn matches_arithmetic_average_on_long_streams() {
        let mut estimate = RunningEstimate::default();
        let mut sum = 0.0;
        for i in 0..10_000 {
            let value = (i as f64).sin() * 100.0;
            sum += value;
            estimate.observe(value);
        }

        assert_eq!(estimate.count(), 10_000);
        assert!((estimate.mean() - sum / 10_000.0).abs() < 1e-9);
    }
}
