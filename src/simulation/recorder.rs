use tracing::debug;

// Results consumer: receives each agent's aggregate mean after every round.
pub trait Recorder {
    fn record(&mut self, round: u64, agent_id: usize, mean_reward: f64);
}

pub struct TraceRecorder;

impl Recorder for TraceRecorder {
    fn record(&mut self, round: u64, agent_id: usize, mean_reward: f64) {
        debug!(round, agent_id, mean_reward, "Recorded aggregate mean");
    }
}

// In-memory per-agent trajectories of the aggregate mean, one data point per
// round, in round order.
#[derive(Debug, Default)]
pub struct TrajectoryRecorder {
    trajectories: Vec<Vec<f64>>,
}

impl TrajectoryRecorder {
    pub fn new(agent_count: usize) -> Self {
        Self {
            trajectories: vec![Vec::new(); agent_count],
        }
    }

    pub fn trajectory(&self, agent_id: usize) -> Option<&[f64]> {
        self.trajectories.get(agent_id).map(Vec::as_slice)
    }
}

impl Recorder for TrajectoryRecorder {
    fn record(&mut self, _round: u64, agent_id: usize, mean_reward: f64) {
        if let Some(trajectory) = self.trajectories.get_mut(agent_id) {
            trajectory.push(mean_reward);
        }
    }
}

pub struct NullRecorder;

impl Recorder for NullRecorder {
    fn record(&mut self, _: u64, _: usize, _: f64) {}
}
