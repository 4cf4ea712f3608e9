pub mod errors;
mod experiment;
mod recorder;

pub use experiment::{Experiment, ExperimentReport};
pub use recorder::{NullRecorder, Recorder, TraceRecorder, TrajectoryRecorder};
