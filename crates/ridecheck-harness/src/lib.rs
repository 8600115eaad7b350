pub mod report;
pub mod sequencer;
pub mod simulator;

pub use report::{PhaseResult, PhaseStatus, SuiteReport};
pub use sequencer::{SequencerConfig, TestSequencer};
pub use simulator::{ContinuousSimulator, SimulationSummary};
