//! Application state. Entities own view state and playback timers.

mod app;
mod contact;
mod explorer;
mod practice;
mod sequencer;
mod topic;

pub use app::AppModel;
pub use contact::ContactModel;
pub use explorer::PieceExplorer;
pub use practice::PracticeModel;
pub use sequencer::SequencerModel;
pub use topic::TopicModel;
