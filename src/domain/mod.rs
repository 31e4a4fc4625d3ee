//! Pure teaching domain. No GPUI dependencies.

pub mod board;
pub mod catalog;
pub mod chess;
pub mod contact;
pub mod curriculum;
pub mod demonstration;
pub mod moveset;
pub mod play;
pub mod practice;
pub mod sequencer;

pub use board::BoardSnapshot;
pub use chess::{BOARD_SIZE, Piece, PieceColor, PieceKind, Square};
pub use contact::{ContactForm, ContactSubmission, Field, FieldError};
pub use curriculum::{Page, Tier, TopicId};
pub use demonstration::{Demonstration, DemonstrationGroup};
pub use moveset::{HighlightSet, move_set};
pub use play::PlayMode;
pub use practice::PracticeBoard;
pub use sequencer::{Boundary, Effect, SequencerEvent, SequencerState};
