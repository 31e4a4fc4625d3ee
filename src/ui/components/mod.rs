mod board;
mod controls;
mod piece;
mod square;

pub use board::{render_board_grid, render_diagram};
pub use controls::render_step_controls;
pub use piece::render_piece;
pub use square::{SquareMarks, render_square};
