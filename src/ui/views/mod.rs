mod check;
mod contact;
mod demonstration;
mod landing;
mod layout;
mod learn;
mod pieces;
mod play;
mod practice_board;
mod shell;
mod topic;

pub use shell::AppView;
