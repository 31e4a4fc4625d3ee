pub mod actions;
pub mod board_layout;
pub mod components;
pub mod theme;
pub mod views;
