//! Page components for F-list.

mod home;
mod style_board;

pub use home::Home;
pub use style_board::Board;
