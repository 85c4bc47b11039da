//! Terminal-condition rules: line wins and board-full draws.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::completes_line;
