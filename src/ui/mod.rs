//! Console front end: text rendering of the board and the prompt/response
//! game loop.

mod board_view;
mod session;

pub use board_view::render_board;
pub use session::Session;
