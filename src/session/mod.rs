pub mod inspect;
pub mod messages;
pub mod serve_mode;
pub mod setup;
pub mod tui_mode;

pub use inspect::run_inspect;
pub use serve_mode::run_serve_mode;
pub use setup::{SessionData, setup_session};
pub use tui_mode::run_tui_mode;
