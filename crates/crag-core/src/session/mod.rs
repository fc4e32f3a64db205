pub mod config;
mod orchestrator;
pub mod providers;
mod state;
mod types;

pub use orchestrator::Session;
pub use state::SessionState;
pub use types::{ScrollEvent, SessionView, WindowEvent};
