pub mod app;
pub mod completion;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod metrics;
pub mod models;
pub mod prompt;
pub mod state;
pub mod ui;

pub use app::router;
pub use completion::{CompletionCapability, CompletionError, OpenAiCompletion};
pub use config::Config;
pub use state::AppState;
