pub mod app;
pub mod config;
pub mod errors;
pub mod format;
pub mod handlers;
pub mod models;
pub mod period;
pub mod roster;
pub mod storage;
pub mod summary;
pub mod ui;
pub mod view;
pub mod state;

pub use app::router;
pub use config::Config;
pub use state::AppState;
pub use storage::load_snapshot;
