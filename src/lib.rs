pub mod app;
pub mod archive;
pub mod banner;
pub mod bursts;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod image;
pub mod models;
pub mod page;
pub mod source;
pub mod state;
pub mod static_files;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use state::AppState;
