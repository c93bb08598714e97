pub mod app;
pub mod counter;
pub mod errors;
pub mod handlers;
pub mod input;
pub mod models;
pub mod state;
pub mod ui;

pub use app::router;
pub use state::AppState;
