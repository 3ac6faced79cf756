pub mod app_state;
pub mod config;
pub mod db;
pub mod dtos;
pub mod error;
pub mod models;
pub mod router;
pub mod service;
pub mod utils;

pub use app_state::AppState;
pub use config::Config;
