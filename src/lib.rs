pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod mail;
pub mod middleware;
pub mod router;
pub mod types;
pub mod ui;

pub use config::Config;
pub use error::DeskError;
pub use router::{DeskState, desk_router};
