mod config;
mod fields;
mod projects;
pub mod response;
mod router;

pub use router::{AppState, create_router};
