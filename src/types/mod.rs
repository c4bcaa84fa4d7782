mod models;
pub mod slug;

pub use models::*;
