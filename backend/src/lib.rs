pub mod catchers;
pub mod config;
pub mod cors;
pub mod error;
pub mod processor;
pub mod queries;
pub mod routes;
pub mod store;
pub mod utils;

pub use shared::{models::*, error::*, viewer::*};

#[cfg(test)]
mod tests;
