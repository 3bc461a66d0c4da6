// src/lib.rs
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod poll;
pub mod routes;
pub mod templates;

pub use error::{Error, Result};
