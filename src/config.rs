// src/config.rs
use std::env;
use std::net::SocketAddr;

use crate::error::{Error, Result};

const DEFAULT_DATABASE_URL: &str = "sqlite://polls.db?mode=rwc";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3030;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
}

impl Config {
    /// Load configuration from the environment, reading `.env` first if present.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let port = match env::var("PORT") {
            Ok(port) => port
                .parse::<u16>()
                .map_err(|_| Error::Config(format!("PORT must be a valid number, got {port:?}")))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port,
        })
    }

    pub fn bind_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| Error::Config(format!("cannot bind to {}:{}", self.host, self.port)))
    }
}
