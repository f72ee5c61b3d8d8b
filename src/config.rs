use std::path::PathBuf;
use clap::Parser;

#[derive(Parser, Clone, Debug)]
pub struct Config {
    #[clap(env, long)]
    pub environment: String,

    /// Postgres connection string for the review database.
    #[clap(env, long)]
    pub database_url: Option<String>,

    /// JSON file of restaurants to serve instead of Postgres.
    #[clap(env, long)]
    pub restaurants_fixture: Option<PathBuf>,

    /// Comma separated CORS origins.
    #[clap(env, long, default_value = "http://localhost:3000")]
    pub origin_urls: String,

    #[clap(env, long, default_value = "127.0.0.1:8080")]
    pub bind_address: String,

    #[clap(env, long)]
    pub pool_max_size: Option<u32>,
}

impl Config {
    pub fn pool_size(&self) -> u32 {
        self.pool_max_size
            .unwrap_or_else(|| (num_cpus::get() * 2) as u32)
    }
}
