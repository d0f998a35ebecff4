use crate::configuration::Configuration;
use clap::Parser;
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Clone, Parser)]
#[command(version, about = "Smart parking lot slot manager")]
pub struct ConfigurationHandler {
    /// Title shown on the web page
    #[arg(
        long,
        env = "PARKING_WEBSITE_TITLE",
        default_value = "Smart Parking Lot System"
    )]
    website_title: String,

    /// HTML page served at `/`
    #[arg(long, env = "PARKING_FRONTEND_PATH", default_value = "frontend/index.html")]
    frontend_path: PathBuf,

    #[arg(short, long, env = "PARKING_PORT", default_value_t = 3000)]
    port: u16,

    /// Start with four example slots instead of an empty lot
    #[arg(long, env = "PARKING_EXAMPLE_SLOTS")]
    example_slots: bool,
}

impl ConfigurationHandler {
    /// Reads `.env` (if present) and then the command line.
    pub fn parse_arguments() -> Self {
        if let Err(err) = dotenvy::dotenv() {
            debug!(%err, "No .env file loaded");
        }
        Self::parse()
    }
}

impl Configuration for ConfigurationHandler {
    fn website_title(&self) -> String {
        self.website_title.clone()
    }

    fn frontend_path(&self) -> PathBuf {
        self.frontend_path.clone()
    }

    fn port(&self) -> String {
        self.port.to_string()
    }

    fn example_slots(&self) -> bool {
        self.example_slots
    }
}
