use crate::configuration::Configuration;
use clap::Parser;
use std::env;
use std::ops::RangeInclusive;

#[derive(Parser, Debug, Clone)]
#[command(name = "slot_booking", about = "Storefront appointment slot service")]
pub struct Cli {
    #[arg(long, default_value_t = 3000)]
    pub port: u16,

    /// First hour of the day an admin may mark bookable.
    #[arg(long, default_value_t = 9)]
    pub open_hour: u32,

    /// Last bookable hour, inclusive.
    #[arg(long, default_value_t = 17)]
    pub close_hour: u32,
}

#[derive(Clone)]
pub struct ConfigurationHandler {
    cli: Cli,
    admin_password: String,
    database_url: Option<String>,
}

impl ConfigurationHandler {
    /// Reads CLI flags plus `ADMIN_PASSWORD` and `DATABASE_URL` from
    /// the environment (a `.env` file is honored when present).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let cli = Cli::parse();
        let admin_password = env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "123".into());
        if admin_password == "123" {
            tracing::warn!("ADMIN_PASSWORD not set, using the default password");
        }
        let database_url = env::var("DATABASE_URL").ok();
        Self {
            cli,
            admin_password,
            database_url,
        }
    }
}

impl Configuration for ConfigurationHandler {
    fn admin_password(&self) -> String {
        self.admin_password.clone()
    }

    fn port(&self) -> u16 {
        self.cli.port
    }

    fn database_url(&self) -> Option<String> {
        self.database_url.clone()
    }

    fn working_hours(&self) -> RangeInclusive<u32> {
        self.cli.open_hour..=self.cli.close_hour
    }
}
