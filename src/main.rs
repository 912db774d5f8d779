use crate::availability::AvailabilityManager;
use crate::booking::BookingGateway;
use crate::configuration::Configuration;
use crate::configuration_handler::ConfigurationHandler;
use crate::database_store::DatabaseStore;
use crate::http::start_server;
use crate::local_store::LocalStore;
use crate::store::SlotStore;
use tracing_subscriber::EnvFilter;

mod availability;
mod booking;
mod configuration;
mod configuration_handler;
mod database_store;
mod error;
mod http;
mod local_store;
mod schema;
mod store;
#[cfg(test)]
mod testutils;
mod types;

#[derive(Clone)]
pub struct AppState<T: SlotStore, C: Configuration> {
    pub availability: AvailabilityManager<T>,
    pub booking: BookingGateway<T>,
    pub config: C,
}

impl<T: SlotStore, C: Configuration> AppState<T, C> {
    pub fn new(store: T, config: C) -> Self {
        let availability = AvailabilityManager::new(store.clone(), config.working_hours());
        let booking = BookingGateway::new(store);
        Self {
            availability,
            booking,
            config,
        }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ConfigurationHandler::from_env();
    match config.database_url() {
        Some(url) => match DatabaseStore::new(&url) {
            Ok(store) => start_server(AppState::new(store, config)).await,
            Err(err) => {
                tracing::error!(%err, "could not connect to the database");
                std::process::exit(1);
            }
        },
        None => {
            tracing::info!("no DATABASE_URL set, keeping slots in memory");
            start_server(AppState::new(LocalStore::default(), config)).await;
        }
    }
}
