use std::thread;

use crate::config::Config;
use crate::db::connection::Database;
use crate::store::ComplaintStore;

/// Everything a request handler needs. Built once in `main` and shared
/// by reference with the server workers.
pub struct State {
    pub store: ComplaintStore<Database>,
    pub config: Config,
}

impl State {
    pub fn new(db: Database, config: Config) -> Self {
        Self {
            store: ComplaintStore::new(db),
            config,
        }
    }

    /// Cosmetic latency. Runs inline on the request thread, so call order is kept.
    pub fn simulate_delay(&self) {
        if !self.config.simulated_delay.is_zero() {
            thread::sleep(self.config.simulated_delay);
        }
    }
}
