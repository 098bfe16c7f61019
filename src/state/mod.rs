pub mod assert;

use anyhow::anyhow;
use chrono::{Local, NaiveDate};
use std::sync::{Mutex, MutexGuard, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::{
    config::Settings,
    models::catalog::Catalog,
    schedule::{seed, store::AppointmentStore},
};

type Clock = Box<dyn Fn() -> NaiveDate + Send + Sync>;

pub struct AppState {
    pub settings: Settings,
    pub catalog: RwLock<Catalog>,
    pub store: Mutex<AppointmentStore>,
    clock: Clock,
}

impl AppState {
    pub fn new(settings: Settings, catalog: Catalog, store: AppointmentStore) -> Self {
        Self {
            settings,
            catalog: RwLock::new(catalog),
            store: Mutex::new(store),
            clock: Box::new(|| Local::now().date_naive()),
        }
    }

    /// Replaces the wall clock, e.g. to pin "today" in tests.
    pub fn with_clock<F>(mut self, clock: F) -> Self
    where
        F: Fn() -> NaiveDate + Send + Sync + 'static,
    {
        self.clock = Box::new(clock);
        self
    }

    pub fn today(&self) -> NaiveDate {
        (self.clock)()
    }

    /// State with the demo catalog and, if enabled, appointments around `today`.
    pub fn with_demo_data(settings: Settings, today: NaiveDate) -> anyhow::Result<Self> {
        let catalog = seed::demo_catalog()?;
        let store = if settings.seed_demo_data {
            AppointmentStore::from_appointments(seed::seed_demo_appointments(today))
        } else {
            AppointmentStore::new()
        };
        Ok(Self::new(settings, catalog, store))
    }
}

pub fn lock_store(state: &AppState) -> anyhow::Result<MutexGuard<'_, AppointmentStore>> {
    state
        .store
        .lock()
        .map_err(|_| anyhow!("Appointment store is unavailable"))
}

pub fn read_catalog(state: &AppState) -> anyhow::Result<RwLockReadGuard<'_, Catalog>> {
    state
        .catalog
        .read()
        .map_err(|_| anyhow!("Catalog is unavailable"))
}

pub fn write_catalog(state: &AppState) -> anyhow::Result<RwLockWriteGuard<'_, Catalog>> {
    state
        .catalog
        .write()
        .map_err(|_| anyhow!("Catalog is unavailable"))
}
