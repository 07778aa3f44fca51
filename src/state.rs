use crate::config::Config;
use crate::store::PatientStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: PatientStore,
}

impl AppState {
    pub fn from_config(config: &Config) -> Self {
        Self {
            store: PatientStore::from_config(config),
        }
    }
}
