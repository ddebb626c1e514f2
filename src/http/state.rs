use std::sync::Arc;

use crate::{config::Settings, services::DataService};

#[derive(Clone, Debug)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub data_service: Arc<DataService>,
}

impl AppState {
    pub fn new(settings: Settings, data_service: DataService) -> Self {
        Self {
            settings: Arc::new(settings),
            data_service: Arc::new(data_service),
        }
    }
}
