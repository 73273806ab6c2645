use std::sync::Arc;

use healthhub_core::application::HealthHubService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: HealthHubService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: HealthHubService) -> Self {
        Self { args, service }
    }
}
