use std::sync::Arc;

use ferrischef_core::application::ChefService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: ChefService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: ChefService) -> Self {
        Self { args, service }
    }
}
