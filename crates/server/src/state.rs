//! Shared application state

use std::sync::Arc;

use college_agent_agent::CollegeAgent;
use college_agent_config::Settings;

/// State shared across request handlers
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub agent: Arc<CollegeAgent>,
}

impl AppState {
    pub fn new(settings: Settings, agent: CollegeAgent) -> Self {
        Self {
            settings: Arc::new(settings),
            agent: Arc::new(agent),
        }
    }
}
