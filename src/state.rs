use crate::bursts::HoverTarget;
use crate::config::Config;
use crate::source::BurstListSource;
use std::{path::PathBuf, sync::Arc};

#[derive(Clone)]
pub struct AppState {
    pub web_root: PathBuf,
    pub source: Arc<BurstListSource>,
    pub hover: Arc<HoverTarget>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            web_root: config.web_root.clone(),
            source: Arc::new(config.burst_source()),
            hover: Arc::new(HoverTarget::default()),
        }
    }
}
