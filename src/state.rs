use crate::counter::WidgetState;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone, Default)]
pub struct AppState {
    pub counter: Arc<Mutex<WidgetState>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}
