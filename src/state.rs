use crate::completion::CompletionCapability;
use std::{sync::Arc, time::Duration};

#[derive(Clone)]
pub struct AppState {
    pub completion: Arc<dyn CompletionCapability>,
    pub timeout: Duration,
}

impl AppState {
    pub fn new(completion: impl CompletionCapability + 'static, timeout: Duration) -> Self {
        Self {
            completion: Arc::new(completion),
            timeout,
        }
    }
}
