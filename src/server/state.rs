use crate::core::AstroSource;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    source: Arc<dyn AstroSource>,
}

impl AppState {
    pub fn new(source: Arc<dyn AstroSource>) -> Self {
        Self { source }
    }

    pub fn from_source<S: AstroSource + 'static>(source: S) -> Self {
        Self::new(Arc::new(source))
    }

    pub fn source(&self) -> &dyn AstroSource {
        self.source.as_ref()
    }
}
