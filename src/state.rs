use std::sync::Arc;

use crate::config::Config;
use crate::context::{RenderContext, mock};
use crate::sanitize::{AllowList, Sanitizer};

pub type DynSanitizer = Arc<dyn Sanitizer + Send + Sync>;

#[derive(Clone)]
pub struct AppState {
    pub sanitizer: DynSanitizer,
    pub preview: Arc<RenderContext>,
}

impl AppState {
    pub fn new(sanitizer: DynSanitizer, preview: RenderContext) -> Self {
        Self {
            sanitizer,
            preview: Arc::new(preview),
        }
    }

    pub fn init(config: &Config) -> crate::Result<Self> {
        let preview = match &config.preview_context {
            Some(path) => mock::load(path)?,
            None => mock::login(&config.preview_base_url),
        };

        Ok(Self::new(Arc::new(AllowList::default()), preview))
    }
}
