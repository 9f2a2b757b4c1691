//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::Arc;

use crate::application::services::ConversionService;
use crate::config::Settings;

/// Container holding all application services.
///
/// Shared read-only between request handlers.
#[derive(Debug)]
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Temperature conversion
    pub conversion: ConversionService,
}

impl ServiceContainer {
    /// Create a new service container.
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: Arc::new(settings),
            conversion: ConversionService::new(),
        }
    }
}
