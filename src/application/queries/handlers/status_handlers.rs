//! Status Query Handler

use std::sync::Arc;

use crate::application::credentials::ProviderCredentials;
use crate::application::queries::GetServiceStatus;

/// 服务状态
#[derive(Debug, Clone)]
pub struct ServiceStatus {
    pub groq_configured: bool,
    pub fal_configured: bool,
    pub version: &'static str,
    pub rust_version: &'static str,
}

/// GetServiceStatus Handler
pub struct GetServiceStatusHandler {
    credentials: Arc<ProviderCredentials>,
}

impl GetServiceStatusHandler {
    pub fn new(credentials: Arc<ProviderCredentials>) -> Self {
        Self { credentials }
    }

    pub fn handle(&self, _query: GetServiceStatus) -> ServiceStatus {
        ServiceStatus {
            groq_configured: self.credentials.groq_api_key().is_some(),
            fal_configured: self.credentials.fal_api_key().is_some(),
            version: env!("CARGO_PKG_VERSION"),
            rust_version: env!("CARGO_PKG_RUST_VERSION"),
        }
    }
}
