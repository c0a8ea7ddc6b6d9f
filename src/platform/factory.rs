//! Platform service construction

use crate::auth::GitHubAuthConfig;
use crate::error::Result;
use crate::platform::{GitHubService, PlatformService};
use crate::types::{Platform, PlatformConfig};
use tracing::debug;

/// Create the platform service for a repository
pub fn create_platform_service(
    config: &PlatformConfig,
    auth: &GitHubAuthConfig,
) -> Result<Box<dyn PlatformService>> {
    match config.platform {
        Platform::GitHub => {
            debug!(
                owner = %config.owner,
                repo = %config.repo,
                host = config.host.as_deref().unwrap_or("github.com"),
                source = ?auth.source,
                "creating GitHub service"
            );
            let service = GitHubService::new(
                &auth.token,
                config.owner.clone(),
                config.repo.clone(),
                config.host.clone(),
            )?;
            Ok(Box::new(service))
        }
    }
}
