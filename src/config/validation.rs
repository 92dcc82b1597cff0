use crate::config::types::{BackupConfig, Config, GameConfig, SiteConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_site_config(&config.site)?;
    validate_backup_config(&config.backup)?;
    validate_game_config(&config.game)?;
    Ok(())
}

/// Validates the remote site settings
fn validate_site_config(config: &SiteConfig) -> Result<(), ConfigError> {
    let url = Url::parse(&config.base_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base-url: {}", e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "base-url '{}' must use http or https",
            config.base_url
        )));
    }

    // Paths are joined as absolute, so anything past the host would be dropped
    if url.path() != "/" || url.query().is_some() || url.fragment().is_some() {
        return Err(ConfigError::InvalidUrl(format!(
            "base-url '{}' must be the site root, without a path",
            config.base_url
        )));
    }

    if !config.first_page.starts_with('/') {
        return Err(ConfigError::Validation(format!(
            "first-page must be a site-relative path starting with '/', got '{}'",
            config.first_page
        )));
    }

    if config.timeout_secs < 1 {
        return Err(ConfigError::Validation(
            "timeout-secs must be >= 1".to_string(),
        ));
    }

    if config.max_retries > 10 {
        return Err(ConfigError::Validation(format!(
            "max-retries must be <= 10, got {}",
            config.max_retries
        )));
    }

    if config.user_agent.is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    Ok(())
}

fn validate_backup_config(config: &BackupConfig) -> Result<(), ConfigError> {
    if config.path.as_os_str().is_empty() {
        return Err(ConfigError::Validation(
            "backup path cannot be empty".to_string(),
        ));
    }

    Ok(())
}

fn validate_game_config(config: &GameConfig) -> Result<(), ConfigError> {
    if config.guesses < 1 || config.guesses > 10 {
        return Err(ConfigError::Validation(format!(
            "guesses must be between 1 and 10, got {}",
            config.guesses
        )));
    }

    Ok(())
}
