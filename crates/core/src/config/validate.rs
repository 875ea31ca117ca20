use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Kitchen has at least one station and one step
/// - Orchestrator menu is non-empty and the cooking range is sane
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.kitchen.stations == 0 {
        return Err(ConfigError::ValidationError(
            "kitchen.stations must be at least 1".to_string(),
        ));
    }

    if config.kitchen.steps == 0 {
        return Err(ConfigError::ValidationError(
            "kitchen.steps must be at least 1".to_string(),
        ));
    }

    if config.orchestrator.menu.is_empty() {
        return Err(ConfigError::ValidationError(
            "orchestrator.menu cannot be empty".to_string(),
        ));
    }

    if config.orchestrator.min_cooking_ms == 0 {
        return Err(ConfigError::ValidationError(
            "orchestrator.min_cooking_ms must be positive".to_string(),
        ));
    }

    if config.orchestrator.min_cooking_ms > config.orchestrator.max_cooking_ms {
        return Err(ConfigError::ValidationError(
            "orchestrator.min_cooking_ms cannot exceed max_cooking_ms".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_default_config() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_stations() {
        let mut config = Config::default();
        config.kitchen.stations = 0;
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("stations"));
    }

    #[test]
    fn test_validate_rejects_zero_steps() {
        let mut config = Config::default();
        config.kitchen.steps = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_rejects_empty_menu() {
        let mut config = Config::default();
        config.orchestrator.menu.clear();
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("menu"));
    }

    #[test]
    fn test_validate_rejects_inverted_cooking_range() {
        let mut config = Config::default();
        config.orchestrator.min_cooking_ms = 500;
        config.orchestrator.max_cooking_ms = 100;
        assert!(validate_config(&config).is_err());
    }
}
