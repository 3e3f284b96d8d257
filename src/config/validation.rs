use crate::config::Config;
use crate::utils::error::{BoxResult, TocError};

/// Validate the configuration
pub fn validate_config(config: &Config) -> BoxResult<()> {
    validate_max_depth(config)?;
    Ok(())
}

fn validate_max_depth(config: &Config) -> BoxResult<()> {
    if config.max_depth == Some(0) {
        return Err(TocError::Config(
            "max_depth must be at least 1".to_string()
        ).into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_max_depth_is_rejected() {
        let config = Config { max_depth: Some(0), ..Config::default() };
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("max_depth"));
    }

    #[test]
    fn test_valid_config() {
        assert!(validate_config(&Config::default()).is_ok());
        assert!(validate_config(&Config { max_depth: Some(1), ..Config::default() }).is_ok());
    }
}
