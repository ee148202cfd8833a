//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::config::schema::GatewayConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", format_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<GatewayConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: GatewayConfig = toml::from_str(&content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_valid_file() {
        let mut file = tempfile_path("valid");
        writeln!(file.1, "[listener]\nbind_address = \"127.0.0.1:9000\"").unwrap();

        let config = load_config(&file.0).unwrap();
        assert_eq!(config.listener.bind_address, "127.0.0.1:9000");
        std::fs::remove_file(&file.0).ok();
    }

    #[test]
    fn test_load_rejects_semantic_errors() {
        let mut file = tempfile_path("invalid");
        writeln!(file.1, "[timeouts]\nrequest_secs = 0").unwrap();

        let err = load_config(&file.0).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        std::fs::remove_file(&file.0).ok();
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = load_config(Path::new("/nonexistent/gateway.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    fn tempfile_path(tag: &str) -> (std::path::PathBuf, fs::File) {
        let path = std::env::temp_dir().join(format!(
            "trace-gateway-config-{tag}-{}.toml",
            std::process::id()
        ));
        let file = fs::File::create(&path).unwrap();
        (path, file)
    }
}
