use crate::error::{Result, ScoreError};
use crate::types::config::ScoringConfig;
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "pagescore.toml";

/// Loads `pagescore.toml` from the given directory. A missing file is not
/// an error; callers fall back to the built-in defaults.
pub fn load_config(dir: &Path) -> Result<Option<ScoringConfig>> {
    let path = dir.join(DEFAULT_CONFIG_FILE);
    if !path.exists() {
        return Ok(None);
    }
    read_config(&path).map(Some)
}

/// Loads an explicitly named config file. Unlike [`load_config`], a missing
/// file here is an error: the caller asked for this path.
pub fn load_config_file(path: &Path) -> Result<ScoringConfig> {
    if !path.exists() {
        return Err(ScoreError::ConfigNotFound(path.display().to_string()));
    }
    read_config(path)
}

fn read_config(path: &Path) -> Result<ScoringConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: ScoringConfig = toml::from_str(&content)
        .map_err(|e| ScoreError::ConfigParse(format!("{}: {}", path.display(), e)))?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn load_config_returns_none_when_file_missing() {
        let dir = TempDir::new().expect("temp dir should be created");
        let cfg = load_config(dir.path()).expect("load should not fail");
        assert!(cfg.is_none());
    }

    #[test]
    fn load_config_parses_and_validates() {
        let dir = TempDir::new().expect("temp dir should be created");
        fs::write(
            dir.path().join(DEFAULT_CONFIG_FILE),
            r#"
[weights]
technical = 0

[content]
min_word_count = 200
"#,
        )
        .expect("config should write");

        let cfg = load_config(dir.path())
            .expect("load should succeed")
            .expect("config should exist");
        assert_eq!(cfg.weights.technical, 0.0);
        assert_eq!(cfg.content.min_word_count, 200);
        assert_eq!(cfg.weights.title, 20.0);
    }

    #[test]
    fn load_config_rejects_invalid_thresholds() {
        let dir = TempDir::new().expect("temp dir should be created");
        fs::write(
            dir.path().join(DEFAULT_CONFIG_FILE),
            r#"
[keywords]
min_density = 2.0
optimal_density = 1.0
"#,
        )
        .expect("config should write");

        let err = load_config(dir.path()).expect_err("invalid config should fail");
        assert!(matches!(err, ScoreError::ConfigInvalid(_)));
    }

    #[test]
    fn explicit_config_path_must_exist() {
        let dir = TempDir::new().expect("temp dir should be created");
        let err = load_config_file(&dir.path().join("absent.toml"))
            .expect_err("missing explicit config should fail");
        assert!(matches!(err, ScoreError::ConfigNotFound(_)));
    }
}
