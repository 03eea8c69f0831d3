use crate::config::types::CrawlConfig;
use crate::ConfigError;
use std::path::Path;

/// Parses crawl options from a YAML document.
pub fn from_yaml(content: &str) -> Result<CrawlConfig, ConfigError> {
    Ok(serde_yaml::from_str(content)?)
}

/// Parses crawl options from a JSON document.
pub fn from_json(content: &str) -> Result<CrawlConfig, ConfigError> {
    Ok(serde_json::from_str(content)?)
}

/// Loads and parses a configuration file from the given path.
///
/// The format is chosen by file extension: `.yml`/`.yaml` for YAML, `.json`
/// for JSON. Any other extension is an error.
///
/// # Arguments
///
/// * `path` - Path to the configuration document
///
/// # Returns
///
/// * `Ok(CrawlConfig)` - Successfully loaded configuration
/// * `Err(ConfigError)` - Failed to read or parse the document
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use linkwave::config::load_config;
///
/// let config = load_config(Path::new("crawl.yml")).unwrap();
/// println!("Max depth: {}", config.depth);
/// ```
pub fn load_config(path: &Path) -> Result<CrawlConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;

    match path.extension().and_then(|e| e.to_str()) {
        Some("yml") | Some("yaml") => from_yaml(&content),
        Some("json") => from_json(&content),
        _ => Err(ConfigError::UnknownFormat(path.display().to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    fn create_temp_config(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_yaml_config() {
        let file = create_temp_config(
            ".yml",
            r#"
depth: 3
same_host: true
contains_tags:
  - img
tags:
  - img
attr: src
"#,
        );
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.depth, 3);
        assert!(config.same_host);
        assert_eq!(config.contains_tags, vec!["img"]);
        assert_eq!(config.tags, vec!["img"]);
        assert_eq!(config.attr, "src");
    }

    #[test]
    fn test_load_json_config() {
        let file = create_temp_config(
            ".json",
            r#"{"depth": 2, "same_host": false, "contains_tags": ["video"]}"#,
        );
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.depth, 2);
        assert!(!config.same_host);
        assert_eq!(config.contains_tags, vec!["video"]);
    }

    #[test]
    fn test_missing_keys_default_to_zero_values() {
        let config = from_yaml("depth: 1").unwrap();

        assert_eq!(config.depth, 1);
        assert!(!config.same_host);
        assert!(config.contains_tags.is_empty());
        assert!(config.tags.is_empty());
        assert!(config.attr.is_empty());
        assert_eq!(config.max_concurrent, 0);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let config = from_yaml("depth: 4\nretries: 7\npoliteness: high").unwrap();
        assert_eq!(config.depth, 4);
    }

    #[test]
    fn test_malformed_yaml() {
        let result = from_yaml("depth: [not a number");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_with_invalid_path() {
        let result = load_config(Path::new("/nonexistent/crawl.yml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_config_with_unknown_extension() {
        let file = create_temp_config(".toml", "depth = 1");
        let result = load_config(file.path());
        assert!(matches!(result, Err(ConfigError::UnknownFormat(_))));
    }
}
