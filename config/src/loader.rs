use crate::{ConfigError, FolioConfig};
use regex::Regex;
use serde_yaml::{Mapping, Value};
use std::path::{Path, PathBuf};

pub struct ConfigLoader {
    explicit_file: Option<PathBuf>,
    search_paths: Vec<PathBuf>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        let mut search_paths = Vec::new();

        if let Some(home) = dirs::home_dir() {
            search_paths.push(home.join(".config/folio/folio.yaml"));
        }
        search_paths.push(PathBuf::from("./folio.yaml"));

        #[cfg(unix)]
        search_paths.insert(0, PathBuf::from("/etc/folio/folio.yaml"));

        Self {
            explicit_file: None,
            search_paths,
        }
    }

    #[must_use]
    pub fn with_file(mut self, path: &str) -> Self {
        self.explicit_file = Some(PathBuf::from(path));
        self
    }

    #[must_use]
    pub fn with_search_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.search_paths = paths;
        self
    }

    /// Read, merge and validate the configuration.
    ///
    /// A file given with [`with_file`](Self::with_file) wins over
    /// `FOLIO_CONFIG`; either one replaces the search paths.
    ///
    /// # Errors
    ///
    /// Returns an error if the selected file cannot be read, any file is not
    /// valid YAML, an environment override is malformed, or validation fails.
    pub fn load(&self) -> Result<FolioConfig, ConfigError> {
        let single_file = select_file(
            self.explicit_file.as_deref(),
            std::env::var_os("FOLIO_CONFIG").map(PathBuf::from),
        );
        let mut config = if let Some(path) = single_file {
            Self::parse_yaml(&Self::read(&path)?)?
        } else {
            let mut merged = Value::Mapping(Mapping::new());
            for path in &self.search_paths {
                if path.exists() {
                    if let Ok(content) = std::fs::read_to_string(path) {
                        tracing::debug!(path = %path.display(), "merging config file");
                        let overlay: Value = serde_yaml::from_str(&Self::expand_env_vars(&content))?;
                        merge_values(&mut merged, overlay);
                    }
                }
            }
            serde_yaml::from_value(merged)?
        };

        Self::apply_env_overrides(&mut config)?;
        config.validate()?;
        Ok(config)
    }

    fn read(path: &Path) -> Result<String, ConfigError> {
        std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })
    }

    fn parse_yaml(content: &str) -> Result<FolioConfig, ConfigError> {
        let expanded = Self::expand_env_vars(content);
        if expanded.trim().is_empty() {
            return Ok(FolioConfig::default());
        }
        Ok(serde_yaml::from_str(&expanded)?)
    }

    fn expand_env_vars(content: &str) -> String {
        let re = Regex::new(r"\$\{([^}]+)\}").expect("static pattern");
        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_default()
        })
        .to_string()
    }

    fn apply_env_overrides(config: &mut FolioConfig) -> Result<(), ConfigError> {
        if let Ok(user) = std::env::var("FOLIO_USER") {
            config.identity.user = user;
        }
        if let Ok(host) = std::env::var("FOLIO_HOST") {
            config.identity.host = host;
        }
        if let Ok(os) = std::env::var("FOLIO_OS") {
            config.identity.os = os;
        }
        if let Ok(prompt) = std::env::var("FOLIO_PROMPT") {
            config.shell.prompt = prompt;
        }
        if let Ok(max) = std::env::var("FOLIO_HISTORY_MAX") {
            config.shell.history.max_entries = max.trim().parse().map_err(|_| {
                ConfigError::InvalidValue(format!("FOLIO_HISTORY_MAX is not a number: {max}"))
            })?;
        }
        if let Ok(level) = std::env::var("FOLIO_LOG_LEVEL") {
            if let Ok(l) = serde_yaml::from_str(&level) {
                config.logging.level = l;
            }
        }
        Ok(())
    }
}

/// The one file to load instead of the search paths, if any.
fn select_file(explicit: Option<&Path>, from_env: Option<PathBuf>) -> Option<PathBuf> {
    explicit.map(Path::to_path_buf).or(from_env)
}

/// Overlay `overlay` onto `base`, recursing into mappings so a file only has
/// to mention the keys it changes.
fn merge_values(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Mapping(base), Value::Mapping(overlay)) => {
            for (key, value) in overlay {
                match base.get_mut(&key) {
                    Some(existing) => merge_values(existing, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (_, Value::Null) => {}
        (base, overlay) => *base = overlay,
    }
}

impl FolioConfig {
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when `shell.history.max_entries`
    /// is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.shell.history.max_entries == 0 {
            return Err(ConfigError::InvalidValue(
                "shell.history.max_entries must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn expand_env_vars_works() {
        std::env::set_var("FOLIO_TEST_VAR_123", "hello");
        let result = ConfigLoader::expand_env_vars("value: ${FOLIO_TEST_VAR_123}");
        assert_eq!(result, "value: hello");
        std::env::remove_var("FOLIO_TEST_VAR_123");
    }

    #[test]
    fn missing_env_var_becomes_empty() {
        let result = ConfigLoader::expand_env_vars("value: ${NONEXISTENT_VAR_XYZ}");
        assert_eq!(result, "value: ");
    }

    #[test]
    fn env_overrides_config() {
        std::env::set_var("FOLIO_HOST", "override-host");
        let mut config = FolioConfig::default();
        ConfigLoader::apply_env_overrides(&mut config).unwrap();
        assert_eq!(config.identity.host, "override-host");
        std::env::remove_var("FOLIO_HOST");
    }

    #[test]
    fn search_paths_merge_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let system = dir.path().join("system.yaml");
        let local = dir.path().join("local.yaml");

        let mut f = std::fs::File::create(&system).unwrap();
        writeln!(f, "identity:\n  user: alice\n  os: AliceOS\nshell:\n  color: false").unwrap();
        let mut f = std::fs::File::create(&local).unwrap();
        writeln!(f, "identity:\n  user: bob\nshell:\n  history:\n    max_entries: 5").unwrap();

        let config = ConfigLoader::new()
            .with_search_paths(vec![system, dir.path().join("absent.yaml"), local])
            .load()
            .unwrap();

        assert_eq!(config.identity.user, "bob");
        assert_eq!(config.identity.os, "AliceOS");
        assert!(!config.shell.color);
        assert_eq!(config.shell.history.max_entries, 5);
        assert_eq!(config.shell.prompt, crate::ShellConfig::default().prompt);
    }

    #[test]
    fn no_files_means_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ConfigLoader::new()
            .with_search_paths(vec![dir.path().join("missing.yaml")])
            .load()
            .unwrap();
        assert_eq!(config.identity.os, "Portfolio OS v1.0.0");
        assert_eq!(config.shell.history.max_entries, 1000);
    }

    #[test]
    fn explicit_file_must_exist() {
        let err = ConfigLoader::new()
            .with_file("/definitely/not/here/folio.yaml")
            .load()
            .unwrap_err();
        assert!(matches!(err, ConfigError::ReadFile { .. }));
    }

    #[test]
    fn explicit_file_wins_over_env() {
        let flag = Path::new("/from/flag.yaml");
        let env = PathBuf::from("/from/env.yaml");
        assert_eq!(
            select_file(Some(flag), Some(env.clone())).as_deref(),
            Some(flag)
        );
        assert_eq!(select_file(None, Some(env.clone())), Some(env));
        assert_eq!(select_file(None, None), None);
    }

    #[test]
    fn empty_file_means_defaults() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let config = ConfigLoader::new()
            .with_file(file.path().to_str().unwrap())
            .load()
            .unwrap();
        assert_eq!(config.identity.user, "rishmika");
    }

    #[test]
    fn zero_history_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "shell:\n  history:\n    max_entries: 0").unwrap();
        let err = ConfigLoader::new()
            .with_file(file.path().to_str().unwrap())
            .load()
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(_)));
    }
}
