use crate::error::Result;
use crate::models::WritePolicy;
use config::{Config as ConfigBuilder, Environment};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub const ENV_PREFIX: &str = "SCAFFOLD";

/// Main configuration structure, read from `SCAFFOLD_*` environment variables
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub project: ProjectConfig,
    pub generation: GenerationConfig,
    pub logging: LoggingConfig,
}

/// Where feature folders live
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Project root; the current directory when unset
    pub root: Option<PathBuf>,
    /// Features directory, relative to the root
    pub features_dir: PathBuf,
}

/// How files and sub-features are generated
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Create the five subdirectories under a new sub-feature before writing
    pub nested_subdirectories: bool,
    pub on_conflict: WritePolicy,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            root: None,
            features_dir: PathBuf::from("src").join("features"),
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            nested_subdirectories: true,
            on_conflict: WritePolicy::Overwrite,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: "compact".to_string(), // pretty, json, compact
        }
    }
}

impl Config {
    /// Load configuration from the process environment, falling back to defaults
    pub fn load() -> Result<Self> {
        Self::build(Environment::with_prefix(ENV_PREFIX))
    }

    /// Load configuration from an explicit variable map instead of the process environment
    pub fn from_env_map(vars: HashMap<String, String>) -> Result<Self> {
        Self::build(Environment::with_prefix(ENV_PREFIX).source(Some(vars)))
    }

    fn build(env: Environment) -> Result<Self> {
        let config = ConfigBuilder::builder()
            .add_source(
                env.prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize::<Config>()?)
    }

    /// Features directory under an explicit root, or under the configured one
    pub fn features_root(&self, root_override: Option<&Path>, cwd: &Path) -> PathBuf {
        let root = root_override
            .map(Path::to_path_buf)
            .or_else(|| self.project.root.clone())
            .unwrap_or_else(|| cwd.to_path_buf());
        root.join(&self.project.features_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::default();

        assert_eq!(config.project.root, None);
        assert_eq!(config.project.features_dir, PathBuf::from("src/features"));
        assert!(config.generation.nested_subdirectories);
        assert_eq!(config.generation.on_conflict, WritePolicy::Overwrite);
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.format, "compact");
    }

    #[test]
    fn test_empty_environment_uses_defaults() -> Result<()> {
        let config = Config::from_env_map(HashMap::new())?;

        assert_eq!(config.project.features_dir, PathBuf::from("src/features"));
        assert!(config.generation.nested_subdirectories);
        Ok(())
    }

    #[test]
    fn test_load_from_environment_variables() -> Result<()> {
        let config = Config::from_env_map(vars(&[
            ("SCAFFOLD_PROJECT__ROOT", "/work/app"),
            ("SCAFFOLD_PROJECT__FEATURES_DIR", "app/modules"),
            ("SCAFFOLD_GENERATION__NESTED_SUBDIRECTORIES", "false"),
            ("SCAFFOLD_GENERATION__ON_CONFLICT", "skip"),
            ("SCAFFOLD_LOGGING__LEVEL", "debug"),
        ]))?;

        assert_eq!(config.project.root, Some(PathBuf::from("/work/app")));
        assert_eq!(config.project.features_dir, PathBuf::from("app/modules"));
        assert!(!config.generation.nested_subdirectories);
        assert_eq!(config.generation.on_conflict, WritePolicy::Skip);
        assert_eq!(config.logging.level, "debug");
        // Untouched keys keep their defaults
        assert_eq!(config.logging.format, "compact");
        Ok(())
    }

    #[test]
    fn test_unrelated_variables_are_ignored() -> Result<()> {
        let config = Config::from_env_map(vars(&[("OTHER_PROJECT__ROOT", "/nope")]))?;
        assert_eq!(config.project.root, None);
        Ok(())
    }

    #[test]
    fn test_invalid_policy_is_rejected() {
        let result = Config::from_env_map(vars(&[("SCAFFOLD_GENERATION__ON_CONFLICT", "merge")]));
        assert!(matches!(result, Err(crate::ScaffoldError::Configuration(_))));
    }

    #[test]
    fn test_features_root_precedence() {
        let mut config = Config::default();
        let cwd = Path::new("/cwd");

        assert_eq!(config.features_root(None, cwd), PathBuf::from("/cwd/src/features"));

        config.project.root = Some(PathBuf::from("/configured"));
        assert_eq!(
            config.features_root(None, cwd),
            PathBuf::from("/configured/src/features")
        );
        assert_eq!(
            config.features_root(Some(Path::new("/flag")), cwd),
            PathBuf::from("/flag/src/features")
        );
    }
}
