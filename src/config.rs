use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::catalog::{Phase, Project};

/// Name of the per-directory override file.
pub const PROJECT_CONFIG_FILE: &str = ".fake-to-real";

/// Status of config file loading
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigLoadStatus {
    /// Config loaded successfully from existing file
    Loaded,
    /// Created default config file (first run)
    Created,
    /// Error occurred during loading, using defaults.
    Error(String),
}

/// Initial selector values
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    pub phase: String,
    pub project: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            phase: Phase::default().id().to_string(),
            project: Project::default().id().to_string(),
        }
    }
}

/// Where saved plans go
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub directory: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: ".".to_string(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Expand `~` to home directory in a path string
    pub fn expand_tilde(path: &str) -> PathBuf {
        if let Some(stripped) = path.strip_prefix("~/")
            && let Some(home) = dirs::home_dir()
        {
            return home.join(stripped);
        }
        PathBuf::from(path)
    }

    /// Phase selected at startup. Unknown ids fall back to the first phase.
    pub fn initial_phase(&self) -> Phase {
        Phase::from_id(&self.defaults.phase).unwrap_or_else(|| {
            debug!(phase = %self.defaults.phase, "unknown_default_phase");
            Phase::default()
        })
    }

    /// Project selected at startup. Unknown ids fall back to the first project.
    pub fn initial_project(&self) -> Project {
        Project::from_id(&self.defaults.project).unwrap_or_else(|| {
            debug!(project = %self.defaults.project, "unknown_default_project");
            Project::default()
        })
    }

    /// Get the expanded plan output directory
    pub fn output_directory(&self) -> PathBuf {
        Self::expand_tilde(&self.output.directory)
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct PartialDefaultsConfig {
    pub phase: Option<String>,
    pub project: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct PartialOutputConfig {
    pub directory: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct PartialLoggingConfig {
    pub level: Option<String>,
}

/// Project-specific configuration where every field is optional.
/// Parsed from `.fake-to-real` files. Fields that are `None` inherit from the global config.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct PartialConfig {
    pub defaults: PartialDefaultsConfig,
    pub output: PartialOutputConfig,
    pub logging: PartialLoggingConfig,
}

/// Merge a global config with a project-level partial config.
/// Project values override global values where present.
pub fn merge_config(global: &Config, project: &PartialConfig) -> Config {
    let pick = |value: &Option<String>, fallback: &String| {
        value.clone().unwrap_or_else(|| fallback.clone())
    };

    Config {
        defaults: DefaultsConfig {
            phase: pick(&project.defaults.phase, &global.defaults.phase),
            project: pick(&project.defaults.project, &global.defaults.project),
        },
        output: OutputConfig {
            directory: pick(&project.output.directory, &global.output.directory),
        },
        logging: LoggingConfig {
            level: pick(&project.logging.level, &global.logging.level),
        },
    }
}

/// Loaded configuration with metadata
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub config_path: PathBuf,
    pub project_config_path: Option<PathBuf>,
    pub status: ConfigLoadStatus,
}

/// Get the platform-appropriate config directory
fn get_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("com", "fake-to-real", "fake-to-real")
        .map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the full path to the config file
pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join("config.toml"))
}

/// Get the project config path if `dir` contains a `.fake-to-real` file.
pub fn find_project_config(dir: &Path) -> Option<PathBuf> {
    let path = dir.join(PROJECT_CONFIG_FILE);
    if path.exists() { Some(path) } else { None }
}

fn load_project_config(path: &Path) -> Result<PartialConfig, String> {
    let contents = fs::read_to_string(path).map_err(|e| {
        warn!(path = ?path, error = %e, "project_config_read_failed");
        format!("Failed to read {}: {}", PROJECT_CONFIG_FILE, e)
    })?;

    toml::from_str::<PartialConfig>(&contents).map_err(|e| {
        warn!(path = ?path, error = %e, "project_config_parse_failed");
        format!("Invalid {}: {}", PROJECT_CONFIG_FILE, e)
    })
}

/// Load configuration from file, project override, environment, and defaults.
///
/// `override_path` replaces the platform config location (the `--config` flag).
pub fn load_config(override_path: Option<&Path>) -> LoadedConfig {
    let config_path = match override_path.map(Path::to_path_buf).or_else(get_config_path) {
        Some(path) => path,
        None => {
            warn!("config_dir_unavailable");
            return LoadedConfig {
                config: apply_env_overrides(Config::default(), |key| env::var(key).ok()),
                config_path: PathBuf::from("config.toml"),
                project_config_path: None,
                status: ConfigLoadStatus::Error("Could not determine config directory".to_string()),
            };
        }
    };

    let project_config_path = env::current_dir()
        .ok()
        .and_then(|dir| find_project_config(&dir));

    let mut loaded = load_config_at(&config_path, project_config_path);
    loaded.config = apply_env_overrides(loaded.config, |key| env::var(key).ok());
    loaded
}

/// Load the global file at `config_path` and merge the optional project file over it.
pub fn load_config_at(config_path: &Path, project_config_path: Option<PathBuf>) -> LoadedConfig {
    debug!(path = ?config_path, "config_path");

    let (mut config, status) = load_or_create_config(config_path);

    if let Some(ref project_path) = project_config_path {
        match load_project_config(project_path) {
            Ok(partial) => {
                config = merge_config(&config, &partial);
                info!(path = ?project_path, "project_config_loaded");
            }
            Err(e) => {
                warn!(path = ?project_path, error = %e, "project_config_error");
            }
        }
    }

    LoadedConfig {
        config,
        config_path: config_path.to_path_buf(),
        project_config_path,
        status,
    }
}

/// Load config from file, or create default if not exists
fn load_or_create_config(config_path: &Path) -> (Config, ConfigLoadStatus) {
    match fs::read_to_string(config_path) {
        Ok(contents) => match toml::from_str::<Config>(&contents) {
            Ok(config) => {
                info!(path = ?config_path, "config_file_loaded");
                (config, ConfigLoadStatus::Loaded)
            }
            Err(e) => {
                warn!(path = ?config_path, error = %e, "config_malformed");
                (
                    Config::default(),
                    ConfigLoadStatus::Error(format!("Malformed TOML: {}", e)),
                )
            }
        },
        Err(e) if e.kind() == io::ErrorKind::NotFound => create_default_config(config_path),
        Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
            warn!(path = ?config_path, "config_permission_denied");
            (
                Config::default(),
                ConfigLoadStatus::Error("Permission denied reading config".to_string()),
            )
        }
        Err(e) => {
            warn!(path = ?config_path, error = %e, "config_read_failed");
            (
                Config::default(),
                ConfigLoadStatus::Error(format!("Read error: {}", e)),
            )
        }
    }
}

/// Create the default config file
fn create_default_config(config_path: &Path) -> (Config, ConfigLoadStatus) {
    let config = Config::default();

    if let Some(parent) = config_path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!(path = ?parent, error = %e, "config_dir_create_failed");
        return (
            config,
            ConfigLoadStatus::Error(format!("Could not create config directory: {}", e)),
        );
    }

    let toml_content = match toml::to_string_pretty(&config) {
        Ok(s) => s,
        Err(e) => {
            warn!(error = %e, "config_serialize_failed");
            return (
                config,
                ConfigLoadStatus::Error(format!("Serialization error: {}", e)),
            );
        }
    };

    match fs::write(config_path, &toml_content) {
        Ok(()) => {
            info!(path = ?config_path, "config_created");
            (config, ConfigLoadStatus::Created)
        }
        Err(e) => {
            warn!(path = ?config_path, error = %e, "config_write_failed");
            (
                config,
                ConfigLoadStatus::Error(format!("Write error: {}", e)),
            )
        }
    }
}

/// Apply `FTR_*` overrides looked up through `var`.
fn apply_env_overrides(mut config: Config, var: impl Fn(&str) -> Option<String>) -> Config {
    if let Some(phase) = var("FTR_PHASE") {
        debug!("Overriding defaults.phase from FTR_PHASE");
        config.defaults.phase = phase;
    }

    if let Some(project) = var("FTR_PROJECT") {
        debug!("Overriding defaults.project from FTR_PROJECT");
        config.defaults.project = project;
    }

    if let Some(dir) = var("FTR_OUTPUT_DIR") {
        debug!("Overriding output.directory from FTR_OUTPUT_DIR");
        config.output.directory = dir;
    }

    if let Some(level) = var("FTR_LOG") {
        debug!("Overriding logging.level from FTR_LOG");
        config.logging.level = level;
    }

    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.defaults.phase, "mvp_validation");
        assert_eq!(config.defaults.project, "aimastery");
        assert_eq!(config.output.directory, ".");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_expand_tilde() {
        let expanded = Config::expand_tilde("~/plans");
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expanded, home.join("plans"));
        }
        assert_eq!(Config::expand_tilde("./plans"), PathBuf::from("./plans"));
    }

    #[test]
    fn test_config_deserialization() {
        let toml_str = r#"
[defaults]
phase = "market_proof"
project = "scorescout"

[output]
directory = "/tmp/plans"

[logging]
level = "debug"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.initial_phase(), Phase::MarketProof);
        assert_eq!(config.initial_project(), Project::Scorescout);
        assert_eq!(config.output_directory(), PathBuf::from("/tmp/plans"));
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_config_partial_deserialization() {
        let toml_str = r#"
[defaults]
project = "new_concept"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.defaults.phase, "mvp_validation");
        assert_eq!(config.defaults.project, "new_concept");
        assert_eq!(config.output.directory, ".");
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let toml_str = r#"
theme = "dark"

[defaults]
phase = "user_testing"
colour = "green"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.initial_phase(), Phase::UserTesting);
    }

    #[test]
    fn test_unknown_default_ids_coerced() {
        let mut config = Config::default();
        config.defaults.phase = "launch".to_string();
        config.defaults.project = "moonshot".to_string();
        assert_eq!(config.initial_phase(), Phase::MvpValidation);
        assert_eq!(config.initial_project(), Project::Aimastery);
    }

    #[test]
    fn test_partial_config_empty() {
        let partial: PartialConfig = toml::from_str("").unwrap();
        assert!(partial.defaults.phase.is_none());
        assert!(partial.output.directory.is_none());
        assert!(partial.logging.level.is_none());
    }

    #[test]
    fn test_merge_config_no_overrides() {
        let global = Config::default();
        let merged = merge_config(&global, &PartialConfig::default());
        assert_eq!(merged.defaults.phase, global.defaults.phase);
        assert_eq!(merged.defaults.project, global.defaults.project);
        assert_eq!(merged.output.directory, global.output.directory);
        assert_eq!(merged.logging.level, global.logging.level);
    }

    #[test]
    fn test_merge_config_partial_overrides() {
        let partial: PartialConfig = toml::from_str(
            r#"
[defaults]
phase = "production_ready"

[output]
directory = "plans"
"#,
        )
        .unwrap();
        let merged = merge_config(&Config::default(), &partial);
        assert_eq!(merged.initial_phase(), Phase::ProductionReady);
        assert_eq!(merged.defaults.project, "aimastery");
        assert_eq!(merged.output.directory, "plans");
        assert_eq!(merged.logging.level, "info");
    }

    #[test]
    fn test_env_overrides() {
        let config = apply_env_overrides(Config::default(), |key| match key {
            "FTR_PROJECT" => Some("enterprise_tool".to_string()),
            "FTR_LOG" => Some("trace".to_string()),
            _ => None,
        });
        assert_eq!(config.defaults.phase, "mvp_validation");
        assert_eq!(config.initial_project(), Project::EnterpriseTool);
        assert_eq!(config.logging.level, "trace");
    }

    #[test]
    fn test_load_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let loaded = load_config_at(&path, None);

        assert_eq!(loaded.status, ConfigLoadStatus::Created);
        let written: Config = toml::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written.defaults.phase, "mvp_validation");
        assert_eq!(written.output.directory, ".");
    }

    #[test]
    fn test_load_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[logging]\nlevel = \"warn\"\n").unwrap();

        let loaded = load_config_at(&path, None);

        assert_eq!(loaded.status, ConfigLoadStatus::Loaded);
        assert_eq!(loaded.config.logging.level, "warn");
    }

    #[test]
    fn test_load_malformed_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[defaults\nphase = ").unwrap();

        let loaded = load_config_at(&path, None);

        assert!(matches!(loaded.status, ConfigLoadStatus::Error(_)));
        assert_eq!(loaded.config.defaults.phase, "mvp_validation");
    }

    #[test]
    fn test_load_merges_project_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[defaults]\nproject = \"scorescout\"\n").unwrap();
        fs::write(
            dir.path().join(PROJECT_CONFIG_FILE),
            "[defaults]\nphase = \"user_testing\"\n",
        )
        .unwrap();

        let project_path = find_project_config(dir.path());
        assert!(project_path.is_some());
        let loaded = load_config_at(&path, project_path);

        assert_eq!(loaded.config.defaults.phase, "user_testing");
        assert_eq!(loaded.config.defaults.project, "scorescout");
    }

    #[test]
    fn test_invalid_project_file_keeps_global() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[output]\ndirectory = \"global\"\n").unwrap();
        let project_path = dir.path().join(PROJECT_CONFIG_FILE);
        fs::write(&project_path, "not = [valid").unwrap();

        let loaded = load_config_at(&path, Some(project_path));

        assert_eq!(loaded.config.output.directory, "global");
        assert_eq!(loaded.status, ConfigLoadStatus::Loaded);
    }

    #[test]
    fn test_find_project_config_absent() {
        let dir = tempfile::tempdir().unwrap();
        assert!(find_project_config(dir.path()).is_none());
    }
}
