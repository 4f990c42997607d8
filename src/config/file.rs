//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use super::types::AppConfig;
use std::path::{Path, PathBuf};

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
pub const CONFIG_FILE_NAMES: &[&str] = &[
    ".soc-maturity.yaml",
    ".soc-maturity.yml",
    "soc-maturity.yaml",
    "soc-maturity.yml",
];

/// Directory name under the user config directory
pub const CONFIG_DIR_NAME: &str = "soc-maturity";

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided (no fallback when it does not exist)
/// 2. Current directory
/// 3. Git repository root (if in a repo)
/// 4. User config directory (~/.config/soc-maturity/)
/// 5. Home directory
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    // 1. An explicit path replaces discovery entirely
    if let Some(path) = explicit_path {
        return path.exists().then(|| path.to_path_buf());
    }

    // 2. Search current directory
    if let Some(path) = std::env::current_dir()
        .ok()
        .and_then(|cwd| find_config_in_dir(&cwd))
    {
        return Some(path);
    }

    // 3. Search git root (if in a repo)
    if let Some(path) = find_git_root().and_then(|root| find_config_in_dir(&root)) {
        return Some(path);
    }

    // 4. Search user config directory
    if let Some(path) =
        dirs::config_dir().and_then(|dir| find_config_in_dir(&dir.join(CONFIG_DIR_NAME)))
    {
        return Some(path);
    }

    // 5. Search home directory
    dirs::home_dir().and_then(|home| find_config_in_dir(&home))
}

/// Directories searched for a config file, in order.
#[must_use]
pub fn config_search_paths() -> Vec<PathBuf> {
    [
        std::env::current_dir().ok(),
        find_git_root(),
        dirs::config_dir().map(|p| p.join(CONFIG_DIR_NAME)),
        dirs::home_dir(),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Find the git repository root by walking up the directory tree.
fn find_git_root() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    let mut current = cwd.as_path();

    loop {
        if current.join(".git").exists() {
            return Some(current.to_path_buf());
        }
        current = current.parent()?;
    }
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug)]
pub enum ConfigFileError {
    /// File not found
    NotFound(PathBuf),
    /// IO error reading file
    Io(std::io::Error),
    /// YAML parsing error
    Parse(serde_yaml::Error),
}

impl std::fmt::Display for ConfigFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(path) => {
                write!(f, "Config file not found: {}", path.display())
            }
            Self::Io(e) => write!(f, "Failed to read config file: {e}"),
            Self::Parse(e) => write!(f, "Failed to parse config file: {e}"),
        }
    }
}

impl std::error::Error for ConfigFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigFileError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_yaml::Error> for ConfigFileError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Parse(err)
    }
}

/// Load an `AppConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let config: AppConfig = serde_yaml::from_str(&content)?;
    Ok(config)
}

/// Load the configuration for a run.
///
/// An explicit path must load: a missing or malformed file is an error. A
/// discovered file that fails to load is logged and replaced by the defaults.
pub fn load_or_default(
    explicit_path: Option<&Path>,
) -> Result<(AppConfig, Option<PathBuf>), ConfigFileError> {
    if let Some(path) = explicit_path {
        let config = load_config_file(path)?;
        tracing::debug!("Loaded config from {}", path.display());
        return Ok((config, Some(path.to_path_buf())));
    }

    let Some(path) = discover_config_file(None) else {
        return Ok((AppConfig::default(), None));
    };
    match load_config_file(&path) {
        Ok(config) => {
            tracing::debug!("Loaded config from {}", path.display());
            Ok((config, Some(path)))
        }
        Err(e) => {
            tracing::warn!("Failed to load config from {}: {}", path.display(), e);
            Ok((AppConfig::default(), None))
        }
    }
}

// ============================================================================
// Configuration Merging
// ============================================================================

impl AppConfig {
    /// Merge another config into this one, with `other` taking precedence.
    ///
    /// Only values that differ from the defaults count as set, which is how
    /// CLI flags left untouched keep file settings.
    pub fn merge(&mut self, other: &Self) {
        let defaults = Self::default();

        // Fusion weights travel together
        if other.fusion != defaults.fusion {
            self.fusion = other.fusion.clone();
        }

        // Governance scoring
        if other.governance.unknown_values != defaults.governance.unknown_values {
            self.governance.unknown_values = other.governance.unknown_values;
        }
        if other.governance.default_domain_weight != defaults.governance.default_domain_weight {
            self.governance.default_domain_weight = other.governance.default_domain_weight;
        }

        // Output config - only override if explicitly set
        if other.output.format != defaults.output.format {
            self.output.format = other.output.format;
        }
        if other.output.file.is_some() {
            self.output.file.clone_from(&other.output.file);
        }
        if other.output.no_color {
            self.output.no_color = true;
        }

        // Behavior config
        if other.behavior.quiet {
            self.behavior.quiet = true;
        }
        if other.behavior.min_fused_score.is_some() {
            self.behavior.min_fused_score = other.behavior.min_fused_score;
        }
    }

    /// Load from file and merge with CLI overrides.
    pub fn from_file_with_overrides(
        config_path: Option<&Path>,
        cli_overrides: &Self,
    ) -> Result<(Self, Option<PathBuf>), ConfigFileError> {
        let (mut config, loaded_from) = load_or_default(config_path)?;
        config.merge(cli_overrides);
        Ok((config, loaded_from))
    }
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// Generate a commented example config with all options.
#[must_use]
pub fn generate_full_example_config() -> String {
    r"# SOC Maturity Configuration File
# ===============================
#
# This file configures soc-maturity behavior. Place it at:
#   - .soc-maturity.yaml in your project root
#   - ~/.config/soc-maturity/soc-maturity.yaml for global config
#
# CLI arguments always override file settings.

# Fused maturity index = governance_weight * governance + purple_weight * purple
# The two weights must add up to 1.0
fusion:
  governance_weight: 0.6
  purple_weight: 0.4

# Governance questionnaire scoring
governance:
  # Unknown response or evidence labels: reject (fail) or zero (score 0, warn)
  unknown_values: reject
  # Weight of domains missing from the weight table's domain_weights
  default_domain_weight: 1.0

# Output configuration
output:
  # Format: summary, json, markdown
  format: summary
  # Output file path (omit for stdout)
  # file: maturity.json
  # Disable colored output
  no_color: false

# Behavior flags
behavior:
  # Suppress non-essential output
  quiet: false
  # Exit with code 1 when the fused index is below this value (0.0-1.0)
  # min_fused_score: 0.6
"
    .to_string()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::governance::UnknownValuePolicy;
    use crate::reports::ReportFormat;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_in_dir() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join(".soc-maturity.yaml");
        std::fs::write(&config_path, "fusion:\n  governance_weight: 0.5\n").unwrap();

        let found = find_config_in_dir(tmp.path());
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_in_dir_not_found() {
        let tmp = TempDir::new().unwrap();
        let found = find_config_in_dir(tmp.path());
        assert_eq!(found, None);
    }

    #[test]
    fn test_load_config_file() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.yaml");

        let yaml = r"
fusion:
  governance_weight: 0.7
  purple_weight: 0.3
governance:
  unknown_values: zero
behavior:
  min_fused_score: 0.6
";
        std::fs::write(&config_path, yaml).unwrap();

        let config = load_config_file(&config_path).unwrap();
        assert_eq!(config.fusion.governance_weight, 0.7);
        assert_eq!(config.governance.unknown_values, UnknownValuePolicy::Zero);
        assert_eq!(config.behavior.min_fused_score, Some(0.6));
    }

    #[test]
    fn test_load_config_file_not_found() {
        let result = load_config_file(Path::new("/nonexistent/config.yaml"));
        assert!(matches!(result, Err(ConfigFileError::NotFound(_))));
    }

    #[test]
    fn test_load_config_file_invalid_yaml() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.yaml");
        std::fs::write(&config_path, "fusion: [unclosed").unwrap();
        assert!(matches!(
            load_config_file(&config_path),
            Err(ConfigFileError::Parse(_))
        ));
    }

    #[test]
    fn test_config_merge() {
        let mut base = AppConfig {
            output: super::super::types::OutputConfig {
                format: ReportFormat::Markdown,
                ..Default::default()
            },
            ..AppConfig::default()
        };
        let override_config = AppConfig::builder()
            .fusion_weights(0.5, 0.5)
            .quiet(true)
            .min_fused_score(Some(0.8))
            .build();

        base.merge(&override_config);

        assert_eq!(base.fusion.governance_weight, 0.5);
        assert!(base.behavior.quiet);
        assert_eq!(base.behavior.min_fused_score, Some(0.8));
        // Untouched CLI format keeps the file setting
        assert_eq!(base.output.format, ReportFormat::Markdown);
    }

    #[test]
    fn test_full_example_config_parses() {
        let config: AppConfig = serde_yaml::from_str(&generate_full_example_config()).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_discover_explicit_path() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("custom-config.yaml");
        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(file, "output:\n  format: json").unwrap();

        let discovered = discover_config_file(Some(&config_path));
        assert_eq!(discovered, Some(config_path));
    }

    #[test]
    fn test_discover_missing_explicit_path_does_not_fall_back() {
        let discovered = discover_config_file(Some(Path::new("/nonexistent/team.yaml")));
        assert_eq!(discovered, None);
    }

    #[test]
    fn test_explicit_missing_config_is_an_error() {
        let result = AppConfig::from_file_with_overrides(
            Some(Path::new("/nonexistent/team.yaml")),
            &AppConfig::default(),
        );
        assert!(matches!(result, Err(ConfigFileError::NotFound(_))));
    }

    #[test]
    fn test_explicit_malformed_config_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("team.yaml");
        std::fs::write(&config_path, "fusion:\n  purple_weight: lots\n").unwrap();

        let result = AppConfig::from_file_with_overrides(Some(&config_path), &AppConfig::default());
        assert!(matches!(result, Err(ConfigFileError::Parse(_))));
    }

    #[test]
    fn test_explicit_config_is_loaded_and_merged() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("team.yaml");
        std::fs::write(
            &config_path,
            "fusion:\n  governance_weight: 0.7\n  purple_weight: 0.3\n",
        )
        .unwrap();
        let overrides = AppConfig::builder().quiet(true).build();

        let (config, loaded_from) =
            AppConfig::from_file_with_overrides(Some(&config_path), &overrides).unwrap();
        assert_eq!(loaded_from, Some(config_path));
        assert_eq!(config.fusion.governance_weight, 0.7);
        assert!(config.behavior.quiet);
    }
}
