use crate::core::policy::TermPolicy;
use crate::core::{Generation, GenerationsInfo};
use crate::utils::error::{GenerationsError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_unique, Validate};
use chrono::NaiveDate;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub project: ProjectSection,
    #[serde(default)]
    pub policy: TermPolicy,
    #[serde(default)]
    pub generations: Vec<GenerationEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectSection {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationEntry {
    pub name: String,
    pub initial_release_date: NaiveDate,
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"))
}

impl ProjectConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Reading project file {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| GenerationsError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the variable's value; unset variables stay as written.
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn project_name(&self) -> &str {
        &self.project.name
    }

    /// Builds the generation set described by this file and stamps it as
    /// modified. End dates start unset.
    pub fn to_generations_info(&self) -> GenerationsInfo {
        let mut info = GenerationsInfo::new();
        info.set_generations(
            self.generations
                .iter()
                .map(|entry| Generation::new(entry.name.as_str(), entry.initial_release_date)),
        );
        info.record_modification();
        info
    }
}

impl Validate for ProjectConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("project.name", &self.project.name)?;
        for entry in &self.generations {
            validate_non_empty_string("generations.name", &entry.name)?;
        }
        validate_unique(
            "generations.name",
            self.generations.iter().map(|entry| entry.name.as_str()),
        )?;
        self.policy.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const BASIC: &str = r#"
[project]
name = "spring-boot"

[policy]
oss_support_months = 12
commercial_support_months = 15
successor_overlap_months = 3

[[generations]]
name = "3.0.x"
initial_release_date = "2022-11-24"

[[generations]]
name = "2.7.x"
initial_release_date = "2022-05-19"
"#;

    #[test]
    fn test_parse_basic_project_config() {
        let config = ProjectConfig::from_toml_str(BASIC).unwrap();

        assert_eq!(config.project_name(), "spring-boot");
        assert_eq!(config.policy.commercial_support_months, 15);
        assert_eq!(config.policy.successor_overlap_months, Some(3));
        assert_eq!(config.generations.len(), 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_policy_defaults_when_absent() {
        let config = ProjectConfig::from_toml_str(
            r#"
[project]
name = "minimal"
"#,
        )
        .unwrap();

        assert_eq!(config.policy, TermPolicy::default());
        assert!(config.generations.is_empty());
        assert!(config.to_generations_info().is_empty());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("PROJECT_GENERATIONS_TEST_NAME", "spring-data");

        let config = ProjectConfig::from_toml_str(
            r#"
[project]
name = "${PROJECT_GENERATIONS_TEST_NAME}"
"#,
        )
        .unwrap();
        assert_eq!(config.project_name(), "spring-data");

        std::env::remove_var("PROJECT_GENERATIONS_TEST_NAME");
    }

    #[test]
    fn test_unset_env_var_left_verbatim() {
        let config = ProjectConfig::from_toml_str(
            r#"
[project]
name = "${PROJECT_GENERATIONS_SURELY_UNSET}"
"#,
        )
        .unwrap();
        assert_eq!(config.project_name(), "${PROJECT_GENERATIONS_SURELY_UNSET}");
    }

    #[test]
    fn test_invalid_date_is_parse_error() {
        let result = ProjectConfig::from_toml_str(
            r#"
[project]
name = "broken"

[[generations]]
name = "1.0.x"
initial_release_date = "2020-13-01"
"#,
        );
        assert!(matches!(
            result,
            Err(GenerationsError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_duplicate_generation_rejected() {
        let config = ProjectConfig::from_toml_str(
            r#"
[project]
name = "dupes"

[[generations]]
name = "1.0.x"
initial_release_date = "2020-01-01"

[[generations]]
name = "1.0.x"
initial_release_date = "2020-06-01"
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_blank_project_name_rejected() {
        let config = ProjectConfig::from_toml_str(
            r#"
[project]
name = "  "
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_to_generations_info_sorts_generations() {
        let config = ProjectConfig::from_toml_str(BASIC).unwrap();

        let info = config.to_generations_info();

        let names: Vec<&str> = info.generations().map(|g| g.name().as_str()).collect();
        assert_eq!(names, vec!["2.7.x", "3.0.x"]);
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(BASIC.as_bytes()).unwrap();

        let config = ProjectConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.project_name(), "spring-boot");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = ProjectConfig::from_file("/nonexistent/project-generations.toml");
        assert!(matches!(result, Err(GenerationsError::IoError(_))));
    }
}
