//! Engine configuration.
//!
//! Loaded from a TOML file:
//!
//! ```toml
//! [table]
//! path = "training.csv"
//!
//! [schema]
//! key_column = "date"
//! key_format = "date"
//!
//! [schema.roles]
//! age = "integer"
//! weight = "decimal"
//!
//! [upsert]
//! sort_after_write = true
//! ```
//!
//! Relative table paths resolve against the config file's directory.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use rowkeep_model::{ColumnRole, KeyFormat, SchemaError};
use serde::Deserialize;

use crate::error::ConfigError;

pub const DEFAULT_TEXT_COLUMN: &str = "note";

/// Full configuration file.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub table: TableConfig,
    pub schema: SchemaConfig,
    #[serde(default)]
    pub upsert: UpsertOptions,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableConfig {
    /// CSV file backing the table.
    pub path: PathBuf,
}

/// Declared column roles. Header labels are matched exactly.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SchemaConfig {
    pub key_column: String,
    #[serde(default)]
    pub key_format: KeyFormat,
    /// Second column of the header written into an empty table.
    #[serde(default = "default_text_column")]
    pub default_text_column: String,
    /// Role of header columns not listed in `roles`.
    #[serde(default = "default_role")]
    pub default_role: ColumnRole,
    #[serde(default)]
    pub roles: BTreeMap<String, ColumnRole>,
}

fn default_text_column() -> String {
    DEFAULT_TEXT_COLUMN.to_string()
}

fn default_role() -> ColumnRole {
    ColumnRole::Text
}

impl SchemaConfig {
    pub fn new(key_column: impl Into<String>) -> Self {
        Self {
            key_column: key_column.into(),
            key_format: KeyFormat::default(),
            default_text_column: default_text_column(),
            default_role: default_role(),
            roles: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_role(mut self, column: impl Into<String>, role: ColumnRole) -> Self {
        self.roles.insert(column.into(), role);
        self
    }

    /// Role for a header label.
    pub fn role_for(&self, column: &str) -> ColumnRole {
        if column == self.key_column {
            return ColumnRole::Key;
        }
        self.roles.get(column).copied().unwrap_or(self.default_role)
    }

    /// Checks that the key role is only ever assigned through `key_column`.
    pub fn validate(&self) -> Result<(), SchemaError> {
        if let Some(role) = self.roles.get(&self.key_column) {
            return Err(SchemaError::ConflictingRole {
                column: self.key_column.clone(),
                role: *role,
            });
        }
        if let Some((column, _)) = self
            .roles
            .iter()
            .find(|(_, role)| **role == ColumnRole::Key)
        {
            return Err(SchemaError::StrayKeyRole {
                column: column.clone(),
            });
        }
        let default_text = self.default_text_column.trim();
        if default_text.is_empty() || default_text == self.key_column.trim() {
            return Err(SchemaError::InvalidDefaultColumn {
                name: self.default_text_column.clone(),
            });
        }
        if self.default_role == ColumnRole::Key {
            return Err(SchemaError::StrayKeyRole {
                column: "default_role".to_string(),
            });
        }
        Ok(())
    }
}

/// Write policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpsertOptions {
    /// Re-sort the whole table by key after each successful write.
    #[serde(default = "default_sort_after_write")]
    pub sort_after_write: bool,
}

fn default_sort_after_write() -> bool {
    true
}

impl Default for UpsertOptions {
    fn default() -> Self {
        Self {
            sort_after_write: default_sort_after_write(),
        }
    }
}

impl Config {
    /// Parses configuration text. `base_dir` anchors a relative table path.
    pub fn from_toml_str(contents: &str, base_dir: &Path) -> Result<Self, toml::de::Error> {
        let mut config: Config = toml::from_str(contents)?;
        if config.table.path.is_relative() {
            config.table.path = base_dir.join(&config.table.path);
        }
        Ok(config)
    }
}

/// Loads and validates a configuration file.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
    let config = Config::from_toml_str(&contents, base_dir).map_err(|source| ConfigError::Toml {
        path: path.to_path_buf(),
        source,
    })?;
    config
        .schema
        .validate()
        .map_err(|source| ConfigError::Schema {
            path: path.to_path_buf(),
            source,
        })?;
    tracing::debug!(path = %path.display(), table = %config.table.path.display(), "loaded config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let config = Config::from_toml_str(
            r#"
            [table]
            path = "data/log.csv"

            [schema]
            key_column = "date"
            key_format = "date"
            default_role = "decimal"

            [schema.roles]
            age = "integer"
            note = "text"

            [upsert]
            sort_after_write = false
            "#,
            Path::new("/srv/rowkeep"),
        )
        .unwrap();
        assert_eq!(config.table.path, PathBuf::from("/srv/rowkeep/data/log.csv"));
        assert_eq!(config.schema.role_for("date"), ColumnRole::Key);
        assert_eq!(config.schema.role_for("age"), ColumnRole::Integer);
        assert_eq!(config.schema.role_for("note"), ColumnRole::Text);
        assert_eq!(config.schema.role_for("distance"), ColumnRole::Decimal);
        assert_eq!(config.schema.default_text_column, DEFAULT_TEXT_COLUMN);
        assert!(!config.upsert.sort_after_write);
    }

    #[test]
    fn defaults_apply() {
        let config = Config::from_toml_str(
            "[table]\npath = \"/tmp/t.csv\"\n[schema]\nkey_column = \"day\"\n",
            Path::new("."),
        )
        .unwrap();
        assert_eq!(config.table.path, PathBuf::from("/tmp/t.csv"));
        assert_eq!(config.schema.key_format, KeyFormat::Date);
        assert_eq!(config.schema.default_role, ColumnRole::Text);
        assert!(config.upsert.sort_after_write);
    }

    #[test]
    fn rejects_unknown_roles() {
        let result = Config::from_toml_str(
            concat!(
                "[table]\npath = \"t.csv\"\n",
                "[schema]\nkey_column = \"d\"\n",
                "[schema.roles]\nx = \"money\"\n",
            ),
            Path::new("."),
        );
        assert!(result.is_err());
    }

    #[test]
    fn key_role_only_through_key_column() {
        let conflicting = SchemaConfig::new("date").with_role("date", ColumnRole::Integer);
        assert!(matches!(
            conflicting.validate(),
            Err(SchemaError::ConflictingRole { .. })
        ));

        let stray = SchemaConfig::new("date").with_role("id", ColumnRole::Key);
        assert_eq!(
            stray.validate(),
            Err(SchemaError::StrayKeyRole {
                column: "id".to_string()
            })
        );
        assert!(SchemaConfig::new("date").validate().is_ok());
    }

    #[test]
    fn default_text_column_must_differ_from_key() {
        for name in ["date", " date ", "", "  "] {
            let mut config = SchemaConfig::new("date");
            config.default_text_column = name.to_string();
            assert_eq!(
                config.validate(),
                Err(SchemaError::InvalidDefaultColumn {
                    name: name.to_string()
                })
            );
        }
    }

    #[test]
    fn load_config_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rowkeep.toml");
        std::fs::write(
            &path,
            concat!(
                "[table]\npath = \"log.csv\"\n",
                "[schema]\nkey_column = \"date\"\n",
                "[schema.roles]\ndate = \"text\"\n",
            ),
        )
        .unwrap();
        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Schema { .. }));
        assert!(err.to_string().contains("rowkeep.toml"));

        let missing = load_config(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(missing, ConfigError::Io { .. }));
    }
}
