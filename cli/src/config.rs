//! Configuration for the ddlgen CLI
//!
//! Handles loading `ddlgen.toml`.

use ddlgen_types::Dialect;
use serde::{Deserialize, Deserializer};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "ddlgen.toml";

// ============================================================================
// Configuration
// ============================================================================

/// Main configuration structure
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(deserialize_with = "dialect_from_str")]
    pub dialect: Dialect,

    #[serde(default = "default_schema")]
    pub schema: Schema,

    /// SQL output file, stdout when unset
    #[serde(default)]
    pub out: Option<PathBuf>,

    /// Emit referenced tables before the tables that reference them
    #[serde(default)]
    pub order_by_dependencies: bool,

    #[serde(default)]
    pub verbose: bool,

    /// Directory relative paths resolve against
    #[serde(skip)]
    root: PathBuf,
}

fn default_schema() -> Schema {
    Schema::One("schema.json".into())
}

/// Accepts every spelling [`Dialect::parse`] does (`MYSQL`, `pg`, `dameng`, ...)
fn dialect_from_str<'de, D>(deserializer: D) -> Result<Dialect, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Dialect::parse(&s).ok_or_else(|| {
        serde::de::Error::custom(format!(
            "unknown dialect '{s}', expected one of: {}",
            Dialect::ALL.map(|d| d.as_str()).join(", ")
        ))
    })
}

/// Schema path(s)
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Schema {
    One(String),
    Many(Vec<String>),
}

impl Schema {
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        match self {
            Self::One(s) => std::slice::from_ref(s).iter().map(String::as_str),
            Self::Many(v) => v.iter().map(String::as_str),
        }
    }
}

// ============================================================================
// Config implementation
// ============================================================================

impl Config {
    /// Config built from command-line flags alone
    pub fn new(dialect: Dialect, schema: Vec<String>) -> Self {
        Self {
            dialect,
            schema: Schema::Many(schema),
            out: None,
            order_by_dependencies: false,
            verbose: false,
            root: PathBuf::new(),
        }
    }

    /// Load from default config file
    pub fn load() -> Result<Self, Error> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Load from specific path
    pub fn load_from(path: &Path) -> Result<Self, Error> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::NotFound(path.into())
            } else {
                Error::Io(path.into(), e)
            }
        })?;

        let mut config: Self =
            toml::from_str(&content).map_err(|e| Error::Parse(path.into(), e))?;
        config.root = path.parent().map(Path::to_path_buf).unwrap_or_default();
        Ok(config)
    }

    /// Output path resolved against the config directory
    pub fn out_path(&self) -> Option<PathBuf> {
        self.out.as_deref().map(|p| self.resolve(p))
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    /// Schema paths display string
    pub fn schema_display(&self) -> String {
        match &self.schema {
            Schema::One(s) => s.clone(),
            Schema::Many(v) => v.join(", "),
        }
    }

    /// Resolve schema files (with glob support)
    pub fn schema_files(&self) -> Result<Vec<PathBuf>, Error> {
        let mut files = Vec::new();

        for pattern in self.schema.iter() {
            let resolved = self.resolve(Path::new(pattern));
            let resolved = resolved.to_string_lossy();
            match glob::glob(&resolved) {
                Ok(paths) => {
                    let mut matched: Vec<_> = paths.filter_map(Result::ok).collect();
                    if matched.is_empty() {
                        let p = PathBuf::from(resolved.as_ref());
                        if p.exists() {
                            files.push(p);
                        }
                    } else {
                        matched.sort();
                        files.extend(matched);
                    }
                }
                Err(e) => return Err(Error::Glob(pattern.into(), e)),
            }
        }

        if files.is_empty() {
            return Err(Error::NoSchemaFiles(self.schema_display()));
        }

        Ok(files)
    }
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read {}: {}", .0.display(), .1)]
    Io(PathBuf, #[source] std::io::Error),

    #[error("failed to parse {}: {}", .0.display(), .1)]
    Parse(PathBuf, #[source] toml::de::Error),

    #[error("invalid glob '{0}': {1}")]
    Glob(String, #[source] glob::PatternError),

    #[error("no schema files found: {0}")]
    NoSchemaFiles(String),
}

pub type ConfigError = Error;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn minimal() {
        let cfg: Config = toml::from_str(r#"dialect = "mysql""#).unwrap();
        assert_eq!(cfg.dialect, Dialect::MySql);
        assert_eq!(cfg.schema_display(), "schema.json");
        assert!(cfg.out.is_none());
        assert!(!cfg.order_by_dependencies);
    }

    #[test]
    fn dialect_spellings() {
        for (raw, dialect) in [
            ("POSTGRESQL", Dialect::PostgreSql),
            ("pg", Dialect::PostgreSql),
            ("mssql", Dialect::SqlServer),
            ("dameng", Dialect::Dm),
            ("KINGBASE", Dialect::Kingbase),
        ] {
            let cfg: Config = toml::from_str(&format!("dialect = \"{raw}\"")).unwrap();
            assert_eq!(cfg.dialect, dialect, "{raw}");
        }
    }

    #[test]
    fn unknown_dialect() {
        let err = toml::from_str::<Config>(r#"dialect = "db2""#).unwrap_err();
        assert!(err.to_string().contains("unknown dialect 'db2'"));
    }

    #[test]
    fn full() {
        let cfg: Config = toml::from_str(
            r#"
            dialect = "oracle"
            schema = ["a.json", "b/*.toml"]
            out = "build/schema.sql"
            orderByDependencies = true
            verbose = true
        "#,
        )
        .unwrap();
        assert_eq!(cfg.dialect, Dialect::Oracle);
        assert_eq!(cfg.schema.iter().collect::<Vec<_>>(), ["a.json", "b/*.toml"]);
        assert_eq!(cfg.out_path(), Some(PathBuf::from("build/schema.sql")));
        assert!(cfg.order_by_dependencies);
        assert!(cfg.verbose);
    }

    #[test]
    fn missing_file() {
        let err = Config::load_from(Path::new("does/not/exist.toml")).unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[test]
    fn paths_resolve_against_config_dir() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("project");
        std::fs::create_dir_all(dir.join("schema")).unwrap();
        std::fs::write(dir.join("schema/b.json"), "{}").unwrap();
        std::fs::write(dir.join("schema/a.json"), "{}").unwrap();
        std::fs::write(
            dir.join(CONFIG_FILE),
            "dialect = \"h2\"\nschema = \"schema/*.json\"\nout = \"out.sql\"\n",
        )
        .unwrap();

        let cfg = Config::load_from(&dir.join(CONFIG_FILE)).unwrap();
        let files = cfg.schema_files().unwrap();
        assert_eq!(files, [dir.join("schema/a.json"), dir.join("schema/b.json")]);
        assert_eq!(cfg.out_path(), Some(dir.join("out.sql")));
    }

    #[test]
    fn no_schema_files() {
        let cfg = Config::new(Dialect::Sqlite, vec!["nothing-here-*.json".into()]);
        let err = cfg.schema_files().unwrap_err();
        assert!(matches!(err, Error::NoSchemaFiles(_)));
    }
}
