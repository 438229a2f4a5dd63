use crate::errors::{FileOperation, IoError, ParseError};
use miette::Diagnostic;
use serde::Deserialize;
use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};
use thiserror::Error;

pub const CONFIG_FILE_NAME: &str = "autofolder.toml";

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("I/O error within config domain")]
    #[diagnostic(code(autofolder::config::io))]
    Io(#[from] IoError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ParseError),
}

/// Optional per-workspace settings read from `autofolder.toml`.
///
/// ```toml
/// template = "scaffolds/web.md"
/// editor = "nvim"
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// File, relative to the workspace, whose contents replace the built-in structure document.
    pub template: Option<PathBuf>,
    /// Command used to open the structure document for editing.
    pub editor: Option<String>,
}
impl Config {
    /// Loads `autofolder.toml` from `workspace`, falling back to defaults when it is absent.
    pub fn load(workspace: &Path) -> Result<Self, ConfigError> {
        let path = workspace.join(CONFIG_FILE_NAME);

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(error) if error.kind() == ErrorKind::NotFound => {
                log::debug!("no {} in {}, using defaults", CONFIG_FILE_NAME, workspace.display());

                return Ok(Self::default());
            }
            Err(error) => Err(IoError::new(FileOperation::Read, path.clone(), error))?,
        };

        Self::from_toml(&content, path)
    }

    fn from_toml(content: &str, path: PathBuf) -> Result<Self, ConfigError> {
        let parsed = toml::from_str(content)
            .map_err(|error| ParseError::new(path, error))?;

        Ok(parsed)
    }

    /// Path of the custom template, resolved against `workspace`.
    pub fn template_path(&self, workspace: &Path) -> Option<PathBuf> {
        self.template.as_ref().map(|template| workspace.join(template))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_is_default() {
        let dir = tempfile::tempdir().unwrap();

        let config = Config::load(dir.path()).unwrap();

        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_reads_both_keys() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "template = \"scaffolds/web.md\"\neditor = \"vi\"\n",
        )
        .unwrap();

        let config = Config::load(dir.path()).unwrap();

        assert_eq!(config.template, Some(PathBuf::from("scaffolds/web.md")));
        assert_eq!(config.editor.as_deref(), Some("vi"));
        assert_eq!(
            config.template_path(dir.path()),
            Some(dir.path().join("scaffolds/web.md"))
        );
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "templte = \"typo.md\"\n").unwrap();

        let error = Config::load(dir.path()).unwrap_err();

        assert!(matches!(error, ConfigError::Parse(_)));
        assert!(error
            .to_string()
            .starts_with("unable to parse toml file at"));
    }
}
