use crate::{
    errors::{FileOperation, IoError},
    lens::LensAction,
    prompt::{self, PromptError},
};
use colored::Colorize;
use miette::Diagnostic;
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum HostError {
    #[error("I/O error within host domain")]
    #[diagnostic(code(autofolder::host::io))]
    Io(#[from] IoError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Prompt(#[from] PromptError),
}

/// Severity of a message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warning,
    Error,
}

/// The environment the actions run in.
///
/// Actions only ever ask the host where to work, how to tell the user something, how to show the
/// structure document and which lens the user picked. Everything else is plain filesystem work.
pub trait Host {
    /// Directory entries are resolved against. `None` when no workspace is available.
    fn resolve_base_directory(&self) -> Option<PathBuf>;

    fn notify(&self, message: &str, level: Level);

    /// Presents the document at `path` to the user for editing.
    fn show_document(&self, path: &Path, editor: Option<&str>) -> Result<(), HostError>;

    /// Offers `lenses` for the document at `path`. `None` means the user dismissed them.
    fn choose_lens(
        &self,
        path: &Path,
        lenses: &[LensAction],
    ) -> Result<Option<LensAction>, HostError>;
}

/// [`Host`] backed by the current terminal.
#[derive(Debug, Clone)]
pub struct TerminalHost {
    workspace: Option<PathBuf>,
    interactive: bool,
}
impl TerminalHost {
    /// `workspace` defaults to the current directory. A non-interactive host never opens an
    /// editor or prompt.
    pub fn new(workspace: Option<PathBuf>, interactive: bool) -> Self {
        Self {
            workspace,
            interactive,
        }
    }
}
impl Host for TerminalHost {
    fn resolve_base_directory(&self) -> Option<PathBuf> {
        let workspace = match &self.workspace {
            Some(workspace) => workspace.clone(),
            None => std::env::current_dir().ok()?,
        };

        if workspace.is_dir() {
            Some(workspace)
        } else {
            log::debug!("workspace {} is not a directory", workspace.display());

            None
        }
    }

    fn notify(&self, message: &str, level: Level) {
        match level {
            Level::Info => {
                log::info!("{message}");
                println!("{}", message.green());
            }
            Level::Warning => {
                log::warn!("{message}");
                eprintln!("{} {}", "warning:".yellow().bold(), message);
            }
            Level::Error => {
                log::error!("{message}");
                eprintln!("{} {}", "error:".red().bold(), message);
            }
        }
    }

    fn show_document(&self, path: &Path, editor: Option<&str>) -> Result<(), HostError> {
        if !self.interactive {
            println!("{} {}", "open".cyan(), path.display());

            return Ok(());
        }

        let contents = fs::read_to_string(path)
            .map_err(|error| IoError::new(FileOperation::Read, path.into(), error))?;

        let title = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());

        let edited = prompt::edit_document(&title, &contents, editor)?;

        if edited != contents {
            fs::write(path, &edited)
                .map_err(|error| IoError::new(FileOperation::Write, path.into(), error))?;

            log::debug!("saved edits to {}", path.display());
        }

        Ok(())
    }

    fn choose_lens(
        &self,
        path: &Path,
        lenses: &[LensAction],
    ) -> Result<Option<LensAction>, HostError> {
        if !self.interactive {
            return Ok(None);
        }

        let message = format!("{}:", path.display());

        Ok(prompt::select_lens(&message, lenses)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_workspace_is_resolved() {
        let dir = tempfile::tempdir().unwrap();
        let host = TerminalHost::new(Some(dir.path().to_path_buf()), false);

        assert_eq!(host.resolve_base_directory(), Some(dir.path().to_path_buf()));
    }

    #[test]
    fn test_missing_workspace_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let host = TerminalHost::new(Some(dir.path().join("nope")), false);

        assert_eq!(host.resolve_base_directory(), None);
    }

    #[test]
    fn test_file_is_not_a_workspace() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("file.txt");
        fs::write(&file, "").unwrap();
        let host = TerminalHost::new(Some(file), false);

        assert_eq!(host.resolve_base_directory(), None);
    }

    #[test]
    fn test_non_interactive_host_never_prompts() {
        let dir = tempfile::tempdir().unwrap();
        let document = dir.path().join("folder-structure.md");
        fs::write(&document, "a/\n").unwrap();
        let host = TerminalHost::new(Some(dir.path().to_path_buf()), false);

        host.show_document(&document, Some("false")).unwrap();
        let choice = host
            .choose_lens(&document, &[LensAction::Accept, LensAction::Reject])
            .unwrap();

        assert_eq!(choice, None);
        assert_eq!(fs::read_to_string(&document).unwrap(), "a/\n");
    }
}
