use crate::{
    config::{Config, ConfigError},
    document::{self, DEFAULT_TEMPLATE},
    errors::{FileOperation, IoError},
    host::{Host, HostError, Level},
    lens::{self, LensAction},
    materialize::{materialize, MaterializeReport},
    parser::{parse_paths, PathList},
    preview::preview_as_tree,
};
use std::{
    fs,
    path::{Path, PathBuf},
};

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum AutofolderError {
    #[error("No workspace folder open.")]
    #[diagnostic(
        code(autofolder::no_workspace),
        help("Pass an existing directory with --workspace, or run from inside one")
    )]
    NoWorkspace,

    #[error("folder-structure.md not found in workspace.")]
    #[diagnostic(
        code(autofolder::document_not_found),
        help("Run `autofolder create` first to write the structure document")
    )]
    DocumentNotFound { path: PathBuf },

    #[error("Error creating folder structure: {source}")]
    #[diagnostic(code(autofolder::materialize))]
    Materialize {
        #[source]
        source: IoError,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Io(#[from] IoError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Host(#[from] HostError),
}

/// User-facing actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Create,
    Accept,
    Reject,
    Preview,
    Propose,
}

/// Runs `action` against `host`, reporting any failure through [`Host::notify`] before returning it.
///
/// # Errors
///
/// Returns the [`AutofolderError`] the action failed with.
pub fn run_action(host: &impl Host, action: Action) -> Result<(), AutofolderError> {
    log::debug!("running {:?}", action);

    let result = match action {
        Action::Create => create_structure(host).map(|_| ()),
        Action::Accept => accept_structure(host).map(|_| ()),
        Action::Reject => {
            reject_structure(host);
            Ok(())
        }
        Action::Preview => preview_structure(host).map(|_| ()),
        Action::Propose => propose_structure(host).map(|_| ()),
    };

    if let Err(error) = &result {
        host.notify(&error.to_string(), Level::Error);
    }

    result
}

/// Writes the structure document into the workspace root and shows it for editing.
///
/// The document is the built-in template, or the file named by `template` in `autofolder.toml`.
/// An existing document is replaced.
///
/// # Errors
///
/// Returns an [`AutofolderError`] if:
///
/// - The host has no workspace.
/// - The configuration or custom template cannot be read.
/// - The document cannot be written or shown.
pub fn create_structure(host: &impl Host) -> Result<PathBuf, AutofolderError> {
    let workspace = resolve_workspace(host)?;

    let config = Config::load(&workspace)?;

    let contents = match config.template_path(&workspace) {
        Some(template) => fs::read_to_string(&template)
            .map_err(|error| IoError::new(FileOperation::Read, template.clone(), error))?,
        None => DEFAULT_TEMPLATE.to_string(),
    };

    let path = document::write_document(&workspace, &contents)?;

    host.show_document(&path, config.editor.as_deref())?;

    Ok(path)
}

/// Reads the structure document back and creates every listed folder and file in the workspace.
///
/// # Errors
///
/// Returns an [`AutofolderError`] if:
///
/// - The host has no workspace.
/// - The structure document is missing or unreadable.
/// - A directory or file cannot be created. Entries created before the failure are kept.
pub fn accept_structure(host: &impl Host) -> Result<MaterializeReport, AutofolderError> {
    let workspace = resolve_workspace(host)?;

    let paths = load_listing(&workspace)?;

    log::debug!("accepting {} entries into {}", paths.len(), workspace.display());

    if paths.is_empty() {
        host.notify("folder-structure.md lists no paths.", Level::Warning);
    }

    let report = materialize(&workspace, &paths)
        .map_err(|source| AutofolderError::Materialize { source })?;

    host.notify(
        &format!(
            "Folder structure created successfully! ({} created, {} already present)",
            report.created_count(),
            report.existing.len()
        ),
        Level::Info,
    );

    Ok(report)
}

/// Discards the proposal. Nothing on disk changes.
pub fn reject_structure(host: &impl Host) {
    host.notify("Folder structure creation canceled.", Level::Info);
}

/// Prints the structure document as a tree without touching the filesystem.
///
/// # Errors
///
/// Returns an [`AutofolderError`] if the workspace or the structure document is missing.
pub fn preview_structure(host: &impl Host) -> Result<PathList, AutofolderError> {
    let workspace = resolve_workspace(host)?;

    let paths = load_listing(&workspace)?;

    preview_as_tree(&paths, &workspace);

    Ok(paths)
}

/// Full two-step flow: write and show the document, preview it, then let the user accept or
/// reject through the document's lenses. Dismissing the lenses counts as rejecting.
///
/// Returns the [`MaterializeReport`] when the structure was accepted.
///
/// # Errors
///
/// Returns an [`AutofolderError`] if any step fails.
pub fn propose_structure(host: &impl Host) -> Result<Option<MaterializeReport>, AutofolderError> {
    let document = create_structure(host)?;

    preview_structure(host)?;

    let lenses = lens::provide_lenses(&document);

    match host.choose_lens(&document, &lenses)? {
        Some(LensAction::Accept) => accept_structure(host).map(Some),
        Some(LensAction::Reject) | None => {
            reject_structure(host);

            Ok(None)
        }
    }
}

fn resolve_workspace(host: &impl Host) -> Result<PathBuf, AutofolderError> {
    host.resolve_base_directory()
        .ok_or(AutofolderError::NoWorkspace)
}

fn load_listing(workspace: &Path) -> Result<PathList, AutofolderError> {
    let contents =
        document::read_document(workspace)?.ok_or_else(|| AutofolderError::DocumentNotFound {
            path: document::document_path(workspace),
        })?;

    Ok(parse_paths(&document::extract_listing(&contents)))
}
