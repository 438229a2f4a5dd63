use crate::lens::LensAction;
use inquire::{Editor, InquireError, Select};
use miette::Diagnostic;
use std::ffi::OsStr;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum PromptError {
    #[error("prompt was interrupted")]
    #[diagnostic(code(autofolder::prompt::interrupted))]
    Interrupted,

    #[error("unable to prompt user")]
    #[diagnostic(
        code(autofolder::prompt::inquire),
        help("Run from an interactive terminal, or pass --no-prompt")
    )]
    Inquire(#[source] InquireError),
}
impl From<InquireError> for PromptError {
    fn from(error: InquireError) -> Self {
        match error {
            InquireError::OperationInterrupted => Self::Interrupted,
            other => Self::Inquire(other),
        }
    }
}

/// Opens `contents` in an editor and returns the edited text.
///
/// `editor` is a command line such as `code --wait`; when `None` inquire falls back to
/// `$VISUAL`/`$EDITOR`. Escaping out of the prompt keeps `contents` as they were.
pub fn edit_document(
    message: &str,
    contents: &str,
    editor: Option<&str>,
) -> Result<String, PromptError> {
    let command: Vec<&OsStr> = editor
        .map(|editor| editor.split_whitespace().map(OsStr::new).collect())
        .unwrap_or_default();

    let mut prompt = Editor::new(message)
        .with_predefined_text(contents)
        .with_file_extension(".md")
        .with_help_message("Folders end with '/', files do not. One path per line.");

    if let Some((program, args)) = command.split_first() {
        prompt = prompt.with_editor_command(program).with_args(args);
    }

    match prompt.prompt() {
        Ok(edited) => Ok(edited),
        Err(InquireError::OperationCanceled) => Ok(contents.to_string()),
        Err(error) => Err(error.into()),
    }
}

/// Lets the user pick one of `lenses`. Escaping out of the prompt picks nothing.
pub fn select_lens(
    message: &str,
    lenses: &[LensAction],
) -> Result<Option<LensAction>, PromptError> {
    if lenses.is_empty() {
        return Ok(None);
    }

    let answer = Select::new(message, lenses.to_vec())
        .with_help_message("↑↓ to move, enter to select, esc to reject")
        .prompt_skippable()?;

    Ok(answer)
}
