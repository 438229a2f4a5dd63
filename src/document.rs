use crate::errors::{FileOperation, IoError};
use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

/// Name of the structure document written into, and read back from, the workspace root.
pub const DOCUMENT_NAME: &str = "folder-structure.md";

const FENCE: &str = "```";

/// Built-in structure document offered by `create`.
pub const DEFAULT_TEMPLATE: &str = r#"# Define Your Folder Structure

Edit the lines below. Folders end with '/', files do not. One path per line.
(Accept or Reject the structure when you are done editing.)

```
frontend/
frontend/public/
frontend/public/assets/
frontend/public/images/
frontend/public/fonts/
frontend/pages/
frontend/pages/api/
frontend/pages/index.tsx
frontend/pages/login.tsx
frontend/pages/dashboard.tsx
frontend/pages/tasks.tsx
frontend/pages/team.tsx
frontend/components/
frontend/components/Header.tsx
frontend/components/Footer.tsx
frontend/components/TaskCard.tsx
frontend/components/TeamMemberCard.tsx
frontend/hooks/
frontend/hooks/useAuth.ts
frontend/hooks/useTasks.ts
frontend/hooks/useTeam.ts
frontend/styles/
frontend/styles/global.css
frontend/styles/Home.module.css
frontend/styles/Tasks.module.css
frontend/utils/
frontend/utils/api.ts
frontend/utils/logger.ts
frontend/context/
frontend/context/AuthContext.tsx
frontend/context/TaskContext.tsx
frontend/context/TeamContext.tsx
frontend/types/
frontend/types/task.ts
frontend/types/user.ts
frontend/types/team.ts
frontend/next.config.js
frontend/package.json
frontend/tsconfig.json
frontend/.env
frontend/README.md
```
"#;

pub fn document_path(workspace: &Path) -> PathBuf {
    workspace.join(DOCUMENT_NAME)
}

/// Writes `contents` as the structure document, replacing any previous one.
pub fn write_document(workspace: &Path, contents: &str) -> Result<PathBuf, IoError> {
    let path = document_path(workspace);

    fs::write(&path, contents)
        .map_err(|error| IoError::new(FileOperation::Write, path.clone(), error))?;

    log::debug!("wrote structure document to {}", path.display());

    Ok(path)
}

/// Reads the structure document back. `Ok(None)` means there is no document in the workspace.
pub fn read_document(workspace: &Path) -> Result<Option<String>, IoError> {
    let path = document_path(workspace);

    match fs::read_to_string(&path) {
        Ok(contents) => Ok(Some(contents)),
        Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
        Err(error) => Err(IoError::new(FileOperation::Read, path, error)),
    }
}

/// Returns the part of a structure document that holds the path listing.
///
/// That is the body of the first fenced code block, up to its closing fence or the end of the
/// text when the fence is never closed. Documents without a fence are a bare listing and are
/// returned whole.
pub fn extract_listing(document: &str) -> String {
    let mut lines = document.lines();

    if !lines.any(|line| line.trim_start().starts_with(FENCE)) {
        return document.to_string();
    }

    lines
        .take_while(|line| !line.trim_start().starts_with(FENCE))
        .collect::<Vec<_>>()
        .join("\n")
}
