use crate::document::DOCUMENT_NAME;
use std::{fmt, path::Path};

/// Entry points offered at the top of the structure document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LensAction {
    Accept,
    Reject,
}
impl LensAction {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Accept => "Accept Folder Structure",
            Self::Reject => "Reject Folder Structure",
        }
    }
    pub fn tooltip(&self) -> &'static str {
        match self {
            Self::Accept => "Parse this file and create the folders/files.",
            Self::Reject => "Cancel folder structure creation.",
        }
    }
}
impl fmt::Display for LensAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// Lenses for `document`: accept then reject when its file name is exactly the structure
/// document's, nothing otherwise.
pub fn provide_lenses(document: &Path) -> Vec<LensAction> {
    let is_structure_document = document
        .file_name()
        .is_some_and(|name| name == DOCUMENT_NAME);

    if is_structure_document {
        vec![LensAction::Accept, LensAction::Reject]
    } else {
        vec![]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lenses_for_structure_document() {
        let lenses = provide_lenses(Path::new("/work/folder-structure.md"));

        assert_eq!(lenses, vec![LensAction::Accept, LensAction::Reject]);
        assert_eq!(lenses[0].to_string(), "Accept Folder Structure");
        assert_eq!(lenses[1].to_string(), "Reject Folder Structure");
        assert_eq!(
            lenses[0].tooltip(),
            "Parse this file and create the folders/files."
        );
    }

    #[test]
    fn test_no_lenses_for_other_documents() {
        assert!(provide_lenses(Path::new("/work/README.md")).is_empty());
        assert!(provide_lenses(Path::new("/work/my-folder-structure.md")).is_empty());
        assert!(provide_lenses(Path::new("/work/folder-structure.md.bak")).is_empty());
        assert!(provide_lenses(Path::new("/work/Folder-Structure.md")).is_empty());
    }

    #[test]
    fn test_lenses_ignore_parent_directories() {
        assert_eq!(
            provide_lenses(Path::new("nested/dir/folder-structure.md")).len(),
            2
        );
        assert!(provide_lenses(Path::new("folder-structure.md/notes.txt")).is_empty());
    }
}
