use std::path::{Component, Path, PathBuf};

/// Reduces a listing entry to a path that is safe to join onto a base directory.
///
/// Root and drive prefixes are dropped so `/etc/x` lands under the base like `etc/x` would,
/// `.` is skipped and `..` pops the previous component without ever climbing above the entry.
pub fn normalize_path(source: &str) -> PathBuf {
    let input = Path::new(source);

    let mut new_path = PathBuf::new();

    for component in input.components() {
        match component {
            Component::Prefix(_) | Component::RootDir | Component::CurDir => {}

            Component::ParentDir => {
                new_path.pop();
            }

            Component::Normal(part) => new_path.push(part),
        }
    }

    new_path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_keeps_plain_relative_paths() {
        assert_eq!(normalize_path("a/b/c.txt"), PathBuf::from("a/b/c.txt"));
        assert_eq!(normalize_path("a/b/"), PathBuf::from("a/b"));
    }

    #[test]
    fn test_normalize_skips_current_dir_markers() {
        assert_eq!(normalize_path("./a/./b"), PathBuf::from("a/b"));
    }

    #[test]
    fn test_normalize_parent_dir_stays_within_entry() {
        assert_eq!(normalize_path("a/../b"), PathBuf::from("b"));
        assert_eq!(normalize_path("../../escape.txt"), PathBuf::from("escape.txt"));
    }

    #[cfg(unix)]
    #[test]
    fn test_normalize_drops_root() {
        assert_eq!(normalize_path("/etc/passwd"), PathBuf::from("etc/passwd"));
        assert_eq!(normalize_path("/"), PathBuf::new());
    }
}
