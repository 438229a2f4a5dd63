use crate::{parser::PathList, utils::normalize_path};
use colored::Colorize;
use indexmap::IndexMap;
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Represents a node in the tree (either file or directory).
#[derive(Debug)]
struct TreeNode {
    name: String,
    children: Vec<Rc<RefCell<TreeNode>>>,
    is_file: bool,
    /// Listed as a file but also given children; materializing fails on its children.
    conflict: bool,
}
impl TreeNode {
    fn new(name: String, is_file: bool) -> Self {
        Self {
            name,
            children: Vec::new(),
            is_file,
            conflict: false,
        }
    }
}

/// Build the directory tree from the listing, returning the root node.
///
/// Parents that are not listed themselves are added as directories, the way materializing
/// would create them. Repeated entries appear once. A file that gains children is shown as a
/// directory and marked as a conflict.
fn build_tree(paths: &PathList, destination: &Path) -> Rc<RefCell<TreeNode>> {
    // root node represents the 'destination' directory
    let root_name = destination
        .file_name()
        .map(|os| os.to_string_lossy().to_string())
        .unwrap_or_else(|| destination.display().to_string());

    let root = Rc::new(RefCell::new(TreeNode::new(root_name, false)));

    // relative path to node, in first-seen order
    let mut lookup: IndexMap<PathBuf, Rc<RefCell<TreeNode>>> = IndexMap::new();
    lookup.insert(PathBuf::new(), Rc::clone(&root));

    for entry in paths {
        let relative = normalize_path(entry.as_str());
        let components: Vec<_> = relative.components().collect();

        let mut current = PathBuf::new();

        for (index, component) in components.iter().enumerate() {
            let parent = current.clone();
            current.push(component);

            if lookup.contains_key(&current) {
                continue;
            }

            let is_last = index + 1 == components.len();
            let is_file = is_last && !entry.is_directory();
            let name = component.as_os_str().to_string_lossy().to_string();
            let node = Rc::new(RefCell::new(TreeNode::new(name, is_file)));

            if let Some(parent_node) = lookup.get(&parent) {
                let mut parent_node = parent_node.borrow_mut();

                if parent_node.is_file {
                    log::warn!(
                        "'{}' is listed as a file but '{}' is listed under it",
                        parent.display(),
                        current.display()
                    );
                    parent_node.is_file = false;
                    parent_node.conflict = true;
                }

                parent_node.children.push(Rc::clone(&node));
            }

            lookup.insert(current.clone(), node);
        }
    }

    root
}

/// Print the tree with a nice ASCII style.
fn print_tree(node: &Rc<RefCell<TreeNode>>, prefix: &str, is_last: bool) {
    let node_borrow = node.borrow();

    let connector = if is_last {
        "└── ".yellow()
    } else {
        "├── ".yellow()
    };
    let name = if node_borrow.conflict {
        format!("{} (listed as a file)", node_borrow.name).red()
    } else if node_borrow.is_file {
        node_borrow.name.green()
    } else {
        node_borrow.name.blue()
    };
    println!("{}{}{}", prefix.yellow(), connector, name);

    let child_prefix = if is_last {
        format!("{}    ", prefix)
    } else {
        format!("{}│   ", prefix)
    };

    let len = node_borrow.children.len();
    for (i, child) in node_borrow.children.iter().enumerate() {
        let last = i == len - 1;
        print_tree(child, &child_prefix, last);
    }
}

pub fn preview_as_tree(paths: &PathList, destination: &Path) {
    let tree_root = build_tree(paths, destination);

    println!(
        "Legend: {} = (directory), {} = (file)",
        "blue".blue(),
        "green".green()
    );

    let fancy_prompt = format!(
        "{} {}\n",
        "┌─".bold().bright_blue(),
        "Preview".bold().bright_blue(),
    );

    println!("{}", fancy_prompt);

    print_tree(&tree_root, "", true);

    let fancy_prompt = format!(
        "\n{} {}\n",
        "└─".bold().bright_blue(),
        format!("{} entries", paths.len()).bright_green()
    );

    println!("{}", fancy_prompt);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_paths;

    fn names(node: &Rc<RefCell<TreeNode>>) -> Vec<(String, bool)> {
        node.borrow()
            .children
            .iter()
            .map(|child| {
                let child = child.borrow();
                (child.name.clone(), child.is_file)
            })
            .collect()
    }

    fn child(node: &Rc<RefCell<TreeNode>>, name: &str) -> Rc<RefCell<TreeNode>> {
        node.borrow()
            .children
            .iter()
            .find(|child| child.borrow().name == name)
            .map(Rc::clone)
            .unwrap_or_else(|| panic!("no child named {name}"))
    }

    #[test]
    fn test_tree_mirrors_listing() {
        let paths = parse_paths("a/\na/b.txt\nc.md\n");

        let root = build_tree(&paths, Path::new("/work/project"));

        assert_eq!(root.borrow().name, "project");
        assert_eq!(
            names(&root),
            vec![("a".to_string(), false), ("c.md".to_string(), true)]
        );
        assert_eq!(names(&child(&root, "a")), vec![("b.txt".to_string(), true)]);
    }

    #[test]
    fn test_tree_infers_missing_parents() {
        let paths = parse_paths("c/d/e.txt\n");

        let root = build_tree(&paths, Path::new("/work"));

        assert_eq!(names(&root), vec![("c".to_string(), false)]);
        let c = child(&root, "c");
        assert_eq!(names(&c), vec![("d".to_string(), false)]);
        assert_eq!(names(&child(&c, "d")), vec![("e.txt".to_string(), true)]);
    }

    #[test]
    fn test_file_with_children_is_flagged() {
        let paths = parse_paths("x\nx/y\n");

        let root = build_tree(&paths, Path::new("/work"));

        let x = child(&root, "x");
        assert!(!x.borrow().is_file);
        assert!(x.borrow().conflict);
        assert_eq!(names(&x), vec![("y".to_string(), true)]);
    }

    #[test]
    fn test_tree_collapses_repeated_entries() {
        let paths = parse_paths("src/\nsrc/\nsrc/lib.rs\nsrc/lib.rs\n");

        let root = build_tree(&paths, Path::new("/work"));

        assert_eq!(names(&child(&root, "src")), vec![("lib.rs".to_string(), true)]);
    }
}
