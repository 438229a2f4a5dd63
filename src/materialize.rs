use crate::{
    errors::{FileOperation, IoError},
    parser::PathList,
    utils::normalize_path,
};
use colored::Colorize;
use std::{
    fs::{self, OpenOptions},
    io::ErrorKind,
    path::{Path, PathBuf},
};

/// What a single [`materialize`] pass did, in creation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaterializeReport {
    pub created_directories: Vec<PathBuf>,
    pub created_files: Vec<PathBuf>,
    /// Entries that were already present and left untouched.
    pub existing: Vec<PathBuf>,
}
impl MaterializeReport {
    pub fn created_count(&self) -> usize {
        self.created_directories.len() + self.created_files.len()
    }
}

/// Creates every entry of `paths` under `base`.
///
/// Directory entries are created together with their missing ancestors. File entries get their
/// missing ancestors and then an empty file, unless something already exists at the target, in
/// which case it is left as is.
///
/// # Errors
///
/// Returns an [`IoError`] on the first filesystem failure. Entries created before the failure
/// are not removed.
pub fn materialize(base: &Path, paths: &PathList) -> Result<MaterializeReport, IoError> {
    let mut report = MaterializeReport::default();

    for entry in paths {
        // `base.join("")` would add a trailing separator, so entries like `.` resolve to `base`
        let relative = normalize_path(entry.as_str());
        let target = if relative.as_os_str().is_empty() {
            base.to_path_buf()
        } else {
            base.join(relative)
        };

        log::debug!("materializing '{}' at {}", entry, target.display());

        if entry.is_directory() {
            if !create_directory(&target, &mut report)? {
                mark_existing(&target, &mut report);
            }
        } else {
            if let Some(parent) = target.parent() {
                create_directory(parent, &mut report)?;
            }

            create_empty_file(&target, &mut report)?;
        }
    }

    Ok(report)
}
/// Creates `path` and all of its missing ancestors, recording each one created.
///
/// Returns `false` when `path` already existed.
fn create_directory(path: &Path, report: &mut MaterializeReport) -> Result<bool, IoError> {
    let missing: Vec<PathBuf> = path
        .ancestors()
        .take_while(|ancestor| !ancestor.as_os_str().is_empty() && !ancestor.exists())
        .map(Path::to_path_buf)
        .collect();

    if missing.is_empty() {
        return Ok(false);
    }

    fs::create_dir_all(path)
        .map_err(|error| IoError::new(FileOperation::Mkdir, path.into(), error))?;

    for directory in missing.into_iter().rev() {
        println!("{} {}", "create".green(), directory.display());

        report.created_directories.push(directory);
    }

    Ok(true)
}
/// Creates an empty file at `path` unless something is already there.
fn create_empty_file(path: &Path, report: &mut MaterializeReport) -> Result<(), IoError> {
    match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(_) => {
            println!("{} {}", "create".green(), path.display());

            report.created_files.push(path.to_path_buf());

            Ok(())
        }
        Err(error) if error.kind() == ErrorKind::AlreadyExists => {
            mark_existing(path, report);

            Ok(())
        }
        Err(error) => Err(IoError::new(FileOperation::Create, path.into(), error)),
    }
}
fn mark_existing(path: &Path, report: &mut MaterializeReport) {
    println!("{} {}", "exists".yellow(), path.display());

    report.existing.push(path.to_path_buf());
}
