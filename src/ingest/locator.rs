use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use crate::config::UnrecognizedPolicy;
use crate::ingest::directory_tag::{log_kind, DirectoryTag, LogKind};
use crate::ingest::error::IngestError;

/// One directory visited by the walk, with its plain files in lexical order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocatedDirectory {
    pub path: PathBuf,
    pub tag: Option<DirectoryTag>,
    pub files: Vec<PathBuf>,
}

impl LocatedDirectory {
    pub fn kind(&self) -> LogKind {
        log_kind(self.tag.as_ref())
    }
}

/// Depth-first walk over a directory tree.
///
/// Every directory, the root included, is yielded exactly once. Siblings are visited in lexical
/// order of their names so that two walks over the same tree always agree.
pub struct LogLocator {
    pending: Vec<PathBuf>,
}

impl LogLocator {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        LogLocator {
            pending: vec![root.into()],
        }
    }

    fn visit(&mut self, directory: PathBuf) -> Result<LocatedDirectory, IngestError> {
        let tag = DirectoryTag::from_directory(&directory)?;
        let (mut subdirectories, files) = list_directory(&directory)?;

        // stack: push in reverse so the lexically first child is visited next
        subdirectories.reverse();
        self.pending.extend(subdirectories);

        Ok(LocatedDirectory {
            path: directory,
            tag,
            files,
        })
    }
}

impl Iterator for LogLocator {
    type Item = Result<LocatedDirectory, IngestError>;

    fn next(&mut self) -> Option<Self::Item> {
        let directory = self.pending.pop()?;
        let result = self.visit(directory);

        if result.is_err() {
            // fatal: stop the walk
            self.pending.clear();
        }

        Some(result)
    }
}

/// Returns the subdirectories and the files of `directory`, each sorted by name.
fn list_directory(directory: &Path) -> Result<(Vec<PathBuf>, Vec<PathBuf>), IngestError> {
    let entries = fs::read_dir(directory).map_err(|e| IngestError::io(directory, e))?;

    let mut subdirectories = vec![];
    let mut files = vec![];

    for entry in entries {
        let entry = entry.map_err(|e| IngestError::io(directory, e))?;
        let path = entry.path();
        let file_type = entry.file_type().map_err(|e| IngestError::io(&path, e))?;

        if file_type.is_dir() {
            subdirectories.push(path);
        } else if file_type.is_file() {
            files.push(path);
        } else if path.is_file() {
            // symlinked file; symlinked directories are not followed
            files.push(path);
        }
    }

    subdirectories.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok((subdirectories, files))
}

/// All log directories below a root, validated up front.
///
/// Building the plan walks the whole tree before a single log line is parsed, so an unknown bot
/// identity (or, under [`UnrecognizedPolicy::Error`], a misnamed directory) stops the run early.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DirectoryPlan {
    pub directories: Vec<LocatedDirectory>,
    pub skipped: Vec<PathBuf>,
}

impl DirectoryPlan {
    pub fn scan(root: &Path, policy: UnrecognizedPolicy) -> Result<DirectoryPlan, IngestError> {
        let mut plan = DirectoryPlan::default();

        for located in LogLocator::new(root) {
            let located = located?;

            if located.kind() != LogKind::Unrecognized {
                debug!(directory = %located.path.display(), kind = %located.kind(), files = located.files.len(), "Found log directory");
                plan.directories.push(located);
                continue;
            }

            // directories holding nothing but other directories never carry data
            if located.files.is_empty() {
                continue;
            }

            match policy {
                UnrecognizedPolicy::Silent => {},
                UnrecognizedPolicy::Warn => warn!(
                    directory = %located.path.display(),
                    files = located.files.len(),
                    "Skipping directory: name does not follow `<P1>_<P2>_<logs|enginelogs>`"
                ),
                UnrecognizedPolicy::Error => return Err(IngestError::UnrecognizedDirectoryName {
                    path: located.path,
                }),
            }

            plan.skipped.push(located.path);
        }

        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use tempfile::TempDir;
    use super::*;

    fn touch(path: &Path) {
        fs::write(path, "h\n").unwrap();
    }

    #[test]
    fn walk_is_lexical_and_depth_first() {
        let root = TempDir::new().unwrap();
        for directory in ["b", "a", "a/II_R_logs", "a/I_R_logs", "c_unused"] {
            fs::create_dir_all(root.path().join(directory)).unwrap();
        }
        touch(&root.path().join("a/I_R_logs/z.csv"));
        touch(&root.path().join("a/I_R_logs/b.csv"));

        let visited = LogLocator::new(root.path())
            .map(|x| x.unwrap())
            .collect::<Vec<_>>();

        let relative = visited.iter()
            .map(|x| x.path.strip_prefix(root.path()).unwrap().to_string_lossy().replace('\\', "/"))
            .collect::<Vec<_>>();
        assert_eq!(relative, vec!["", "a", "a/II_R_logs", "a/I_R_logs", "b", "c_unused"]);

        let files = visited[3].files.iter()
            .map(|x| x.file_name().unwrap().to_string_lossy().to_string())
            .collect::<Vec<_>>();
        assert_eq!(files, vec!["b.csv", "z.csv"]);
    }

    #[test]
    fn plan_skips_and_errors_per_policy() {
        let root = TempDir::new().unwrap();
        fs::create_dir_all(root.path().join("I_R_logs")).unwrap();
        fs::create_dir_all(root.path().join("typo_logs")).unwrap();
        touch(&root.path().join("I_R_logs/basic_1.csv"));
        touch(&root.path().join("typo_logs/basic_1.csv"));

        let plan = DirectoryPlan::scan(root.path(), UnrecognizedPolicy::Warn).unwrap();
        assert_eq!(plan.directories.len(), 1);
        assert_eq!(plan.skipped, vec![root.path().join("typo_logs")]);

        let plan = DirectoryPlan::scan(root.path(), UnrecognizedPolicy::Silent).unwrap();
        assert_eq!(plan.skipped.len(), 1);

        let result = DirectoryPlan::scan(root.path(), UnrecognizedPolicy::Error);
        assert!(matches!(result, Err(IngestError::UnrecognizedDirectoryName { .. })));
    }

    #[test]
    fn plan_fails_on_unknown_code() {
        let root = TempDir::new().unwrap();
        fs::create_dir_all(root.path().join("I_X_logs")).unwrap();

        let result = DirectoryPlan::scan(root.path(), UnrecognizedPolicy::Silent);
        assert!(matches!(result, Err(IngestError::UnknownIdentityCode { .. })));
    }
}
