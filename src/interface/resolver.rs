use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use tracing::debug;

use super::ast::Import;
use super::{generate, Options};
use crate::error::{InterfaceError, Result};

/// Reads the source text of an imported file.
pub trait SourceLoader {
    fn load(&self, path: &Path) -> io::Result<String>;
}

/// Loads imports from the local file system.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsLoader;

impl SourceLoader for FsLoader {
    fn load(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }
}

impl<F> SourceLoader for F
where
    F: Fn(&Path) -> io::Result<String>,
{
    fn load(&self, path: &Path) -> io::Result<String> {
        self(path)
    }
}

/// File name of an import path without directories or extension.
pub fn import_stem(path: &str) -> Option<&str> {
    Path::new(path).file_stem().and_then(|stem| stem.to_str())
}

/// Lexically removes `.` and `..` components so the same file reached
/// through different relative paths compares equal.
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !normalized.pop() {
                    normalized.push(component);
                }
            }
            other => normalized.push(other),
        }
    }
    normalized
}

/// Generates stubs for every import that names one of `bases`.
///
/// Each matching file is loaded relative to the import root and run through
/// the pipeline in stubs-only mode. `stack` holds the files currently being
/// resolved, used to reject cyclic imports.
pub(crate) fn resolve_inherited(
    imports: &[&Import],
    bases: &[String],
    options: &Options,
    loader: &dyn SourceLoader,
    stack: &mut Vec<PathBuf>,
) -> Result<Vec<String>> {
    let nested_options = Options {
        import_root: options.import_root.clone(),
        stubs_only: true,
    };
    let mut blocks = Vec::new();

    for import in imports {
        let inherited = import_stem(&import.path)
            .map(|stem| bases.iter().any(|base| base == stem))
            .unwrap_or(false);
        if !inherited {
            debug!("Skipping import {}, not a base contract", import.path);
            continue;
        }

        let path = normalize(&options.import_root.join(&import.path));
        if stack.contains(&path) {
            return Err(InterfaceError::CyclicImport { path });
        }

        debug!("Resolving inherited import {}", path.display());
        let source = loader
            .load(&path)
            .map_err(|source| InterfaceError::ImportRead {
                path: path.clone(),
                source,
            })?;

        stack.push(path);
        let stubs = generate(&source, &nested_options, loader, stack);
        stack.pop();

        let stubs = stubs?;
        if !stubs.is_empty() {
            blocks.push(stubs);
        }
    }

    Ok(blocks)
}
