pub mod ast;
pub mod classifier;
pub mod resolver;

use std::env;
use std::path::PathBuf;

use tracing::debug;

use crate::error::Result;
use crate::generator::{self, EnumSubstitution, NON_CUSTOM_MODIFIERS};
use crate::parser;
use resolver::{FsLoader, SourceLoader};

#[derive(Debug, Clone)]
pub struct Options {
    /// Directory relative import paths are resolved against.
    pub import_root: PathBuf,
    /// Return only the indented stub lines, without pragma or contract wrapper.
    pub stubs_only: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            import_root: env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            stubs_only: false,
        }
    }
}

impl Options {
    pub fn with_import_root(mut self, import_root: impl Into<PathBuf>) -> Self {
        self.import_root = import_root.into();
        self
    }

    pub fn with_stubs_only(mut self, stubs_only: bool) -> Self {
        self.stubs_only = stubs_only;
        self
    }
}

/// Generates the interface contract for `source`, reading inherited imports
/// through `loader`.
pub fn generate_interface(
    source: &str,
    options: &Options,
    loader: &dyn SourceLoader,
) -> Result<String> {
    let mut stack = Vec::new();
    generate(source, options, loader, &mut stack)
}

/// Same as [`generate_interface`] with imports read from disk.
pub fn generate_interface_from_fs(source: &str, options: &Options) -> Result<String> {
    generate_interface(source, options, &FsLoader)
}

pub(crate) fn generate(
    source: &str,
    options: &Options,
    loader: &dyn SourceLoader,
    stack: &mut Vec<PathBuf>,
) -> Result<String> {
    let unit = parser::parse(source)?;
    let located = classifier::locate(&unit, source)?;
    let declarations = classifier::classify(located.contract);

    let enums = EnumSubstitution::new(declarations.enums.iter().map(|e| e.name.as_str()))?;

    let inherited = resolver::resolve_inherited(
        &located.imports,
        &located.contract.bases,
        options,
        loader,
        stack,
    )?;
    debug!(
        "Resolved {} inherited stub blocks for {}",
        inherited.len(),
        located.contract.name
    );

    let stubs = generator::render_stubs(
        source,
        &declarations,
        inherited,
        NON_CUSTOM_MODIFIERS,
        &enums,
    );

    Ok(generator::assemble(
        located.pragma,
        &located.contract.name,
        &stubs,
        options.stubs_only,
    ))
}
