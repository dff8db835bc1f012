use tracing::debug;

use super::ast::*;
use crate::error::{InterfaceError, Result};

/// The parts of a source unit the interface is built from.
#[derive(Debug)]
pub struct Located<'a> {
    /// Verbatim pragma statement including its `;`, or empty.
    pub pragma: &'a str,
    pub contract: &'a Contract,
    pub imports: Vec<&'a Import>,
}

/// Members of a contract split by what the interface does with them.
/// Each list keeps source order.
#[derive(Debug, Default)]
pub struct Declarations<'a> {
    pub functions: Vec<&'a Function>,
    pub variables: Vec<&'a Variable>,
    pub enums: Vec<&'a EnumDefinition>,
}

/// Finds the first pragma and the first `contract` declaration.
pub fn locate<'a>(unit: &'a SourceUnit, source: &'a str) -> Result<Located<'a>> {
    let pragma = unit
        .items
        .iter()
        .find_map(|item| match item {
            SourceItem::Pragma(pragma) => Some(pragma.span.slice(source)),
            _ => None,
        })
        .unwrap_or("");

    let contract = unit
        .items
        .iter()
        .find_map(|item| match item {
            SourceItem::Contract(contract) if contract.kind == ContractKind::Contract => {
                Some(contract)
            }
            _ => None,
        })
        .ok_or(InterfaceError::MissingContract)?;

    let imports = unit
        .items
        .iter()
        .filter_map(|item| match item {
            SourceItem::Import(import) => Some(import),
            _ => None,
        })
        .collect();

    debug!("Located contract {}", contract.name);
    Ok(Located {
        pragma,
        contract,
        imports,
    })
}

/// A function is public unless it is marked `private` or `internal`.
pub fn is_public(function: &Function) -> bool {
    !function
        .modifiers
        .iter()
        .any(|m| m.name == "private" || m.name == "internal")
}

fn is_constructor(function: &Function, contract: &Contract) -> bool {
    function.kind == FunctionKind::Constructor
        || function.name.as_deref() == Some(contract.name.as_str())
}

pub fn classify(contract: &Contract) -> Declarations<'_> {
    let mut declarations = Declarations::default();

    for member in &contract.body {
        match member {
            Member::Function(function) => {
                // constructor, fallback and receive never reach the interface
                if function.kind != FunctionKind::Function
                    || function.name.is_none()
                    || is_constructor(function, contract)
                {
                    continue;
                }
                if is_public(function) {
                    declarations.functions.push(function);
                }
            }
            Member::Variable(variable) => {
                if variable.is_public {
                    declarations.variables.push(variable);
                }
            }
            Member::Enum(definition) => declarations.enums.push(definition),
            Member::Other(_) => {}
        }
    }

    debug!(
        "Classified {}: {} functions, {} public variables, {} enums",
        contract.name,
        declarations.functions.len(),
        declarations.variables.len(),
        declarations.enums.len()
    );
    declarations
}
