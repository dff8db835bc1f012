pub mod enums;

use tracing::debug;

use crate::interface::ast::{Function, Span, Variable};
use crate::interface::classifier::Declarations;
pub use enums::{EnumSubstitution, ENUM_PRIMITIVE};

/// Tokens that may follow a parameter list without being a custom modifier.
/// Anything else is a modifier invocation and is dropped from stubs.
pub const NON_CUSTOM_MODIFIERS: &[&str] =
    &["constant", "payable", "public", "private", "internal", "returns"];

const INDENT: &str = "  ";
const INHERITED_MARKER: &str = "// inherited";

/// Rendered stub lines of one contract, in output order.
#[derive(Debug, Default)]
pub struct StubBlock {
    /// Stubs-only output of each resolved base contract.
    pub inherited: Vec<String>,
    pub getters: Vec<String>,
    pub functions: Vec<String>,
}

impl StubBlock {
    pub fn is_empty(&self) -> bool {
        self.inherited.is_empty() && self.getters.is_empty() && self.functions.is_empty()
    }

    pub fn render(&self) -> String {
        let mut lines: Vec<&str> = Vec::new();
        let marker = format!("{}{}", INDENT, INHERITED_MARKER);
        if !self.inherited.is_empty() {
            lines.push(marker.as_str());
            lines.extend(self.inherited.iter().map(String::as_str));
        }
        lines.extend(self.getters.iter().map(String::as_str));
        lines.extend(self.functions.iter().map(String::as_str));
        lines.join("\n")
    }
}

pub fn render_stubs(
    source: &str,
    declarations: &Declarations,
    inherited: Vec<String>,
    keep: &[&str],
    enums: &EnumSubstitution,
) -> StubBlock {
    let getters = declarations
        .variables
        .iter()
        .map(|variable| render_getter(variable, enums))
        .collect();
    let functions = declarations
        .functions
        .iter()
        .map(|function| render_function(source, function, keep, enums))
        .collect();

    let stubs = StubBlock {
        inherited,
        getters,
        functions,
    };
    debug!(
        "Rendered {} getter and {} function stubs",
        stubs.getters.len(),
        stubs.functions.len()
    );
    stubs
}

/// Renders a function as a bodiless declaration, keeping the original text
/// of its name and parameters.
pub fn render_function(
    source: &str,
    function: &Function,
    keep: &[&str],
    enums: &EnumSubstitution,
) -> String {
    let name_and_params = if function.params.is_empty() {
        format!("function {}()", function.name.as_deref().unwrap_or_default())
    } else {
        let head = Span::new(function.span.start, function.params_span.end);
        enums.apply(head.slice(source)).into_owned()
    };

    let modifiers: Vec<String> = function
        .modifiers
        .iter()
        .filter(|modifier| keep.contains(&modifier.name.as_str()))
        .map(|modifier| enums.apply(modifier.span.slice(source).trim()).into_owned())
        .collect();

    if modifiers.is_empty() {
        format!("{}{};", INDENT, name_and_params)
    } else {
        format!("{}{} {};", INDENT, name_and_params, modifiers.join(" "))
    }
}

/// Renders the implicit getter of a public state variable.
pub fn render_getter(variable: &Variable, enums: &EnumSubstitution) -> String {
    format!(
        "{}function {}() public constant returns({});",
        INDENT,
        variable.name,
        enums.apply(variable.type_name.getter_literal())
    )
}

/// Builds the final text: the pragma, the `I<Name>` contract and its stubs.
/// In stubs-only mode just the stub lines are returned.
pub fn assemble(pragma: &str, contract_name: &str, stubs: &StubBlock, stubs_only: bool) -> String {
    let body = stubs.render();
    if stubs_only {
        return body;
    }

    let mut output = String::new();
    if !pragma.is_empty() {
        output.push_str(pragma);
        output.push_str("\n\n");
    }
    output.push_str(&format!("contract I{} {{\n", contract_name));
    if !stubs.is_empty() {
        output.push_str(&body);
        output.push('\n');
    }
    output.push('}');
    output
}
