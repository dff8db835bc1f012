/// Byte range of a node in the original source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    /// Verbatim source text covered by this span.
    pub fn slice<'s>(&self, source: &'s str) -> &'s str {
        &source[self.start..self.end]
    }
}

#[derive(Debug, Default)]
pub struct SourceUnit {
    pub items: Vec<SourceItem>,
}

#[derive(Debug)]
pub enum SourceItem {
    Pragma(Pragma),
    Import(Import),
    Contract(Contract),
    Other(Span),
}

#[derive(Debug)]
pub struct Pragma {
    pub span: Span,
}

#[derive(Debug)]
pub struct Import {
    /// Path as written in the import statement, without quotes.
    pub path: String,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractKind {
    Contract,
    Library,
    Interface,
}

#[derive(Debug)]
pub struct Contract {
    pub kind: ContractKind,
    pub name: String,
    /// Names listed in the `is` clause, in order.
    pub bases: Vec<String>,
    pub body: Vec<Member>,
    pub span: Span,
}

#[derive(Debug)]
pub enum Member {
    Function(Function),
    Variable(Variable),
    Enum(EnumDefinition),
    Other(Span),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionKind {
    Function,
    Constructor,
    Fallback,
    Receive,
}

#[derive(Debug)]
pub struct Function {
    pub kind: FunctionKind,
    /// `None` for the unnamed fallback function.
    pub name: Option<String>,
    pub params: Vec<Parameter>,
    /// Span of the parenthesized parameter list, parentheses included.
    pub params_span: Span,
    pub modifiers: Vec<Modifier>,
    pub span: Span,
}

#[derive(Debug)]
pub struct Parameter {
    pub type_name: TypeName,
    pub name: Option<String>,
    pub span: Span,
}

/// A token following the parameter list: visibility, mutability, a custom
/// modifier invocation or the `returns (...)` clause.
#[derive(Debug)]
pub struct Modifier {
    pub name: String,
    pub span: Span,
}

#[derive(Debug)]
pub struct Variable {
    pub name: String,
    pub type_name: TypeName,
    pub is_public: bool,
    pub is_constant: bool,
    pub span: Span,
}

#[derive(Debug)]
pub struct EnumDefinition {
    pub name: String,
    pub values: Vec<String>,
    pub span: Span,
}

#[derive(Debug)]
pub enum TypeName {
    Named {
        literal: String,
    },
    Mapping {
        key: Box<TypeName>,
        value: Box<TypeName>,
        literal: String,
    },
}

impl TypeName {
    pub fn literal(&self) -> &str {
        match self {
            TypeName::Named { literal } => literal,
            TypeName::Mapping { literal, .. } => literal,
        }
    }

    pub fn is_mapping(&self) -> bool {
        matches!(self, TypeName::Mapping { .. })
    }

    /// Type returned by the getter of a public variable of this type.
    /// Mappings only unwrap one level: a nested mapping yields its literal.
    pub fn getter_literal(&self) -> &str {
        match self {
            TypeName::Named { literal } => literal,
            TypeName::Mapping { value, .. } => value.literal(),
        }
    }
}
