use pest::iterators::Pair;
use pest::Parser;
use pest_derive::Parser;
use tracing::trace;

use crate::error::Result;
use crate::interface::ast::*;

#[derive(Parser)]
#[grammar = "parser/solidity.pest"]
pub struct SolidityParser;

/// Parses a Solidity source file into the normalized syntax tree.
///
/// Bodies, initializers and constructor arguments are skipped, only the
/// declaration surface is kept. Every node records its byte span so callers
/// can slice the original text.
pub fn parse(source: &str) -> Result<SourceUnit> {
    let mut pairs = SolidityParser::parse(Rule::source_unit, source).map_err(Box::new)?;

    let mut unit = SourceUnit::default();
    let root = match pairs.next() {
        Some(root) => root,
        None => return Ok(unit),
    };

    for item in root.into_inner() {
        match item.as_rule() {
            Rule::pragma_directive => {
                trace!("Found pragma directive");
                unit.items.push(SourceItem::Pragma(Pragma { span: span_of(&item) }));
            }
            Rule::import_directive => {
                let import = parse_import(item);
                trace!("Found import of {}", import.path);
                unit.items.push(SourceItem::Import(import));
            }
            Rule::contract_definition => {
                let contract = parse_contract(item);
                trace!("Found {:?} {}", contract.kind, contract.name);
                unit.items.push(SourceItem::Contract(contract));
            }
            Rule::EOI => {}
            _ => unit.items.push(SourceItem::Other(span_of(&item))),
        }
    }

    Ok(unit)
}

fn span_of(pair: &Pair<Rule>) -> Span {
    let span = pair.as_span();
    Span::new(span.start(), span.end())
}

fn unquote(literal: &str) -> String {
    let mut chars = literal.chars();
    chars.next();
    chars.next_back();
    chars.as_str().to_string()
}

fn parse_import(pair: Pair<Rule>) -> Import {
    let span = span_of(&pair);
    let path = pair
        .into_inner()
        .find(|p| p.as_rule() == Rule::import_path)
        .map(|p| unquote(p.as_str().trim()))
        .unwrap_or_default();
    Import { path, span }
}

fn parse_contract(pair: Pair<Rule>) -> Contract {
    let mut contract = Contract {
        kind: ContractKind::Contract,
        name: String::new(),
        bases: Vec::new(),
        body: Vec::new(),
        span: span_of(&pair),
    };

    for item in pair.into_inner() {
        match item.as_rule() {
            Rule::contract_kind => {
                contract.kind = match item.as_str() {
                    "library" => ContractKind::Library,
                    "interface" => ContractKind::Interface,
                    _ => ContractKind::Contract,
                };
            }
            Rule::identifier => {
                contract.name = item.as_str().to_string();
            }
            Rule::inheritance_list => {
                for specifier in item.into_inner() {
                    if specifier.as_rule() != Rule::inheritance_specifier {
                        continue;
                    }
                    if let Some(base) = specifier
                        .into_inner()
                        .find(|p| p.as_rule() == Rule::user_type_name)
                    {
                        contract.bases.push(base.as_str().to_string());
                    }
                }
            }
            Rule::function_definition => {
                contract.body.push(Member::Function(parse_function(item)));
            }
            Rule::state_variable_declaration => {
                contract.body.push(Member::Variable(parse_state_variable(item)));
            }
            Rule::enum_definition => {
                contract.body.push(Member::Enum(parse_enum(item)));
            }
            _ => {
                let rule = item.as_rule();
                if is_contract_part(rule) {
                    contract.body.push(Member::Other(span_of(&item)));
                }
            }
        }
    }

    contract
}

fn is_contract_part(rule: Rule) -> bool {
    matches!(
        rule,
        Rule::using_directive
            | Rule::struct_definition
            | Rule::event_definition
            | Rule::error_definition
            | Rule::modifier_definition
    )
}

fn parse_function(pair: Pair<Rule>) -> Function {
    let span = span_of(&pair);
    let mut function = Function {
        kind: FunctionKind::Function,
        name: None,
        params: Vec::new(),
        params_span: Span::new(span.start, span.start),
        modifiers: Vec::new(),
        span,
    };

    for item in pair.into_inner() {
        match item.as_rule() {
            Rule::function_head => {
                for token in item.into_inner() {
                    match token.as_rule() {
                        Rule::identifier => function.name = Some(token.as_str().to_string()),
                        Rule::kw_constructor => function.kind = FunctionKind::Constructor,
                        Rule::kw_fallback => function.kind = FunctionKind::Fallback,
                        Rule::kw_receive => function.kind = FunctionKind::Receive,
                        _ => {}
                    }
                }
            }
            Rule::parameter_list => {
                function.params_span = span_of(&item);
                function.params = parse_parameters(item);
            }
            Rule::returns_clause => {
                function.modifiers.push(Modifier {
                    name: "returns".to_string(),
                    span: span_of(&item),
                });
            }
            Rule::modifier_invocation => {
                let span = span_of(&item);
                let name = item
                    .into_inner()
                    .find(|p| p.as_rule() == Rule::user_type_name)
                    .map(|p| p.as_str().to_string())
                    .unwrap_or_default();
                function.modifiers.push(Modifier { name, span });
            }
            _ => {}
        }
    }

    function
}

fn parse_parameters(pair: Pair<Rule>) -> Vec<Parameter> {
    let mut params = Vec::new();

    for param in pair.into_inner() {
        if param.as_rule() != Rule::parameter {
            continue;
        }
        let span = span_of(&param);
        let mut type_name = None;
        let mut name = None;
        for token in param.into_inner() {
            match token.as_rule() {
                Rule::type_name => type_name = Some(parse_type_name(token)),
                Rule::identifier => name = Some(token.as_str().to_string()),
                _ => {}
            }
        }
        if let Some(type_name) = type_name {
            params.push(Parameter { type_name, name, span });
        }
    }

    params
}

fn parse_type_name(pair: Pair<Rule>) -> TypeName {
    let literal = pair.as_str().trim().to_string();

    let mapping = pair
        .into_inner()
        .next()
        .filter(|p| p.as_rule() == Rule::mapping_type);

    if let Some(mapping) = mapping {
        let mut types = mapping
            .into_inner()
            .filter(|p| p.as_rule() == Rule::type_name)
            .map(parse_type_name);
        if let (Some(key), Some(value)) = (types.next(), types.next()) {
            return TypeName::Mapping {
                key: Box::new(key),
                value: Box::new(value),
                literal,
            };
        }
    }

    TypeName::Named { literal }
}

fn parse_state_variable(pair: Pair<Rule>) -> Variable {
    let span = span_of(&pair);
    let mut type_name = None;
    let mut name = String::new();
    let mut is_public = false;
    let mut is_constant = false;

    for token in pair.into_inner() {
        match token.as_rule() {
            Rule::type_name => type_name = Some(parse_type_name(token)),
            Rule::state_variable_attribute => match token.as_str() {
                "public" => is_public = true,
                "constant" => is_constant = true,
                _ => {}
            },
            Rule::identifier => {
                if name.is_empty() {
                    name = token.as_str().to_string();
                }
            }
            _ => {}
        }
    }

    Variable {
        name,
        type_name: type_name.unwrap_or(TypeName::Named {
            literal: String::new(),
        }),
        is_public,
        is_constant,
        span,
    }
}

fn parse_enum(pair: Pair<Rule>) -> EnumDefinition {
    let span = span_of(&pair);
    let mut identifiers = pair
        .into_inner()
        .filter(|p| p.as_rule() == Rule::identifier)
        .map(|p| p.as_str().to_string());
    let name = identifiers.next().unwrap_or_default();
    EnumDefinition {
        name,
        values: identifiers.collect(),
        span,
    }
}
