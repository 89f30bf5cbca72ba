use crate::ast::Variable;
use crate::ast::VariableDefinition;
use crate::error::GraphQLError;
use crate::lexer::TokenKind;
use crate::node::Node;
use crate::parser::grammar::directive;
use crate::parser::grammar::name;
use crate::parser::grammar::ty;
use crate::parser::grammar::value;
use crate::parser::Parser;

/// See: <https://spec.graphql.org/October2021/#VariableDefinitions>
///
/// *VariableDefinitions* — a parenthesized, non-empty list when present.
pub(crate) fn variable_definitions(
    p: &mut Parser,
) -> Result<Vec<Node<VariableDefinition>>, GraphQLError> {
    p.optional_many(TokenKind::ParenL, variable_definition, TokenKind::ParenR)
}

/// *VariableDefinition* — `$name: Type (= constValue)? directives?`.
pub(crate) fn variable_definition(
    p: &mut Parser,
) -> Result<Node<VariableDefinition>, GraphQLError> {
    let start = p.current_id();
    let variable = variable(p)?;
    p.expect_token(TokenKind::Colon)?;
    let ty = ty::ty(p)?;
    let default_value = if p.expect_optional_token(TokenKind::Equals)? {
        Some(value::value(p, true)?)
    } else {
        None
    };
    let directives = directive::directives(p, true)?;
    Ok(p.node(
        start,
        VariableDefinition {
            variable,
            ty,
            default_value,
            directives,
        },
    ))
}

pub(crate) fn variable(p: &mut Parser) -> Result<Node<Variable>, GraphQLError> {
    let start = p.current_id();
    p.expect_token(TokenKind::Dollar)?;
    let name = name::name(p)?;
    Ok(p.node(start, Variable { name }))
}
