use crate::ast::Directive;
use crate::ast::DirectiveDefinition;
use crate::ast::DirectiveLocation;
use crate::error::GraphQLError;
use crate::lexer::TokenKind;
use crate::node::Node;
use crate::parser::grammar::argument;
use crate::parser::grammar::description;
use crate::parser::grammar::input;
use crate::parser::grammar::name;
use crate::parser::Parser;

/// See: <https://spec.graphql.org/October2021/#Directives>
///
/// *Directives* — zero or more `@name(arguments)`.
pub(crate) fn directives(
    p: &mut Parser,
    is_const: bool,
) -> Result<Vec<Node<Directive>>, GraphQLError> {
    let mut directives = Vec::new();
    while p.peek(TokenKind::At) {
        directives.push(directive(p, is_const)?);
    }
    Ok(directives)
}

pub(crate) fn directive(p: &mut Parser, is_const: bool) -> Result<Node<Directive>, GraphQLError> {
    let start = p.current_id();
    p.expect_token(TokenKind::At)?;
    let name = name::name(p)?;
    let arguments = argument::arguments(p, is_const)?;
    Ok(p.node(start, Directive { name, arguments }))
}

/// See: <https://spec.graphql.org/October2021/#DirectiveDefinition>
///
/// *DirectiveDefinition* —
/// `directive @name argumentsDefinition? repeatable? on locations`.
pub(crate) fn directive_definition(
    p: &mut Parser,
) -> Result<Node<DirectiveDefinition>, GraphQLError> {
    let start = p.current_id();
    let description = description::description(p)?;
    p.expect_keyword("directive")?;
    p.expect_token(TokenKind::At)?;
    let name = name::name(p)?;
    let arguments = input::arguments_definition(p)?;
    let repeatable = p.expect_optional_keyword("repeatable")?;
    p.expect_keyword("on")?;
    let locations = p.delimited_many(TokenKind::Pipe, directive_location)?;
    Ok(p.node(
        start,
        DirectiveDefinition {
            description,
            name,
            arguments,
            repeatable,
            locations,
        },
    ))
}

/// One of the nineteen execution or type-system locations; anything else is
/// reported at the name's start token.
fn directive_location(p: &mut Parser) -> Result<DirectiveLocation, GraphQLError> {
    let start = p.current_id();
    let name = name::name(p)?;
    DirectiveLocation::from_name(&name).ok_or_else(|| p.unexpected(Some(start)))
}
