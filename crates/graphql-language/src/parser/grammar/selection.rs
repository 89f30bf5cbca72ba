use crate::ast::Field;
use crate::ast::Selection;
use crate::ast::SelectionSet;
use crate::error::GraphQLError;
use crate::lexer::TokenKind;
use crate::node::Node;
use crate::parser::grammar::argument;
use crate::parser::grammar::directive;
use crate::parser::grammar::fragment;
use crate::parser::grammar::name;
use crate::parser::Parser;

/// See: <https://spec.graphql.org/October2021/#SelectionSet>
///
/// *SelectionSet* — `{` with at least one selection, then `}`.
pub(crate) fn selection_set(p: &mut Parser) -> Result<Node<SelectionSet>, GraphQLError> {
    let start = p.current_id();
    let selections = p.many(TokenKind::BraceL, selection, TokenKind::BraceR)?;
    Ok(p.node(start, SelectionSet { selections }))
}

pub(crate) fn selection(p: &mut Parser) -> Result<Selection, GraphQLError> {
    if p.peek(TokenKind::Spread) {
        fragment::fragment(p)
    } else {
        Ok(Selection::Field(field(p)?))
    }
}

/// See: <https://spec.graphql.org/October2021/#Field>
///
/// *Field* — `alias: name(arguments) directives selectionSet`, all but the
/// name optional.
pub(crate) fn field(p: &mut Parser) -> Result<Node<Field>, GraphQLError> {
    let start = p.current_id();
    let name_or_alias = name::name(p)?;
    let (alias, name) = if p.expect_optional_token(TokenKind::Colon)? {
        (Some(name_or_alias), name::name(p)?)
    } else {
        (None, name_or_alias)
    };
    let arguments = argument::arguments(p, false)?;
    let directives = directive::directives(p, false)?;
    let selection_set = if p.peek(TokenKind::BraceL) {
        Some(selection_set(p)?)
    } else {
        None
    };
    Ok(p.node(
        start,
        Field {
            alias,
            name,
            arguments,
            directives,
            selection_set,
        },
    ))
}
