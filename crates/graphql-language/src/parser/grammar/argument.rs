use crate::ast::Argument;
use crate::error::GraphQLError;
use crate::lexer::TokenKind;
use crate::node::Node;
use crate::parser::grammar::name;
use crate::parser::grammar::value;
use crate::parser::Parser;

/// See: <https://spec.graphql.org/October2021/#Arguments>
///
/// *Arguments* — a parenthesized, non-empty list when present.
pub(crate) fn arguments(
    p: &mut Parser,
    is_const: bool,
) -> Result<Vec<Node<Argument>>, GraphQLError> {
    p.optional_many(
        TokenKind::ParenL,
        |p| argument(p, is_const),
        TokenKind::ParenR,
    )
}

pub(crate) fn argument(p: &mut Parser, is_const: bool) -> Result<Node<Argument>, GraphQLError> {
    let start = p.current_id();
    let name = name::name(p)?;
    p.expect_token(TokenKind::Colon)?;
    let value = value::value(p, is_const)?;
    Ok(p.node(start, Argument { name, value }))
}
