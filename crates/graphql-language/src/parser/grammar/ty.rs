use crate::ast::ListType;
use crate::ast::NamedType;
use crate::ast::NonNullType;
use crate::ast::NullableType;
use crate::ast::Type;
use crate::error::GraphQLError;
use crate::lexer::TokenKind;
use crate::node::Node;
use crate::parser::grammar::name;
use crate::parser::Parser;

/// See: <https://spec.graphql.org/October2021/#Type>
///
/// *Type* — a named or list type with an optional `!` wrapper. A `!` can
/// only follow a named or list type, which [`NullableType`] guarantees.
pub(crate) fn ty(p: &mut Parser) -> Result<Type, GraphQLError> {
    let start = p.current_id();
    let inner = if p.expect_optional_token(TokenKind::BracketL)? {
        let item = ty(p)?;
        p.expect_token(TokenKind::BracketR)?;
        NullableType::List(p.node(start, ListType { ty: item }))
    } else {
        NullableType::Named(named_type(p)?)
    };
    if p.expect_optional_token(TokenKind::Bang)? {
        return Ok(Type::NonNull(p.node(start, NonNullType { ty: inner })));
    }
    Ok(inner.into())
}

pub(crate) fn named_type(p: &mut Parser) -> Result<Node<NamedType>, GraphQLError> {
    let start = p.current_id();
    let name = name::name(p)?;
    Ok(p.node(start, NamedType { name }))
}
