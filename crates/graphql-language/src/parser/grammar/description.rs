use crate::ast::StringValue;
use crate::error::GraphQLError;
use crate::lexer::TokenKind;
use crate::node::Node;
use crate::parser::grammar::value;
use crate::parser::Parser;

pub(crate) fn peek_description(p: &Parser) -> bool {
    matches!(p.current().kind, TokenKind::String | TokenKind::BlockString)
}

/// *Description* — an optional string literal before a type-system
/// definition keyword.
pub(crate) fn description(p: &mut Parser) -> Result<Option<Node<StringValue>>, GraphQLError> {
    if peek_description(p) {
        Ok(Some(value::string_value(p)?))
    } else {
        Ok(None)
    }
}
