use crate::ast::Name;
use crate::error::GraphQLError;
use crate::lexer::TokenKind;
use crate::parser::Parser;

/// Expect a `Name` token and return its value.
pub(crate) fn name(p: &mut Parser) -> Result<Name, GraphQLError> {
    let id = p.expect_token(TokenKind::Name)?;
    Ok(p.token_at(id)
        .value
        .clone()
        .expect("Name tokens always carry a value"))
}

/// A fragment name; `on` is reserved for type conditions.
pub(crate) fn fragment_name(p: &mut Parser) -> Result<Name, GraphQLError> {
    if p.peek_keyword("on") {
        return Err(p.unexpected(None));
    }
    name(p)
}
