use crate::ast::OperationTypeDefinition;
use crate::ast::SchemaDefinition;
use crate::ast::SchemaExtension;
use crate::error::GraphQLError;
use crate::lexer::TokenKind;
use crate::node::Node;
use crate::parser::grammar::description;
use crate::parser::grammar::directive;
use crate::parser::grammar::operation;
use crate::parser::grammar::ty;
use crate::parser::Parser;

/// See: <https://spec.graphql.org/October2021/#SchemaDefinition>
///
/// *SchemaDefinition* —
/// `description? schema directives? { operationTypeDefinition+ }`.
pub(crate) fn schema_definition(p: &mut Parser) -> Result<Node<SchemaDefinition>, GraphQLError> {
    let start = p.current_id();
    let description = description::description(p)?;
    p.expect_keyword("schema")?;
    let directives = directive::directives(p, true)?;
    let operation_types = p.many(
        TokenKind::BraceL,
        operation_type_definition,
        TokenKind::BraceR,
    )?;
    Ok(p.node(
        start,
        SchemaDefinition {
            description,
            directives,
            operation_types,
        },
    ))
}

/// `query: TypeName` and friends.
pub(crate) fn operation_type_definition(
    p: &mut Parser,
) -> Result<Node<OperationTypeDefinition>, GraphQLError> {
    let start = p.current_id();
    let operation = operation::operation_type(p)?;
    p.expect_token(TokenKind::Colon)?;
    let ty = ty::named_type(p)?;
    Ok(p.node(start, OperationTypeDefinition { operation, ty }))
}

/// *SchemaExtension* — must add directives or operation types.
pub(crate) fn schema_extension(p: &mut Parser) -> Result<Node<SchemaExtension>, GraphQLError> {
    let start = p.current_id();
    p.expect_keyword("extend")?;
    p.expect_keyword("schema")?;
    let directives = directive::directives(p, true)?;
    let operation_types = p.optional_many(
        TokenKind::BraceL,
        operation_type_definition,
        TokenKind::BraceR,
    )?;
    if directives.is_empty() && operation_types.is_empty() {
        return Err(p.unexpected(None));
    }
    Ok(p.node(
        start,
        SchemaExtension {
            directives,
            operation_types,
        },
    ))
}
