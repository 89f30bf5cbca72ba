use crate::ast::OperationDefinition;
use crate::ast::OperationType;
use crate::error::GraphQLError;
use crate::lexer::TokenKind;
use crate::node::Node;
use crate::parser::grammar::directive;
use crate::parser::grammar::name;
use crate::parser::grammar::selection;
use crate::parser::grammar::variable;
use crate::parser::Parser;

/// See: <https://spec.graphql.org/October2021/#OperationDefinition>
///
/// *OperationDefinition* — either the bare-selection-set shorthand (an
/// anonymous query) or `operation name? variableDefinitions? directives?
/// selectionSet`.
pub(crate) fn operation_definition(
    p: &mut Parser,
) -> Result<Node<OperationDefinition>, GraphQLError> {
    let start = p.current_id();
    if p.peek(TokenKind::BraceL) {
        let selection_set = selection::selection_set(p)?;
        return Ok(p.node(
            start,
            OperationDefinition {
                operation: OperationType::Query,
                name: None,
                variable_definitions: Vec::new(),
                directives: Vec::new(),
                selection_set,
            },
        ));
    }
    let operation = operation_type(p)?;
    let name = if p.peek(TokenKind::Name) {
        Some(name::name(p)?)
    } else {
        None
    };
    let variable_definitions = variable::variable_definitions(p)?;
    let directives = directive::directives(p, false)?;
    let selection_set = selection::selection_set(p)?;
    Ok(p.node(
        start,
        OperationDefinition {
            operation,
            name,
            variable_definitions,
            directives,
            selection_set,
        },
    ))
}

pub(crate) fn operation_type(p: &mut Parser) -> Result<OperationType, GraphQLError> {
    let id = p.expect_token(TokenKind::Name)?;
    match p.token_at(id).value.as_deref() {
        Some("query") => Ok(OperationType::Query),
        Some("mutation") => Ok(OperationType::Mutation),
        Some("subscription") => Ok(OperationType::Subscription),
        _ => Err(p.unexpected(Some(id))),
    }
}
