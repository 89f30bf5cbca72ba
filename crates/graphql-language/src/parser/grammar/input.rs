use crate::ast::InputObjectTypeDefinition;
use crate::ast::InputObjectTypeExtension;
use crate::ast::InputValueDefinition;
use crate::error::GraphQLError;
use crate::lexer::TokenKind;
use crate::node::Node;
use crate::parser::grammar::description;
use crate::parser::grammar::directive;
use crate::parser::grammar::name;
use crate::parser::grammar::ty;
use crate::parser::grammar::value;
use crate::parser::Parser;

/// *ArgumentsDefinition* — a parenthesized, non-empty list when present.
pub(crate) fn arguments_definition(
    p: &mut Parser,
) -> Result<Vec<Node<InputValueDefinition>>, GraphQLError> {
    p.optional_many(TokenKind::ParenL, input_value_definition, TokenKind::ParenR)
}

/// See: <https://spec.graphql.org/October2021/#InputValueDefinition>
///
/// *InputValueDefinition* —
/// `description? Name : Type (= constValue)? directives?`.
pub(crate) fn input_value_definition(
    p: &mut Parser,
) -> Result<Node<InputValueDefinition>, GraphQLError> {
    let start = p.current_id();
    let description = description::description(p)?;
    let name = name::name(p)?;
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
        InputValueDefinition {
            description,
            name,
            ty,
            default_value,
            directives,
        },
    ))
}

/// See: <https://spec.graphql.org/October2021/#InputObjectTypeDefinition>
///
/// *InputObjectTypeDefinition* —
/// `description? input Name directives? { inputValueDefinition+ }?`.
pub(crate) fn input_object_type_definition(
    p: &mut Parser,
) -> Result<Node<InputObjectTypeDefinition>, GraphQLError> {
    let start = p.current_id();
    let description = description::description(p)?;
    p.expect_keyword("input")?;
    let name = name::name(p)?;
    let directives = directive::directives(p, true)?;
    let fields = input_fields_definition(p)?;
    Ok(p.node(
        start,
        InputObjectTypeDefinition {
            description,
            name,
            directives,
            fields,
        },
    ))
}

/// *InputObjectTypeExtension* — must add directives or fields.
pub(crate) fn input_object_type_extension(
    p: &mut Parser,
) -> Result<Node<InputObjectTypeExtension>, GraphQLError> {
    let start = p.current_id();
    p.expect_keyword("extend")?;
    p.expect_keyword("input")?;
    let name = name::name(p)?;
    let directives = directive::directives(p, true)?;
    let fields = input_fields_definition(p)?;
    if directives.is_empty() && fields.is_empty() {
        return Err(p.unexpected(None));
    }
    Ok(p.node(
        start,
        InputObjectTypeExtension {
            name,
            directives,
            fields,
        },
    ))
}

fn input_fields_definition(
    p: &mut Parser,
) -> Result<Vec<Node<InputValueDefinition>>, GraphQLError> {
    p.optional_many(TokenKind::BraceL, input_value_definition, TokenKind::BraceR)
}
