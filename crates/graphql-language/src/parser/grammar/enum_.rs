use crate::ast::EnumTypeDefinition;
use crate::ast::EnumTypeExtension;
use crate::ast::EnumValueDefinition;
use crate::ast::Name;
use crate::error::GraphQLError;
use crate::lexer::TokenKind;
use crate::node::Node;
use crate::parser::grammar::description;
use crate::parser::grammar::directive;
use crate::parser::grammar::name;
use crate::parser::Parser;

/// See: <https://spec.graphql.org/October2021/#EnumTypeDefinition>
///
/// *EnumTypeDefinition* —
/// `description? enum Name directives? { enumValueDefinition+ }?`.
pub(crate) fn enum_type_definition(
    p: &mut Parser,
) -> Result<Node<EnumTypeDefinition>, GraphQLError> {
    let start = p.current_id();
    let description = description::description(p)?;
    p.expect_keyword("enum")?;
    let name = name::name(p)?;
    let directives = directive::directives(p, true)?;
    let values = enum_values_definition(p)?;
    Ok(p.node(
        start,
        EnumTypeDefinition {
            description,
            name,
            directives,
            values,
        },
    ))
}

/// *EnumTypeExtension* — must add directives or values.
pub(crate) fn enum_type_extension(
    p: &mut Parser,
) -> Result<Node<EnumTypeExtension>, GraphQLError> {
    let start = p.current_id();
    p.expect_keyword("extend")?;
    p.expect_keyword("enum")?;
    let name = name::name(p)?;
    let directives = directive::directives(p, true)?;
    let values = enum_values_definition(p)?;
    if directives.is_empty() && values.is_empty() {
        return Err(p.unexpected(None));
    }
    Ok(p.node(
        start,
        EnumTypeExtension {
            name,
            directives,
            values,
        },
    ))
}

fn enum_values_definition(
    p: &mut Parser,
) -> Result<Vec<Node<EnumValueDefinition>>, GraphQLError> {
    p.optional_many(TokenKind::BraceL, enum_value_definition, TokenKind::BraceR)
}

fn enum_value_definition(p: &mut Parser) -> Result<Node<EnumValueDefinition>, GraphQLError> {
    let start = p.current_id();
    let description = description::description(p)?;
    let name = enum_value_name(p)?;
    let directives = directive::directives(p, true)?;
    Ok(p.node(
        start,
        EnumValueDefinition {
            description,
            name,
            directives,
        },
    ))
}

/// An enum value name; the boolean and null keywords are reserved.
fn enum_value_name(p: &mut Parser) -> Result<Name, GraphQLError> {
    let token = p.current();
    if matches!(token.value.as_deref(), Some("true" | "false" | "null")) {
        let message = format!(
            "{} is reserved and cannot be used for an enum value.",
            token.description()
        );
        let position = token.start;
        return Err(p.syntax_error(position, message));
    }
    name::name(p)
}
