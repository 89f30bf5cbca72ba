use crate::ast::FieldDefinition;
use crate::ast::NamedType;
use crate::ast::ObjectTypeDefinition;
use crate::ast::ObjectTypeExtension;
use crate::error::GraphQLError;
use crate::lexer::TokenKind;
use crate::node::Node;
use crate::parser::grammar::description;
use crate::parser::grammar::directive;
use crate::parser::grammar::input;
use crate::parser::grammar::name;
use crate::parser::grammar::ty;
use crate::parser::Parser;

/// See: <https://spec.graphql.org/October2021/#ObjectTypeDefinition>
///
/// *ObjectTypeDefinition* —
/// `description? type Name implementsInterfaces? directives? fieldsDefinition?`.
pub(crate) fn object_type_definition(
    p: &mut Parser,
) -> Result<Node<ObjectTypeDefinition>, GraphQLError> {
    let start = p.current_id();
    let description = description::description(p)?;
    p.expect_keyword("type")?;
    let name = name::name(p)?;
    let interfaces = implements_interfaces(p)?;
    let directives = directive::directives(p, true)?;
    let fields = fields_definition(p)?;
    Ok(p.node(
        start,
        ObjectTypeDefinition {
            description,
            name,
            interfaces,
            directives,
            fields,
        },
    ))
}

/// *ObjectTypeExtension* — must add interfaces, directives or fields.
pub(crate) fn object_type_extension(
    p: &mut Parser,
) -> Result<Node<ObjectTypeExtension>, GraphQLError> {
    let start = p.current_id();
    p.expect_keyword("extend")?;
    p.expect_keyword("type")?;
    let name = name::name(p)?;
    let interfaces = implements_interfaces(p)?;
    let directives = directive::directives(p, true)?;
    let fields = fields_definition(p)?;
    if interfaces.is_empty() && directives.is_empty() && fields.is_empty() {
        return Err(p.unexpected(None));
    }
    Ok(p.node(
        start,
        ObjectTypeExtension {
            name,
            interfaces,
            directives,
            fields,
        },
    ))
}

/// *ImplementsInterfaces* — `implements &? Name (& Name)*`.
pub(crate) fn implements_interfaces(
    p: &mut Parser,
) -> Result<Vec<Node<NamedType>>, GraphQLError> {
    if p.expect_optional_keyword("implements")? {
        p.delimited_many(TokenKind::Amp, ty::named_type)
    } else {
        Ok(Vec::new())
    }
}

/// *FieldsDefinition* — a braced, non-empty list when present.
pub(crate) fn fields_definition(
    p: &mut Parser,
) -> Result<Vec<Node<FieldDefinition>>, GraphQLError> {
    p.optional_many(TokenKind::BraceL, field_definition, TokenKind::BraceR)
}

/// See: <https://spec.graphql.org/October2021/#FieldDefinition>
///
/// *FieldDefinition* —
/// `description? Name argumentsDefinition? : Type directives?`.
pub(crate) fn field_definition(p: &mut Parser) -> Result<Node<FieldDefinition>, GraphQLError> {
    let start = p.current_id();
    let description = description::description(p)?;
    let name = name::name(p)?;
    let arguments = input::arguments_definition(p)?;
    p.expect_token(TokenKind::Colon)?;
    let ty = ty::ty(p)?;
    let directives = directive::directives(p, true)?;
    Ok(p.node(
        start,
        FieldDefinition {
            description,
            name,
            arguments,
            ty,
            directives,
        },
    ))
}
