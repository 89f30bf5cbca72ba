use crate::ast::InterfaceTypeDefinition;
use crate::ast::InterfaceTypeExtension;
use crate::error::GraphQLError;
use crate::node::Node;
use crate::parser::grammar::description;
use crate::parser::grammar::directive;
use crate::parser::grammar::name;
use crate::parser::grammar::object;
use crate::parser::Parser;

/// See: <https://spec.graphql.org/October2021/#InterfaceTypeDefinition>
///
/// *InterfaceTypeDefinition* — like an object definition with the
/// `interface` keyword.
pub(crate) fn interface_type_definition(
    p: &mut Parser,
) -> Result<Node<InterfaceTypeDefinition>, GraphQLError> {
    let start = p.current_id();
    let description = description::description(p)?;
    p.expect_keyword("interface")?;
    let name = name::name(p)?;
    let interfaces = object::implements_interfaces(p)?;
    let directives = directive::directives(p, true)?;
    let fields = object::fields_definition(p)?;
    Ok(p.node(
        start,
        InterfaceTypeDefinition {
            description,
            name,
            interfaces,
            directives,
            fields,
        },
    ))
}

/// *InterfaceTypeExtension* — must add interfaces, directives or fields.
pub(crate) fn interface_type_extension(
    p: &mut Parser,
) -> Result<Node<InterfaceTypeExtension>, GraphQLError> {
    let start = p.current_id();
    p.expect_keyword("extend")?;
    p.expect_keyword("interface")?;
    let name = name::name(p)?;
    let interfaces = object::implements_interfaces(p)?;
    let directives = directive::directives(p, true)?;
    let fields = object::fields_definition(p)?;
    if interfaces.is_empty() && directives.is_empty() && fields.is_empty() {
        return Err(p.unexpected(None));
    }
    Ok(p.node(
        start,
        InterfaceTypeExtension {
            name,
            interfaces,
            directives,
            fields,
        },
    ))
}
