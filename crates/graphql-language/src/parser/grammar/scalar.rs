use crate::ast::ScalarTypeDefinition;
use crate::ast::ScalarTypeExtension;
use crate::error::GraphQLError;
use crate::node::Node;
use crate::parser::grammar::description;
use crate::parser::grammar::directive;
use crate::parser::grammar::name;
use crate::parser::Parser;

/// *ScalarTypeDefinition* — `description? scalar Name directives?`.
pub(crate) fn scalar_type_definition(
    p: &mut Parser,
) -> Result<Node<ScalarTypeDefinition>, GraphQLError> {
    let start = p.current_id();
    let description = description::description(p)?;
    p.expect_keyword("scalar")?;
    let name = name::name(p)?;
    let directives = directive::directives(p, true)?;
    Ok(p.node(
        start,
        ScalarTypeDefinition {
            description,
            name,
            directives,
        },
    ))
}

/// *ScalarTypeExtension* — must add directives.
pub(crate) fn scalar_type_extension(
    p: &mut Parser,
) -> Result<Node<ScalarTypeExtension>, GraphQLError> {
    let start = p.current_id();
    p.expect_keyword("extend")?;
    p.expect_keyword("scalar")?;
    let name = name::name(p)?;
    let directives = directive::directives(p, true)?;
    if directives.is_empty() {
        return Err(p.unexpected(None));
    }
    Ok(p.node(start, ScalarTypeExtension { name, directives }))
}
