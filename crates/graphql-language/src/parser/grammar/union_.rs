use crate::ast::NamedType;
use crate::ast::UnionTypeDefinition;
use crate::ast::UnionTypeExtension;
use crate::error::GraphQLError;
use crate::lexer::TokenKind;
use crate::node::Node;
use crate::parser::grammar::description;
use crate::parser::grammar::directive;
use crate::parser::grammar::name;
use crate::parser::grammar::ty;
use crate::parser::Parser;

/// See: <https://spec.graphql.org/October2021/#UnionTypeDefinition>
///
/// *UnionTypeDefinition* —
/// `description? union Name directives? (= |? Name (| Name)*)?`.
pub(crate) fn union_type_definition(
    p: &mut Parser,
) -> Result<Node<UnionTypeDefinition>, GraphQLError> {
    let start = p.current_id();
    let description = description::description(p)?;
    p.expect_keyword("union")?;
    let name = name::name(p)?;
    let directives = directive::directives(p, true)?;
    let types = union_member_types(p)?;
    Ok(p.node(
        start,
        UnionTypeDefinition {
            description,
            name,
            directives,
            types,
        },
    ))
}

/// *UnionTypeExtension* — must add directives or member types.
pub(crate) fn union_type_extension(
    p: &mut Parser,
) -> Result<Node<UnionTypeExtension>, GraphQLError> {
    let start = p.current_id();
    p.expect_keyword("extend")?;
    p.expect_keyword("union")?;
    let name = name::name(p)?;
    let directives = directive::directives(p, true)?;
    let types = union_member_types(p)?;
    if directives.is_empty() && types.is_empty() {
        return Err(p.unexpected(None));
    }
    Ok(p.node(
        start,
        UnionTypeExtension {
            name,
            directives,
            types,
        },
    ))
}

fn union_member_types(p: &mut Parser) -> Result<Vec<Node<NamedType>>, GraphQLError> {
    if p.expect_optional_token(TokenKind::Equals)? {
        p.delimited_many(TokenKind::Pipe, ty::named_type)
    } else {
        Ok(Vec::new())
    }
}
