use crate::ast::Definition;
use crate::error::GraphQLError;
use crate::lexer::TokenKind;
use crate::parser::grammar::enum_;
use crate::parser::grammar::input;
use crate::parser::grammar::interface;
use crate::parser::grammar::object;
use crate::parser::grammar::scalar;
use crate::parser::grammar::schema;
use crate::parser::grammar::union_;
use crate::parser::Parser;

/// See: <https://spec.graphql.org/October2021/#TypeSystemExtension>
///
/// *TypeSystemExtension* — dispatches on the keyword after `extend`
/// without consuming it; each production re-reads `extend` itself.
pub(crate) fn type_system_extension(p: &mut Parser) -> Result<Definition, GraphQLError> {
    let keyword_id = p.lookahead()?;
    let (keyword_kind, keyword_value) = {
        let token = p.token_at(keyword_id);
        (token.kind, token.value.clone())
    };

    if keyword_kind == TokenKind::Name {
        match keyword_value.as_deref().unwrap_or_default() {
            "schema" => {
                return Ok(Definition::SchemaExtension(schema::schema_extension(p)?))
            }
            "scalar" => {
                return Ok(Definition::ScalarTypeExtension(
                    scalar::scalar_type_extension(p)?,
                ))
            }
            "type" => {
                return Ok(Definition::ObjectTypeExtension(
                    object::object_type_extension(p)?,
                ))
            }
            "interface" => {
                return Ok(Definition::InterfaceTypeExtension(
                    interface::interface_type_extension(p)?,
                ))
            }
            "union" => {
                return Ok(Definition::UnionTypeExtension(
                    union_::union_type_extension(p)?,
                ))
            }
            "enum" => {
                return Ok(Definition::EnumTypeExtension(enum_::enum_type_extension(p)?))
            }
            "input" => {
                return Ok(Definition::InputObjectTypeExtension(
                    input::input_object_type_extension(p)?,
                ))
            }
            _ => {}
        }
    }

    Err(p.unexpected(Some(keyword_id)))
}
