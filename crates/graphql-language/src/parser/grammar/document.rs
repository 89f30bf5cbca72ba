use crate::ast::Definition;
use crate::ast::Document;
use crate::error::GraphQLError;
use crate::lexer::TokenKind;
use crate::node::Node;
use crate::parser::grammar::description;
use crate::parser::grammar::directive;
use crate::parser::grammar::enum_;
use crate::parser::grammar::extensions;
use crate::parser::grammar::fragment;
use crate::parser::grammar::input;
use crate::parser::grammar::interface;
use crate::parser::grammar::object;
use crate::parser::grammar::operation;
use crate::parser::grammar::scalar;
use crate::parser::grammar::schema;
use crate::parser::grammar::union_;
use crate::parser::Parser;

/// See: <https://spec.graphql.org/October2021/#Document>
///
/// *Document* — one or more definitions between `<SOF>` and `<EOF>`.
pub(crate) fn document(p: &mut Parser) -> Result<Node<Document>, GraphQLError> {
    let start = p.current_id();
    let definitions = p.many(TokenKind::Sof, definition, TokenKind::Eof)?;
    Ok(p.node(start, Document { definitions }))
}

/// See: <https://spec.graphql.org/October2021/#Definition>
///
/// *Definition* — dispatches on `{` (the operation shorthand) or the
/// leading keyword, looking one token past a potential description.
pub(crate) fn definition(p: &mut Parser) -> Result<Definition, GraphQLError> {
    if p.peek(TokenKind::BraceL) {
        return Ok(Definition::OperationDefinition(
            operation::operation_definition(p)?,
        ));
    }

    let has_description = description::peek_description(p);
    let keyword_id = if has_description {
        p.lookahead()?
    } else {
        p.current_id()
    };
    let (keyword_kind, keyword_value) = {
        let token = p.token_at(keyword_id);
        (token.kind, token.value.clone())
    };

    if keyword_kind == TokenKind::Name {
        let keyword = keyword_value.as_deref().unwrap_or_default();
        match keyword {
            "schema" => {
                return Ok(Definition::SchemaDefinition(schema::schema_definition(p)?))
            }
            "scalar" => {
                return Ok(Definition::ScalarTypeDefinition(
                    scalar::scalar_type_definition(p)?,
                ))
            }
            "type" => {
                return Ok(Definition::ObjectTypeDefinition(
                    object::object_type_definition(p)?,
                ))
            }
            "interface" => {
                return Ok(Definition::InterfaceTypeDefinition(
                    interface::interface_type_definition(p)?,
                ))
            }
            "union" => {
                return Ok(Definition::UnionTypeDefinition(
                    union_::union_type_definition(p)?,
                ))
            }
            "enum" => {
                return Ok(Definition::EnumTypeDefinition(
                    enum_::enum_type_definition(p)?,
                ))
            }
            "input" => {
                return Ok(Definition::InputObjectTypeDefinition(
                    input::input_object_type_definition(p)?,
                ))
            }
            "directive" => {
                return Ok(Definition::DirectiveDefinition(
                    directive::directive_definition(p)?,
                ))
            }
            _ => {}
        }

        if has_description {
            return Err(p.syntax_error(
                p.current().start,
                "Unexpected description, descriptions are supported only on type definitions.",
            ));
        }

        match keyword {
            "query" | "mutation" | "subscription" => {
                return Ok(Definition::OperationDefinition(
                    operation::operation_definition(p)?,
                ))
            }
            "fragment" => {
                return Ok(Definition::FragmentDefinition(
                    fragment::fragment_definition(p)?,
                ))
            }
            "extend" => return extensions::type_system_extension(p),
            _ => {}
        }
    }

    Err(p.unexpected(Some(keyword_id)))
}
