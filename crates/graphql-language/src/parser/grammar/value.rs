use crate::ast::BooleanValue;
use crate::ast::EnumValue;
use crate::ast::FloatValue;
use crate::ast::IntValue;
use crate::ast::ListValue;
use crate::ast::NullValue;
use crate::ast::ObjectField;
use crate::ast::ObjectValue;
use crate::ast::StringValue;
use crate::ast::Value;
use crate::error::GraphQLError;
use crate::lexer::TokenKind;
use crate::node::Node;
use crate::parser::grammar::name;
use crate::parser::grammar::variable;
use crate::parser::Parser;

/// See: <https://spec.graphql.org/October2021/#Value>
///
/// *Value* — a literal, or a variable outside constant contexts. Inside a
/// constant context a `$` is reported against the variable it starts.
pub(crate) fn value(p: &mut Parser, is_const: bool) -> Result<Value, GraphQLError> {
    let start = p.current_id();
    match p.current().kind {
        TokenKind::BracketL => list(p, is_const),
        TokenKind::BraceL => object(p, is_const),
        TokenKind::Int => {
            let value = token_value(p);
            p.advance_lexer()?;
            Ok(Value::Int(p.node(start, IntValue { value })))
        }
        TokenKind::Float => {
            let value = token_value(p);
            p.advance_lexer()?;
            Ok(Value::Float(p.node(start, FloatValue { value })))
        }
        TokenKind::String | TokenKind::BlockString => {
            Ok(Value::String(string_value(p)?))
        }
        TokenKind::Name => {
            let value = token_value(p);
            p.advance_lexer()?;
            match value.as_str() {
                "true" => Ok(Value::Boolean(p.node(start, BooleanValue { value: true }))),
                "false" => Ok(Value::Boolean(p.node(start, BooleanValue { value: false }))),
                "null" => Ok(Value::Null(p.node(start, NullValue))),
                _ => Ok(Value::Enum(p.node(start, EnumValue { value }))),
            }
        }
        TokenKind::Dollar => {
            if is_const {
                p.expect_token(TokenKind::Dollar)?;
                if p.peek(TokenKind::Name) {
                    let variable_name = token_value(p);
                    let position = p.token_at(start).start;
                    Err(p.syntax_error(
                        position,
                        format!("Unexpected variable \"${variable_name}\" in constant value."),
                    ))
                } else {
                    Err(p.unexpected(Some(start)))
                }
            } else {
                Ok(Value::Variable(variable::variable(p)?))
            }
        }
        _ => Err(p.unexpected(None)),
    }
}

/// A string or block-string literal as a value node.
pub(crate) fn string_value(p: &mut Parser) -> Result<Node<StringValue>, GraphQLError> {
    let start = p.current_id();
    let token = p.current();
    let value = token
        .value
        .clone()
        .expect("string tokens always carry a value");
    let block = token.kind == TokenKind::BlockString;
    p.advance_lexer()?;
    Ok(p.node(start, StringValue { value, block }))
}

fn list(p: &mut Parser, is_const: bool) -> Result<Value, GraphQLError> {
    let start = p.current_id();
    let values = p.any(
        TokenKind::BracketL,
        |p| value(p, is_const),
        TokenKind::BracketR,
    )?;
    Ok(Value::List(p.node(start, ListValue { values })))
}

fn object(p: &mut Parser, is_const: bool) -> Result<Value, GraphQLError> {
    let start = p.current_id();
    let fields = p.any(
        TokenKind::BraceL,
        |p| object_field(p, is_const),
        TokenKind::BraceR,
    )?;
    Ok(Value::Object(p.node(start, ObjectValue { fields })))
}

fn object_field(p: &mut Parser, is_const: bool) -> Result<Node<ObjectField>, GraphQLError> {
    let start = p.current_id();
    let name = name::name(p)?;
    p.expect_token(TokenKind::Colon)?;
    let value = value(p, is_const)?;
    Ok(p.node(start, ObjectField { name, value }))
}

fn token_value(p: &Parser) -> String {
    p.current()
        .value
        .clone()
        .expect("value-bearing tokens always carry a value")
}
