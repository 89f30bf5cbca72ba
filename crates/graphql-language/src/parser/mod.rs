//! The recursive-descent parser over the token stream.

pub(crate) mod grammar;

use crate::ast::Document;
use crate::ast::Type;
use crate::ast::Value;
use crate::error::GraphQLError;
use crate::lexer::Lexer;
use crate::lexer::Token;
use crate::lexer::TokenId;
use crate::lexer::TokenKind;
use crate::node::Location;
use crate::node::Node;
use crate::source::Source;

/// Parse a document with the default configuration.
///
/// ## Example
///
/// ```rust
/// use graphql_language::parse;
///
/// let document = parse("{ hello }").unwrap();
/// assert_eq!(document.definitions.len(), 1);
/// ```
pub fn parse(source: impl Into<Source>) -> Result<Node<Document>, GraphQLError> {
    Parser::new(source).parse_document()
}

/// Parse a single value literal, e.g. `[1, "two"]`.
pub fn parse_value(source: impl Into<Source>) -> Result<Value, GraphQLError> {
    Parser::new(source).parse_value()
}

/// Parse a single constant value literal; variables are a syntax error.
pub fn parse_const_value(source: impl Into<Source>) -> Result<Value, GraphQLError> {
    Parser::new(source).parse_const_value()
}

/// Parse a single type reference, e.g. `[Foo!]!`.
pub fn parse_type(source: impl Into<Source>) -> Result<Type, GraphQLError> {
    Parser::new(source).parse_type()
}

/// A configurable parser over one source.
///
/// ## Example
///
/// ```rust
/// use graphql_language::Parser;
///
/// let document = Parser::new("query Q { me { id } }")
///     .max_tokens(50_000)
///     .parse_document()
///     .unwrap();
/// assert_eq!(document.definitions.len(), 1);
/// ```
pub struct Parser {
    pub(crate) lexer: Lexer,
    no_location: bool,
    max_tokens: Option<usize>,
    allow_legacy_fragment_variables: bool,
    experimental_fragment_arguments: bool,
    token_count: usize,
}

impl Parser {
    pub fn new(source: impl Into<Source>) -> Self {
        Self {
            lexer: Lexer::new(source),
            no_location: false,
            max_tokens: None,
            allow_legacy_fragment_variables: false,
            experimental_fragment_arguments: false,
            token_count: 0,
        }
    }

    /// Do not attach a `loc` to any node.
    pub fn no_location(mut self) -> Self {
        self.no_location = true;
        self
    }

    /// Abort with an error once more than `limit` non-`<EOF>` tokens have
    /// been consumed. This bounds the work an adversarial document can cause.
    pub fn max_tokens(mut self, limit: usize) -> Self {
        self.max_tokens = Some(limit);
        self
    }

    /// Accept the historical `fragment F($var: Type) on ...` grammar.
    pub fn allow_legacy_fragment_variables(mut self) -> Self {
        self.allow_legacy_fragment_variables = true;
        self
    }

    /// Accept fragment-spread arguments, `...F(x: 1)`.
    pub fn experimental_fragment_arguments(mut self) -> Self {
        self.experimental_fragment_arguments = true;
        self
    }

    pub fn parse_document(mut self) -> Result<Node<Document>, GraphQLError> {
        grammar::document::document(&mut self)
    }

    pub fn parse_value(mut self) -> Result<Value, GraphQLError> {
        self.expect_token(TokenKind::Sof)?;
        let value = grammar::value::value(&mut self, false)?;
        self.expect_token(TokenKind::Eof)?;
        Ok(value)
    }

    pub fn parse_const_value(mut self) -> Result<Value, GraphQLError> {
        self.expect_token(TokenKind::Sof)?;
        let value = grammar::value::value(&mut self, true)?;
        self.expect_token(TokenKind::Eof)?;
        Ok(value)
    }

    pub fn parse_type(mut self) -> Result<Type, GraphQLError> {
        self.expect_token(TokenKind::Sof)?;
        let ty = grammar::ty::ty(&mut self)?;
        self.expect_token(TokenKind::Eof)?;
        Ok(ty)
    }

    // Token-cursor helpers used by the grammar functions.

    pub(crate) fn current_id(&self) -> TokenId {
        self.lexer.token()
    }

    pub(crate) fn current(&self) -> &Token {
        &self.lexer.stream()[self.lexer.token()]
    }

    pub(crate) fn token_at(&self, id: TokenId) -> &Token {
        &self.lexer.stream()[id]
    }

    pub(crate) fn peek(&self, kind: TokenKind) -> bool {
        self.current().kind == kind
    }

    pub(crate) fn peek_keyword(&self, value: &str) -> bool {
        let token = self.current();
        token.kind == TokenKind::Name && token.value.as_deref() == Some(value)
    }

    pub(crate) fn lookahead(&mut self) -> Result<TokenId, GraphQLError> {
        self.lexer.lookahead()
    }

    pub(crate) fn legacy_fragment_variables_enabled(&self) -> bool {
        self.allow_legacy_fragment_variables
    }

    pub(crate) fn fragment_arguments_enabled(&self) -> bool {
        self.experimental_fragment_arguments
    }

    /// Move past the current token, enforcing the token cap.
    pub(crate) fn advance_lexer(&mut self) -> Result<(), GraphQLError> {
        let id = self.lexer.advance()?;
        let token = &self.lexer.stream()[id];
        if token.kind != TokenKind::Eof {
            self.token_count += 1;
            if let Some(max_tokens) = self.max_tokens {
                if self.token_count > max_tokens {
                    return Err(GraphQLError::syntax(
                        self.lexer.source_arc(),
                        token.start,
                        format!(
                            "Document contains more than {max_tokens} tokens. \
                             Parsing aborted."
                        ),
                    ));
                }
            }
        }
        Ok(())
    }

    /// Consume a token of the given kind, or fail.
    pub(crate) fn expect_token(&mut self, kind: TokenKind) -> Result<TokenId, GraphQLError> {
        let id = self.current_id();
        let token = self.token_at(id);
        if token.kind == kind {
            self.advance_lexer()?;
            Ok(id)
        } else {
            Err(GraphQLError::syntax(
                self.lexer.source_arc(),
                token.start,
                format!(
                    "Expected {}, found {}.",
                    kind.description(),
                    token.description()
                ),
            ))
        }
    }

    /// Consume a token of the given kind if present.
    pub(crate) fn expect_optional_token(
        &mut self,
        kind: TokenKind,
    ) -> Result<bool, GraphQLError> {
        if self.peek(kind) {
            self.advance_lexer()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Consume a name token with the given value, or fail.
    pub(crate) fn expect_keyword(&mut self, value: &str) -> Result<(), GraphQLError> {
        let token = self.current();
        if token.kind == TokenKind::Name && token.value.as_deref() == Some(value) {
            self.advance_lexer()
        } else {
            Err(GraphQLError::syntax(
                self.lexer.source_arc(),
                token.start,
                format!("Expected \"{value}\", found {}.", token.description()),
            ))
        }
    }

    /// Consume a name token with the given value if present.
    pub(crate) fn expect_optional_keyword(&mut self, value: &str) -> Result<bool, GraphQLError> {
        if self.peek_keyword(value) {
            self.advance_lexer()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// An `Unexpected <token>.` error at `at` (or the current token).
    pub(crate) fn unexpected(&self, at: Option<TokenId>) -> GraphQLError {
        let token = self.token_at(at.unwrap_or_else(|| self.current_id()));
        GraphQLError::syntax(
            self.lexer.source_arc(),
            token.start,
            format!("Unexpected {}.", token.description()),
        )
    }

    /// Attach a location spanning `start` through the last consumed token.
    pub(crate) fn node<T>(&self, start: TokenId, contents: T) -> Node<T> {
        if self.no_location {
            return Node::new(contents);
        }
        let end = self.lexer.last_token();
        Node::with_loc(
            contents,
            Location {
                start: self.token_at(start).start,
                end: self.token_at(end).end,
                start_token: start,
                end_token: end,
                source: self.lexer.source_arc(),
            },
        )
    }

    /// `open parse* close` with zero or more items.
    pub(crate) fn any<T>(
        &mut self,
        open: TokenKind,
        parse: impl Fn(&mut Parser) -> Result<T, GraphQLError>,
        close: TokenKind,
    ) -> Result<Vec<T>, GraphQLError> {
        self.expect_token(open)?;
        let mut nodes = Vec::new();
        while !self.expect_optional_token(close)? {
            nodes.push(parse(self)?);
        }
        Ok(nodes)
    }

    /// `open parse+ close`.
    pub(crate) fn many<T>(
        &mut self,
        open: TokenKind,
        parse: impl Fn(&mut Parser) -> Result<T, GraphQLError>,
        close: TokenKind,
    ) -> Result<Vec<T>, GraphQLError> {
        self.expect_token(open)?;
        let mut nodes = Vec::new();
        loop {
            nodes.push(parse(self)?);
            if self.expect_optional_token(close)? {
                return Ok(nodes);
            }
        }
    }

    /// `(open parse+ close)?` — when the opener is absent the list is
    /// absent; when present it must hold at least one item.
    pub(crate) fn optional_many<T>(
        &mut self,
        open: TokenKind,
        parse: impl Fn(&mut Parser) -> Result<T, GraphQLError>,
        close: TokenKind,
    ) -> Result<Vec<T>, GraphQLError> {
        if !self.expect_optional_token(open)? {
            return Ok(Vec::new());
        }
        let mut nodes = Vec::new();
        loop {
            nodes.push(parse(self)?);
            if self.expect_optional_token(close)? {
                return Ok(nodes);
            }
        }
    }

    /// `delimiter? parse (delimiter parse)*`.
    pub(crate) fn delimited_many<T>(
        &mut self,
        delimiter: TokenKind,
        parse: impl Fn(&mut Parser) -> Result<T, GraphQLError>,
    ) -> Result<Vec<T>, GraphQLError> {
        self.expect_optional_token(delimiter)?;
        let mut nodes = Vec::new();
        loop {
            nodes.push(parse(self)?);
            if !self.expect_optional_token(delimiter)? {
                return Ok(nodes);
            }
        }
    }

    pub(crate) fn syntax_error(
        &self,
        position: usize,
        message: impl Into<String>,
    ) -> GraphQLError {
        GraphQLError::syntax(self.lexer.source_arc(), position, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::*;
    use pretty_assertions::assert_eq;

    fn parse_err(source: &str) -> String {
        parse(source).unwrap_err().message().to_string()
    }

    #[test]
    fn parses_the_anonymous_shorthand() {
        let document = parse("{ hello }").unwrap();
        assert_eq!(document.definitions.len(), 1);
        let Definition::OperationDefinition(operation) = &document.definitions[0] else {
            panic!("expected an operation definition");
        };
        assert_eq!(operation.operation, OperationType::Query);
        assert_eq!(operation.name, None);
        assert!(operation.variable_definitions.is_empty());
        assert!(operation.directives.is_empty());
        assert_eq!(operation.selection_set.selections.len(), 1);
        let Selection::Field(field) = &operation.selection_set.selections[0] else {
            panic!("expected a field");
        };
        assert_eq!(field.name, "hello");
        assert!(field.alias.is_none());
        assert!(field.arguments.is_empty());
        assert!(field.selection_set.is_none());
    }

    #[test]
    fn parses_named_operations_with_variables_and_directives() {
        let document = parse("query Q($x: Int = 3) { f(a: $x) @d }").unwrap();
        let Definition::OperationDefinition(operation) = &document.definitions[0] else {
            panic!("expected an operation definition");
        };
        assert_eq!(operation.name.as_deref(), Some("Q"));
        assert_eq!(operation.variable_definitions.len(), 1);

        let variable_definition = &operation.variable_definitions[0];
        assert_eq!(variable_definition.variable.name, "x");
        let Type::Named(ty) = &variable_definition.ty else {
            panic!("expected a named type");
        };
        assert_eq!(ty.name, "Int");
        let Some(Value::Int(default)) = &variable_definition.default_value else {
            panic!("expected an int default");
        };
        assert_eq!(default.value, "3");

        let Selection::Field(field) = &operation.selection_set.selections[0] else {
            panic!("expected a field");
        };
        assert_eq!(field.name, "f");
        assert_eq!(field.arguments.len(), 1);
        assert_eq!(field.arguments[0].name, "a");
        let Value::Variable(variable) = &field.arguments[0].value else {
            panic!("expected a variable argument");
        };
        assert_eq!(variable.name, "x");
        assert_eq!(field.directives.len(), 1);
        assert_eq!(field.directives[0].name, "d");
    }

    #[test]
    fn rejects_variables_in_constant_values() {
        let error = parse_const_value("$x").unwrap_err();
        assert_eq!(
            error.message(),
            "Unexpected variable \"$x\" in constant value."
        );
        let error = parse_const_value("$").unwrap_err();
        assert_eq!(error.message(), "Unexpected \"$\".");
        let error = parse_const_value("[1, [$y]]").unwrap_err();
        assert_eq!(
            error.message(),
            "Unexpected variable \"$y\" in constant value."
        );
    }

    #[test]
    fn parse_value_accepts_variables() {
        let value = parse_value("$x").unwrap();
        assert!(matches!(value, Value::Variable(v) if v.name == "x"));

        let value = parse_value("[123 \"abc\"]").unwrap();
        let Value::List(list) = value else {
            panic!("expected a list");
        };
        assert_eq!(list.values.len(), 2);
        assert!(matches!(&list.values[0], Value::Int(n) if n.value == "123"));
        assert!(
            matches!(&list.values[1], Value::String(s) if s.value == "abc" && !s.block)
        );
    }

    #[test]
    fn parses_object_type_definitions() {
        let document =
            parse("type T implements A & B @d { f(x: Int!): [String!]! }").unwrap();
        let Definition::ObjectTypeDefinition(object) = &document.definitions[0] else {
            panic!("expected an object type definition");
        };
        assert_eq!(object.name, "T");
        let interfaces: Vec<&str> =
            object.interfaces.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(interfaces, ["A", "B"]);
        assert_eq!(object.directives.len(), 1);
        assert_eq!(object.fields.len(), 1);

        let field = &object.fields[0];
        assert_eq!(field.name, "f");
        let argument = &field.arguments[0];
        assert_eq!(argument.name, "x");
        let Type::NonNull(non_null) = &argument.ty else {
            panic!("expected a non-null argument type");
        };
        assert!(matches!(&non_null.ty, NullableType::Named(n) if n.name == "Int"));

        // [String!]!
        let Type::NonNull(outer) = &field.ty else {
            panic!("expected a non-null return type");
        };
        let NullableType::List(list) = &outer.ty else {
            panic!("expected a list inside the non-null");
        };
        let Type::NonNull(inner) = &list.ty else {
            panic!("expected a non-null item type");
        };
        assert!(matches!(&inner.ty, NullableType::Named(n) if n.name == "String"));
    }

    #[test]
    fn parse_type_unwraps_recursively() {
        let ty = crate::parser::parse_type("[Foo!]!").unwrap();
        let Type::NonNull(outer) = ty else {
            panic!("expected non-null");
        };
        let NullableType::List(list) = &outer.ty else {
            panic!("expected list");
        };
        assert!(matches!(&list.ty, Type::NonNull(_)));

        let error = crate::parser::parse_type("Foo!!").unwrap_err();
        assert_eq!(error.message(), "Expected <EOF>, found \"!\".");
    }

    #[test]
    fn rejects_descriptions_on_executable_definitions() {
        assert_eq!(
            parse_err("\"docs\" query Q { f }"),
            "Unexpected description, descriptions are supported only on type definitions."
        );
    }

    #[test]
    fn accepts_descriptions_on_type_system_definitions() {
        let document = parse("\"docs\" scalar S \"\"\"block docs\"\"\" type T { f: S }")
            .unwrap();
        let Definition::ScalarTypeDefinition(scalar) = &document.definitions[0] else {
            panic!("expected a scalar definition");
        };
        let description = scalar.description.as_ref().unwrap();
        assert_eq!(description.value, "docs");
        assert!(!description.block);

        let Definition::ObjectTypeDefinition(object) = &document.definitions[1] else {
            panic!("expected an object definition");
        };
        let description = object.description.as_ref().unwrap();
        assert_eq!(description.value, "block docs");
        assert!(description.block);
    }

    #[test]
    fn rejects_reserved_enum_value_names() {
        assert_eq!(
            parse_err("enum E { true }"),
            "Name \"true\" is reserved and cannot be used for an enum value."
        );
        assert_eq!(
            parse_err("enum E { null }"),
            "Name \"null\" is reserved and cannot be used for an enum value."
        );
    }

    #[test]
    fn rejects_fragments_named_on() {
        assert_eq!(parse_err("fragment on on T { f }"), "Unexpected Name \"on\".");
    }

    #[test]
    fn rejects_unknown_directive_locations() {
        assert_eq!(
            parse_err("directive @d on FOO"),
            "Unexpected Name \"FOO\"."
        );
    }

    #[test]
    fn parses_directive_definitions() {
        let document =
            parse("directive @d(reason: String = \"x\") repeatable on FIELD | ENUM_VALUE")
                .unwrap();
        let Definition::DirectiveDefinition(directive) = &document.definitions[0] else {
            panic!("expected a directive definition");
        };
        assert_eq!(directive.name, "d");
        assert!(directive.repeatable);
        assert_eq!(
            directive.locations,
            [DirectiveLocation::Field, DirectiveLocation::EnumValue]
        );
    }

    #[test]
    fn rejects_extensions_without_additions() {
        assert_eq!(parse_err("extend type T"), "Unexpected <EOF>.");
        assert_eq!(parse_err("extend schema"), "Unexpected <EOF>.");
        assert_eq!(parse_err("extend scalar S"), "Unexpected <EOF>.");
    }

    #[test]
    fn parses_extensions() {
        let document = parse(
            "extend schema @d \
             extend type T implements I \
             extend union U = A | B \
             extend enum E { X } \
             extend input In { f: Int } \
             extend interface I @d \
             extend scalar S @d",
        )
        .unwrap();
        assert_eq!(document.definitions.len(), 7);
        assert!(matches!(
            document.definitions[0],
            Definition::SchemaExtension(_)
        ));
        let Definition::UnionTypeExtension(union) = &document.definitions[2] else {
            panic!("expected a union extension");
        };
        assert_eq!(union.types.len(), 2);
    }

    #[test]
    fn accepts_leading_delimiters() {
        let document = parse(
            "type T implements & A & B { f: Int } \
             union U = | A | B \
             directive @d on | FIELD | ENUM",
        )
        .unwrap();
        assert_eq!(document.definitions.len(), 3);
    }

    #[test]
    fn parses_schema_definitions() {
        let document = parse(
            "\"\"\"The schema\"\"\" schema @d { query: Q mutation: M subscription: S }",
        )
        .unwrap();
        let Definition::SchemaDefinition(schema) = &document.definitions[0] else {
            panic!("expected a schema definition");
        };
        assert_eq!(schema.operation_types.len(), 3);
        assert_eq!(schema.operation_types[1].operation, OperationType::Mutation);
        assert_eq!(schema.operation_types[1].ty.name, "M");
    }

    #[test]
    fn enforces_the_token_cap() {
        // `{ a b }` consumes four non-EOF tokens.
        let error = Parser::new("{ a b }")
            .max_tokens(3)
            .parse_document()
            .unwrap_err();
        assert_eq!(
            error.message(),
            "Document contains more than 3 tokens. Parsing aborted."
        );
        assert!(Parser::new("{ a b }").max_tokens(4).parse_document().is_ok());
    }

    #[test]
    fn no_location_suppresses_every_loc() {
        let document = Parser::new("{ a { b } }").no_location().parse_document().unwrap();
        assert!(document.loc().is_none());
        let root = AstNode::Document(document);
        struct AssertNoLoc;
        impl crate::visitor::Visitor for AssertNoLoc {
            fn enter(
                &mut self,
                node: &AstNode,
                _: &[crate::visitor::PathElement],
                _: &[AstNode],
            ) -> crate::visitor::VisitAction {
                assert!(node.loc().is_none());
                crate::visitor::VisitAction::Continue
            }
        }
        crate::visitor::visit(&root, &mut AssertNoLoc).unwrap();
    }

    #[test]
    fn locations_span_whole_nodes() {
        let source = "query Q { f }";
        let document = parse(source).unwrap();
        let loc = document.loc().unwrap();
        assert_eq!(loc.start, 0);
        assert_eq!(loc.end, source.len());

        let Definition::OperationDefinition(operation) = &document.definitions[0] else {
            panic!("expected an operation");
        };
        let loc = operation.selection_set.loc().unwrap();
        assert_eq!(&source[loc.start..loc.end], "{ f }");
    }

    #[test]
    fn legacy_fragment_variables_are_gated() {
        let source = "fragment F($x: Int) on T { f }";
        let error = parse(source).unwrap_err();
        assert_eq!(error.message(), "Expected \"on\", found \"(\".");

        let document = Parser::new(source)
            .allow_legacy_fragment_variables()
            .parse_document()
            .unwrap();
        let Definition::FragmentDefinition(fragment) = &document.definitions[0] else {
            panic!("expected a fragment definition");
        };
        assert_eq!(fragment.variable_definitions.len(), 1);
        assert_eq!(fragment.variable_definitions[0].variable.name, "x");
    }

    #[test]
    fn fragment_arguments_are_gated() {
        let source = "{ ...F(x: 3) }";
        assert!(parse(source).is_err());

        let document = Parser::new(source)
            .experimental_fragment_arguments()
            .parse_document()
            .unwrap();
        let Definition::OperationDefinition(operation) = &document.definitions[0] else {
            panic!("expected an operation");
        };
        let Selection::FragmentSpread(spread) = &operation.selection_set.selections[0]
        else {
            panic!("expected a fragment spread");
        };
        assert_eq!(spread.fragment_name, "F");
        assert_eq!(spread.arguments.len(), 1);
    }

    #[test]
    fn distinguishes_spreads_from_inline_fragments() {
        let document = parse("{ ...F ... on T { f } ... @d { g } }").unwrap();
        let Definition::OperationDefinition(operation) = &document.definitions[0] else {
            panic!("expected an operation");
        };
        let selections = &operation.selection_set.selections;
        assert!(matches!(selections[0], Selection::FragmentSpread(_)));
        let Selection::InlineFragment(typed) = &selections[1] else {
            panic!("expected an inline fragment");
        };
        assert_eq!(typed.type_condition.as_ref().unwrap().name, "T");
        let Selection::InlineFragment(bare) = &selections[2] else {
            panic!("expected an inline fragment");
        };
        assert!(bare.type_condition.is_none());
        assert_eq!(bare.directives.len(), 1);
    }

    #[test]
    fn reports_expected_token_messages() {
        assert_eq!(parse_err("query"), "Expected \"{\", found <EOF>.");
        assert_eq!(parse_err("{ f(x) }"), "Expected \":\", found \")\".");
        assert_eq!(parse_err("notanop X { a }"), "Unexpected Name \"notanop\".");
        assert_eq!(parse_err(""), "Unexpected <EOF>.");
        assert_eq!(parse_err("{ 42 }"), "Expected Name, found Int \"42\".");
    }

    #[test]
    fn empty_optional_lists_are_syntax_errors() {
        assert_eq!(parse_err("query Q() { f }"), "Expected \"$\", found \")\".");
        assert_eq!(parse_err("{ f() }"), "Expected Name, found \")\".");
    }

    #[test]
    fn aliases_are_parsed() {
        let document = parse("{ alias: name }").unwrap();
        let Definition::OperationDefinition(operation) = &document.definitions[0] else {
            panic!("expected an operation");
        };
        let Selection::Field(field) = &operation.selection_set.selections[0] else {
            panic!("expected a field");
        };
        assert_eq!(field.alias.as_deref(), Some("alias"));
        assert_eq!(field.name, "name");
    }

    #[test]
    fn parse_const_value_results_are_const() {
        let value = parse_const_value("{a: [1, \"x\", true, null, E]}").unwrap();
        assert!(crate::ast::is_const_value_node(&AstNode::from(&value)));
    }
}

