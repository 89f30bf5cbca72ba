//! End-to-end checks through the public API: parse → print → parse, token
//! stream integrity, and the JSON representation.

use graphql_language::ast;
use graphql_language::parse;
use graphql_language::print;
use graphql_language::AstNode;
use graphql_language::Lexer;
use graphql_language::Parser;
use graphql_language::TokenKind;
use pretty_assertions::assert_eq;

const KITCHEN_SINK: &str = r#"
query queryName($foo: ComplexType, $site: Site = MOBILE) @onQuery {
  whoever123is: node(id: [123, 456]) {
    id
    ... on User @onInlineFragment {
      field2 {
        id
        alias: field1(first: 10, after: $foo) @include(if: $foo) {
          id
          ...frag @onFragmentSpread
        }
      }
    }
    ... @skip(unless: $foo) {
      id
    }
  }
}

mutation likeStory @onMutation {
  like(story: 123) @onField {
    story {
      id @onField
    }
  }
}

fragment frag on Friend @onFragmentDefinition {
  foo(size: $size, bar: $b, obj: {key: "value", block: """
  block string uses \"""
  """})
}

{
  unnamed(truthy: true, falsy: false, nullish: null)
  query
}

"""This is a description of the schema as a whole."""
schema {
  query: QueryType
  mutation: MutationType
}

type Foo implements Bar & Baz {
  one: Type
  two(argument: InputType!): Type
  three(argument: InputType, other: String): Int
}

interface Bar {
  one: Type
  four(argument: String = "string"): String
}

union Feed = Story | Article | Advert

scalar CustomScalar

enum Site {
  DESKTOP
  MOBILE
}

input InputType {
  key: String!
  answer: Int = 42
}

extend type Foo @onType

directive @skip(if: Boolean!) on FIELD | FRAGMENT_SPREAD | INLINE_FRAGMENT
"#;

fn parse_normalized(source: &str) -> graphql_language::Node<ast::Document> {
    Parser::new(source).no_location().parse_document().unwrap()
}

#[test]
fn kitchen_sink_round_trips() {
    let document = parse_normalized(KITCHEN_SINK);
    let printed = print(&AstNode::Document(document.clone()));
    let reparsed = parse_normalized(&printed);
    assert_eq!(document, reparsed);
}

#[test]
fn kitchen_sink_print_is_idempotent() {
    let document = parse_normalized(KITCHEN_SINK);
    let once = print(&AstNode::Document(document));
    let twice = print(&AstNode::Document(parse_normalized(&once)));
    assert_eq!(once, twice);
}

#[test]
fn token_stream_links_stay_consistent() {
    // Comments are lexed into the stream even though the parser never sees
    // them.
    let source = "# leading comment\n{ a # trailing\n  b }";
    parse(source).unwrap();

    let mut lexer = Lexer::new(source);
    loop {
        let id = lexer.advance().unwrap();
        if lexer.stream()[id].kind == TokenKind::Eof {
            break;
        }
    }
    let tokens: Vec<_> = lexer.stream().iter().collect();
    assert_eq!(tokens.first().unwrap().kind, TokenKind::Sof);
    assert_eq!(tokens.last().unwrap().kind, TokenKind::Eof);
    assert_eq!(
        tokens
            .iter()
            .filter(|token| token.kind == TokenKind::Comment)
            .count(),
        2
    );
    for pair in tokens.windows(2) {
        assert!(pair[0].start <= pair[1].start);
    }
}

#[test]
fn ast_serializes_to_kind_tagged_json() {
    let document = parse_normalized("{ hello }");
    let json = serde_json::to_value(&document).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "kind": "Document",
            "definitions": [{
                "kind": "OperationDefinition",
                "operation": "query",
                "variableDefinitions": [],
                "directives": [],
                "selectionSet": {
                    "kind": "SelectionSet",
                    "selections": [{
                        "kind": "Field",
                        "name": "hello",
                        "arguments": [],
                        "directives": [],
                    }],
                },
            }],
        })
    );
}

#[test]
fn locations_serialize_as_spans() {
    let document = parse("{ hello }").unwrap();
    let json = serde_json::to_value(&document).unwrap();
    assert_eq!(json["loc"], serde_json::json!({"start": 0, "end": 9}));
    let field = &json["definitions"][0]["selectionSet"]["selections"][0];
    assert_eq!(field["loc"], serde_json::json!({"start": 2, "end": 7}));
}

#[test]
fn parse_errors_render_a_caret_excerpt() {
    let error = parse("query {\n  bad!\n}").unwrap_err();
    let expected = [
        "Expected Name, found \"!\".",
        "",
        "GraphQL request:2:6",
        "1 | query {",
        "2 |   bad!",
        "  |      ^",
        "3 | }",
    ]
    .join("\n");
    assert_eq!(error.to_string(), expected);
}

#[test]
fn visitor_edits_do_not_touch_the_source_tree() {
    use graphql_language::visit;
    use graphql_language::VisitAction;
    use graphql_language::Visitor;

    struct DropDeprecated;
    impl Visitor for DropDeprecated {
        fn enter(
            &mut self,
            node: &AstNode,
            _: &[graphql_language::PathElement],
            _: &[AstNode],
        ) -> VisitAction {
            if let AstNode::Field(field) = node {
                if field.directives.iter().any(|d| d.name == "deprecated") {
                    return VisitAction::Delete;
                }
            }
            VisitAction::Continue
        }
    }

    let document = parse("{ keep dropped @deprecated also }").unwrap();
    let root = AstNode::Document(document);
    let edited = visit(&root, &mut DropDeprecated).unwrap();
    assert_eq!(print(&edited), "{\n  keep\n  also\n}");
    assert_eq!(print(&root), "{\n  keep\n  dropped @deprecated\n  also\n}");
}
