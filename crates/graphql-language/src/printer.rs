//! The canonical printer: AST back to GraphQL source text.
//!
//! Output is normalized — 2-space indentation, one selection per line,
//! definitions separated by blank lines — so printing a parsed document and
//! reparsing it reproduces the same tree (modulo locations).

use crate::ast::*;
use crate::block_string::print_block_string;
use crate::node::Node;
use std::fmt;

/// Lines longer than this get their field arguments split one per line.
const MAX_LINE_LENGTH: usize = 80;

/// Print any node in canonical form.
pub fn print(node: &AstNode) -> String {
    match node {
        AstNode::Document(n) => print_document(n),
        AstNode::OperationDefinition(n) => print_operation_definition(n),
        AstNode::VariableDefinition(n) => print_variable_definition(n),
        AstNode::Variable(n) => print_variable(n),
        AstNode::SelectionSet(n) => print_selection_set(n),
        AstNode::Field(n) => print_field(n),
        AstNode::Argument(n) => print_argument(n),
        AstNode::FragmentSpread(n) => print_fragment_spread(n),
        AstNode::InlineFragment(n) => print_inline_fragment(n),
        AstNode::FragmentDefinition(n) => print_fragment_definition(n),
        AstNode::IntValue(n) => n.value.clone(),
        AstNode::FloatValue(n) => n.value.clone(),
        AstNode::StringValue(n) => print_string_value(n),
        AstNode::BooleanValue(n) => print_boolean(n.value),
        AstNode::NullValue(_) => "null".to_string(),
        AstNode::EnumValue(n) => n.value.clone(),
        AstNode::ListValue(n) => print_list_value(n),
        AstNode::ObjectValue(n) => print_object_value(n),
        AstNode::ObjectField(n) => print_object_field(n),
        AstNode::Directive(n) => print_directive(n),
        AstNode::NamedType(n) => n.name.clone(),
        AstNode::ListType(n) => print_list_type(n),
        AstNode::NonNullType(n) => print_non_null_type(n),
        AstNode::SchemaDefinition(n) => print_schema_definition(n),
        AstNode::OperationTypeDefinition(n) => print_operation_type_definition(n),
        AstNode::ScalarTypeDefinition(n) => print_scalar_type_definition(n),
        AstNode::ObjectTypeDefinition(n) => print_object_type_definition(n),
        AstNode::FieldDefinition(n) => print_field_definition(n),
        AstNode::InputValueDefinition(n) => print_input_value_definition(n),
        AstNode::InterfaceTypeDefinition(n) => print_interface_type_definition(n),
        AstNode::UnionTypeDefinition(n) => print_union_type_definition(n),
        AstNode::EnumTypeDefinition(n) => print_enum_type_definition(n),
        AstNode::EnumValueDefinition(n) => print_enum_value_definition(n),
        AstNode::InputObjectTypeDefinition(n) => print_input_object_type_definition(n),
        AstNode::DirectiveDefinition(n) => print_directive_definition(n),
        AstNode::SchemaExtension(n) => print_schema_extension(n),
        AstNode::ScalarTypeExtension(n) => print_scalar_type_extension(n),
        AstNode::ObjectTypeExtension(n) => print_object_type_extension(n),
        AstNode::InterfaceTypeExtension(n) => print_interface_type_extension(n),
        AstNode::UnionTypeExtension(n) => print_union_type_extension(n),
        AstNode::EnumTypeExtension(n) => print_enum_type_extension(n),
        AstNode::InputObjectTypeExtension(n) => print_input_object_type_extension(n),
    }
}

// Layout helpers shared by every production.

/// Join the non-empty items with `separator`.
fn join(items: &[String], separator: &str) -> String {
    items
        .iter()
        .filter(|item| !item.is_empty())
        .cloned()
        .collect::<Vec<String>>()
        .join(separator)
}

/// `start + content + end` when `content` is non-empty, nothing otherwise.
fn wrap(start: &str, content: &str, end: &str) -> String {
    if content.is_empty() {
        String::new()
    } else {
        format!("{start}{content}{end}")
    }
}

/// An indented `{ ... }` block, or nothing for an empty list.
fn block(items: &[String]) -> String {
    if items.is_empty() {
        String::new()
    } else {
        format!("{{\n{}\n}}", indent(&items.join("\n")))
    }
}

fn indent(content: &str) -> String {
    wrap("  ", &content.replace('\n', "\n  "), "")
}

fn has_multiline_items(items: &[String]) -> bool {
    items.iter().any(|item| item.contains('\n'))
}

fn print_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{0008}' => out.push_str("\\b"),
            '\u{000C}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

fn print_string_value(node: &StringValue) -> String {
    if node.block {
        print_block_string(&node.value, false)
    } else {
        print_string(&node.value)
    }
}

/// Descriptions prefer the multi-line block form once they stop fitting
/// comfortably on one line.
fn print_description(description: &Option<Node<StringValue>>) -> String {
    match description {
        None => String::new(),
        Some(node) if node.block => {
            let prefer_multiple_lines = node.value.chars().count() > 70;
            format!("{}\n", print_block_string(&node.value, prefer_multiple_lines))
        }
        Some(node) => format!("{}\n", print_string(&node.value)),
    }
}

fn print_boolean(value: bool) -> String {
    if value { "true" } else { "false" }.to_string()
}

fn print_documents_definitions(definitions: &[Definition]) -> Vec<String> {
    definitions.iter().map(print_definition).collect()
}

fn print_document(document: &Document) -> String {
    join(&print_documents_definitions(&document.definitions), "\n\n")
}

fn print_definition(definition: &Definition) -> String {
    print(&AstNode::from(definition))
}

fn print_operation_definition(node: &OperationDefinition) -> String {
    let variable_definitions = wrap(
        "(",
        &join(&print_all(&node.variable_definitions, |v| print_variable_definition(v)), ", "),
        ")",
    );
    let name_and_variables = format!(
        "{}{}",
        node.name.clone().unwrap_or_default(),
        variable_definitions
    );
    let prefix = join(
        &[
            node.operation.name().to_string(),
            name_and_variables,
            print_directives(&node.directives),
        ],
        " ",
    );
    let selection_set = print_selection_set(&node.selection_set);
    // The query shorthand.
    if prefix == "query" {
        selection_set
    } else {
        format!("{prefix} {selection_set}")
    }
}

fn print_variable_definition(node: &VariableDefinition) -> String {
    format!(
        "{}: {}{}{}",
        print_variable(&node.variable),
        print_type(&node.ty),
        wrap(
            " = ",
            &node.default_value.as_ref().map(print_value).unwrap_or_default(),
            ""
        ),
        wrap(" ", &print_directives(&node.directives), ""),
    )
}

fn print_variable(node: &Variable) -> String {
    format!("${}", node.name)
}

fn print_selection_set(node: &SelectionSet) -> String {
    block(&print_all(&node.selections, |s| print(&AstNode::from(s))))
}

fn print_field(node: &Field) -> String {
    let prefix = format!(
        "{}{}",
        node.alias
            .as_ref()
            .map(|alias| format!("{alias}: "))
            .unwrap_or_default(),
        node.name
    );
    let arguments = print_all(&node.arguments, |a| print_argument(a));
    let mut arguments_line = format!("{prefix}{}", wrap("(", &join(&arguments, ", "), ")"));
    if arguments_line.chars().count() > MAX_LINE_LENGTH {
        arguments_line = format!(
            "{prefix}{}",
            wrap("(\n", &indent(&join(&arguments, "\n")), "\n)")
        );
    }
    join(
        &[
            arguments_line,
            print_directives(&node.directives),
            node.selection_set
                .as_ref()
                .map(|s| print_selection_set(s))
                .unwrap_or_default(),
        ],
        " ",
    )
}

fn print_argument(node: &Argument) -> String {
    format!("{}: {}", node.name, print_value(&node.value))
}

fn print_fragment_spread(node: &FragmentSpread) -> String {
    format!(
        "...{}{}{}",
        node.fragment_name,
        wrap(
            "(",
            &join(&print_all(&node.arguments, |a| print_argument(a)), ", "),
            ")"
        ),
        wrap(" ", &print_directives(&node.directives), ""),
    )
}

fn print_inline_fragment(node: &InlineFragment) -> String {
    join(
        &[
            "...".to_string(),
            node.type_condition
                .as_ref()
                .map(|t| format!("on {}", t.name))
                .unwrap_or_default(),
            print_directives(&node.directives),
            print_selection_set(&node.selection_set),
        ],
        " ",
    )
}

fn print_fragment_definition(node: &FragmentDefinition) -> String {
    // Variable definitions only appear under the legacy grammar extension.
    format!(
        "fragment {}{} on {} {}{}",
        node.name,
        wrap(
            "(",
            &join(&print_all(&node.variable_definitions, |v| print_variable_definition(v)), ", "),
            ")"
        ),
        node.type_condition.name,
        wrap("", &print_directives(&node.directives), " "),
        print_selection_set(&node.selection_set),
    )
}

fn print_value(value: &Value) -> String {
    print(&AstNode::from(value))
}

fn print_list_value(node: &ListValue) -> String {
    format!("[{}]", join(&print_all(&node.values, print_value), ", "))
}

fn print_object_value(node: &ObjectValue) -> String {
    format!(
        "{{{}}}",
        join(&print_all(&node.fields, |f| print_object_field(f)), ", ")
    )
}

fn print_object_field(node: &ObjectField) -> String {
    format!("{}: {}", node.name, print_value(&node.value))
}

fn print_directives(directives: &[Node<Directive>]) -> String {
    join(&print_all(directives, |d| print_directive(d)), " ")
}

fn print_directive(node: &Directive) -> String {
    format!(
        "@{}{}",
        node.name,
        wrap(
            "(",
            &join(&print_all(&node.arguments, |a| print_argument(a)), ", "),
            ")"
        ),
    )
}

fn print_type(ty: &Type) -> String {
    match ty {
        Type::Named(n) => n.name.clone(),
        Type::List(n) => print_list_type(n),
        Type::NonNull(n) => print_non_null_type(n),
    }
}

fn print_list_type(node: &ListType) -> String {
    format!("[{}]", print_type(&node.ty))
}

fn print_non_null_type(node: &NonNullType) -> String {
    let inner = match &node.ty {
        NullableType::Named(n) => n.name.clone(),
        NullableType::List(n) => print_list_type(n),
    };
    format!("{inner}!")
}

fn print_schema_definition(node: &SchemaDefinition) -> String {
    format!(
        "{}{}",
        print_description(&node.description),
        join(
            &[
                "schema".to_string(),
                print_directives(&node.directives),
                block(&print_all(&node.operation_types, |o| {
                    print_operation_type_definition(o)
                })),
            ],
            " ",
        )
    )
}

fn print_operation_type_definition(node: &OperationTypeDefinition) -> String {
    format!("{}: {}", node.operation.name(), node.ty.name)
}

fn print_scalar_type_definition(node: &ScalarTypeDefinition) -> String {
    format!(
        "{}{}",
        print_description(&node.description),
        join(
            &[
                "scalar".to_string(),
                node.name.clone(),
                print_directives(&node.directives),
            ],
            " ",
        )
    )
}

fn print_implements(interfaces: &[Node<NamedType>]) -> String {
    wrap(
        "implements ",
        &join(&print_all(interfaces, |i| i.name.clone()), " & "),
        "",
    )
}

fn print_object_type_definition(node: &ObjectTypeDefinition) -> String {
    format!(
        "{}{}",
        print_description(&node.description),
        join(
            &[
                "type".to_string(),
                node.name.clone(),
                print_implements(&node.interfaces),
                print_directives(&node.directives),
                block(&print_all(&node.fields, |f| print_field_definition(f))),
            ],
            " ",
        )
    )
}

fn print_field_definition(node: &FieldDefinition) -> String {
    let arguments = print_all(&node.arguments, |a| print_input_value_definition(a));
    let arguments = if has_multiline_items(&arguments) {
        wrap("(\n", &indent(&join(&arguments, "\n")), "\n)")
    } else {
        wrap("(", &join(&arguments, ", "), ")")
    };
    format!(
        "{}{}{}: {}{}",
        print_description(&node.description),
        node.name,
        arguments,
        print_type(&node.ty),
        wrap(" ", &print_directives(&node.directives), ""),
    )
}

fn print_input_value_definition(node: &InputValueDefinition) -> String {
    format!(
        "{}{}",
        print_description(&node.description),
        join(
            &[
                format!("{}: {}", node.name, print_type(&node.ty)),
                wrap(
                    "= ",
                    &node.default_value.as_ref().map(print_value).unwrap_or_default(),
                    ""
                ),
                print_directives(&node.directives),
            ],
            " ",
        )
    )
}

fn print_interface_type_definition(node: &InterfaceTypeDefinition) -> String {
    format!(
        "{}{}",
        print_description(&node.description),
        join(
            &[
                "interface".to_string(),
                node.name.clone(),
                print_implements(&node.interfaces),
                print_directives(&node.directives),
                block(&print_all(&node.fields, |f| print_field_definition(f))),
            ],
            " ",
        )
    )
}

fn print_union_type_definition(node: &UnionTypeDefinition) -> String {
    format!(
        "{}{}",
        print_description(&node.description),
        join(
            &[
                "union".to_string(),
                node.name.clone(),
                print_directives(&node.directives),
                wrap(
                    "= ",
                    &join(&print_all(&node.types, |t| t.name.clone()), " | "),
                    ""
                ),
            ],
            " ",
        )
    )
}

fn print_enum_type_definition(node: &EnumTypeDefinition) -> String {
    format!(
        "{}{}",
        print_description(&node.description),
        join(
            &[
                "enum".to_string(),
                node.name.clone(),
                print_directives(&node.directives),
                block(&print_all(&node.values, |v| print_enum_value_definition(v))),
            ],
            " ",
        )
    )
}

fn print_enum_value_definition(node: &EnumValueDefinition) -> String {
    format!(
        "{}{}",
        print_description(&node.description),
        join(
            &[node.name.clone(), print_directives(&node.directives)],
            " ",
        )
    )
}

fn print_input_object_type_definition(node: &InputObjectTypeDefinition) -> String {
    format!(
        "{}{}",
        print_description(&node.description),
        join(
            &[
                "input".to_string(),
                node.name.clone(),
                print_directives(&node.directives),
                block(&print_all(&node.fields, |f| print_input_value_definition(f))),
            ],
            " ",
        )
    )
}

fn print_directive_definition(node: &DirectiveDefinition) -> String {
    let arguments = print_all(&node.arguments, |a| print_input_value_definition(a));
    let arguments = if has_multiline_items(&arguments) {
        wrap("(\n", &indent(&join(&arguments, "\n")), "\n)")
    } else {
        wrap("(", &join(&arguments, ", "), ")")
    };
    format!(
        "{}directive @{}{}{} on {}",
        print_description(&node.description),
        node.name,
        arguments,
        if node.repeatable { " repeatable" } else { "" },
        node.locations
            .iter()
            .map(|location| location.name())
            .collect::<Vec<&str>>()
            .join(" | "),
    )
}

fn print_schema_extension(node: &SchemaExtension) -> String {
    join(
        &[
            "extend schema".to_string(),
            print_directives(&node.directives),
            block(&print_all(&node.operation_types, |o| {
                print_operation_type_definition(o)
            })),
        ],
        " ",
    )
}

fn print_scalar_type_extension(node: &ScalarTypeExtension) -> String {
    join(
        &[
            "extend scalar".to_string(),
            node.name.clone(),
            print_directives(&node.directives),
        ],
        " ",
    )
}

fn print_object_type_extension(node: &ObjectTypeExtension) -> String {
    join(
        &[
            "extend type".to_string(),
            node.name.clone(),
            print_implements(&node.interfaces),
            print_directives(&node.directives),
            block(&print_all(&node.fields, |f| print_field_definition(f))),
        ],
        " ",
    )
}

fn print_interface_type_extension(node: &InterfaceTypeExtension) -> String {
    join(
        &[
            "extend interface".to_string(),
            node.name.clone(),
            print_implements(&node.interfaces),
            print_directives(&node.directives),
            block(&print_all(&node.fields, |f| print_field_definition(f))),
        ],
        " ",
    )
}

fn print_union_type_extension(node: &UnionTypeExtension) -> String {
    join(
        &[
            "extend union".to_string(),
            node.name.clone(),
            print_directives(&node.directives),
            wrap(
                "= ",
                &join(&print_all(&node.types, |t| t.name.clone()), " | "),
                ""
            ),
        ],
        " ",
    )
}

fn print_enum_type_extension(node: &EnumTypeExtension) -> String {
    join(
        &[
            "extend enum".to_string(),
            node.name.clone(),
            print_directives(&node.directives),
            block(&print_all(&node.values, |v| print_enum_value_definition(v))),
        ],
        " ",
    )
}

fn print_input_object_type_extension(node: &InputObjectTypeExtension) -> String {
    join(
        &[
            "extend input".to_string(),
            node.name.clone(),
            print_directives(&node.directives),
            block(&print_all(&node.fields, |f| print_input_value_definition(f))),
        ],
        " ",
    )
}

fn print_all<T>(items: &[T], f: impl Fn(&T) -> String) -> Vec<String> {
    items.iter().map(|item| f(item)).collect()
}

macro_rules! display_via_printer {
    ($ty:ty, $print:expr) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let print: fn(&$ty) -> String = $print;
                f.write_str(&print(self))
            }
        }
    };
}

display_via_printer!(Document, print_document);
display_via_printer!(Definition, print_definition);
display_via_printer!(OperationDefinition, print_operation_definition);
display_via_printer!(FragmentDefinition, print_fragment_definition);
display_via_printer!(SelectionSet, print_selection_set);
display_via_printer!(Field, print_field);
display_via_printer!(Directive, print_directive);
display_via_printer!(Value, print_value);
display_via_printer!(Type, print_type);
display_via_printer!(AstNode, |node| print(node));

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use crate::parser::Parser;
    use pretty_assertions::assert_eq;
    use unindent::unindent;

    fn printed(source: &str) -> String {
        print(&AstNode::Document(parse(source).unwrap()))
    }

    #[test]
    fn prints_minimal_query() {
        assert_eq!(printed("{ hello }"), "{\n  hello\n}");
    }

    #[test]
    fn collapses_anonymous_query_shorthand() {
        assert_eq!(printed("query { hello }"), "{\n  hello\n}");
        assert_eq!(printed("mutation { hello }"), "mutation {\n  hello\n}");
        assert_eq!(printed("query Q { hello }"), "query Q {\n  hello\n}");
        assert_eq!(printed("query @d { hello }"), "query @d {\n  hello\n}");
    }

    #[test]
    fn prints_operations_with_everything_present() {
        let expected = unindent(
            "
            query Q($x: Int = 3, $y: [String!]) @op {
              f(a: $x) @d {
                alias: nested
                ...F
                ... on T @i {
                  deep
                }
              }
            }

            fragment F on T @fd {
              leaf
            }",
        );
        assert_eq!(
            printed(
                "query Q($x: Int = 3, $y: [String!]) @op { f(a: $x) @d { \
                 alias: nested ...F ... on T @i { deep } } } \
                 fragment F on T @fd { leaf }"
            ),
            expected
        );
    }

    #[test]
    fn prints_value_literals_compactly() {
        assert_eq!(
            printed("{ f(a: {b: [1, 2.5, \"s\", true, null, E], c: {}}) }"),
            "{\n  f(a: {b: [1, 2.5, \"s\", true, null, E], c: {}})\n}"
        );
    }

    #[test]
    fn escapes_strings() {
        let document = parse("{ f(a: \"quote \\\" slash \\\\ nl \\n\") }").unwrap();
        assert_eq!(
            print(&AstNode::Document(document)),
            "{\n  f(a: \"quote \\\" slash \\\\ nl \\n\")\n}"
        );
    }

    #[test]
    fn wraps_long_argument_lines() {
        let long = "x".repeat(90);
        let source = format!("{{ f(arg: \"{long}\") }}");
        let expected = format!("{{\n  f(\n    arg: \"{long}\"\n  )\n}}");
        assert_eq!(printed(&source), expected);
    }

    #[test]
    fn prints_type_system_definitions() {
        let source = "\
            \"A scalar\" scalar Url @spec \
            schema { query: Q } \
            type T implements A & B @d { \
              \"field docs\" f(x: Int! = 4): [String!]! @fd \
            } \
            interface I { f: Int } \
            union U @u = A | B \
            enum E { \"first\" A @dep B } \
            input In { a: Int = 1 @x b: String } \
            directive @dd(arg: Int) repeatable on FIELD | INLINE_FRAGMENT";
        let expected = unindent(
            "
            \"A scalar\"
            scalar Url @spec

            schema {
              query: Q
            }

            type T implements A & B @d {
              \"field docs\"
              f(x: Int! = 4): [String!]! @fd
            }

            interface I {
              f: Int
            }

            union U @u = A | B

            enum E {
              \"first\"
              A @dep
              B
            }

            input In {
              a: Int = 1 @x
              b: String
            }

            directive @dd(arg: Int) repeatable on FIELD | INLINE_FRAGMENT",
        );
        assert_eq!(printed(source), expected);
    }

    #[test]
    fn prints_extensions() {
        let expected = unindent(
            "
            extend schema @d

            extend type T implements I {
              f: Int
            }

            extend union U = A

            extend scalar S @s",
        );
        assert_eq!(
            printed(
                "extend schema @d \
                 extend type T implements I { f: Int } \
                 extend union U = A \
                 extend scalar S @s"
            ),
            expected
        );
    }

    #[test]
    fn keeps_block_strings_in_block_form() {
        // The block string's own lines pick up the selection indentation;
        // reparsing dedents them back out.
        assert_eq!(
            printed("{ f(s: \"\"\"multi\nline\"\"\") }"),
            "{\n  f(s: \"\"\"\n  multi\n  line\n  \"\"\")\n}"
        );
    }

    #[test]
    fn multiline_argument_descriptions_split_definitions() {
        let source = "type T { f(\"\"\"docs\nhere\"\"\" x: Int): Int }";
        let expected = unindent(
            "
            type T {
              f(
                \"\"\"
                docs
                here
                \"\"\"
                x: Int
              ): Int
            }",
        );
        assert_eq!(printed(source), expected);
    }

    #[test]
    fn printing_is_idempotent() {
        let sources = [
            "{ a b(c: 1) { d } }",
            "query Q($v: [Int!] = [1, 2]) @d { f(x: $v) }",
            "type T implements A { f(x: Int = 3): String }",
            "union U = | A | B",
            "enum E { A B }",
            "schema @d { query: Q }",
            "directive @d on FIELD",
        ];
        for source in sources {
            let once = printed(source);
            assert_eq!(printed(&once), once, "not idempotent for {source:?}");
        }
    }

    #[test]
    fn print_then_parse_reproduces_the_tree() {
        let source = "query Q($x: Int = 3) { f(a: $x) @d { ...F } } \
                      fragment F on T { leaf(s: \"str\") }";
        let document = Parser::new(source).no_location().parse_document().unwrap();
        let reprinted = print(&AstNode::Document(document.clone()));
        let reparsed = Parser::new(reprinted.as_str())
            .no_location()
            .parse_document()
            .unwrap();
        assert_eq!(document, reparsed);
    }
}
