use std::fmt;

/// The closed set of AST node kinds.
///
/// Names (`Kind::as_str`) are the tags that appear in the JSON
/// representation, and [`child_edge_keys`][Kind::child_edge_keys] is the
/// table that drives traversal: for each kind, the node-bearing fields in
/// visiting order. Name-valued fields are plain strings in this AST and do
/// not appear as edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Document,
    OperationDefinition,
    VariableDefinition,
    Variable,
    SelectionSet,
    Field,
    Argument,
    FragmentSpread,
    InlineFragment,
    FragmentDefinition,
    IntValue,
    FloatValue,
    StringValue,
    BooleanValue,
    NullValue,
    EnumValue,
    ListValue,
    ObjectValue,
    ObjectField,
    Directive,
    NamedType,
    ListType,
    NonNullType,
    SchemaDefinition,
    OperationTypeDefinition,
    ScalarTypeDefinition,
    ObjectTypeDefinition,
    FieldDefinition,
    InputValueDefinition,
    InterfaceTypeDefinition,
    UnionTypeDefinition,
    EnumTypeDefinition,
    EnumValueDefinition,
    InputObjectTypeDefinition,
    DirectiveDefinition,
    SchemaExtension,
    ScalarTypeExtension,
    ObjectTypeExtension,
    InterfaceTypeExtension,
    UnionTypeExtension,
    EnumTypeExtension,
    InputObjectTypeExtension,
}

impl Kind {
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Document => "Document",
            Kind::OperationDefinition => "OperationDefinition",
            Kind::VariableDefinition => "VariableDefinition",
            Kind::Variable => "Variable",
            Kind::SelectionSet => "SelectionSet",
            Kind::Field => "Field",
            Kind::Argument => "Argument",
            Kind::FragmentSpread => "FragmentSpread",
            Kind::InlineFragment => "InlineFragment",
            Kind::FragmentDefinition => "FragmentDefinition",
            Kind::IntValue => "IntValue",
            Kind::FloatValue => "FloatValue",
            Kind::StringValue => "StringValue",
            Kind::BooleanValue => "BooleanValue",
            Kind::NullValue => "NullValue",
            Kind::EnumValue => "EnumValue",
            Kind::ListValue => "ListValue",
            Kind::ObjectValue => "ObjectValue",
            Kind::ObjectField => "ObjectField",
            Kind::Directive => "Directive",
            Kind::NamedType => "NamedType",
            Kind::ListType => "ListType",
            Kind::NonNullType => "NonNullType",
            Kind::SchemaDefinition => "SchemaDefinition",
            Kind::OperationTypeDefinition => "OperationTypeDefinition",
            Kind::ScalarTypeDefinition => "ScalarTypeDefinition",
            Kind::ObjectTypeDefinition => "ObjectTypeDefinition",
            Kind::FieldDefinition => "FieldDefinition",
            Kind::InputValueDefinition => "InputValueDefinition",
            Kind::InterfaceTypeDefinition => "InterfaceTypeDefinition",
            Kind::UnionTypeDefinition => "UnionTypeDefinition",
            Kind::EnumTypeDefinition => "EnumTypeDefinition",
            Kind::EnumValueDefinition => "EnumValueDefinition",
            Kind::InputObjectTypeDefinition => "InputObjectTypeDefinition",
            Kind::DirectiveDefinition => "DirectiveDefinition",
            Kind::SchemaExtension => "SchemaExtension",
            Kind::ScalarTypeExtension => "ScalarTypeExtension",
            Kind::ObjectTypeExtension => "ObjectTypeExtension",
            Kind::InterfaceTypeExtension => "InterfaceTypeExtension",
            Kind::UnionTypeExtension => "UnionTypeExtension",
            Kind::EnumTypeExtension => "EnumTypeExtension",
            Kind::InputObjectTypeExtension => "InputObjectTypeExtension",
        }
    }

    /// The ordered child edges of this kind. Traversal and visitation
    /// follow this table, never the struct layout.
    pub fn child_edge_keys(self) -> &'static [&'static str] {
        match self {
            Kind::Document => &["definitions"],
            Kind::OperationDefinition => &["variableDefinitions", "directives", "selectionSet"],
            Kind::VariableDefinition => &["variable", "type", "defaultValue", "directives"],
            Kind::Variable => &[],
            Kind::SelectionSet => &["selections"],
            Kind::Field => &["arguments", "directives", "selectionSet"],
            Kind::Argument => &["value"],
            Kind::FragmentSpread => &["arguments", "directives"],
            Kind::InlineFragment => &["typeCondition", "directives", "selectionSet"],
            Kind::FragmentDefinition => {
                &["variableDefinitions", "typeCondition", "directives", "selectionSet"]
            }
            Kind::IntValue
            | Kind::FloatValue
            | Kind::StringValue
            | Kind::BooleanValue
            | Kind::NullValue
            | Kind::EnumValue => &[],
            Kind::ListValue => &["values"],
            Kind::ObjectValue => &["fields"],
            Kind::ObjectField => &["value"],
            Kind::Directive => &["arguments"],
            Kind::NamedType => &[],
            Kind::ListType => &["type"],
            Kind::NonNullType => &["type"],
            Kind::SchemaDefinition => &["description", "directives", "operationTypes"],
            Kind::OperationTypeDefinition => &["type"],
            Kind::ScalarTypeDefinition => &["description", "directives"],
            Kind::ObjectTypeDefinition => {
                &["description", "interfaces", "directives", "fields"]
            }
            Kind::FieldDefinition => &["description", "arguments", "type", "directives"],
            Kind::InputValueDefinition => {
                &["description", "type", "defaultValue", "directives"]
            }
            Kind::InterfaceTypeDefinition => {
                &["description", "interfaces", "directives", "fields"]
            }
            Kind::UnionTypeDefinition => &["description", "directives", "types"],
            Kind::EnumTypeDefinition => &["description", "directives", "values"],
            Kind::EnumValueDefinition => &["description", "directives"],
            Kind::InputObjectTypeDefinition => &["description", "directives", "fields"],
            Kind::DirectiveDefinition => &["description", "arguments"],
            Kind::SchemaExtension => &["directives", "operationTypes"],
            Kind::ScalarTypeExtension => &["directives"],
            Kind::ObjectTypeExtension => &["interfaces", "directives", "fields"],
            Kind::InterfaceTypeExtension => &["interfaces", "directives", "fields"],
            Kind::UnionTypeExtension => &["directives", "types"],
            Kind::EnumTypeExtension => &["directives", "values"],
            Kind::InputObjectTypeExtension => &["directives", "fields"],
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
