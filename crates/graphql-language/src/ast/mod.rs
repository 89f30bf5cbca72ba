//! Typed abstract syntax tree for GraphQL documents.
//!
//! The tree faithfully represents documents conforming to the GraphQL
//! syntactic grammar; it carries no type information and may or may not be
//! valid against a schema. Nodes are wrapped in [`Node`], a reference-counted
//! smart pointer carrying the optional source [`Location`](crate::Location),
//! so subtrees are shared rather than cloned — notably between a tree and
//! the edited copies a [visitor](crate::visitor) produces.

mod edges;
mod json;
mod kind;
mod predicates;

pub use kind::Kind;
pub use predicates::*;

pub(crate) use edges::rebuild;
pub(crate) use edges::EdgeEdits;
pub(crate) use edges::EdgeValue;

use crate::node::Location;
use crate::node::Node;
use std::fmt;

/// A GraphQL identifier. Names are not tree nodes in this AST.
pub type Name = String;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Document {
    pub definitions: Vec<Definition>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Definition {
    OperationDefinition(Node<OperationDefinition>),
    FragmentDefinition(Node<FragmentDefinition>),
    SchemaDefinition(Node<SchemaDefinition>),
    ScalarTypeDefinition(Node<ScalarTypeDefinition>),
    ObjectTypeDefinition(Node<ObjectTypeDefinition>),
    InterfaceTypeDefinition(Node<InterfaceTypeDefinition>),
    UnionTypeDefinition(Node<UnionTypeDefinition>),
    EnumTypeDefinition(Node<EnumTypeDefinition>),
    InputObjectTypeDefinition(Node<InputObjectTypeDefinition>),
    DirectiveDefinition(Node<DirectiveDefinition>),
    SchemaExtension(Node<SchemaExtension>),
    ScalarTypeExtension(Node<ScalarTypeExtension>),
    ObjectTypeExtension(Node<ObjectTypeExtension>),
    InterfaceTypeExtension(Node<InterfaceTypeExtension>),
    UnionTypeExtension(Node<UnionTypeExtension>),
    EnumTypeExtension(Node<EnumTypeExtension>),
    InputObjectTypeExtension(Node<InputObjectTypeExtension>),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OperationDefinition {
    pub operation: OperationType,
    pub name: Option<Name>,
    pub variable_definitions: Vec<Node<VariableDefinition>>,
    pub directives: Vec<Node<Directive>>,
    pub selection_set: Node<SelectionSet>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationType {
    Query,
    Mutation,
    Subscription,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VariableDefinition {
    pub variable: Node<Variable>,
    pub ty: Type,
    pub default_value: Option<Value>,
    pub directives: Vec<Node<Directive>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Variable {
    pub name: Name,
}

/// Always non-empty in a parsed document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SelectionSet {
    pub selections: Vec<Selection>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selection {
    Field(Node<Field>),
    FragmentSpread(Node<FragmentSpread>),
    InlineFragment(Node<InlineFragment>),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Field {
    pub alias: Option<Name>,
    pub name: Name,
    pub arguments: Vec<Node<Argument>>,
    pub directives: Vec<Node<Directive>>,
    pub selection_set: Option<Node<SelectionSet>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Argument {
    pub name: Name,
    pub value: Value,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FragmentSpread {
    pub fragment_name: Name,
    /// Only populated under
    /// [`experimental_fragment_arguments`](crate::Parser::experimental_fragment_arguments).
    pub arguments: Vec<Node<Argument>>,
    pub directives: Vec<Node<Directive>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InlineFragment {
    pub type_condition: Option<Node<NamedType>>,
    pub directives: Vec<Node<Directive>>,
    pub selection_set: Node<SelectionSet>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FragmentDefinition {
    pub name: Name,
    /// Only populated under
    /// [`allow_legacy_fragment_variables`](crate::Parser::allow_legacy_fragment_variables).
    pub variable_definitions: Vec<Node<VariableDefinition>>,
    pub type_condition: Node<NamedType>,
    pub directives: Vec<Node<Directive>>,
    pub selection_set: Node<SelectionSet>,
}

/// A value literal.
///
/// Constancy is not a separate branch of the tree: use
/// [`is_const_value_node`] to check that a value contains no variables.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    Variable(Node<Variable>),
    Int(Node<IntValue>),
    Float(Node<FloatValue>),
    String(Node<StringValue>),
    Boolean(Node<BooleanValue>),
    Null(Node<NullValue>),
    Enum(Node<EnumValue>),
    List(Node<ListValue>),
    Object(Node<ObjectValue>),
}

/// An integer literal, kept as the text that was read so printing cannot
/// lose precision.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IntValue {
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FloatValue {
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StringValue {
    /// The decoded value, escape sequences resolved and block strings
    /// dedented.
    pub value: String,
    /// Whether the literal was written in block form. Preserved so a
    /// reprint keeps the author's choice.
    pub block: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BooleanValue {
    pub value: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NullValue;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EnumValue {
    pub value: Name,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListValue {
    pub values: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectValue {
    pub fields: Vec<Node<ObjectField>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectField {
    pub name: Name,
    pub value: Value,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Directive {
    pub name: Name,
    pub arguments: Vec<Node<Argument>>,
}

/// A type reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    Named(Node<NamedType>),
    List(Node<ListType>),
    NonNull(Node<NonNullType>),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NamedType {
    pub name: Name,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListType {
    pub ty: Type,
}

/// What a non-null wrapper may contain. Non-null cannot wrap non-null, and
/// this type makes that unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NullableType {
    Named(Node<NamedType>),
    List(Node<ListType>),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NonNullType {
    pub ty: NullableType,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SchemaDefinition {
    pub description: Option<Node<StringValue>>,
    pub directives: Vec<Node<Directive>>,
    pub operation_types: Vec<Node<OperationTypeDefinition>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OperationTypeDefinition {
    pub operation: OperationType,
    pub ty: Node<NamedType>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScalarTypeDefinition {
    pub description: Option<Node<StringValue>>,
    pub name: Name,
    pub directives: Vec<Node<Directive>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectTypeDefinition {
    pub description: Option<Node<StringValue>>,
    pub name: Name,
    pub interfaces: Vec<Node<NamedType>>,
    pub directives: Vec<Node<Directive>>,
    pub fields: Vec<Node<FieldDefinition>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldDefinition {
    pub description: Option<Node<StringValue>>,
    pub name: Name,
    pub arguments: Vec<Node<InputValueDefinition>>,
    pub ty: Type,
    pub directives: Vec<Node<Directive>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InputValueDefinition {
    pub description: Option<Node<StringValue>>,
    pub name: Name,
    pub ty: Type,
    pub default_value: Option<Value>,
    pub directives: Vec<Node<Directive>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InterfaceTypeDefinition {
    pub description: Option<Node<StringValue>>,
    pub name: Name,
    pub interfaces: Vec<Node<NamedType>>,
    pub directives: Vec<Node<Directive>>,
    pub fields: Vec<Node<FieldDefinition>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnionTypeDefinition {
    pub description: Option<Node<StringValue>>,
    pub name: Name,
    pub directives: Vec<Node<Directive>>,
    pub types: Vec<Node<NamedType>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EnumTypeDefinition {
    pub description: Option<Node<StringValue>>,
    pub name: Name,
    pub directives: Vec<Node<Directive>>,
    pub values: Vec<Node<EnumValueDefinition>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EnumValueDefinition {
    pub description: Option<Node<StringValue>>,
    pub name: Name,
    pub directives: Vec<Node<Directive>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InputObjectTypeDefinition {
    pub description: Option<Node<StringValue>>,
    pub name: Name,
    pub directives: Vec<Node<Directive>>,
    pub fields: Vec<Node<InputValueDefinition>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DirectiveDefinition {
    pub description: Option<Node<StringValue>>,
    pub name: Name,
    pub arguments: Vec<Node<InputValueDefinition>>,
    pub repeatable: bool,
    pub locations: Vec<DirectiveLocation>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectiveLocation {
    Query,
    Mutation,
    Subscription,
    Field,
    FragmentDefinition,
    FragmentSpread,
    InlineFragment,
    VariableDefinition,
    Schema,
    Scalar,
    Object,
    FieldDefinition,
    ArgumentDefinition,
    Interface,
    Union,
    Enum,
    EnumValue,
    InputObject,
    InputFieldDefinition,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SchemaExtension {
    pub directives: Vec<Node<Directive>>,
    pub operation_types: Vec<Node<OperationTypeDefinition>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScalarTypeExtension {
    pub name: Name,
    pub directives: Vec<Node<Directive>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectTypeExtension {
    pub name: Name,
    pub interfaces: Vec<Node<NamedType>>,
    pub directives: Vec<Node<Directive>>,
    pub fields: Vec<Node<FieldDefinition>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InterfaceTypeExtension {
    pub name: Name,
    pub interfaces: Vec<Node<NamedType>>,
    pub directives: Vec<Node<Directive>>,
    pub fields: Vec<Node<FieldDefinition>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnionTypeExtension {
    pub name: Name,
    pub directives: Vec<Node<Directive>>,
    pub types: Vec<Node<NamedType>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EnumTypeExtension {
    pub name: Name,
    pub directives: Vec<Node<Directive>>,
    pub values: Vec<Node<EnumValueDefinition>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InputObjectTypeExtension {
    pub name: Name,
    pub directives: Vec<Node<Directive>>,
    pub fields: Vec<Node<InputValueDefinition>>,
}

impl OperationType {
    pub fn name(self) -> &'static str {
        match self {
            OperationType::Query => "query",
            OperationType::Mutation => "mutation",
            OperationType::Subscription => "subscription",
        }
    }
}

impl fmt::Display for OperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl DirectiveLocation {
    pub fn name(self) -> &'static str {
        match self {
            DirectiveLocation::Query => "QUERY",
            DirectiveLocation::Mutation => "MUTATION",
            DirectiveLocation::Subscription => "SUBSCRIPTION",
            DirectiveLocation::Field => "FIELD",
            DirectiveLocation::FragmentDefinition => "FRAGMENT_DEFINITION",
            DirectiveLocation::FragmentSpread => "FRAGMENT_SPREAD",
            DirectiveLocation::InlineFragment => "INLINE_FRAGMENT",
            DirectiveLocation::VariableDefinition => "VARIABLE_DEFINITION",
            DirectiveLocation::Schema => "SCHEMA",
            DirectiveLocation::Scalar => "SCALAR",
            DirectiveLocation::Object => "OBJECT",
            DirectiveLocation::FieldDefinition => "FIELD_DEFINITION",
            DirectiveLocation::ArgumentDefinition => "ARGUMENT_DEFINITION",
            DirectiveLocation::Interface => "INTERFACE",
            DirectiveLocation::Union => "UNION",
            DirectiveLocation::Enum => "ENUM",
            DirectiveLocation::EnumValue => "ENUM_VALUE",
            DirectiveLocation::InputObject => "INPUT_OBJECT",
            DirectiveLocation::InputFieldDefinition => "INPUT_FIELD_DEFINITION",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "QUERY" => DirectiveLocation::Query,
            "MUTATION" => DirectiveLocation::Mutation,
            "SUBSCRIPTION" => DirectiveLocation::Subscription,
            "FIELD" => DirectiveLocation::Field,
            "FRAGMENT_DEFINITION" => DirectiveLocation::FragmentDefinition,
            "FRAGMENT_SPREAD" => DirectiveLocation::FragmentSpread,
            "INLINE_FRAGMENT" => DirectiveLocation::InlineFragment,
            "VARIABLE_DEFINITION" => DirectiveLocation::VariableDefinition,
            "SCHEMA" => DirectiveLocation::Schema,
            "SCALAR" => DirectiveLocation::Scalar,
            "OBJECT" => DirectiveLocation::Object,
            "FIELD_DEFINITION" => DirectiveLocation::FieldDefinition,
            "ARGUMENT_DEFINITION" => DirectiveLocation::ArgumentDefinition,
            "INTERFACE" => DirectiveLocation::Interface,
            "UNION" => DirectiveLocation::Union,
            "ENUM" => DirectiveLocation::Enum,
            "ENUM_VALUE" => DirectiveLocation::EnumValue,
            "INPUT_OBJECT" => DirectiveLocation::InputObject,
            "INPUT_FIELD_DEFINITION" => DirectiveLocation::InputFieldDefinition,
            _ => return None,
        })
    }
}

impl fmt::Display for DirectiveLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A cheap-to-clone handle to any AST node, used by the generic operations:
/// visitation, predicates, and JSON serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AstNode {
    Document(Node<Document>),
    OperationDefinition(Node<OperationDefinition>),
    VariableDefinition(Node<VariableDefinition>),
    Variable(Node<Variable>),
    SelectionSet(Node<SelectionSet>),
    Field(Node<Field>),
    Argument(Node<Argument>),
    FragmentSpread(Node<FragmentSpread>),
    InlineFragment(Node<InlineFragment>),
    FragmentDefinition(Node<FragmentDefinition>),
    IntValue(Node<IntValue>),
    FloatValue(Node<FloatValue>),
    StringValue(Node<StringValue>),
    BooleanValue(Node<BooleanValue>),
    NullValue(Node<NullValue>),
    EnumValue(Node<EnumValue>),
    ListValue(Node<ListValue>),
    ObjectValue(Node<ObjectValue>),
    ObjectField(Node<ObjectField>),
    Directive(Node<Directive>),
    NamedType(Node<NamedType>),
    ListType(Node<ListType>),
    NonNullType(Node<NonNullType>),
    SchemaDefinition(Node<SchemaDefinition>),
    OperationTypeDefinition(Node<OperationTypeDefinition>),
    ScalarTypeDefinition(Node<ScalarTypeDefinition>),
    ObjectTypeDefinition(Node<ObjectTypeDefinition>),
    FieldDefinition(Node<FieldDefinition>),
    InputValueDefinition(Node<InputValueDefinition>),
    InterfaceTypeDefinition(Node<InterfaceTypeDefinition>),
    UnionTypeDefinition(Node<UnionTypeDefinition>),
    EnumTypeDefinition(Node<EnumTypeDefinition>),
    EnumValueDefinition(Node<EnumValueDefinition>),
    InputObjectTypeDefinition(Node<InputObjectTypeDefinition>),
    DirectiveDefinition(Node<DirectiveDefinition>),
    SchemaExtension(Node<SchemaExtension>),
    ScalarTypeExtension(Node<ScalarTypeExtension>),
    ObjectTypeExtension(Node<ObjectTypeExtension>),
    InterfaceTypeExtension(Node<InterfaceTypeExtension>),
    UnionTypeExtension(Node<UnionTypeExtension>),
    EnumTypeExtension(Node<EnumTypeExtension>),
    InputObjectTypeExtension(Node<InputObjectTypeExtension>),
}

macro_rules! for_each_ast_node {
    ($node:expr, $n:ident => $e:expr) => {
        match $node {
            AstNode::Document($n) => $e,
            AstNode::OperationDefinition($n) => $e,
            AstNode::VariableDefinition($n) => $e,
            AstNode::Variable($n) => $e,
            AstNode::SelectionSet($n) => $e,
            AstNode::Field($n) => $e,
            AstNode::Argument($n) => $e,
            AstNode::FragmentSpread($n) => $e,
            AstNode::InlineFragment($n) => $e,
            AstNode::FragmentDefinition($n) => $e,
            AstNode::IntValue($n) => $e,
            AstNode::FloatValue($n) => $e,
            AstNode::StringValue($n) => $e,
            AstNode::BooleanValue($n) => $e,
            AstNode::NullValue($n) => $e,
            AstNode::EnumValue($n) => $e,
            AstNode::ListValue($n) => $e,
            AstNode::ObjectValue($n) => $e,
            AstNode::ObjectField($n) => $e,
            AstNode::Directive($n) => $e,
            AstNode::NamedType($n) => $e,
            AstNode::ListType($n) => $e,
            AstNode::NonNullType($n) => $e,
            AstNode::SchemaDefinition($n) => $e,
            AstNode::OperationTypeDefinition($n) => $e,
            AstNode::ScalarTypeDefinition($n) => $e,
            AstNode::ObjectTypeDefinition($n) => $e,
            AstNode::FieldDefinition($n) => $e,
            AstNode::InputValueDefinition($n) => $e,
            AstNode::InterfaceTypeDefinition($n) => $e,
            AstNode::UnionTypeDefinition($n) => $e,
            AstNode::EnumTypeDefinition($n) => $e,
            AstNode::EnumValueDefinition($n) => $e,
            AstNode::InputObjectTypeDefinition($n) => $e,
            AstNode::DirectiveDefinition($n) => $e,
            AstNode::SchemaExtension($n) => $e,
            AstNode::ScalarTypeExtension($n) => $e,
            AstNode::ObjectTypeExtension($n) => $e,
            AstNode::InterfaceTypeExtension($n) => $e,
            AstNode::UnionTypeExtension($n) => $e,
            AstNode::EnumTypeExtension($n) => $e,
            AstNode::InputObjectTypeExtension($n) => $e,
        }
    };
}

pub(crate) use for_each_ast_node;

impl AstNode {
    pub fn kind(&self) -> Kind {
        match self {
            AstNode::Document(_) => Kind::Document,
            AstNode::OperationDefinition(_) => Kind::OperationDefinition,
            AstNode::VariableDefinition(_) => Kind::VariableDefinition,
            AstNode::Variable(_) => Kind::Variable,
            AstNode::SelectionSet(_) => Kind::SelectionSet,
            AstNode::Field(_) => Kind::Field,
            AstNode::Argument(_) => Kind::Argument,
            AstNode::FragmentSpread(_) => Kind::FragmentSpread,
            AstNode::InlineFragment(_) => Kind::InlineFragment,
            AstNode::FragmentDefinition(_) => Kind::FragmentDefinition,
            AstNode::IntValue(_) => Kind::IntValue,
            AstNode::FloatValue(_) => Kind::FloatValue,
            AstNode::StringValue(_) => Kind::StringValue,
            AstNode::BooleanValue(_) => Kind::BooleanValue,
            AstNode::NullValue(_) => Kind::NullValue,
            AstNode::EnumValue(_) => Kind::EnumValue,
            AstNode::ListValue(_) => Kind::ListValue,
            AstNode::ObjectValue(_) => Kind::ObjectValue,
            AstNode::ObjectField(_) => Kind::ObjectField,
            AstNode::Directive(_) => Kind::Directive,
            AstNode::NamedType(_) => Kind::NamedType,
            AstNode::ListType(_) => Kind::ListType,
            AstNode::NonNullType(_) => Kind::NonNullType,
            AstNode::SchemaDefinition(_) => Kind::SchemaDefinition,
            AstNode::OperationTypeDefinition(_) => Kind::OperationTypeDefinition,
            AstNode::ScalarTypeDefinition(_) => Kind::ScalarTypeDefinition,
            AstNode::ObjectTypeDefinition(_) => Kind::ObjectTypeDefinition,
            AstNode::FieldDefinition(_) => Kind::FieldDefinition,
            AstNode::InputValueDefinition(_) => Kind::InputValueDefinition,
            AstNode::InterfaceTypeDefinition(_) => Kind::InterfaceTypeDefinition,
            AstNode::UnionTypeDefinition(_) => Kind::UnionTypeDefinition,
            AstNode::EnumTypeDefinition(_) => Kind::EnumTypeDefinition,
            AstNode::EnumValueDefinition(_) => Kind::EnumValueDefinition,
            AstNode::InputObjectTypeDefinition(_) => Kind::InputObjectTypeDefinition,
            AstNode::DirectiveDefinition(_) => Kind::DirectiveDefinition,
            AstNode::SchemaExtension(_) => Kind::SchemaExtension,
            AstNode::ScalarTypeExtension(_) => Kind::ScalarTypeExtension,
            AstNode::ObjectTypeExtension(_) => Kind::ObjectTypeExtension,
            AstNode::InterfaceTypeExtension(_) => Kind::InterfaceTypeExtension,
            AstNode::UnionTypeExtension(_) => Kind::UnionTypeExtension,
            AstNode::EnumTypeExtension(_) => Kind::EnumTypeExtension,
            AstNode::InputObjectTypeExtension(_) => Kind::InputObjectTypeExtension,
        }
    }

    pub fn loc(&self) -> Option<&Location> {
        for_each_ast_node!(self, n => n.loc())
    }

    /// Whether two handles wrap the same allocation.
    pub fn ptr_eq(&self, other: &AstNode) -> bool {
        macro_rules! same {
            ($($variant:ident),+ $(,)?) => {
                match (self, other) {
                    $((AstNode::$variant(a), AstNode::$variant(b)) => a.ptr_eq(b),)+
                    _ => false,
                }
            };
        }
        same!(
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
        )
    }
}

impl From<&Definition> for AstNode {
    fn from(definition: &Definition) -> Self {
        match definition {
            Definition::OperationDefinition(n) => AstNode::OperationDefinition(n.clone()),
            Definition::FragmentDefinition(n) => AstNode::FragmentDefinition(n.clone()),
            Definition::SchemaDefinition(n) => AstNode::SchemaDefinition(n.clone()),
            Definition::ScalarTypeDefinition(n) => AstNode::ScalarTypeDefinition(n.clone()),
            Definition::ObjectTypeDefinition(n) => AstNode::ObjectTypeDefinition(n.clone()),
            Definition::InterfaceTypeDefinition(n) => {
                AstNode::InterfaceTypeDefinition(n.clone())
            }
            Definition::UnionTypeDefinition(n) => AstNode::UnionTypeDefinition(n.clone()),
            Definition::EnumTypeDefinition(n) => AstNode::EnumTypeDefinition(n.clone()),
            Definition::InputObjectTypeDefinition(n) => {
                AstNode::InputObjectTypeDefinition(n.clone())
            }
            Definition::DirectiveDefinition(n) => AstNode::DirectiveDefinition(n.clone()),
            Definition::SchemaExtension(n) => AstNode::SchemaExtension(n.clone()),
            Definition::ScalarTypeExtension(n) => AstNode::ScalarTypeExtension(n.clone()),
            Definition::ObjectTypeExtension(n) => AstNode::ObjectTypeExtension(n.clone()),
            Definition::InterfaceTypeExtension(n) => {
                AstNode::InterfaceTypeExtension(n.clone())
            }
            Definition::UnionTypeExtension(n) => AstNode::UnionTypeExtension(n.clone()),
            Definition::EnumTypeExtension(n) => AstNode::EnumTypeExtension(n.clone()),
            Definition::InputObjectTypeExtension(n) => {
                AstNode::InputObjectTypeExtension(n.clone())
            }
        }
    }
}

impl From<&Selection> for AstNode {
    fn from(selection: &Selection) -> Self {
        match selection {
            Selection::Field(n) => AstNode::Field(n.clone()),
            Selection::FragmentSpread(n) => AstNode::FragmentSpread(n.clone()),
            Selection::InlineFragment(n) => AstNode::InlineFragment(n.clone()),
        }
    }
}

impl From<&Value> for AstNode {
    fn from(value: &Value) -> Self {
        match value {
            Value::Variable(n) => AstNode::Variable(n.clone()),
            Value::Int(n) => AstNode::IntValue(n.clone()),
            Value::Float(n) => AstNode::FloatValue(n.clone()),
            Value::String(n) => AstNode::StringValue(n.clone()),
            Value::Boolean(n) => AstNode::BooleanValue(n.clone()),
            Value::Null(n) => AstNode::NullValue(n.clone()),
            Value::Enum(n) => AstNode::EnumValue(n.clone()),
            Value::List(n) => AstNode::ListValue(n.clone()),
            Value::Object(n) => AstNode::ObjectValue(n.clone()),
        }
    }
}

impl From<&Type> for AstNode {
    fn from(ty: &Type) -> Self {
        match ty {
            Type::Named(n) => AstNode::NamedType(n.clone()),
            Type::List(n) => AstNode::ListType(n.clone()),
            Type::NonNull(n) => AstNode::NonNullType(n.clone()),
        }
    }
}

impl From<&NullableType> for AstNode {
    fn from(ty: &NullableType) -> Self {
        match ty {
            NullableType::Named(n) => AstNode::NamedType(n.clone()),
            NullableType::List(n) => AstNode::ListType(n.clone()),
        }
    }
}

impl From<NullableType> for Type {
    fn from(ty: NullableType) -> Self {
        match ty {
            NullableType::Named(n) => Type::Named(n),
            NullableType::List(n) => Type::List(n),
        }
    }
}
