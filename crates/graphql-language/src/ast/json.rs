//! JSON representation of the AST: every node serializes to an object with
//! its `kind`, its fields in camelCase, and — when parsed with locations —
//! a `loc` of `{start, end}`. Absent optional fields are omitted; names
//! serialize as plain strings.

use super::*;
use serde::ser::SerializeMap;
use serde::Serialize;
use serde::Serializer;

macro_rules! serialize_node {
    ($ty:ident, |$node:ident, $map:ident| $body:block) => {
        impl Serialize for Node<$ty> {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                let $node = &**self;
                let mut $map = serializer.serialize_map(None)?;
                $map.serialize_entry("kind", Kind::$ty.as_str())?;
                $body
                if let Some(loc) = self.loc() {
                    $map.serialize_entry("loc", loc)?;
                }
                $map.end()
            }
        }
    };
}

serialize_node!(Document, |node, map| {
    map.serialize_entry("definitions", &node.definitions)?;
});

serialize_node!(OperationDefinition, |node, map| {
    map.serialize_entry("operation", node.operation.name())?;
    if let Some(name) = &node.name {
        map.serialize_entry("name", name)?;
    }
    map.serialize_entry("variableDefinitions", &node.variable_definitions)?;
    map.serialize_entry("directives", &node.directives)?;
    map.serialize_entry("selectionSet", &node.selection_set)?;
});

serialize_node!(VariableDefinition, |node, map| {
    map.serialize_entry("variable", &node.variable)?;
    map.serialize_entry("type", &node.ty)?;
    if let Some(default_value) = &node.default_value {
        map.serialize_entry("defaultValue", default_value)?;
    }
    map.serialize_entry("directives", &node.directives)?;
});

serialize_node!(Variable, |node, map| {
    map.serialize_entry("name", &node.name)?;
});

serialize_node!(SelectionSet, |node, map| {
    map.serialize_entry("selections", &node.selections)?;
});

serialize_node!(Field, |node, map| {
    if let Some(alias) = &node.alias {
        map.serialize_entry("alias", alias)?;
    }
    map.serialize_entry("name", &node.name)?;
    map.serialize_entry("arguments", &node.arguments)?;
    map.serialize_entry("directives", &node.directives)?;
    if let Some(selection_set) = &node.selection_set {
        map.serialize_entry("selectionSet", selection_set)?;
    }
});

serialize_node!(Argument, |node, map| {
    map.serialize_entry("name", &node.name)?;
    map.serialize_entry("value", &node.value)?;
});

serialize_node!(FragmentSpread, |node, map| {
    map.serialize_entry("name", &node.fragment_name)?;
    if !node.arguments.is_empty() {
        map.serialize_entry("arguments", &node.arguments)?;
    }
    map.serialize_entry("directives", &node.directives)?;
});

serialize_node!(InlineFragment, |node, map| {
    if let Some(type_condition) = &node.type_condition {
        map.serialize_entry("typeCondition", type_condition)?;
    }
    map.serialize_entry("directives", &node.directives)?;
    map.serialize_entry("selectionSet", &node.selection_set)?;
});

serialize_node!(FragmentDefinition, |node, map| {
    map.serialize_entry("name", &node.name)?;
    if !node.variable_definitions.is_empty() {
        map.serialize_entry("variableDefinitions", &node.variable_definitions)?;
    }
    map.serialize_entry("typeCondition", &node.type_condition)?;
    map.serialize_entry("directives", &node.directives)?;
    map.serialize_entry("selectionSet", &node.selection_set)?;
});

serialize_node!(IntValue, |node, map| {
    map.serialize_entry("value", &node.value)?;
});

serialize_node!(FloatValue, |node, map| {
    map.serialize_entry("value", &node.value)?;
});

serialize_node!(StringValue, |node, map| {
    map.serialize_entry("value", &node.value)?;
    map.serialize_entry("block", &node.block)?;
});

serialize_node!(BooleanValue, |node, map| {
    map.serialize_entry("value", &node.value)?;
});

serialize_node!(NullValue, |node, map| {
    let _ = node;
});

serialize_node!(EnumValue, |node, map| {
    map.serialize_entry("value", &node.value)?;
});

serialize_node!(ListValue, |node, map| {
    map.serialize_entry("values", &node.values)?;
});

serialize_node!(ObjectValue, |node, map| {
    map.serialize_entry("fields", &node.fields)?;
});

serialize_node!(ObjectField, |node, map| {
    map.serialize_entry("name", &node.name)?;
    map.serialize_entry("value", &node.value)?;
});

serialize_node!(Directive, |node, map| {
    map.serialize_entry("name", &node.name)?;
    map.serialize_entry("arguments", &node.arguments)?;
});

serialize_node!(NamedType, |node, map| {
    map.serialize_entry("name", &node.name)?;
});

serialize_node!(ListType, |node, map| {
    map.serialize_entry("type", &node.ty)?;
});

serialize_node!(NonNullType, |node, map| {
    map.serialize_entry("type", &node.ty)?;
});

serialize_node!(SchemaDefinition, |node, map| {
    if let Some(description) = &node.description {
        map.serialize_entry("description", description)?;
    }
    map.serialize_entry("directives", &node.directives)?;
    map.serialize_entry("operationTypes", &node.operation_types)?;
});

serialize_node!(OperationTypeDefinition, |node, map| {
    map.serialize_entry("operation", node.operation.name())?;
    map.serialize_entry("type", &node.ty)?;
});

serialize_node!(ScalarTypeDefinition, |node, map| {
    if let Some(description) = &node.description {
        map.serialize_entry("description", description)?;
    }
    map.serialize_entry("name", &node.name)?;
    map.serialize_entry("directives", &node.directives)?;
});

serialize_node!(ObjectTypeDefinition, |node, map| {
    if let Some(description) = &node.description {
        map.serialize_entry("description", description)?;
    }
    map.serialize_entry("name", &node.name)?;
    map.serialize_entry("interfaces", &node.interfaces)?;
    map.serialize_entry("directives", &node.directives)?;
    map.serialize_entry("fields", &node.fields)?;
});

serialize_node!(FieldDefinition, |node, map| {
    if let Some(description) = &node.description {
        map.serialize_entry("description", description)?;
    }
    map.serialize_entry("name", &node.name)?;
    map.serialize_entry("arguments", &node.arguments)?;
    map.serialize_entry("type", &node.ty)?;
    map.serialize_entry("directives", &node.directives)?;
});

serialize_node!(InputValueDefinition, |node, map| {
    if let Some(description) = &node.description {
        map.serialize_entry("description", description)?;
    }
    map.serialize_entry("name", &node.name)?;
    map.serialize_entry("type", &node.ty)?;
    if let Some(default_value) = &node.default_value {
        map.serialize_entry("defaultValue", default_value)?;
    }
    map.serialize_entry("directives", &node.directives)?;
});

serialize_node!(InterfaceTypeDefinition, |node, map| {
    if let Some(description) = &node.description {
        map.serialize_entry("description", description)?;
    }
    map.serialize_entry("name", &node.name)?;
    map.serialize_entry("interfaces", &node.interfaces)?;
    map.serialize_entry("directives", &node.directives)?;
    map.serialize_entry("fields", &node.fields)?;
});

serialize_node!(UnionTypeDefinition, |node, map| {
    if let Some(description) = &node.description {
        map.serialize_entry("description", description)?;
    }
    map.serialize_entry("name", &node.name)?;
    map.serialize_entry("directives", &node.directives)?;
    map.serialize_entry("types", &node.types)?;
});

serialize_node!(EnumTypeDefinition, |node, map| {
    if let Some(description) = &node.description {
        map.serialize_entry("description", description)?;
    }
    map.serialize_entry("name", &node.name)?;
    map.serialize_entry("directives", &node.directives)?;
    map.serialize_entry("values", &node.values)?;
});

serialize_node!(EnumValueDefinition, |node, map| {
    if let Some(description) = &node.description {
        map.serialize_entry("description", description)?;
    }
    map.serialize_entry("name", &node.name)?;
    map.serialize_entry("directives", &node.directives)?;
});

serialize_node!(InputObjectTypeDefinition, |node, map| {
    if let Some(description) = &node.description {
        map.serialize_entry("description", description)?;
    }
    map.serialize_entry("name", &node.name)?;
    map.serialize_entry("directives", &node.directives)?;
    map.serialize_entry("fields", &node.fields)?;
});

serialize_node!(DirectiveDefinition, |node, map| {
    if let Some(description) = &node.description {
        map.serialize_entry("description", description)?;
    }
    map.serialize_entry("name", &node.name)?;
    map.serialize_entry("arguments", &node.arguments)?;
    map.serialize_entry("repeatable", &node.repeatable)?;
    map.serialize_entry(
        "locations",
        &node
            .locations
            .iter()
            .map(|location| location.name())
            .collect::<Vec<&str>>(),
    )?;
});

serialize_node!(SchemaExtension, |node, map| {
    map.serialize_entry("directives", &node.directives)?;
    map.serialize_entry("operationTypes", &node.operation_types)?;
});

serialize_node!(ScalarTypeExtension, |node, map| {
    map.serialize_entry("name", &node.name)?;
    map.serialize_entry("directives", &node.directives)?;
});

serialize_node!(ObjectTypeExtension, |node, map| {
    map.serialize_entry("name", &node.name)?;
    map.serialize_entry("interfaces", &node.interfaces)?;
    map.serialize_entry("directives", &node.directives)?;
    map.serialize_entry("fields", &node.fields)?;
});

serialize_node!(InterfaceTypeExtension, |node, map| {
    map.serialize_entry("name", &node.name)?;
    map.serialize_entry("interfaces", &node.interfaces)?;
    map.serialize_entry("directives", &node.directives)?;
    map.serialize_entry("fields", &node.fields)?;
});

serialize_node!(UnionTypeExtension, |node, map| {
    map.serialize_entry("name", &node.name)?;
    map.serialize_entry("directives", &node.directives)?;
    map.serialize_entry("types", &node.types)?;
});

serialize_node!(EnumTypeExtension, |node, map| {
    map.serialize_entry("name", &node.name)?;
    map.serialize_entry("directives", &node.directives)?;
    map.serialize_entry("values", &node.values)?;
});

serialize_node!(InputObjectTypeExtension, |node, map| {
    map.serialize_entry("name", &node.name)?;
    map.serialize_entry("directives", &node.directives)?;
    map.serialize_entry("fields", &node.fields)?;
});

macro_rules! serialize_enum_delegating {
    ($ty:ident { $($variant:ident),+ $(,)? }) => {
        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                match self {
                    $($ty::$variant(node) => node.serialize(serializer),)+
                }
            }
        }
    };
}

serialize_enum_delegating!(Definition {
    OperationDefinition,
    FragmentDefinition,
    SchemaDefinition,
    ScalarTypeDefinition,
    ObjectTypeDefinition,
    InterfaceTypeDefinition,
    UnionTypeDefinition,
    EnumTypeDefinition,
    InputObjectTypeDefinition,
    DirectiveDefinition,
    SchemaExtension,
    ScalarTypeExtension,
    ObjectTypeExtension,
    InterfaceTypeExtension,
    UnionTypeExtension,
    EnumTypeExtension,
    InputObjectTypeExtension,
});

serialize_enum_delegating!(Selection {
    Field,
    FragmentSpread,
    InlineFragment,
});

serialize_enum_delegating!(Value {
    Variable,
    Int,
    Float,
    String,
    Boolean,
    Null,
    Enum,
    List,
    Object,
});

serialize_enum_delegating!(Type {
    Named,
    List,
    NonNull,
});

serialize_enum_delegating!(NullableType { Named, List });

impl Serialize for AstNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        for_each_ast_node!(self, n => n.serialize(serializer))
    }
}
