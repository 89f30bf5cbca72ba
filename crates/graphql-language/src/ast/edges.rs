//! Typed access to the child edges of each node kind, and the rebuilding
//! used to apply visitor edits without mutating the original tree.
//!
//! Edge names and their order must stay in lockstep with
//! [`Kind::child_edge_keys`]; traversal relies on that table alone.

use super::*;
use crate::node::Node;
use std::collections::HashMap;

/// The children reachable through one edge.
pub(crate) enum EdgeValue {
    Node(AstNode),
    List(Vec<AstNode>),
}

/// Pending edits to one node's edges, keyed by edge name (and index within
/// list edges). `None` values are deletions.
#[derive(Default)]
pub(crate) struct EdgeEdits {
    nodes: HashMap<&'static str, Option<AstNode>>,
    lists: HashMap<&'static str, HashMap<usize, Option<AstNode>>>,
}

impl EdgeEdits {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.lists.is_empty()
    }

    pub(crate) fn set(
        &mut self,
        key: &'static str,
        index: Option<usize>,
        value: Option<AstNode>,
    ) {
        match index {
            Some(index) => {
                self.lists.entry(key).or_default().insert(index, value);
            }
            None => {
                self.nodes.insert(key, value);
            }
        }
    }

    fn node(&self, key: &str) -> Option<&Option<AstNode>> {
        self.nodes.get(key)
    }

    fn list(&self, key: &str) -> Option<&HashMap<usize, Option<AstNode>>> {
        self.lists.get(key)
    }
}

fn list_of<T>(items: &[T], f: impl Fn(&T) -> AstNode) -> EdgeValue {
    EdgeValue::List(items.iter().map(f).collect())
}

fn push_node(edges: &mut Vec<(&'static str, EdgeValue)>, key: &'static str, node: AstNode) {
    edges.push((key, EdgeValue::Node(node)));
}

impl AstNode {
    /// Present child edges in traversal order. Absent optional children are
    /// skipped; empty lists are kept (they simply contain nothing to
    /// visit).
    pub(crate) fn child_edges(&self) -> Vec<(&'static str, EdgeValue)> {
        let mut edges = Vec::new();
        match self {
            AstNode::Document(n) => {
                edges.push(("definitions", list_of(&n.definitions, |d| AstNode::from(d))));
            }
            AstNode::OperationDefinition(n) => {
                edges.push((
                    "variableDefinitions",
                    list_of(&n.variable_definitions, |v| {
                        AstNode::VariableDefinition(v.clone())
                    }),
                ));
                edges.push(("directives", directives_edge(&n.directives)));
                push_node(&mut edges, "selectionSet", AstNode::SelectionSet(n.selection_set.clone()));
            }
            AstNode::VariableDefinition(n) => {
                push_node(&mut edges, "variable", AstNode::Variable(n.variable.clone()));
                push_node(&mut edges, "type", AstNode::from(&n.ty));
                if let Some(default_value) = &n.default_value {
                    push_node(&mut edges, "defaultValue", AstNode::from(default_value));
                }
                edges.push(("directives", directives_edge(&n.directives)));
            }
            AstNode::Variable(_) => {}
            AstNode::SelectionSet(n) => {
                edges.push(("selections", list_of(&n.selections, |s| AstNode::from(s))));
            }
            AstNode::Field(n) => {
                edges.push(("arguments", arguments_edge(&n.arguments)));
                edges.push(("directives", directives_edge(&n.directives)));
                if let Some(selection_set) = &n.selection_set {
                    push_node(&mut edges, "selectionSet", AstNode::SelectionSet(selection_set.clone()));
                }
            }
            AstNode::Argument(n) => {
                push_node(&mut edges, "value", AstNode::from(&n.value));
            }
            AstNode::FragmentSpread(n) => {
                edges.push(("arguments", arguments_edge(&n.arguments)));
                edges.push(("directives", directives_edge(&n.directives)));
            }
            AstNode::InlineFragment(n) => {
                if let Some(type_condition) = &n.type_condition {
                    push_node(&mut edges, "typeCondition", AstNode::NamedType(type_condition.clone()));
                }
                edges.push(("directives", directives_edge(&n.directives)));
                push_node(&mut edges, "selectionSet", AstNode::SelectionSet(n.selection_set.clone()));
            }
            AstNode::FragmentDefinition(n) => {
                edges.push((
                    "variableDefinitions",
                    list_of(&n.variable_definitions, |v| {
                        AstNode::VariableDefinition(v.clone())
                    }),
                ));
                push_node(&mut edges, "typeCondition", AstNode::NamedType(n.type_condition.clone()));
                edges.push(("directives", directives_edge(&n.directives)));
                push_node(&mut edges, "selectionSet", AstNode::SelectionSet(n.selection_set.clone()));
            }
            AstNode::IntValue(_)
            | AstNode::FloatValue(_)
            | AstNode::StringValue(_)
            | AstNode::BooleanValue(_)
            | AstNode::NullValue(_)
            | AstNode::EnumValue(_)
            | AstNode::NamedType(_) => {}
            AstNode::ListValue(n) => {
                edges.push(("values", list_of(&n.values, |v| AstNode::from(v))));
            }
            AstNode::ObjectValue(n) => {
                edges.push((
                    "fields",
                    list_of(&n.fields, |f| AstNode::ObjectField(f.clone())),
                ));
            }
            AstNode::ObjectField(n) => {
                push_node(&mut edges, "value", AstNode::from(&n.value));
            }
            AstNode::Directive(n) => {
                edges.push(("arguments", arguments_edge(&n.arguments)));
            }
            AstNode::ListType(n) => {
                push_node(&mut edges, "type", AstNode::from(&n.ty));
            }
            AstNode::NonNullType(n) => {
                push_node(&mut edges, "type", AstNode::from(&n.ty));
            }
            AstNode::SchemaDefinition(n) => {
                description_edge(&mut edges, &n.description);
                edges.push(("directives", directives_edge(&n.directives)));
                edges.push((
                    "operationTypes",
                    list_of(&n.operation_types, |o| {
                        AstNode::OperationTypeDefinition(o.clone())
                    }),
                ));
            }
            AstNode::OperationTypeDefinition(n) => {
                push_node(&mut edges, "type", AstNode::NamedType(n.ty.clone()));
            }
            AstNode::ScalarTypeDefinition(n) => {
                description_edge(&mut edges, &n.description);
                edges.push(("directives", directives_edge(&n.directives)));
            }
            AstNode::ObjectTypeDefinition(n) => {
                description_edge(&mut edges, &n.description);
                edges.push(("interfaces", interfaces_edge(&n.interfaces)));
                edges.push(("directives", directives_edge(&n.directives)));
                edges.push(("fields", field_definitions_edge(&n.fields)));
            }
            AstNode::FieldDefinition(n) => {
                description_edge(&mut edges, &n.description);
                edges.push(("arguments", input_values_edge(&n.arguments)));
                push_node(&mut edges, "type", AstNode::from(&n.ty));
                edges.push(("directives", directives_edge(&n.directives)));
            }
            AstNode::InputValueDefinition(n) => {
                description_edge(&mut edges, &n.description);
                push_node(&mut edges, "type", AstNode::from(&n.ty));
                if let Some(default_value) = &n.default_value {
                    push_node(&mut edges, "defaultValue", AstNode::from(default_value));
                }
                edges.push(("directives", directives_edge(&n.directives)));
            }
            AstNode::InterfaceTypeDefinition(n) => {
                description_edge(&mut edges, &n.description);
                edges.push(("interfaces", interfaces_edge(&n.interfaces)));
                edges.push(("directives", directives_edge(&n.directives)));
                edges.push(("fields", field_definitions_edge(&n.fields)));
            }
            AstNode::UnionTypeDefinition(n) => {
                description_edge(&mut edges, &n.description);
                edges.push(("directives", directives_edge(&n.directives)));
                edges.push(("types", interfaces_edge(&n.types)));
            }
            AstNode::EnumTypeDefinition(n) => {
                description_edge(&mut edges, &n.description);
                edges.push(("directives", directives_edge(&n.directives)));
                edges.push((
                    "values",
                    list_of(&n.values, |v| AstNode::EnumValueDefinition(v.clone())),
                ));
            }
            AstNode::EnumValueDefinition(n) => {
                description_edge(&mut edges, &n.description);
                edges.push(("directives", directives_edge(&n.directives)));
            }
            AstNode::InputObjectTypeDefinition(n) => {
                description_edge(&mut edges, &n.description);
                edges.push(("directives", directives_edge(&n.directives)));
                edges.push(("fields", input_values_edge(&n.fields)));
            }
            AstNode::DirectiveDefinition(n) => {
                description_edge(&mut edges, &n.description);
                edges.push(("arguments", input_values_edge(&n.arguments)));
            }
            AstNode::SchemaExtension(n) => {
                edges.push(("directives", directives_edge(&n.directives)));
                edges.push((
                    "operationTypes",
                    list_of(&n.operation_types, |o| {
                        AstNode::OperationTypeDefinition(o.clone())
                    }),
                ));
            }
            AstNode::ScalarTypeExtension(n) => {
                edges.push(("directives", directives_edge(&n.directives)));
            }
            AstNode::ObjectTypeExtension(n) => {
                edges.push(("interfaces", interfaces_edge(&n.interfaces)));
                edges.push(("directives", directives_edge(&n.directives)));
                edges.push(("fields", field_definitions_edge(&n.fields)));
            }
            AstNode::InterfaceTypeExtension(n) => {
                edges.push(("interfaces", interfaces_edge(&n.interfaces)));
                edges.push(("directives", directives_edge(&n.directives)));
                edges.push(("fields", field_definitions_edge(&n.fields)));
            }
            AstNode::UnionTypeExtension(n) => {
                edges.push(("directives", directives_edge(&n.directives)));
                edges.push(("types", interfaces_edge(&n.types)));
            }
            AstNode::EnumTypeExtension(n) => {
                edges.push(("directives", directives_edge(&n.directives)));
                edges.push((
                    "values",
                    list_of(&n.values, |v| AstNode::EnumValueDefinition(v.clone())),
                ));
            }
            AstNode::InputObjectTypeExtension(n) => {
                edges.push(("directives", directives_edge(&n.directives)));
                edges.push(("fields", input_values_edge(&n.fields)));
            }
        }
        edges
    }
}

fn directives_edge(directives: &[Node<Directive>]) -> EdgeValue {
    list_of(directives, |d| AstNode::Directive(d.clone()))
}

fn arguments_edge(arguments: &[Node<Argument>]) -> EdgeValue {
    list_of(arguments, |a| AstNode::Argument(a.clone()))
}

fn interfaces_edge(types: &[Node<NamedType>]) -> EdgeValue {
    list_of(types, |t| AstNode::NamedType(t.clone()))
}

fn field_definitions_edge(fields: &[Node<FieldDefinition>]) -> EdgeValue {
    list_of(fields, |f| AstNode::FieldDefinition(f.clone()))
}

fn input_values_edge(fields: &[Node<InputValueDefinition>]) -> EdgeValue {
    list_of(fields, |f| AstNode::InputValueDefinition(f.clone()))
}

fn description_edge(
    edges: &mut Vec<(&'static str, EdgeValue)>,
    description: &Option<Node<StringValue>>,
) {
    if let Some(description) = description {
        edges.push((
            "description",
            EdgeValue::Node(AstNode::StringValue(description.clone())),
        ));
    }
}

/// Apply pending edge edits, producing a fresh node that reuses the
/// original's location. Panics when an edit puts a node of the wrong kind
/// into an edge, or deletes a child the node type cannot lose; both are
/// caller bugs.
pub(crate) fn rebuild(node: &AstNode, edits: &EdgeEdits) -> AstNode {
    match node {
        AstNode::Document(n) => {
            let mut doc = (**n).clone();
            replace_list(&mut doc.definitions, edits.list("definitions"), as_definition);
            AstNode::Document(n.same_location(doc))
        }
        AstNode::OperationDefinition(n) => {
            let mut def = (**n).clone();
            replace_list(
                &mut def.variable_definitions,
                edits.list("variableDefinitions"),
                as_variable_definition,
            );
            replace_list(&mut def.directives, edits.list("directives"), as_directive);
            replace_required(
                &mut def.selection_set,
                edits.node("selectionSet"),
                "selectionSet",
                "OperationDefinition",
                as_selection_set,
            );
            AstNode::OperationDefinition(n.same_location(def))
        }
        AstNode::VariableDefinition(n) => {
            let mut def = (**n).clone();
            replace_required(
                &mut def.variable,
                edits.node("variable"),
                "variable",
                "VariableDefinition",
                as_variable,
            );
            replace_required(&mut def.ty, edits.node("type"), "type", "VariableDefinition", as_type);
            replace_optional(&mut def.default_value, edits.node("defaultValue"), as_value);
            replace_list(&mut def.directives, edits.list("directives"), as_directive);
            AstNode::VariableDefinition(n.same_location(def))
        }
        AstNode::SelectionSet(n) => {
            let mut set = (**n).clone();
            replace_list(&mut set.selections, edits.list("selections"), as_selection);
            AstNode::SelectionSet(n.same_location(set))
        }
        AstNode::Field(n) => {
            let mut field = (**n).clone();
            replace_list(&mut field.arguments, edits.list("arguments"), as_argument);
            replace_list(&mut field.directives, edits.list("directives"), as_directive);
            replace_optional(
                &mut field.selection_set,
                edits.node("selectionSet"),
                as_selection_set,
            );
            AstNode::Field(n.same_location(field))
        }
        AstNode::Argument(n) => {
            let mut argument = (**n).clone();
            replace_required(&mut argument.value, edits.node("value"), "value", "Argument", as_value);
            AstNode::Argument(n.same_location(argument))
        }
        AstNode::FragmentSpread(n) => {
            let mut spread = (**n).clone();
            replace_list(&mut spread.arguments, edits.list("arguments"), as_argument);
            replace_list(&mut spread.directives, edits.list("directives"), as_directive);
            AstNode::FragmentSpread(n.same_location(spread))
        }
        AstNode::InlineFragment(n) => {
            let mut fragment = (**n).clone();
            replace_optional(
                &mut fragment.type_condition,
                edits.node("typeCondition"),
                as_named_type,
            );
            replace_list(&mut fragment.directives, edits.list("directives"), as_directive);
            replace_required(
                &mut fragment.selection_set,
                edits.node("selectionSet"),
                "selectionSet",
                "InlineFragment",
                as_selection_set,
            );
            AstNode::InlineFragment(n.same_location(fragment))
        }
        AstNode::FragmentDefinition(n) => {
            let mut def = (**n).clone();
            replace_list(
                &mut def.variable_definitions,
                edits.list("variableDefinitions"),
                as_variable_definition,
            );
            replace_required(
                &mut def.type_condition,
                edits.node("typeCondition"),
                "typeCondition",
                "FragmentDefinition",
                as_named_type,
            );
            replace_list(&mut def.directives, edits.list("directives"), as_directive);
            replace_required(
                &mut def.selection_set,
                edits.node("selectionSet"),
                "selectionSet",
                "FragmentDefinition",
                as_selection_set,
            );
            AstNode::FragmentDefinition(n.same_location(def))
        }
        AstNode::ListValue(n) => {
            let mut list = (**n).clone();
            replace_list(&mut list.values, edits.list("values"), as_value);
            AstNode::ListValue(n.same_location(list))
        }
        AstNode::ObjectValue(n) => {
            let mut object = (**n).clone();
            replace_list(&mut object.fields, edits.list("fields"), as_object_field);
            AstNode::ObjectValue(n.same_location(object))
        }
        AstNode::ObjectField(n) => {
            let mut field = (**n).clone();
            replace_required(&mut field.value, edits.node("value"), "value", "ObjectField", as_value);
            AstNode::ObjectField(n.same_location(field))
        }
        AstNode::Directive(n) => {
            let mut directive = (**n).clone();
            replace_list(&mut directive.arguments, edits.list("arguments"), as_argument);
            AstNode::Directive(n.same_location(directive))
        }
        AstNode::ListType(n) => {
            let mut list = (**n).clone();
            replace_required(&mut list.ty, edits.node("type"), "type", "ListType", as_type);
            AstNode::ListType(n.same_location(list))
        }
        AstNode::NonNullType(n) => {
            let mut non_null = (**n).clone();
            replace_required(
                &mut non_null.ty,
                edits.node("type"),
                "type",
                "NonNullType",
                as_nullable_type,
            );
            AstNode::NonNullType(n.same_location(non_null))
        }
        AstNode::SchemaDefinition(n) => {
            let mut def = (**n).clone();
            replace_optional(&mut def.description, edits.node("description"), as_string_value);
            replace_list(&mut def.directives, edits.list("directives"), as_directive);
            replace_list(
                &mut def.operation_types,
                edits.list("operationTypes"),
                as_operation_type_definition,
            );
            AstNode::SchemaDefinition(n.same_location(def))
        }
        AstNode::OperationTypeDefinition(n) => {
            let mut def = (**n).clone();
            replace_required(
                &mut def.ty,
                edits.node("type"),
                "type",
                "OperationTypeDefinition",
                as_named_type,
            );
            AstNode::OperationTypeDefinition(n.same_location(def))
        }
        AstNode::ScalarTypeDefinition(n) => {
            let mut def = (**n).clone();
            replace_optional(&mut def.description, edits.node("description"), as_string_value);
            replace_list(&mut def.directives, edits.list("directives"), as_directive);
            AstNode::ScalarTypeDefinition(n.same_location(def))
        }
        AstNode::ObjectTypeDefinition(n) => {
            let mut def = (**n).clone();
            replace_optional(&mut def.description, edits.node("description"), as_string_value);
            replace_list(&mut def.interfaces, edits.list("interfaces"), as_named_type);
            replace_list(&mut def.directives, edits.list("directives"), as_directive);
            replace_list(&mut def.fields, edits.list("fields"), as_field_definition);
            AstNode::ObjectTypeDefinition(n.same_location(def))
        }
        AstNode::FieldDefinition(n) => {
            let mut def = (**n).clone();
            replace_optional(&mut def.description, edits.node("description"), as_string_value);
            replace_list(&mut def.arguments, edits.list("arguments"), as_input_value_definition);
            replace_required(&mut def.ty, edits.node("type"), "type", "FieldDefinition", as_type);
            replace_list(&mut def.directives, edits.list("directives"), as_directive);
            AstNode::FieldDefinition(n.same_location(def))
        }
        AstNode::InputValueDefinition(n) => {
            let mut def = (**n).clone();
            replace_optional(&mut def.description, edits.node("description"), as_string_value);
            replace_required(&mut def.ty, edits.node("type"), "type", "InputValueDefinition", as_type);
            replace_optional(&mut def.default_value, edits.node("defaultValue"), as_value);
            replace_list(&mut def.directives, edits.list("directives"), as_directive);
            AstNode::InputValueDefinition(n.same_location(def))
        }
        AstNode::InterfaceTypeDefinition(n) => {
            let mut def = (**n).clone();
            replace_optional(&mut def.description, edits.node("description"), as_string_value);
            replace_list(&mut def.interfaces, edits.list("interfaces"), as_named_type);
            replace_list(&mut def.directives, edits.list("directives"), as_directive);
            replace_list(&mut def.fields, edits.list("fields"), as_field_definition);
            AstNode::InterfaceTypeDefinition(n.same_location(def))
        }
        AstNode::UnionTypeDefinition(n) => {
            let mut def = (**n).clone();
            replace_optional(&mut def.description, edits.node("description"), as_string_value);
            replace_list(&mut def.directives, edits.list("directives"), as_directive);
            replace_list(&mut def.types, edits.list("types"), as_named_type);
            AstNode::UnionTypeDefinition(n.same_location(def))
        }
        AstNode::EnumTypeDefinition(n) => {
            let mut def = (**n).clone();
            replace_optional(&mut def.description, edits.node("description"), as_string_value);
            replace_list(&mut def.directives, edits.list("directives"), as_directive);
            replace_list(&mut def.values, edits.list("values"), as_enum_value_definition);
            AstNode::EnumTypeDefinition(n.same_location(def))
        }
        AstNode::EnumValueDefinition(n) => {
            let mut def = (**n).clone();
            replace_optional(&mut def.description, edits.node("description"), as_string_value);
            replace_list(&mut def.directives, edits.list("directives"), as_directive);
            AstNode::EnumValueDefinition(n.same_location(def))
        }
        AstNode::InputObjectTypeDefinition(n) => {
            let mut def = (**n).clone();
            replace_optional(&mut def.description, edits.node("description"), as_string_value);
            replace_list(&mut def.directives, edits.list("directives"), as_directive);
            replace_list(&mut def.fields, edits.list("fields"), as_input_value_definition);
            AstNode::InputObjectTypeDefinition(n.same_location(def))
        }
        AstNode::DirectiveDefinition(n) => {
            let mut def = (**n).clone();
            replace_optional(&mut def.description, edits.node("description"), as_string_value);
            replace_list(&mut def.arguments, edits.list("arguments"), as_input_value_definition);
            AstNode::DirectiveDefinition(n.same_location(def))
        }
        AstNode::SchemaExtension(n) => {
            let mut ext = (**n).clone();
            replace_list(&mut ext.directives, edits.list("directives"), as_directive);
            replace_list(
                &mut ext.operation_types,
                edits.list("operationTypes"),
                as_operation_type_definition,
            );
            AstNode::SchemaExtension(n.same_location(ext))
        }
        AstNode::ScalarTypeExtension(n) => {
            let mut ext = (**n).clone();
            replace_list(&mut ext.directives, edits.list("directives"), as_directive);
            AstNode::ScalarTypeExtension(n.same_location(ext))
        }
        AstNode::ObjectTypeExtension(n) => {
            let mut ext = (**n).clone();
            replace_list(&mut ext.interfaces, edits.list("interfaces"), as_named_type);
            replace_list(&mut ext.directives, edits.list("directives"), as_directive);
            replace_list(&mut ext.fields, edits.list("fields"), as_field_definition);
            AstNode::ObjectTypeExtension(n.same_location(ext))
        }
        AstNode::InterfaceTypeExtension(n) => {
            let mut ext = (**n).clone();
            replace_list(&mut ext.interfaces, edits.list("interfaces"), as_named_type);
            replace_list(&mut ext.directives, edits.list("directives"), as_directive);
            replace_list(&mut ext.fields, edits.list("fields"), as_field_definition);
            AstNode::InterfaceTypeExtension(n.same_location(ext))
        }
        AstNode::UnionTypeExtension(n) => {
            let mut ext = (**n).clone();
            replace_list(&mut ext.directives, edits.list("directives"), as_directive);
            replace_list(&mut ext.types, edits.list("types"), as_named_type);
            AstNode::UnionTypeExtension(n.same_location(ext))
        }
        AstNode::EnumTypeExtension(n) => {
            let mut ext = (**n).clone();
            replace_list(&mut ext.directives, edits.list("directives"), as_directive);
            replace_list(&mut ext.values, edits.list("values"), as_enum_value_definition);
            AstNode::EnumTypeExtension(n.same_location(ext))
        }
        AstNode::InputObjectTypeExtension(n) => {
            let mut ext = (**n).clone();
            replace_list(&mut ext.directives, edits.list("directives"), as_directive);
            replace_list(&mut ext.fields, edits.list("fields"), as_input_value_definition);
            AstNode::InputObjectTypeExtension(n.same_location(ext))
        }
        // Leaf kinds have no edges, so no edits can target them.
        leaf => leaf.clone(),
    }
}

fn replace_required<T>(
    field: &mut T,
    edit: Option<&Option<AstNode>>,
    edge: &str,
    parent_kind: &str,
    from_ast: impl Fn(&AstNode) -> T,
) {
    match edit {
        None => {}
        Some(None) => panic!("cannot delete the {edge} of a {parent_kind} node"),
        Some(Some(node)) => *field = from_ast(node),
    }
}

fn replace_optional<T>(
    field: &mut Option<T>,
    edit: Option<&Option<AstNode>>,
    from_ast: impl Fn(&AstNode) -> T,
) {
    match edit {
        None => {}
        Some(None) => *field = None,
        Some(Some(node)) => *field = Some(from_ast(node)),
    }
}

fn replace_list<T: Clone>(
    field: &mut Vec<T>,
    edits: Option<&HashMap<usize, Option<AstNode>>>,
    from_ast: impl Fn(&AstNode) -> T,
) {
    let Some(edits) = edits else { return };
    let mut out = Vec::with_capacity(field.len());
    for (index, item) in field.iter().enumerate() {
        match edits.get(&index) {
            None => out.push(item.clone()),
            Some(None) => {}
            Some(Some(node)) => out.push(from_ast(node)),
        }
    }
    *field = out;
}

macro_rules! downcast {
    ($name:ident, $variant:ident, $ty:ty) => {
        fn $name(node: &AstNode) -> Node<$ty> {
            match node {
                AstNode::$variant(n) => n.clone(),
                other => panic!(
                    "expected a {} node, found {}",
                    Kind::$variant,
                    other.kind()
                ),
            }
        }
    };
}

downcast!(as_variable, Variable, Variable);
downcast!(as_selection_set, SelectionSet, SelectionSet);
downcast!(as_argument, Argument, Argument);
downcast!(as_directive, Directive, Directive);
downcast!(as_named_type, NamedType, NamedType);
downcast!(as_string_value, StringValue, StringValue);
downcast!(as_object_field, ObjectField, ObjectField);
downcast!(as_variable_definition, VariableDefinition, VariableDefinition);
downcast!(as_operation_type_definition, OperationTypeDefinition, OperationTypeDefinition);
downcast!(as_field_definition, FieldDefinition, FieldDefinition);
downcast!(as_input_value_definition, InputValueDefinition, InputValueDefinition);
downcast!(as_enum_value_definition, EnumValueDefinition, EnumValueDefinition);

fn as_definition(node: &AstNode) -> Definition {
    match node {
        AstNode::OperationDefinition(n) => Definition::OperationDefinition(n.clone()),
        AstNode::FragmentDefinition(n) => Definition::FragmentDefinition(n.clone()),
        AstNode::SchemaDefinition(n) => Definition::SchemaDefinition(n.clone()),
        AstNode::ScalarTypeDefinition(n) => Definition::ScalarTypeDefinition(n.clone()),
        AstNode::ObjectTypeDefinition(n) => Definition::ObjectTypeDefinition(n.clone()),
        AstNode::InterfaceTypeDefinition(n) => Definition::InterfaceTypeDefinition(n.clone()),
        AstNode::UnionTypeDefinition(n) => Definition::UnionTypeDefinition(n.clone()),
        AstNode::EnumTypeDefinition(n) => Definition::EnumTypeDefinition(n.clone()),
        AstNode::InputObjectTypeDefinition(n) => {
            Definition::InputObjectTypeDefinition(n.clone())
        }
        AstNode::DirectiveDefinition(n) => Definition::DirectiveDefinition(n.clone()),
        AstNode::SchemaExtension(n) => Definition::SchemaExtension(n.clone()),
        AstNode::ScalarTypeExtension(n) => Definition::ScalarTypeExtension(n.clone()),
        AstNode::ObjectTypeExtension(n) => Definition::ObjectTypeExtension(n.clone()),
        AstNode::InterfaceTypeExtension(n) => Definition::InterfaceTypeExtension(n.clone()),
        AstNode::UnionTypeExtension(n) => Definition::UnionTypeExtension(n.clone()),
        AstNode::EnumTypeExtension(n) => Definition::EnumTypeExtension(n.clone()),
        AstNode::InputObjectTypeExtension(n) => {
            Definition::InputObjectTypeExtension(n.clone())
        }
        other => panic!("expected a definition node, found {}", other.kind()),
    }
}

fn as_selection(node: &AstNode) -> Selection {
    match node {
        AstNode::Field(n) => Selection::Field(n.clone()),
        AstNode::FragmentSpread(n) => Selection::FragmentSpread(n.clone()),
        AstNode::InlineFragment(n) => Selection::InlineFragment(n.clone()),
        other => panic!("expected a selection node, found {}", other.kind()),
    }
}

fn as_value(node: &AstNode) -> Value {
    match node {
        AstNode::Variable(n) => Value::Variable(n.clone()),
        AstNode::IntValue(n) => Value::Int(n.clone()),
        AstNode::FloatValue(n) => Value::Float(n.clone()),
        AstNode::StringValue(n) => Value::String(n.clone()),
        AstNode::BooleanValue(n) => Value::Boolean(n.clone()),
        AstNode::NullValue(n) => Value::Null(n.clone()),
        AstNode::EnumValue(n) => Value::Enum(n.clone()),
        AstNode::ListValue(n) => Value::List(n.clone()),
        AstNode::ObjectValue(n) => Value::Object(n.clone()),
        other => panic!("expected a value node, found {}", other.kind()),
    }
}

fn as_type(node: &AstNode) -> Type {
    match node {
        AstNode::NamedType(n) => Type::Named(n.clone()),
        AstNode::ListType(n) => Type::List(n.clone()),
        AstNode::NonNullType(n) => Type::NonNull(n.clone()),
        other => panic!("expected a type node, found {}", other.kind()),
    }
}

fn as_nullable_type(node: &AstNode) -> NullableType {
    match node {
        AstNode::NamedType(n) => NullableType::Named(n.clone()),
        AstNode::ListType(n) => NullableType::List(n.clone()),
        AstNode::NonNullType(_) => {
            panic!("a non-null type cannot wrap another non-null type")
        }
        other => panic!("expected a type node, found {}", other.kind()),
    }
}
