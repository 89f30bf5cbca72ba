//! Category membership tests over [`AstNode`], used by validation rules and
//! other generic consumers. Membership is decided by kind alone, except for
//! the transitive const-value check.

use super::*;

pub fn is_definition_node(node: &AstNode) -> bool {
    is_executable_definition_node(node)
        || is_type_system_definition_node(node)
        || is_type_system_extension_node(node)
}

pub fn is_executable_definition_node(node: &AstNode) -> bool {
    matches!(
        node.kind(),
        Kind::OperationDefinition | Kind::FragmentDefinition
    )
}

pub fn is_selection_node(node: &AstNode) -> bool {
    matches!(
        node.kind(),
        Kind::Field | Kind::FragmentSpread | Kind::InlineFragment
    )
}

pub fn is_value_node(node: &AstNode) -> bool {
    matches!(
        node.kind(),
        Kind::Variable
            | Kind::IntValue
            | Kind::FloatValue
            | Kind::StringValue
            | Kind::BooleanValue
            | Kind::NullValue
            | Kind::EnumValue
            | Kind::ListValue
            | Kind::ObjectValue
    )
}

/// A value node with no variable anywhere beneath it.
pub fn is_const_value_node(node: &AstNode) -> bool {
    match node {
        AstNode::Variable(_) => false,
        AstNode::ListValue(list) => list.values.iter().all(is_const_value),
        AstNode::ObjectValue(object) => {
            object.fields.iter().all(|field| is_const_value(&field.value))
        }
        other => is_value_node(other),
    }
}

pub(crate) fn is_const_value(value: &Value) -> bool {
    is_const_value_node(&AstNode::from(value))
}

pub fn is_type_node(node: &AstNode) -> bool {
    matches!(
        node.kind(),
        Kind::NamedType | Kind::ListType | Kind::NonNullType
    )
}

pub fn is_type_system_definition_node(node: &AstNode) -> bool {
    node.kind() == Kind::SchemaDefinition
        || node.kind() == Kind::DirectiveDefinition
        || is_type_definition_node(node)
}

pub fn is_type_definition_node(node: &AstNode) -> bool {
    matches!(
        node.kind(),
        Kind::ScalarTypeDefinition
            | Kind::ObjectTypeDefinition
            | Kind::InterfaceTypeDefinition
            | Kind::UnionTypeDefinition
            | Kind::EnumTypeDefinition
            | Kind::InputObjectTypeDefinition
    )
}

pub fn is_type_system_extension_node(node: &AstNode) -> bool {
    node.kind() == Kind::SchemaExtension || is_type_extension_node(node)
}

pub fn is_type_extension_node(node: &AstNode) -> bool {
    matches!(
        node.kind(),
        Kind::ScalarTypeExtension
            | Kind::ObjectTypeExtension
            | Kind::InterfaceTypeExtension
            | Kind::UnionTypeExtension
            | Kind::EnumTypeExtension
            | Kind::InputObjectTypeExtension
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Node;

    fn value_node(value: &Value) -> AstNode {
        AstNode::from(value)
    }

    #[test]
    fn const_check_is_transitive() {
        let variable = Value::Variable(Node::new(Variable {
            name: "x".to_string(),
        }));
        let int = Value::Int(Node::new(IntValue {
            value: "1".to_string(),
        }));
        let nested = Value::List(Node::new(ListValue {
            values: vec![Value::Object(Node::new(ObjectValue {
                fields: vec![Node::new(ObjectField {
                    name: "a".to_string(),
                    value: variable.clone(),
                })],
            }))],
        }));
        let const_nested = Value::List(Node::new(ListValue {
            values: vec![int.clone()],
        }));

        assert!(!is_const_value_node(&value_node(&variable)));
        assert!(is_const_value_node(&value_node(&int)));
        assert!(!is_const_value_node(&value_node(&nested)));
        assert!(is_const_value_node(&value_node(&const_nested)));
    }

    #[test]
    fn category_membership() {
        let named = AstNode::NamedType(Node::new(NamedType {
            name: "Int".to_string(),
        }));
        assert!(is_type_node(&named));
        assert!(!is_value_node(&named));
        assert!(!is_definition_node(&named));
    }
}
