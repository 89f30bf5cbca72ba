//! Generic depth-first traversal with enter/leave callbacks and
//! copy-on-write editing.
//!
//! The walk is iterative — an explicit frame stack rather than recursion —
//! so arbitrarily deep documents cannot exhaust the call stack. Traversal
//! order is fixed by [`Kind::child_edge_keys`](crate::ast::Kind) and by
//! index within list edges; validators rely on this order.

use crate::ast::rebuild;
use crate::ast::AstNode;
use crate::ast::EdgeEdits;
use crate::ast::EdgeValue;

/// What a visitor callback asks the traversal to do.
#[derive(Debug, Clone)]
pub enum VisitAction {
    /// Keep going.
    Continue,
    /// On enter: do not descend into this node, and do not call its
    /// `leave`. On leave: same as `Continue`.
    Skip,
    /// Remove this node from its parent. Descent and `leave` are skipped.
    Delete,
    /// Halt the entire traversal.
    Break,
    /// Stand in the given node for this one. On enter the traversal
    /// descends into the replacement.
    Replace(AstNode),
}

/// One step in the path from the root to the current node: a child-edge
/// key, or an index within a list edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathElement {
    Key(&'static str),
    Index(usize),
}

/// Enter/leave callbacks for [`visit`]. Both default to
/// [`VisitAction::Continue`]; implementations match on
/// [`node.kind()`](AstNode::kind) for per-kind behavior.
///
/// `path` holds the edge keys and list indices from the root to `node`;
/// `ancestors` holds the chain of parent nodes, innermost last.
#[allow(unused_variables)]
pub trait Visitor {
    fn enter(
        &mut self,
        node: &AstNode,
        path: &[PathElement],
        ancestors: &[AstNode],
    ) -> VisitAction {
        VisitAction::Continue
    }

    fn leave(
        &mut self,
        node: &AstNode,
        path: &[PathElement],
        ancestors: &[AstNode],
    ) -> VisitAction {
        VisitAction::Continue
    }
}

struct Frame {
    node: AstNode,
    edges: Vec<(&'static str, EdgeValue)>,
    edge_index: usize,
    item_index: usize,
    edits: EdgeEdits,
    /// The edge this frame hangs off in its parent; `None` for the root.
    incoming: Option<(&'static str, Option<usize>)>,
    /// How many path elements were pushed for this frame.
    path_elements: usize,
}

impl Frame {
    fn new(
        node: AstNode,
        incoming: Option<(&'static str, Option<usize>)>,
        path_elements: usize,
    ) -> Self {
        let edges = node.child_edges();
        Self {
            node,
            edges,
            edge_index: 0,
            item_index: 0,
            edits: EdgeEdits::new(),
            incoming,
            path_elements,
        }
    }

    fn next_child(&mut self) -> Option<(&'static str, Option<usize>, AstNode)> {
        while self.edge_index < self.edges.len() {
            let (key, edge) = &self.edges[self.edge_index];
            match edge {
                EdgeValue::Node(child) => {
                    let result = (*key, None, child.clone());
                    self.edge_index += 1;
                    return Some(result);
                }
                EdgeValue::List(items) => {
                    if self.item_index < items.len() {
                        let result = (*key, Some(self.item_index), items[self.item_index].clone());
                        self.item_index += 1;
                        return Some(result);
                    }
                    self.edge_index += 1;
                    self.item_index = 0;
                }
            }
        }
        None
    }
}

/// Walk `root` depth-first, calling the visitor's `enter` before and
/// `leave` after each node's children.
///
/// The input tree is never mutated. Edits requested by the visitor produce
/// fresh parent nodes on the way back up; the edited root is returned, or
/// the original handle when nothing changed. `None` means the root itself
/// was deleted.
pub fn visit<V: Visitor + ?Sized>(root: &AstNode, visitor: &mut V) -> Option<AstNode> {
    let mut path: Vec<PathElement> = Vec::new();
    let mut ancestors: Vec<AstNode> = Vec::new();

    let entered_root = match visitor.enter(root, &path, &ancestors) {
        VisitAction::Continue => root.clone(),
        // A skipped or broken root is returned untouched; its leave is not
        // called.
        VisitAction::Skip | VisitAction::Break => return Some(root.clone()),
        VisitAction::Delete => return None,
        VisitAction::Replace(replacement) => replacement,
    };

    let mut stack: Vec<Frame> = vec![Frame::new(entered_root.clone(), None, 0)];

    while !stack.is_empty() {
        let next = stack
            .last_mut()
            .expect("stack is non-empty")
            .next_child();

        match next {
            Some((key, index, child)) => {
                let parent_node = stack.last().expect("stack is non-empty").node.clone();
                path.push(PathElement::Key(key));
                if let Some(index) = index {
                    path.push(PathElement::Index(index));
                }
                let elements = if index.is_some() { 2 } else { 1 };
                ancestors.push(parent_node);

                match visitor.enter(&child, &path, &ancestors) {
                    VisitAction::Continue => {
                        stack.push(Frame::new(child, Some((key, index)), elements));
                    }
                    VisitAction::Replace(replacement) => {
                        let frame = stack.last_mut().expect("stack is non-empty");
                        frame.edits.set(key, index, Some(replacement.clone()));
                        stack.push(Frame::new(replacement, Some((key, index)), elements));
                    }
                    VisitAction::Skip => {
                        pop_elements(&mut path, elements);
                        ancestors.pop();
                    }
                    VisitAction::Delete => {
                        let frame = stack.last_mut().expect("stack is non-empty");
                        frame.edits.set(key, index, None);
                        pop_elements(&mut path, elements);
                        ancestors.pop();
                    }
                    VisitAction::Break => return Some(entered_root),
                }
            }
            None => {
                // All children handled: apply pending edits and leave.
                let frame = stack.pop().expect("stack is non-empty");
                let was_edited = !frame.edits.is_empty();
                let node = if was_edited {
                    rebuild(&frame.node, &frame.edits)
                } else {
                    frame.node
                };

                let action = visitor.leave(&node, &path, &ancestors);

                let Some((key, index)) = frame.incoming else {
                    // The root is done.
                    return match action {
                        VisitAction::Delete => None,
                        VisitAction::Replace(replacement) => Some(replacement),
                        _ => Some(node),
                    };
                };

                pop_elements(&mut path, frame.path_elements);
                ancestors.pop();
                let parent = stack.last_mut().expect("non-root frames have a parent");
                match action {
                    VisitAction::Continue | VisitAction::Skip => {
                        if was_edited {
                            parent.edits.set(key, index, Some(node));
                        }
                    }
                    VisitAction::Delete => parent.edits.set(key, index, None),
                    VisitAction::Replace(replacement) => {
                        parent.edits.set(key, index, Some(replacement));
                    }
                    VisitAction::Break => return Some(entered_root),
                }
            }
        }
    }

    // Unreachable: the root frame always returns from inside the loop.
    Some(entered_root)
}

fn pop_elements(path: &mut Vec<PathElement>, n: usize) {
    for _ in 0..n {
        path.pop();
    }
}

/// Runs several visitors in one traversal.
///
/// Each sub-visitor keeps its own skip state: a `Skip` suppresses that
/// sub-visitor until the skipped node is left, and a `Break` suppresses it
/// for good without stopping the others. The first edit returned by a
/// sub-visitor is applied immediately; later sub-visitors do not see the
/// original node for that entry.
pub struct ParallelVisitors {
    visitors: Vec<Box<dyn Visitor>>,
    state: Vec<SubVisitorState>,
}

enum SubVisitorState {
    Active,
    /// Suppressed until this node's leave.
    Skipping(AstNode),
    /// Suppressed permanently.
    Broken,
}

pub fn visit_in_parallel(visitors: Vec<Box<dyn Visitor>>) -> ParallelVisitors {
    let state = visitors.iter().map(|_| SubVisitorState::Active).collect();
    ParallelVisitors { visitors, state }
}

impl Visitor for ParallelVisitors {
    fn enter(
        &mut self,
        node: &AstNode,
        path: &[PathElement],
        ancestors: &[AstNode],
    ) -> VisitAction {
        for (visitor, state) in self.visitors.iter_mut().zip(self.state.iter_mut()) {
            if let SubVisitorState::Active = state {
                match visitor.enter(node, path, ancestors) {
                    VisitAction::Continue => {}
                    VisitAction::Skip => *state = SubVisitorState::Skipping(node.clone()),
                    VisitAction::Break => *state = SubVisitorState::Broken,
                    edit @ (VisitAction::Delete | VisitAction::Replace(_)) => return edit,
                }
            }
        }
        VisitAction::Continue
    }

    fn leave(
        &mut self,
        node: &AstNode,
        path: &[PathElement],
        ancestors: &[AstNode],
    ) -> VisitAction {
        for (visitor, state) in self.visitors.iter_mut().zip(self.state.iter_mut()) {
            match state {
                SubVisitorState::Active => match visitor.leave(node, path, ancestors) {
                    VisitAction::Continue | VisitAction::Skip => {}
                    VisitAction::Break => *state = SubVisitorState::Broken,
                    edit @ (VisitAction::Delete | VisitAction::Replace(_)) => return edit,
                },
                SubVisitorState::Skipping(skipped) => {
                    if skipped.ptr_eq(node) {
                        *state = SubVisitorState::Active;
                    }
                }
                SubVisitorState::Broken => {}
            }
        }
        VisitAction::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::IntValue;
    use crate::ast::Kind;
    use crate::node::Node;
    use crate::parser::parse;
    use crate::printer::print;
    use pretty_assertions::assert_eq;

    fn document_node(source: &str) -> AstNode {
        AstNode::Document(parse(source).unwrap())
    }

    /// Records every callback as `enter:Kind` / `leave:Kind`.
    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
    }

    impl Visitor for Recorder {
        fn enter(&mut self, node: &AstNode, _: &[PathElement], _: &[AstNode]) -> VisitAction {
            self.events.push(format!("enter:{}", node.kind()));
            VisitAction::Continue
        }

        fn leave(&mut self, node: &AstNode, _: &[PathElement], _: &[AstNode]) -> VisitAction {
            self.events.push(format!("leave:{}", node.kind()));
            VisitAction::Continue
        }
    }

    #[test]
    fn visits_in_child_edge_order() {
        let root = document_node("query Q($x: Int = 3) { f(a: $x) @d }");
        let mut recorder = Recorder::default();
        let result = visit(&root, &mut recorder).unwrap();
        assert!(result.ptr_eq(&root));
        assert_eq!(
            recorder.events,
            vec![
                "enter:Document",
                "enter:OperationDefinition",
                "enter:VariableDefinition",
                "enter:Variable",
                "leave:Variable",
                "enter:NamedType",
                "leave:NamedType",
                "enter:IntValue",
                "leave:IntValue",
                "leave:VariableDefinition",
                "enter:SelectionSet",
                "enter:Field",
                "enter:Argument",
                "enter:Variable",
                "leave:Variable",
                "leave:Argument",
                "enter:Directive",
                "leave:Directive",
                "leave:Field",
                "leave:SelectionSet",
                "leave:OperationDefinition",
                "leave:Document",
            ]
        );
    }

    #[test]
    fn reports_paths_and_ancestors() {
        let root = document_node("{ a }");
        struct Check;
        impl Visitor for Check {
            fn enter(
                &mut self,
                node: &AstNode,
                path: &[PathElement],
                ancestors: &[AstNode],
            ) -> VisitAction {
                if node.kind() == Kind::Field {
                    assert_eq!(
                        path,
                        [
                            PathElement::Key("definitions"),
                            PathElement::Index(0),
                            PathElement::Key("selectionSet"),
                            PathElement::Key("selections"),
                            PathElement::Index(0),
                        ]
                    );
                    assert_eq!(ancestors.len(), 3);
                    assert_eq!(ancestors[0].kind(), Kind::Document);
                    assert_eq!(ancestors[2].kind(), Kind::SelectionSet);
                }
                VisitAction::Continue
            }
        }
        visit(&root, &mut Check).unwrap();
    }

    #[test]
    fn deletes_nodes_without_touching_the_original() {
        let root = document_node("{ a b c }");
        struct DeleteB;
        impl Visitor for DeleteB {
            fn enter(&mut self, node: &AstNode, _: &[PathElement], _: &[AstNode]) -> VisitAction {
                if let AstNode::Field(field) = node {
                    if field.name == "b" {
                        return VisitAction::Delete;
                    }
                }
                VisitAction::Continue
            }
        }
        let edited = visit(&root, &mut DeleteB).unwrap();
        assert_eq!(print(&edited), "{\n  a\n  c\n}");
        // The original still has all three selections.
        assert_eq!(print(&root), "{\n  a\n  b\n  c\n}");
        assert!(!edited.ptr_eq(&root));
    }

    #[test]
    fn replaces_nodes_on_enter() {
        let root = document_node("{ f(a: 3) }");
        struct Replace;
        impl Visitor for Replace {
            fn enter(&mut self, node: &AstNode, _: &[PathElement], _: &[AstNode]) -> VisitAction {
                if node.kind() == Kind::IntValue {
                    return VisitAction::Replace(AstNode::IntValue(Node::new(IntValue {
                        value: "42".to_string(),
                    })));
                }
                VisitAction::Continue
            }
        }
        let edited = visit(&root, &mut Replace).unwrap();
        assert_eq!(print(&edited), "{\n  f(a: 42)\n}");
        assert_eq!(print(&root), "{\n  f(a: 3)\n}");
    }

    #[test]
    fn skip_suppresses_children_and_leave() {
        let root = document_node("{ a { b } c }");
        struct SkipFields {
            events: Vec<String>,
        }
        impl Visitor for SkipFields {
            fn enter(&mut self, node: &AstNode, _: &[PathElement], _: &[AstNode]) -> VisitAction {
                self.events.push(format!("enter:{}", node.kind()));
                if node.kind() == Kind::Field {
                    return VisitAction::Skip;
                }
                VisitAction::Continue
            }

            fn leave(&mut self, node: &AstNode, _: &[PathElement], _: &[AstNode]) -> VisitAction {
                self.events.push(format!("leave:{}", node.kind()));
                VisitAction::Continue
            }
        }
        let mut visitor = SkipFields { events: Vec::new() };
        visit(&root, &mut visitor).unwrap();
        assert_eq!(
            visitor.events,
            vec![
                "enter:Document",
                "enter:OperationDefinition",
                "enter:SelectionSet",
                "enter:Field",
                "enter:Field",
                "leave:SelectionSet",
                "leave:OperationDefinition",
                "leave:Document",
            ]
        );
    }

    #[test]
    fn break_halts_the_walk() {
        let root = document_node("{ a b c }");
        struct BreakOnFirstField {
            fields_seen: usize,
        }
        impl Visitor for BreakOnFirstField {
            fn enter(&mut self, node: &AstNode, _: &[PathElement], _: &[AstNode]) -> VisitAction {
                if node.kind() == Kind::Field {
                    self.fields_seen += 1;
                    return VisitAction::Break;
                }
                VisitAction::Continue
            }
        }
        let mut visitor = BreakOnFirstField { fields_seen: 0 };
        let result = visit(&root, &mut visitor).unwrap();
        assert_eq!(visitor.fields_seen, 1);
        assert!(result.ptr_eq(&root));
    }

    #[test]
    fn parallel_visitors_see_every_node_once() {
        let root = document_node("{ a b }");

        struct SharedRecorder(std::rc::Rc<std::cell::RefCell<Vec<String>>>);
        impl Visitor for SharedRecorder {
            fn enter(&mut self, node: &AstNode, _: &[PathElement], _: &[AstNode]) -> VisitAction {
                self.0.borrow_mut().push(format!("enter:{}", node.kind()));
                VisitAction::Continue
            }

            fn leave(&mut self, node: &AstNode, _: &[PathElement], _: &[AstNode]) -> VisitAction {
                self.0.borrow_mut().push(format!("leave:{}", node.kind()));
                VisitAction::Continue
            }
        }

        let first = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
        let second = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
        let mut parallel = visit_in_parallel(vec![
            Box::new(SharedRecorder(first.clone())),
            Box::new(SharedRecorder(second.clone())),
        ]);
        visit(&root, &mut parallel).unwrap();

        let mut solo = Recorder::default();
        visit(&root, &mut solo).unwrap();
        assert_eq!(*first.borrow(), solo.events);
        assert_eq!(*second.borrow(), solo.events);
    }

    #[test]
    fn parallel_break_only_silences_one_visitor() {
        let root = document_node("{ a b }");

        struct BreakImmediately;
        impl Visitor for BreakImmediately {
            fn enter(&mut self, node: &AstNode, _: &[PathElement], _: &[AstNode]) -> VisitAction {
                if node.kind() == Kind::Field {
                    return VisitAction::Break;
                }
                VisitAction::Continue
            }
        }

        struct CountFields(std::rc::Rc<std::cell::Cell<usize>>);
        impl Visitor for CountFields {
            fn enter(&mut self, node: &AstNode, _: &[PathElement], _: &[AstNode]) -> VisitAction {
                if node.kind() == Kind::Field {
                    self.0.set(self.0.get() + 1);
                }
                VisitAction::Continue
            }
        }

        let count = std::rc::Rc::new(std::cell::Cell::new(0));
        let mut parallel = visit_in_parallel(vec![
            Box::new(BreakImmediately),
            Box::new(CountFields(count.clone())),
        ]);
        visit(&root, &mut parallel).unwrap();
        // The second visitor still saw both fields.
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn parallel_skip_is_scoped_to_the_subtree() {
        let root = document_node("{ a { b } c }");

        struct SkipNested(std::rc::Rc<std::cell::Cell<usize>>);
        impl Visitor for SkipNested {
            fn enter(&mut self, node: &AstNode, _: &[PathElement], _: &[AstNode]) -> VisitAction {
                if let AstNode::Field(field) = node {
                    self.0.set(self.0.get() + 1);
                    if field.selection_set.is_some() {
                        return VisitAction::Skip;
                    }
                }
                VisitAction::Continue
            }
        }

        let skipping_count = std::rc::Rc::new(std::cell::Cell::new(0));
        let full_count = std::rc::Rc::new(std::cell::Cell::new(0));

        struct CountFields(std::rc::Rc<std::cell::Cell<usize>>);
        impl Visitor for CountFields {
            fn enter(&mut self, node: &AstNode, _: &[PathElement], _: &[AstNode]) -> VisitAction {
                if node.kind() == Kind::Field {
                    self.0.set(self.0.get() + 1);
                }
                VisitAction::Continue
            }
        }

        let mut parallel = visit_in_parallel(vec![
            Box::new(SkipNested(skipping_count.clone())),
            Box::new(CountFields(full_count.clone())),
        ]);
        visit(&root, &mut parallel).unwrap();

        // The skipping visitor saw `a` and `c` but not the nested `b`; the
        // other visitor saw all three.
        assert_eq!(skipping_count.get(), 2);
        assert_eq!(full_count.get(), 3);
    }

    #[test]
    fn deleting_a_required_child_panics() {
        let root = document_node("{ a }");
        struct DeleteSelectionSet;
        impl Visitor for DeleteSelectionSet {
            fn enter(&mut self, node: &AstNode, _: &[PathElement], _: &[AstNode]) -> VisitAction {
                if node.kind() == Kind::SelectionSet {
                    return VisitAction::Delete;
                }
                VisitAction::Continue
            }
        }
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            visit(&root, &mut DeleteSelectionSet)
        }));
        assert!(result.is_err());
    }

    #[test]
    fn list_deletions_apply_by_index() {
        let root = document_node("{ a b c d }");
        struct DeleteMiddle;
        impl Visitor for DeleteMiddle {
            fn enter(&mut self, node: &AstNode, _: &[PathElement], _: &[AstNode]) -> VisitAction {
                if let AstNode::Field(field) = node {
                    if field.name == "b" || field.name == "d" {
                        return VisitAction::Delete;
                    }
                }
                VisitAction::Continue
            }
        }
        let edited = visit(&root, &mut DeleteMiddle).unwrap();
        assert_eq!(print(&edited), "{\n  a\n  c\n}");
    }

    #[test]
    fn replace_field_on_leave() {
        let root = document_node("{ a }");
        struct RenameOnLeave;
        impl Visitor for RenameOnLeave {
            fn leave(&mut self, node: &AstNode, _: &[PathElement], _: &[AstNode]) -> VisitAction {
                if let AstNode::Field(field) = node {
                    let mut renamed = (**field).clone();
                    renamed.name = "renamed".to_string();
                    return VisitAction::Replace(AstNode::Field(field.same_location(renamed)));
                }
                VisitAction::Continue
            }
        }
        let edited = visit(&root, &mut RenameOnLeave).unwrap();
        assert_eq!(print(&edited), "{\n  renamed\n}");
    }
}
