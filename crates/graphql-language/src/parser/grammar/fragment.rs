use crate::ast::FragmentDefinition;
use crate::ast::FragmentSpread;
use crate::ast::InlineFragment;
use crate::ast::Selection;
use crate::error::GraphQLError;
use crate::lexer::TokenKind;
use crate::node::Node;
use crate::parser::grammar::argument;
use crate::parser::grammar::directive;
use crate::parser::grammar::name;
use crate::parser::grammar::selection;
use crate::parser::grammar::ty;
use crate::parser::grammar::variable;
use crate::parser::Parser;

/// See: <https://spec.graphql.org/October2021/#FragmentSpread>
///
/// After a `...`: either a fragment spread or an inline fragment. The `on`
/// keyword is consumed optimistically; a bare name is a spread.
pub(crate) fn fragment(p: &mut Parser) -> Result<Selection, GraphQLError> {
    let start = p.current_id();
    p.expect_token(TokenKind::Spread)?;

    let has_type_condition = p.expect_optional_keyword("on")?;
    if !has_type_condition && p.peek(TokenKind::Name) {
        let fragment_name = name::fragment_name(p)?;
        let arguments = if p.fragment_arguments_enabled() && p.peek(TokenKind::ParenL) {
            argument::arguments(p, false)?
        } else {
            Vec::new()
        };
        let directives = directive::directives(p, false)?;
        return Ok(Selection::FragmentSpread(p.node(
            start,
            FragmentSpread {
                fragment_name,
                arguments,
                directives,
            },
        )));
    }

    let type_condition = if has_type_condition {
        Some(ty::named_type(p)?)
    } else {
        None
    };
    let directives = directive::directives(p, false)?;
    let selection_set = selection::selection_set(p)?;
    Ok(Selection::InlineFragment(p.node(
        start,
        InlineFragment {
            type_condition,
            directives,
            selection_set,
        },
    )))
}

/// See: <https://spec.graphql.org/October2021/#FragmentDefinition>
///
/// *FragmentDefinition* — `fragment Name on Type directives selectionSet`,
/// with variable definitions under the legacy grammar extension.
pub(crate) fn fragment_definition(
    p: &mut Parser,
) -> Result<Node<FragmentDefinition>, GraphQLError> {
    let start = p.current_id();
    p.expect_keyword("fragment")?;
    let name = name::fragment_name(p)?;
    let variable_definitions = if p.legacy_fragment_variables_enabled() {
        variable::variable_definitions(p)?
    } else {
        Vec::new()
    };
    p.expect_keyword("on")?;
    let type_condition = ty::named_type(p)?;
    let directives = directive::directives(p, false)?;
    let selection_set = selection::selection_set(p)?;
    Ok(p.node(
        start,
        FragmentDefinition {
            name,
            variable_definitions,
            type_condition,
            directives,
            selection_set,
        },
    ))
}
