//! Errors surfaced by the lexer and parser, and the excerpt rendering used
//! to point at the offending source text.

use crate::ast::AstNode;
use crate::node::Location;
use crate::source::get_location;
use crate::source::LineColumn;
use crate::source::Source;
use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::Serialize;
use serde::Serializer;
use std::fmt;
use std::sync::Arc;

/// An error in a GraphQL document.
///
/// Syntax errors produced by this crate carry the [`Source`] and the byte
/// offset they occurred at; downstream consumers (validation, execution) can
/// attach AST nodes, a response path, and free-form extensions instead.
///
/// The `Display` form is the message followed by a caret-underlined excerpt
/// of each relevant source location.
#[derive(Debug, Clone)]
pub struct GraphQLError {
    message: String,
    source: Option<Arc<Source>>,
    positions: Vec<usize>,
    nodes: Vec<AstNode>,
    path: Vec<PathSegment>,
    extensions: IndexMap<String, serde_json::Value>,
    original: Option<Arc<dyn std::error::Error + Send + Sync>>,
}

/// One step of the response path attached to a field error: a field name
/// (or alias) or a list index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    Field(String),
    Index(usize),
}

impl GraphQLError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
            positions: Vec::new(),
            nodes: Vec::new(),
            path: Vec::new(),
            extensions: IndexMap::new(),
            original: None,
        }
    }

    /// A syntax error at a byte offset of `source`.
    pub(crate) fn syntax(
        source: Arc<Source>,
        position: usize,
        message: impl Into<String>,
    ) -> Self {
        let mut error = Self::new(message);
        error.source = Some(source);
        error.positions = vec![position];
        error
    }

    /// Attach the AST nodes this error is about.
    pub fn with_nodes(mut self, nodes: Vec<AstNode>) -> Self {
        self.nodes = nodes;
        self
    }

    pub fn with_path(mut self, path: Vec<PathSegment>) -> Self {
        self.path = path;
        self
    }

    pub fn with_extension(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extensions.insert(key.into(), value);
        self
    }

    pub fn with_original(
        mut self,
        original: Arc<dyn std::error::Error + Send + Sync>,
    ) -> Self {
        self.original = Some(original);
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn source(&self) -> Option<&Arc<Source>> {
        self.source.as_ref()
    }

    /// Byte offsets into the source, when this is a syntax error.
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    pub fn nodes(&self) -> &[AstNode] {
        &self.nodes
    }

    pub fn path(&self) -> &[PathSegment] {
        &self.path
    }

    pub fn extensions(&self) -> &IndexMap<String, serde_json::Value> {
        &self.extensions
    }

    pub fn original(&self) -> Option<&Arc<dyn std::error::Error + Send + Sync>> {
        self.original.as_ref()
    }

    /// Line/column pairs for each position or node location.
    pub fn locations(&self) -> Vec<LineColumn> {
        if let Some(source) = &self.source {
            if !self.positions.is_empty() {
                return self
                    .positions
                    .iter()
                    .map(|position| get_location(source, *position))
                    .collect();
            }
        }
        self.nodes
            .iter()
            .filter_map(AstNode::loc)
            .map(|loc| get_location(&loc.source, loc.start))
            .collect()
    }
}

impl fmt::Display for GraphQLError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)?;
        if !self.nodes.is_empty() {
            for node in &self.nodes {
                if let Some(loc) = node.loc() {
                    write!(f, "\n\n{}", print_location(loc))?;
                }
            }
        } else if let Some(source) = &self.source {
            for location in self.locations() {
                write!(f, "\n\n{}", print_source_location(source, location))?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for GraphQLError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.original
            .as_ref()
            .map(|original| &**original as &(dyn std::error::Error + 'static))
    }
}

impl Serialize for GraphQLError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("message", &self.message)?;
        let locations = self.locations();
        if !locations.is_empty() {
            map.serialize_entry("locations", &locations)?;
        }
        if !self.path.is_empty() {
            map.serialize_entry("path", &self.path)?;
        }
        if !self.extensions.is_empty() {
            map.serialize_entry("extensions", &self.extensions)?;
        }
        map.end()
    }
}

impl Serialize for PathSegment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PathSegment::Field(name) => serializer.serialize_str(name),
            PathSegment::Index(index) => serializer.serialize_u64(*index as u64),
        }
    }
}

/// A violated internal contract: a bug in the caller rather than a problem
/// with the GraphQL document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct InvariantError(String);

impl InvariantError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Render the excerpt for an AST node location.
pub fn print_location(location: &Location) -> String {
    print_source_location(&location.source, get_location(&location.source, location.start))
}

/// Render a `name:line:column` header followed by the offending line with a
/// `^` caret, one line of context on either side, and a line-number gutter.
/// The source's `location_offset` shifts the reported coordinates.
pub fn print_source_location(source: &Source, source_location: LineColumn) -> String {
    let first_line_column_offset = source.location_offset().column - 1;
    let body = format!("{}{}", " ".repeat(first_line_column_offset), source.body());

    let line_index = source_location.line - 1;
    let line_offset = source.location_offset().line - 1;
    let line_num = source_location.line + line_offset;

    let column_offset = if source_location.line == 1 {
        first_line_column_offset
    } else {
        0
    };
    let column_num = source_location.column + column_offset;
    let location_str = format!("{}:{}:{}\n", source.name(), line_num, column_num);

    let lines = split_lines(&body);
    let location_line = lines.get(line_index).copied().unwrap_or("");

    // Special case for minified documents.
    if location_line.chars().count() > 120 {
        let sub_line_index = column_num / 80;
        let sub_line_column_num = column_num % 80;
        let sub_lines: Vec<String> = location_line
            .chars()
            .collect::<Vec<char>>()
            .chunks(80)
            .map(|chunk| chunk.iter().collect())
            .collect();

        let mut rows: Vec<(String, Option<String>)> =
            vec![(format!("{line_num} |"), Some(sub_lines[0].clone()))];
        let upper = (sub_line_index + 1).min(sub_lines.len());
        for sub_line in &sub_lines[1.min(upper)..upper] {
            rows.push(("|".to_string(), Some(sub_line.clone())));
        }
        rows.push((
            "|".to_string(),
            Some(pad_start("^", sub_line_column_num)),
        ));
        rows.push(("|".to_string(), sub_lines.get(sub_line_index + 1).cloned()));
        return location_str + &print_prefixed_lines(rows);
    }

    let previous_line = line_index
        .checked_sub(1)
        .and_then(|i| lines.get(i))
        .map(|line| (*line).to_string());
    let next_line = lines.get(line_index + 1).map(|line| (*line).to_string());
    let rows = vec![
        (format!("{} |", line_num - 1), previous_line),
        (format!("{line_num} |"), Some(location_line.to_string())),
        ("|".to_string(), Some(pad_start("^", column_num))),
        (format!("{} |", line_num + 1), next_line),
    ];
    location_str + &print_prefixed_lines(rows)
}

fn print_prefixed_lines(rows: Vec<(String, Option<String>)>) -> String {
    let existing: Vec<(String, String)> = rows
        .into_iter()
        .filter_map(|(prefix, line)| line.map(|line| (prefix, line)))
        .collect();
    let pad_len = existing
        .iter()
        .map(|(prefix, _)| prefix.chars().count())
        .max()
        .unwrap_or(0);
    existing
        .into_iter()
        .map(|(prefix, line)| {
            let mut row = pad_start(&prefix, pad_len);
            if !line.is_empty() {
                row.push(' ');
                row.push_str(&line);
            }
            row
        })
        .collect::<Vec<String>>()
        .join("\n")
}

fn pad_start(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        text.to_string()
    } else {
        format!("{}{}", " ".repeat(width - len), text)
    }
}

/// Split on `\r\n`, `\n` and `\r`, keeping empty segments.
fn split_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&text[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(&text[start..i]);
                i += if bytes.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
                start = i;
            }
            _ => i += 1,
        }
    }
    lines.push(&text[start..]);
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use expect_test::expect;

    #[test]
    fn renders_single_line_excerpt() {
        let source = Arc::new(Source::new("query { foo }"));
        let error = GraphQLError::syntax(source, 8, "Example error.");
        expect![[r#"
            Example error.

            GraphQL request:1:9
            1 | query { foo }
              |         ^"#]]
        .assert_eq(&error.to_string());
    }

    #[test]
    fn renders_surrounding_lines() {
        let source = Arc::new(
            Source::new("{\n  field\n}").with_name("docs/query.graphql"),
        );
        let error = GraphQLError::syntax(source, 4, "Oops.");
        expect![[r#"
            Oops.

            docs/query.graphql:2:3
            1 | {
            2 |   field
              |   ^
            3 | }"#]]
        .assert_eq(&error.to_string());
    }

    #[test]
    fn applies_location_offset() {
        let source = Arc::new(
            Source::new("{ bad }")
                .with_name("host.js")
                .with_location_offset(10, 5)
                .unwrap(),
        );
        let error = GraphQLError::syntax(source, 2, "Nope.");
        expect![[r#"
            Nope.

            host.js:10:7
            10 |     { bad }
               |       ^"#]]
        .assert_eq(&error.to_string());
    }

    #[test]
    fn serializes_response_shape() {
        let source = Arc::new(Source::new("{ x }"));
        let error = GraphQLError::syntax(source, 2, "Bad.")
            .with_path(vec![
                PathSegment::Field("hero".to_string()),
                PathSegment::Index(1),
            ]);
        let json = serde_json::to_value(&error).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "message": "Bad.",
                "locations": [{"line": 1, "column": 3}],
                "path": ["hero", 1],
            })
        );
    }
}
