//! Input text with metadata, and offset → line/column mapping.

use crate::error::InvariantError;
use serde::Deserialize;
use serde::Serialize;

/// A GraphQL source input: the document text plus the metadata used when
/// reporting errors against it.
///
/// `location_offset` shifts reported lines and columns when the GraphQL
/// document is embedded inside a larger host document (for example a string
/// literal in another language), so that error excerpts land in the host
/// file's coordinate space.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Source {
    body: String,
    name: String,
    location_offset: LineColumn,
}

/// A 1-indexed line and column within a source. Columns count characters
/// (Unicode scalar values), not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineColumn {
    pub line: usize,
    pub column: usize,
}

impl Source {
    /// Create a source named `"GraphQL request"` with no location offset.
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            name: "GraphQL request".to_string(),
            location_offset: LineColumn { line: 1, column: 1 },
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the 1-indexed line and column this source starts at within its
    /// host document.
    pub fn with_location_offset(
        mut self,
        line: usize,
        column: usize,
    ) -> Result<Self, InvariantError> {
        if line < 1 {
            return Err(InvariantError::new(
                "line in location_offset is 1-indexed and must be positive",
            ));
        }
        if column < 1 {
            return Err(InvariantError::new(
                "column in location_offset is 1-indexed and must be positive",
            ));
        }
        self.location_offset = LineColumn { line, column };
        Ok(self)
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location_offset(&self) -> LineColumn {
        self.location_offset
    }
}

impl From<&str> for Source {
    fn from(body: &str) -> Self {
        Source::new(body)
    }
}

impl From<String> for Source {
    fn from(body: String) -> Self {
        Source::new(body)
    }
}

/// Map a byte offset in `source` to its raw 1-indexed line and column.
///
/// `\r\n`, `\n` and `\r` each count as one line terminator. The source's
/// `location_offset` is not applied here; it only affects printed excerpts.
pub fn get_location(source: &Source, position: usize) -> LineColumn {
    let body = source.body();
    let bytes = body.as_bytes();
    let mut line = 1;
    let mut last_line_start = 0;

    let mut i = 0;
    while i < bytes.len() {
        let terminator_len = match bytes[i] {
            b'\r' if bytes.get(i + 1) == Some(&b'\n') => 2,
            b'\r' | b'\n' => 1,
            _ => {
                i += 1;
                continue;
            }
        };
        if i >= position {
            break;
        }
        line += 1;
        last_line_start = i + terminator_len;
        i += terminator_len;
    }

    let column = if last_line_start <= position {
        let end = position.min(body.len());
        body[last_line_start..end].chars().count() + 1
    } else {
        // `position` points into the middle of a `\r\n` pair.
        0
    };
    LineColumn { line, column }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metadata() {
        let source = Source::new("{ hello }");
        assert_eq!(source.name(), "GraphQL request");
        assert_eq!(source.location_offset(), LineColumn { line: 1, column: 1 });
    }

    #[test]
    fn rejects_non_positive_offsets() {
        let err = Source::new("{}").with_location_offset(0, 1).unwrap_err();
        assert_eq!(
            err.to_string(),
            "line in location_offset is 1-indexed and must be positive"
        );
        let err = Source::new("{}").with_location_offset(1, 0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "column in location_offset is 1-indexed and must be positive"
        );
    }

    #[test]
    fn locates_offsets_across_line_terminator_styles() {
        let source = Source::new("a\nbc\r\nde\rf");
        assert_eq!(get_location(&source, 0), LineColumn { line: 1, column: 1 });
        assert_eq!(get_location(&source, 2), LineColumn { line: 2, column: 1 });
        assert_eq!(get_location(&source, 3), LineColumn { line: 2, column: 2 });
        assert_eq!(get_location(&source, 6), LineColumn { line: 3, column: 1 });
        assert_eq!(get_location(&source, 9), LineColumn { line: 4, column: 1 });
    }

    #[test]
    fn column_counts_characters_not_bytes() {
        let source = Source::new("\"héllo\" x");
        // `é` is two bytes; byte offset 9 is the `x`, the ninth character.
        assert_eq!(get_location(&source, 9), LineColumn { line: 1, column: 9 });
    }

    #[test]
    fn unterminated_string_position() {
        let source = Source::new("\"abc\n");
        assert_eq!(get_location(&source, 4), LineColumn { line: 1, column: 5 });
    }
}
