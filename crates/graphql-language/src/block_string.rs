//! Layout rules for triple-quoted block strings.

use crate::lexer::chars::is_white_space;

/// Strips the common indentation of a raw block string and trims leading and
/// trailing blank lines, per the `BlockStringValue()` static semantics.
///
/// `lines` is the raw content split on line terminators; the caller joins the
/// result with `\n`.
pub fn dedent_block_string_lines(lines: &[&str]) -> Vec<String> {
    let mut common_indent = usize::MAX;
    let mut first_non_empty_line = None;
    let mut last_non_empty_line = None;

    for (i, line) in lines.iter().enumerate() {
        let indent = leading_white_space(line);
        if indent == line.chars().count() {
            // all-whitespace line
            continue;
        }
        first_non_empty_line.get_or_insert(i);
        last_non_empty_line = Some(i);
        if i != 0 && indent < common_indent {
            common_indent = indent;
        }
    }

    let first = first_non_empty_line.unwrap_or(0);
    let last = match last_non_empty_line {
        Some(last) => last,
        None => return Vec::new(),
    };

    lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            if i == 0 {
                (*line).to_string()
            } else {
                skip_chars(line, common_indent).to_string()
            }
        })
        .enumerate()
        .filter(|(i, _)| *i >= first && *i <= last)
        .map(|(_, line)| line)
        .collect()
}

fn leading_white_space(line: &str) -> usize {
    line.chars().take_while(|c| is_white_space(*c)).count()
}

/// Slice off up to `n` leading characters.
fn skip_chars(line: &str, n: usize) -> &str {
    match line.char_indices().nth(n) {
        Some((offset, _)) => &line[offset..],
        None => "",
    }
}

/// Prints `value` as a triple-quoted block string.
///
/// A multi-line layout (leading and trailing newline inside the quotes) is
/// chosen when the value contains a newline, ends with `"` or `\`, or when
/// `prefer_multiple_lines` is set. A single-line value starting with
/// whitespace keeps its content on the opening line so the leading
/// whitespace survives a re-parse.
pub fn print_block_string(value: &str, prefer_multiple_lines: bool) -> String {
    let is_single_line = !value.contains('\n');
    let has_leading_white_space = value.starts_with(|c| is_white_space(c));
    let has_trailing_quote = value.ends_with('"');
    let has_trailing_slash = value.ends_with('\\');
    let print_as_multiple_lines =
        !is_single_line || has_trailing_quote || has_trailing_slash || prefer_multiple_lines;

    let mut result = String::with_capacity(value.len() + 8);
    if print_as_multiple_lines && !(is_single_line && has_leading_white_space) {
        result.push('\n');
    }
    result.push_str(value);
    if print_as_multiple_lines {
        result.push('\n');
    }

    format!("\"\"\"{}\"\"\"", result.replace("\"\"\"", "\\\"\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dedent(lines: &[&str]) -> Vec<String> {
        dedent_block_string_lines(lines)
    }

    #[test]
    fn removes_uniform_indentation() {
        let lines = ["", "    Hello,", "      World!", "", "    Yours,", "      GraphQL."];
        assert_eq!(
            dedent(&lines),
            ["Hello,", "  World!", "", "Yours,", "  GraphQL."]
        );
    }

    #[test]
    fn removes_empty_leading_and_trailing_lines() {
        let lines = ["", "", "    Hello,", "      World!", "", "", ""];
        assert_eq!(dedent(&lines), ["Hello,", "  World!"]);
    }

    #[test]
    fn retains_indentation_from_first_line() {
        let lines = ["    Hello,", "      World!"];
        assert_eq!(dedent(&lines), ["    Hello,", "World!"]);
    }

    #[test]
    fn does_not_alter_trailing_spaces() {
        let lines = ["               ", "    Hello,     ", "      World!   "];
        assert_eq!(dedent(&lines), ["Hello,     ", "  World!   "]);
    }

    #[test]
    fn all_whitespace_input_collapses() {
        let lines = ["  ", "\t", ""];
        assert_eq!(dedent(&lines), Vec::<String>::new());
    }

    #[test]
    fn prints_simple_value_on_one_line() {
        assert_eq!(print_block_string("a", false), "\"\"\"a\"\"\"");
    }

    #[test]
    fn prints_multi_line_form_when_requested() {
        assert_eq!(print_block_string("a", true), "\"\"\"\na\n\"\"\"");
    }

    #[test]
    fn preserves_leading_space_on_single_line() {
        assert_eq!(print_block_string(" a", true), "\"\"\" a\n\"\"\"");
    }

    #[test]
    fn breaks_line_for_trailing_quote() {
        assert_eq!(print_block_string("a\"", false), "\"\"\"\na\"\n\"\"\"");
        assert_eq!(print_block_string("a\\", false), "\"\"\"\na\\\n\"\"\"");
    }

    #[test]
    fn escapes_interior_triple_quotes() {
        assert_eq!(print_block_string("a\"\"\"b", false), "\"\"\"a\\\"\"\"b\"\"\"");
    }

    #[test]
    fn multi_line_value_round_trips() {
        assert_eq!(
            print_block_string("hello\nworld", false),
            "\"\"\"\nhello\nworld\n\"\"\""
        );
    }
}
