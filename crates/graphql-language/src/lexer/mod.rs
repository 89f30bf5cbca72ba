//! The lexer: source text to a doubly-linked stream of tokens.

pub(crate) mod chars;
mod token;
mod token_kind;

pub use token::LinkedTokens;
pub use token::Token;
pub use token::TokenId;
pub use token::TokenStream;
pub use token_kind::TokenKind;

use crate::error::GraphQLError;
use crate::source::Source;
use std::sync::Arc;

/// A stateful tokenizer over one [`Source`].
///
/// Tokens are produced lazily: [`advance`][Lexer::advance] and
/// [`lookahead`][Lexer::lookahead] read just far enough to answer. Every
/// token ever produced, comments included, stays in the stream and is linked
/// to its neighbours, so a finished parse leaves behind the full
/// `<SOF> ... <EOF>` chain.
///
/// `lookahead` memoizes through the links: calling it twice returns the same
/// token without re-scanning.
pub struct Lexer {
    source: Arc<Source>,
    stream: TokenStream,
    token: TokenId,
    last_token: TokenId,
    line: usize,
    line_start: usize,
}

struct EscapeSequence {
    value: String,
    /// Bytes consumed from the source, including the backslash.
    size: usize,
}

impl Lexer {
    pub fn new(source: impl Into<Source>) -> Self {
        let mut stream = TokenStream::new();
        let sof = stream.push(Token {
            kind: TokenKind::Sof,
            start: 0,
            end: 0,
            line: 0,
            column: 0,
            value: None,
            prev: None,
            next: None,
        });
        Self {
            source: Arc::new(source.into()),
            stream,
            token: sof,
            last_token: sof,
            line: 1,
            line_start: 0,
        }
    }

    pub fn source(&self) -> &Source {
        &self.source
    }

    pub(crate) fn source_arc(&self) -> Arc<Source> {
        self.source.clone()
    }

    pub fn stream(&self) -> &TokenStream {
        &self.stream
    }

    /// The token the lexer is focused on.
    pub fn token(&self) -> TokenId {
        self.token
    }

    /// The previously focused token.
    pub fn last_token(&self) -> TokenId {
        self.last_token
    }

    /// Move to the next non-comment token and return it.
    pub fn advance(&mut self) -> Result<TokenId, GraphQLError> {
        self.last_token = self.token;
        self.token = self.lookahead()?;
        Ok(self.token)
    }

    /// The next non-comment token, without moving. Newly scanned tokens
    /// (comments included) are linked into the stream as a side effect.
    pub fn lookahead(&mut self) -> Result<TokenId, GraphQLError> {
        let mut id = self.token;
        if self.stream[id].kind != TokenKind::Eof {
            loop {
                id = match self.stream[id].next {
                    Some(next) => next,
                    None => {
                        let token = self.read_next_token(self.stream[id].end)?;
                        let next = self.stream.push(token);
                        self.stream.link(id, next);
                        next
                    }
                };
                if self.stream[id].kind != TokenKind::Comment {
                    break;
                }
            }
        }
        Ok(id)
    }

    fn create_token(
        &self,
        kind: TokenKind,
        start: usize,
        end: usize,
        value: Option<String>,
    ) -> Token {
        let column = 1 + self.source.body()[self.line_start..start].chars().count();
        Token {
            kind,
            start,
            end,
            line: self.line,
            column,
            value,
            prev: None,
            next: None,
        }
    }

    fn error(&self, position: usize, message: impl Into<String>) -> GraphQLError {
        GraphQLError::syntax(self.source.clone(), position, message)
    }

    /// Scan past ignored characters and read one token starting at
    /// `prev_end`.
    fn read_next_token(&mut self, prev_end: usize) -> Result<Token, GraphQLError> {
        let source = self.source.clone();
        let body = source.body();
        let mut position = prev_end;
        loop {
            let Some(c) = char_at(body, position) else {
                return Ok(self.create_token(TokenKind::Eof, body.len(), body.len(), None));
            };
            match c {
                // Ignored: BOM, tab, space, comma.
                '\u{FEFF}' | '\t' | ' ' | ',' => position += c.len_utf8(),
                '\n' => {
                    position += 1;
                    self.line += 1;
                    self.line_start = position;
                }
                '\r' => {
                    if body.as_bytes().get(position + 1) == Some(&b'\n') {
                        position += 2;
                    } else {
                        position += 1;
                    }
                    self.line += 1;
                    self.line_start = position;
                }
                '#' => return Ok(self.read_comment(position)),
                '!' => return Ok(self.punctuator(TokenKind::Bang, position)),
                '$' => return Ok(self.punctuator(TokenKind::Dollar, position)),
                '&' => return Ok(self.punctuator(TokenKind::Amp, position)),
                '(' => return Ok(self.punctuator(TokenKind::ParenL, position)),
                ')' => return Ok(self.punctuator(TokenKind::ParenR, position)),
                ':' => return Ok(self.punctuator(TokenKind::Colon, position)),
                '=' => return Ok(self.punctuator(TokenKind::Equals, position)),
                '@' => return Ok(self.punctuator(TokenKind::At, position)),
                '[' => return Ok(self.punctuator(TokenKind::BracketL, position)),
                ']' => return Ok(self.punctuator(TokenKind::BracketR, position)),
                '{' => return Ok(self.punctuator(TokenKind::BraceL, position)),
                '|' => return Ok(self.punctuator(TokenKind::Pipe, position)),
                '}' => return Ok(self.punctuator(TokenKind::BraceR, position)),
                '.' => {
                    if body.as_bytes().get(position + 1) == Some(&b'.')
                        && body.as_bytes().get(position + 2) == Some(&b'.')
                    {
                        return Ok(self.create_token(
                            TokenKind::Spread,
                            position,
                            position + 3,
                            None,
                        ));
                    }
                    return Err(self.unexpected_character(position, c));
                }
                '"' => {
                    if body[position..].starts_with("\"\"\"") {
                        return self.read_block_string(position);
                    }
                    return self.read_string(position);
                }
                '-' | '0'..='9' => return self.read_number(position, c),
                c if chars::is_name_start(c) => return Ok(self.read_name(position)),
                '\'' => {
                    return Err(self.error(
                        position,
                        "Unexpected single quote character ('), \
                         did you mean to use a double quote (\")?",
                    ))
                }
                other => return Err(self.unexpected_character(position, other)),
            }
        }
    }

    fn unexpected_character(&self, position: usize, c: char) -> GraphQLError {
        self.error(
            position,
            format!("Unexpected character: {}.", print_code_point(Some(c))),
        )
    }

    fn punctuator(&self, kind: TokenKind, position: usize) -> Token {
        self.create_token(kind, position, position + 1, None)
    }

    /// `#` up to but not including the next line terminator.
    fn read_comment(&self, start: usize) -> Token {
        let body = self.source.body();
        let mut position = start + 1;
        while let Some(c) = char_at(body, position) {
            if c == '\n' || c == '\r' {
                break;
            }
            position += c.len_utf8();
        }
        self.create_token(
            TokenKind::Comment,
            start,
            position,
            Some(body[start + 1..position].to_string()),
        )
    }

    fn read_name(&self, start: usize) -> Token {
        let body = self.source.body();
        let mut position = start + 1;
        while matches!(char_at(body, position), Some(c) if chars::is_name_continue(c)) {
            position += 1;
        }
        self.create_token(
            TokenKind::Name,
            start,
            position,
            Some(body[start..position].to_string()),
        )
    }

    /// `IntValue` or `FloatValue`, stored as the text that was read.
    fn read_number(&self, start: usize, first: char) -> Result<Token, GraphQLError> {
        let body = self.source.body();
        let mut position = start;
        let mut code = Some(first);
        let mut is_float = false;

        if code == Some('-') {
            position += 1;
            code = char_at(body, position);
        }

        if code == Some('0') {
            position += 1;
            code = char_at(body, position);
            if matches!(code, Some(c) if chars::is_digit(c)) {
                return Err(self.error(
                    position,
                    format!(
                        "Invalid number, unexpected digit after 0: {}.",
                        print_code_point(code)
                    ),
                ));
            }
        } else {
            position = self.read_digits(position, code)?;
            code = char_at(body, position);
        }

        if code == Some('.') {
            is_float = true;
            position += 1;
            code = char_at(body, position);
            position = self.read_digits(position, code)?;
            code = char_at(body, position);
        }

        if matches!(code, Some('e' | 'E')) {
            is_float = true;
            position += 1;
            code = char_at(body, position);
            if matches!(code, Some('+' | '-')) {
                position += 1;
                code = char_at(body, position);
            }
            position = self.read_digits(position, code)?;
            code = char_at(body, position);
        }

        // A number must not be immediately followed by a dot or a name start.
        if code == Some('.') || matches!(code, Some(c) if chars::is_name_start(c)) {
            return Err(self.error(
                position,
                format!(
                    "Invalid number, expected digit but got: {}.",
                    print_code_point(code)
                ),
            ));
        }

        Ok(self.create_token(
            if is_float { TokenKind::Float } else { TokenKind::Int },
            start,
            position,
            Some(body[start..position].to_string()),
        ))
    }

    /// Consume a run of at least one digit, returning the end position.
    fn read_digits(&self, start: usize, first: Option<char>) -> Result<usize, GraphQLError> {
        if !matches!(first, Some(c) if chars::is_digit(c)) {
            return Err(self.error(
                start,
                format!(
                    "Invalid number, expected digit but got: {}.",
                    print_code_point(first)
                ),
            ));
        }
        let body = self.source.body();
        let mut position = start + 1;
        while matches!(char_at(body, position), Some(c) if chars::is_digit(c)) {
            position += 1;
        }
        Ok(position)
    }

    /// A `"`-delimited string with escape sequences, decoded.
    fn read_string(&self, start: usize) -> Result<Token, GraphQLError> {
        let body = self.source.body();
        let mut position = start + 1;
        let mut chunk_start = position;
        let mut value = String::new();

        while let Some(c) = char_at(body, position) {
            match c {
                '"' => {
                    value.push_str(&body[chunk_start..position]);
                    return Ok(self.create_token(
                        TokenKind::String,
                        start,
                        position + 1,
                        Some(value),
                    ));
                }
                '\\' => {
                    value.push_str(&body[chunk_start..position]);
                    let escape = if body.as_bytes().get(position + 1) == Some(&b'u') {
                        if body.as_bytes().get(position + 2) == Some(&b'{') {
                            self.read_escaped_unicode_variable_width(position)?
                        } else {
                            self.read_escaped_unicode_fixed_width(position)?
                        }
                    } else {
                        self.read_escaped_character(position)?
                    };
                    value.push_str(&escape.value);
                    position += escape.size;
                    chunk_start = position;
                }
                '\n' | '\r' => break,
                _ => position += c.len_utf8(),
            }
        }

        Err(self.error(position, "Unterminated string."))
    }

    fn read_escaped_character(&self, position: usize) -> Result<EscapeSequence, GraphQLError> {
        let body = self.source.body();
        let value = match char_at(body, position + 1) {
            Some('"') => '"',
            Some('\\') => '\\',
            Some('/') => '/',
            Some('b') => '\u{0008}',
            Some('f') => '\u{000C}',
            Some('n') => '\n',
            Some('r') => '\r',
            Some('t') => '\t',
            _ => {
                return Err(self.error(
                    position,
                    format!(
                        "Invalid character escape sequence: \"{}\".",
                        take_chars(body, position, 2)
                    ),
                ))
            }
        };
        Ok(EscapeSequence {
            value: value.to_string(),
            size: 2,
        })
    }

    /// `\uXXXX`, possibly a surrogate pair of two such escapes.
    fn read_escaped_unicode_fixed_width(
        &self,
        position: usize,
    ) -> Result<EscapeSequence, GraphQLError> {
        let body = self.source.body();
        let code = read_16_bit_hex_code(body, position + 2);
        if code >= 0 {
            let code = code as u32;
            if chars::is_unicode_scalar_value(code) {
                return Ok(EscapeSequence {
                    value: char::from_u32(code)
                        .expect("scalar values are valid chars")
                        .to_string(),
                    size: 6,
                });
            }
            let followed_by_escape = body
                .get(position + 6..)
                .is_some_and(|rest| rest.starts_with("\\u"));
            if chars::is_leading_surrogate(code) && followed_by_escape {
                let trailing = read_16_bit_hex_code(body, position + 8);
                if trailing >= 0 && chars::is_trailing_surrogate(trailing as u32) {
                    let combined =
                        0x10000 + ((code - 0xD800) << 10) + (trailing as u32 - 0xDC00);
                    return Ok(EscapeSequence {
                        value: char::from_u32(combined)
                            .expect("paired surrogates form a valid char")
                            .to_string(),
                        size: 12,
                    });
                }
            }
        }
        Err(self.error(
            position,
            format!(
                "Invalid Unicode escape sequence: \"{}\".",
                take_chars(body, position, 6)
            ),
        ))
    }

    /// `\u{...}` with one to eight hex digits naming a Unicode scalar value.
    fn read_escaped_unicode_variable_width(
        &self,
        position: usize,
    ) -> Result<EscapeSequence, GraphQLError> {
        let body = self.source.body();
        let mut point: i64 = 0;
        let mut size = 3; // \u{
        while size < 12 {
            let c = char_at(body, position + size);
            size += 1;
            match c {
                Some('}') => {
                    if size < 5
                        || point > u32::MAX as i64
                        || !chars::is_unicode_scalar_value(point as u32)
                    {
                        break;
                    }
                    return Ok(EscapeSequence {
                        value: char::from_u32(point as u32)
                            .expect("scalar values are valid chars")
                            .to_string(),
                        size,
                    });
                }
                Some(c) => {
                    let digit = read_hex_digit(Some(c));
                    if digit < 0 {
                        break;
                    }
                    point = (point << 4) | digit as i64;
                }
                None => break,
            }
        }
        Err(self.error(
            position,
            format!(
                "Invalid Unicode escape sequence: \"{}\".",
                take_chars(body, position, size)
            ),
        ))
    }

    /// `"""` up to the matching `"""`, honouring the `\"""` escape. The
    /// collected lines go through the block-string dedent rules.
    fn read_block_string(&mut self, start: usize) -> Result<Token, GraphQLError> {
        let source = self.source.clone();
        let body = source.body();
        let mut line_start = self.line_start;
        let mut position = start + 3;
        let mut chunk_start = position;
        let mut current_line = String::new();
        let mut block_lines: Vec<String> = Vec::new();

        while let Some(c) = char_at(body, position) {
            if c == '"' && body[position..].starts_with("\"\"\"") {
                current_line.push_str(&body[chunk_start..position]);
                block_lines.push(current_line);
                let lines: Vec<&str> = block_lines.iter().map(String::as_str).collect();
                let value = crate::block_string::dedent_block_string_lines(&lines).join("\n");
                let token =
                    self.create_token(TokenKind::BlockString, start, position + 3, Some(value));
                self.line += block_lines.len() - 1;
                self.line_start = line_start;
                return Ok(token);
            }
            if c == '\\' && body[position..].starts_with("\\\"\"\"") {
                current_line.push_str(&body[chunk_start..position]);
                current_line.push_str("\"\"\"");
                position += 4;
                chunk_start = position;
                continue;
            }
            if c == '\n' || c == '\r' {
                current_line.push_str(&body[chunk_start..position]);
                block_lines.push(std::mem::take(&mut current_line));
                if c == '\r' && body.as_bytes().get(position + 1) == Some(&b'\n') {
                    position += 2;
                } else {
                    position += 1;
                }
                chunk_start = position;
                line_start = position;
                continue;
            }
            position += c.len_utf8();
        }

        Err(self.error(body.len(), "Unterminated string."))
    }
}

fn char_at(body: &str, position: usize) -> Option<char> {
    body.get(position..)?.chars().next()
}

/// Up to `n` characters starting at `position` (for error messages).
fn take_chars(body: &str, position: usize, n: usize) -> String {
    body.get(position..)
        .map(|rest| rest.chars().take(n).collect())
        .unwrap_or_default()
}

fn read_hex_digit(c: Option<char>) -> i32 {
    match c {
        Some(c @ '0'..='9') => c as i32 - '0' as i32,
        Some(c @ 'A'..='F') => c as i32 - 'A' as i32 + 10,
        Some(c @ 'a'..='f') => c as i32 - 'a' as i32 + 10,
        _ => -1,
    }
}

/// Four hex digits as a code unit, or a negative value if any digit is
/// missing or invalid.
fn read_16_bit_hex_code(body: &str, position: usize) -> i32 {
    (read_hex_digit(char_at(body, position)) << 12)
        | (read_hex_digit(char_at(body, position + 1)) << 8)
        | (read_hex_digit(char_at(body, position + 2)) << 4)
        | read_hex_digit(char_at(body, position + 3))
}

/// A code point as it appears in error messages: printable ASCII quoted,
/// everything else as `U+XXXX`, and `<EOF>` past the end of input.
fn print_code_point(c: Option<char>) -> String {
    match c {
        None => TokenKind::Eof.as_str().to_string(),
        Some('"') => "'\"'".to_string(),
        Some(c) if (' '..='~').contains(&c) => format!("\"{c}\""),
        Some(c) => format!("U+{:04X}", c as u32),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::get_location;
    use crate::source::LineColumn;
    use expect_test::expect;
    use std::fmt::Write;

    fn lex(input: &str) -> String {
        let mut lexer = Lexer::new(input);
        loop {
            match lexer.advance() {
                Ok(id) if lexer.stream()[id].kind == TokenKind::Eof => break,
                Ok(_) => {}
                Err(error) => {
                    let mut out = dump(&lexer);
                    writeln!(out, "error: {}", error.message()).unwrap();
                    return out;
                }
            }
        }
        dump(&lexer)
    }

    fn dump(lexer: &Lexer) -> String {
        let mut out = String::new();
        for token in lexer.stream().iter() {
            writeln!(out, "{token}").unwrap();
        }
        out
    }

    #[test]
    fn lexes_punctuation_and_names() {
        expect![[r#"
            <SOF>@0:0
            {@0:1
            Name@2:7 "hello"
            ...@8:11
            }@12:13
            <EOF>@13:13
        "#]]
        .assert_eq(&lex("{ hello ... }"));
    }

    #[test]
    fn keeps_comments_linked_in_the_stream() {
        let mut lexer = Lexer::new("# first\nname # trailing");
        let first = lexer.advance().unwrap();
        assert_eq!(lexer.stream()[first].kind, TokenKind::Name);
        // The comment sits between <SOF> and the name in the linked list.
        let sof_next = lexer.stream()[TokenId::SOF].next().unwrap();
        let comment = &lexer.stream()[sof_next];
        assert_eq!(comment.kind, TokenKind::Comment);
        assert_eq!(comment.value.as_deref(), Some(" first"));
        assert_eq!(lexer.stream()[comment.next().unwrap()].kind, TokenKind::Name);

        let eof = lexer.advance().unwrap();
        assert_eq!(lexer.stream()[eof].kind, TokenKind::Eof);
    }

    #[test]
    fn lookahead_is_stable() {
        let mut lexer = Lexer::new("a b");
        let ahead = lexer.lookahead().unwrap();
        assert_eq!(lexer.lookahead().unwrap(), ahead);
        assert_eq!(lexer.advance().unwrap(), ahead);
    }

    #[test]
    fn token_linkage_is_ordered_and_terminated() {
        let mut lexer = Lexer::new("query Q { a b(c: 1.5) @d }");
        while lexer.stream()[lexer.token()].kind != TokenKind::Eof {
            lexer.advance().unwrap();
        }
        let tokens: Vec<&Token> = lexer.stream().iter().collect();
        assert_eq!(tokens.first().unwrap().kind, TokenKind::Sof);
        assert_eq!(tokens.last().unwrap().kind, TokenKind::Eof);
        for pair in tokens.windows(2) {
            assert!(pair[0].start <= pair[1].start);
            assert!(pair[0].end <= pair[1].end);
        }
        // prev links mirror next links
        let mut id = TokenId::SOF;
        while let Some(next) = lexer.stream()[id].next() {
            assert_eq!(lexer.stream()[next].prev(), Some(id));
            id = next;
        }
    }

    #[test]
    fn lexes_numbers() {
        expect![[r#"
            <SOF>@0:0
            Int@0:1 "4"
            Float@2:7 "-4.12"
            Float@8:13 "0.1e2"
            Float@14:21 "1.2e+34"
            Int@22:24 "-0"
            <EOF>@24:24
        "#]]
        .assert_eq(&lex("4 -4.12 0.1e2 1.2e+34 -0"));
    }

    #[test]
    fn rejects_leading_zero_runs() {
        expect![[r#"
            <SOF>@0:0
            error: Invalid number, unexpected digit after 0: "1".
        "#]]
        .assert_eq(&lex("0123"));
    }

    #[test]
    fn rejects_name_after_number() {
        expect![[r#"
            <SOF>@0:0
            error: Invalid number, expected digit but got: "x".
        "#]]
        .assert_eq(&lex("1x"));
    }

    #[test]
    fn rejects_trailing_dot() {
        expect![[r#"
            <SOF>@0:0
            error: Invalid number, expected digit but got: ".".
        "#]]
        .assert_eq(&lex("1.2."));

        expect![[r#"
            <SOF>@0:0
            error: Invalid number, expected digit but got: <EOF>.
        "#]]
        .assert_eq(&lex("1."));
    }

    #[test]
    fn lexes_strings_with_escapes() {
        let mut lexer = Lexer::new(r#""simple" "esc \" \\ \n \t" "uni é \u{1F600} 😀""#);
        let mut values = Vec::new();
        loop {
            let id = lexer.advance().unwrap();
            let token = &lexer.stream()[id];
            if token.kind == TokenKind::Eof {
                break;
            }
            values.push(token.value.clone().unwrap());
        }
        assert_eq!(
            values,
            vec![
                "simple".to_string(),
                "esc \" \\ \n \t".to_string(),
                "uni \u{00e9} \u{1F600} \u{1F600}".to_string(),
            ]
        );
    }

    #[test]
    fn rejects_bad_escapes() {
        expect![[r#"
            <SOF>@0:0
            error: Invalid character escape sequence: "\x".
        "#]]
        .assert_eq(&lex(r#""bad \x""#));

        expect![[r#"
            <SOF>@0:0
            error: Invalid Unicode escape sequence: "\u12".
        "#]]
        .assert_eq(&lex(r#""bad \u12""#));

        // A lone leading surrogate cannot be decoded.
        expect![[r#"
            <SOF>@0:0
            error: Invalid Unicode escape sequence: "\uD83D".
        "#]]
        .assert_eq(&lex(r#""bad \uD83D esc""#));
    }

    #[test]
    fn unterminated_string_reports_newline_offset() {
        let mut lexer = Lexer::new("\"abc\n");
        let error = lexer.advance().unwrap_err();
        assert_eq!(error.message(), "Unterminated string.");
        assert_eq!(error.positions(), &[4]);
        let source = error.source().unwrap();
        assert_eq!(get_location(source, 4), LineColumn { line: 1, column: 5 });
    }

    #[test]
    fn suggests_double_quotes_for_single_quote() {
        let mut lexer = Lexer::new("'text'");
        let error = lexer.advance().unwrap_err();
        assert_eq!(
            error.message(),
            "Unexpected single quote character ('), did you mean to use a double quote (\")?"
        );
    }

    #[test]
    fn reports_unexpected_characters() {
        let mut lexer = Lexer::new(".5");
        let error = lexer.advance().unwrap_err();
        assert_eq!(error.message(), "Unexpected character: \".\".");

        let mut lexer = Lexer::new("\u{203B}");
        let error = lexer.advance().unwrap_err();
        assert_eq!(error.message(), "Unexpected character: U+203B.");
    }

    #[test]
    fn dedents_block_strings() {
        let mut lexer = Lexer::new("\"\"\"\n  hello\n  world\n\"\"\"");
        let id = lexer.advance().unwrap();
        let token = &lexer.stream()[id];
        assert_eq!(token.kind, TokenKind::BlockString);
        assert_eq!(token.value.as_deref(), Some("hello\nworld"));
    }

    #[test]
    fn block_string_tracks_lines() {
        let mut lexer = Lexer::new("\"\"\"\na\nb\n\"\"\" after");
        lexer.advance().unwrap();
        let id = lexer.advance().unwrap();
        let token = &lexer.stream()[id];
        assert_eq!(token.value.as_deref(), Some("after"));
        assert_eq!(token.line, 4);
        assert_eq!(token.column, 5);
    }

    #[test]
    fn block_string_honours_escaped_terminator() {
        let mut lexer = Lexer::new(r#""""esc \""" quote""""#);
        let id = lexer.advance().unwrap();
        assert_eq!(
            lexer.stream()[id].value.as_deref(),
            Some("esc \"\"\" quote")
        );
    }

    #[test]
    fn token_json_shape() {
        let mut lexer = Lexer::new("hello");
        let id = lexer.advance().unwrap();
        let json = serde_json::to_value(&lexer.stream()[id]).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"kind": "Name", "value": "hello", "line": 1, "column": 1})
        );
    }
}
