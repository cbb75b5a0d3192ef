const FENCE: &str = "```";
const BOLD: &str = "**";
const LIST_MARKER: &str = "- ";

/// One lexical unit of analysis text. Slices borrow the unescaped input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    Text(&'a str),
    Bold(&'a str),
    /// Content between two fences, already trimmed at its edges.
    CodeBlock(&'a str),
    /// `- ` at the start of a line.
    ListMarker,
    LineBreak,
}

/// Splits `input` into tokens in a single left-to-right pass.
///
/// Fenced blocks are taken verbatim, so bold markers and list markers inside
/// them stay literal. Bold spans never cross a newline. Delimiters without a
/// partner fall through as text.
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut rest = input;
    let mut at_line_start = true;

    while !rest.is_empty() {
        if at_line_start && rest.starts_with(LIST_MARKER) {
            tokens.push(Token::ListMarker);
            rest = &rest[LIST_MARKER.len()..];
            at_line_start = false;
            continue;
        }

        if let Some((block, tail)) = fenced_block(rest) {
            tokens.push(Token::CodeBlock(block.trim()));
            rest = tail;
            at_line_start = false;
            continue;
        }

        if let Some((span, tail)) = bold_span(rest) {
            tokens.push(Token::Bold(span));
            rest = tail;
            at_line_start = false;
            continue;
        }

        if let Some(tail) = rest.strip_prefix('\n') {
            tokens.push(Token::LineBreak);
            rest = tail;
            at_line_start = true;
            continue;
        }

        let end = text_run_end(rest);
        tokens.push(Token::Text(&rest[..end]));
        rest = &rest[end..];
        at_line_start = false;
    }

    tokens
}

fn fenced_block(rest: &str) -> Option<(&str, &str)> {
    let body = rest.strip_prefix(FENCE)?;
    let close = body.find(FENCE)?;
    Some((&body[..close], &body[close + FENCE.len()..]))
}

fn bold_span(rest: &str) -> Option<(&str, &str)> {
    let body = rest.strip_prefix(BOLD)?;
    let line_end = body.find('\n').unwrap_or(body.len());
    let close = body[..line_end].find(BOLD)?;
    Some((&body[..close], &body[close + BOLD.len()..]))
}

/// Length of the plain-text run at the head of `rest`. Always consumes at
/// least the first character, so a delimiter that failed to match becomes
/// text instead of stalling the lexer.
fn text_run_end(rest: &str) -> usize {
    let first = rest.chars().next().map_or(0, char::len_utf8);
    rest[first..]
        .find(['`', '*', '\n'])
        .map_or(rest.len(), |offset| first + offset)
}
