use super::escape::push_escaped;
use super::lexer::Token;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListState {
    Outside,
    InItem,
    /// An item just closed; the newline that ended it is held back until we
    /// know whether the next line continues the list.
    AfterItem,
}

/// Renders a token stream to HTML. Text content is escaped on the way out.
pub fn render(tokens: &[Token<'_>]) -> String {
    let mut out = String::new();
    let mut list = ListState::Outside;

    for token in tokens {
        match token {
            Token::ListMarker => {
                match list {
                    ListState::Outside => out.push_str("<ul><li>"),
                    ListState::AfterItem => out.push_str("<li>"),
                    // The lexer only emits markers at line start.
                    ListState::InItem => out.push_str("</li><li>"),
                }
                list = ListState::InItem;
            }
            Token::LineBreak => match list {
                ListState::InItem => {
                    out.push_str("</li>");
                    list = ListState::AfterItem;
                }
                ListState::AfterItem => {
                    out.push_str("</ul><br><br>");
                    list = ListState::Outside;
                }
                ListState::Outside => out.push_str("<br>"),
            },
            inline => {
                if list == ListState::AfterItem {
                    out.push_str("</ul><br>");
                    list = ListState::Outside;
                }
                push_inline(&mut out, inline);
            }
        }
    }

    match list {
        ListState::InItem => out.push_str("</li></ul>"),
        ListState::AfterItem => out.push_str("</ul><br>"),
        ListState::Outside => {}
    }

    out
}

fn push_inline(out: &mut String, token: &Token<'_>) {
    match token {
        Token::Text(text) => push_escaped(out, text),
        Token::Bold(text) => {
            out.push_str("<strong>");
            push_escaped(out, text);
            out.push_str("</strong>");
        }
        Token::CodeBlock(code) => {
            out.push_str(r#"<pre class="code-block">"#);
            push_escaped(out, code);
            out.push_str("</pre>");
        }
        Token::ListMarker | Token::LineBreak => {}
    }
}
