/// Remove `/* ... */` and `// ...` comments from gamedata text.
///
/// Comment markers inside quoted strings are left alone. Newlines inside
/// block comments are kept so line numbers stay stable for error reporting.
/// An unterminated block comment runs to the end of the text.
pub fn strip_comments(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    let mut in_quotes = false;

    while let Some(c) = chars.next() {
        if in_quotes {
            out.push(c);
            if c == '"' {
                in_quotes = false;
            }
            continue;
        }

        match (c, chars.peek()) {
            ('"', _) => {
                in_quotes = true;
                out.push(c);
            }
            ('/', Some('*')) => {
                chars.next();
                while let Some(inner) = chars.next() {
                    match inner {
                        '*' if chars.peek() == Some(&'/') => {
                            chars.next();
                            break;
                        }
                        '\n' => out.push('\n'),
                        _ => {}
                    }
                }
            }
            ('/', Some('/')) => {
                while chars.peek().is_some_and(|&next| next != '\n') {
                    chars.next();
                }
            }
            _ => out.push(c),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_block_comment() {
        assert_eq!(strip_comments("a /* b */ c"), "a  c");
    }

    #[test]
    fn test_strip_block_comment_keeps_newlines() {
        assert_eq!(strip_comments("a/*\n\n*/b"), "a\n\nb");
    }

    #[test]
    fn test_strip_unterminated_block_comment() {
        assert_eq!(strip_comments("a /* never closed"), "a ");
    }

    #[test]
    fn test_strip_line_comment() {
        assert_eq!(strip_comments("\"a\" // note\n\"b\""), "\"a\" \n\"b\"");
    }

    #[test]
    fn test_quoted_markers_survive() {
        let text = r#""url" "http://example.com/*x*/""#;
        assert_eq!(strip_comments(text), text);
    }

    #[test]
    fn test_signature_wildcards_survive() {
        let text = r#""windows" "\x55\x8B*\x2F*""#;
        assert_eq!(strip_comments(text), text);
    }
}
