use super::{ByteDescriptor, ParseError, Pattern, WILDCARD_BYTE};

const ESCAPE: &str = "\\x";
const WILDCARD: char = '*';

/// Compile a SourceMod-style signature (`\x55\x8B*\xEC`) into a pattern.
///
/// The text is split on `\x`; every non-empty piece must be exactly two hex
/// digits. `*` is a token of its own and stands in for `\x2A`, so anything
/// glued directly after it reads as one over-long byte.
pub fn compile(text: &str) -> Result<Pattern, ParseError> {
    let mut descriptors = Vec::with_capacity(text.len() / 4);

    for piece in text.split(ESCAPE).filter(|piece| !piece.is_empty()) {
        let mut segments = piece.split(WILDCARD);

        if let Some(head) = segments.next()
            && !head.is_empty()
        {
            descriptors.push(parse_byte(text, head)?);
        }

        for tail in segments {
            if !tail.is_empty() {
                return Err(ParseError::MalformedToken {
                    signature: text.to_string(),
                    token: format!("{}{}", WILDCARD, tail),
                });
            }
            descriptors.push(ByteDescriptor::Wildcard);
        }
    }

    Ok(Pattern::new(descriptors))
}

fn parse_byte(signature: &str, token: &str) -> Result<ByteDescriptor, ParseError> {
    if token.chars().count() != 2 {
        return Err(ParseError::MalformedToken {
            signature: signature.to_string(),
            token: token.to_string(),
        });
    }

    // from_str_radix alone would accept a leading '+'
    let value = token
        .bytes()
        .all(|b| b.is_ascii_hexdigit())
        .then(|| u8::from_str_radix(token, 16).ok())
        .flatten()
        .ok_or_else(|| ParseError::InvalidHex {
            signature: signature.to_string(),
            token: token.to_string(),
        })?;

    Ok(if value == WILDCARD_BYTE {
        ByteDescriptor::Wildcard
    } else {
        ByteDescriptor::Exact(value)
    })
}
