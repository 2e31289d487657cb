//! Lexeme normalization: quote/escape resolution and space trimming

/// Turn a complete raw lexeme into a field value
///
/// 1. With `strip_quotes`, a lexeme wrapped in exactly one `quote` at each
///    end loses that outer pair.
/// 2. Inside the remaining body a quote byte is only kept when the byte
///    before it is also a quote and the body's running quote count is even
///    after counting it, so `""` becomes `"` and a lone `"` disappears.
/// 3. With `strip_spaces`, leading and trailing `' '` bytes are trimmed
///    (tabs and other whitespace are kept).
pub fn normalize(lexeme: &[u8], quote: u8, strip_quotes: bool, strip_spaces: bool) -> Vec<u8> {
    let mut body = lexeme;
    if strip_quotes && body.len() >= 2 && body[0] == quote && body[body.len() - 1] == quote {
        body = &body[1..body.len() - 1];
    }

    let mut value = Vec::with_capacity(body.len());
    let mut odd_quotes = false;
    for (i, &byte) in body.iter().enumerate() {
        if byte == quote {
            odd_quotes = !odd_quotes;
            let escaped = i > 0 && body[i - 1] == quote && !odd_quotes;
            if !escaped {
                continue;
            }
        }
        value.push(byte);
    }

    if strip_spaces {
        let start = value.iter().position(|&b| b != b' ').unwrap_or(value.len());
        let end = value.iter().rposition(|&b| b != b' ').map_or(start, |i| i + 1);
        value.truncate(end);
        value.drain(..start);
    }
    value
}
