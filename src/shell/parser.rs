//! Line tokenizer
//!
//! Splits a raw input line into whitespace-delimited words. No quoting,
//! escaping or operator handling lives here; every word comes back as an
//! independently owned `String` and the caller's buffer is left untouched.

/// Initial token capacity for one line.
const TOKEN_CAPACITY: usize = 64;

/// Strip leading and trailing whitespace, returning a view into `line`.
/// Never allocates.
pub fn trim(line: &str) -> &str {
    line.trim()
}

/// Split `line` into owned word tokens.
///
/// Tokens are delimited by runs of whitespace (space, tab, CR, LF); an empty
/// or all-whitespace line yields no tokens and no token is ever empty.
pub fn tokenize(line: &str) -> Vec<String> {
    let mut tokens = Vec::with_capacity(TOKEN_CAPACITY);
    for word in line.split_whitespace() {
        tokens.push(word.to_string());
    }
    tokens
}
