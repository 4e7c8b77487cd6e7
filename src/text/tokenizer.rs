//! Text normalization and word splitting.
//!
//! The same normalization runs over the corpus and over text being decoded,
//! so both sides agree on token boundaries:
//!
//! 1. line breaks become spaces
//! 2. anything from `<` up to and including the next `>` is removed
//!    (an unclosed `<` removes the rest of the text)
//! 3. characters other than letters, digits, `_` and `'` become spaces
//! 4. digits become spaces
//! 5. whitespace runs collapse and the result is split into words

/// Check whether a character survives normalization as part of a word.
fn is_word_char(c: char) -> bool {
    (c.is_alphanumeric() || c == '_' || c == '\'') && !c.is_numeric()
}

/// Remove markup openers through their (optional) closer.
fn strip_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_tag = false;

    for c in text.chars() {
        if in_tag {
            if c == '>' {
                in_tag = false;
            }
        } else if c == '<' {
            in_tag = true;
        } else {
            out.push(c);
        }
    }

    out
}

/// Normalize raw text into a single-space separated string of words.
pub fn normalize(text: &str) -> String {
    tokenize(text).join(" ")
}

/// Split raw text into word tokens, preserving case.
///
/// # Example
///
/// ```
/// use markov_stego::text::tokenize;
///
/// let tokens = tokenize("It's <b>42</b> cats,\nnot dogs!");
/// assert_eq!(tokens, vec!["It's", "cats", "not", "dogs"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    let unbroken: String = text
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();

    let stripped = strip_markup(&unbroken);

    let cleaned: String = stripped
        .chars()
        .map(|c| if is_word_char(c) { c } else { ' ' })
        .collect();

    cleaned.split_whitespace().map(str::to_string).collect()
}
