//! Usage-line tokenization.

/// Extract positional placeholder tokens from a `Usage:` line.
///
/// The first three tokens are fixed preamble (`Usage: docker <command>`),
/// and a leading `[OPTIONS]` placeholder is dropped since switches are
/// captured separately. `push`, `pull`, and `images` get hand-picked
/// placeholders: their usage lines say less than completion can offer.
pub(super) fn usage_positionals(command: &str, usage_line: &str) -> Vec<String> {
    match command {
        "push" | "pull" => return vec!["REPOSITORY|IMAGE".to_string()],
        "images" => return vec!["REPOSITORY".to_string()],
        _ => {}
    }

    let mut tokens = usage_line.split_whitespace().skip(3).peekable();
    if tokens
        .peek()
        .is_some_and(|token| token.eq_ignore_ascii_case("[OPTIONS]"))
    {
        tokens.next();
    }
    tokens.map(str::to_string).collect()
}
