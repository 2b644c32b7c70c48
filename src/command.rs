//! Free-text requests such as `integral x^2 dx` or `limit sin(x)/x x->0`.

use std::str::FromStr;

use crate::error::EngineError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Integrate(String),
    Differentiate(String),
    Limit {
        expression: String,
        variable: String,
        approach: String,
    },
    Solve(String),
    Simplify(String),
    Factor(String),
    Expand(String),
}

const INTEGRAL: [&str; 3] = ["integral", "integrate", "∫"];
const DERIVATIVE: [&str; 3] = ["derivative", "differentiate", "d/dx"];
const LIMIT: [&str; 2] = ["limit", "lim"];

impl Command {
    /// Recognize a request by keyword, case-insensitively. Keywords are tried
    /// in the order integral, derivative, limit, solve (or any `=`),
    /// simplify, factor, expand.
    pub fn parse(message: &str) -> Option<Command> {
        let message = message.trim().to_lowercase();

        if let Some(rest) = after_keyword(&message, &INTEGRAL) {
            return non_empty(strip_differential(rest)).map(Command::Integrate);
        }
        if let Some(rest) = after_keyword(&message, &DERIVATIVE) {
            return non_empty(rest).map(Command::Differentiate);
        }
        if let Some(rest) = after_keyword(&message, &LIMIT) {
            return parse_limit(rest);
        }
        if let Some(rest) = after_keyword(&message, &["solve"]) {
            return non_empty(rest).map(Command::Solve);
        }
        if message.contains('=') {
            return non_empty(&message).map(Command::Solve);
        }
        if let Some(rest) = after_keyword(&message, &["simplify"]) {
            return non_empty(rest).map(Command::Simplify);
        }
        if let Some(rest) = after_keyword(&message, &["factor"]) {
            return non_empty(rest).map(Command::Factor);
        }
        if let Some(rest) = after_keyword(&message, &["expand"]) {
            return non_empty(rest).map(Command::Expand);
        }
        None
    }
}

impl FromStr for Command {
    type Err = EngineError;

    fn from_str(message: &str) -> Result<Self, Self::Err> {
        Command::parse(message).ok_or_else(|| {
            EngineError::format(
                "try `integral x^2 dx`, `derivative sin(x)`, `limit sin(x)/x x->0`, \
                 `solve x^2-5*x+6=0`, `simplify ...`, `factor ...` or `expand ...`",
            )
        })
    }
}

/// Text after the first keyword found as a whole word, with a leading `of`
/// dropped.
fn after_keyword<'a>(message: &'a str, keywords: &[&str]) -> Option<&'a str> {
    keywords.iter().find_map(|keyword| {
        message
            .match_indices(keyword)
            .find(|&(at, _)| is_whole_word(message, at, keyword.len()))
            .map(|(at, _)| {
                let rest = message[at + keyword.len()..].trim();
                rest.strip_prefix("of ").unwrap_or(rest).trim()
            })
    })
}

fn is_whole_word(message: &str, at: usize, len: usize) -> bool {
    let before = message[..at].chars().next_back();
    let after = message[at + len..].chars().next();
    !before.is_some_and(char::is_alphabetic) && !after.is_some_and(char::is_alphabetic)
}

/// Drop a trailing `dx` (or `d x`).
fn strip_differential(text: &str) -> &str {
    let text = text.trim_end();
    for suffix in ["dx", "d x"] {
        if let Some(rest) = text.strip_suffix(suffix) {
            if !rest.ends_with(|c: char| c.is_ascii_alphabetic()) {
                return rest.trim_end();
            }
        }
    }
    text
}

/// `EXPR VAR->A`, `(EXPR) VAR->A`, with `→` accepted for `->`.
fn parse_limit(rest: &str) -> Option<Command> {
    let (head, arrow_len) = ["->", "→"]
        .iter()
        .find_map(|arrow| rest.find(arrow).map(|at| (at, arrow.len())))?;
    let approach = rest[head + arrow_len..].split_whitespace().next()?;

    let before = rest[..head].trim_end();
    let var_start = before
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_ascii_alphabetic())
        .last()
        .map_or(before.len(), |(at, _)| at);
    let variable = &before[var_start..];
    if variable.is_empty() {
        return None;
    }

    let body = before[..var_start].trim();
    let body = body.strip_suffix(',').unwrap_or(body).trim();
    let expression = strip_outer_parens(body);
    Some(Command::Limit {
        expression: non_empty(expression)?,
        variable: variable.to_string(),
        approach: approach.to_string(),
    })
}

fn strip_outer_parens(text: &str) -> &str {
    let Some(inner) = text.strip_prefix('(').and_then(|t| t.strip_suffix(')')) else {
        return text;
    };
    let mut depth = 0i32;
    for c in inner.chars() {
        match c {
            '(' => depth += 1,
            ')' => depth -= 1,
            _ => {}
        }
        if depth < 0 {
            return text;
        }
    }
    inner.trim()
}

fn non_empty(text: &str) -> Option<String> {
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_differential_only_as_a_separate_token() {
        assert_eq!(strip_differential("x^2 dx"), "x^2");
        assert_eq!(strip_differential("sin(x)dx"), "sin(x)");
        assert_eq!(strip_differential("x d x"), "x");
    }

    #[test]
    fn keywords_match_whole_words_only() {
        assert_eq!(after_keyword("simplify x+x", &LIMIT), None);
        assert_eq!(after_keyword("lim(x)", &LIMIT), Some("(x)"));
        assert_eq!(after_keyword("factorial 3", &["factor"]), None);
    }

    #[test]
    fn outer_parens_only_when_they_enclose_everything() {
        assert_eq!(strip_outer_parens("(sin(x)/x)"), "sin(x)/x");
        assert_eq!(strip_outer_parens("(e^x-1)/(x)"), "(e^x-1)/(x)");
    }
}
