use logos::{Logos, SpannedIter};
use std::fmt::{Debug, Display};

/// Tokens of a single assembly line. A `#` not directly followed by a letter
/// starts a comment running to the end of the line.
#[derive(Logos, Clone, Debug, PartialEq)]
#[logos(skip r"[ \t\r\f]+")]
#[logos(skip r"#([^A-Za-z\n][^\n]*)?")]
pub enum Tok<'input> {
    #[regex(r"#[A-Za-z][A-Za-z0-9_]*")]
    Pragma(&'input str),
    #[regex(r"[^ \t\r\f\n#]+")]
    Word(&'input str),
}

impl<'input> Tok<'input> {
    pub fn text(&self) -> &'input str {
        match self {
            | Tok::Pragma(s) | Tok::Word(s) => s,
        }
    }
}

impl Display for Tok<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            | Tok::Pragma(s) => write!(f, "Pragma({})", s),
            | Tok::Word(s) => write!(f, "Word({})", s),
        }
    }
}

/// A lexed token with its char columns in the line.
#[derive(Clone, Debug, PartialEq)]
pub struct Lexeme<'source> {
    pub tok: Tok<'source>,
    pub start: usize,
    pub end: usize,
}

pub struct Lexer<'source> {
    source: &'source str,
    inner: SpannedIter<'source, Tok<'source>>,
}

impl<'source> Lexer<'source> {
    pub fn new(source: &'source str) -> Self {
        Self { source, inner: Tok::lexer(source).spanned() }
    }
    fn column(&self, offset: usize) -> usize {
        self.source.get(..offset).map(|s| s.chars().count()).unwrap_or(offset)
    }
}

impl<'source> Iterator for Lexer<'source> {
    /// `Err` carries the column of input no token accepts.
    type Item = Result<Lexeme<'source>, usize>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.inner.next()? {
            | (Ok(tok), range) => Some(Ok(Lexeme {
                tok,
                start: self.column(range.start),
                end: self.column(range.end),
            })),
            | (Err(()), range) => Some(Err(self.column(range.start))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn toks(line: &str) -> Vec<Tok<'_>> {
        Lexer::new(line).filter_map(Result::ok).map(|l| l.tok).collect()
    }

    #[test]
    fn words_and_pragmas() {
        assert_eq!(toks(" Push -3"), vec![Tok::Word("Push"), Tok::Word("-3")]);
        assert_eq!(
            toks("#if mode debug WriteInt"),
            vec![Tok::Pragma("#if"), Tok::Word("mode"), Tok::Word("debug"), Tok::Word("WriteInt")]
        );
    }

    #[test]
    fn comments_run_to_end_of_line() {
        assert!(toks("# a comment #define").is_empty());
        assert!(toks("#").is_empty());
        assert_eq!(toks("Pop # drop it"), vec![Tok::Word("Pop")]);
    }

    #[test]
    fn columns_count_chars() {
        let lexemes: Vec<_> = Lexer::new("é Pop").filter_map(Result::ok).collect();
        assert_eq!(lexemes.len(), 2);
        assert_eq!((lexemes[1].start, lexemes[1].end), (2, 5));
    }
}
