use std::fmt;

/// `s`, `t` and `n` move the machine; `x` only spells annotations.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Symbol {
    S,
    T,
    N,
    X,
}

pub const ZERO_WIDTH_SPACE: char = '\u{200B}';
pub const ZERO_WIDTH_NON_JOINER: char = '\u{200C}';
pub const ZERO_WIDTH_JOINER: char = '\u{200D}';
pub const WORD_JOINER: char = '\u{2060}';

impl Symbol {
    /// The readable letter, as used in instruction codes.
    pub fn letter(self) -> char {
        match self {
            | Symbol::S => 's',
            | Symbol::T => 't',
            | Symbol::N => 'n',
            | Symbol::X => 'x',
        }
    }
    pub fn from_letter(c: char) -> Option<Self> {
        match c {
            | 's' => Some(Symbol::S),
            | 't' => Some(Symbol::T),
            | 'n' => Some(Symbol::N),
            | 'x' => Some(Symbol::X),
            | _ => None,
        }
    }
    pub fn invisible(self) -> char {
        match self {
            | Symbol::S => ZERO_WIDTH_SPACE,
            | Symbol::T => ZERO_WIDTH_NON_JOINER,
            | Symbol::N => ZERO_WIDTH_JOINER,
            | Symbol::X => WORD_JOINER,
        }
    }
    /// `x` has no whitespace spelling.
    pub fn whitespace(self) -> Option<char> {
        match self {
            | Symbol::S => Some(' '),
            | Symbol::T => Some('\t'),
            | Symbol::N => Some('\n'),
            | Symbol::X => None,
        }
    }
    /// Normalization for whitespace sources: everything but space, tab and newline is a comment.
    pub fn from_whitespace(c: char) -> Option<Self> {
        match c {
            | ' ' => Some(Symbol::S),
            | '\t' => Some(Symbol::T),
            | '\n' => Some(Symbol::N),
            | _ => None,
        }
    }
    /// Normalization for nospace sources, which also accept literal whitespace.
    pub fn from_nospace(c: char) -> Option<Self> {
        match c {
            | ZERO_WIDTH_SPACE => Some(Symbol::S),
            | ZERO_WIDTH_NON_JOINER => Some(Symbol::T),
            | ZERO_WIDTH_JOINER => Some(Symbol::N),
            | WORD_JOINER => Some(Symbol::X),
            | c => Self::from_whitespace(c),
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Respell a string of code letters with invisible characters.
pub fn letters_to_nospace(letters: &str) -> String {
    letters.chars().filter_map(Symbol::from_letter).map(Symbol::invisible).collect()
}

/// Respell a string of code letters with whitespace; `x` is dropped.
pub fn letters_to_whitespace(letters: &str) -> String {
    letters.chars().filter_map(Symbol::from_letter).filter_map(Symbol::whitespace).collect()
}
