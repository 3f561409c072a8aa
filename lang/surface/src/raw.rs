//! Parser for the symbol-spelled syntaxes: invisible nospace and whitespace.

use crate::validate::validate_labels;
use nospace_syntax::*;
use nospace_utils::span::{Cursor, CursorTracker, SourceRange};

/// Which characters count as symbols.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dialect {
    Nospace,
    Whitespace,
}

impl Dialect {
    pub fn normalize(self, c: char) -> Option<Symbol> {
        match self {
            | Dialect::Nospace => Symbol::from_nospace(c),
            | Dialect::Whitespace => Symbol::from_whitespace(c),
        }
    }
}

pub fn parse_nospace(source: &str) -> NospaceIR {
    RawParser::new(Dialect::Nospace).run(source)
}

pub fn parse_whitespace(source: &str) -> NospaceIR {
    RawParser::new(Dialect::Whitespace).run(source)
}

struct RawParser {
    dialect: Dialect,
    ir: NospaceIR,
    /// Symbol letters read since the last commit.
    buf: String,
    /// An instruction whose argument is being read.
    pending: Option<Instruction>,
    /// Where the instruction being read started.
    start: Cursor,
}

impl RawParser {
    fn new(dialect: Dialect) -> Self {
        RawParser {
            dialect,
            ir: NospaceIR::default(),
            buf: String::new(),
            pending: None,
            start: Cursor::default(),
        }
    }

    fn run(mut self, source: &str) -> NospaceIR {
        let mut tracker = CursorTracker::new();
        for c in source.chars() {
            let here = tracker.cursor();
            tracker.advance(c);
            let Some(sym) = self.dialect.normalize(c) else { continue };
            if self.buf.is_empty() && self.pending.is_none() {
                self.start = here;
            }
            self.buf.push(sym.letter());
            let range = SourceRange::new(self.start, tracker.cursor());
            match self.pending {
                | Some(instr) => self.argument(instr, sym, range),
                | None => self.instruction(range),
            }
        }
        if !self.buf.is_empty() || self.pending.is_some() {
            let range = SourceRange::new(self.start, tracker.cursor());
            let leftover = match self.pending {
                | Some(instr) => format!("{}{}", instr.code(), self.buf),
                | None => self.buf.clone(),
            };
            self.error(
                ParseErrorKind::UnknownInstruction,
                format!("Unrecognized instruction \"{}\"", leftover),
                range,
            );
        }
        validate_labels(&mut self.ir);
        self.ir
    }

    fn instruction(&mut self, range: SourceRange) {
        if let Some(instr) = Instruction::from_code(&self.buf) {
            self.buf.clear();
            if instr.takes_argument() {
                self.pending = Some(instr);
            } else {
                self.ir.operations.push(Operation::new(instr, None, range));
            }
        } else if self.buf.len() > MAX_CODE_LEN {
            let message = format!("Unrecognized instruction \"{}\"", self.buf);
            self.buf.clear();
            self.error(ParseErrorKind::UnknownInstruction, message, range);
        }
    }

    fn argument(&mut self, instr: Instruction, sym: Symbol, range: SourceRange) {
        match sym {
            | Symbol::X => {
                self.reset();
                self.error(
                    ParseErrorKind::Argument,
                    format!("The argument of the {} instruction cannot contain an x symbol", instr),
                    range,
                );
            }
            | Symbol::N if self.buf.len() == 1 => {
                self.reset();
                self.error(
                    ParseErrorKind::Argument,
                    format!("An argument must be provided to the {} instruction", instr),
                    range,
                );
            }
            | Symbol::N => {
                let code = Code(std::mem::take(&mut self.buf));
                self.pending = None;
                let argument = match instr.arg_kind() {
                    | ArgKind::Number => match parse_number(code.plain()) {
                        | Some(n) => Argument::Number(n),
                        | None => {
                            self.error(
                                ParseErrorKind::Argument,
                                format!("The argument of the {} instruction is out of range", instr),
                                range,
                            );
                            return;
                        }
                    },
                    | ArgKind::Label => Argument::Label(self.ir.tokens.label_for_code(code)),
                    | ArgKind::Type => Argument::Type(self.ir.tokens.type_for_code(code)),
                    | ArgKind::None => return,
                };
                self.ir.operations.push(Operation::new(instr, Some(argument), range));
            }
            | Symbol::S | Symbol::T => {}
        }
    }

    fn reset(&mut self) {
        self.buf.clear();
        self.pending = None;
    }

    fn error(&mut self, kind: ParseErrorKind, message: String, range: SourceRange) {
        log::debug!("{} at {}: {}", kind, range.start, message);
        self.ir.parse_errors.push(ParseError::new(kind, message, range));
    }
}
