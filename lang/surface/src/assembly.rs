//! Parser for nossembly, the line-oriented assembly syntax.

use crate::{
    lexer::{Lexeme, Lexer, Tok},
    validate::validate_labels,
};
use indexmap::IndexMap;
use nospace_syntax::*;
use nospace_utils::span::SourceRange;

pub fn parse_nossembly(source: &str) -> NospaceIR {
    let mut parser = AssemblyParser::default();
    for (line_num, line) in source.split('\n').enumerate() {
        parser.line(line_num, line.trim_end_matches('\r'));
    }
    let mut ir = parser.ir;
    validate_labels(&mut ir);
    ir
}

#[derive(Default)]
struct AssemblyParser {
    ir: NospaceIR,
    /// Symbols bound by `#define`.
    defines: IndexMap<String, String>,
}

/// The line being parsed, for error ranges running to its end.
struct Line {
    num: usize,
    len: usize,
}

impl Line {
    fn range_from(&self, start: usize) -> SourceRange {
        SourceRange::line(self.num, start, self.len)
    }
}

impl AssemblyParser {
    fn line(&mut self, num: usize, text: &str) {
        let line = Line { num, len: text.chars().count() };
        let mut lexemes = Vec::new();
        for lexeme in Lexer::new(text) {
            match lexeme {
                | Ok(lexeme) => lexemes.push(lexeme),
                | Err(column) => {
                    self.error(
                        ParseErrorKind::UnknownInstruction,
                        format!("Unrecognized input"),
                        line.range_from(column),
                    );
                    return;
                }
            }
        }
        let Some(head) = lexemes.first() else { return };
        match &head.tok {
            | Tok::Pragma(pragma) => self.pragma(&line, pragma, &lexemes),
            | Tok::Word(_) => self.instruction(&line, &lexemes),
        }
    }

    fn pragma(&mut self, line: &Line, pragma: &str, lexemes: &[Lexeme<'_>]) {
        let range = line.range_from(lexemes[0].start);
        if pragma != "#define" && pragma != "#if" {
            let message = format!("Unknown pragma \"{}\"", pragma);
            self.error(ParseErrorKind::Pragma, message, range);
            return;
        }
        let (key, value) = match (lexemes.get(1), lexemes.get(2)) {
            | (Some(key), Some(value)) => (key.tok.text(), value.tok.text()),
            | _ => {
                let message = "Pragmas must specify both a key and value";
                self.error(ParseErrorKind::Pragma, message, range);
                return;
            }
        };
        let rest = &lexemes[3..];
        if pragma == "#define" {
            if !rest.is_empty() {
                let message = "Incorrect number of arguments for #define pragma";
                self.error(ParseErrorKind::Pragma, message, range);
                return;
            }
            log::trace!("#define {} {}", key, value);
            self.defines.insert(key.to_string(), value.to_string());
            return;
        }
        if rest.is_empty() {
            let message = "An #if pragma must be followed by an instruction";
            self.error(ParseErrorKind::Pragma, message, range);
            return;
        }
        if self.defines.get(key).map(String::as_str) == Some(value) {
            self.instruction(line, rest);
        } else {
            log::trace!("#if {} {} skips line {}", key, value, line.num + 1);
        }
    }

    fn instruction(&mut self, line: &Line, lexemes: &[Lexeme<'_>]) {
        let Some((head, args)) = lexemes.split_first() else { return };
        let name = head.tok.text();
        let range = line.range_from(head.start);
        let Some(instr) = (match head.tok {
            | Tok::Word(_) => Instruction::from_name(name),
            | Tok::Pragma(_) => None,
        }) else {
            let message = format!("Unrecognized instruction \"{}\"", name);
            self.error(ParseErrorKind::UnknownInstruction, message, range);
            return;
        };
        let arg = match (instr.arg_kind(), args) {
            | (ArgKind::None, []) => {
                self.ir.operations.push(Operation::new(instr, None, range));
                return;
            }
            | (ArgKind::None, [_, ..]) => {
                let message = format!("The {} instruction does not take an argument", instr);
                self.error(ParseErrorKind::Argument, message, range);
                return;
            }
            | (ArgKind::Type, []) => {
                self.error(ParseErrorKind::Argument, "You must specify a type", range);
                return;
            }
            | (_, []) => {
                let message = format!("An argument must be provided to the {} instruction", instr);
                self.error(ParseErrorKind::Argument, message, range);
                return;
            }
            | (_, [arg]) => arg.tok.text(),
            | (_, [_, _, ..]) => {
                let message = format!("Too many arguments for the {} instruction", instr);
                self.error(ParseErrorKind::Argument, message, range);
                return;
            }
        };
        let argument = match instr.arg_kind() {
            | ArgKind::Number => match arg.parse::<i64>() {
                | Ok(n) => Argument::Number(n),
                | Err(_) => {
                    let message = format!("\"{}\" is not a valid number", arg);
                    self.error(ParseErrorKind::Argument, message, range);
                    return;
                }
            },
            | ArgKind::Label => {
                let label = LabelName::from(arg);
                self.ir.tokens.code_for_label(&label);
                Argument::Label(label)
            }
            | ArgKind::Type => {
                let ty = TypeName::from(arg);
                self.ir.tokens.code_for_type(&ty);
                Argument::Type(ty)
            }
            | ArgKind::None => return,
        };
        self.ir.operations.push(Operation::new(instr, Some(argument), range));
    }

    fn error(&mut self, kind: ParseErrorKind, message: impl Into<String>, range: SourceRange) {
        let error = ParseError::new(kind, message, range);
        log::debug!("{}", error);
        self.ir.parse_errors.push(error);
    }
}
