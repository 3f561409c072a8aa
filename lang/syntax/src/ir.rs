use crate::*;
use derive_more::From;
use nospace_utils::{arena::ArenaBijective, span::SourceRange};

/* ---------------------------------- Names --------------------------------- */

#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct LabelName(pub String);
#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct TypeName(pub String);
/// Symbol letters of an argument, including the `n` terminator.
#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Code(pub String);

/// Built-in types and the codes they are spelled with.
pub const BUILTIN_TYPES: [(&str, &str); 5] =
    [("Never", "ttn"), ("Any", "tsn"), ("Unknown", "tssn"), ("Int", "ssn"), ("Char", "stn")];

/* -------------------------------- Operation ------------------------------- */

#[derive(From, Clone, Debug, Hash, PartialEq, Eq)]
pub enum Argument {
    Number(i64),
    Label(LabelName),
    Type(TypeName),
}

/// A single parsed instruction. Equality ignores where it came from.
#[derive(Clone, Debug)]
pub struct Operation {
    pub instruction: Instruction,
    pub argument: Option<Argument>,
    pub range: SourceRange,
}

impl PartialEq for Operation {
    fn eq(&self, other: &Self) -> bool {
        self.instruction == other.instruction && self.argument == other.argument
    }
}

impl Eq for Operation {}

impl Operation {
    pub fn new(instruction: Instruction, argument: Option<Argument>, range: SourceRange) -> Self {
        Operation { instruction, argument, range }
    }
    pub fn plain(instruction: Instruction) -> Self {
        Operation::new(instruction, None, SourceRange::dummy())
    }
    pub fn with(instruction: Instruction, argument: impl Into<Argument>) -> Self {
        Operation::new(instruction, Some(argument.into()), SourceRange::dummy())
    }
    pub fn number(&self) -> Option<i64> {
        match &self.argument {
            | Some(Argument::Number(n)) => Some(*n),
            | _ => None,
        }
    }
    pub fn label(&self) -> Option<&LabelName> {
        match &self.argument {
            | Some(Argument::Label(label)) => Some(label),
            | _ => None,
        }
    }
    pub fn type_name(&self) -> Option<&TypeName> {
        match &self.argument {
            | Some(Argument::Type(ty)) => Some(ty),
            | _ => None,
        }
    }
}

/* --------------------------------- Tokens --------------------------------- */

/// Bijections between readable names and canonical codes; the first occurrence
/// of either side fixes the pair.
#[derive(Clone, Debug, PartialEq)]
pub struct Tokens {
    pub labels: ArenaBijective<LabelName, Code>,
    pub types: ArenaBijective<TypeName, Code>,
}

impl Default for Tokens {
    fn default() -> Self {
        let mut types = ArenaBijective::new();
        for (name, code) in BUILTIN_TYPES {
            let _ = types.insert(TypeName::from(name), Code::from(code));
        }
        Tokens { labels: ArenaBijective::new(), types }
    }
}

impl Tokens {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn label_code(&self, label: &LabelName) -> Option<&Code> {
        self.labels.forth(label)
    }
    pub fn type_code(&self, ty: &TypeName) -> Option<&Code> {
        self.types.forth(ty)
    }
    /// Number of types beyond the built-in ones.
    pub fn custom_types(&self) -> usize {
        self.types.len().saturating_sub(BUILTIN_TYPES.len())
    }

    /// Name a label seen only by its code: `A`, `B`, ... in order of first sight.
    pub fn label_for_code(&mut self, code: Code) -> LabelName {
        if let Some(label) = self.labels.back(&code) {
            return label.clone();
        }
        let mut n = self.labels.len();
        loop {
            let label = LabelName(alpha_token(n));
            if self.labels.forth(&label).is_none() {
                let _ = self.labels.insert(label.clone(), code);
                return label;
            }
            n += 1;
        }
    }
    /// Name a type seen only by its code; built-ins keep their names.
    pub fn type_for_code(&mut self, code: Code) -> TypeName {
        if let Some(ty) = self.types.back(&code) {
            return ty.clone();
        }
        let mut n = self.custom_types();
        loop {
            let ty = TypeName(format!("Type{}", alpha_token(n)));
            if self.types.forth(&ty).is_none() {
                let _ = self.types.insert(ty.clone(), code);
                return ty;
            }
            n += 1;
        }
    }
    /// Give a named label the code of its position among distinct labels.
    pub fn code_for_label(&mut self, label: &LabelName) -> Code {
        if let Some(code) = self.labels.forth(label) {
            return code.clone();
        }
        let mut n = self.labels.len() as i64;
        loop {
            let code = Code(serialize_number(n));
            if self.labels.back(&code).is_none() {
                let _ = self.labels.insert(label.clone(), code.clone());
                return code;
            }
            n += 1;
        }
    }
    /// The symbol letters of an argument. Labels and types missing from the
    /// tables get a code on the spot.
    pub fn argument_code(&mut self, argument: &Argument) -> Code {
        match argument {
            | Argument::Number(n) => Code(serialize_number(*n)),
            | Argument::Label(label) => self.code_for_label(label),
            | Argument::Type(ty) => self.code_for_type(ty),
        }
    }
    /// Give a named custom type a fresh code, numbered from 10 past the table size.
    pub fn code_for_type(&mut self, ty: &TypeName) -> Code {
        if let Some(code) = self.types.forth(ty) {
            return code.clone();
        }
        let mut n = 10 + self.types.len() as i64;
        loop {
            let code = Code(serialize_number(n));
            if self.types.back(&code).is_none() {
                let _ = self.types.insert(ty.clone(), code.clone());
                return code;
            }
            n += 1;
        }
    }
}

/* ----------------------------------- IR ----------------------------------- */

/// What every surface parser produces: operations in source order, the token
/// tables, and whatever went wrong along the way.
#[derive(Clone, Debug, Default)]
pub struct NospaceIR {
    pub operations: Vec<Operation>,
    pub tokens: Tokens,
    pub parse_errors: Vec<ParseError>,
}

impl NospaceIR {
    pub fn new(operations: Vec<Operation>, tokens: Tokens) -> Self {
        NospaceIR { operations, tokens, parse_errors: Vec::new() }
    }
    pub fn is_ok(&self) -> bool {
        self.parse_errors.is_empty()
    }
    /// A `Strict` anywhere opts the whole program into strict checking.
    pub fn is_strict(&self) -> bool {
        self.operations.iter().any(|op| op.instruction == Instruction::Strict)
    }
}
