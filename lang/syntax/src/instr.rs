use std::fmt;

/// What follows an instruction's code, if anything.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum ArgKind {
    None,
    Number,
    Label,
    Type,
}

/// Longest instruction code; a longer unmatched buffer can never match.
pub const MAX_CODE_LEN: usize = 4;

macro_rules! instructions {
    ( $( $name:ident => $code:literal, $arg:ident; )* ) => {
        #[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
        pub enum Instruction {
            $( $name, )*
        }

        impl Instruction {
            pub const ALL: &'static [Instruction] = &[ $( Instruction::$name, )* ];

            /// The symbol letters encoding this instruction.
            pub fn code(self) -> &'static str {
                match self {
                    $( | Instruction::$name => $code, )*
                }
            }
            /// The mnemonic used by the assembly syntax.
            pub fn name(self) -> &'static str {
                match self {
                    $( | Instruction::$name => stringify!($name), )*
                }
            }
            pub fn arg_kind(self) -> ArgKind {
                match self {
                    $( | Instruction::$name => ArgKind::$arg, )*
                }
            }
            pub fn from_code(code: &str) -> Option<Self> {
                match code {
                    $( | $code => Some(Instruction::$name), )*
                    | _ => None,
                }
            }
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $( | stringify!($name) => Some(Instruction::$name), )*
                    | _ => None,
                }
            }
        }
    };
}

instructions! {
    ReadChar => "tnts", None;
    ReadInt => "tntt", None;
    WriteChar => "tnss", None;
    WriteInt => "tnst", None;
    Push => "ss", Number;
    Duplicate => "sns", None;
    Swap => "snt", None;
    Pop => "snn", None;
    Copy => "sts", Number;
    Slide => "stn", Number;
    Add => "tsss", None;
    Subtract => "tsst", None;
    Multiply => "tssn", None;
    Divide => "tsts", None;
    Mod => "tstt", None;
    Label => "nss", Label;
    Call => "nst", Label;
    Jump => "nsn", Label;
    JumpZero => "nts", Label;
    JumpNegative => "ntt", Label;
    Return => "ntn", None;
    End => "nnn", None;
    Store => "tts", None;
    Retrieve => "ttt", None;
    Cast => "xs", Type;
    Assert => "xt", Type;
    Strict => "xxx", None;
}

impl Instruction {
    pub fn takes_argument(self) -> bool {
        self.arg_kind() != ArgKind::None
    }
    /// Cast, Assert and Strict only exist for the checker and need the `x` symbol.
    pub fn is_annotation(self) -> bool {
        matches!(self, Instruction::Cast | Instruction::Assert | Instruction::Strict)
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn codes_are_prefix_free() {
        for a in Instruction::ALL {
            for b in Instruction::ALL {
                if a != b {
                    assert!(!b.code().starts_with(a.code()), "{} prefixes {}", a, b);
                }
            }
            assert!(a.code().len() <= MAX_CODE_LEN);
        }
    }

    #[test]
    fn lookup_by_code_and_name() {
        for instr in Instruction::ALL {
            assert_eq!(Instruction::from_code(instr.code()), Some(*instr));
            assert_eq!(Instruction::from_name(instr.name()), Some(*instr));
        }
        assert_eq!(Instruction::from_name("push"), None);
        assert_eq!(Instruction::ALL.len(), 27);
    }
}
