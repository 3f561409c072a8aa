//! Serializers from the canonical IR back to each surface syntax.

use crate::*;

impl NospaceIR {
    /// One instruction per line; every label opens an indented paragraph.
    pub fn to_nossembly(&self) -> String {
        let mut lines: Vec<String> = Vec::new();
        let mut indent = false;
        for op in &self.operations {
            let is_label = op.instruction == Instruction::Label;
            if is_label {
                indent = true;
                if !lines.is_empty() {
                    lines.push(String::new());
                }
            }
            let prefix = if indent && !is_label { " " } else { "" };
            lines.push(format!("{}{}", prefix, op));
        }
        let mut out = lines.join("\n");
        out.push('\n');
        out
    }

    /// Symbol letters of the whole program; annotations are kept only if asked.
    pub fn to_letters(&self, annotations: bool) -> String {
        let mut tokens = self.tokens.clone();
        let mut out = String::new();
        for op in &self.operations {
            if !annotations && op.instruction.is_annotation() {
                continue;
            }
            out += op.instruction.code();
            if let Some(argument) = &op.argument {
                out += &tokens.argument_code(argument).0;
            }
        }
        out
    }

    pub fn to_nospace(&self) -> String {
        letters_to_nospace(&self.to_letters(true))
    }

    /// Cast, Assert and Strict need `x` and cannot be spelled in whitespace.
    pub fn to_whitespace(&self) -> String {
        letters_to_whitespace(&self.to_letters(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> NospaceIR {
        let mut tokens = Tokens::new();
        let main = LabelName::from("main");
        tokens.code_for_label(&main);
        let ops = vec![
            Operation::with(Instruction::Push, 1i64),
            Operation::with(Instruction::Label, main.clone()),
            Operation::with(Instruction::Cast, TypeName::from("Int")),
            Operation::plain(Instruction::WriteInt),
            Operation::with(Instruction::Jump, main),
        ];
        NospaceIR::new(ops, tokens)
    }

    #[test]
    fn nossembly_layout() {
        assert_eq!(
            sample().to_nossembly(),
            "Push 1\n\nLabel main\n Cast Int\n WriteInt\n Jump main\n"
        );
    }

    #[test]
    fn letters_drop_annotations_for_whitespace() {
        let ir = sample();
        assert_eq!(ir.to_letters(true), "ssstnnssssnxsssntnstnsnssn");
        assert_eq!(ir.to_letters(false), "ssstnnssssntnstnsnssn");
        assert_eq!(ir.to_whitespace(), letters_to_whitespace("ssstnnssssntnstnsnssn"));
    }

    #[test]
    fn untabled_arguments_get_codes() {
        let a = LabelName::from("a");
        let ops = vec![
            Operation::with(Instruction::Label, a.clone()),
            Operation::with(Instruction::Jump, a),
            Operation::with(Instruction::Cast, TypeName::from("Bool")),
            Operation::with(Instruction::Assert, TypeName::from("Int")),
        ];
        let ir = NospaceIR::new(ops, Tokens::new());
        let bool_code = Code(serialize_number(10 + BUILTIN_TYPES.len() as i64));
        assert_eq!(ir.to_letters(true), format!("nssssnnsnssnxs{}xtssn", bool_code.0));
        // serializing does not touch the tables
        assert!(ir.tokens.label_code(&LabelName::from("a")).is_none());
    }
}
