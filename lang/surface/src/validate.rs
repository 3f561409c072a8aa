use indexmap::IndexSet;
use nospace_syntax::*;

/// Report labels defined twice and jumps or calls to labels never defined.
pub fn validate_labels(ir: &mut NospaceIR) {
    let mut defined = IndexSet::new();
    let mut errors = Vec::new();
    for op in &ir.operations {
        if op.instruction != Instruction::Label {
            continue;
        }
        let Some(label) = op.label() else { continue };
        if !defined.insert(label) {
            errors.push(ParseError::new(
                ParseErrorKind::DuplicatedLabel,
                format!("Label \"{}\" is defined more than once", label),
                op.range,
            ));
        }
    }
    for op in &ir.operations {
        if op.instruction == Instruction::Label {
            continue;
        }
        let Some(label) = op.label() else { continue };
        if !defined.contains(label) {
            errors.push(ParseError::new(
                ParseErrorKind::Argument,
                format!("Label \"{}\" is never defined", label),
                op.range,
            ));
        }
    }
    ir.parse_errors.extend(errors);
}
