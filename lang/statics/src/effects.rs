use crate::{err::*, types::*};
use nospace_syntax::{Instruction, Operation};
use std::fmt;

/// Largest `Copy`/`Slide` depth accepted; each level becomes graph nodes.
pub const MAX_DEPTH: i64 = u16::MAX as i64;

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum StackEffect {
    Push(Type),
    Pop(Type),
    Assert(Type),
    Copy(usize),
    Swap,
}

impl StackEffect {
    pub fn is_push(&self) -> bool {
        matches!(self, StackEffect::Push(_))
    }
    /// The type pushed, popped or asserted.
    pub fn ty(&self) -> Option<Type> {
        match self {
            | StackEffect::Push(ty) | StackEffect::Pop(ty) | StackEffect::Assert(ty) => Some(*ty),
            | StackEffect::Copy(_) | StackEffect::Swap => None,
        }
    }
}

impl fmt::Display for StackEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            | StackEffect::Push(ty) => write!(f, "push({:?})", ty),
            | StackEffect::Pop(ty) => write!(f, "pop({:?})", ty),
            | StackEffect::Assert(ty) => write!(f, "assert({:?})", ty),
            | StackEffect::Copy(i) => write!(f, "copy({})", i),
            | StackEffect::Swap => write!(f, "swap"),
        }
    }
}

fn depth(op: &Operation) -> Result<usize> {
    let n = op.number().unwrap_or(0);
    if !(0..=MAX_DEPTH).contains(&n) {
        return Err(CheckError::DepthOutOfRange { depth: n, range: op.range });
    }
    Ok(n as usize)
}

/// The effects of one operation, in the order they hit the stack.
pub fn produce(op: &Operation, registry: &mut TypeRegistry, strict: bool) -> Result<Vec<StackEffect>> {
    use StackEffect::*;
    let fresh = Type::fresh(strict);
    let annotated = |registry: &mut TypeRegistry| match op.type_name() {
        | Some(name) => registry.intern(name),
        | None => Type::Any,
    };
    let effects = match op.instruction {
        | Instruction::ReadChar | Instruction::ReadInt => vec![Pop(Type::Int)],
        | Instruction::WriteChar => vec![Pop(Type::Char)],
        | Instruction::WriteInt => vec![Pop(Type::Int)],
        | Instruction::Push => vec![Push(fresh)],
        | Instruction::Duplicate => vec![Copy(0)],
        | Instruction::Copy => vec![Copy(depth(op)?)],
        | Instruction::Swap => vec![Swap],
        | Instruction::Pop => vec![Pop(Type::Any)],
        | Instruction::Slide => {
            let mut effects = vec![Pop(Type::Any); depth(op)? + 1];
            effects.push(Push(Type::Any));
            effects
        }
        | Instruction::Add
        | Instruction::Subtract
        | Instruction::Multiply
        | Instruction::Divide
        | Instruction::Mod => vec![Pop(Type::Int), Pop(Type::Int), Push(Type::Int)],
        | Instruction::JumpZero | Instruction::JumpNegative => vec![Pop(Type::Int)],
        | Instruction::Store => vec![Pop(Type::Any), Pop(Type::Int)],
        | Instruction::Retrieve => vec![Pop(Type::Int), Push(fresh)],
        | Instruction::Cast => vec![Pop(fresh), Push(annotated(registry))],
        | Instruction::Assert => vec![Assert(annotated(registry))],
        | Instruction::Label
        | Instruction::Call
        | Instruction::Jump
        | Instruction::Return
        | Instruction::End
        | Instruction::Strict => vec![],
    };
    Ok(effects)
}

/// Rewrite `copy` and `swap` into pops and pushes. The depth they need is
/// checked exactly; the values they move come back as `Any`.
pub fn lower(effect: StackEffect) -> Vec<StackEffect> {
    match effect {
        | StackEffect::Copy(i) => {
            let mut effects = vec![StackEffect::Pop(Type::Any); i + 1];
            effects.extend(vec![StackEffect::Push(Type::Any); i + 2]);
            effects
        }
        | StackEffect::Swap => vec![
            StackEffect::Pop(Type::Any),
            StackEffect::Pop(Type::Any),
            StackEffect::Push(Type::Any),
            StackEffect::Push(Type::Any),
        ],
        | effect => vec![effect],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nospace_syntax::TypeName;
    use pretty_assertions::assert_eq;

    fn effects(op: Operation, strict: bool) -> Vec<StackEffect> {
        produce(&op, &mut TypeRegistry::new(), strict).unwrap()
    }

    #[test]
    fn fresh_values_depend_on_strictness() {
        let push = || Operation::with(Instruction::Push, 3i64);
        assert_eq!(effects(push(), false), vec![StackEffect::Push(Type::Any)]);
        assert_eq!(effects(push(), true), vec![StackEffect::Push(Type::Unknown)]);
        let cast = Operation::with(Instruction::Cast, TypeName::from("Char"));
        assert_eq!(
            effects(cast, true),
            vec![StackEffect::Pop(Type::Unknown), StackEffect::Push(Type::Char)]
        );
    }

    #[test]
    fn slide_pops_past_the_top() {
        let slide = Operation::with(Instruction::Slide, 2i64);
        let effects = effects(slide, false);
        assert_eq!(effects.len(), 4);
        assert_eq!(effects[3], StackEffect::Push(Type::Any));
    }

    #[test]
    fn depth_is_bounded() {
        let copy = Operation::with(Instruction::Copy, -1i64);
        assert!(matches!(
            produce(&copy, &mut TypeRegistry::new(), false),
            Err(CheckError::DepthOutOfRange { depth: -1, .. })
        ));
    }

    #[test]
    fn lowering() {
        assert_eq!(lower(StackEffect::Copy(1)).len(), 5);
        assert_eq!(lower(StackEffect::Swap).len(), 4);
        assert_eq!(lower(StackEffect::Pop(Type::Int)), vec![StackEffect::Pop(Type::Int)]);
    }
}
