use crate::err::*;
use indexmap::{IndexMap, IndexSet};
use nospace_syntax::{Instruction, LabelName, Operation};
use nospace_utils::{arena::ArenaDense, new_key_type};

new_key_type! {
    pub struct BranchId;
}

/// A straight run of operations. Control instructions stay in the branch they
/// end (or, for `Label`, begin), even though they have no stack effect.
#[derive(Clone, Debug, Default)]
pub struct Branch {
    pub label: Option<LabelName>,
    pub operations: Vec<Operation>,
    /// Where a jump, conditional jump or call goes.
    pub control_flow: Option<BranchId>,
    /// Where execution falls through to, or resumes after a call.
    pub next: Option<BranchId>,
    pub calls_subroutine: bool,
    pub returns: bool,
}

#[derive(Clone, Debug)]
pub struct Branches {
    pub arena: ArenaDense<BranchId, Branch>,
    pub entry: BranchId,
    pub labels: IndexMap<LabelName, BranchId>,
}

impl Branches {
    /// Split operations into branches: the entry branch first, then one per
    /// label in order of definition, then anonymous branches as they open.
    pub fn extract(operations: &[Operation]) -> Result<Self> {
        let mut arena = ArenaDense::default();
        let entry = arena.alloc(Branch::default());
        let mut labels = IndexMap::new();
        for op in operations {
            if op.instruction != Instruction::Label {
                continue;
            }
            let Some(label) = op.label() else { continue };
            if labels.contains_key(label) {
                return Err(CheckError::DuplicatedLabel { label: label.clone(), range: op.range });
            }
            let branch = Branch { label: Some(label.clone()), ..Branch::default() };
            labels.insert(label.clone(), arena.alloc(branch));
        }
        let mut branches = Branches { arena, entry, labels };
        branches.link(operations)?;
        Ok(branches)
    }

    fn target(&self, op: &Operation) -> Result<BranchId> {
        let label = op.label().cloned().unwrap_or_else(|| LabelName::from(""));
        match self.labels.get(&label) {
            | Some(id) => Ok(*id),
            | None => Err(CheckError::UndefinedLabel { label, range: op.range }),
        }
    }

    fn fresh(&mut self) -> BranchId {
        self.arena.alloc(Branch::default())
    }

    fn link(&mut self, operations: &[Operation]) -> Result<()> {
        let mut current = self.entry;
        for op in operations {
            match op.instruction {
                | Instruction::Label => {
                    let target = self.target(op)?;
                    self.arena[&current].next = Some(target);
                    current = target;
                    self.arena[&current].operations.push(op.clone());
                }
                | Instruction::Jump => {
                    let target = self.target(op)?;
                    let branch = &mut self.arena[&current];
                    branch.operations.push(op.clone());
                    branch.control_flow = Some(target);
                    current = self.fresh();
                }
                | Instruction::JumpZero | Instruction::JumpNegative => {
                    let target = self.target(op)?;
                    let next = self.fresh();
                    let branch = &mut self.arena[&current];
                    branch.operations.push(op.clone());
                    branch.control_flow = Some(target);
                    branch.next = Some(next);
                    current = next;
                }
                | Instruction::Call => {
                    let target = self.target(op)?;
                    let next = self.fresh();
                    let branch = &mut self.arena[&current];
                    branch.operations.push(op.clone());
                    branch.control_flow = Some(target);
                    branch.next = Some(next);
                    branch.calls_subroutine = true;
                    current = next;
                }
                | Instruction::Return => {
                    let branch = &mut self.arena[&current];
                    branch.operations.push(op.clone());
                    branch.returns = true;
                    current = self.fresh();
                }
                | Instruction::End => {
                    self.arena[&current].operations.push(op.clone());
                    current = self.fresh();
                }
                | _ => self.arena[&current].operations.push(op.clone()),
            }
        }
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = (BranchId, &Branch)> {
        self.arena.iter()
    }

    /// Branches control can get to from the entry. A call reaches both its
    /// callee and the branch after it.
    pub fn reachable(&self) -> IndexSet<BranchId> {
        let mut visited = IndexSet::new();
        let mut stack = vec![self.entry];
        while let Some(id) = stack.pop() {
            if !visited.insert(id) {
                continue;
            }
            let branch = &self.arena[&id];
            stack.extend(branch.control_flow);
            stack.extend(branch.next);
        }
        visited
    }
}
