use crate::{branch::*, diag::*, effects::*, err::*, graph::*, types::*};
use indexmap::IndexSet;

/// Passes the resolver runs before giving up on convergence.
pub const DEFAULT_MAX_PASSES: usize = 10_000;

/// Settles the effect graph: every pop or assert is matched against the values
/// that may be on top of the stack, and what lies beneath those values is
/// linked through to whatever runs next.
pub struct Resolver<'a> {
    pub graph: &'a mut EffectGraph,
    pub registry: &'a TypeRegistry,
    pub strict: bool,
    pub max_passes: usize,
}

impl Resolver<'_> {
    pub fn run(&mut self) -> Result<Vec<TypeError>> {
        let mut pending: IndexSet<NodeId> = self.graph.reachable().into_iter()
            .filter(|id| !self.graph.nodes[id].effect.is_push())
            .collect();
        let mut passes = 0;
        while !pending.is_empty() {
            if passes >= self.max_passes {
                return Err(CheckError::IterationLimit(self.max_passes));
            }
            passes += 1;
            let batch = std::mem::take(&mut pending);
            let mut progressed = false;
            for node in batch {
                if self.resolves(node, &mut pending) {
                    progressed = true;
                } else {
                    pending.insert(node);
                }
            }
            log::trace!("pass {}: {} nodes pending", passes, pending.len());
            if !progressed {
                let mut stuck: Vec<_> = pending.into_iter().collect();
                stuck.sort_by_key(|id| (self.start_of(*id), *id));
                return Ok(stuck.into_iter().map(|id| self.error(id)).collect());
            }
        }
        Ok(Vec::new())
    }

    fn start_of(&self, id: NodeId) -> Option<nospace_utils::span::Cursor> {
        self.graph.nodes[&id].origin.map(|o| o.range.start)
    }

    /// Whether a parent value satisfies what the node expects.
    fn matches(&self, expected: Type, parent: NodeId) -> bool {
        let StackEffect::Push(found) = self.graph.nodes[&parent].effect else { return false };
        if found == Type::Never {
            return false;
        }
        if found == Type::Unknown && expected != Type::Unknown {
            return false;
        }
        found == Type::Any || expected == Type::Any || expected == Type::Unknown || found == expected
    }

    /// Link through every matching parent; requeue children that gain a new
    /// value parent. True if anything matched.
    fn resolves(&mut self, id: NodeId, pending: &mut IndexSet<NodeId>) -> bool {
        let node = &self.graph.nodes[&id];
        let Some(expected) = node.effect.ty() else { return false };
        let is_assert = matches!(node.effect, StackEffect::Assert(_));
        let parents: Vec<_> = node.parents.iter().copied().collect();
        let children: Vec<_> = node.children.iter().copied().collect();
        let mut resolved = false;
        for parent in parents {
            if !self.matches(expected, parent) {
                continue;
            }
            resolved = true;
            let sources: Vec<_> = if is_assert {
                vec![parent]
            } else {
                self.graph.nodes[&parent].parents.iter().copied().collect()
            };
            for source in sources {
                for child in &children {
                    let child_node = &self.graph.nodes[child];
                    if !child_node.effect.is_push()
                        && self.graph.nodes[&source].effect.is_push()
                        && !child_node.parents.contains(&source)
                    {
                        pending.insert(*child);
                    }
                    self.graph.link(source, *child);
                }
            }
        }
        resolved
    }

    fn error(&self, id: NodeId) -> TypeError {
        let node = &self.graph.nodes[&id];
        let origin = node.origin;
        let range = origin.map(|o| o.range).unwrap_or_default();
        let instr = origin.map(|o| o.instruction.name().to_lowercase()).unwrap_or_default();

        let mut typed: Vec<(Origin, Type)> = node
            .parents
            .iter()
            .filter_map(|p| {
                let parent = &self.graph.nodes[p];
                match (parent.effect, parent.origin) {
                    | (StackEffect::Push(ty), Some(origin)) => Some((origin, ty)),
                    | _ => None,
                }
            })
            .collect();
        typed.sort_by_key(|(origin, _)| origin.range.start);
        typed.dedup();

        if typed.is_empty() {
            return Diagnostic {
                kind: TypeErrorKind::Underflow,
                message: format!(
                    "Cannot perform {} as this would result in a stack underflow.",
                    instr
                ),
                range,
            };
        }

        let names: IndexSet<String> =
            typed.iter().map(|(_, ty)| self.registry.display(*ty).to_string()).collect();
        let union = names.into_iter().collect::<Vec<_>>().join(" | ");
        let origins = typed
            .iter()
            .map(|(origin, ty)| {
                format!("\"{}\" comes from L{}.", self.registry.display(*ty), origin.range.start)
            })
            .collect::<Vec<_>>()
            .join("\n");

        match node.effect {
            | StackEffect::Assert(expected) => {
                let expected = self.registry.display(expected);
                if typed.iter().all(|(_, ty)| *ty == Type::Unknown) {
                    Diagnostic {
                        kind: TypeErrorKind::Assertion,
                        message: format!(
                            "Cannot assert type {} on a value that was never cast.",
                            expected
                        ),
                        range,
                    }
                } else {
                    Diagnostic {
                        kind: TypeErrorKind::Mismatch,
                        message: format!(
                            "Attempted to assert type \"{}\", but the top item of the stack is of type \"{}\".\n\n{}",
                            expected, union, origins
                        ),
                        range,
                    }
                }
            }
            | StackEffect::Pop(_)
                if self.strict && typed.iter().any(|(_, ty)| *ty == Type::Unknown) =>
            {
                Diagnostic {
                    kind: TypeErrorKind::StrictModeViolation,
                    message: format!(
                        "When using strict mode, all types pushed to the stack must be cast prior to use"
                    ),
                    range,
                }
            }
            | _ => Diagnostic {
                kind: TypeErrorKind::Mismatch,
                message: format!(
                    "Cannot perform {} as the top item on the stack is of type \"{}\".\n\n{}",
                    instr, union, origins
                ),
                range,
            },
        }
    }
}

/// Pops that may run on an empty stack, and code no path from the entry reaches.
pub fn warnings(
    graph: &EffectGraph, branches: &Branches, errors: &[TypeError],
) -> Vec<TypeWarning> {
    let mut warnings = Vec::new();
    let errored: IndexSet<_> = errors.iter().map(|e| e.range).collect();
    for id in graph.reachable() {
        let node = &graph.nodes[&id];
        let StackEffect::Pop(_) = node.effect else { continue };
        let Some(origin) = node.origin else { continue };
        if errored.contains(&origin.range) {
            continue;
        }
        let may_underflow = node
            .parents
            .iter()
            .any(|p| graph.nodes[p].effect == StackEffect::Push(Type::Never));
        if may_underflow {
            warnings.push(Diagnostic {
                kind: TypeWarningKind::UnderflowWarn,
                message: format!(
                    "Performing {} may result in a stack underflow.",
                    origin.instruction.name().to_lowercase()
                ),
                range: origin.range,
            });
        }
    }

    let reached = branches.reachable();
    for (id, branch) in branches.iter() {
        if reached.contains(&id) || !graph.fragments.contains_key(&id) {
            continue;
        }
        let Some(first) = branch.operations.first() else { continue };
        warnings.push(Diagnostic {
            kind: TypeWarningKind::Unreachable,
            message: format!("This code is unreachable."),
            range: first.range,
        });
    }
    warnings
}
