use crate::{branch::*, effects::*, err::*, types::*};
use indexmap::{IndexMap, IndexSet};
use nospace_syntax::Instruction;
use nospace_utils::{arena::ArenaDense, new_key_type, span::SourceRange};

new_key_type! {
    pub struct NodeId;
}

/// The operation a node was produced by.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Origin {
    pub instruction: Instruction,
    pub range: SourceRange,
}

#[derive(Clone, Debug)]
pub struct Node {
    pub effect: StackEffect,
    pub parents: IndexSet<NodeId>,
    pub children: IndexSet<NodeId>,
    /// `None` only for the synthetic root.
    pub origin: Option<Origin>,
}

impl Node {
    fn new(effect: StackEffect, origin: Option<Origin>) -> Self {
        Node { effect, parents: IndexSet::new(), children: IndexSet::new(), origin }
    }
}

/// Stack effects as a graph: a node's parents are the nodes that may have run
/// just before it. The root pushes `Never`, the bottom of the stack.
#[derive(Clone, Debug)]
pub struct EffectGraph {
    pub nodes: ArenaDense<NodeId, Node>,
    pub root: NodeId,
    /// First and last node of every branch that produced any.
    pub fragments: IndexMap<BranchId, (NodeId, NodeId)>,
}

impl EffectGraph {
    pub fn build(branches: &Branches, registry: &mut TypeRegistry, strict: bool) -> Result<Self> {
        let mut nodes = ArenaDense::default();
        let root = nodes.alloc(Node::new(StackEffect::Push(Type::Never), None));
        let mut graph = EffectGraph { nodes, root, fragments: IndexMap::new() };

        for (id, branch) in branches.iter() {
            let mut head = None;
            let mut tail: Option<NodeId> = None;
            for op in &branch.operations {
                let origin = Origin { instruction: op.instruction, range: op.range };
                for effect in produce(op, registry, strict)?.into_iter().flat_map(lower) {
                    let node = graph.nodes.alloc(Node::new(effect, Some(origin)));
                    match tail {
                        | Some(prev) => graph.link(prev, node),
                        | None => head = Some(node),
                    }
                    tail = Some(node);
                }
            }
            if let (Some(head), Some(tail)) = (head, tail) {
                graph.fragments.insert(id, (head, tail));
            }
        }

        // dead code must not feed its stack into live joins
        let reached = branches.reachable();
        let successors = successors(branches, &reached);
        for (id, (_, tail)) in graph.fragments.clone() {
            if !reached.contains(&id) {
                continue;
            }
            for succ in &successors[&id] {
                for head in graph.heads(*succ, &successors) {
                    graph.link(tail, head);
                }
            }
        }
        for head in graph.heads(branches.entry, &successors) {
            graph.link(root, head);
        }
        log::trace!("effect graph: {} nodes over {} branches", graph.nodes.len(), branches.arena.len());
        Ok(graph)
    }

    pub fn link(&mut self, parent: NodeId, child: NodeId) {
        self.nodes[&parent].children.insert(child);
        self.nodes[&child].parents.insert(parent);
    }

    /// The first nodes control reaches on entering a branch; empty branches
    /// are looked through to whatever follows them.
    fn heads(&self, branch: BranchId, successors: &Successors) -> IndexSet<NodeId> {
        let mut heads = IndexSet::new();
        let mut visited = IndexSet::new();
        let mut stack = vec![branch];
        while let Some(branch) = stack.pop() {
            if !visited.insert(branch) {
                continue;
            }
            match self.fragments.get(&branch) {
                | Some((head, _)) => {
                    heads.insert(*head);
                }
                | None => stack.extend(successors[&branch].iter().rev()),
            }
        }
        heads
    }

    /// Nodes reachable from the root, breadth first.
    pub fn reachable(&self) -> IndexSet<NodeId> {
        let mut visited = IndexSet::new();
        let mut queue = std::collections::VecDeque::from([self.root]);
        while let Some(node) = queue.pop_front() {
            if !visited.insert(node) {
                continue;
            }
            queue.extend(self.nodes[&node].children.iter().filter(|n| !visited.contains(*n)));
        }
        visited
    }
}

type Successors = IndexMap<BranchId, IndexSet<BranchId>>;

/// Where control goes after each branch. A call enters its callee only; the
/// callee's returns resume at the branch after each reached call.
pub fn successors(branches: &Branches, reached: &IndexSet<BranchId>) -> Successors {
    let mut successors: Successors = IndexMap::new();
    for (id, branch) in branches.iter() {
        let succ = if branch.calls_subroutine {
            branch.control_flow.into_iter().collect()
        } else if branch.returns {
            IndexSet::new()
        } else {
            branch.control_flow.into_iter().chain(branch.next).collect()
        };
        successors.insert(id, succ);
    }
    for (id, branch) in branches.iter() {
        if !branch.calls_subroutine || !reached.contains(&id) {
            continue;
        }
        let (Some(callee), Some(after)) = (branch.control_flow, branch.next) else { continue };
        for ret in find_returns(branches, callee) {
            if let Some(succ) = successors.get_mut(&ret) {
                succ.insert(after);
            }
        }
    }
    successors
}

/// Returning branches reachable from a subroutine entry, stepping over nested
/// calls by their after-call branch.
pub fn find_returns(branches: &Branches, entry: BranchId) -> IndexSet<BranchId> {
    let mut returns = IndexSet::new();
    let mut visited = IndexSet::new();
    let mut stack = vec![entry];
    while let Some(id) = stack.pop() {
        if !visited.insert(id) {
            continue;
        }
        let branch = &branches.arena[&id];
        if branch.returns {
            returns.insert(id);
            continue;
        }
        stack.extend(branch.next);
        if !branch.calls_subroutine {
            stack.extend(branch.control_flow);
        }
    }
    returns
}

#[cfg(test)]
mod tests {
    use super::*;
    use nospace_surface::parse_nossembly;
    use nospace_syntax::LabelName;
    use pretty_assertions::assert_eq;
    use unindent::unindent;

    fn build(source: &str) -> (Branches, EffectGraph) {
        let ir = parse_nossembly(&unindent(source));
        let branches = Branches::extract(&ir.operations).unwrap();
        let graph = EffectGraph::build(&branches, &mut TypeRegistry::new(), false).unwrap();
        (branches, graph)
    }

    fn effects(graph: &EffectGraph, ids: &IndexSet<NodeId>) -> Vec<StackEffect> {
        ids.iter().map(|id| graph.nodes[id].effect).collect()
    }

    #[test]
    fn straight_line_chain() {
        let (_, graph) = build(
            "
            Push 1
            Pop
            ",
        );
        assert_eq!(graph.nodes.len(), 3);
        let root = &graph.nodes[&graph.root];
        assert_eq!(effects(&graph, &root.children), vec![StackEffect::Push(Type::Any)]);
    }

    #[test]
    fn empty_branches_are_looked_through() {
        let (_, graph) = build(
            "
            Label a
            Label b
            Jump c
            Label c
             Pop
            ",
        );
        let root = &graph.nodes[&graph.root];
        assert_eq!(effects(&graph, &root.children), vec![StackEffect::Pop(Type::Any)]);
    }

    #[test]
    fn empty_cycles_terminate() {
        let (_, graph) = build(
            "
            Label a
            Jump a
            ",
        );
        assert!(graph.nodes[&graph.root].children.is_empty());
    }

    #[test]
    fn returns_resume_after_every_call_site() {
        let (branches, graph) = build(
            "
            Call f
            WriteInt
            Call f
            WriteChar
            End
            Label f
             Push 1
             Return
            ",
        );
        let f = branches.labels[&LabelName::from("f")];
        let (_, tail) = graph.fragments[&f];
        assert_eq!(
            effects(&graph, &graph.nodes[&tail].children),
            vec![StackEffect::Pop(Type::Int), StackEffect::Pop(Type::Char)]
        );
    }

    #[test]
    fn dead_fragments_are_not_stitched() {
        let (branches, graph) = build(
            "
            Jump a
            Push 1
            Label a
             Pop
            Call f
            End
            Label f
             Return
            Call f
            Push 2
            ",
        );
        let dead = branches.iter().find(|(id, _)| !branches.reachable().contains(id));
        let (dead, _) = dead.unwrap();
        let (_, tail) = graph.fragments[&dead];
        assert!(graph.nodes[&tail].children.is_empty());
        let f = branches.labels[&LabelName::from("f")];
        assert!(!graph.fragments.contains_key(&f));
        // only the live call site resumes after `f`, at `End`
        let live = graph.reachable();
        assert_eq!(effects(&graph, &live), vec![StackEffect::Push(Type::Never), StackEffect::Pop(Type::Any)]);
    }

    #[test]
    fn nested_calls_are_stepped_over() {
        let (branches, _) = build(
            "
            Call f
            End
            Label f
             Call g
             Return
            Label g
             Return
            ",
        );
        let f = branches.labels[&LabelName::from("f")];
        let g = branches.labels[&LabelName::from("g")];
        let from_f = find_returns(&branches, f);
        assert_eq!(from_f.len(), 1);
        assert!(!from_f.contains(&g));
        assert_eq!(find_returns(&branches, g).into_iter().collect::<Vec<_>>(), vec![g]);
    }
}
