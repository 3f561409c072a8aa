use crate::{branch::*, diag::*, err::*, graph::*, resolve::*, types::*};
use nospace_syntax::NospaceIR;

/// Checks one program. Every check owns its branches, graph and type registry.
pub struct Typechecker<'ir> {
    ir: &'ir NospaceIR,
    strict: bool,
    max_passes: usize,
}

/// Everything a check produced, for callers that want more than the report.
#[derive(Clone, Debug)]
pub struct Checked {
    pub branches: Branches,
    pub graph: EffectGraph,
    pub registry: TypeRegistry,
    pub report: TypeReport,
}

impl<'ir> Typechecker<'ir> {
    pub fn new(ir: &'ir NospaceIR) -> Self {
        Typechecker { ir, strict: ir.is_strict(), max_passes: DEFAULT_MAX_PASSES }
    }
    /// A `Strict` instruction in the program keeps strict mode on regardless.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict || self.ir.is_strict();
        self
    }
    pub fn max_passes(mut self, max_passes: usize) -> Self {
        self.max_passes = max_passes;
        self
    }
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    pub fn run(self) -> Result<TypeReport> {
        Ok(self.check()?.report)
    }

    pub fn check(self) -> Result<Checked> {
        let Typechecker { ir, strict, max_passes } = self;
        log::debug!("checking {} operations (strict: {})", ir.operations.len(), strict);
        let branches = Branches::extract(&ir.operations)?;
        let mut registry = TypeRegistry::new();
        let mut graph = EffectGraph::build(&branches, &mut registry, strict)?;
        let errors =
            Resolver { graph: &mut graph, registry: &registry, strict, max_passes }.run()?;
        let warnings = warnings(&graph, &branches, &errors);
        log::debug!("{} errors, {} warnings", errors.len(), warnings.len());
        let report = TypeReport { errors, warnings };
        Ok(Checked { branches, graph, registry, report })
    }
}

pub fn typecheck(ir: &NospaceIR, strict: bool) -> Result<TypeReport> {
    Typechecker::new(ir).strict(strict).run()
}
