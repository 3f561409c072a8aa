use indexmap::IndexMap;
use nospace_syntax::TypeName;
use nospace_utils::{arena::ArenaDense, new_key_type};
use std::fmt;

new_key_type! {
    /// An interned custom type, local to one check.
    pub struct TypeSym;
}

/// The type lattice: `Never` at the bottom, `Any` on top, everything else in
/// between and incomparable. `Unknown` marks uncast values in strict mode.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Type {
    Never,
    Any,
    Unknown,
    Int,
    Char,
    Custom(TypeSym),
}

impl Type {
    /// Built-in types a program may name. `Unknown` is left to the checker, so
    /// a program that writes it gets a custom type of that name.
    pub fn builtin(name: &str) -> Option<Self> {
        match name {
            | "Never" => Some(Type::Never),
            | "Any" => Some(Type::Any),
            | "Int" => Some(Type::Int),
            | "Char" => Some(Type::Char),
            | _ => None,
        }
    }
    /// What a fresh value is typed as: `Unknown` in strict mode, `Any` otherwise.
    pub fn fresh(strict: bool) -> Self {
        if strict { Type::Unknown } else { Type::Any }
    }
}

/// Custom type names seen by one check, interned in order of appearance.
#[derive(Clone, Debug, Default)]
pub struct TypeRegistry {
    names: ArenaDense<TypeSym, TypeName>,
    lookup: IndexMap<TypeName, TypeSym>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn intern(&mut self, name: &TypeName) -> Type {
        if let Some(ty) = Type::builtin(name.plain()) {
            return ty;
        }
        if let Some(sym) = self.lookup.get(name) {
            return Type::Custom(*sym);
        }
        let sym = self.names.alloc(name.clone());
        self.lookup.insert(name.clone(), sym);
        Type::Custom(sym)
    }
    pub fn display(&self, ty: Type) -> TypeDisplay<'_> {
        TypeDisplay { registry: self, ty }
    }
}

pub struct TypeDisplay<'a> {
    registry: &'a TypeRegistry,
    ty: Type,
}

impl fmt::Display for TypeDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.ty {
            | Type::Never => write!(f, "Never"),
            | Type::Any => write!(f, "Any"),
            | Type::Unknown => write!(f, "Unknown"),
            | Type::Int => write!(f, "Int"),
            | Type::Char => write!(f, "Char"),
            | Type::Custom(sym) => match self.registry.names.get(&sym) {
                | Some(name) => write!(f, "{}", name),
                | None => write!(f, "{:?}", sym),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn interning() {
        let mut registry = TypeRegistry::new();
        assert_eq!(registry.intern(&"Int".into()), Type::Int);
        let bool_ty = registry.intern(&"Bool".into());
        assert_eq!(registry.intern(&"Bool".into()), bool_ty);
        assert!(registry.intern(&"Str".into()) != bool_ty);
        assert_eq!(format!("{}", registry.display(bool_ty)), "Bool");
    }

    #[test]
    fn unknown_is_not_nameable() {
        let mut registry = TypeRegistry::new();
        let named = registry.intern(&"Unknown".into());
        assert!(matches!(named, Type::Custom(_)));
        assert_eq!(format!("{}", registry.display(named)), "Unknown");
        assert_eq!(format!("{}", registry.display(Type::fresh(true))), "Unknown");
    }
}
