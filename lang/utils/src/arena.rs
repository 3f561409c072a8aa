use indexmap::IndexMap;
use std::{
    hash::Hash,
    ops::{Index, IndexMut},
};

/* ---------------------------------- Index --------------------------------- */

pub use crate::new_key_type;

/// A typed index into an arena.
///
/// # Safety
///
/// `index` must return the value `new` was built with; arenas use it to address
/// their backing storage.
pub unsafe trait IndexLike: Clone + Copy + Eq + Hash {
    type Meta;
    fn new(meta: Self::Meta, idx: usize) -> Self;
    fn index(&self) -> usize;
}

/* -------------------------------- Allocator ------------------------------- */

#[derive(Debug, Clone)]
pub struct IndexAlloc<Meta>(Meta, usize);

impl IndexAlloc<()> {
    pub fn new() -> Self {
        IndexAlloc((), 0)
    }
}

impl Default for IndexAlloc<()> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Meta: Copy> IndexAlloc<Meta> {
    pub fn fresh(&mut self) -> (Meta, usize) {
        let IndexAlloc(meta, idx) = self;
        let old = *idx;
        *idx += 1;
        (*meta, old)
    }
}

/* ---------------------------------- Arena --------------------------------- */

/// An append-only arena; ids are handed out densely in allocation order.
#[derive(Debug, Clone)]
pub struct ArenaDense<Id, T, Meta = ()> {
    allocator: IndexAlloc<Meta>,
    vec: Vec<T>,
    _marker: std::marker::PhantomData<Id>,
}

/// A bidirectional bijective map that remembers insertion order.
#[derive(Debug, Clone)]
pub struct ArenaBijective<P: Hash + Eq, Q: Hash + Eq> {
    forward: IndexMap<P, Q>,
    backward: IndexMap<Q, P>,
}

mod impls {
    use super::*;

    /* ------------------------------- ArenaDense ------------------------------- */

    impl<Id, T> Default for ArenaDense<Id, T, ()>
    where
        Id: IndexLike<Meta = ()>,
    {
        fn default() -> Self {
            Self {
                allocator: IndexAlloc::new(),
                vec: Default::default(),
                _marker: Default::default(),
            }
        }
    }

    impl<Id, T, Meta> ArenaDense<Id, T, Meta>
    where
        Meta: Copy,
        Id: IndexLike<Meta = Meta>,
    {
        pub fn alloc(&mut self, val: T) -> Id {
            let (meta, idx) = self.allocator.fresh();
            self.vec.push(val);
            IndexLike::new(meta, idx)
        }
        pub fn get(&self, id: &Id) -> Option<&T> {
            self.vec.get(id.index())
        }
        pub fn len(&self) -> usize {
            self.vec.len()
        }
        pub fn is_empty(&self) -> bool {
            self.vec.is_empty()
        }
    }

    impl<Id, T> ArenaDense<Id, T, ()>
    where
        Id: IndexLike<Meta = ()>,
    {
        /// Iterate over all entries in allocation order.
        pub fn iter(&self) -> impl Iterator<Item = (Id, &T)> {
            self.vec.iter().enumerate().map(|(idx, val)| (Id::new((), idx), val))
        }
    }

    impl<Id, T, Meta> Index<&Id> for ArenaDense<Id, T, Meta>
    where
        Meta: Copy,
        Id: IndexLike<Meta = Meta>,
    {
        type Output = T;
        fn index(&self, id: &Id) -> &Self::Output {
            &self.vec[id.index()]
        }
    }

    impl<Id, T, Meta> IndexMut<&Id> for ArenaDense<Id, T, Meta>
    where
        Meta: Copy,
        Id: IndexLike<Meta = Meta>,
    {
        fn index_mut(&mut self, id: &Id) -> &mut Self::Output {
            &mut self.vec[id.index()]
        }
    }

    /* ----------------------------- ArenaBijective ----------------------------- */

    impl<P: Hash + Eq, Q: Hash + Eq> Default for ArenaBijective<P, Q> {
        fn default() -> Self {
            Self { forward: IndexMap::new(), backward: IndexMap::new() }
        }
    }

    impl<P, Q> ArenaBijective<P, Q>
    where
        P: Eq + Hash + Clone,
        Q: Eq + Hash + Clone,
    {
        pub fn new() -> Self {
            Self::default()
        }
        /// Insert a pair; refuses to break the bijection and hands the pair back.
        pub fn insert(&mut self, p: P, q: Q) -> Result<(), (P, Q)> {
            if self.forward.contains_key(&p) || self.backward.contains_key(&q) {
                return Err((p, q));
            }
            self.forward.insert(p.clone(), q.clone());
            self.backward.insert(q, p);
            Ok(())
        }
        pub fn forth(&self, p: &P) -> Option<&Q> {
            self.forward.get(p)
        }
        pub fn back(&self, q: &Q) -> Option<&P> {
            self.backward.get(q)
        }
        pub fn len(&self) -> usize {
            self.forward.len()
        }
        pub fn is_empty(&self) -> bool {
            self.forward.is_empty()
        }
        pub fn iter(&self) -> impl Iterator<Item = (&P, &Q)> {
            self.forward.iter()
        }
    }

    impl<P, Q> PartialEq for ArenaBijective<P, Q>
    where
        P: Eq + Hash,
        Q: Eq + Hash,
    {
        fn eq(&self, other: &Self) -> bool {
            self.forward.len() == other.forward.len()
                && self.forward.iter().zip(other.forward.iter()).all(|(a, b)| a == b)
        }
    }
}

#[macro_export]
macro_rules! new_key_type {
    ( $(#[$outer:meta])* $vis:vis struct $name:ident < $meta:ty > ; $($rest:tt)* ) => {
        $(#[$outer])*
        #[derive(Copy, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
        $vis struct $name($meta, usize);

        unsafe impl $crate::arena::IndexLike for $name {
            type Meta = $meta;
            fn new(meta: Self::Meta, idx: usize) -> Self {
                Self(meta, idx)
            }
            fn index(&self) -> usize {
                self.1
            }
        }

        impl std::fmt::Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}#{}", stringify!($name), self.1)
            }
        }

        $crate::new_key_type!($($rest)*);
    };

    ( $(#[$outer:meta])* $vis:vis struct $name:ident ; $($rest:tt)* ) => {
        $crate::new_key_type!( $(#[$outer])* $vis struct $name<()> ; $($rest)* );
    };

    () => {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    new_key_type! {
        struct Key;
    }

    #[test]
    fn dense_ids_follow_allocation_order() {
        let mut arena: ArenaDense<Key, &str> = ArenaDense::default();
        let a = arena.alloc("a");
        let b = arena.alloc("b");
        assert_eq!(a.index(), 0);
        assert_eq!(b.index(), 1);
        assert_eq!(arena[&b], "b");
        arena[&a] = "c";
        assert_eq!(arena.iter().map(|(_, v)| *v).collect::<Vec<_>>(), vec!["c", "b"]);
    }

    #[test]
    fn bijective_rejects_collisions() {
        let mut bij = ArenaBijective::new();
        assert!(bij.insert("A", "stn").is_ok());
        assert!(bij.insert("A", "ssn").is_err());
        assert!(bij.insert("B", "stn").is_err());
        assert!(bij.insert("B", "ssn").is_ok());
        assert_eq!(bij.forth(&"B"), Some(&"ssn"));
        assert_eq!(bij.back(&"stn"), Some(&"A"));
        assert_eq!(bij.iter().map(|(p, _)| *p).collect::<Vec<_>>(), vec!["A", "B"]);
    }
}
