use std::ops::{Index, IndexMut};

/* ---------------------------------- Index --------------------------------- */

pub use crate::new_key_type;

/// A typed handle into an arena; a thin wrapper around a position.
pub trait IndexLike: Clone + Copy + Eq + std::hash::Hash {
    fn new(idx: usize) -> Self;
    fn index(&self) -> usize;
}

/* -------------------------------- Allocator ------------------------------- */

#[derive(Debug, Clone, Default)]
pub struct IndexAlloc(usize);
impl IndexAlloc {
    pub fn new() -> Self {
        IndexAlloc(0)
    }
    /// Number of indices handed out so far.
    pub fn issued(&self) -> usize {
        self.0
    }
}
impl Iterator for IndexAlloc {
    type Item = usize;
    fn next(&mut self) -> Option<Self::Item> {
        let old = self.0;
        self.0 += 1;
        Some(old)
    }
}

/* ---------------------------------- Arena --------------------------------- */

pub trait ArenaAccess<Id, T>: Index<Id, Output = T> + IndexMut<Id, Output = T> {
    fn get(&self, id: Id) -> Option<&T>;
    fn get_mut(&mut self, id: Id) -> Option<&mut T>;
}

/// Append-only storage; every allocated id stays valid for the arena's lifetime.
#[derive(Debug, Clone)]
pub struct ArenaDense<Id, T> {
    allocator: IndexAlloc,
    vec: Vec<T>,
    _marker: std::marker::PhantomData<Id>,
}

mod impls {
    use super::*;

    impl<Id, T> Default for ArenaDense<Id, T> {
        fn default() -> Self {
            Self { allocator: IndexAlloc::new(), vec: Vec::new(), _marker: Default::default() }
        }
    }

    impl<Id, T> Index<&Id> for ArenaDense<Id, T>
    where
        Id: IndexLike,
    {
        type Output = T;
        fn index(&self, id: &Id) -> &Self::Output {
            match self.get(id) {
                | Some(val) => val,
                | None => panic!("id {} out of arena bounds ({})", id.index(), self.vec.len()),
            }
        }
    }
    impl<Id, T> IndexMut<&Id> for ArenaDense<Id, T>
    where
        Id: IndexLike,
    {
        fn index_mut(&mut self, id: &Id) -> &mut Self::Output {
            let len = self.vec.len();
            match self.get_mut(id) {
                | Some(val) => val,
                | None => panic!("id {} out of arena bounds ({})", id.index(), len),
            }
        }
    }

    impl<Id, T> ArenaAccess<&Id, T> for ArenaDense<Id, T>
    where
        Id: IndexLike,
    {
        fn get(&self, id: &Id) -> Option<&T> {
            self.vec.get(id.index())
        }
        fn get_mut(&mut self, id: &Id) -> Option<&mut T> {
            self.vec.get_mut(id.index())
        }
    }

    impl<Id, T> ArenaDense<Id, T>
    where
        Id: IndexLike,
    {
        pub fn new() -> Self {
            Self::default()
        }
        pub fn alloc(&mut self, val: T) -> Id {
            let idx = self.allocator.next().unwrap_or(self.vec.len());
            self.vec.push(val);
            Id::new(idx)
        }
        pub fn len(&self) -> usize {
            self.vec.len()
        }
        pub fn is_empty(&self) -> bool {
            self.vec.is_empty()
        }
        /// Ids in allocation order.
        pub fn ids(&self) -> impl Iterator<Item = Id> {
            (0..self.allocator.issued()).map(Id::new)
        }
        pub fn iter(&self) -> impl Iterator<Item = (Id, &T)> {
            self.vec.iter().enumerate().map(|(idx, val)| (Id::new(idx), val))
        }
        pub fn values(&self) -> std::slice::Iter<'_, T> {
            self.vec.iter()
        }
    }

    impl<Id, T> FromIterator<T> for ArenaDense<Id, T>
    where
        Id: IndexLike,
    {
        fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
            let mut arena = Self::new();
            for val in iter {
                arena.alloc(val);
            }
            arena
        }
    }

    impl<'a, Id, T> IntoIterator for &'a ArenaDense<Id, T>
    where
        Id: IndexLike,
    {
        type Item = (Id, &'a T);
        type IntoIter = std::iter::Map<
            std::iter::Enumerate<std::slice::Iter<'a, T>>,
            fn((usize, &'a T)) -> (Id, &'a T),
        >;
        fn into_iter(self) -> Self::IntoIter {
            let pair: fn((usize, &'a T)) -> (Id, &'a T) = |(idx, val)| (Id::new(idx), val);
            self.vec.iter().enumerate().map(pair)
        }
    }
}

#[macro_export]
macro_rules! new_key_type {
    ( $(#[$outer:meta])* $vis:vis struct $name:ident ; $($rest:tt)* ) => {
        $(#[$outer])*
        #[derive(Copy, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
        $vis struct $name(usize);

        impl $crate::arena::IndexLike for $name {
            fn new(idx: usize) -> Self {
                Self(idx)
            }
            fn index(&self) -> usize {
                self.0
            }
        }

        impl std::fmt::Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl $name {
            pub fn concise(&self) -> String {
                format!("#{}", self.0)
            }
        }

        $crate::new_key_type!($($rest)*);
    };

    () => {}
}
