#![allow(clippy::style)]

pub mod arena;

pub mod prelude {
    /// Index-keyed storage.
    pub use crate::arena::{ArenaAccess, ArenaDense, IndexLike};
    pub use crate::new_key_type;
}
