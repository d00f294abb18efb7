//! Stage chain representation
//!
//! A chain is a set of processing stages where each stage has at most one
//! successor (a functional graph with out-degree ≤ 1). Stages live in an
//! index-based arena and successor links are plain indices, never owning
//! references, so cyclic chains can be represented and dropped without
//! leaking.

mod arena;

pub use arena::{Stage, StageArena, StageId};

/// Minimal observation interface over a chain of stages.
///
/// This is everything the feedback detector is allowed to see: given a node
/// identity, the identity of its successor (or none), plus identity
/// comparison. Identity means reference/index equality, never value equality;
/// implementors over reference-counted nodes should compare with
/// [`std::rc::Rc::ptr_eq`] or the pointer address, not `PartialEq`.
///
/// The detector never mutates, retains, or frees anything reachable through
/// this trait.
pub trait SuccessorChain {
    /// Node identity. Cheap to clone (an index, a pointer, an `Rc` handle).
    type Id: Clone;

    /// The successor of `id`, or `None` at the end of the chain.
    fn successor(&self, id: &Self::Id) -> Option<Self::Id>;

    /// Whether `a` and `b` identify the same node.
    fn same_stage(&self, a: &Self::Id, b: &Self::Id) -> bool;
}
