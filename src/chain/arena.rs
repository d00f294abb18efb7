//! Index-based arena storage for stages

use super::SuccessorChain;

/// Identifies a stage within a [`StageArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StageId(usize);

impl StageId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A single processing stage: a name and an optional successor.
///
/// Any actual signal-processing capability a stage might have is an
/// orthogonal concern; the detector only ever looks at `next`.
#[derive(Debug, Clone)]
pub struct Stage {
    name: String,
    next: Option<StageId>,
}

impl Stage {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn next(&self) -> Option<StageId> {
        self.next
    }
}

/// Arena owning all stages of a chain.
///
/// The arena owns the nodes; successor links are indices into the arena.
/// Because links are non-owning, a cyclic chain is just data — dropping the
/// arena frees every stage regardless of how the links fold back. (An
/// `Rc`-linked rendition of the same structure would leak on a cycle; see the
/// detector tests.)
#[derive(Debug, Clone, Default)]
pub struct StageArena {
    stages: Vec<Stage>,
}

impl StageArena {
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Add a stage with no successor, returning its id.
    pub fn add_stage(&mut self, name: &str) -> StageId {
        let id = StageId(self.stages.len());
        self.stages.push(Stage {
            name: name.to_string(),
            next: None,
        });
        id
    }

    /// Set (or clear) the successor of `from`.
    ///
    /// Linking `from` to itself is allowed; that is exactly the self-loop
    /// case the detector exists to find.
    pub fn link(&mut self, from: StageId, to: Option<StageId>) {
        self.stages[from.0].next = to;
    }

    pub fn stage(&self, id: StageId) -> &Stage {
        &self.stages[id.0]
    }

    pub fn name(&self, id: StageId) -> &str {
        &self.stages[id.0].name
    }

    /// Look up a stage by name. Linear scan; chains are small.
    pub fn find(&self, name: &str) -> Option<StageId> {
        self.stages
            .iter()
            .position(|s| s.name == name)
            .map(StageId)
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Iterate over all stages in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (StageId, &Stage)> {
        self.stages.iter().enumerate().map(|(i, s)| (StageId(i), s))
    }

    /// The first declared stage, if any. Used as the default entry point.
    pub fn first(&self) -> Option<StageId> {
        if self.stages.is_empty() {
            None
        } else {
            Some(StageId(0))
        }
    }
}

impl SuccessorChain for StageArena {
    type Id = StageId;

    fn successor(&self, id: &StageId) -> Option<StageId> {
        self.stages[id.0].next
    }

    fn same_stage(&self, a: &StageId, b: &StageId) -> bool {
        a == b
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_add_and_link_stages() {
        let mut arena = StageArena::new();
        let a = arena.add_stage("input");
        let b = arena.add_stage("reverb");

        assert_eq!(arena.len(), 2);
        assert_eq!(arena.name(a), "input");
        assert_eq!(arena.stage(a).next(), None);

        arena.link(a, Some(b));
        assert_eq!(arena.successor(&a), Some(b));
        assert_eq!(arena.successor(&b), None);
    }

    #[test]
    fn test_self_link_is_representable() {
        let mut arena = StageArena::new();
        let a = arena.add_stage("solo");
        arena.link(a, Some(a));

        assert_eq!(arena.successor(&a), Some(a));
    }

    #[test]
    fn test_find_by_name() {
        let mut arena = StageArena::new();
        let a = arena.add_stage("input");
        arena.add_stage("reverb");

        assert_eq!(arena.find("input"), Some(a));
        assert_eq!(arena.find("missing"), None);
    }

    #[test]
    fn test_first_on_empty_arena() {
        let arena = StageArena::new();
        assert!(arena.is_empty());
        assert_eq!(arena.first(), None);
    }

    #[test]
    fn test_iter_declaration_order() {
        let mut arena = StageArena::new();
        arena.add_stage("a");
        arena.add_stage("b");
        arena.add_stage("c");

        let names: Vec<&str> = arena.iter().map(|(_, s)| s.name()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_cyclic_arena_drops_cleanly() {
        // Links are indices, so a fully cyclic chain is dropped like any
        // other Vec. Nothing to assert beyond not leaking/panicking.
        let mut arena = StageArena::new();
        let a = arena.add_stage("a");
        let b = arena.add_stage("b");
        arena.link(a, Some(b));
        arena.link(b, Some(a));
        drop(arena);
    }
}
