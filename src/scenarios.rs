//! Built-in soundcheck scenarios
//!
//! A fixed set of chain shapes with known answers, used by the `soundcheck`
//! command (and by the test suite) to verify the detector end to end. Each
//! scenario builds its own arena, so scenarios are independent and
//! re-runnable in any order.

use crate::chain::{StageArena, StageId};
use crate::detector::detect_feedback;

/// A named chain fixture with a known expected answer.
pub struct Scenario {
    name: &'static str,
    expected: bool,
    build: fn() -> (StageArena, Option<StageId>),
}

impl Scenario {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn expected(&self) -> bool {
        self.expected
    }

    /// Build the fixture and run the detector over it.
    pub fn run(&self) -> ScenarioOutcome {
        let (arena, entry) = (self.build)();
        let computed = detect_feedback(&arena, entry.as_ref());

        ScenarioOutcome {
            name: self.name,
            expected: self.expected,
            computed,
        }
    }
}

/// Result of running one scenario.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScenarioOutcome {
    pub name: &'static str,
    pub expected: bool,
    pub computed: bool,
}

impl ScenarioOutcome {
    pub fn passed(&self) -> bool {
        self.expected == self.computed
    }
}

/// The built-in scenarios, in a fixed order.
pub fn builtin_scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            name: "straight chain of four stages",
            expected: false,
            build: || {
                let (arena, ids) = chain_of(&["a", "b", "c", "d"]);
                (arena, ids.first().copied())
            },
        },
        Scenario {
            name: "loop of three entered after one stage",
            expected: true,
            build: || {
                let (mut arena, ids) = chain_of(&["a", "b", "c", "d"]);
                arena.link(ids[3], Some(ids[1]));
                (arena, ids.first().copied())
            },
        },
        Scenario {
            name: "absent entry",
            expected: false,
            build: || (StageArena::new(), None),
        },
        Scenario {
            name: "single stage without successor",
            expected: false,
            build: || {
                let mut arena = StageArena::new();
                let a = arena.add_stage("a");
                (arena, Some(a))
            },
        },
        Scenario {
            name: "single stage feeding back into itself",
            expected: true,
            build: || {
                let mut arena = StageArena::new();
                let a = arena.add_stage("a");
                arena.link(a, Some(a));
                (arena, Some(a))
            },
        },
        Scenario {
            name: "two stages forming the whole loop",
            expected: true,
            build: || {
                let mut arena = StageArena::new();
                let a = arena.add_stage("a");
                let b = arena.add_stage("b");
                arena.link(a, Some(b));
                arena.link(b, Some(a));
                (arena, Some(a))
            },
        },
    ]
}

/// Run every built-in scenario and collect the outcomes.
pub fn run_all() -> Vec<ScenarioOutcome> {
    builtin_scenarios().iter().map(Scenario::run).collect()
}

/// Build a chain of named stages linked in order, returning the ids.
fn chain_of(names: &[&str]) -> (StageArena, Vec<StageId>) {
    let mut arena = StageArena::new();
    let ids: Vec<StageId> = names.iter().map(|n| arena.add_stage(n)).collect();
    for pair in ids.windows(2) {
        arena.link(pair[0], Some(pair[1]));
    }
    (arena, ids)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_all_builtin_scenarios_pass() {
        for outcome in run_all() {
            assert!(
                outcome.passed(),
                "scenario '{}' expected {} but computed {}",
                outcome.name,
                outcome.expected,
                outcome.computed
            );
        }
    }

    #[test]
    fn test_scenario_count_and_order() {
        let scenarios = builtin_scenarios();
        assert_eq!(scenarios.len(), 6);
        assert_eq!(scenarios[0].name(), "straight chain of four stages");
        assert_eq!(scenarios[2].name(), "absent entry");
    }

    #[test]
    fn test_scenarios_are_rerunnable() {
        let scenarios = builtin_scenarios();
        let first: Vec<_> = scenarios.iter().map(Scenario::run).collect();
        let second: Vec<_> = scenarios.iter().map(Scenario::run).collect();
        assert_eq!(first, second);
    }
}
