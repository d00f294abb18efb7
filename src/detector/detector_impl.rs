use crate::chain::{StageArena, StageId, SuccessorChain};

/// Report whether a feedback loop is reachable from `entry`.
///
/// Floyd's two-pointer walk: `slow` advances one stage per iteration, `fast`
/// advances two. The cursors meet iff the chain folds back on itself. An
/// absent entry is a valid (empty) chain and yields `false`.
///
/// The chain is only observed through [`SuccessorChain`]; nothing is mutated,
/// retained, or freed, and repeated calls on an unmodified chain always
/// return the same answer. O(n) time, O(1) auxiliary space.
pub fn detect_feedback<C: SuccessorChain>(chain: &C, entry: Option<&C::Id>) -> bool {
    meeting_point(chain, entry).is_some()
}

/// Core of Floyd's walk: the stage where the cursors meet, or `None` when the
/// chain terminates without folding back.
fn meeting_point<C: SuccessorChain>(chain: &C, entry: Option<&C::Id>) -> Option<C::Id> {
    let start = entry?;

    let mut slow = start.clone();
    let mut fast = start.clone();

    loop {
        let Some(next_slow) = chain.successor(&slow) else {
            return None;
        };
        // Re-check presence of the intermediate stage before the second hop
        let Some(mid) = chain.successor(&fast) else {
            return None;
        };
        let Some(next_fast) = chain.successor(&mid) else {
            return None;
        };

        slow = next_slow;
        fast = next_fast;

        if chain.same_stage(&slow, &fast) {
            return Some(slow);
        }
    }
}

/// A feedback loop found in a stage chain.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackLoop {
    loop_start: StageId,
    transient_length: usize,
    cycle_length: usize,
    stage_names: Vec<String>,
}

impl FeedbackLoop {
    /// First stage that lies on the loop.
    pub fn loop_start(&self) -> StageId {
        self.loop_start
    }

    /// Number of steps from the entry to [`loop_start`](Self::loop_start).
    pub fn transient_length(&self) -> usize {
        self.transient_length
    }

    /// Number of stages on the loop.
    pub fn cycle_length(&self) -> usize {
        self.cycle_length
    }

    /// Names of the stages on the loop, in walk order starting at
    /// [`loop_start`](Self::loop_start).
    pub fn stage_names(&self) -> &[String] {
        &self.stage_names
    }
}

/// Detector for finding feedback loops in stage arenas
///
/// Wraps [`detect_feedback`] and, when a loop exists, works out where it
/// starts and which stages it passes through (the classic extension of
/// Floyd's algorithm: after the cursors meet, restart one cursor at the
/// entry and advance both one step at a time; they next meet at the first
/// stage of the loop).
#[derive(Debug, Default)]
pub struct FeedbackDetector {
    feedback: Option<FeedbackLoop>,
}

impl FeedbackDetector {
    /// Create a new feedback detector
    pub fn new() -> Self {
        Self { feedback: None }
    }

    /// Scan the chain reachable from `entry` for a feedback loop.
    ///
    /// The scan is read-only and stays O(n) time / O(1) auxiliary space; the
    /// collected stage names are proportional to the loop itself, not the
    /// chain.
    pub fn scan(&mut self, arena: &StageArena, entry: Option<StageId>) {
        self.feedback = meeting_point(arena, entry.as_ref()).map(|meeting| {
            // Phase 2: find the first stage on the loop.
            let mut from_entry = entry.unwrap_or(meeting);
            let mut from_meeting = meeting;
            let mut transient_length = 0;
            while from_entry != from_meeting {
                // Both cursors are on the rho, so successors exist here
                from_entry = arena
                    .successor(&from_entry)
                    .expect("cursor on the rho has a successor");
                from_meeting = arena
                    .successor(&from_meeting)
                    .expect("cursor on the rho has a successor");
                transient_length += 1;
            }
            let loop_start = from_entry;

            // Phase 3: one lap around the loop to measure and name it.
            let mut stage_names = vec![arena.name(loop_start).to_string()];
            let mut cursor = loop_start;
            while let Some(next) = arena.successor(&cursor) {
                if next == loop_start {
                    break;
                }
                stage_names.push(arena.name(next).to_string());
                cursor = next;
            }

            FeedbackLoop {
                loop_start,
                transient_length,
                cycle_length: stage_names.len(),
                stage_names,
            }
        });
    }

    /// Whether the last scan found a feedback loop
    pub fn has_feedback(&self) -> bool {
        self.feedback.is_some()
    }

    /// The loop found by the last scan, if any
    pub fn feedback(&self) -> Option<&FeedbackLoop> {
        self.feedback.as_ref()
    }
}
