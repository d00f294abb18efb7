//! # Feedback Detection Module
//!
//! This module implements feedback-loop detection for stage chains.
//!
//! ## Algorithm
//!
//! We use Floyd's cycle-finding algorithm ("tortoise and hare"): two cursors
//! walk the chain, one stage per step and two stages per step. If the chain
//! folds back on itself the fast cursor gains on the slow one by exactly one
//! stage per iteration once both are inside the loop, so they must meet
//! within one lap — a modular-arithmetic guarantee, not a heuristic. If the
//! chain is a simple path the fast cursor falls off the end first.
//!
//! Time is O(n) in the number of reachable stages; auxiliary space is O(1)
//! (two cursors, no visited-set). The chain is never mutated.
//!
//! ## Key Components
//!
//! - **[`detect_feedback`]**: the pure boolean check, generic over any
//!   [`SuccessorChain`](crate::chain::SuccessorChain)
//! - **[`FeedbackDetector`]**: scans an arena and keeps a description of the
//!   loop it found, for report generation
//! - **[`FeedbackLoop`]**: a detected loop — where it starts, how long it is,
//!   which stages it passes through
//!
//! ## Example
//!
//! ```
//! use feedback_finder::chain::StageArena;
//! use feedback_finder::detector::detect_feedback;
//!
//! let mut arena = StageArena::new();
//! let a = arena.add_stage("input");
//! let b = arena.add_stage("reverb");
//! arena.link(a, Some(b));
//! arena.link(b, Some(a)); // feedback!
//!
//! assert!(detect_feedback(&arena, Some(&a)));
//! ```

mod detector_impl;

pub use detector_impl::*;
