#![forbid(unsafe_code)]

//! Host-driven scheduling for FrankenTip.
//!
//! Design goals:
//! - **Deterministic time**: the host advances a monotonic clock explicitly;
//!   nothing here reads the wall clock.
//! - **Cancellable timers**: every scheduled task has a handle, and a
//!   cancelled task is removed before it can ever be delivered.
//! - **No threads, no blocking**: suitable for `wasm32-unknown-unknown` and
//!   for exhaustive unit testing.
//!
//! The scheduler never runs tasks itself. The host pops due timers and
//! drains the after-render queue, delivering each task to its owner inside
//! one flush step.

pub mod clock;
pub mod scheduler;

pub use clock::DeterministicClock;
pub use scheduler::{Scheduler, TimerHandle, TimerSlot};
