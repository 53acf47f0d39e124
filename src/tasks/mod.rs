//! Background Tasks Module
//!
//! Tasks that run periodically during service operation.
//!
//! # Tasks
//! - Expired-entry sweep: purges stale cache entries at configured intervals

mod sweep;

pub use sweep::spawn_sweep_task;
