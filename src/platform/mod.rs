//! Platform abstraction layer
//!
//! The simulation only talks to its host through these seams:
//! - Storage (LocalStorage on web, in-memory elsewhere)
//! - Frame scheduling (requestAnimationFrame on web)

pub mod scheduler;
pub mod storage;

pub use scheduler::{NextFrame, Scheduler};
#[cfg(target_arch = "wasm32")]
pub use storage::LocalStore;
pub use storage::{KeyValueStore, MemoryStore};
