//! Utility helpers shared across client modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from component and
//! action logic to improve reuse and testability.

pub mod dates;
pub mod dom;
pub mod markdown;
pub mod navigation;
pub mod progress;
pub mod timer;
