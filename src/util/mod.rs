//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and pure form logic
//! from page and component code to improve reuse and testability.

pub mod auth;
pub mod image;
pub mod timer;
pub mod validate;
