//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render presentational pieces and read shared state from Leptos
//! context providers; none of them talk to the network.

pub mod loader;
pub mod navbar;
pub mod no_chat_selected;
pub mod password_field;
pub mod sidebar_skeleton;
pub mod toaster;
