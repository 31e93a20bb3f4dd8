//! Reusable UI components.
//!
//! ARCHITECTURE
//! ============
//! `session_provider` owns session state for the whole tree, `auth_flow`
//! switches between the auth screens, and `session_toast` is a pure
//! listener on session events.

pub mod auth_flow;
pub mod session_provider;
pub mod session_toast;
