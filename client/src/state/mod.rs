//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` wraps the auth crate's session holder in reactive signals;
//! `route` is the pure screen state machine driving the auth flow.

pub mod route;
pub mod session;
