//! Page modules for the screens of the auth flow and the 404 route.
//!
//! ARCHITECTURE
//! ============
//! Auth pages own their form state and report outcomes through callbacks;
//! which page is visible is decided by `components::auth_flow`.

pub mod dashboard;
pub mod login;
pub mod not_found;
pub mod register;
