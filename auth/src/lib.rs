//! # auth
//!
//! UI-free core of the session demo: the token codec, the in-memory mock
//! user store, the auth service that simulates a backend over it, and the
//! session state holder the client shares through context.
//!
//! Nothing here talks to a network or a disk. The "backend" is an
//! [`service::AuthService`] that sleeps for a configured latency before
//! answering from memory, and the "credential" is an unsigned base64 JSON
//! blob produced by [`token`].

pub mod bootstrap;
pub mod clock;
pub mod config;
pub mod error;
pub mod events;
pub mod service;
pub mod session;
pub mod store;
pub mod token;
pub mod user;

pub use error::AuthError;
pub use service::AuthService;
pub use session::SessionManager;
