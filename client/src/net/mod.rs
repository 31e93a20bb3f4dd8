//! Browser-facing plumbing: the one static JSON fetch and the simulated
//! network delay the mock auth service sleeps on.

pub mod api;
pub mod latency;
pub mod types;
