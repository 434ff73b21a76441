//!
//! # Storage Layer
//!
//! Thin persistence functions over a shared `PgPool`. Each function is a
//! single statement with parameterized bindings; there is no caching and no
//! transaction spanning more than one call. The pool is created once at
//! startup and injected by the caller.

pub mod tasks;
pub mod users;
