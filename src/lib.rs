#![doc = "The `taskcloud` library crate."]
#![doc = ""]
#![doc = "This crate contains the business logic for the to-do backend: the domain"]
#![doc = "models, the credential store and task store, the token codec and password"]
#![doc = "hashing, the HTTP route handlers, and error handling. It is used by the"]
#![doc = "main binary (`main.rs`) to construct and run the application."]

pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod store;
