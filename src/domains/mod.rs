//! Domains module containing business logic organized by bounded contexts.
//!
//! `catalog` talks to the backend; `tools`, `resources` and `prompts` expose
//! it over MCP.

pub mod catalog;
pub mod prompts;
pub mod resources;
pub mod tools;
