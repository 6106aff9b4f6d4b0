//! Lambda handlers.
//!
//! One module per Lambda, each a thin validate -> build -> call -> map
//! sequence over its upstream client, plus the shared request parsing and
//! response-envelope helpers.

pub mod alias_handler;
pub mod generate_handler;
pub mod helpers;
pub mod newsletter_handler;
pub mod parsing;
