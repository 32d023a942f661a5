//! Built-in operation handlers.
//!
//! Each module exposes its operation name and a `descriptor` constructor
//! that `builtin_registry` registers at startup.

pub mod calc;
pub mod code_review;
pub mod greeting;
pub mod image;
pub mod server_info;
pub mod time;
