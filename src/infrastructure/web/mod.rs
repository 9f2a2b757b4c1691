//! Web form: router, handlers, page rendering and server lifecycle

pub mod handlers;
pub mod page;
mod router;
mod server;

pub use router::create_router;
pub use server::{run, serve};
