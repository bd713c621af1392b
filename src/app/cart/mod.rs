pub mod handler;
pub mod model;
pub mod service;
pub mod store;

pub use service::{CartError, CartService};
pub use store::{MemorySessionStore, SessionStore};
