// Middleware for cross-origin resource sharing

pub mod cors;

pub use cors::*;
