//! Command handlers, one module per resource.

pub mod workspace;
