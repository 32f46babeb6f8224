//! Input handling module

pub mod glob_resolver;
pub mod stdin;

pub use glob_resolver::resolve_patterns;
pub use stdin::ensure_piped;
