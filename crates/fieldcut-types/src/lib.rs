pub mod columns;
pub mod config;
pub mod error;
pub mod selector;

pub use columns::{Column, DuplicatePolicy, HeaderMap, ResolvedColumns};
pub use config::{ExtractConfig, HeaderCase};
pub use error::{Error, Result};
pub use selector::{CaseMode, Selector, SelectorKind};
