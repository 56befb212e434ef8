//! Runtime tables for phonological rules
//!
//! Tables are built once from validated configuration and are read-only
//! afterwards.

pub mod classes;
pub mod forbidden;
pub mod groups;

pub use classes::{CharClass, ClassTable};
pub use forbidden::{ForbiddenTable, Position};
pub use groups::GroupTable;
