//! Site content: the typed schema and the literal store built from it.

pub mod model;
pub mod site;

pub use model::*;
pub use site::{site, SITE};
