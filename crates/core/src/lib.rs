//! Content model, content store and asset path resolution for the portfolio
//! site. Everything here is pure and free of I/O so the page renderers and
//! the HTTP layer can share it.

pub mod assets;
pub mod content;
pub mod error;
pub mod validation;
