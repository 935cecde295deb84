//! HTML document tree and the queries the page parser relies on.
//!
//! Pages are parsed with html5ever and copied into an owned, index-based
//! tree ([`Document`]) whose [`Node`] handles are cheap to copy and walk in
//! any direction. Elements are located by [`Marker`] (tag plus class or id)
//! rather than by absolute position.

mod document;
mod marker;

pub use document::{Document, Node};
pub use marker::Marker;
