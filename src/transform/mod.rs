//! Clean-view transformation.
//!
//! The second engine phase: walks the parsed nodes and renders the
//! markup-free text, resolving move/copy directives against a tag table
//! built from the source nodes. Like parsing, it is best-effort — an
//! unresolved reference is reported as an issue and contributes nothing to
//! the output, but the rest of the document still renders.

pub mod clean_view;

pub use clean_view::clean_view;
