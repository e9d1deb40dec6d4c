//! Derived views of a sequence: reverse complement and base composition.

pub mod composition;
pub mod reverse_complement;

pub use composition::{Composition, CompositionReport, composition, composition_report};
pub use reverse_complement::reverse_complement;
