// ============================================================================
// DOM MODULE - Helpers para manipulación DOM (solo navegador)
// ============================================================================

pub mod builder;
pub mod element;
pub mod events;

pub use builder::*;
pub use element::*;
pub use events::*;
