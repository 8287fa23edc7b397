// ============================================================================
// STATE MODULE - page-local state machines
// ============================================================================

pub mod countdown;

pub use countdown::*;
