//! Service layer: presentation assembly and record storage.
//!
//! These modules sit above the pure structuring pipeline and own its
//! lifecycle state and side effects.

pub mod assembler;
pub mod store;

pub use assembler::{Assembler, AssemblyOutcome, ExportOutcome};
pub use store::{MemoryStore, PresentationRecord, PresentationStore, PresentationSummary};
