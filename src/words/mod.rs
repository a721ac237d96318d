//! Word list preparation ahead of placement

/// Canonical forms and duplicate removal
pub mod normalize;
/// Length filtering, ordering and truncation
pub mod selection;

pub use normalize::{Charset, WordEntry};
pub use selection::{RejectReason, RejectedWord, WordSelection};
