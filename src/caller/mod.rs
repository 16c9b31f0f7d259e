//! Caller provenance.
//!
//! # Responsibilities
//! - Resolve the call site at a caller-chosen stack depth
//! - Stamp function, file and line into reserved fields of a set
//! - Respect fields a previous stamp (or the caller) already wrote
//!
//! # Data Flow
//! ```text
//! CallerEnricher::enrich(skip, override, &mut set)
//!     → presence scan over the three reserved keys
//!     → CallSiteCapture::capture(skip)    (site.rs; capture.rs walks the real stack)
//!     → all three fields written, or none
//! ```
//!
//! # Design Decisions
//! - Reserved key names are configuration, never constants
//! - Stack walking sits behind a trait so the override policy is testable
//!   with scripted call sites
//! - Capture failures are silent; logging must never break the caller
//! - Depth is anchored on the names of this crate's entry points rather than
//!   a fixed frame count, so inlining and tail calls do not shift it

pub mod capture;
pub mod enricher;
pub mod site;

pub use capture::BacktraceCapture;
pub use enricher::{set_caller_info, CallerEnricher, CallerKeys};
pub use site::{CallSite, CallSiteCapture};
