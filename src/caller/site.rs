//! Call-site records and the capability that produces them.

/// Where a log call came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSite {
    /// Fully qualified function name, without symbol hash.
    pub function: String,
    pub file: String,
    pub line: u32,
}

/// Resolves the caller's location at a given stack depth.
///
/// `skip = 0` resolves the first frame outside this crate's capture and
/// enrichment entry points, i.e. the code that asked for its call site; each
/// increment walks one frame further up. `None` when the stack is not that deep or
/// the frame cannot be resolved.
pub trait CallSiteCapture {
    fn capture(&self, skip: usize) -> Option<CallSite>;
}
