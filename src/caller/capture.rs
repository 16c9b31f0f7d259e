//! Stack walking backed by the `backtrace` crate.
//!
//! Frames are counted logically: a physical frame that carries inlined
//! functions expands into one frame per function, innermost first.
//!
//! Depth is anchored by name, not by counting this crate's own frames. The
//! walk starts at the `trace_call_site` marker, passes over every frame that
//! belongs to the capture and enrichment entry points (however many of them
//! the optimiser kept), and counts `skip` from the first frame outside them.

use std::hint::black_box;
use std::path::PathBuf;

use backtrace::Frame;

use crate::caller::site::{CallSite, CallSiteCapture};

/// Captures call sites from the live stack.
#[derive(Debug, Clone, Copy, Default)]
pub struct BacktraceCapture;

impl CallSiteCapture for BacktraceCapture {
    // Inlined into the caller, with the result kept live afterwards, so the
    // caller can never turn this into a tail call and drop its own frame.
    #[inline(always)]
    fn capture(&self, skip: usize) -> Option<CallSite> {
        black_box(trace_call_site(skip))
    }
}

const MARKER_SUFFIX: &str = "::trace_call_site";

/// Paths, relative to this crate, of the functions that may sit between a
/// caller and the marker frame.
const ENTRY_POINTS: [&str; 4] = [
    "caller::capture::BacktraceCapture",
    "caller::enricher::CallerEnricher",
    "caller::enricher::set_caller_info",
    "caller::enricher::stamp",
];

fn is_entry_point(name: &str) -> bool {
    let krate = module_path!().split("::").next().unwrap_or_default();
    let Some(path) = name
        .trim_start_matches('<')
        .strip_prefix(krate)
        .and_then(|rest| rest.strip_prefix("::"))
    else {
        return false;
    };

    // the path may continue with generics, a method, or ` as Trait>`
    ENTRY_POINTS.iter().any(|entry| {
        path.strip_prefix(entry)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with(['<', ':', ' ']))
    })
}

struct LogicalFrame {
    function: Option<String>,
    file: Option<PathBuf>,
    line: Option<u32>,
}

impl LogicalFrame {
    fn is_marker(&self) -> bool {
        self.function
            .as_deref()
            .is_some_and(|name| name.ends_with(MARKER_SUFFIX))
    }

    fn is_entry_point(&self) -> bool {
        self.function.as_deref().is_some_and(is_entry_point)
    }

    fn into_call_site(self) -> Option<CallSite> {
        Some(CallSite {
            function: self.function?,
            file: self
                .file
                .map(|path| path.display().to_string())
                .unwrap_or_default(),
            line: self.line.unwrap_or_default(),
        })
    }
}

fn resolve(frame: &Frame) -> Vec<LogicalFrame> {
    let mut logical = Vec::new();
    backtrace::resolve_frame(frame, |symbol| {
        logical.push(LogicalFrame {
            // `{:#}` drops the trailing symbol hash
            function: symbol.name().map(|name| format!("{name:#}")),
            file: symbol.filename().map(PathBuf::from),
            line: symbol.lineno(),
        });
    });
    if logical.is_empty() {
        logical.push(LogicalFrame {
            function: None,
            file: None,
            line: None,
        });
    }
    logical
}

#[derive(Clone, Copy)]
enum Walk {
    /// Below the marker: backtrace internals.
    Seeking,
    /// Between the marker and the first frame outside the entry points.
    Leaving,
    /// Depth of the last frame seen above the entry points.
    Counting(usize),
}

#[inline(never)]
fn trace_call_site(skip: usize) -> Option<CallSite> {
    let mut frames = Vec::new();
    backtrace::trace(|frame| {
        frames.push(frame.clone());
        true
    });

    let marker_addr = trace_call_site as usize;
    let mut walk = Walk::Seeking;

    for frame in &frames {
        for logical in resolve(frame) {
            let depth = match walk {
                Walk::Seeking => {
                    if logical.is_marker() {
                        walk = Walk::Leaving;
                    }
                    continue;
                }
                Walk::Leaving if logical.is_entry_point() => continue,
                Walk::Leaving => 0,
                Walk::Counting(d) => d + 1,
            };
            if depth == skip {
                return logical.into_call_site();
            }
            walk = Walk::Counting(depth);
        }

        // Unsymbolicated builds: fall back to the function start address.
        if matches!(walk, Walk::Seeking) && frame.symbol_address() as usize == marker_addr {
            walk = Walk::Leaving;
        }
    }

    None
}
