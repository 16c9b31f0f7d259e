//! Stamping call-site provenance into a field set.

use std::hint::black_box;

use crate::caller::capture::BacktraceCapture;
use crate::caller::site::{CallSite, CallSiteCapture};
use crate::config::CallerConfig;
use crate::fields::{FieldSet, Value};

/// Names of the three reserved caller fields.
///
/// Owned by the logging facade; the enricher only writes to them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerKeys {
    pub func: String,
    pub file: String,
    pub line: String,
}

impl CallerKeys {
    pub fn new(func: impl Into<String>, file: impl Into<String>, line: impl Into<String>) -> Self {
        Self {
            func: func.into(),
            file: file.into(),
            line: line.into(),
        }
    }

    /// Whether any reserved field is already in the set.
    pub fn any_present(&self, fields: &FieldSet) -> bool {
        [&self.func, &self.file, &self.line]
            .into_iter()
            .any(|key| fields.contains(key))
    }

    fn write(&self, site: CallSite, fields: &mut FieldSet) {
        fields.insert(self.func.as_str(), site.function);
        fields.insert(self.file.as_str(), site.file);
        fields.insert(self.line.as_str(), Value::U32(site.line));
    }
}

impl Default for CallerKeys {
    fn default() -> Self {
        Self::from(&CallerConfig::default())
    }
}

impl From<&CallerConfig> for CallerKeys {
    fn from(config: &CallerConfig) -> Self {
        Self::new(&config.func_field, &config.file_field, &config.line_field)
    }
}

/// Writes caller provenance into field sets.
///
/// The three reserved fields are written together or not at all.
#[derive(Debug, Clone)]
pub struct CallerEnricher<C = BacktraceCapture> {
    keys: CallerKeys,
    capture: C,
    skip_frames: usize,
    override_existing: bool,
}

impl CallerEnricher<BacktraceCapture> {
    pub fn new(keys: CallerKeys) -> Self {
        Self::with_capture(keys, BacktraceCapture)
    }

    /// Keys and policy (`skip_frames`, `override_existing`) from configuration.
    pub fn from_config(config: &CallerConfig) -> Self {
        Self::new(CallerKeys::from(config)).with_policy(config.skip_frames, config.override_existing)
    }
}

impl<C: CallSiteCapture> CallerEnricher<C> {
    pub fn with_capture(keys: CallerKeys, capture: C) -> Self {
        Self {
            keys,
            capture,
            skip_frames: 0,
            override_existing: false,
        }
    }

    /// Set the policy used by [`CallerEnricher::enrich_configured`].
    pub fn with_policy(mut self, skip_frames: usize, override_existing: bool) -> Self {
        self.skip_frames = skip_frames;
        self.override_existing = override_existing;
        self
    }

    pub fn keys(&self) -> &CallerKeys {
        &self.keys
    }

    pub fn skip_frames(&self) -> usize {
        self.skip_frames
    }

    pub fn override_existing(&self) -> bool {
        self.override_existing
    }

    /// Stamp the call site `skip` frames above the caller of `enrich`.
    ///
    /// If any reserved field is present and `override_existing` is false the
    /// set is returned untouched. A stack too shallow for `skip` is a silent
    /// no-op.
    // Inlined so the stack walk runs from the caller's own frame; black_box
    // keeps that call out of tail position in optimised builds.
    #[inline(always)]
    pub fn enrich<'a>(
        &self,
        skip: usize,
        override_existing: bool,
        fields: &'a mut FieldSet,
    ) -> &'a mut FieldSet {
        black_box(stamp(&self.capture, &self.keys, skip, override_existing, fields))
    }

    /// [`CallerEnricher::enrich`] with the configured skip and override policy.
    #[inline(always)]
    pub fn enrich_configured<'a>(&self, fields: &'a mut FieldSet) -> &'a mut FieldSet {
        black_box(stamp(
            &self.capture,
            &self.keys,
            self.skip_frames,
            self.override_existing,
            fields,
        ))
    }
}

/// Free-function form of [`CallerEnricher::enrich`] using the live stack.
#[inline(always)]
pub fn set_caller_info<'a>(
    skip: usize,
    override_existing: bool,
    fields: &'a mut FieldSet,
    keys: &CallerKeys,
) -> &'a mut FieldSet {
    black_box(stamp(&BacktraceCapture, keys, skip, override_existing, fields))
}

// Frames of the public entry points and of this function are passed over by
// the capture, so `skip` is forwarded as the caller gave it.
#[inline(never)]
fn stamp<'a, C: CallSiteCapture>(
    capture: &C,
    keys: &CallerKeys,
    skip: usize,
    override_existing: bool,
    fields: &'a mut FieldSet,
) -> &'a mut FieldSet {
    if !override_existing && keys.any_present(fields) {
        tracing::trace!(key = %keys.func, "caller fields already present");
        return fields;
    }

    match capture.capture(skip) {
        Some(site) => keys.write(site, fields),
        None => tracing::debug!(skip, "call site not resolvable, caller fields left unset"),
    }
    fields
}
