//! Correlation ids for check requests
//!
//! Every check is minted a `RequestId` so its start, end and error events
//! can be joined. A caller may attach its own `TraceId` on top.

use std::fmt;
use uuid::Uuid;

/// Time-ordered id minted for one check (UUIDv7)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(Uuid);

impl RequestId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Caller-supplied trace id, kept verbatim
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TraceId(String);

impl TraceId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for TraceId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for TraceId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ids carried through one check
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    pub request_id: RequestId,
    pub trace_id: Option<TraceId>,
}

impl RequestContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_trace_id(mut self, trace_id: impl Into<TraceId>) -> Self {
        self.trace_id = Some(trace_id.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_ids_are_unique_v7() {
        let first = RequestId::new();
        let second = RequestId::new();

        assert_ne!(first, second);
        assert_eq!(first.0.get_version_num(), 7);
    }

    #[test]
    fn test_request_id_displays_as_uuid() {
        let id = RequestId::new();
        let shown = id.to_string();
        assert_eq!(shown.len(), 36);
        assert_eq!(Uuid::parse_str(&shown).ok(), Some(id.0));
    }

    #[test]
    fn test_context_has_no_trace_by_default() {
        let ctx = RequestContext::new();
        assert!(ctx.trace_id.is_none());
    }

    #[test]
    fn test_context_keeps_caller_trace_verbatim() {
        let ctx = RequestContext::new().with_trace_id("batch-7/doc-3");
        assert_eq!(ctx.trace_id.as_ref().map(TraceId::as_str), Some("batch-7/doc-3"));
        assert_eq!(
            ctx.trace_id.map(|t| t.to_string()),
            Some("batch-7/doc-3".to_string())
        );
    }
}
