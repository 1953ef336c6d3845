use drsla_types::{ErrorCode, Severity};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

use super::registry::{ErrorDefinition, definition};

/// Interpolation values attached to a finding (camelCase keys).
pub type DiagnosticContext = BTreeMap<String, Value>;

/// One detected issue.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticResult {
    pub error_code: ErrorCode,
    pub definition: &'static ErrorDefinition,
    /// Always `true` for emitted findings.
    pub detected: bool,
    pub context: DiagnosticContext,
}

impl DiagnosticResult {
    pub fn new(error_code: ErrorCode) -> Self {
        Self {
            error_code,
            definition: definition(error_code),
            detected: true,
            context: DiagnosticContext::new(),
        }
    }

    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.context.insert(key.to_string(), value.into());
        self
    }

    pub fn severity(&self) -> Severity {
        self.definition.severity
    }

    /// Definition description with `{key}` placeholders filled from the context.
    ///
    /// Strings are inserted verbatim, other values in their JSON form.
    /// Placeholders without a context value are left as written.
    pub fn message(&self) -> String {
        render_template(self.definition.description, &self.context)
    }
}

fn render_template(template: &str, context: &DiagnosticContext) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let Some(close) = after.find('}') else {
            out.push_str(&rest[open..]);
            return out;
        };

        let key = &after[..close];
        match context.get(key) {
            Some(Value::String(s)) => out.push_str(s),
            Some(value) => out.push_str(&value.to_string()),
            None => {
                out.push('{');
                out.push_str(key);
                out.push('}');
            }
        }
        rest = &after[close + 1..];
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_interpolates_context() {
        let result = DiagnosticResult::new(ErrorCode::LastSyncTooOld)
            .with("currentRpoMinutes", 120)
            .with("targetRpoMinutes", 60)
            .with("overdueMinutes", 60);

        assert_eq!(
            result.message(),
            "Last sync was 120 minutes ago, 60 minutes past the 60-minute RPO."
        );
    }

    #[test]
    fn test_message_keeps_unknown_placeholders() {
        let result = DiagnosticResult::new(ErrorCode::GroupPaused).with("reason", "maintenance");
        assert_eq!(
            result.message(),
            "Replication was paused at {pausedAt}: maintenance"
        );
    }

    #[test]
    fn test_unterminated_placeholder_is_literal() {
        let ctx = DiagnosticContext::new();
        assert_eq!(render_template("100% {done", &ctx), "100% {done");
    }

    #[test]
    fn test_new_result_is_detected() {
        let result = DiagnosticResult::new(ErrorCode::NoVmsInGroup);
        assert!(result.detected);
        assert_eq!(result.severity(), Severity::Warning);
        assert!(result.context.is_empty());
    }
}
