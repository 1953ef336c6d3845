use drsla_types::ErrorCode;
use regex::Regex;
use std::sync::LazyLock;

/// Maps failed-job text to the error code that best explains it.
pub trait ErrorClassifier {
    fn classify(&self, text: &str) -> Option<ErrorCode>;
}

impl<F> ErrorClassifier for F
where
    F: Fn(&str) -> Option<ErrorCode>,
{
    fn classify(&self, text: &str) -> Option<ErrorCode> {
        self(text)
    }
}

/// Priority-ordered failure patterns. The first match wins, so specific
/// causes must sit above the generic timeout catch-all.
static FAILURE_PATTERNS: LazyLock<Vec<(ErrorCode, Regex)>> = LazyLock::new(|| {
    [
        (
            ErrorCode::SshConnectionFailed,
            r"(?i)(ssh\b.{0,80}?(connection (refused|reset|closed)|broken pipe|could not resolve hostname)|connect to host \S+ port \d+|novalidconnectionserror|unable to connect to port 22|error reading ssh protocol banner|kex_exchange_identification)",
        ),
        (
            ErrorCode::SshTrustNotEstablished,
            r"(?i)(host key verification failed|permission denied \(publickey|publickey.{0,40}denied|authenticationexception|remote host identification has changed|not in known_hosts|no matching host key)",
        ),
        (
            ErrorCode::NfsMountFailed,
            r"(?i)(nfs\b.{0,80}?(mount|stale|denied|failed|timed out|not responding)|failed to mount|mount(ing)? (of )?(the )?datastore.{0,40}failed|datastore .{0,60}(inaccessible|not accessible|not mounted)|stale file handle)",
        ),
        (
            ErrorCode::SnapshotChainBroken,
            r"(?i)(no common snapshot|incremental source .{0,80}(does not exist|not found)|most recent snapshot .{0,80}does not match|cannot receive incremental stream|destination has been modified since most recent snapshot|snapshot chain)",
        ),
        (
            ErrorCode::StorageFull,
            r"(?i)(no space left on device|out of (disk )?space|insufficient (disk |free )?space|quota exceeded|pool .{0,40}is full|enospc)",
        ),
        (
            ErrorCode::ZfsPoolOffline,
            r"(?i)(pool .{0,60}(degraded|faulted|offline|unavail|suspended)|zpool.{0,80}(degraded|faulted|offline|unavail|suspended)|one or more devices (is|are) (currently )?(unavailable|faulted))",
        ),
        (
            ErrorCode::VcenterDisconnected,
            r"(?i)(vcenter.{0,80}(disconnected|not connected|unreachable|connection (refused|failed|lost)|session (expired|is not authenticated))|notauthenticated|vim\.fault\.invalidlogin)",
        ),
        (
            ErrorCode::EsxiHostDisconnected,
            r"(?i)(esxi?\b.{0,80}(disconnected|not responding|not connected)|host .{0,60}(disconnected|not responding)|hostnotconnected|hostconnectionlost)",
        ),
        (
            ErrorCode::TargetUnreachable,
            r"(?i)(timed? ?out|timeout|unreachable|no route to host|name or service not known|connection refused)",
        ),
    ]
    .into_iter()
    .map(|(code, pattern)| (code, Regex::new(pattern).unwrap()))
    .collect()
});

/// Default classifier: regex table over the serialized details bag.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexClassifier;

impl RegexClassifier {
    /// Codes in the order they are tried.
    pub fn priority() -> Vec<ErrorCode> {
        FAILURE_PATTERNS.iter().map(|(code, _)| *code).collect()
    }
}

impl ErrorClassifier for RegexClassifier {
    fn classify(&self, text: &str) -> Option<ErrorCode> {
        let code = FAILURE_PATTERNS
            .iter()
            .find(|(_, re)| re.is_match(text))
            .map(|(code, _)| *code);
        tracing::trace!(?code, "classified job failure text");
        code
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(text: &str) -> Option<ErrorCode> {
        RegexClassifier.classify(text)
    }

    #[test]
    fn test_priority_order() {
        assert_eq!(
            RegexClassifier::priority(),
            vec![
                ErrorCode::SshConnectionFailed,
                ErrorCode::SshTrustNotEstablished,
                ErrorCode::NfsMountFailed,
                ErrorCode::SnapshotChainBroken,
                ErrorCode::StorageFull,
                ErrorCode::ZfsPoolOffline,
                ErrorCode::VcenterDisconnected,
                ErrorCode::EsxiHostDisconnected,
                ErrorCode::TargetUnreachable,
            ]
        );
    }

    #[test]
    fn test_ssh_connection_beats_generic_timeout() {
        let text = r#"{"error":"ssh: connect to host 10.0.4.20 port 22: Connection timed out"}"#;
        assert_eq!(classify(text), Some(ErrorCode::SshConnectionFailed));
    }

    #[test]
    fn test_ssh_trust() {
        let text = r#"{"error":"Host key verification failed."}"#;
        assert_eq!(classify(text), Some(ErrorCode::SshTrustNotEstablished));

        let text = r#"{"error":"root@zfs-dr: Permission denied (publickey,password)."}"#;
        assert_eq!(classify(text), Some(ErrorCode::SshTrustNotEstablished));
    }

    #[test]
    fn test_storage_patterns() {
        assert_eq!(
            classify(r#"{"error":"NFS mount of datastore repl-ds01 failed"}"#),
            Some(ErrorCode::NfsMountFailed)
        );
        assert_eq!(
            classify(r#"{"stderr":"cannot receive incremental stream: most recent snapshot of tank/vm does not match incremental source"}"#),
            Some(ErrorCode::SnapshotChainBroken)
        );
        assert_eq!(
            classify(r#"{"error":"write failed: No space left on device"}"#),
            Some(ErrorCode::StorageFull)
        );
        assert_eq!(
            classify(r#"{"error":"pool 'tank' is DEGRADED"}"#),
            Some(ErrorCode::ZfsPoolOffline)
        );
    }

    #[test]
    fn test_vsphere_patterns() {
        assert_eq!(
            classify(r#"{"message":"vCenter vc01.lab connection lost"}"#),
            Some(ErrorCode::VcenterDisconnected)
        );
        assert_eq!(
            classify(r#"{"message":"ESXi host esx07 is not responding"}"#),
            Some(ErrorCode::EsxiHostDisconnected)
        );
    }

    #[test]
    fn test_generic_unreachable() {
        assert_eq!(
            classify(r#"{"error":"request to 10.1.1.9 timed out after 30s"}"#),
            Some(ErrorCode::TargetUnreachable)
        );
    }

    #[test]
    fn test_unrecognised_failure() {
        assert_eq!(classify(r#"{"error":"checksum mismatch on block 42"}"#), None);
        assert_eq!(classify("null"), None);
    }

    #[test]
    fn test_closure_classifier() {
        let always_full = |_: &str| Some(ErrorCode::StorageFull);
        assert_eq!(always_full.classify("anything"), Some(ErrorCode::StorageFull));
    }
}
