use tolka_types::FaultKind;

/// Prefix of every failure message, so failures stand out in the output
pub const FAILURE_MARKER: &str = "Translation error:";

const UNSUPPORTED_HINTS: &[&str] = &["target language", "not supported", "unsupported", "invalid target"];

const CONNECTIVITY_HINTS: &[&str] = &[
    "network",
    "connection",
    "connect",
    "timed out",
    "timeout",
    "dns",
    "unreachable",
];

/// Best-effort classification of a provider fault by its message.
/// Unsupported-target hints are checked before connectivity hints.
pub fn classify_fault(message: &str) -> FaultKind {
    let message = message.to_lowercase();

    if UNSUPPORTED_HINTS.iter().any(|hint| message.contains(hint)) {
        FaultKind::UnsupportedTarget
    } else if CONNECTIVITY_HINTS.iter().any(|hint| message.contains(hint)) {
        FaultKind::Connectivity
    } else {
        FaultKind::Generic
    }
}

/// Text shown to the user for a classified fault
pub fn fault_message(kind: FaultKind, raw: &str) -> String {
    match kind {
        FaultKind::UnsupportedTarget => {
            format!("{FAILURE_MARKER} the selected target language is not supported.")
        }
        FaultKind::Connectivity => {
            format!("{FAILURE_MARKER} network problem, check your connection and try again.")
        }
        FaultKind::Generic => format!("{FAILURE_MARKER} {raw}"),
    }
}
