/// decision-fatal and recoverable conditions surfaced by the engine.
///
/// recoverable conditions (degenerate sampling weights, missing persistence,
/// out-of-bounds bet sizes) are handled locally and never reach this enum.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// infoset key absent from the precomputed blueprint tables.
    #[error("unknown infoset: {0}")]
    UnknownInfoset(String),
    /// blueprint artifact unreadable or structurally invalid.
    #[error("strategy artifact: {0}")]
    Artifact(String),
    /// malformed card, token, or state-key text.
    #[error("parse: {0}")]
    Parse(String),
    /// equity oracle failed; no action can be chosen without it.
    #[error("equity oracle")]
    Oracle(#[from] anyhow::Error),
}
