//! Deterministic cache keys: `<prefix>_<kind>_[user_<uid>_]<ids>[_page_<n>]`.

use std::fmt;
use std::str::FromStr;

/// The kinds of artifact the product caches per document (or document set).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Conversation,
    Comparison,
    Patterns,
    Contradictions,
    Summary,
    Extract,
    Comments,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 7] = [
        ArtifactKind::Conversation,
        ArtifactKind::Comparison,
        ArtifactKind::Patterns,
        ArtifactKind::Contradictions,
        ArtifactKind::Summary,
        ArtifactKind::Extract,
        ArtifactKind::Comments,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ArtifactKind::Conversation => "conversation",
            ArtifactKind::Comparison => "comparison",
            ArtifactKind::Patterns => "patterns",
            ArtifactKind::Contradictions => "contradictions",
            ArtifactKind::Summary => "summary",
            ArtifactKind::Extract => "extract",
            ArtifactKind::Comments => "comments",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArtifactKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ArtifactKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| format!("unknown artifact kind: {}", s))
    }
}

/// Identity of one cached artifact: kind, the document id(s) it belongs to,
/// and an optional page number. Multi-id keys sort their ids so that id order
/// never affects cache identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactKey {
    kind: ArtifactKind,
    ids: Vec<String>,
    page: Option<u32>,
}

impl ArtifactKey {
    /// Key for a single-document artifact.
    pub fn new(kind: ArtifactKind, id: impl Into<String>) -> Self {
        Self {
            kind,
            ids: vec![id.into()],
            page: None,
        }
    }

    /// Key for a cross-document artifact (comparison, pattern, contradiction).
    pub fn multi(kind: ArtifactKind, ids: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let mut ids: Vec<String> = ids.into_iter().map(Into::into).collect();
        ids.sort();
        Self {
            kind,
            ids,
            page: None,
        }
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn kind(&self) -> ArtifactKind {
        self.kind
    }

    pub fn document_ids(&self) -> &[String] {
        &self.ids
    }

    /// Full storage key under `prefix`, with the user segment inserted when a
    /// user id is in scope.
    pub(super) fn render(&self, prefix: &str, user_id: Option<&str>) -> String {
        let mut key = kind_prefix(prefix, self.kind, user_id);
        key.push_str(&self.ids.join(","));
        if let Some(page) = self.page {
            key.push_str(&format!("_page_{}", page));
        }
        key
    }
}

/// Shared prefix of every key of `kind` in the current user scope. Used for
/// enumeration and bulk deletion, so it must include the user segment.
pub(super) fn kind_prefix(prefix: &str, kind: ArtifactKind, user_id: Option<&str>) -> String {
    match user_id {
        Some(uid) => format!("{}_{}_user_{}_", prefix, kind.as_str(), uid),
        None => format!("{}_{}_", prefix, kind.as_str()),
    }
}
