use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// One investigative dossier as loaded from disk. Scalar fields are optional
/// on the wire; rendering substitutes documented defaults, never fails.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct IntelligenceRecord {
    #[serde(default)]
    pub operation_id: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub osint_analysis: Option<String>,
    #[serde(default)]
    pub evidence: Vec<EvidenceItem>,
}

/// One collected observation. All three fields are required; they stay
/// `Option` at the wire level so validation can name the missing field
/// instead of surfacing a deserializer error.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct EvidenceItem {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Opaque display string; never parsed as a date.
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// Synthetic risk profile for one entity. Created fresh on every enrichment
/// call; not persisted anywhere.
#[derive(Debug, Serialize, Clone)]
pub struct EnrichmentProfile {
    pub entity: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub risk_score: f64,
    pub known_affiliations: Vec<String>,
    pub leaked_creds: bool,
    pub geo_location: String,
}

/// Success confirmation of one render: where the artifact landed and what
/// was written.
#[derive(Debug, Serialize, Clone)]
pub struct RenderReceipt {
    pub destination: String,
    pub sha256: String,
    pub size_bytes: usize,
}
