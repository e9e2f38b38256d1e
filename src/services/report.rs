use crate::domain::constants::{
    BODY_SIZE, DISCLAIMER, DISCLAIMER_SIZE, EVIDENCE_COLUMNS, EVIDENCE_HEADING, MISSING_FIELD_TEXT,
    MUTED_TEXT, OPERATION_ID_LABEL, OSINT_HEADING, REPORT_TITLE, SECTION_HEADING_SIZE,
    SUMMARY_HEADING, TABLE_BODY_BG, TABLE_HEADER_BG, TABLE_HEADER_TEXT, TITLE_ACCENT, TITLE_SIZE,
    UNKNOWN_OPERATION_ID,
};
use crate::domain::models::{EvidenceItem, IntelligenceRecord, RenderReceipt};
use crate::render::{Block, DocumentRenderer, RenderError, TableBlock, TableStyle};
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};

#[derive(thiserror::Error, Debug)]
pub enum ReportError {
    #[error("evidence item {index} is missing required field `{field}`")]
    MalformedEvidence { index: usize, field: &'static str },
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Record view with defaults applied and every evidence row checked.
/// Block assembly over this view is total.
struct ResolvedRecord {
    operation_id: String,
    summary: String,
    osint_analysis: String,
    evidence: Vec<[String; 3]>,
}

/// Renders one record to `destination`. Defaulting and evidence validation
/// happen before the renderer is consulted; the artifact is written through
/// a sibling temp file and renamed into place, so a failed render never
/// leaves a half-written file under the destination name. An existing file
/// at the destination is overwritten.
pub fn render_report(
    record: &IntelligenceRecord,
    destination: &Path,
    renderer: &impl DocumentRenderer,
) -> Result<RenderReceipt, ReportError> {
    let resolved = resolve(record)?;
    let bytes = renderer.render(&build_blocks(&resolved))?;
    persist(&bytes, destination)?;
    Ok(RenderReceipt {
        destination: destination.display().to_string(),
        sha256: digest(&bytes),
        size_bytes: bytes.len(),
    })
}

fn resolve(record: &IntelligenceRecord) -> Result<ResolvedRecord, ReportError> {
    let or_default = |value: &Option<String>, default: &str| {
        value.clone().unwrap_or_else(|| default.to_string())
    };
    let mut evidence = Vec::with_capacity(record.evidence.len());
    for (index, item) in record.evidence.iter().enumerate() {
        evidence.push(resolve_evidence(index, item)?);
    }
    Ok(ResolvedRecord {
        operation_id: or_default(&record.operation_id, UNKNOWN_OPERATION_ID),
        summary: or_default(&record.summary, MISSING_FIELD_TEXT),
        osint_analysis: or_default(&record.osint_analysis, MISSING_FIELD_TEXT),
        evidence,
    })
}

fn resolve_evidence(index: usize, item: &EvidenceItem) -> Result<[String; 3], ReportError> {
    let required = |value: &Option<String>, field: &'static str| {
        value
            .clone()
            .ok_or(ReportError::MalformedEvidence { index, field })
    };
    Ok([
        required(&item.kind, "type")?,
        required(&item.description, "description")?,
        required(&item.timestamp, "timestamp")?,
    ])
}

fn build_blocks(record: &ResolvedRecord) -> Vec<Block> {
    vec![
        Block::Heading {
            text: REPORT_TITLE.to_string(),
            size: TITLE_SIZE,
            color: Some(TITLE_ACCENT),
        },
        Block::Paragraph {
            text: format!("{}: {}", OPERATION_ID_LABEL, record.operation_id),
            size: BODY_SIZE,
            color: None,
        },
        Block::Spacer { lines: 1.0 },
        Block::Heading {
            text: SUMMARY_HEADING.to_string(),
            size: SECTION_HEADING_SIZE,
            color: None,
        },
        Block::Paragraph {
            text: record.summary.clone(),
            size: BODY_SIZE,
            color: None,
        },
        Block::Spacer { lines: 1.0 },
        Block::Heading {
            text: EVIDENCE_HEADING.to_string(),
            size: SECTION_HEADING_SIZE,
            color: None,
        },
        Block::Table(evidence_table(&record.evidence)),
        Block::Spacer { lines: 1.5 },
        Block::Heading {
            text: OSINT_HEADING.to_string(),
            size: SECTION_HEADING_SIZE,
            color: None,
        },
        Block::Paragraph {
            text: record.osint_analysis.clone(),
            size: BODY_SIZE,
            color: None,
        },
        Block::Spacer { lines: 3.0 },
        Block::Paragraph {
            text: DISCLAIMER.to_string(),
            size: DISCLAIMER_SIZE,
            color: Some(MUTED_TEXT),
        },
    ]
}

/// The header row is always present; an empty dossier still shows the table.
fn evidence_table(rows: &[[String; 3]]) -> TableBlock {
    TableBlock {
        columns: EVIDENCE_COLUMNS.iter().map(|c| c.to_string()).collect(),
        rows: rows.iter().map(|r| r.to_vec()).collect(),
        style: TableStyle {
            header_background: TABLE_HEADER_BG,
            header_text: TABLE_HEADER_TEXT,
            header_bold: true,
            body_background: TABLE_BODY_BG,
            grid: true,
            centered: true,
        },
    }
}

fn persist(bytes: &[u8], destination: &Path) -> Result<(), RenderError> {
    let write_err = |source| RenderError::Write {
        dest: destination.to_path_buf(),
        source,
    };
    let mut tmp = destination.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);
    std::fs::write(&tmp, bytes).map_err(write_err)?;
    if let Err(source) = std::fs::rename(&tmp, destination) {
        let _ = std::fs::remove_file(&tmp);
        return Err(write_err(source));
    }
    Ok(())
}

fn digest(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}
