use crate::domain::models::{EvidenceItem, IntelligenceRecord};
use crate::render::PdfRenderer;
use crate::services::output::print_one;
use crate::services::report::render_report;
use anyhow::Context;
use std::path::Path;

pub fn handle_render(json: bool, input: Option<&Path>, out: &Path) -> anyhow::Result<()> {
    let record = match input {
        Some(path) => load_record(path)?,
        None => example_record(),
    };
    let receipt = render_report(&record, out, &PdfRenderer::new())?;
    print_one(json, receipt, |r| format!("PDF generated: {}", r.destination))
}

fn load_record(path: &Path) -> anyhow::Result<IntelligenceRecord> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read record {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("invalid record {}", path.display()))
}

/// Built-in demonstration dossier used when no record file is given.
fn example_record() -> IntelligenceRecord {
    IntelligenceRecord {
        operation_id: Some("OP-ENIGMA-2025-X".to_string()),
        summary: Some(
            "Identificada rede de lavagem de dinheiro operando através do domínio \
             betfake.com.br. Padrões de 'smurfing' detectados em 12.000 transações."
                .to_string(),
        ),
        osint_analysis: Some(
            "O domínio está registrado em nome de 'Laranja S.A.'. Servidores localizados \
             em paraíso fiscal. Conexões com IPs previamente associados ao grupo criminoso X."
                .to_string(),
        ),
        evidence: vec![
            evidence("IP Address", "192.168.1.105 (VPN Node)", "2025-12-01 10:00:00"),
            evidence(
                "Transaction",
                "R$ 50.000,00 via PIX (Laranjas)",
                "2025-12-01 10:05:00",
            ),
        ],
    }
}

fn evidence(kind: &str, description: &str, timestamp: &str) -> EvidenceItem {
    EvidenceItem {
        kind: Some(kind.to_string()),
        description: Some(description.to_string()),
        timestamp: Some(timestamp.to_string()),
    }
}
