//! Stable literals shared by the report pipeline and the enrichment
//! simulator. Report text is Portuguese by contract with the receiving
//! authorities; do not translate.

use crate::render::Rgb;

pub const REPORT_TITLE: &str = "RELATÓRIO DE INTELIGÊNCIA FINANCEIRA";
pub const SUMMARY_HEADING: &str = "SUMÁRIO EXECUTIVO";
pub const EVIDENCE_HEADING: &str = "EVIDÊNCIAS COLETADAS";
pub const OSINT_HEADING: &str = "ANÁLISE OSINT & VÍNCULOS";
pub const DISCLAIMER: &str = "Este documento contém informações confidenciais e é destinado exclusivamente às autoridades competentes.";

pub const EVIDENCE_COLUMNS: [&str; 3] = ["Tipo", "Descrição", "Timestamp"];

pub const OPERATION_ID_LABEL: &str = "ID OPERAÇÃO";
pub const UNKNOWN_OPERATION_ID: &str = "UNKNOWN";
pub const MISSING_FIELD_TEXT: &str = "N/A";

pub const DEFAULT_OUTPUT: &str = "relatorio_confidencial.pdf";

pub const TITLE_SIZE: u8 = 24;
pub const SECTION_HEADING_SIZE: u8 = 14;
pub const BODY_SIZE: u8 = 11;
pub const DISCLAIMER_SIZE: u8 = 8;

pub const TITLE_ACCENT: Rgb = Rgb(26, 35, 126);
pub const TABLE_HEADER_BG: Rgb = Rgb(128, 128, 128);
pub const TABLE_HEADER_TEXT: Rgb = Rgb(245, 245, 245);
pub const TABLE_BODY_BG: Rgb = Rgb(245, 245, 220);
pub const MUTED_TEXT: Rgb = Rgb(128, 128, 128);

/// Affiliation tags the simulator draws from. Fixed by the upstream
/// enrichment contract together with the three thresholds below.
pub const THREAT_FEEDS: [&str; 3] = ["PCC_KNOWN_IPS", "CV_CRYPTO_WALLETS", "DARKWEB_LEAKS"];

pub const AFFILIATION_RISK_THRESHOLD: f64 = 0.7;
pub const LEAK_RISK_THRESHOLD: f64 = 0.8;
pub const GEO_RISK_THRESHOLD: f64 = 0.5;

pub const RESOLVED_GEO: &str = "Sao Paulo, BR";
pub const UNRESOLVED_GEO: &str = "Unknown";
