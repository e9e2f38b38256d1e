use crate::services::enrich::enrich;
use crate::services::output::print_one;

pub fn handle_enrich(json: bool, entity_type: &str, value: &str) -> anyhow::Result<()> {
    let profile = enrich(entity_type, value);
    print_one(json, profile, |p| {
        let affiliations = if p.known_affiliations.is_empty() {
            "-".to_string()
        } else {
            p.known_affiliations.join(",")
        };
        format!(
            "{}\t{}\trisk={:.2}\tgeo={}\tleaked={}\taffiliations={}",
            p.kind, p.entity, p.risk_score, p.geo_location, p.leaked_creds, affiliations
        )
    })
}
