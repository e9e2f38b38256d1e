use crate::domain::constants::{
    AFFILIATION_RISK_THRESHOLD, GEO_RISK_THRESHOLD, LEAK_RISK_THRESHOLD, RESOLVED_GEO,
    THREAT_FEEDS, UNRESOLVED_GEO,
};
use crate::domain::models::EnrichmentProfile;
use rand::seq::IndexedRandom;
use rand::Rng;

/// Simulates querying threat feeds for one entity. Any input string is
/// accepted; the profile is synthetic and non-authoritative.
pub fn enrich(entity_type: &str, value: &str) -> EnrichmentProfile {
    let mut rng = rand::rng();
    let risk_score = rng.random::<f64>();
    profile_from_score(entity_type, value, risk_score, &mut rng)
}

/// Derives a profile from an already-drawn score. All three threshold gates
/// are strict; the rng is only consulted for the affiliation pick above the
/// affiliation threshold.
pub fn profile_from_score<R: Rng + ?Sized>(
    entity_type: &str,
    value: &str,
    risk_score: f64,
    rng: &mut R,
) -> EnrichmentProfile {
    let known_affiliations = if risk_score > AFFILIATION_RISK_THRESHOLD {
        THREAT_FEEDS
            .choose(rng)
            .map(|feed| feed.to_string())
            .into_iter()
            .collect()
    } else {
        Vec::new()
    };

    EnrichmentProfile {
        entity: value.to_string(),
        kind: entity_type.to_string(),
        risk_score,
        known_affiliations,
        leaked_creds: risk_score > LEAK_RISK_THRESHOLD,
        geo_location: if risk_score > GEO_RISK_THRESHOLD {
            RESOLVED_GEO.to_string()
        } else {
            UNRESOLVED_GEO.to_string()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn forced(score: f64) -> EnrichmentProfile {
        let mut rng = StdRng::seed_from_u64(7);
        profile_from_score("IP", "203.0.113.5", score, &mut rng)
    }

    #[test]
    fn high_score_triggers_every_derivation() {
        let profile = forced(0.9);
        assert_eq!(profile.entity, "203.0.113.5");
        assert_eq!(profile.kind, "IP");
        assert!(profile.leaked_creds);
        assert_eq!(profile.geo_location, "Sao Paulo, BR");
        assert_eq!(profile.known_affiliations.len(), 1);
        assert!(THREAT_FEEDS.contains(&profile.known_affiliations[0].as_str()));
    }

    #[test]
    fn low_score_yields_bare_profile() {
        let profile = forced(0.3);
        assert!(profile.known_affiliations.is_empty());
        assert!(!profile.leaked_creds);
        assert_eq!(profile.geo_location, "Unknown");
    }

    #[test]
    fn middle_score_resolves_geo_only() {
        let profile = forced(0.6);
        assert!(profile.known_affiliations.is_empty());
        assert!(!profile.leaked_creds);
        assert_eq!(profile.geo_location, "Sao Paulo, BR");
    }

    #[test]
    fn threshold_gates_are_strict() {
        assert_eq!(forced(0.5).geo_location, "Unknown");
        assert!(forced(0.7).known_affiliations.is_empty());
        assert!(!forced(0.8).leaked_creds);
    }

    #[test]
    fn random_draws_respect_invariants_over_many_trials() {
        for _ in 0..1_000 {
            let profile = enrich("WALLET", "bc1qexample");
            assert!((0.0..1.0).contains(&profile.risk_score));
            if profile.risk_score > AFFILIATION_RISK_THRESHOLD {
                assert_eq!(profile.known_affiliations.len(), 1);
                assert!(THREAT_FEEDS.contains(&profile.known_affiliations[0].as_str()));
            } else {
                assert!(profile.known_affiliations.is_empty());
            }
            assert_eq!(profile.leaked_creds, profile.risk_score > LEAK_RISK_THRESHOLD);
            if profile.risk_score > GEO_RISK_THRESHOLD {
                assert_eq!(profile.geo_location, "Sao Paulo, BR");
            } else {
                assert_eq!(profile.geo_location, "Unknown");
            }
        }
    }
}
