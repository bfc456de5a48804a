use crate::models::{CampaignTally, MetricsSnapshot, NamedEntries, WeekSeries};

const WEEKLY_LISTENING: WeekSeries = [20, 35, 50, 65, 80, 95, 110];
const FREE_TO_PREMIUM: WeekSeries = [8, 10, 14, 19, 24, 28, 32];

const REGIONS: NamedEntries<u32> = &[
    ("France", 10),
    ("Netherlands", 10),
    ("Germany", 10),
    ("UK", 31),
    ("US", 14),
];

const CAMPAIGNS: NamedEntries<CampaignTally> = &[
    ("versionA", CampaignTally { conversions: 360, users: 1000 }),
    ("versionB", CampaignTally { conversions: 460, users: 1000 }),
    ("audiobooksPlus", CampaignTally { conversions: 180, users: 800 }),
];

pub const METRICS_SNAPSHOT: MetricsSnapshot = MetricsSnapshot {
    weekly_listening: WEEKLY_LISTENING,
    free_to_premium: FREE_TO_PREMIUM,
    regions: REGIONS,
    campaign_data: CAMPAIGNS,
};

pub fn metrics_snapshot() -> MetricsSnapshot {
    METRICS_SNAPSHOT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_is_constant() {
        let first = serde_json::to_vec(&metrics_snapshot()).unwrap();
        let second = serde_json::to_vec(&metrics_snapshot()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn snapshot_contents() {
        let snapshot = metrics_snapshot();
        assert_eq!(snapshot.weekly_listening[6], 110);
        assert_eq!(snapshot.free_to_premium[0], 8);
        assert_eq!(snapshot.regions.len(), 5);
        assert!(snapshot.regions.contains(&("UK", 31)));
        assert!(snapshot
            .campaign_data
            .contains(&("audiobooksPlus", CampaignTally { conversions: 180, users: 800 })));
    }

    #[test]
    fn entries_serialize_in_declaration_order() {
        let body = serde_json::to_string(&metrics_snapshot()).unwrap();
        let position = |key: &str| body.find(&format!("\"{key}\"")).unwrap();
        assert!(position("France") < position("Netherlands"));
        assert!(position("Netherlands") < position("Germany"));
        assert!(position("versionB") < position("audiobooksPlus"));
    }

    #[test]
    fn conversions_never_exceed_users() {
        for (_, tally) in metrics_snapshot().campaign_data {
            assert!(tally.conversions <= tally.users);
        }
    }
}
