use serde::{ser::SerializeMap, Deserialize, Serialize, Serializer};

/// One value per weekday, Monday first.
pub type WeekSeries = [u32; 7];

/// Named entries serialized as a JSON object in declaration order.
pub type NamedEntries<V> = &'static [(&'static str, V)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignTally {
    pub conversions: u64,
    pub users: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSnapshot {
    pub weekly_listening: WeekSeries,
    pub free_to_premium: WeekSeries,
    #[serde(serialize_with = "serialize_entries")]
    pub regions: NamedEntries<u32>,
    #[serde(serialize_with = "serialize_entries")]
    pub campaign_data: NamedEntries<CampaignTally>,
}

fn serialize_entries<V, S>(entries: &NamedEntries<V>, serializer: S) -> Result<S::Ok, S::Error>
where
    V: Serialize + 'static,
    S: Serializer,
{
    let mut map = serializer.serialize_map(Some(entries.len()))?;
    for (name, value) in entries.iter() {
        map.serialize_entry(name, value)?;
    }
    map.end()
}

#[derive(Debug, Default, Deserialize)]
pub struct InsightRequest {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct InsightReply {
    pub reply: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insight_request_defaults_missing_message() {
        let request: InsightRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.message, "");
    }

    #[test]
    fn snapshot_keeps_entry_order() {
        let snapshot = MetricsSnapshot {
            weekly_listening: [0; 7],
            free_to_premium: [0; 7],
            regions: &[("Zeta", 1), ("Alpha", 2)],
            campaign_data: &[],
        };
        let body = serde_json::to_string(&snapshot).unwrap();
        assert_eq!(
            body,
            r#"{"weeklyListening":[0,0,0,0,0,0,0],"freeToPremium":[0,0,0,0,0,0,0],"regions":{"Zeta":1,"Alpha":2},"campaignData":{}}"#
        );
    }
}
