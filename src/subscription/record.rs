use serde::{Deserialize, Serialize};
use time::format_description::well_known::Rfc3339;
use time::{format_description, Date, OffsetDateTime};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanTier {
    Free,
    Premium,
}

impl PlanTier {
    pub fn is_paid(&self) -> bool {
        matches!(self, PlanTier::Premium)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    Created,
    Active,
    Cancelled,
    Expired,
    #[serde(other)]
    Unknown,
}

impl SubscriptionStatus {
    /// Only `active` counts; every other stored value is non-active.
    pub fn is_active(&self) -> bool {
        matches!(self, SubscriptionStatus::Active)
    }
}

/// A user's subscription as held in memory after the storage-boundary
/// date strings have been parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionRecord {
    pub tier: PlanTier,
    pub status: SubscriptionStatus,
    pub plan_start_date: Option<Date>,
    pub plan_expiry_date: Option<Date>,
}

/// Wire form of a subscription record as the store returns it, with dates
/// as ISO-8601 strings (either full RFC 3339 timestamps or plain dates).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredSubscriptionRecord {
    pub tier: PlanTier,
    pub status: SubscriptionStatus,
    #[serde(default)]
    pub plan_start_date: Option<String>,
    #[serde(default)]
    pub plan_expiry_date: Option<String>,
}

fn parse_stored_date(s: &str) -> Result<Date, String> {
    if let Ok(dt) = OffsetDateTime::parse(s, &Rfc3339) {
        return Ok(dt.date());
    }
    let date_only = format_description::parse("[year]-[month]-[day]")
        .map_err(|e| format!("invalid date format description: {e}"))?;
    Date::parse(s, &date_only).map_err(|e| format!("invalid date: {e}"))
}

impl StoredSubscriptionRecord {
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("invalid subscription record: {e}"))
    }

    pub fn into_record(self) -> Result<SubscriptionRecord, String> {
        let plan_start_date = self
            .plan_start_date
            .as_deref()
            .map(parse_stored_date)
            .transpose()?;
        let plan_expiry_date = self
            .plan_expiry_date
            .as_deref()
            .map(parse_stored_date)
            .transpose()?;

        Ok(SubscriptionRecord {
            tier: self.tier,
            status: self.status,
            plan_start_date,
            plan_expiry_date,
        })
    }
}
