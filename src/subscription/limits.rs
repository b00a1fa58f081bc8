use serde::{Deserialize, Serialize};

use super::record::PlanTier;

/// Per-tier caps on tracked records. `None` means unlimited.
///
/// Limits gate by the effective tier from the resolver, not the raw
/// stored tier, so a lapsed premium account drops back to free caps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierLimits {
    pub max_companies: Option<u32>,
    pub max_contacts: Option<u32>,
    pub max_job_openings: Option<u32>,
}

impl TierLimits {
    pub fn for_tier(tier: PlanTier) -> Self {
        match tier {
            PlanTier::Free => Self {
                max_companies: Some(10),
                max_contacts: Some(25),
                max_job_openings: Some(10),
            },
            PlanTier::Premium => Self {
                max_companies: None,
                max_contacts: None,
                max_job_openings: None,
            },
        }
    }

    pub fn companies_limit_reached(&self, current: u32) -> bool {
        limit_reached(self.max_companies, current)
    }

    pub fn contacts_limit_reached(&self, current: u32) -> bool {
        limit_reached(self.max_contacts, current)
    }

    pub fn job_openings_limit_reached(&self, current: u32) -> bool {
        limit_reached(self.max_job_openings, current)
    }
}

fn limit_reached(max: Option<u32>, current: u32) -> bool {
    max.map(|max| current >= max).unwrap_or(false)
}
