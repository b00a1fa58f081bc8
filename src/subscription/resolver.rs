use serde::Serialize;
use time::{Date, Duration};

use super::record::{PlanTier, SubscriptionRecord};

/// Calendar days a lapsed premium subscriber keeps the grace flag,
/// inclusive of the boundary day.
pub const GRACE_PERIOD_DAYS: i64 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedSubscriptionState {
    pub effective_tier: PlanTier,
    pub is_in_grace_period: bool,
    pub days_left_in_grace_period: Option<u8>,
}

impl ResolvedSubscriptionState {
    fn free() -> Self {
        Self {
            effective_tier: PlanTier::Free,
            is_in_grace_period: false,
            days_left_in_grace_period: None,
        }
    }
}

/// Derives the effective tier from a stored subscription record and the
/// current date. Pure: no clock reads, no I/O; callers pass `today`
/// explicitly. Every input maps to a defined output.
///
/// Date comparisons work on whole calendar days, so time of day never
/// moves a tier boundary.
pub fn resolve_subscription(
    record: Option<&SubscriptionRecord>,
    today: Date,
) -> ResolvedSubscriptionState {
    let Some(record) = record else {
        return ResolvedSubscriptionState::free();
    };

    if record.tier != PlanTier::Premium || !record.status.is_active() {
        return ResolvedSubscriptionState::free();
    }

    // An active premium record without an expiry date cannot be confirmed,
    // so it degrades to free with no grace data.
    let Some(expiry) = record.plan_expiry_date else {
        return ResolvedSubscriptionState::free();
    };

    if expiry > today {
        return ResolvedSubscriptionState {
            effective_tier: PlanTier::Premium,
            is_in_grace_period: false,
            days_left_in_grace_period: None,
        };
    }

    // Premium access lapses on the expiry day itself; the grace window runs
    // through expiry + GRACE_PERIOD_DAYS, including that final day.
    let grace_end = expiry.saturating_add(Duration::days(GRACE_PERIOD_DAYS));
    if grace_end >= today {
        let days_left = (grace_end - today).whole_days().max(0) as u8;
        return ResolvedSubscriptionState {
            effective_tier: PlanTier::Free,
            is_in_grace_period: true,
            days_left_in_grace_period: Some(days_left),
        };
    }

    ResolvedSubscriptionState::free()
}
