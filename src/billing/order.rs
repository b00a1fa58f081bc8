use serde::{Deserialize, Serialize};
use time::{Date, Duration};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingPlan {
    PremiumMonthly,
    PremiumYearly,
}

impl BillingPlan {
    /// Price in minor currency units (cents/paise).
    pub fn amount_minor(&self) -> u64 {
        match self {
            BillingPlan::PremiumMonthly => 49_900,
            BillingPlan::PremiumYearly => 499_900,
        }
    }

    pub fn duration_days(&self) -> i64 {
        match self {
            BillingPlan::PremiumMonthly => 30,
            BillingPlan::PremiumYearly => 365,
        }
    }

    /// Expiry date of a plan purchased or renewed on `start`.
    pub fn expiry_after(&self, start: Date) -> Date {
        start.saturating_add(Duration::days(self.duration_days()))
    }
}

/// The order payload handed to the payment provider. The provider call
/// itself happens elsewhere; this only assembles the request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentOrderRequest {
    pub amount: u64,
    pub currency: String,
    pub receipt: String,
}

impl PaymentOrderRequest {
    pub fn for_plan(plan: BillingPlan, currency: &str) -> Self {
        Self {
            amount: plan.amount_minor(),
            currency: currency.to_string(),
            receipt: new_receipt_id(),
        }
    }
}

fn new_receipt_id() -> String {
    format!("pf_{}", Uuid::new_v4().simple())
}
