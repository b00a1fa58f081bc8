pub mod billing;
pub mod subscription;

pub use billing::order::{BillingPlan, PaymentOrderRequest};
pub use billing::signature::verify_payment_signature;
pub use subscription::limits::TierLimits;
pub use subscription::record::{
    PlanTier, StoredSubscriptionRecord, SubscriptionRecord, SubscriptionStatus,
};
pub use subscription::resolver::{
    resolve_subscription, ResolvedSubscriptionState, GRACE_PERIOD_DAYS,
};
