use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::repo::ResourceTyped;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Card,
    Paypal,
}

#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Plan {
    id: String,
    name: String,
    /// Price in USD cents
    price_cents: u32,
    description: String,
    features: Vec<String>,
    recommended: bool,
}

impl ResourceTyped for Plan {
    fn get_resource_type() -> crate::model::ResourceType {
        crate::model::ResourceType::Plan
    }
}

impl Plan {
    fn new(
        id: &str,
        name: &str,
        price_cents: u32,
        description: &str,
        features: &[&str],
        recommended: bool,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            price_cents,
            description: description.to_string(),
            features: features.iter().map(|f| f.to_string()).collect(),
            recommended,
        }
    }

    /// Plans offered on the paywall.
    pub fn catalog() -> Vec<Self> {
        vec![
            Plan::new(
                "basic",
                "Basic",
                4999,
                "Access to every premium module for 1 month",
                &[
                    "Premium content",
                    "Completion certificate",
                    "Email support",
                ],
                false,
            ),
            Plan::new(
                "complete",
                "Complete",
                9999,
                "Access to every premium module for 3 months",
                &[
                    "Premium content",
                    "Completion certificate",
                    "Email support",
                    "Priority project review",
                    "Monthly members-only webinars",
                ],
                true,
            ),
            Plan::new(
                "business",
                "Business",
                19999,
                "Unlimited access for teams of up to 5 people",
                &[
                    "Everything in Complete",
                    "Access for 5 users",
                    "Personal mentoring",
                    "Content tailored to your industry",
                    "Priority support",
                ],
                false,
            ),
        ]
    }

    pub fn find(plan_id: &str) -> Option<Self> {
        Self::catalog().into_iter().find(|p| p.id == plan_id)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price_cents(&self) -> u32 {
        self.price_cents
    }

    pub fn recommended(&self) -> bool {
        self.recommended
    }
}

/// Proof that the payment collaborator confirmed a purchase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PaymentReceipt {
    plan_id: String,
    method: PaymentMethod,
    amount_cents: u32,
    confirmed_at: DateTime<Utc>,
}

impl ResourceTyped for PaymentReceipt {
    fn get_resource_type() -> crate::model::ResourceType {
        crate::model::ResourceType::Payment
    }
}

impl PaymentReceipt {
    pub fn new(plan: &Plan, method: PaymentMethod) -> Self {
        Self {
            plan_id: plan.id.clone(),
            method,
            amount_cents: plan.price_cents,
            confirmed_at: Utc::now(),
        }
    }

    pub fn plan_id(&self) -> &str {
        &self.plan_id
    }

    pub fn method(&self) -> PaymentMethod {
        self.method
    }

    pub fn amount_cents(&self) -> u32 {
        self.amount_cents
    }

    pub fn confirmed_at(&self) -> DateTime<Utc> {
        self.confirmed_at
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn catalog_has_one_recommended_plan() {
        let plans = Plan::catalog();
        assert_eq!(plans.len(), 3);
        assert_eq!(plans.iter().filter(|p| p.recommended()).count(), 1);
        assert_eq!(Plan::find("complete").unwrap().price_cents(), 9999);
        assert!(Plan::find("gold").is_none());
    }

    #[test]
    fn receipt_copies_plan_price() {
        let plan = Plan::find("basic").unwrap();
        let receipt = PaymentReceipt::new(&plan, PaymentMethod::Paypal);
        assert_eq!(receipt.plan_id(), "basic");
        assert_eq!(receipt.amount_cents(), 4999);
        assert_eq!(receipt.method(), PaymentMethod::Paypal);
    }
}
