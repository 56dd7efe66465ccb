use serde::{Deserialize, Serialize};

use crate::model::entity::PaymentMethod;

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PaymentConfirmBody {
    pub plan_id: String,
    pub method: PaymentMethod,
}
