//! Client-related types shared between server and client
//!
//! Request/response DTOs used in API communication. The server wraps every
//! JSON body in the `{code, message, data}` envelope; these are the `data`
//! payloads and the request bodies.

use serde::{Deserialize, Serialize};
use rust_decimal::Decimal;

use crate::car::StatusCounts;
use crate::employee::EmployeeInfo;

// =============================================================================
// Auth API DTOs
// =============================================================================

/// Login request: a self-declared name and role, no credentials
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub name: String,
    /// Parsed into [`crate::employee::Role`] at the boundary
    pub role: String,
}

/// Login response data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Opaque session token, sent back as `Authorization: Bearer <token>`
    pub token: String,
    pub employee: EmployeeInfo,
}

// =============================================================================
// Car API DTOs
// =============================================================================

/// Status update request: the desired target status as text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusUpdateRequest {
    pub status: String,
}

/// Payment request
///
/// `amount` stays a raw JSON value so the domain decides what counts as a
/// valid amount (`150`, `"150.00"` are accepted; `"abc"` is rejected with a
/// validation error instead of a deserialize failure).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentRequest {
    pub amount: serde_json::Value,
}

/// Per-status counts plus today's revenue, for lightweight polling
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryResponse {
    #[serde(flatten)]
    pub counts: StatusCounts,
    pub today_revenue: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payment_amount_accepts_numbers_and_strings() {
        let req: PaymentRequest = serde_json::from_str(r#"{"amount": 150.0}"#).unwrap();
        assert!(req.amount.is_number());

        let req: PaymentRequest = serde_json::from_str(r#"{"amount": "abc"}"#).unwrap();
        assert!(req.amount.is_string());
    }

    #[test]
    fn summary_flattens_counts() {
        let summary = SummaryResponse {
            counts: StatusCounts {
                washing: 2,
                awaiting_payment: 1,
                finished: 3,
                total: 6,
            },
            today_revenue: Decimal::new(45050, 2),
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["washing"], 2);
        assert_eq!(json["total"], 6);
        assert_eq!(json["today_revenue"], "450.50");
    }
}
