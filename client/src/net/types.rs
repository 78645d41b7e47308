//! Shared DTOs for the client/backend REST boundary.
//!
//! DESIGN
//! ======
//! These types intentionally mirror the backend response payloads so serde
//! round-trips stay lossless and page code can remain schema-driven. Every
//! response body arrives inside the fixed [`ApiEnvelope`] wrapper.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Consistent envelope wrapped around every backend response body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    /// Whether the operation succeeded.
    pub success: bool,
    /// Human-readable status message.
    pub message: String,
    /// The operation payload; absent on pure-acknowledgement responses.
    #[serde(default)]
    pub data: Option<T>,
    /// Field-level validation errors, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

/// A page of items plus pagination bookkeeping.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    /// Total matching rows, across all pages.
    pub total: u64,
    pub skip: u64,
    pub limit: u64,
}

/// Account role, checked once at session-settle time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    /// Wire string as the backend serializes it.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }
}

/// An authenticated user as returned by the auth endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Account email address.
    pub email: String,
    /// Account role; gates the admin pages.
    #[serde(default)]
    pub role: Role,
    /// ISO 8601 creation timestamp.
    pub created_at: String,
}

/// Login/registration payload: a fresh bearer token plus the profile.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthPayload {
    /// Opaque bearer token; presence implies "authenticated".
    pub access_token: String,
    pub user: User,
}

/// Partial profile update sent to `PUT /auth/me`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// An expense transaction as returned by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique transaction identifier (UUID string).
    pub id: String,
    /// Owning user (UUID string).
    pub user_id: String,
    /// Positive amount in dollars.
    pub amount: f64,
    /// Free-text description; the categoriser's input.
    pub description: String,
    /// Assigned category (user-picked or model-predicted).
    pub category: String,
    /// Whether the fraud model flagged this transaction.
    pub is_flagged: bool,
    /// Anomaly score in `[0, 1]`; flagged above the server-side threshold.
    pub fraud_score: f64,
    /// Optional private note (stored encrypted server-side).
    pub note: Option<String>,
    /// ISO 8601 creation timestamp.
    pub created_at: String,
    /// ISO 8601 last-update timestamp.
    pub updated_at: String,
}

/// Payload for creating a transaction. A `None` category asks the backend
/// to auto-categorise from the description.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionCreate {
    pub amount: f64,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Partial transaction update; absent fields are left untouched.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Aggregated spending statistics for the overview and analytics pages.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsSummary {
    /// All-time spending total in dollars.
    pub total_spending: f64,
    /// Current-month spending total in dollars.
    pub monthly_spending: f64,
    /// All-time transaction count.
    pub transaction_count: u64,
    /// Count of fraud-flagged transactions.
    pub flagged_count: u64,
    /// Spending total per category.
    pub category_breakdown: BTreeMap<String, f64>,
    /// Per-month totals, oldest first.
    pub monthly_trend: Vec<MonthlyTrendPoint>,
}

/// One month of aggregated spending.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTrendPoint {
    pub year: i32,
    /// Calendar month, 1-12.
    pub month: u32,
    /// Spending total for the month in dollars.
    pub total: f64,
    /// Transaction count for the month.
    pub count: u64,
}

/// Next-month spending prediction from the backend regression model.
/// Both fields are `None` when the model lacks enough history.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub predicted_spending: Option<f64>,
    /// Model confidence in `[0, 1]`.
    pub confidence: Option<f64>,
}

/// One audited account action.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActivityLogEntry {
    /// Unique log identifier (UUID string).
    pub id: String,
    /// Acting user (UUID string).
    pub user_id: String,
    /// Action verb (e.g. `"CREATE"`, `"LOGIN"`).
    pub action: String,
    /// Affected resource collection (e.g. `"transactions"`).
    pub resource: String,
    /// Affected resource identifier, if any.
    pub resource_id: Option<String>,
    /// Client IP recorded for the action, if known.
    pub ip_address: Option<String>,
    /// Free-text details, if any.
    pub details: Option<String>,
    /// ISO 8601 creation timestamp.
    pub created_at: String,
}

/// A user row on the admin management page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AdminUser {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Role,
    pub created_at: String,
}
