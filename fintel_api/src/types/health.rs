use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Liveness payload from `/health/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(with = "crate::types::timestamp")]
    pub timestamp: DateTime<Utc>,
    pub service: String,
}

/// Readiness payload from `/health/ready`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReadinessStatus {
    pub status: String,
    pub database: String,
    #[serde(with = "crate::types::timestamp")]
    pub timestamp: DateTime<Utc>,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

impl ReadinessStatus {
    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
