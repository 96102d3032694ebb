use serde::Serialize;

use crate::domain::models::booking::BookingStatus;
use crate::error::AppError;

/// Outgoing status update. The only rule the client enforces is that a
/// cancellation carries a reason and nothing else does; which transitions
/// are legal is the backend's call.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusChange {
    status: BookingStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    cancellation_reason: Option<String>,
}

impl StatusChange {
    pub fn new(status: BookingStatus, reason: Option<&str>) -> Result<Self, AppError> {
        let reason = reason.map(str::trim).filter(|r| !r.is_empty());

        if status == BookingStatus::Cancelled {
            let reason = reason
                .ok_or_else(|| AppError::Validation("cancellation reason required".to_string()))?;
            return Ok(Self {
                status,
                cancellation_reason: Some(reason.to_string()),
            });
        }

        Ok(Self {
            status,
            cancellation_reason: None,
        })
    }

    pub fn status(&self) -> BookingStatus {
        self.status
    }

    pub fn reason(&self) -> Option<&str> {
        self.cancellation_reason.as_deref()
    }
}
