//! Trip request input type.

use serde::{Deserialize, Serialize};

use crate::error::TripsmithError;

/// Parameters for one itinerary generation.
///
/// This is also the payload shape a hosting HTTP endpoint would accept
/// (`{origin, destination, duration, budget?}`); the library performs the
/// same validation the upstream form did, so transport layers can forward
/// requests unchecked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripRequest {
    /// Departure location, free text (e.g. `日本`).
    pub origin: String,
    /// Destination, free text (e.g. `タイ`).
    pub destination: String,
    /// Trip length in days, 1 or more.
    pub duration: u32,
    /// Optional total budget in yen; when set, a second completion produces
    /// a budget breakdown appended to the raw plan.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<u64>,
}

impl TripRequest {
    /// Create a request without a budget.
    pub fn new(origin: impl Into<String>, destination: impl Into<String>, duration: u32) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            duration,
            budget: None,
        }
    }

    /// Attach a budget figure in yen.
    pub fn with_budget(mut self, yen: u64) -> Self {
        self.budget = Some(yen);
        self
    }

    /// Check the request is generatable: non-blank endpoints, at least one
    /// day.
    pub fn validate(&self) -> Result<(), TripsmithError> {
        if self.origin.trim().is_empty() {
            return Err(TripsmithError::InvalidRequest {
                reason: "origin must not be empty".into(),
            });
        }
        if self.destination.trim().is_empty() {
            return Err(TripsmithError::InvalidRequest {
                reason: "destination must not be empty".into(),
            });
        }
        if self.duration == 0 {
            return Err(TripsmithError::InvalidRequest {
                reason: "duration must be at least 1 day".into(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_request_passes() {
        assert!(TripRequest::new("日本", "タイ", 5).validate().is_ok());
    }

    #[test]
    fn blank_origin_is_rejected() {
        let err = TripRequest::new("   ", "タイ", 5).validate().unwrap_err();
        assert!(err.to_string().contains("origin"));
    }

    #[test]
    fn zero_duration_is_rejected() {
        let err = TripRequest::new("日本", "タイ", 0).validate().unwrap_err();
        assert!(err.to_string().contains("duration"));
    }

    #[test]
    fn budget_is_optional_in_json() {
        let req: TripRequest =
            serde_json::from_str(r#"{"origin":"日本","destination":"タイ","duration":5}"#).unwrap();
        assert_eq!(req.budget, None);

        let with: TripRequest = serde_json::from_str(
            r#"{"origin":"日本","destination":"タイ","duration":5,"budget":200000}"#,
        )
        .unwrap();
        assert_eq!(with.budget, Some(200_000));
    }
}
