//! Insight adapter -- prediction service client and recommendation
//! mapping.
//!
//! Once all four categories are complete, their percentages are packed
//! into a normalized feature vector and POSTed to the prediction
//! endpoint. The response carries three binary flags which map
//! independently onto fixed recommendation blocks. Failures are never
//! fatal: they are logged and surfaced as "no insights available", and
//! the caller may retry.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::InsightConfig;
use crate::error::InsightError;

/// Normalized feature vector sent to the prediction service. The serde
/// field names are the wire contract.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeatureVector {
    #[serde(rename = "SOCIAL_ACTIVITY_SCORE")]
    pub social_activity: f64,
    #[serde(rename = "WORK_PRODUCTIVITY_SCORE")]
    pub work_productivity: f64,
    #[serde(rename = "SELF_CARE_SCORE")]
    pub self_care: f64,
    #[serde(rename = "STRESS_IMPACT")]
    pub stress_impact: f64,
}

impl FeatureVector {
    /// Build from category percentages (0..=100). Absent percentages
    /// default to 0, which cannot happen when completion is enforced
    /// upstream.
    pub fn from_percentages(
        social: Option<u8>,
        work: Option<u8>,
        self_care: Option<u8>,
        stress: Option<u8>,
    ) -> Self {
        let normalize = |pct: Option<u8>| pct.map_or(0.0, |p| f64::from(p) / 100.0);
        Self {
            social_activity: normalize(social),
            work_productivity: normalize(work),
            self_care: normalize(self_care),
            stress_impact: normalize(stress),
        }
    }
}

/// Binary flags returned by the prediction service. Extra response
/// fields are ignored; a missing flag makes the response malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PredictionFlags {
    pub cognitive_overload: u8,
    pub social_engagement_needs: u8,
    pub work_life_balance_adjust: u8,
}

/// A recommendation block shown to the user. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub title: &'static str,
    pub icon: &'static str,
    pub suggestions: &'static [&'static str],
}

const COGNITIVE_LOAD: Recommendation = Recommendation {
    title: "Cognitive Load Management",
    icon: "🧠",
    suggestions: &[
        "Consider breaking down tasks into smaller, manageable chunks",
        "Take regular breaks using the Pomodoro technique",
        "Practice mindfulness or meditation to clear your mind",
    ],
};

const SOCIAL_CONNECTION: Recommendation = Recommendation {
    title: "Social Connection Enhancement",
    icon: "👥",
    suggestions: &[
        "Schedule regular catch-ups with friends or colleagues",
        "Join community groups or social activities",
        "Engage more in team activities at work",
    ],
};

const WORK_LIFE_BALANCE: Recommendation = Recommendation {
    title: "Work-Life Balance Adjustment",
    icon: "⚖️",
    suggestions: &[
        "Set clear boundaries between work and personal time",
        "Schedule dedicated time for hobbies and relaxation",
        "Review and adjust your daily routine",
    ],
};

const MAINTAINING_WELLBEING: Recommendation = Recommendation {
    title: "Maintaining Well-being",
    icon: "✨",
    suggestions: &[
        "Continue your current balanced approach",
        "Monitor your well-being regularly",
        "Stay proactive about self-care",
    ],
};

/// Map prediction flags onto recommendation blocks. Flags are evaluated
/// independently (not mutually exclusive). Note the inverted polarity of
/// `social_engagement_needs`: the block fires when the flag is 0.
/// When nothing fires, exactly one fallback block is returned.
pub fn recommendations(flags: &PredictionFlags) -> Vec<Recommendation> {
    let mut out = Vec::new();
    if flags.cognitive_overload == 1 {
        out.push(COGNITIVE_LOAD);
    }
    if flags.social_engagement_needs == 0 {
        out.push(SOCIAL_CONNECTION);
    }
    if flags.work_life_balance_adjust == 1 {
        out.push(WORK_LIFE_BALANCE);
    }
    if out.is_empty() {
        out.push(MAINTAINING_WELLBEING);
    }
    out
}

/// Client for the external prediction endpoint.
///
/// One request at a time is expected (the submit action is only
/// reachable once completion holds); the only hardening beyond the
/// source behavior is a bounded timeout and a single retry on transient
/// network failure.
pub struct InsightClient {
    client: reqwest::Client,
    endpoint: String,
    retry_on_network_error: bool,
}

impl InsightClient {
    /// # Errors
    ///
    /// Returns [`InsightError::Network`] if the underlying HTTP client
    /// cannot be constructed.
    pub fn new(config: &InsightConfig) -> Result<Self, InsightError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            retry_on_network_error: config.retry_on_network_error,
        })
    }

    /// Submit the feature vector and await the prediction flags.
    ///
    /// # Errors
    ///
    /// - [`InsightError::Network`] on transport failure or timeout
    ///   (after at most one retry when enabled),
    /// - [`InsightError::Service`] on a non-success HTTP status,
    /// - [`InsightError::MalformedResponse`] when the body is not JSON
    ///   carrying all three flags.
    pub async fn predict(&self, features: &FeatureVector) -> Result<PredictionFlags, InsightError> {
        match self.send(features).await {
            Err(InsightError::Network(e))
                if self.retry_on_network_error && (e.is_timeout() || e.is_connect()) =>
            {
                tracing::warn!(error = %e, "prediction request failed, retrying once");
                self.send(features).await
            }
            other => other,
        }
    }

    /// Convenience: predict and map straight to recommendation blocks,
    /// logging the outcome.
    pub async fn fetch_recommendations(
        &self,
        features: &FeatureVector,
    ) -> Result<Vec<Recommendation>, InsightError> {
        tracing::debug!(endpoint = %self.endpoint, "submitting feature vector");
        match self.predict(features).await {
            Ok(flags) => Ok(recommendations(&flags)),
            Err(e) => {
                tracing::warn!(error = %e, "no insights available");
                Err(e)
            }
        }
    }

    async fn send(&self, features: &FeatureVector) -> Result<PredictionFlags, InsightError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(features)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(InsightError::Service {
                status: status.as_u16(),
            });
        }

        // Decode by hand so that any unexpected body shape maps to the
        // malformed-response error rather than a transport error.
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| InsightError::MalformedResponse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feature_vector_uses_wire_field_names() {
        let features = FeatureVector::from_percentages(Some(80), Some(70), Some(100), Some(20));
        let json = serde_json::to_value(features).unwrap();
        assert_eq!(json["SOCIAL_ACTIVITY_SCORE"], 0.8);
        assert_eq!(json["WORK_PRODUCTIVITY_SCORE"], 0.7);
        assert_eq!(json["SELF_CARE_SCORE"], 1.0);
        assert_eq!(json["STRESS_IMPACT"], 0.2);
    }

    #[test]
    fn absent_percentages_default_to_zero() {
        let features = FeatureVector::from_percentages(None, Some(50), None, None);
        assert_eq!(features.social_activity, 0.0);
        assert_eq!(features.work_productivity, 0.5);
        assert_eq!(features.stress_impact, 0.0);
    }

    #[test]
    fn social_engagement_polarity_is_inverted() {
        // social_engagement_needs = 1 must NOT fire the social block.
        let flags = PredictionFlags {
            cognitive_overload: 1,
            social_engagement_needs: 1,
            work_life_balance_adjust: 0,
        };
        let recs = recommendations(&flags);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].title, "Cognitive Load Management");
    }

    #[test]
    fn all_blocks_can_fire_together() {
        let flags = PredictionFlags {
            cognitive_overload: 1,
            social_engagement_needs: 0,
            work_life_balance_adjust: 1,
        };
        let titles: Vec<_> = recommendations(&flags).iter().map(|r| r.title).collect();
        assert_eq!(
            titles,
            vec![
                "Cognitive Load Management",
                "Social Connection Enhancement",
                "Work-Life Balance Adjustment",
            ]
        );
    }

    #[test]
    fn fallback_when_no_condition_fires() {
        let flags = PredictionFlags {
            cognitive_overload: 0,
            social_engagement_needs: 1,
            work_life_balance_adjust: 0,
        };
        let recs = recommendations(&flags);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].title, "Maintaining Well-being");
    }

    #[test]
    fn flags_ignore_extra_response_fields() {
        let flags: PredictionFlags = serde_json::from_str(
            r#"{"cognitive_overload":1,"social_engagement_needs":0,
                "work_life_balance_adjust":1,"model_version":"2024-05"}"#,
        )
        .unwrap();
        assert_eq!(flags.cognitive_overload, 1);
    }

    #[test]
    fn missing_flag_fails_to_parse() {
        let result: Result<PredictionFlags, _> =
            serde_json::from_str(r#"{"cognitive_overload":1}"#);
        assert!(result.is_err());
    }
}
