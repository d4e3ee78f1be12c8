use serde::de::Error as _;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const FUNCTIONALITY_MAX: u8 = 30;
pub const CODE_QUALITY_MAX: u8 = 30;
pub const DOCUMENTATION_MAX: u8 = 20;
pub const INNOVATION_MAX: u8 = 10;
pub const UIUX_MAX: u8 = 10;

pub const TOTAL_MAX: u8 = 100;

pub const DEFAULT_FEEDBACK: &str = "No feedback provided";

/// Untrusted score payload as decoded from the completion reply.
///
/// Missing components are treated as zero. A `total` field reported by the
/// model is deliberately not decoded; the total is always recomputed from
/// the clamped components.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawScoreReply {
    #[serde(default)]
    pub functionality: Option<i64>,
    #[serde(default)]
    pub code_quality: Option<i64>,
    #[serde(default)]
    pub documentation: Option<i64>,
    #[serde(default)]
    pub innovation: Option<i64>,
    #[serde(default)]
    pub uiux: Option<i64>,
    #[serde(default)]
    pub feedback: Option<String>,
}

impl RawScoreReply {
    /// Decodes a completion reply, accepting only a top-level JSON object.
    ///
    /// The derived struct decoder alone would also accept a JSON array
    /// positionally, turning a wrong-shape reply into arbitrary component
    /// values instead of a decode failure.
    pub fn from_json_str(content: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(content)?;
        if !value.is_object() {
            return Err(serde_json::Error::custom("reply is not a JSON object"));
        }
        serde_json::from_value(value)
    }
}

/// Five-part rubric score with derived total and free-text feedback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub functionality: u8,
    pub code_quality: u8,
    pub documentation: u8,
    pub innovation: u8,
    pub uiux: u8,
    pub total: u8,
    pub feedback: String,
}

fn clamp_component(raw: Option<i64>, bound: u8) -> u8 {
    raw.unwrap_or(0).clamp(0, i64::from(bound)) as u8
}

impl ScoreBreakdown {
    /// Clamps every component into its declared bound, then sums the clamped
    /// values into the total. Clamping always happens before the sum.
    pub fn from_raw(reply: RawScoreReply) -> Self {
        let functionality = clamp_component(reply.functionality, FUNCTIONALITY_MAX);
        let code_quality = clamp_component(reply.code_quality, CODE_QUALITY_MAX);
        let documentation = clamp_component(reply.documentation, DOCUMENTATION_MAX);
        let innovation = clamp_component(reply.innovation, INNOVATION_MAX);
        let uiux = clamp_component(reply.uiux, UIUX_MAX);

        let total = functionality + code_quality + documentation + innovation + uiux;

        let feedback = reply
            .feedback
            .filter(|text| !text.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FEEDBACK.to_string());

        Self {
            functionality,
            code_quality,
            documentation,
            innovation,
            uiux,
            total,
            feedback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_components_are_clamped_before_summing() {
        let reply = RawScoreReply {
            functionality: Some(95),
            code_quality: Some(-12),
            documentation: Some(20),
            innovation: Some(11),
            uiux: Some(3),
            feedback: Some("solid".to_string()),
        };

        let score = ScoreBreakdown::from_raw(reply);
        assert_eq!(score.functionality, 30);
        assert_eq!(score.code_quality, 0);
        assert_eq!(score.documentation, 20);
        assert_eq!(score.innovation, 10);
        assert_eq!(score.uiux, 3);
        assert_eq!(score.total, 30 + 0 + 20 + 10 + 3);
    }

    #[test]
    fn missing_components_count_as_zero() {
        let score = ScoreBreakdown::from_raw(RawScoreReply::default());
        assert_eq!(score.total, 0);
        assert_eq!(score.feedback, DEFAULT_FEEDBACK);
    }

    #[test]
    fn upstream_total_is_ignored() {
        let reply: RawScoreReply = serde_json::from_str(
            r#"{"functionality":10,"codeQuality":10,"documentation":5,"innovation":5,"uiux":5,"total":99,"feedback":"ok"}"#,
        )
        .expect("parse reply");

        let score = ScoreBreakdown::from_raw(reply);
        assert_eq!(score.total, 35);
    }

    #[test]
    fn blank_feedback_falls_back_to_placeholder() {
        let reply = RawScoreReply {
            feedback: Some("   ".to_string()),
            ..RawScoreReply::default()
        };
        assert_eq!(ScoreBreakdown::from_raw(reply).feedback, DEFAULT_FEEDBACK);
    }

    #[test]
    fn wrong_shape_reply_fails_to_decode() {
        assert!(RawScoreReply::from_json_str(r#"[1,2,3]"#).is_err());
        assert!(RawScoreReply::from_json_str(r#""great""#).is_err());
        assert!(RawScoreReply::from_json_str("17").is_err());
        assert!(RawScoreReply::from_json_str("not json at all").is_err());
    }

    #[test]
    fn object_reply_decodes_through_shape_check() {
        let raw = RawScoreReply::from_json_str(r#"{"functionality": 12, "feedback": "ok"}"#)
            .expect("decode object reply");
        assert_eq!(raw.functionality, Some(12));
        assert_eq!(raw.feedback.as_deref(), Some("ok"));

        let empty = RawScoreReply::from_json_str("{}").expect("decode empty object");
        assert_eq!(ScoreBreakdown::from_raw(empty).total, 0);
    }

    #[test]
    fn breakdown_serializes_with_wire_names() {
        let score = ScoreBreakdown::from_raw(RawScoreReply {
            code_quality: Some(18),
            ..RawScoreReply::default()
        });
        let json = serde_json::to_value(&score).expect("serialize breakdown");
        assert_eq!(json.get("codeQuality").and_then(serde_json::Value::as_u64), Some(18));
        assert_eq!(json.get("total").and_then(serde_json::Value::as_u64), Some(18));
    }
}
