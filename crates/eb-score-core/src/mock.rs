use rand::Rng;

use crate::breakdown::ScoreBreakdown;

pub const MOCK_FEEDBACK: &str = "**Mock Evaluation** (completion API unavailable)\n\n\
This is a simulated score for demonstration purposes. The project shows promise \
with solid implementation. Consider improving documentation and adding more \
innovative features to boost your score.\n\n\
**Strengths:**\n- Good code structure\n- Working functionality\n- Clean UI design\n\n\
**Areas for Improvement:**\n- Add more comprehensive documentation\n- Implement \
additional features\n- Enhance error handling";

/// Draws a plausible stand-in score from fixed per-component ranges.
///
/// Used when no completion credential is configured, or when the live call
/// fails recoverably. The total always lands in [62, 100].
pub fn mock_score() -> ScoreBreakdown {
    let mut rng = rand::thread_rng();

    let functionality = rng.gen_range(20..=30u8);
    let code_quality = rng.gen_range(20..=30u8);
    let documentation = rng.gen_range(12..=20u8);
    let innovation = rng.gen_range(5..=10u8);
    let uiux = rng.gen_range(5..=10u8);

    let total = functionality + code_quality + documentation + innovation + uiux;

    ScoreBreakdown {
        functionality,
        code_quality,
        documentation,
        innovation,
        uiux,
        total,
        feedback: MOCK_FEEDBACK.to_string(),
    }
}
