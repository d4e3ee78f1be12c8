/// Host-authored challenge text a submission is graded against.
#[derive(Debug, Clone)]
pub struct ChallengeBrief {
    pub title: String,
    pub description: String,
}

impl ChallengeBrief {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}
