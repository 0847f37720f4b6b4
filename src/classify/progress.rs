use serde::Serialize;

use crate::models::ProgressState;

/// Badge look for an enrolled course's progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeVariant {
    Default,
    Success,
    Outline,
}

pub fn classify_progress(progress: &ProgressState) -> BadgeVariant {
    match progress {
        ProgressState::Completed => BadgeVariant::Success,
        ProgressState::InProgress => BadgeVariant::Default,
        ProgressState::Behind | ProgressState::Other(_) => BadgeVariant::Outline,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_progress_states() {
        assert_eq!(classify_progress(&ProgressState::Completed), BadgeVariant::Success);
        assert_eq!(classify_progress(&ProgressState::InProgress), BadgeVariant::Default);
        assert_eq!(classify_progress(&ProgressState::Behind), BadgeVariant::Outline);
        assert_eq!(classify_progress(&ProgressState::parse("Paused")), BadgeVariant::Outline);
    }
}
