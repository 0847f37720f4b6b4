use serde::Serialize;

use super::Tone;
use crate::models::CourseStatus;

/// Tokens for the colored dot and the pill next to a course code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusPresentation {
    pub indicator: Tone,
    pub badge: Tone,
}

impl StatusPresentation {
    const fn uniform(tone: Tone) -> Self {
        Self {
            indicator: tone,
            badge: tone,
        }
    }
}

pub fn classify_status(status: &CourseStatus) -> StatusPresentation {
    match status {
        CourseStatus::Open => StatusPresentation::uniform(Tone::Positive),
        CourseStatus::ClosingSoon => StatusPresentation::uniform(Tone::Warning),
        CourseStatus::Full => StatusPresentation::uniform(Tone::Negative),
        CourseStatus::Other(_) => StatusPresentation::uniform(Tone::Neutral),
    }
}

pub fn classify_status_label(label: &str) -> StatusPresentation {
    classify_status(&CourseStatus::parse(label))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_statuses_map_to_their_tones() {
        let cases = [
            ("Open", Tone::Positive),
            ("Closing Soon", Tone::Warning),
            ("Full", Tone::Negative),
        ];
        for (label, tone) in cases {
            let presentation = classify_status_label(label);
            assert_eq!(presentation.indicator, tone, "indicator for {label}");
            assert_eq!(presentation.badge, tone, "badge for {label}");
        }
    }

    #[test]
    fn unknown_statuses_are_neutral() {
        for label in ["Unknown", "", "open", "FULL", "Closing  Soon", "🚧"] {
            assert_eq!(
                classify_status_label(label),
                StatusPresentation::uniform(Tone::Neutral),
                "label {label:?}"
            );
        }
    }

    #[test]
    fn classification_is_repeatable() {
        for label in ["Open", "Full", "whatever"] {
            assert_eq!(classify_status_label(label), classify_status_label(label));
        }
    }

    #[test]
    fn open_is_positive() {
        let p = classify_status_label("Open");
        assert_eq!((p.indicator, p.badge), (Tone::Positive, Tone::Positive));
    }

    #[test]
    fn full_is_negative() {
        let p = classify_status_label("Full");
        assert_eq!((p.indicator, p.badge), (Tone::Negative, Tone::Negative));
    }
}
