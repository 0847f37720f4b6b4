use serde::Serialize;

use super::Hue;
use crate::models::ActivityKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityIcon {
    Document,
    Message,
    Book,
    Alert,
}

impl ActivityIcon {
    pub fn name(self) -> &'static str {
        match self {
            ActivityIcon::Document => "document",
            ActivityIcon::Message => "message",
            ActivityIcon::Book => "book",
            ActivityIcon::Alert => "alert",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActivityPresentation {
    pub icon: ActivityIcon,
    pub color: Hue,
}

pub fn classify_activity(kind: &ActivityKind) -> ActivityPresentation {
    let (icon, color) = match kind {
        ActivityKind::Submission => (ActivityIcon::Document, Hue::Blue),
        ActivityKind::Discussion => (ActivityIcon::Message, Hue::Green),
        ActivityKind::Course => (ActivityIcon::Book, Hue::Purple),
        ActivityKind::Deadline => (ActivityIcon::Alert, Hue::Red),
        ActivityKind::Other(_) => (ActivityIcon::Document, Hue::Gray),
    };
    ActivityPresentation { icon, color }
}

pub fn classify_activity_label(label: &str) -> ActivityPresentation {
    classify_activity(&ActivityKind::parse(label))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_types_map_to_icon_and_color() {
        let cases = [
            ("submission", ActivityIcon::Document, Hue::Blue),
            ("discussion", ActivityIcon::Message, Hue::Green),
            ("course", ActivityIcon::Book, Hue::Purple),
            ("deadline", ActivityIcon::Alert, Hue::Red),
        ];
        for (label, icon, color) in cases {
            assert_eq!(
                classify_activity_label(label),
                ActivityPresentation { icon, color },
                "type {label}"
            );
        }
    }

    #[test]
    fn unknown_types_fall_back_to_gray_document() {
        let fallback = ActivityPresentation {
            icon: ActivityIcon::Document,
            color: Hue::Gray,
        };
        for label in ["bogus", "", "Deadline", "grade"] {
            assert_eq!(classify_activity_label(label), fallback, "type {label:?}");
        }
    }

    #[test]
    fn classification_is_repeatable() {
        assert_eq!(classify_activity_label("course"), classify_activity_label("course"));
        assert_eq!(classify_activity_label("nope"), classify_activity_label("nope"));
    }

    #[test]
    fn deadline_is_red_alert() {
        let p = classify_activity_label("deadline");
        assert_eq!(p.icon.name(), "alert");
        assert_eq!(p.color.name(), "red");
    }
}
