//! Concrete Tailwind classes for the abstract presentation tokens.

use crate::classify::{ActivityIcon, BadgeVariant, Hue, Tone};

/// Small colored dot beside a course code.
pub fn indicator_class(tone: Tone) -> &'static str {
    match tone {
        Tone::Positive => "bg-green-500",
        Tone::Warning => "bg-yellow-500",
        Tone::Negative => "bg-red-500",
        Tone::Neutral => "bg-gray-500",
    }
}

/// Status pill: light background, dark text.
pub fn badge_class(tone: Tone) -> &'static str {
    match tone {
        Tone::Positive => "bg-green-100 text-green-800",
        Tone::Warning => "bg-yellow-100 text-yellow-800",
        Tone::Negative => "bg-red-100 text-red-800",
        Tone::Neutral => "bg-gray-100 text-gray-800",
    }
}

pub fn text_class(tone: Tone) -> &'static str {
    match tone {
        Tone::Positive => "text-green-500",
        Tone::Warning => "text-amber-500",
        Tone::Negative => "text-red-500",
        Tone::Neutral => "text-gray-500",
    }
}

pub fn icon_bg_class(hue: Hue) -> &'static str {
    match hue {
        Hue::Blue => "bg-blue-500",
        Hue::Green => "bg-green-500",
        Hue::Purple => "bg-purple-500",
        Hue::Red => "bg-red-500",
        Hue::Gray => "bg-gray-500",
    }
}

pub fn bar_class(hue: Hue) -> &'static str {
    match hue {
        Hue::Blue => "bg-blue-600",
        Hue::Green => "bg-green-600",
        Hue::Purple => "bg-purple-600",
        Hue::Red => "bg-red-600",
        Hue::Gray => "bg-gray-600",
    }
}

pub fn progress_badge_class(variant: BadgeVariant) -> &'static str {
    match variant {
        BadgeVariant::Default => "bg-gray-900 text-white",
        BadgeVariant::Success => "bg-green-600 text-white",
        BadgeVariant::Outline => "border border-gray-300 text-gray-700",
    }
}

/// Inner SVG markup for an activity icon (24x24 stroke icons).
pub fn icon_markup(icon: ActivityIcon) -> &'static str {
    match icon {
        ActivityIcon::Document => concat!(
            r#"<path d="M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7Z"/>"#,
            r#"<path d="M14 2v4a2 2 0 0 0 2 2h4"/>"#,
            r#"<path d="M10 9H8"/><path d="M16 13H8"/><path d="M16 17H8"/>"#,
        ),
        ActivityIcon::Message => {
            r#"<path d="M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z"/>"#
        }
        ActivityIcon::Book => concat!(
            r#"<path d="M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2z"/>"#,
            r#"<path d="M22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z"/>"#,
        ),
        ActivityIcon::Alert => concat!(
            r#"<circle cx="12" cy="12" r="10"/>"#,
            r#"<line x1="12" x2="12" y1="8" y2="12"/>"#,
            r#"<line x1="12" x2="12.01" y1="16" y2="16"/>"#,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_tokens_to_classes() {
        assert_eq!(indicator_class(Tone::Warning), "bg-yellow-500");
        assert_eq!(badge_class(Tone::Negative), "bg-red-100 text-red-800");
        assert_eq!(badge_class(Tone::Neutral), "bg-gray-100 text-gray-800");
    }

    #[test]
    fn hue_to_icon_background() {
        assert_eq!(icon_bg_class(Hue::Purple), "bg-purple-500");
        assert_eq!(icon_bg_class(Hue::Gray), "bg-gray-500");
    }
}
