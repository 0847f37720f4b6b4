//! Pure lookups from record labels to presentation tokens.
//!
//! Every classifier is total: labels outside the modelled set fall back to a
//! neutral presentation. Tokens are abstract; `views::style` turns them into
//! concrete CSS classes.

mod activity;
mod deadline;
mod progress;
mod status;

use serde::{Deserialize, Serialize};

pub use activity::{ActivityIcon, ActivityPresentation, classify_activity, classify_activity_label};
pub use deadline::classify_urgency;
pub use progress::{BadgeVariant, classify_progress};
pub use status::{StatusPresentation, classify_status, classify_status_label};

/// Semantic style of a status-like label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Positive,
    Warning,
    Negative,
    Neutral,
}

/// Palette color used for icon backgrounds and progress bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Hue {
    Blue,
    Green,
    Purple,
    Red,
    Gray,
}

impl Hue {
    pub fn name(self) -> &'static str {
        match self {
            Hue::Blue => "blue",
            Hue::Green => "green",
            Hue::Purple => "purple",
            Hue::Red => "red",
            Hue::Gray => "gray",
        }
    }
}

impl From<String> for Hue {
    fn from(name: String) -> Self {
        match name.as_str() {
            "blue" => Hue::Blue,
            "green" => Hue::Green,
            "purple" => Hue::Purple,
            "red" => Hue::Red,
            _ => Hue::Gray,
        }
    }
}
