use serde::{Deserialize, Serialize};

use super::Percent;
use crate::classify::Hue;

closed_label! {
    /// How pressing an upcoming deadline is.
    pub enum Urgency {
        Urgent => "urgent",
        Soon => "soon",
        Relaxed => "relaxed",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deadline {
    pub course_code: String,
    pub title: String,
    pub course_title: String,
    pub remaining: String,
    pub weight_percent: Percent,
    pub urgency: Urgency,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeSummary {
    pub course_code: String,
    pub course_title: String,
    pub score_percent: Percent,
    pub color: Hue,
}

/// The signed-in user shown in the header menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Viewer {
    pub name: String,
    pub email: String,
    pub initials: String,
    #[serde(default)]
    pub notifications: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OverviewStats {
    pub enrolled_courses: usize,
    pub total_credits: u32,
    pub average_completion: Percent,
    pub upcoming_deadlines: usize,
}
