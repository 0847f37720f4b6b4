use serde::{Deserialize, Serialize};

closed_label! {
    /// Category of an entry in the activity feed.
    pub enum ActivityKind {
        Submission => "submission",
        Discussion => "discussion",
        Course => "course",
        Deadline => "deadline",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub title: String,
    pub description: String,
    /// Display text only, e.g. "Yesterday at 5:45 PM".
    pub time: String,
}
