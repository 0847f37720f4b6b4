use serde::{Deserialize, Serialize};

use super::Percent;

closed_label! {
    /// Enrollment state of a catalog course.
    pub enum CourseStatus {
        Open => "Open",
        ClosingSoon => "Closing Soon",
        Full => "Full",
    }
}

closed_label! {
    /// How far along the viewer is in an enrolled course.
    pub enum ProgressState {
        InProgress => "In Progress",
        Completed => "Completed",
        Behind => "Behind",
    }
}

impl CourseStatus {
    pub fn is_full(&self) -> bool {
        matches!(self, CourseStatus::Full)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogCourse {
    pub id: u32,
    pub code: String,
    pub title: String,
    pub department: String,
    pub description: String,
    pub enrollment: u32,
    pub credits: u32,
    /// Non-negative; may be fractional.
    pub fee: f64,
    pub status: CourseStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrolledCourse {
    pub id: u32,
    pub code: String,
    pub title: String,
    pub instructor: String,
    pub description: String,
    pub term: String,
    pub credits: u32,
    pub students: u32,
    pub lessons: u32,
    pub progress: ProgressState,
    pub completed_percentage: Percent,
    pub next_session: String,
    pub color: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_status_labels() {
        assert_eq!(CourseStatus::parse("Open"), CourseStatus::Open);
        assert_eq!(CourseStatus::parse("Closing Soon"), CourseStatus::ClosingSoon);
        assert_eq!(CourseStatus::parse("Full"), CourseStatus::Full);
    }

    #[test]
    fn keeps_unmodeled_labels() {
        let status = CourseStatus::parse("Cancelled");
        assert_eq!(status, CourseStatus::Other("Cancelled".to_string()));
        assert_eq!(status.label(), "Cancelled");
        assert!(!status.is_full());
    }

    #[test]
    fn labels_are_case_sensitive() {
        assert_eq!(CourseStatus::parse("open"), CourseStatus::Other("open".to_string()));
    }

    #[test]
    fn status_serializes_as_display_label() {
        let json = serde_json::to_string(&CourseStatus::ClosingSoon).unwrap();
        assert_eq!(json, "\"Closing Soon\"");

        let back: CourseStatus = serde_json::from_str("\"Waitlist Only\"").unwrap();
        assert_eq!(back.label(), "Waitlist Only");
        assert_eq!(serde_json::to_string(&back).unwrap(), "\"Waitlist Only\"");
    }

    #[test]
    fn enrolled_course_clamps_percentage_on_load() {
        let json = r##"{
            "id": 9,
            "code": "CS999",
            "title": "Overachieving",
            "instructor": "Dr. Nobody",
            "description": "Too much progress.",
            "term": "Fall 2023",
            "credits": 3,
            "students": 1,
            "lessons": 2,
            "progress": "Completed",
            "completed_percentage": 140,
            "next_session": "Never",
            "color": "#000000"
        }"##;
        let course: EnrolledCourse = serde_json::from_str(json).unwrap();
        assert_eq!(course.completed_percentage, Percent::MAX);
        assert_eq!(course.progress, ProgressState::Completed);
    }
}
