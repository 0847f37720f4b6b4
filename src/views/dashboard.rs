use askama::Template;

use super::Header;
use super::style;
use crate::catalog::Catalog;
use crate::classify::{classify_activity, classify_progress, classify_urgency};
use crate::models::{Activity, Deadline, EnrolledCourse, GradeSummary, OverviewStats};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardTab {
    Overview,
    Courses,
    Activities,
}

impl DashboardTab {
    pub const ALL: [DashboardTab; 3] = [
        DashboardTab::Overview,
        DashboardTab::Courses,
        DashboardTab::Activities,
    ];

    /// Missing or unrecognized values open the overview.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("courses") => DashboardTab::Courses,
            Some("activities") => DashboardTab::Activities,
            _ => DashboardTab::Overview,
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            DashboardTab::Overview => "overview",
            DashboardTab::Courses => "courses",
            DashboardTab::Activities => "activities",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DashboardTab::Overview => "Overview",
            DashboardTab::Courses => "My Courses",
            DashboardTab::Activities => "Recent Activities",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TabLink {
    pub slug: &'static str,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnrolledCard {
    pub id: u32,
    pub code: String,
    pub title: String,
    pub instructor: String,
    pub description: String,
    pub term: String,
    pub credits: u32,
    pub students: u32,
    pub lessons: u32,
    pub progress_label: String,
    pub progress_class: &'static str,
    pub percent: u8,
    pub next_session: String,
    pub color: String,
}

impl EnrolledCard {
    pub fn from_course(course: &EnrolledCourse) -> Self {
        Self {
            id: course.id,
            code: course.code.clone(),
            title: course.title.clone(),
            instructor: course.instructor.clone(),
            description: course.description.clone(),
            term: course.term.clone(),
            credits: course.credits,
            students: course.students,
            lessons: course.lessons,
            progress_label: course.progress.label().to_string(),
            progress_class: style::progress_badge_class(classify_progress(&course.progress)),
            percent: course.completed_percentage.get(),
            next_session: course.next_session.clone(),
            color: course.color.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActivityItem {
    pub kind: String,
    pub title: String,
    pub description: String,
    pub time: String,
    pub icon_name: &'static str,
    pub icon_markup: &'static str,
    pub icon_bg_class: &'static str,
}

impl ActivityItem {
    pub fn from_activity(activity: &Activity) -> Self {
        let presentation = classify_activity(&activity.kind);
        Self {
            kind: activity.kind.label().to_string(),
            title: activity.title.clone(),
            description: activity.description.clone(),
            time: activity.time.clone(),
            icon_name: presentation.icon.name(),
            icon_markup: style::icon_markup(presentation.icon),
            icon_bg_class: style::icon_bg_class(presentation.color),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeadlineRow {
    pub heading: String,
    pub course_title: String,
    pub remaining: String,
    pub weight: u8,
    pub remaining_class: &'static str,
}

impl DeadlineRow {
    pub fn from_deadline(deadline: &Deadline) -> Self {
        Self {
            heading: format!("{} - {}", deadline.course_code, deadline.title),
            course_title: deadline.course_title.clone(),
            remaining: deadline.remaining.clone(),
            weight: deadline.weight_percent.get(),
            remaining_class: style::text_class(classify_urgency(&deadline.urgency)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GradeRow {
    pub heading: String,
    pub percent: u8,
    pub bar_class: &'static str,
}

impl GradeRow {
    pub fn from_grade(grade: &GradeSummary) -> Self {
        Self {
            heading: format!("{} - {}", grade.course_code, grade.course_title),
            percent: grade.score_percent.get(),
            bar_class: style::bar_class(grade.color),
        }
    }
}

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardPage {
    pub header: Header,
    pub tabs: Vec<TabLink>,
    pub active_tab: &'static str,
    pub stats: OverviewStats,
    pub deadlines: Vec<DeadlineRow>,
    pub grades: Vec<GradeRow>,
    pub courses: Vec<EnrolledCard>,
    pub activities: Vec<ActivityItem>,
}

impl DashboardPage {
    pub fn build(catalog: &Catalog, tab: DashboardTab) -> Self {
        let tabs = DashboardTab::ALL
            .iter()
            .map(|&t| TabLink {
                slug: t.slug(),
                label: t.label(),
                active: t == tab,
            })
            .collect();

        Self {
            header: Header::new(&catalog.viewer, "/dashboard"),
            tabs,
            active_tab: tab.slug(),
            stats: catalog.overview(),
            deadlines: catalog.deadlines.iter().map(DeadlineRow::from_deadline).collect(),
            grades: catalog.grades.iter().map(GradeRow::from_grade).collect(),
            courses: catalog.enrolled.iter().map(EnrolledCard::from_course).collect(),
            activities: catalog.activities.iter().map(ActivityItem::from_activity).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivityKind, Urgency};

    #[test]
    fn tab_parsing_falls_back_to_overview() {
        assert_eq!(DashboardTab::parse(None), DashboardTab::Overview);
        assert_eq!(DashboardTab::parse(Some("courses")), DashboardTab::Courses);
        assert_eq!(DashboardTab::parse(Some("activities")), DashboardTab::Activities);
        assert_eq!(DashboardTab::parse(Some("Courses")), DashboardTab::Overview);
        assert_eq!(DashboardTab::parse(Some("")), DashboardTab::Overview);
    }

    #[test]
    fn exactly_one_tab_is_active() {
        let page = DashboardPage::build(&Catalog::sample(), DashboardTab::Activities);
        let active: Vec<_> = page.tabs.iter().filter(|t| t.active).map(|t| t.slug).collect();
        assert_eq!(active, ["activities"]);
        assert_eq!(page.active_tab, "activities");
    }

    #[test]
    fn activity_item_uses_classifier() {
        let item = ActivityItem::from_activity(&Activity {
            kind: ActivityKind::Deadline,
            title: "Due".to_string(),
            description: "Soon".to_string(),
            time: "Mar 20, 2023".to_string(),
        });
        assert_eq!(item.icon_name, "alert");
        assert_eq!(item.icon_bg_class, "bg-red-500");

        let unknown = ActivityItem::from_activity(&Activity {
            kind: ActivityKind::parse("bogus"),
            title: "?".to_string(),
            description: "?".to_string(),
            time: "now".to_string(),
        });
        assert_eq!(unknown.icon_name, "document");
        assert_eq!(unknown.icon_bg_class, "bg-gray-500");
        assert_eq!(unknown.kind, "bogus");
    }

    #[test]
    fn deadline_row_colors_by_urgency() {
        let catalog = Catalog::sample();
        let rows: Vec<_> = catalog.deadlines.iter().map(DeadlineRow::from_deadline).collect();
        assert_eq!(rows[0].heading, "CS101 - Final Project");
        assert_eq!(rows[0].remaining_class, "text-red-500");
        assert_eq!(rows[1].remaining_class, "text-amber-500");
        assert_eq!(rows[2].remaining_class, "text-green-500");

        let mut odd = catalog.deadlines[0].clone();
        odd.urgency = Urgency::parse("eventually");
        assert_eq!(DeadlineRow::from_deadline(&odd).remaining_class, "text-gray-500");
    }

    #[test]
    fn overview_renders_stats_and_deadlines() {
        let html = DashboardPage::build(&Catalog::sample(), DashboardTab::Overview)
            .render()
            .unwrap();
        assert!(html.contains("Upcoming Deadlines"));
        assert!(html.contains("CS101 - Final Project"));
        assert!(html.contains("Academic Progress"));
        assert!(html.contains("92%"));
        assert!(!html.contains("Continue Learning"));
    }

    #[test]
    fn courses_tab_renders_enrolled_cards() {
        let html = DashboardPage::build(&Catalog::sample(), DashboardTab::Courses)
            .render()
            .unwrap();
        assert!(html.contains("My Courses"));
        assert!(html.contains("Dr. Katherine Johnson"));
        assert!(html.contains("Continue Learning"));
        assert!(html.contains("75%"));
    }

    #[test]
    fn activities_tab_renders_feed() {
        let html = DashboardPage::build(&Catalog::sample(), DashboardTab::Activities)
            .render()
            .unwrap();
        assert!(html.contains("Assignment Submitted"));
        assert!(html.contains("Yesterday at 5:45 PM"));
        assert!(html.contains("bg-purple-500"));
        assert!(!html.contains("Upcoming Deadlines"));
    }
}
