use askama::Template;

use super::Header;
use super::dashboard::EnrolledCard;
use super::style;
use crate::catalog::Catalog;
use crate::classify::classify_status;
use crate::models::CatalogCourse;

/// Options of the department select. The select is decorative: nothing
/// filters on it yet.
const DEPARTMENTS: [(&str, &str); 6] = [
    ("all", "All Departments"),
    ("cs", "Computer Science"),
    ("math", "Mathematics"),
    ("eng", "English"),
    ("hist", "History"),
    ("sci", "Science"),
];

/// Page numbers shown under the grid; also decorative.
const PAGES: [u32; 3] = [1, 2, 3];

#[derive(Debug, Clone, PartialEq)]
pub struct CourseCard {
    pub id: u32,
    pub code: String,
    pub title: String,
    pub department: String,
    pub description: String,
    pub enrollment: u32,
    pub credits: u32,
    pub fee_label: String,
    pub status_label: String,
    pub indicator_class: &'static str,
    pub badge_class: &'static str,
    pub action_label: &'static str,
    pub waitlist: bool,
}

impl CourseCard {
    pub fn from_course(course: &CatalogCourse) -> Self {
        let presentation = classify_status(&course.status);
        let waitlist = course.status.is_full();

        Self {
            id: course.id,
            code: course.code.clone(),
            title: course.title.clone(),
            department: course.department.clone(),
            description: course.description.clone(),
            enrollment: course.enrollment,
            credits: course.credits,
            fee_label: format!("{:.2}", course.fee),
            status_label: course.status.label().to_string(),
            indicator_class: style::indicator_class(presentation.indicator),
            badge_class: style::badge_class(presentation.badge),
            action_label: if waitlist { "Join Waitlist" } else { "Enroll Now" },
            waitlist,
        }
    }
}

#[derive(Template)]
#[template(path = "courses.html")]
pub struct CatalogPage {
    pub header: Header,
    pub cards: Vec<CourseCard>,
    pub departments: Vec<(&'static str, &'static str)>,
    pub pages: Vec<u32>,
}

impl CatalogPage {
    pub fn build(catalog: &Catalog) -> Self {
        Self {
            header: Header::new(&catalog.viewer, "/courses"),
            cards: catalog.courses.iter().map(CourseCard::from_course).collect(),
            departments: DEPARTMENTS.to_vec(),
            pages: PAGES.to_vec(),
        }
    }
}

#[derive(Template)]
#[template(path = "course_detail.html")]
pub struct CourseDetailPage {
    pub header: Header,
    pub card: CourseCard,
    pub enrollment: Option<EnrolledCard>,
}

impl CourseDetailPage {
    pub fn build(catalog: &Catalog, course: &CatalogCourse) -> Self {
        Self {
            header: Header::new(&catalog.viewer, &format!("/courses/{}", course.id)),
            card: CourseCard::from_course(course),
            enrollment: catalog
                .enrollment_for(&course.code)
                .map(EnrolledCard::from_course),
        }
    }
}
