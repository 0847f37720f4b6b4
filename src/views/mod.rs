pub mod catalog;
pub mod dashboard;
pub mod home;
pub mod not_found;
pub mod style;

use askama::Template;
use axum::response::Html;

use crate::error::AppError;
use crate::models::Viewer;

pub use catalog::{CatalogPage, CourseCard, CourseDetailPage};
pub use dashboard::{DashboardPage, DashboardTab};
pub use home::HomePage;
pub use not_found::NotFoundPage;

pub fn render<T: Template>(template: &T) -> Result<Html<String>, AppError> {
    Ok(Html(template.render()?))
}

const NAV_LINKS: [(&str, &str); 5] = [
    ("/dashboard", "Dashboard"),
    ("/courses", "Courses"),
    ("/calendar", "Calendar"),
    ("/grades", "Grades"),
    ("/messages", "Messages"),
];

#[derive(Debug, Clone, PartialEq)]
pub struct NavEntry {
    pub href: &'static str,
    pub label: &'static str,
    pub active: bool,
}

/// Sticky top bar shared by the dashboard and catalog pages.
#[derive(Debug, Clone)]
pub struct Header {
    pub nav: Vec<NavEntry>,
    pub viewer_name: String,
    pub viewer_email: String,
    pub viewer_initials: String,
    pub notifications: u32,
}

impl Header {
    pub fn new(viewer: &Viewer, current_path: &str) -> Self {
        let nav = NAV_LINKS
            .iter()
            .map(|&(href, label)| NavEntry {
                href,
                label,
                active: current_path == href || current_path.starts_with(&format!("{href}/")),
            })
            .collect();

        Self {
            nav,
            viewer_name: viewer.name.clone(),
            viewer_email: viewer.email.clone(),
            viewer_initials: viewer.initials.clone(),
            notifications: viewer.notifications,
        }
    }

    pub fn has_notifications(&self) -> bool {
        self.notifications > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewer() -> Viewer {
        Viewer {
            name: "Grace Hopper".to_string(),
            email: "grace@example.edu".to_string(),
            initials: "GH".to_string(),
            notifications: 0,
        }
    }

    fn active_labels(header: &Header) -> Vec<&'static str> {
        header.nav.iter().filter(|e| e.active).map(|e| e.label).collect()
    }

    #[test]
    fn marks_current_section_active() {
        assert_eq!(active_labels(&Header::new(&viewer(), "/dashboard")), ["Dashboard"]);
        assert_eq!(active_labels(&Header::new(&viewer(), "/courses/3")), ["Courses"]);
        assert!(active_labels(&Header::new(&viewer(), "/")).is_empty());
    }

    #[test]
    fn hides_empty_notification_badge() {
        assert!(!Header::new(&viewer(), "/").has_notifications());
    }
}
