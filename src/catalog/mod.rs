mod sample;

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::AppError;
use crate::models::{
    Activity, CatalogCourse, Deadline, EnrolledCourse, GradeSummary, OverviewStats, Percent,
    Viewer,
};

/// Read-only record collection the views render.
///
/// Built once at startup and shared between handlers; nothing mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub viewer: Viewer,
    pub courses: Vec<CatalogCourse>,
    #[serde(default)]
    pub enrolled: Vec<EnrolledCourse>,
    #[serde(default)]
    pub activities: Vec<Activity>,
    #[serde(default)]
    pub deadlines: Vec<Deadline>,
    #[serde(default)]
    pub grades: Vec<GradeSummary>,
}

impl Catalog {
    /// The compiled-in demo data.
    pub fn sample() -> Self {
        sample::catalog()
    }

    pub fn from_json_str(raw: &str) -> Result<Self, AppError> {
        let catalog: Catalog = serde_json::from_str(raw)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, AppError> {
        debug!("reading catalog from {}", path.display());
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Checks the record contracts the views rely on: course ids are unique
    /// within each list (pages link by id), credits are positive, fees are
    /// non-negative, and enrolled colors are plain CSS colors since they land
    /// in a `style` attribute.
    pub fn validate(&self) -> Result<(), AppError> {
        let mut seen = HashSet::new();
        for course in &self.courses {
            if !seen.insert(course.id) {
                return Err(AppError::BadRequest(format!(
                    "duplicate course id {} ({})",
                    course.id, course.code
                )));
            }
            if course.credits == 0 {
                return Err(AppError::BadRequest(format!(
                    "course {} has zero credits",
                    course.code
                )));
            }
            if !course.fee.is_finite() || course.fee < 0.0 {
                return Err(AppError::BadRequest(format!(
                    "course {} has invalid fee {}",
                    course.code, course.fee
                )));
            }
        }

        let mut seen = HashSet::new();
        for course in &self.enrolled {
            if !seen.insert(course.id) {
                return Err(AppError::BadRequest(format!(
                    "duplicate enrolled course id {} ({})",
                    course.id, course.code
                )));
            }
            if course.credits == 0 {
                return Err(AppError::BadRequest(format!(
                    "enrolled course {} has zero credits",
                    course.code
                )));
            }
            if !is_css_color(&course.color) {
                return Err(AppError::BadRequest(format!(
                    "enrolled course {} has unsupported color {:?}",
                    course.code, course.color
                )));
            }
        }

        Ok(())
    }

    pub fn course(&self, id: u32) -> Option<&CatalogCourse> {
        self.courses.iter().find(|c| c.id == id)
    }

    /// The viewer's enrollment in the course with this code, if any.
    pub fn enrollment_for(&self, code: &str) -> Option<&EnrolledCourse> {
        self.enrolled.iter().find(|c| c.code == code)
    }

    pub fn overview(&self) -> OverviewStats {
        let enrolled_courses = self.enrolled.len();
        let total_credits = self.enrolled.iter().map(|c| c.credits).sum();
        let average_completion = if enrolled_courses == 0 {
            Percent::default()
        } else {
            let sum: i64 = self
                .enrolled
                .iter()
                .map(|c| i64::from(c.completed_percentage.get()))
                .sum();
            Percent::new(sum / enrolled_courses as i64)
        };

        OverviewStats {
            enrolled_courses,
            total_credits,
            average_completion,
            upcoming_deadlines: self.deadlines.len(),
        }
    }
}

/// `#rgb`, `#rrggbb`, or a bare color keyword such as `crimson`.
fn is_css_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(hex) => matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => !value.is_empty() && value.chars().all(|c| c.is_ascii_alphabetic()),
    }
}
