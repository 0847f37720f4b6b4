/// Declares a closed set of display labels plus an `Other` arm that keeps any
/// label the set does not model. Parsing is infallible and the label
/// round-trips through serde unchanged.
macro_rules! closed_label {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident => $label:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $($variant,)+
            Other(String),
        }

        impl $name {
            pub fn parse(label: &str) -> Self {
                match label {
                    $($label => Self::$variant,)+
                    other => Self::Other(other.to_string()),
                }
            }

            pub fn label(&self) -> &str {
                match self {
                    $(Self::$variant => $label,)+
                    Self::Other(label) => label,
                }
            }
        }

        impl From<String> for $name {
            fn from(label: String) -> Self {
                match Self::parse(&label) {
                    Self::Other(_) => Self::Other(label),
                    known => known,
                }
            }
        }

        impl From<&str> for $name {
            fn from(label: &str) -> Self {
                Self::parse(label)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                match value {
                    $name::Other(label) => label,
                    known => known.label().to_string(),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

pub mod activity;
pub mod course;
pub mod dashboard;
pub mod percent;

pub use activity::{Activity, ActivityKind};
pub use course::{CatalogCourse, CourseStatus, EnrolledCourse, ProgressState};
pub use dashboard::{Deadline, GradeSummary, OverviewStats, Urgency, Viewer};
pub use percent::Percent;
