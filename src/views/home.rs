use askama::Template;
use chrono::{Datelike, Utc};

pub struct Feature {
    pub title: &'static str,
    pub summary: &'static str,
    pub body: &'static str,
}

static FEATURES: [Feature; 4] = [
    Feature {
        title: "Course Management",
        summary: "Create, modify and track all your courses in one place",
        body: "Easily manage course materials, schedules, and assignments with our intuitive interface.",
    },
    Feature {
        title: "Student Enrollment",
        summary: "Streamlined process for course registration",
        body: "Students can browse available courses, view prerequisites, and enroll with blockchain verification.",
    },
    Feature {
        title: "Faculty Portal",
        summary: "Dedicated tools for professors and instructors",
        body: "Manage student performance, upload materials, and communicate with your class efficiently.",
    },
    Feature {
        title: "Analytics Dashboard",
        summary: "Insights into performance and engagement",
        body: "Get detailed analytics on course participation, student progress, and academic outcomes.",
    },
];

static HIGHLIGHTS: [&str; 3] = [
    "Secure course certification and degree verification",
    "Transparent and immutable academic records",
    "Efficient payment processing for tuition and fees",
];

const CONTRACT_SAMPLE: &str = r#"# Algorand Smart Contract (PyTeal)
def approval_program():
    # Handle course registration
    on_register = Seq([
        App.globalPut(Bytes("student_count"),
                     App.globalGet(Bytes("student_count")) + Int(1)),
        App.localPut(Int(0), Bytes("enrolled"), Int(1)),
        App.localPut(Int(0), Bytes("timestamp"), Global.latest_timestamp()),
        Return(Int(1))
    ])

    program = Cond(
        [Txn.application_id() == Int(0), Return(Int(1))],
        [Txn.on_completion() == OnComplete.DeleteApplication, Return(Int(0))],
        [Txn.on_completion() == OnComplete.UpdateApplication, Return(Int(0))],
        [Txn.on_completion() == OnComplete.CloseOut, Return(Int(1))],
        [Txn.on_completion() == OnComplete.OptIn, Return(Int(1))],
        [Txn.application_args[0] == Bytes("register"), on_register]
    )

    return program"#;

/// Public landing page.
#[derive(Template)]
#[template(path = "home.html")]
pub struct HomePage {
    pub features: &'static [Feature],
    pub highlights: &'static [&'static str],
    pub contract_sample: &'static str,
    pub year: i32,
}

impl HomePage {
    pub fn build() -> Self {
        Self::for_year(Utc::now().year())
    }

    pub fn for_year(year: i32) -> Self {
        Self {
            features: &FEATURES,
            highlights: &HIGHLIGHTS,
            contract_sample: CONTRACT_SAMPLE,
            year,
        }
    }
}
