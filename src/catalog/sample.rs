use super::Catalog;
use crate::classify::Hue;
use crate::models::{
    Activity, ActivityKind, CatalogCourse, CourseStatus, Deadline, EnrolledCourse, GradeSummary,
    Percent, ProgressState, Urgency, Viewer,
};

pub(super) fn catalog() -> Catalog {
    Catalog {
        viewer: Viewer {
            name: "John Doe".to_string(),
            email: "john.doe@university.edu".to_string(),
            initials: "JD".to_string(),
            notifications: 3,
        },
        courses: courses(),
        enrolled: enrolled(),
        activities: activities(),
        deadlines: deadlines(),
        grades: grades(),
    }
}

fn course(
    id: u32,
    code: &str,
    title: &str,
    department: &str,
    description: &str,
    (enrollment, credits, fee): (u32, u32, f64),
    status: CourseStatus,
) -> CatalogCourse {
    CatalogCourse {
        id,
        code: code.to_string(),
        title: title.to_string(),
        department: department.to_string(),
        description: description.to_string(),
        enrollment,
        credits,
        fee,
        status,
    }
}

fn courses() -> Vec<CatalogCourse> {
    vec![
        course(
            1,
            "CS101",
            "Introduction to Computer Science",
            "Computer Science",
            "Fundamental concepts of computer science and programming with Python.",
            (42, 3, 350.0),
            CourseStatus::Open,
        ),
        course(
            2,
            "MATH202",
            "Advanced Calculus",
            "Mathematics",
            "In-depth study of calculus concepts including limits, derivatives, and integrals.",
            (28, 4, 400.0),
            CourseStatus::Open,
        ),
        course(
            3,
            "ENG105",
            "Academic Writing",
            "English",
            "Learn to write clear, concise, and well-organized academic papers.",
            (35, 3, 320.0),
            CourseStatus::ClosingSoon,
        ),
        course(
            4,
            "HIST101",
            "World History",
            "History",
            "Survey of major historical events and developments across global civilizations.",
            (50, 3, 320.0),
            CourseStatus::Full,
        ),
        course(
            5,
            "BIO205",
            "Human Anatomy",
            "Biology",
            "Study of the structure of the human body and its systems.",
            (32, 4, 450.0),
            CourseStatus::Open,
        ),
        course(
            6,
            "PHYS101",
            "Physics I",
            "Physics",
            "Introduction to mechanics, energy, and thermodynamics.",
            (25, 4, 420.0),
            CourseStatus::ClosingSoon,
        ),
    ]
}

fn enrolled() -> Vec<EnrolledCourse> {
    vec![
        EnrolledCourse {
            id: 1,
            code: "CS101".to_string(),
            title: "Introduction to Computer Science".to_string(),
            instructor: "Dr. Alan Turing".to_string(),
            description: "An introduction to computer science and programming with Python, covering basic algorithms and data structures.".to_string(),
            term: "Fall 2023".to_string(),
            credits: 3,
            students: 42,
            lessons: 24,
            progress: ProgressState::InProgress,
            completed_percentage: Percent::new(75),
            next_session: "Tuesday, 10:00 AM - Lecture Hall A".to_string(),
            color: "#3b82f6".to_string(),
        },
        EnrolledCourse {
            id: 2,
            code: "MATH202".to_string(),
            title: "Advanced Calculus".to_string(),
            instructor: "Dr. Katherine Johnson".to_string(),
            description: "Delves into multivariable calculus, vector calculus, and their applications in physics and engineering.".to_string(),
            term: "Fall 2023".to_string(),
            credits: 4,
            students: 28,
            lessons: 32,
            progress: ProgressState::InProgress,
            completed_percentage: Percent::new(60),
            next_session: "Wednesday, 2:00 PM - Math Center B".to_string(),
            color: "#8b5cf6".to_string(),
        },
        EnrolledCourse {
            id: 3,
            code: "ENG105".to_string(),
            title: "Academic Writing".to_string(),
            instructor: "Prof. Emily Dickinson".to_string(),
            description: "Learn to write clear, concise, and well-organized academic papers across different disciplines.".to_string(),
            term: "Fall 2023".to_string(),
            credits: 3,
            students: 35,
            lessons: 18,
            progress: ProgressState::Behind,
            completed_percentage: Percent::new(30),
            next_session: "Thursday, 11:00 AM - Humanities Building 202".to_string(),
            color: "#ec4899".to_string(),
        },
    ]
}

fn activity(kind: ActivityKind, title: &str, description: &str, time: &str) -> Activity {
    Activity {
        kind,
        title: title.to_string(),
        description: description.to_string(),
        time: time.to_string(),
    }
}

fn activities() -> Vec<Activity> {
    vec![
        activity(
            ActivityKind::Submission,
            "Assignment Submitted",
            "You submitted your CS101 final project",
            "Today at 10:32 AM",
        ),
        activity(
            ActivityKind::Discussion,
            "New Discussion Reply",
            "Prof. Turing replied to your question in CS101",
            "Yesterday at 5:45 PM",
        ),
        activity(
            ActivityKind::Course,
            "Course Material Updated",
            "New lecture notes available in MATH202",
            "Yesterday at 3:15 PM",
        ),
        activity(
            ActivityKind::Deadline,
            "Upcoming Deadline",
            "ENG105 essay due in 2 days",
            "Mar 20, 2023",
        ),
        activity(
            ActivityKind::Submission,
            "Assignment Graded",
            "Your MATH202 homework was graded: 92/100",
            "Mar 18, 2023",
        ),
    ]
}

fn deadline(
    course_code: &str,
    title: &str,
    course_title: &str,
    remaining: &str,
    weight: i64,
    urgency: Urgency,
) -> Deadline {
    Deadline {
        course_code: course_code.to_string(),
        title: title.to_string(),
        course_title: course_title.to_string(),
        remaining: remaining.to_string(),
        weight_percent: Percent::new(weight),
        urgency,
    }
}

fn deadlines() -> Vec<Deadline> {
    vec![
        deadline("CS101", "Final Project", "Computer Science Basics", "2 days left", 25, Urgency::Urgent),
        deadline("MATH202", "Quiz 3", "Advanced Calculus", "5 days left", 10, Urgency::Soon),
        deadline("ENG105", "Essay", "Academic Writing", "2 weeks left", 15, Urgency::Relaxed),
    ]
}

fn grade(course_code: &str, course_title: &str, score: i64, color: Hue) -> GradeSummary {
    GradeSummary {
        course_code: course_code.to_string(),
        course_title: course_title.to_string(),
        score_percent: Percent::new(score),
        color,
    }
}

fn grades() -> Vec<GradeSummary> {
    vec![
        grade("CS101", "Computer Science Basics", 92, Hue::Green),
        grade("MATH202", "Advanced Calculus", 78, Hue::Blue),
        grade("ENG105", "Academic Writing", 85, Hue::Purple),
        grade("HIST101", "World History", 90, Hue::Green),
    ]
}
