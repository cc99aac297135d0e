//! Dashboard aggregates. Everything is recomputed from full collection
//! snapshots on each request.

use std::collections::{BTreeMap, HashMap, HashSet};

use serde::Serialize;

use crate::modules::contact::application::domain::entities::{ContactMessage, MessageStatus};
use crate::modules::course::application::domain::enrollment::{Enrollment, EnrollmentStatus};
use crate::modules::course::application::domain::entities::{Course, CourseStatus};
use crate::modules::testimonial::application::domain::entities::{average_rating, Testimonial};
use crate::shared::store::RecordId;

pub const TOP_COURSES: usize = 5;
pub const RECENT_MESSAGES: usize = 5;
pub const RECOMMENDED_COURSES: usize = 3;

//
// ──────────────────────────────────────────────────────────
// Admin
// ──────────────────────────────────────────────────────────
//

/// Collection snapshots the admin overview is derived from.
pub struct AdminSnapshot {
    pub projects: usize,
    pub services: usize,
    pub team: usize,
    pub testimonials: Vec<Testimonial>,
    pub courses: Vec<Course>,
    pub enrollments: Vec<Enrollment>,
    pub messages: Vec<ContactMessage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollectionCounts {
    pub projects: usize,
    pub services: usize,
    pub testimonials: usize,
    pub team: usize,
    pub courses: usize,
    pub enrollments: usize,
    pub messages: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminOverview {
    pub counts: CollectionCounts,
    pub messages_by_status: BTreeMap<&'static str, usize>,
    pub courses_by_status: BTreeMap<&'static str, usize>,
    pub total_enrollments: usize,
    /// Sum of course prices over enrollments whose course still exists.
    pub revenue: f64,
    pub average_rating: f64,
    pub top_courses: Vec<Course>,
    pub recent_messages: Vec<ContactMessage>,
}

impl AdminOverview {
    pub fn from_snapshot(s: AdminSnapshot) -> Self {
        let counts = CollectionCounts {
            projects: s.projects,
            services: s.services,
            testimonials: s.testimonials.len(),
            team: s.team,
            courses: s.courses.len(),
            enrollments: s.enrollments.len(),
            messages: s.messages.len(),
        };

        let messages_by_status = MessageStatus::ALL
            .iter()
            .map(|status| {
                let n = s.messages.iter().filter(|m| m.status == *status).count();
                (status.as_str(), n)
            })
            .collect();

        let courses_by_status = CourseStatus::ALL
            .iter()
            .map(|status| {
                let n = s.courses.iter().filter(|c| c.status == *status).count();
                (status.as_str(), n)
            })
            .collect();

        Self {
            counts,
            messages_by_status,
            courses_by_status,
            total_enrollments: s.enrollments.len(),
            revenue: revenue(&s.courses, &s.enrollments),
            average_rating: average_rating(&s.testimonials),
            top_courses: top_courses(&s.courses, TOP_COURSES),
            recent_messages: recent_messages(&s.messages, RECENT_MESSAGES),
        }
    }
}

pub fn revenue(courses: &[Course], enrollments: &[Enrollment]) -> f64 {
    let prices: HashMap<&RecordId, f64> = courses.iter().map(|c| (&c.id, c.price)).collect();

    enrollments
        .iter()
        .filter_map(|e| prices.get(&e.course_id))
        .sum()
}

/// Most enrolled first; ties keep insertion order.
pub fn top_courses(courses: &[Course], n: usize) -> Vec<Course> {
    let mut ranked = courses.to_vec();
    ranked.sort_by(|a, b| b.students_enrolled.cmp(&a.students_enrolled));
    ranked.truncate(n);
    ranked
}

pub fn recent_messages(messages: &[ContactMessage], n: usize) -> Vec<ContactMessage> {
    let mut recent = messages.to_vec();
    recent.sort_by(|a, b| b.date.cmp(&a.date));
    recent.truncate(n);
    recent
}

//
// ──────────────────────────────────────────────────────────
// Student
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrolledCourse {
    #[serde(flatten)]
    pub enrollment: Enrollment,
    pub course: Course,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentOverview {
    pub enrollments: Vec<EnrolledCourse>,
    pub active: usize,
    pub completed: usize,
    pub paused: usize,
    pub average_progress: f64,
    pub recommended: Vec<Course>,
}

impl StudentOverview {
    /// `enrollments` must already be limited to the student.
    pub fn build(enrollments: Vec<Enrollment>, courses: &[Course]) -> Self {
        let by_id: HashMap<&RecordId, &Course> = courses.iter().map(|c| (&c.id, c)).collect();
        let enrolled_ids: HashSet<&RecordId> = enrollments.iter().map(|e| &e.course_id).collect();

        let mut recommended: Vec<Course> = courses
            .iter()
            .filter(|c| c.is_active() && !enrolled_ids.contains(&c.id))
            .cloned()
            .collect();
        recommended.sort_by(|a, b| b.rating.total_cmp(&a.rating));
        recommended.truncate(RECOMMENDED_COURSES);

        let joined: Vec<EnrolledCourse> = enrollments
            .iter()
            .filter_map(|e| {
                by_id.get(&e.course_id).map(|course| EnrolledCourse {
                    enrollment: e.clone(),
                    course: (*course).clone(),
                })
            })
            .collect();

        let count = |status: EnrollmentStatus| {
            joined
                .iter()
                .filter(|j| j.enrollment.status == status)
                .count()
        };

        let average_progress = if joined.is_empty() {
            0.0
        } else {
            let total: u32 = joined
                .iter()
                .map(|j| u32::from(j.enrollment.progress))
                .sum();
            f64::from(total) / joined.len() as f64
        };

        Self {
            active: count(EnrollmentStatus::Active),
            completed: count(EnrollmentStatus::Completed),
            paused: count(EnrollmentStatus::Paused),
            average_progress,
            recommended,
            enrollments: joined,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::contact::application::domain::entities::ContactMessageDraft;
    use crate::modules::course::application::domain::enrollment::EnrollmentDraft;
    use crate::modules::course::application::domain::entities::{CourseDraft, CourseLevel};
    use crate::modules::testimonial::application::domain::entities::TestimonialDraft;
    use crate::shared::store::Record;
    use chrono::{Duration, Utc};

    fn course(id: &str, price: f64, rating: f64, students: u32, status: CourseStatus) -> Course {
        Course::from_draft(
            RecordId::from(id),
            CourseDraft {
                title: format!("Course {}", id),
                description: String::new(),
                long_description: String::new(),
                instructor: "I".to_string(),
                duration: String::new(),
                level: CourseLevel::Beginner,
                price,
                category: "C".to_string(),
                features: vec![],
                curriculum: vec![],
                rating,
                students_enrolled: students,
                tags: vec![],
                status,
                image: String::new(),
            },
        )
    }

    fn enrollment(id: &str, student: &str, course: &str, progress: u8, status: EnrollmentStatus) -> Enrollment {
        let mut e = Enrollment::from_draft(
            RecordId::from(id),
            EnrollmentDraft {
                student_id: RecordId::from(student),
                course_id: RecordId::from(course),
                enrolled_at: Utc::now(),
            },
        );
        e.progress = progress;
        e.status = status;
        e
    }

    fn message(id: &str, minutes_ago: i64, status: MessageStatus) -> ContactMessage {
        let mut m = ContactMessage::from_draft(
            RecordId::from(id),
            ContactMessageDraft {
                name: "N".to_string(),
                email: "n@example.com".to_string(),
                message: "M".to_string(),
                subject: None,
                phone: None,
                priority: None,
                date: Utc::now() - Duration::minutes(minutes_ago),
            },
        );
        m.status = status;
        m
    }

    fn testimonial(rating: u8) -> Testimonial {
        Testimonial::from_draft(
            RecordId::from("t"),
            TestimonialDraft {
                name: "N".to_string(),
                role: String::new(),
                company: String::new(),
                content: String::new(),
                rating,
                avatar: String::new(),
            },
        )
    }

    #[test]
    fn test_revenue_skips_dangling_enrollments() {
        let courses = vec![course("1", 100.0, 4.0, 0, CourseStatus::Active)];
        let enrollments = vec![
            enrollment("e1", "s", "1", 0, EnrollmentStatus::Active),
            enrollment("e2", "s", "1", 0, EnrollmentStatus::Active),
            enrollment("e3", "s", "gone", 0, EnrollmentStatus::Active),
        ];

        assert_eq!(revenue(&courses, &enrollments), 200.0);
    }

    #[test]
    fn test_top_courses_ties_keep_insertion_order() {
        let courses = vec![
            course("a", 1.0, 1.0, 10, CourseStatus::Active),
            course("b", 1.0, 1.0, 50, CourseStatus::Active),
            course("c", 1.0, 1.0, 10, CourseStatus::Active),
        ];

        let top: Vec<_> = top_courses(&courses, 2).into_iter().map(|c| c.id).collect();

        assert_eq!(top, vec![RecordId::from("b"), RecordId::from("a")]);
    }

    #[test]
    fn test_admin_overview() {
        let overview = AdminOverview::from_snapshot(AdminSnapshot {
            projects: 4,
            services: 2,
            team: 3,
            testimonials: vec![testimonial(5), testimonial(4)],
            courses: vec![
                course("1", 100.0, 4.0, 5, CourseStatus::Active),
                course("2", 50.0, 4.0, 9, CourseStatus::Draft),
            ],
            enrollments: vec![
                enrollment("e1", "s", "1", 0, EnrollmentStatus::Active),
                enrollment("e2", "s", "2", 0, EnrollmentStatus::Active),
            ],
            messages: vec![
                message("old", 60, MessageStatus::Read),
                message("new", 1, MessageStatus::New),
            ],
        });

        assert_eq!(overview.counts.projects, 4);
        assert_eq!(overview.counts.messages, 2);
        assert_eq!(overview.messages_by_status["new"], 1);
        assert_eq!(overview.messages_by_status["archived"], 0);
        assert_eq!(overview.courses_by_status["draft"], 1);
        assert_eq!(overview.total_enrollments, 2);
        assert_eq!(overview.revenue, 150.0);
        assert!((overview.average_rating - 4.5).abs() < f64::EPSILON);
        assert_eq!(overview.top_courses[0].id, RecordId::from("2"));
        assert_eq!(overview.recent_messages[0].id, RecordId::from("new"));
    }

    #[test]
    fn test_student_overview() {
        let courses = vec![
            course("1", 10.0, 4.1, 0, CourseStatus::Active),
            course("2", 10.0, 4.9, 0, CourseStatus::Active),
            course("3", 10.0, 4.5, 0, CourseStatus::Active),
            course("4", 10.0, 5.0, 0, CourseStatus::Draft),
            course("5", 10.0, 3.0, 0, CourseStatus::Active),
        ];
        let mine = vec![
            enrollment("e1", "s", "1", 40, EnrollmentStatus::Active),
            enrollment("e2", "s", "gone", 90, EnrollmentStatus::Paused),
            enrollment("e3", "s", "5", 100, EnrollmentStatus::Completed),
        ];

        let overview = StudentOverview::build(mine, &courses);

        assert_eq!(overview.enrollments.len(), 2);
        assert_eq!(overview.active, 1);
        assert_eq!(overview.completed, 1);
        assert_eq!(overview.paused, 0);
        assert!((overview.average_progress - 70.0).abs() < f64::EPSILON);
        let recommended: Vec<_> = overview.recommended.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(recommended, vec!["2", "3"]);
    }

    #[test]
    fn test_student_without_enrollments() {
        let overview = StudentOverview::build(vec![], &[]);

        assert_eq!(overview.average_progress, 0.0);
        assert!(overview.recommended.is_empty());
    }

    #[test]
    fn test_enrolled_course_serializes_flat() {
        let joined = EnrolledCourse {
            enrollment: enrollment("e1", "s", "1", 10, EnrollmentStatus::Active),
            course: course("1", 1.0, 1.0, 0, CourseStatus::Active),
        };

        let json = serde_json::to_value(joined).unwrap();

        assert_eq!(json["progress"], 10);
        assert_eq!(json["course"]["id"], "1");
    }
}
