use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::shared::store::text::{any_contains, non_blank};
use crate::shared::store::{merge, Record, RecordFilter, RecordId};

/// Serialized with its capitalized name ("Beginner").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CourseLevel {
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseStatus {
    Active,
    #[default]
    Draft,
    Archived,
}

impl CourseStatus {
    pub const ALL: [CourseStatus; 3] = [
        CourseStatus::Active,
        CourseStatus::Draft,
        CourseStatus::Archived,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CourseStatus::Active => "active",
            CourseStatus::Draft => "draft",
            CourseStatus::Archived => "archived",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurriculumModule {
    pub module: String,
    pub lessons: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: RecordId,
    pub title: String,
    pub description: String,
    pub long_description: String,
    pub instructor: String,
    /// Free text, e.g. "8 weeks".
    pub duration: String,
    pub level: CourseLevel,
    pub price: f64,
    pub category: String,
    pub features: Vec<String>,
    pub curriculum: Vec<CurriculumModule>,
    pub rating: f64,
    pub students_enrolled: u32,
    pub tags: Vec<String>,
    pub status: CourseStatus,
    pub image: String,
}

impl Course {
    pub fn is_active(&self) -> bool {
        self.status == CourseStatus::Active
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDraft {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub long_description: String,
    pub instructor: String,
    #[serde(default)]
    pub duration: String,
    pub level: CourseLevel,
    pub price: f64,
    pub category: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub curriculum: Vec<CurriculumModule>,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub students_enrolled: u32,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub status: CourseStatus,
    #[serde(default)]
    pub image: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoursePatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub long_description: Option<String>,
    pub instructor: Option<String>,
    pub duration: Option<String>,
    pub level: Option<CourseLevel>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub features: Option<Vec<String>>,
    pub curriculum: Option<Vec<CurriculumModule>>,
    pub rating: Option<f64>,
    pub students_enrolled: Option<u32>,
    pub tags: Option<Vec<String>>,
    pub status: Option<CourseStatus>,
    pub image: Option<String>,
}

impl Record for Course {
    type Draft = CourseDraft;
    type Patch = CoursePatch;

    const KIND: &'static str = "Course";

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn from_draft(id: RecordId, d: CourseDraft) -> Self {
        Self {
            id,
            title: d.title,
            description: d.description,
            long_description: d.long_description,
            instructor: d.instructor,
            duration: d.duration,
            level: d.level,
            price: d.price,
            category: d.category,
            features: d.features,
            curriculum: d.curriculum,
            rating: d.rating,
            students_enrolled: d.students_enrolled,
            tags: d.tags,
            status: d.status,
            image: d.image,
        }
    }

    fn apply_patch(&mut self, p: CoursePatch) {
        merge(&mut self.title, p.title);
        merge(&mut self.description, p.description);
        merge(&mut self.long_description, p.long_description);
        merge(&mut self.instructor, p.instructor);
        merge(&mut self.duration, p.duration);
        merge(&mut self.level, p.level);
        merge(&mut self.price, p.price);
        merge(&mut self.category, p.category);
        merge(&mut self.features, p.features);
        merge(&mut self.curriculum, p.curriculum);
        merge(&mut self.rating, p.rating);
        merge(&mut self.students_enrolled, p.students_enrolled);
        merge(&mut self.tags, p.tags);
        merge(&mut self.status, p.status);
        merge(&mut self.image, p.image);
    }
}

//
// ──────────────────────────────────────────────────────────
// Listing
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default)]
pub struct CourseFilter {
    pub search: Option<String>,
    pub category: Option<String>,
    pub level: Option<CourseLevel>,
    pub status: Option<CourseStatus>,
}

impl RecordFilter<Course> for CourseFilter {
    fn matches(&self, course: &Course) -> bool {
        if let Some(term) = non_blank(self.search.as_deref()) {
            let fields = [
                course.title.as_str(),
                course.description.as_str(),
                course.instructor.as_str(),
            ]
            .into_iter()
            .chain(course.tags.iter().map(String::as_str));

            if !any_contains(fields, term) {
                return false;
            }
        }

        non_blank(self.category.as_deref()).map_or(true, |c| course.category == c)
            && self.level.map_or(true, |l| course.level == l)
            && self.status.map_or(true, |s| course.status == s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CourseSort {
    /// Most recently added first
    Newest,
    Rating,
    Students,
    PriceAsc,
    PriceDesc,
}

/// Stable sort; equal keys keep insertion order.
pub fn sort_courses(courses: &mut [Course], sort: Option<CourseSort>) {
    let Some(sort) = sort else {
        return;
    };

    match sort {
        CourseSort::Newest => courses.reverse(),
        CourseSort::Rating => courses.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        CourseSort::Students => {
            courses.sort_by(|a, b| b.students_enrolled.cmp(&a.students_enrolled))
        }
        CourseSort::PriceAsc => courses.sort_by(cmp_price),
        CourseSort::PriceDesc => courses.sort_by(|a, b| cmp_price(b, a)),
    }
}

fn cmp_price(a: &Course, b: &Course) -> Ordering {
    a.price.total_cmp(&b.price)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(id: &str, category: &str, price: f64, rating: f64, students: u32) -> Course {
        Course::from_draft(
            RecordId::from(id),
            CourseDraft {
                title: format!("Course {}", id),
                description: "Learn things".to_string(),
                long_description: String::new(),
                instructor: "Sarah Johnson".to_string(),
                duration: "6 weeks".to_string(),
                level: CourseLevel::Beginner,
                price,
                category: category.to_string(),
                features: vec![],
                curriculum: vec![],
                rating,
                students_enrolled: students,
                tags: vec!["javascript".to_string()],
                status: CourseStatus::Active,
                image: String::new(),
            },
        )
    }

    fn ids(courses: &[Course]) -> Vec<&str> {
        courses.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn test_category_filter_is_exact_and_case_sensitive() {
        let courses = vec![
            course("1", "Web Development", 10.0, 4.0, 1),
            course("2", "web development", 10.0, 4.0, 1),
            course("3", "Web Development Advanced", 10.0, 4.0, 1),
        ];
        let filter = CourseFilter {
            category: Some("Web Development".to_string()),
            ..Default::default()
        };

        let matched: Vec<_> = courses.into_iter().filter(|c| filter.matches(c)).collect();

        assert_eq!(ids(&matched), vec!["1"]);
    }

    #[test]
    fn test_blank_category_means_no_filter() {
        let filter = CourseFilter {
            category: Some(" ".to_string()),
            ..Default::default()
        };

        assert!(filter.matches(&course("1", "Web Development", 10.0, 4.0, 1)));
    }

    #[test]
    fn test_search_covers_instructor_and_tags() {
        let c = course("1", "Web Development", 10.0, 4.0, 1);

        for term in ["sarah", "JAVASCRIPT"] {
            let filter = CourseFilter {
                search: Some(term.to_string()),
                ..Default::default()
            };
            assert!(filter.matches(&c), "term {term}");
        }
    }

    #[test]
    fn test_sorts() {
        let base = vec![
            course("1", "A", 199.0, 4.8, 1250),
            course("2", "A", 149.0, 4.9, 850),
            course("3", "A", 249.0, 4.8, 2000),
        ];

        let mut v = base.clone();
        sort_courses(&mut v, Some(CourseSort::Newest));
        assert_eq!(ids(&v), vec!["3", "2", "1"]);

        let mut v = base.clone();
        sort_courses(&mut v, Some(CourseSort::Rating));
        assert_eq!(ids(&v), vec!["2", "1", "3"]);

        let mut v = base.clone();
        sort_courses(&mut v, Some(CourseSort::Students));
        assert_eq!(ids(&v), vec!["3", "1", "2"]);

        let mut v = base.clone();
        sort_courses(&mut v, Some(CourseSort::PriceAsc));
        assert_eq!(ids(&v), vec!["2", "1", "3"]);

        let mut v = base.clone();
        sort_courses(&mut v, Some(CourseSort::PriceDesc));
        assert_eq!(ids(&v), vec!["3", "1", "2"]);

        let mut v = base.clone();
        sort_courses(&mut v, None);
        assert_eq!(ids(&v), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_wire_format() {
        let json = serde_json::to_value(course("1", "A", 1.0, 1.0, 3)).unwrap();

        assert_eq!(json["level"], "Beginner");
        assert_eq!(json["status"], "active");
        assert_eq!(json["studentsEnrolled"], 3);
        assert!(json.get("longDescription").is_some());
    }
}
