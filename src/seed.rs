//! Demo catalogue loaded at startup when `SEED_DEMO_DATA` is on.
//! Ids are the small integers the demo frontend links to.

use chrono::{DateTime, Duration, Utc};

use crate::modules::contact::application::domain::entities::{
    ContactMessage, MessagePriority, MessageStatus,
};
use crate::modules::course::application::domain::enrollment::{Enrollment, EnrollmentStatus};
use crate::modules::course::application::domain::entities::{
    Course, CourseLevel, CourseStatus, CurriculumModule,
};
use crate::modules::project::application::domain::entities::{Project, ProjectStatus};
use crate::modules::service::application::domain::entities::Service;
use crate::modules::team::application::domain::entities::{SocialLinks, TeamMember};
use crate::modules::testimonial::application::domain::entities::Testimonial;
use crate::shared::store::RecordId;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn days_ago(now: DateTime<Utc>, days: i64) -> DateTime<Utc> {
    now - Duration::days(days)
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: RecordId::from("1"),
            title: "E-Commerce Platform".to_string(),
            description: "A full-featured online store with payments, inventory and an admin back office.".to_string(),
            image: "/images/projects/ecommerce.jpg".to_string(),
            category: "Web Development".to_string(),
            technologies: strings(&["React", "Node.js", "PostgreSQL", "Stripe"]),
            link: Some("https://shop.example.com".to_string()),
            status: ProjectStatus::Completed,
            featured: true,
        },
        Project {
            id: RecordId::from("2"),
            title: "Mobile Banking App".to_string(),
            description: "Secure cross-platform banking with biometric sign-in and instant transfers.".to_string(),
            image: "/images/projects/banking.jpg".to_string(),
            category: "Mobile Development".to_string(),
            technologies: strings(&["React Native", "TypeScript", "Firebase"]),
            link: Some("https://bank.example.com".to_string()),
            status: ProjectStatus::Completed,
            featured: true,
        },
        Project {
            id: RecordId::from("3"),
            title: "AI Analytics Dashboard".to_string(),
            description: "Real-time business metrics with forecasting models and anomaly alerts.".to_string(),
            image: "/images/projects/analytics.jpg".to_string(),
            category: "Data Science".to_string(),
            technologies: strings(&["Python", "TensorFlow", "React", "D3.js"]),
            link: None,
            status: ProjectStatus::InProgress,
            featured: false,
        },
        Project {
            id: RecordId::from("4"),
            title: "Healthcare Portal".to_string(),
            description: "Patient records, appointment booking and telehealth visits in one place.".to_string(),
            image: "/images/projects/healthcare.jpg".to_string(),
            category: "Web Development".to_string(),
            technologies: strings(&["Next.js", "GraphQL", "MongoDB"]),
            link: None,
            status: ProjectStatus::Planning,
            featured: false,
        },
    ]
}

pub fn services() -> Vec<Service> {
    vec![
        Service {
            id: RecordId::from("1"),
            title: "Web Development".to_string(),
            description: "Fast, accessible websites and web applications built to scale.".to_string(),
            icon: "code".to_string(),
            features: strings(&["Responsive design", "SEO optimization", "CMS integration"]),
            price: Some("From $2,999".to_string()),
        },
        Service {
            id: RecordId::from("2"),
            title: "Mobile App Development".to_string(),
            description: "Native and cross-platform apps for iOS and Android.".to_string(),
            icon: "smartphone".to_string(),
            features: strings(&["iOS and Android", "Push notifications", "Offline support"]),
            price: Some("From $4,999".to_string()),
        },
        Service {
            id: RecordId::from("3"),
            title: "Cloud Solutions".to_string(),
            description: "Infrastructure design, migration and managed hosting.".to_string(),
            icon: "cloud".to_string(),
            features: strings(&["AWS and Azure", "CI/CD pipelines", "Monitoring"]),
            price: None,
        },
        Service {
            id: RecordId::from("4"),
            title: "UI/UX Design".to_string(),
            description: "Research-driven interfaces that users enjoy.".to_string(),
            icon: "palette".to_string(),
            features: strings(&["User research", "Prototyping", "Design systems"]),
            price: Some("From $1,499".to_string()),
        },
    ]
}

pub fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            id: RecordId::from("1"),
            name: "Emily Carter".to_string(),
            role: "CEO".to_string(),
            company: "Brightline Retail".to_string(),
            content: "TechCraft rebuilt our store in eight weeks and sales went up by a third.".to_string(),
            rating: 5,
            avatar: "/avatars/emily.jpg".to_string(),
        },
        Testimonial {
            id: RecordId::from("2"),
            name: "David Kim".to_string(),
            role: "CTO".to_string(),
            company: "FinEdge".to_string(),
            content: "Their team shipped our banking app on time with zero security findings.".to_string(),
            rating: 5,
            avatar: "/avatars/david.jpg".to_string(),
        },
        Testimonial {
            id: RecordId::from("3"),
            name: "Laura Martinez".to_string(),
            role: "Product Manager".to_string(),
            company: "CareFirst".to_string(),
            content: "Great communication and a clean handover. We will work with them again.".to_string(),
            rating: 4,
            avatar: "/avatars/laura.jpg".to_string(),
        },
    ]
}

pub fn team() -> Vec<TeamMember> {
    vec![
        TeamMember {
            id: RecordId::from("1"),
            name: "Alex Thompson".to_string(),
            role: "Founder & Lead Engineer".to_string(),
            bio: "Fifteen years building products for startups and enterprises.".to_string(),
            image: "/images/team/alex.jpg".to_string(),
            social: SocialLinks {
                github: Some("https://github.com/alexthompson".to_string()),
                linkedin: Some("https://linkedin.com/in/alexthompson".to_string()),
                twitter: None,
            },
        },
        TeamMember {
            id: RecordId::from("2"),
            name: "Sarah Johnson".to_string(),
            role: "Head of Education".to_string(),
            bio: "Runs the academy and teaches the web development bootcamp.".to_string(),
            image: "/images/team/sarah.jpg".to_string(),
            social: SocialLinks {
                github: None,
                linkedin: Some("https://linkedin.com/in/sarahjohnson".to_string()),
                twitter: Some("https://twitter.com/sarahcodes".to_string()),
            },
        },
        TeamMember {
            id: RecordId::from("3"),
            name: "Marcus Lee".to_string(),
            role: "Design Lead".to_string(),
            bio: "Turns messy requirements into calm interfaces.".to_string(),
            image: "/images/team/marcus.jpg".to_string(),
            social: SocialLinks::default(),
        },
    ]
}

fn module(name: &str, lessons: &[&str]) -> CurriculumModule {
    CurriculumModule {
        module: name.to_string(),
        lessons: strings(lessons),
    }
}

pub fn courses() -> Vec<Course> {
    vec![
        Course {
            id: RecordId::from("1"),
            title: "Complete Web Development Bootcamp".to_string(),
            description: "Go from zero to full-stack developer.".to_string(),
            long_description: "HTML, CSS and JavaScript fundamentals, then React on the front end and Node.js on the back end, finishing with a deployed portfolio project.".to_string(),
            instructor: "Sarah Johnson".to_string(),
            duration: "12 weeks".to_string(),
            level: CourseLevel::Beginner,
            price: 199.0,
            category: "Web Development".to_string(),
            features: strings(&["40+ hours of video", "Portfolio project", "Certificate"]),
            curriculum: vec![
                module("Foundations", &["HTML basics", "CSS layout", "JavaScript essentials"]),
                module("Front End", &["React components", "State and effects", "Routing"]),
                module("Back End", &["Node.js and Express", "REST APIs", "Databases"]),
            ],
            rating: 4.8,
            students_enrolled: 1250,
            tags: strings(&["html", "css", "javascript", "react", "node"]),
            status: CourseStatus::Active,
            image: "/images/courses/web-bootcamp.jpg".to_string(),
        },
        Course {
            id: RecordId::from("2"),
            title: "Advanced React Patterns".to_string(),
            description: "Compound components, render props and custom hooks.".to_string(),
            long_description: "Deep dive into the patterns used by large React codebases, with performance profiling and testing.".to_string(),
            instructor: "Alex Thompson".to_string(),
            duration: "6 weeks".to_string(),
            level: CourseLevel::Advanced,
            price: 149.0,
            category: "Web Development".to_string(),
            features: strings(&["Code reviews", "Real-world exercises"]),
            curriculum: vec![
                module("Component Patterns", &["Compound components", "Render props"]),
                module("Hooks", &["Custom hooks", "Reducers", "Context performance"]),
            ],
            rating: 4.9,
            students_enrolled: 850,
            tags: strings(&["react", "javascript", "hooks"]),
            status: CourseStatus::Active,
            image: "/images/courses/react-patterns.jpg".to_string(),
        },
        Course {
            id: RecordId::from("3"),
            title: "Flutter Mobile Development".to_string(),
            description: "Build beautiful apps for iOS and Android from one codebase.".to_string(),
            long_description: "Dart fundamentals, widget composition, state management and publishing to both app stores.".to_string(),
            instructor: "Marcus Lee".to_string(),
            duration: "8 weeks".to_string(),
            level: CourseLevel::Intermediate,
            price: 179.0,
            category: "Mobile Development".to_string(),
            features: strings(&["Two published apps", "Store submission guide"]),
            curriculum: vec![
                module("Dart", &["Syntax", "Async programming"]),
                module("Flutter", &["Widgets", "State management", "Publishing"]),
            ],
            rating: 4.7,
            students_enrolled: 620,
            tags: strings(&["flutter", "dart", "mobile"]),
            status: CourseStatus::Active,
            image: "/images/courses/flutter.jpg".to_string(),
        },
        Course {
            id: RecordId::from("4"),
            title: "Machine Learning Fundamentals".to_string(),
            description: "Practical machine learning with Python.".to_string(),
            long_description: "Regression, classification and clustering with scikit-learn, plus an introduction to neural networks.".to_string(),
            instructor: "Priya Patel".to_string(),
            duration: "10 weeks".to_string(),
            level: CourseLevel::Intermediate,
            price: 249.0,
            category: "Data Science".to_string(),
            features: strings(&["Jupyter notebooks", "Capstone project"]),
            curriculum: vec![
                module("Foundations", &["NumPy and pandas", "Model evaluation"]),
                module("Models", &["Regression", "Classification", "Clustering"]),
            ],
            rating: 4.6,
            students_enrolled: 430,
            tags: strings(&["python", "machine learning", "data"]),
            status: CourseStatus::Draft,
            image: "/images/courses/ml.jpg".to_string(),
        },
    ]
}

pub fn enrollments(now: DateTime<Utc>) -> Vec<Enrollment> {
    vec![
        Enrollment {
            id: RecordId::from("1"),
            student_id: RecordId::from("2"),
            course_id: RecordId::from("1"),
            progress: 65,
            status: EnrollmentStatus::Active,
            enrolled_at: days_ago(now, 30),
            completed_at: None,
        },
        Enrollment {
            id: RecordId::from("2"),
            student_id: RecordId::from("2"),
            course_id: RecordId::from("2"),
            progress: 100,
            status: EnrollmentStatus::Completed,
            enrolled_at: days_ago(now, 60),
            completed_at: Some(days_ago(now, 10)),
        },
        Enrollment {
            id: RecordId::from("3"),
            student_id: RecordId::from("4"),
            course_id: RecordId::from("3"),
            progress: 30,
            status: EnrollmentStatus::Paused,
            enrolled_at: days_ago(now, 45),
            completed_at: None,
        },
    ]
}

pub fn messages(now: DateTime<Utc>) -> Vec<ContactMessage> {
    vec![
        ContactMessage {
            id: RecordId::from("1"),
            name: "John Smith".to_string(),
            email: "john@example.com".to_string(),
            message: "We need a new e-commerce site before the holiday season. Can we talk this week?".to_string(),
            subject: Some("E-commerce project".to_string()),
            phone: Some("+1 555 0100".to_string()),
            date: days_ago(now, 1),
            status: MessageStatus::New,
            priority: Some(MessagePriority::High),
        },
        ContactMessage {
            id: RecordId::from("2"),
            name: "Maria Garcia".to_string(),
            email: "maria@example.com".to_string(),
            message: "Do you offer group discounts for the bootcamp?".to_string(),
            subject: Some("Course pricing".to_string()),
            phone: None,
            date: days_ago(now, 3),
            status: MessageStatus::Read,
            priority: Some(MessagePriority::Medium),
        },
        ContactMessage {
            id: RecordId::from("3"),
            name: "Tom Wilson".to_string(),
            email: "tom@example.com".to_string(),
            message: "Thanks for the quick turnaround on the landing page.".to_string(),
            subject: None,
            phone: None,
            date: days_ago(now, 7),
            status: MessageStatus::Replied,
            priority: None,
        },
    ]
}
