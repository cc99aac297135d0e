use serde::Serialize;

use crate::auth::application::domain::entities::{SessionState, UserRole};

pub const LOGIN_PATH: &str = "/login";

/// Pages of the site. Anything else is "not found".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteRoute {
    Home,
    About,
    Services,
    Projects,
    Courses,
    CourseDetail(String),
    Contact,
    Login,
    Register,
    /// `/admin` and everything below it
    Admin,
    /// `/student` and everything below it
    Student,
}

impl SiteRoute {
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        let route = match segments.as_slice() {
            [] => SiteRoute::Home,
            ["about"] => SiteRoute::About,
            ["services"] => SiteRoute::Services,
            ["projects"] => SiteRoute::Projects,
            ["courses"] => SiteRoute::Courses,
            ["courses", id] => SiteRoute::CourseDetail((*id).to_string()),
            ["contact"] => SiteRoute::Contact,
            ["login"] => SiteRoute::Login,
            ["register"] => SiteRoute::Register,
            ["admin", ..] => SiteRoute::Admin,
            ["student", ..] => SiteRoute::Student,
            _ => return None,
        };
        Some(route)
    }

    /// Role needed to view the page, if any.
    pub fn required_role(&self) -> Option<UserRole> {
        match self {
            SiteRoute::Admin => Some(UserRole::Admin),
            SiteRoute::Student => Some(UserRole::Student),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SiteRoute::Home => "home",
            SiteRoute::About => "about",
            SiteRoute::Services => "services",
            SiteRoute::Projects => "projects",
            SiteRoute::Courses => "courses",
            SiteRoute::CourseDetail(_) => "course-detail",
            SiteRoute::Contact => "contact",
            SiteRoute::Login => "login",
            SiteRoute::Register => "register",
            SiteRoute::Admin => "admin",
            SiteRoute::Student => "student",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Access {
    Allow,
    /// Session not restored yet; the page shows a spinner.
    Pending,
    RedirectToLogin,
    NotFound,
}

pub fn resolve_access(path: &str, session: &SessionState) -> Access {
    let Some(route) = SiteRoute::parse(path) else {
        return Access::NotFound;
    };

    match route.required_role() {
        None => Access::Allow,
        Some(_) if !session.is_resolved() => Access::Pending,
        Some(role) if session.has_role(role) => Access::Allow,
        Some(_) => Access::RedirectToLogin,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::auth_helper::demo_user;

    fn signed_in(role: UserRole) -> SessionState {
        SessionState::Authenticated(demo_user(role))
    }

    #[test]
    fn test_parse_known_routes() {
        assert_eq!(SiteRoute::parse("/"), Some(SiteRoute::Home));
        assert_eq!(
            SiteRoute::parse("/courses/42"),
            Some(SiteRoute::CourseDetail("42".to_string()))
        );
        assert_eq!(SiteRoute::parse("/admin/courses/new"), Some(SiteRoute::Admin));
        assert_eq!(SiteRoute::parse("/student?tab=progress"), Some(SiteRoute::Student));
        assert_eq!(SiteRoute::parse("/courses/42/reviews"), None);
        assert_eq!(SiteRoute::parse("/pricing"), None);
    }

    #[test]
    fn test_public_routes_always_allowed() {
        for path in ["/", "/about", "/courses/1", "/login", "/register"] {
            assert_eq!(
                resolve_access(path, &SessionState::Unauthenticated),
                Access::Allow,
                "{path}"
            );
        }
    }

    #[test]
    fn test_admin_gate() {
        assert_eq!(
            resolve_access("/admin", &SessionState::Unauthenticated),
            Access::RedirectToLogin
        );
        assert_eq!(
            resolve_access("/admin/messages", &signed_in(UserRole::Student)),
            Access::RedirectToLogin
        );
        assert_eq!(
            resolve_access("/admin", &signed_in(UserRole::Admin)),
            Access::Allow
        );
    }

    #[test]
    fn test_student_gate() {
        assert_eq!(
            resolve_access("/student", &signed_in(UserRole::Admin)),
            Access::RedirectToLogin
        );
        assert_eq!(
            resolve_access("/student", &signed_in(UserRole::User)),
            Access::RedirectToLogin
        );
        assert_eq!(
            resolve_access("/student/courses", &signed_in(UserRole::Student)),
            Access::Allow
        );
    }

    #[test]
    fn test_loading_session_is_pending_on_gated_routes() {
        assert_eq!(resolve_access("/admin", &SessionState::Loading), Access::Pending);
        assert_eq!(resolve_access("/about", &SessionState::Loading), Access::Allow);
    }

    #[test]
    fn test_unknown_path() {
        assert_eq!(
            resolve_access("/nowhere", &signed_in(UserRole::Admin)),
            Access::NotFound
        );
    }
}
