use actix_web::{get, web, Responder};
use serde::{Deserialize, Serialize};

use crate::auth::adapter::incoming::web::extractors::auth::CurrentSession;
use crate::modules::navigation::application::domain::site_route::{
    resolve_access, Access, SiteRoute, LOGIN_PATH,
};
use crate::shared::api::ApiResponse;

#[derive(Debug, Deserialize)]
pub struct NavigationQuery {
    pub path: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationDecision {
    pub path: String,
    pub route: Option<&'static str>,
    pub access: Access,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_to: Option<&'static str>,
}

/// What the client router should do with `path` for the caller's session.
#[get("/api/navigation/resolve")]
pub async fn resolve_navigation_handler(
    session: CurrentSession,
    query: web::Query<NavigationQuery>,
) -> impl Responder {
    let NavigationQuery { path } = query.into_inner();
    let access = resolve_access(&path, &session.0);

    ApiResponse::success(NavigationDecision {
        route: SiteRoute::parse(&path).map(|r| r.name()),
        redirect_to: (access == Access::RedirectToLogin).then_some(LOGIN_PATH),
        access,
        path,
    })
}
