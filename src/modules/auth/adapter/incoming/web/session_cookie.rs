use actix_web::cookie::{time::Duration as CookieDuration, Cookie, SameSite};
use chrono::{DateTime, Utc};

/// Cookie carrying the serialized session (the signed user blob).
pub const SESSION_COOKIE: &str = "techcraft_session";

pub fn session_cookie(token: String, expires_at: DateTime<Utc>) -> Cookie<'static> {
    let max_age = (expires_at - Utc::now()).num_seconds().max(0);

    Cookie::build(SESSION_COOKIE, token)
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(CookieDuration::seconds(max_age))
        .finish()
}

/// Expired cookie that makes the browser drop the session.
pub fn removal_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::new(SESSION_COOKIE, "");
    cookie.set_path("/");
    cookie.make_removal();
    cookie
}
