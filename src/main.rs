pub mod modules;
pub use modules::auth;
pub mod health;

mod api;
mod seed;
mod shared;
mod store;

use crate::api::openapi::ApiDoc;
use crate::auth::adapter::outgoing::jwt::JwtTokenService;
use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::modules::contact::application::domain::entities::ContactMessage;
use crate::modules::contact::application::ports::incoming::use_cases::SubmitContactUseCase;
use crate::modules::course::application::domain::entities::Course;
use crate::modules::course::application::ports::incoming::use_cases::EnrollmentUseCases;
use crate::modules::dashboard::application::ports::incoming::use_cases::DashboardUseCases;
use crate::modules::project::application::domain::entities::Project;
use crate::modules::service::application::domain::entities::Service;
use crate::modules::team::application::domain::entities::TeamMember;
use crate::modules::testimonial::application::domain::entities::Testimonial;
use crate::shared::api::{custom_json_config, custom_query_config};
use crate::shared::config::AppConfig;
use crate::shared::store::CrudUseCases;
use crate::store::{Latency, RecordStore};

use actix_web::{web, App, HttpServer};
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub projects: Arc<dyn CrudUseCases<Project> + Send + Sync>,
    pub services: Arc<dyn CrudUseCases<Service> + Send + Sync>,
    pub testimonials: Arc<dyn CrudUseCases<Testimonial> + Send + Sync>,
    pub team: Arc<dyn CrudUseCases<TeamMember> + Send + Sync>,
    pub courses: Arc<dyn CrudUseCases<Course> + Send + Sync>,
    pub messages: Arc<dyn CrudUseCases<ContactMessage> + Send + Sync>,
    pub contact: Arc<dyn SubmitContactUseCase + Send + Sync>,
    pub enrollments: Arc<dyn EnrollmentUseCases + Send + Sync>,
    pub dashboard: Arc<dyn DashboardUseCases + Send + Sync>,
    pub auth: AuthUseCases,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::from_env()?;

    let store = if config.seed_demo_data {
        info!("Loading demo catalogue");
        RecordStore::seeded()
    } else {
        RecordStore::empty()
    };

    let jwt_service = JwtTokenService::new(config.jwt.clone());
    let state = store.app_state(
        Arc::new(jwt_service),
        Latency {
            login: config.login_latency,
            contact: config.contact_latency,
        },
    );

    let server_url = config.server_url();
    info!(
        environment = %config.environment,
        url = %server_url,
        "Server listening"
    );

    let openapi = ApiDoc::openapi();

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(custom_json_config())
            .app_data(custom_query_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::modules::{
        contact::adapter::incoming::web::routes as contact,
        course::adapter::incoming::web::routes as course,
        dashboard::adapter::incoming::web::routes as dashboard,
        navigation::adapter::incoming::web::routes as navigation,
        project::adapter::incoming::web::routes as project,
        service::adapter::incoming::web::routes as service,
        team::adapter::incoming::web::routes as team,
        testimonial::adapter::incoming::web::routes as testimonial,
    };

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::register_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::login_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::logout_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::fetch_session_handler);
    // Projects
    cfg.service(project::get_projects_handler);
    cfg.service(project::get_single_project_handler);
    cfg.service(project::create_project_handler);
    cfg.service(project::patch_project_handler);
    cfg.service(project::hard_delete_project_handler);
    // Services
    cfg.service(service::get_services_handler);
    cfg.service(service::get_single_service_handler);
    cfg.service(service::create_service_handler);
    cfg.service(service::patch_service_handler);
    cfg.service(service::delete_service_handler);
    // Testimonials
    cfg.service(testimonial::get_testimonials_handler);
    cfg.service(testimonial::create_testimonial_handler);
    cfg.service(testimonial::patch_testimonial_handler);
    cfg.service(testimonial::delete_testimonial_handler);
    // Team
    cfg.service(team::get_team_handler);
    cfg.service(team::create_team_member_handler);
    cfg.service(team::patch_team_member_handler);
    cfg.service(team::delete_team_member_handler);
    // Courses and enrollments
    cfg.service(course::get_courses_handler);
    cfg.service(course::get_single_course_handler);
    cfg.service(course::get_admin_courses_handler);
    cfg.service(course::create_course_handler);
    cfg.service(course::patch_course_handler);
    cfg.service(course::delete_course_handler);
    cfg.service(course::enroll_handler);
    cfg.service(course::get_my_enrollments_handler);
    cfg.service(course::update_progress_handler);
    cfg.service(course::update_enrollment_status_handler);
    cfg.service(course::get_all_enrollments_handler);
    // Contact
    cfg.service(contact::submit_contact_handler);
    cfg.service(contact::get_messages_handler);
    cfg.service(contact::patch_message_handler);
    cfg.service(contact::delete_message_handler);
    // Dashboards
    cfg.service(dashboard::admin_dashboard_handler);
    cfg.service(dashboard::student_dashboard_handler);
    // Navigation
    cfg.service(navigation::resolve_navigation_handler);
    cfg.service(navigation::admin_page_handler);
    cfg.service(navigation::student_page_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
