use actix_web::{get, web, Responder};

use crate::modules::project::application::domain::entities::ProjectFilter;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/projects")]
pub async fn get_projects_handler(
    query: web::Query<ProjectFilter>,
    data: web::Data<AppState>,
) -> impl Responder {
    let filter = query.into_inner();
    ApiResponse::success(data.projects.list(&filter).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    async fn fetch(uri: &str) -> Value {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().seeded().build())
                .service(get_projects_handler),
        )
        .await;

        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        test::read_body_json(resp).await
    }

    #[actix_web::test]
    async fn test_lists_all_in_insertion_order() {
        let body = fetch("/api/projects").await;
        let items = body["data"].as_array().unwrap();

        assert_eq!(items.len(), 4);
        assert_eq!(items[0]["id"], "1");
        assert_eq!(items[3]["id"], "4");
    }

    #[actix_web::test]
    async fn test_filters_by_exact_category() {
        let body = fetch("/api/projects?category=Web%20Development").await;
        let items = body["data"].as_array().unwrap();

        assert_eq!(items.len(), 2);
        assert!(items
            .iter()
            .all(|p| p["category"] == "Web Development"));
    }

    #[actix_web::test]
    async fn test_search_and_featured_combine() {
        let body = fetch("/api/projects?search=react&featured=true").await;
        let items = body["data"].as_array().unwrap();

        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|p| p["featured"] == true));
    }

    #[actix_web::test]
    async fn test_filters_by_status() {
        let body = fetch("/api/projects?status=in-progress").await;
        let items = body["data"].as_array().unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["title"], "AI Analytics Dashboard");
    }
}
