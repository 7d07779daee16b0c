// REST endpoint tests
use actix_web::{http::StatusCode, test, web, App};
use skillrec_api::RestApi;
use skillrec_core::{Catalog, Recommender, SkillRecord};
use std::sync::Arc;

fn recommender() -> Arc<Recommender> {
    let catalog = Catalog::from_records(vec![
        SkillRecord::new("Python", "Data Science", "general purpose", "Rising", "Tech", "python.org"),
        SkillRecord::new("R", "Data Science Stats", "general purpose stats", "Stable", "Tech", "cran"),
        SkillRecord::new("Welding", "Metalwork", "joins metal", "Stable", "Manufacturing", ""),
    ])
    .unwrap();
    Arc::new(Recommender::new(catalog).unwrap())
}

#[actix_web::test]
async fn test_index_page() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(recommender()))
            .configure(RestApi::configure),
    )
    .await;

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    assert!(std::str::from_utf8(&body).unwrap().contains("<form"));
}

#[actix_web::test]
async fn test_recommend() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(recommender()))
            .configure(RestApi::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/recommend")
        .set_form([("skill", "PYTHON")])
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    let recs = body["recommendations"].as_array().unwrap();
    assert_eq!(recs.len(), 2);
    assert_eq!(recs[0]["Skill"], "R");
    assert_eq!(recs[0]["Resources"], "cran");
    assert_eq!(recs[1]["Skill"], "Welding");
    assert_eq!(recs[1]["Similarity_Score"], "0.00");
}

#[actix_web::test]
async fn test_recommend_unknown_skill() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(recommender()))
            .configure(RestApi::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/recommend")
        .set_form([("skill", "NonexistentSkill123")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Skill not found in database");
}

#[actix_web::test]
async fn test_recommend_missing_field() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(recommender()))
            .configure(RestApi::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/recommend")
        .set_form([("other", "value")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Missing 'skill' field");
}

#[actix_web::test]
async fn test_recommend_blank_skill_is_not_found() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(recommender()))
            .configure(RestApi::configure),
    )
    .await;

    for value in ["", "   "] {
        let req = test::TestRequest::post()
            .uri("/recommend")
            .set_form([("skill", value)])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Skill not found in database");
    }
}
