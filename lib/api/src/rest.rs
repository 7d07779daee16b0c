use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer, Result as ActixResult};
use serde::Deserialize;
use skillrec_core::{Error, Recommender};
use std::sync::Arc;
use tracing::{debug, warn};

const INDEX_HTML: &str = include_str!("../static/index.html");

#[derive(Deserialize)]
struct RecommendForm {
    skill: Option<String>,
}

pub struct RestApi;

impl RestApi {
    pub async fn start(
        recommender: Arc<Recommender>,
        host: String,
        port: u16,
    ) -> std::io::Result<()> {
        HttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);

            App::new()
                .wrap(cors)
                .app_data(web::Data::new(recommender.clone()))
                .configure(Self::configure)
        })
        .bind((host.as_str(), port))?
        .run()
        .await
    }

    /// Register the routes; expects `web::Data<Arc<Recommender>>` in app data
    pub fn configure(cfg: &mut web::ServiceConfig) {
        cfg.route("/", web::get().to(index))
            .route("/recommend", web::post().to(recommend));
    }
}

async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(INDEX_HTML)
}

async fn recommend(
    recommender: web::Data<Arc<Recommender>>,
    form: web::Form<RecommendForm>,
) -> ActixResult<HttpResponse> {
    let skill = match form.into_inner().skill {
        Some(s) => s,
        None => {
            return Ok(HttpResponse::BadRequest().json(serde_json::json!({
                "error": "Missing 'skill' field"
            })));
        }
    };

    debug!("Recommendation request for '{}'", skill);

    match recommender.recommend(&skill) {
        Ok(recommendations) => Ok(HttpResponse::Ok().json(serde_json::json!({
            "recommendations": recommendations
        }))),
        // Unknown skills are a normal answer for the form client, not an HTTP error
        Err(e @ Error::SkillNotFound(_)) => {
            warn!("Skill not found: '{}'", skill);
            Ok(HttpResponse::Ok().json(serde_json::json!({
                "error": e.to_string()
            })))
        }
        Err(e) => Ok(HttpResponse::InternalServerError().json(serde_json::json!({
            "error": e.to_string()
        }))),
    }
}
