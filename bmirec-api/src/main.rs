mod dataset;

use std::{
    env,
    path::{Path, PathBuf},
};

use actix_cors::Cors;
use actix_web::{get, post, web, App, HttpResponse, HttpServer, Responder};
use log::info;

use bmirec_engine::{artifacts::Artifacts, Evaluator};
use bmirec_model::profile::UserProfile;

use crate::dataset::DatasetPreview;

#[post("/evaluate")]
async fn evaluate(
    evaluator: web::Data<Evaluator>,
    profile: web::Json<UserProfile>,
) -> impl Responder {
    match evaluator.evaluate(&profile) {
        Ok(evaluation) => HttpResponse::Ok().json(evaluation),
        Err(e) => HttpResponse::UnprocessableEntity().json(e.to_string()),
    }
}

#[get("/dataset")]
async fn dataset_preview(dataset_path: web::Data<PathBuf>) -> impl Responder {
    match DatasetPreview::from_file(&dataset_path, dataset::PREVIEW_ROWS) {
        Ok(preview) => HttpResponse::Ok().json(preview),
        Err(e) => HttpResponse::InternalServerError().json(e.to_string()),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    log4rs::init_file("log4rs.yml", Default::default()).unwrap();

    let artifacts_dir =
        env::var("BMIREC_ARTIFACTS_DIR").unwrap_or_else(|_| "artifacts".to_owned());
    let dataset_path = PathBuf::from(
        env::var("BMIREC_DATASET_PATH")
            .unwrap_or_else(|_| "data/health_data_sample.csv".to_owned()),
    );
    let bind_addr = env::var("BMIREC_BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_owned());

    info!("Loading model artifacts from {}", artifacts_dir);
    let artifacts = Artifacts::load(Path::new(&artifacts_dir)).unwrap();
    let evaluator = web::Data::new(Evaluator::from_artifacts(artifacts));
    let dataset_path = web::Data::new(dataset_path);

    info!("Starting server on {}", bind_addr);
    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .app_data(evaluator.clone())
            .app_data(dataset_path.clone())
            .service(evaluate)
            .service(dataset_preview)
    })
    .bind(bind_addr)?
    .run()
    .await
}
