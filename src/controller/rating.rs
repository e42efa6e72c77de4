pub mod client;

use actix_web::web::{self, Data};
use actix_web::{HttpResponse, Responder};
use serde_json::json;
use std::collections::HashMap;
use tracing::{error, info};

use crate::args::Args;
use crate::controller::rating::client::LayoutsClient;
use crate::model::{build_rating_response, Db, LayoutOption};
use crate::mvu::calculator::{decode_request_to_msgs, CalculatorModel, Deps};
use crate::mvu::error::AppError;
use crate::mvu::runtime::run_calculator;
use crate::view::calculator::render_calculator;

/// `GET /api/courses`: readable course names for the picker.
pub async fn courses(args: Data<Args>) -> impl Responder {
    let db_path = args.db_path.clone();
    let result = web::block(move || {
        let db = Db::open(&db_path)?;
        db.query_courses()
    })
    .await;

    match flatten(result) {
        Ok(courses) => {
            let names: Vec<String> = courses
                .into_iter()
                .map(|c| c.readable_course_name)
                .collect();
            HttpResponse::Ok().json(names)
        }
        Err(e) => {
            error!(%e, "course listing failed");
            HttpResponse::InternalServerError().json(json!({"error": e.to_string()}))
        }
    }
}

/// `GET /api/rating/{course}`: aggregated layout options for one course.
/// Always 200 with a json array; lookup failures are encoded as a single
/// record carrying the status.
pub async fn rating(path: web::Path<String>, args: Data<Args>) -> impl Responder {
    let course_name = path.into_inner();
    let db_path = args.db_path.clone();
    let min_rounds = args.min_rounds;
    let cluster_gap = args.cluster_gap;

    let course_for_query = course_name.clone();
    let result = web::block(move || {
        let db = Db::open(&db_path)?;
        db.query_rounds(&course_for_query)
    })
    .await;

    match flatten(result) {
        Ok(rounds) => {
            let options: Vec<LayoutOption> =
                build_rating_response(&course_name, rounds, min_rounds, cluster_gap);
            info!(
                course = %course_name,
                results = options.len(),
                status = options.first().map_or(-1, |o| o.status),
                "generated layouts"
            );
            HttpResponse::Ok().json(options)
        }
        Err(e) => {
            error!(course = %course_name, %e, "rating query failed");
            HttpResponse::InternalServerError().json(json!({"error": e.to_string()}))
        }
    }
}

/// `GET /calculator`: runs the calculator component over the form's query
/// params and returns the rendered fragment.
pub async fn calculator(
    query: web::Query<HashMap<String, String>>,
    client: Data<LayoutsClient>,
) -> impl Responder {
    let mut model = CalculatorModel::new();
    let msgs = decode_request_to_msgs(&query);
    run_calculator(
        &mut model,
        msgs,
        Deps {
            client: client.get_ref(),
        },
    )
    .await;

    let markup = model
        .markup
        .clone()
        .unwrap_or_else(|| render_calculator(&model));
    HttpResponse::Ok()
        .content_type("text/html")
        .body(markup.into_string())
}

fn flatten<T>(result: Result<Result<T, AppError>, actix_web::error::BlockingError>) -> Result<T, AppError> {
    match result {
        Ok(inner) => inner,
        Err(e) => Err(AppError::Other(e.to_string())),
    }
}
