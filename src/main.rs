use actix_files::Files;
use actix_web::web::{self, Data};
use actix_web::{App, HttpResponse, HttpServer, Responder};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use rusty_disc::args::{self, Args};
use rusty_disc::controller::rating::client::LayoutsClient;
use rusty_disc::controller::rating::{calculator, courses, rating};
use rusty_disc::model::Db;
use rusty_disc::view::index::render_index_template;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = args::args_checks();

    let default_filter = if args.debug {
        "rusty_disc=debug"
    } else {
        "rusty_disc=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    {
        let mut db = Db::open(&args.db_path)?;
        db.create_schema()?;
        if let Some(path) = &args.db_seed_json {
            let json = serde_json::from_str(&std::fs::read_to_string(path)?)?;
            let counts = db.seed_from_json(&json)?;
            info!(
                courses = counts.courses,
                layouts = counts.layouts,
                rounds = counts.rounds,
                "seeded database"
            );
        }
    }

    let bind_addr = args.bind.clone();
    let client = LayoutsClient::new(args.api_base_url());
    let args_for_web = args.clone();

    HttpServer::new(move || {
        App::new()
            .app_data(Data::new(args_for_web.clone()))
            .app_data(Data::new(client.clone()))
            .route("/", web::get().to(index))
            .route("/calculator", web::get().to(calculator))
            .route("/api/courses", web::get().to(courses))
            .route("/api/rating/{course}", web::get().to(rating))
            .route("/health", web::get().to(HttpResponse::Ok))
            .service(Files::new("/static", "./static"))
    })
    .bind(&bind_addr)?
    .run()
    .await?;
    Ok(())
}

async fn index(args: Data<Args>) -> impl Responder {
    let db_path = args.db_path.clone();
    let result = web::block(move || {
        let db = Db::open(&db_path)?;
        db.query_courses()
    })
    .await;

    let course_names: Vec<String> = match result {
        Ok(Ok(courses)) => courses
            .into_iter()
            .map(|c| c.readable_course_name)
            .collect(),
        Ok(Err(e)) => {
            error!(%e, "course listing for index failed");
            Vec::new()
        }
        Err(e) => {
            error!(%e, "course listing for index failed");
            Vec::new()
        }
    };

    info!("loaded home page");
    let markup = render_index_template(&course_names);
    HttpResponse::Ok()
        .content_type("text/html")
        .body(markup.into_string())
}
