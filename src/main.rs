use actix_web::{self, App, HttpServer, middleware::Logger, web};
use std::sync::{Arc, LazyLock};

use crate::{
    configs::connect_database,
    modules::explore::{repository_pg::DecisionRepositoryPg, service::ExploreService},
};

mod api;
mod configs;
mod constants;
mod modules;
mod utils;

pub static ENV: LazyLock<constants::Env> = LazyLock::new(|| {
    dotenvy::dotenv().ok();
    env_logger::init();
    log::info!("Environment variables loaded from .env file");
    constants::Env::default()
});

#[actix_web::get("/")]
async fn health_check() -> &'static str {
    "Server is running"
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let db_pool =
        connect_database().await.map_err(|_| std::io::Error::other("Database connection error"))?;

    let decision_repo = DecisionRepositoryPg::new(db_pool.clone());
    let explore_service =
        ExploreService::with_dependencies(Arc::new(decision_repo), ENV.page_size);

    println!("Starting server at http://{}:{}", ENV.ip.as_str(), ENV.port);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(explore_service.clone()))
            .service(health_check)
            .service(web::scope("/api").configure(modules::explore::route::configure))
    })
    .bind((ENV.ip.as_str(), ENV.port))?
    .workers(2)
    .run()
    .await
}
