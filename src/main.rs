use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use sqlx::PgPool;

use taskcloud::config::Config;
use taskcloud::routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();

    // One pool for the life of the process, shared across all requests.
    let pool = PgPool::connect(&config.database_url)
        .await
        .expect("Failed to connect to database");

    let bind_addr = (config.server_host.clone(), config.server_port);
    log::info!("Starting taskcloud server at {}", config.server_url());

    let config = web::Data::new(config);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .app_data(config.clone())
            .wrap(
                // The frontend can be served from anywhere.
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .service(routes::health::health)
            .configure(routes::config)
    })
    .bind(bind_addr)?
    .run()
    .await
}
