pub mod auth;
pub mod health;
pub mod tasks;

use actix_web::web;

/// Registers every endpoint. Paths sit at the root with no versioned prefix,
/// one per cloud-function-style operation.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(auth::signup)
        .service(auth::login)
        .service(auth::verify)
        .service(tasks::validate_task)
        .service(tasks::get_user_tasks);
}
