use crate::utils::webutils::{json_error_handler, path_error_handler, validate_token};
use actix_web::web;
use actix_web_httpauth::middleware::HttpAuthentication;

pub mod health;
pub mod login;
pub mod users;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    let user_auth = HttpAuthentication::with_fn(validate_token);

    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler));

    cfg.service(
        web::scope("/health").service(health::health)
    );
    cfg.service(login::login);
    cfg.service(
        web::scope("/users")
            .app_data(web::PathConfig::default().error_handler(path_error_handler))
            .service(users::list::list_users)
            .service(users::get::get_user)
            .service(users::followers::add_follower)
            .service(users::followers::remove_follower)
            .service(users::followers::list_followers)
            .service(users::follows::add_followed)
            .service(users::follows::list_follows)
            .wrap(user_auth)
    );
}
