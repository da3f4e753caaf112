pub mod create_guest;
mod delete_guest;
mod get_guests;
mod subscribers;

use actix_web::web;
use create_guest::create_guest_controller;
use delete_guest::delete_guest_controller;
use get_guests::get_guests_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/guests", web::post().to(create_guest_controller));
    cfg.route("/guests", web::get().to(get_guests_controller));
    cfg.route(
        "/guests/{guest_id}",
        web::delete().to(delete_guest_controller),
    );
}
