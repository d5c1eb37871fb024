use crate::modules::explore::handle::*;
use actix_web::web::ServiceConfig;

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(put_decision)
        .service(list_new_liked_you)
        .service(count_liked_you)
        .service(list_liked_you);
}
