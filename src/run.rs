use std::net::TcpListener;

use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use tracing_actix_web::TracingLogger;

use crate::mail::ContactMailer;
use crate::routes::{health_check, submit_contact};

/// Binds the routes to `listener`, sharing one `mailer` across all workers.
pub fn run<M: ContactMailer>(listener: TcpListener, mailer: M) -> Result<Server, std::io::Error> {
    let mailer = web::Data::new(mailer);
    Ok(HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/health", web::get().to(health_check))
            .route("/api/contact", web::post().to(submit_contact::<M>))
            .app_data(mailer.clone())
    })
    .listen(listener)?
    .run())
}
