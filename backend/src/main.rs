//! Local delivery binary: embeds the built frontend and serves it on
//! localhost, opening the user's browser once the server is up. All product
//! logic lives in the frontend; this process holds no state and exposes no
//! API.

mod config;

use std::thread;
use std::time::Duration;

use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::info;
use mime_guess::from_path;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

/// Resolves a request path inside the embedded dist. Unknown paths fall
/// back to `index.html` so a reloaded app URL still boots the frontend.
async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let path = req.path().trim_start_matches('/');
    let file_path = if path.is_empty() { "index.html" } else { path };

    match STATIC_DIR.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match STATIC_DIR.get_file("index.html") {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => HttpResponse::NotFound().body("Not Found"),
        },
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let host = config::host();
    let port = config::port();
    let url = format!("http://{}:{}", host, port);

    {
        let url = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            let _ = webbrowser::open(&url);
        });
    }

    info!("Voucher Studio running at {}", url);

    HttpServer::new(|| App::new().default_service(web::route().to(serve_embedded)))
        .bind((host.as_str(), port))?
        .run()
        .await
}
