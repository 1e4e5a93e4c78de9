use actix_web::{web, HttpRequest, HttpResponse, Result as ActixResult};
use mime_guess::from_path;
use rust_embed::RustEmbed;

/// Browser UI assets from faq-api/web
#[derive(RustEmbed)]
#[folder = "web/"]
#[include = "*.html"]
#[include = "*.js"]
#[include = "*.css"]
#[include = "*.ico"]
#[include = "*.svg"]
#[include = "*.png"]
pub struct WebAssets;

/// Handle embedded static file requests
pub async fn handle_embedded_file(req: HttpRequest) -> ActixResult<HttpResponse> {
    let path = req.match_info().query("path");

    let file_path = if path.is_empty() || path == "/" {
        "index.html"
    } else {
        path.strip_prefix('/').unwrap_or(path)
    };

    tracing::debug!("Serving embedded file: {}", file_path);

    if let Some(content) = WebAssets::get(file_path) {
        let mime = from_path(file_path).first_or_octet_stream();
        let mut response = HttpResponse::Ok();
        response.content_type(mime.as_ref());

        if file_path.ends_with(".html") {
            response.insert_header(("Cache-Control", "no-cache, no-store, must-revalidate"));
        } else {
            response.insert_header(("Cache-Control", "public, max-age=86400"));
        }

        return Ok(response.body(content.data.into_owned()));
    }

    tracing::debug!(
        "Embedded file not found: {}, serving index.html",
        file_path
    );

    match WebAssets::get("index.html") {
        Some(content) => Ok(HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .insert_header(("Cache-Control", "no-cache, no-store, must-revalidate"))
            .body(content.data.into_owned())),
        None => {
            tracing::error!("index.html not found in embedded assets");
            Ok(HttpResponse::InternalServerError().body("Web assets not properly embedded"))
        }
    }
}

/// List all embedded files (for startup logging)
pub fn list_embedded_files() -> Vec<String> {
    WebAssets::iter().map(|f| f.to_string()).collect()
}

/// Configure embedded web routes for Actix Web
pub fn configure_embedded_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(handle_embedded_file))
        .route("/{path:.*}", web::get().to(handle_embedded_file));
}
