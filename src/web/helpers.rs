use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use askama::Template;

pub fn render<T: Template>(t: T) -> HttpResponse {
    render_with_status(StatusCode::OK, t)
}

pub fn render_with_status<T: Template>(status: StatusCode, t: T) -> HttpResponse {
    match t.render() {
        Ok(body) => HttpResponse::build(status)
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => {
            log::error!("Template error: {}", e);
            HttpResponse::InternalServerError()
                .content_type("text/plain; charset=utf-8")
                .body(format!("Template error: {e}"))
        }
    }
}
