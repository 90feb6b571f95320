use askama::Template;

/// Document shell around a server-rendered page body
#[derive(Template)]
#[template(path = "layout.html")]
pub struct LayoutTemplate {
    pub title: String,
    pub body: String,
}
