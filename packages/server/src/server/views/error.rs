use axum::response::Html;

use super::{layout, notice};

pub fn error_page(title: &str, message: &str) -> Html<String> {
    let body = format!("<h1>{}</h1>\n{}", super::text(title), notice("error", message));
    layout(title, &body)
}
