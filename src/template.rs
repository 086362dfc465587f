use askama::Template;
use axum::response::{Html, IntoResponse, Response};

use crate::error::InternalError;

/// Renders an askama template as an html response.
pub struct HtmlTemplate<T>(pub T);

impl<T> IntoResponse for HtmlTemplate<T>
where
    T: Template,
{
    fn into_response(self) -> Response {
        match self.0.render() {
            Ok(content) => Html(content).into_response(),
            Err(err) => {
                InternalError::new(format!("failed to render template: {err}")).into_response()
            }
        }
    }
}
