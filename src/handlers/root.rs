//! Root greeting handler

use axum::response::Html;

/// HTML greeting pointing at the documentation UI
pub async fn index() -> Html<String> {
    Html(
        "<h1>Hello, World!</h1>\n\
         <p>API documentation is available at <a href=\"/api-docs\">/api-docs</a></p>"
            .to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_index_links_to_docs() {
        let Html(body) = index().await;
        assert!(body.contains("Hello, World!"));
        assert!(body.contains("/api-docs"));
    }
}
