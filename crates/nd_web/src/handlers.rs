use crate::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
    Json,
};
use nd_core::Digest;
use serde::Deserialize;
use std::sync::Arc;
use tracing::error;

const FORM_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>News digest on a given topic</title>
  <style>
    body { font-family: sans-serif; max-width: 48rem; margin: 2rem auto; padding: 0 1rem; }
    input { width: 70%; padding: 0.5rem; }
    button { padding: 0.5rem 1rem; }
    pre { white-space: pre-wrap; background: #f4f4f4; padding: 1rem; }
  </style>
</head>
<body>
  <h1>News digest on a given topic</h1>
  <p>Ask a question to receive a short news digest 💐</p>
  <form id="ask">
    <input id="question" type="text" value="What is happening in the art world today?">
    <button type="submit">Ask</button>
  </form>
  <pre id="digest"></pre>
  <script>
    document.getElementById('ask').addEventListener('submit', async (event) => {
      event.preventDefault();
      const out = document.getElementById('digest');
      out.textContent = '...';
      const response = await fetch('/api/digest', {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify({ question: document.getElementById('question').value }),
      });
      if (response.ok) {
        const digest = await response.json();
        out.textContent = digest.text;
      } else {
        out.textContent = 'Error: ' + await response.text();
      }
    });
  </script>
</body>
</html>
"#;

#[derive(Debug, Deserialize)]
pub struct DigestRequest {
    pub question: String,
}

pub async fn form_page() -> impl IntoResponse {
    Html(FORM_PAGE)
}

pub async fn create_digest(
    State(state): State<Arc<AppState>>,
    Json(request): Json<DigestRequest>,
) -> Result<Json<Digest>, (StatusCode, String)> {
    match state.pipeline.run(&request.question).await {
        Ok(digest) => Ok(Json(digest)),
        Err(e) => {
            error!("Digest request failed: {}", e);
            Err((StatusCode::BAD_GATEWAY, e.to_string()))
        }
    }
}
