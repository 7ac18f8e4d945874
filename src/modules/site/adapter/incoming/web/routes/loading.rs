use actix_web::{get, http::header::ContentType, HttpResponse, Responder};

const LOADING_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Loading...</title>
  <style>
    body { margin: 0; height: 100vh; display: flex; align-items: center; justify-content: center; background: #0f172a; color: #e2e8f0; font-family: system-ui, sans-serif; }
    .spinner { width: 48px; height: 48px; border: 4px solid #334155; border-top-color: #38bdf8; border-radius: 50%; animation: spin 0.8s linear infinite; }
    @keyframes spin { to { transform: rotate(360deg); } }
    p { margin-top: 1rem; text-align: center; }
  </style>
</head>
<body>
  <div>
    <div class="spinner"></div>
    <p>Loading...</p>
  </div>
</body>
</html>
"#;

#[get("/loading/")]
pub async fn loading_handler() -> impl Responder {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(LOADING_PAGE)
}
