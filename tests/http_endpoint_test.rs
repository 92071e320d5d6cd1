use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;
use valida_cpf::adapters::http::router;

const ROUTE: &str = "/api/fnvalidacpf";

async fn post(body: impl Into<Body>) -> (StatusCode, String, Option<String>) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(ROUTE)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap();

    let response = router(ROUTE).oneshot(request).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    (status, String::from_utf8(bytes.to_vec()).unwrap(), content_type)
}

#[tokio::test]
async fn test_valid_cpf_returns_ok() {
    let (status, body, content_type) = post(r#"{"cpf":"52998224725"}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "CPF válido!");
    assert_eq!(content_type.as_deref(), Some("text/plain; charset=utf-8"));
}

#[tokio::test]
async fn test_formatted_cpf_returns_ok() {
    let (status, body, _) = post(r#"{"cpf":"529.982.247-25"}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "CPF válido!");
}

#[tokio::test]
async fn test_invalid_cpf_returns_bad_request() {
    let (status, body, content_type) = post(r#"{"cpf":"12345678900"}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "CPF inválido!");
    assert_eq!(content_type.as_deref(), Some("text/plain; charset=utf-8"));
}

#[tokio::test]
async fn test_numeric_cpf_is_accepted() {
    let (status, body, _) = post(r#"{"cpf":52998224725}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "CPF válido!");

    let (status, body, _) = post(r#"{"cpf":12345678900}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "CPF inválido!");
}

#[tokio::test]
async fn test_repeated_digits_return_bad_request() {
    let (status, body, _) = post(r#"{"cpf":"111.111.111-11"}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "CPF inválido!");
}

#[tokio::test]
async fn test_empty_body_asks_for_cpf() {
    let (status, body, _) = post(Body::empty()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "Por favor, informe o CPF");
}

#[tokio::test]
async fn test_unparsable_or_incomplete_body_asks_for_cpf() {
    for payload in ["{not json", "null", "{}", r#"{"cpf":null}"#, r#"{"documento":"52998224725"}"#] {
        let (status, body, _) = post(payload).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "payload: {}", payload);
        assert_eq!(body, "Por favor, informe o CPF", "payload: {}", payload);
    }
}

#[tokio::test]
async fn test_body_without_content_type_is_accepted() {
    let request = Request::builder()
        .method(Method::POST)
        .uri(ROUTE)
        .body(Body::from(r#"{"cpf":"52998224725"}"#))
        .unwrap();

    let response = router(ROUTE).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_get_is_not_routed() {
    let request = Request::builder()
        .method(Method::GET)
        .uri(ROUTE)
        .body(Body::empty())
        .unwrap();

    let response = router(ROUTE).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_custom_route() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/cpf")
        .body(Body::from(r#"{"cpf":"11144477735"}"#))
        .unwrap();

    let response = router("/cpf").oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let request = Request::builder()
        .method(Method::POST)
        .uri(ROUTE)
        .body(Body::from(r#"{"cpf":"11144477735"}"#))
        .unwrap();

    let response = router("/cpf").oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
