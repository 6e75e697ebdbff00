use axum::Router;
use axum::response::IntoResponse;
use axum::routing::post;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use voxform::application::ports::{FieldMapper, MappingError};
use voxform::domain::{FieldDescriptor, FieldType, FormSchema};
use voxform::infrastructure::llm::OpenAiMapper;

async fn start_mock_openai_server(
    response_status: u16,
    response_body: &'static str,
) -> (String, oneshot::Sender<()>) {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let app = Router::new().route(
        "/chat/completions",
        post(move || async move {
            let status = axum::http::StatusCode::from_u16(response_status).unwrap();
            (status, response_body).into_response()
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{}", addr);

    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
            .ok();
    });

    (base_url, shutdown_tx)
}

fn mapper_for(base_url: String) -> OpenAiMapper {
    OpenAiMapper::new(
        "test-key".to_string(),
        Some(base_url),
        "gpt-4o-mini".to_string(),
        0.2,
    )
}

fn schema() -> FormSchema {
    FormSchema {
        fields: vec![FieldDescriptor::new("birthDate", "Birth Date", FieldType::Date)],
    }
}

#[tokio::test]
async fn given_choice_with_json_content_when_mapping_then_fields_are_parsed() {
    let body = r#"{"choices": [{"message": {"role": "assistant", "content": "{\"mapped_fields\": {\"birthDate\": \"1985-01-15\"}}"}}]}"#;
    let (base_url, shutdown_tx) = start_mock_openai_server(200, body).await;

    let mapping = mapper_for(base_url)
        .map_fields("born january fifteenth nineteen eighty five", &schema())
        .await
        .unwrap();

    assert_eq!(mapping["birthDate"], "1985-01-15");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_no_choices_when_mapping_then_invalid_response_error() {
    let (base_url, shutdown_tx) = start_mock_openai_server(200, r#"{"choices": []}"#).await;

    let result = mapper_for(base_url).map_fields("hello", &schema()).await;

    assert!(matches!(result, Err(MappingError::InvalidResponse(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_unauthorized_status_when_mapping_then_auth_error() {
    let (base_url, shutdown_tx) =
        start_mock_openai_server(401, r#"{"error": {"message": "Incorrect API key"}}"#).await;

    let result = mapper_for(base_url).map_fields("hello", &schema()).await;

    assert!(matches!(result, Err(MappingError::AuthFailed(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_quota_exhausted_status_when_mapping_then_rate_limited_error() {
    let (base_url, shutdown_tx) =
        start_mock_openai_server(429, r#"{"error": {"message": "quota exceeded"}}"#).await;

    let result = mapper_for(base_url).map_fields("hello", &schema()).await;

    assert!(matches!(result, Err(MappingError::RateLimited(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_empty_schema_when_mapping_then_result_is_empty_without_a_request() {
    let mapper = OpenAiMapper::new(
        "test-key".to_string(),
        Some("http://127.0.0.1:1".to_string()),
        "gpt-4o-mini".to_string(),
        0.2,
    );

    let mapping = mapper
        .map_fields("hello", &FormSchema::default())
        .await
        .unwrap();

    assert!(mapping.is_empty());
}
