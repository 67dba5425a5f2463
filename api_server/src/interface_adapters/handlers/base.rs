use crate::domain::ExampleError;
use crate::interface_adapters::handlers::error_response;
use crate::interface_adapters::protocol::{
    ErrorResponse, ExampleRequest, ExampleResponse, HelloResponse,
};
use crate::interface_adapters::state::{SystemClock, UuidTokens};
use crate::use_cases::CreateExampleUseCase;
use axum::{Json, http::StatusCode};

const HELLO_MESSAGE: &str = "Hello from mnist API!";

// Greeting used by clients as a connectivity check.
pub async fn hello() -> Json<HelloResponse> {
    Json(HelloResponse {
        message: HELLO_MESSAGE.to_string(),
    })
}

#[tracing::instrument(
    name = "create_example",
    skip_all,
    fields(has_email = payload.email.is_some())
)]
pub async fn create_example(
    Json(payload): Json<ExampleRequest>,
) -> Result<Json<ExampleResponse>, (StatusCode, Json<ErrorResponse>)> {
    let use_case = CreateExampleUseCase {
        clock: SystemClock,
        ids: UuidTokens,
    };

    let created = use_case.execute(payload).map_err(map_example_error)?;

    Ok(Json(ExampleResponse {
        id: created.id,
        name: created.name,
        created_at: created.created_at,
        items: Some(created.items),
    }))
}

fn map_example_error(err: ExampleError) -> (StatusCode, Json<ErrorResponse>) {
    match err {
        ExampleError::ClockOutOfRange => {
            tracing::error!("system clock outside representable range");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "clock error")
        }
    }
}
