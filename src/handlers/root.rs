use crate::response::MessageBody;
use axum::Json;

/// Liveness placeholder.
#[utoipa::path(get, path = "/", responses((status = 200, body = MessageBody)))]
pub async fn root() -> Json<MessageBody> {
    Json(MessageBody {
        message: "Hello World".into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn root_says_hello() {
        let Json(body) = root().await;
        assert_eq!(body.message, "Hello World");
    }
}
