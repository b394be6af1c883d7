//! JSON body extractor that runs `validator` rules before the handler.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::Json;
use campus_core::validation::to_core_error;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// `Json<T>` plus `T::validate()`.
///
/// Unparseable bodies are `400 BAD_REQUEST`; rule violations are
/// `400 VALIDATION_ERROR` with a message such as `"name is required"`.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(rejection_to_error)?;
        value
            .validate()
            .map_err(|errors| AppError::Core(to_core_error(&errors)))?;
        Ok(ValidatedJson(value))
    }
}

fn rejection_to_error(rejection: JsonRejection) -> AppError {
    AppError::BadRequest(rejection.body_text())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use axum::body::Body;
    use campus_core::error::CoreError;
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize, Validate)]
    struct NewTag {
        #[validate(required, custom(function = "campus_core::validation::not_blank"))]
        tag_name: Option<String>,
    }

    fn json_request(body: &str) -> Request {
        Request::builder()
            .method("POST")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn valid_body_passes() {
        let ValidatedJson(tag) =
            ValidatedJson::<NewTag>::from_request(json_request(r#"{"tag_name":"sports"}"#), &())
                .await
                .unwrap();
        assert_eq!(tag.tag_name.as_deref(), Some("sports"));
    }

    #[tokio::test]
    async fn missing_field_is_a_validation_error() {
        let err = ValidatedJson::<NewTag>::from_request(json_request("{}"), &())
            .await
            .unwrap_err();
        assert_matches!(err, AppError::Core(CoreError::Validation(msg)) if msg == "tag_name is required");
    }

    #[tokio::test]
    async fn blank_field_is_a_validation_error() {
        let err = ValidatedJson::<NewTag>::from_request(json_request(r#"{"tag_name":"  "}"#), &())
            .await
            .unwrap_err();
        assert_matches!(err, AppError::Core(CoreError::Validation(_)));
    }

    #[tokio::test]
    async fn malformed_json_is_a_bad_request() {
        let err = ValidatedJson::<NewTag>::from_request(json_request("{not json"), &())
            .await
            .unwrap_err();
        assert_matches!(err, AppError::BadRequest(_));
    }

    #[tokio::test]
    async fn wrong_type_is_a_bad_request() {
        let err = ValidatedJson::<NewTag>::from_request(json_request(r#"{"tag_name":5}"#), &())
            .await
            .unwrap_err();
        assert_matches!(err, AppError::BadRequest(_));
    }
}
