use crate::{
    common::DEFAULT_ERROR_TYPE,
    error::{ApiError, Error, Violacao},
};
use async_trait::async_trait;
use reqwest::{Request, Response};
use reqwest_middleware::{Middleware, Next};
use task_local_extensions::Extensions;

/// Reqwest middleware which translates error responses returned from PIX APIs
/// into [`Error::ApiError`](crate::error::Error)s.
pub struct ErrorHandlingMiddleware;

#[async_trait]
impl Middleware for ErrorHandlingMiddleware {
    async fn handle(
        &self,
        req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        let response = next.run(req, extensions).await?;

        if !response.status().is_success() {
            tracing::debug!("Failed HTTP request. Status code: {}", response.status());

            let api_error = api_error_from_response(response).await?;
            return Err(Error::ApiError(api_error).into());
        }

        Ok(response)
    }
}

/// Body of an error response.
#[derive(serde::Deserialize, Debug)]
#[serde(untagged)]
enum ErrorResponseBody {
    /// Errors returned by OAuth2 servers.
    OAuth {
        error: String,
        error_description: Option<String>,
    },
    /// RFC 7807 problem details, as mandated by the PIX API. Banks omit fields freely.
    Problem {
        r#type: Option<String>,
        title: Option<String>,
        status: Option<u16>,
        detail: Option<String>,
        #[serde(default)]
        violacoes: Vec<Violacao>,
    },
    Unknown,
}

async fn api_error_from_response(response: Response) -> reqwest_middleware::Result<ApiError> {
    let http_status = response.status();

    let bytes = response.bytes().await?;
    let error_response: ErrorResponseBody =
        serde_json::from_slice(&bytes).unwrap_or(ErrorResponseBody::Unknown);

    let api_error = match error_response {
        ErrorResponseBody::OAuth {
            error,
            error_description,
        } => ApiError {
            r#type: DEFAULT_ERROR_TYPE.to_string(),
            title: error,
            status: http_status.as_u16(),
            detail: error_description,
            violacoes: vec![],
        },
        ErrorResponseBody::Problem {
            r#type,
            title,
            status,
            detail,
            violacoes,
        } if r#type.is_some() || title.is_some() || status.is_some() => ApiError {
            r#type: r#type.unwrap_or_else(|| DEFAULT_ERROR_TYPE.to_string()),
            title: title.unwrap_or_default(),
            status: status.unwrap_or_else(|| http_status.as_u16()),
            detail,
            violacoes,
        },
        _ => {
            let body = String::from_utf8_lossy(&bytes);
            ApiError {
                r#type: DEFAULT_ERROR_TYPE.to_string(),
                title: "server_error".to_string(),
                status: http_status.as_u16(),
                detail: Some(body.into_owned()).filter(|s| !s.is_empty()),
                violacoes: vec![],
            }
        }
    };

    Ok(api_error)
}
