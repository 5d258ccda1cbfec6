use crate::common::CLIENT_ID_HEADER;
use async_trait::async_trait;
use reqwest::{
    header::{HeaderValue, USER_AGENT},
    Request, Response,
};
use reqwest_middleware::{Middleware, Next};
use task_local_extensions::Extensions;

/// Middleware to inject the `User-Agent` and, when configured, the `client_id` headers
/// to all outgoing requests.
pub struct InjectHeadersMiddleware {
    user_agent: HeaderValue,
    client_id: Option<HeaderValue>,
}

impl InjectHeadersMiddleware {
    pub fn new(user_agent: HeaderValue, client_id: Option<HeaderValue>) -> Self {
        Self {
            user_agent,
            client_id,
        }
    }
}

#[async_trait]
impl Middleware for InjectHeadersMiddleware {
    async fn handle(
        &self,
        mut req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        req.headers_mut()
            .insert(USER_AGENT, self.user_agent.clone());

        if let Some(client_id) = &self.client_id {
            req.headers_mut()
                .insert(CLIENT_ID_HEADER, client_id.clone());
        }

        next.run(req, extensions).await
    }
}
