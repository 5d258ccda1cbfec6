use crate::common::DEVELOPER_APPLICATION_KEY_PARAM;
use async_trait::async_trait;
use reqwest::{Request, Response};
use reqwest_middleware::{Middleware, Next};
use task_local_extensions::Extensions;

/// Middleware appending the developer application key required by Banco do Brasil
/// as a query parameter to every outgoing request.
pub struct DeveloperKeyMiddleware {
    pub(crate) developer_application_key: String,
}

#[async_trait]
impl Middleware for DeveloperKeyMiddleware {
    async fn handle(
        &self,
        mut req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        req.url_mut()
            .query_pairs_mut()
            .append_pair(DEVELOPER_APPLICATION_KEY_PARAM, &self.developer_application_key);

        next.run(req, extensions).await
    }
}
