use pix_rust::{
    apis::auth::Credentials,
    client::{Bank, Environment},
    PixClient,
};

pub struct TestContext {
    pub client: PixClient,
}

impl TestContext {
    pub async fn start() -> Self {
        // Take the required credentials from the env
        let client_id = std::env::var("ACCEPTANCE_TESTS_CLIENT_ID").unwrap();
        let access_token = std::env::var("ACCEPTANCE_TESTS_SANDBOX_TOKEN").unwrap();

        // Configure a new PixClient to point to the Sicoob sandbox
        let client = PixClient::builder(
            Bank::Sicoob,
            Credentials::StaticToken {
                client_id,
                access_token: access_token.into(),
            },
        )
        .with_environment(Environment::Sandbox)
        .build()
        .unwrap();

        Self { client }
    }
}
