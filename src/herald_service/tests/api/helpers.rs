use herald_adapters::{
    config::test::{APP_ADDRESS, email_client},
    email::{MockEmailSender, PostmarkEmailSender},
    persistence::HashMapUserStore,
};
use herald_core::{Email, EmailSender};
use herald_service::HeraldService;
use reqwest::Client;
use secrecy::Secret;
use wiremock::MockServer;

pub struct TestApp<E> {
    pub address: String,
    pub http_client: Client,
    pub user_store: HashMapUserStore,
    pub email_sender: E,
}

impl<E> TestApp<E>
where
    E: EmailSender + Clone + 'static,
{
    pub async fn spawn(email_sender: E) -> Self {
        let user_store = HashMapUserStore::new();
        let service = HeraldService::new(user_store.clone(), email_sender.clone());

        let listener = tokio::net::TcpListener::bind(APP_ADDRESS)
            .await
            .expect("Failed to bind test listener");
        let address = format!("http://{}", listener.local_addr().unwrap());

        tokio::spawn(async move {
            service
                .run_standalone(listener)
                .await
                .expect("Failed to run herald service");
        });

        Self {
            address,
            http_client: Client::new(),
            user_store,
            email_sender,
        }
    }

    pub async fn post_register<Body>(&self, body: &Body) -> reqwest::Response
    where
        Body: serde::Serialize,
    {
        self.http_client
            .post(format!("{}/register", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }
}

impl TestApp<MockEmailSender> {
    pub async fn with_mock_sender() -> Self {
        Self::spawn(MockEmailSender::new()).await
    }
}

pub fn postmark_sender(mock_server: &MockServer) -> PostmarkEmailSender {
    let http_client = Client::builder()
        .timeout(email_client::TIMEOUT)
        .build()
        .unwrap();

    PostmarkEmailSender::new(
        mock_server.uri(),
        Email::parse(email_client::SENDER).unwrap(),
        Secret::new("server-token".to_string()),
        http_client,
    )
}
