use axum::{Router, routing::post};
use herald_adapters::http::routes::register;
use herald_core::{EmailSender, UserStore};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::tracing::{make_span_with_request_id, on_request, on_response};

/// HTTP entry point for the registration command
pub struct HeraldService {
    router: Router,
}

impl HeraldService {
    /// Create a new HeraldService with the provided store and email sender
    ///
    /// # Arguments
    /// * `user_store` - Store for registered users (must be Clone)
    /// * `email_sender` - Notification port used by the register command (must be Clone)
    pub fn new<U, E>(user_store: U, email_sender: E) -> Self
    where
        U: UserStore + Clone + 'static,
        E: EmailSender + Clone + 'static,
    {
        let router = Router::new()
            .route("/register", post(register::<U, E>))
            .with_state((user_store, email_sender));

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert the HeraldService into a router that can be mounted on another router
    pub fn as_nested_router(self) -> Router {
        self.with_trace_layer().router
    }

    /// Run the service as a standalone server
    ///
    /// # Arguments
    /// * `listener` - TCP listener to bind the server to
    pub async fn run_standalone(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let router = self.as_nested_router();

        tracing::info!("Herald service listening on {}", listener.local_addr()?);

        axum_server::Server::<std::net::SocketAddr>::from_listener(listener)
            .serve(router.into_make_service())
            .await
    }
}
