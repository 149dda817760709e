#[cfg(feature = "server")]
pub mod http {
    use axum::{
        http::StatusCode,
        response::{IntoResponse, Json},
        routing::{get, post},
        Router,
    };
    use calculator::{
        format_number, reduce, replay, try_evaluate, CalculatorState, DisplayLines, Event,
        Operation,
    };
    use serde::{Deserialize, Serialize};
    use std::net::SocketAddr;
    use tower_http::cors::CorsLayer;
    use tower_http::trace::TraceLayer;
    use tracing::{debug, info, warn};

    #[derive(Debug, Deserialize)]
    struct ReduceRequest {
        #[serde(default)]
        state: CalculatorState,
        event: Event,
    }

    #[derive(Debug, Deserialize)]
    struct ReplayRequest {
        #[serde(default)]
        state: CalculatorState,
        events: Vec<Event>,
    }

    #[derive(Debug, Deserialize)]
    struct EvaluateRequest {
        previous: String,
        current: String,
        operation: Operation,
    }

    #[derive(Debug, Serialize)]
    struct StateResponse {
        state: CalculatorState,
        display: DisplayLines,
    }

    impl From<CalculatorState> for StateResponse {
        fn from(state: CalculatorState) -> Self {
            let display = state.display();
            Self { state, display }
        }
    }

    #[derive(Debug, Serialize)]
    struct EvaluateResponse {
        /// `None` for NaN and infinities, which JSON numbers cannot carry
        value: Option<f64>,
        display: String,
    }

    #[derive(Debug, Serialize)]
    struct ErrorResponse {
        error: String,
    }

    pub fn app() -> Router {
        Router::new()
            .route("/health", get(health_check))
            .route("/reduce", post(reduce_post))
            .route("/replay", post(replay_post))
            .route("/evaluate", post(evaluate_post))
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
    }

    pub async fn start_server(host: &str, port: u16) -> anyhow::Result<()> {
        let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
        info!("Calculator server listening on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app()).await?;

        Ok(())
    }

    async fn health_check() -> impl IntoResponse {
        Json(serde_json::json!({
            "status": "ok",
            "service": "calculator",
            "version": env!("CARGO_PKG_VERSION")
        }))
    }

    async fn reduce_post(Json(payload): Json<ReduceRequest>) -> Json<StateResponse> {
        debug!("Reducing {}", payload.event);
        Json(reduce(payload.state, payload.event).into())
    }

    async fn replay_post(Json(payload): Json<ReplayRequest>) -> Json<StateResponse> {
        debug!("Replaying {} event(s)", payload.events.len());
        Json(replay(payload.state, payload.events).into())
    }

    async fn evaluate_post(
        Json(payload): Json<EvaluateRequest>,
    ) -> Result<Json<EvaluateResponse>, (StatusCode, Json<ErrorResponse>)> {
        let state =
            CalculatorState::with_operands(payload.previous, payload.operation, payload.current);

        let value = try_evaluate(&state).map_err(|e| {
            warn!("Evaluation failed: {}", e);
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Evaluation failed: {}", e),
                }),
            )
        })?;

        Ok(Json(EvaluateResponse {
            value: value.is_finite().then_some(value),
            display: format_number(value),
        }))
    }

}

#[cfg(not(feature = "server"))]
pub mod http {
    pub async fn start_server(_host: &str, _port: u16) -> anyhow::Result<()> {
        anyhow::bail!("Server feature not enabled. Recompile with --features server")
    }
}
