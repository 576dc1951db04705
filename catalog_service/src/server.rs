//! HTTP server for the author catalog.
//!
//! Serves the author list with Hyper 1.x over HTTP/1:
//! - `GET /authors` - author list as a JSON array, or a plain text message
//! - `GET /health` - health check (JSON)

use std::{convert::Infallible, future::Future, net::SocketAddr, sync::Arc};

use bytes::Bytes;
use http::{Method, Request, Response, StatusCode, header};
use http_body_util::Full;
use hyper::{server::conn::http1, service::service_fn};
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;
use tracing::{debug, error, info, warn};

use crate::{
    author::{
        adapter::AuthorAdapter,
        response::{AuthorListPayload, ResponseSink},
    },
    config::ServerConfig,
    error::AppResult,
};

/// HTTP server answering author list requests.
pub struct AuthorServer {
    listener: TcpListener,
    state: Arc<ServerState>,
}

/// Shared state for request handling.
#[derive(Debug)]
struct ServerState {
    author_adapter: AuthorAdapter,
    authors_path: String,
}

/// Turns the adapter's payload into an HTTP response.
#[derive(Debug, Default)]
pub struct HttpResponseSink {
    response: Option<Response<Full<Bytes>>>,
}

impl AuthorServer {
    /// Binds the server to the configured address.
    ///
    /// # Errors
    ///
    /// Returns an error if the address cannot be bound.
    pub async fn bind(config: &ServerConfig, author_adapter: AuthorAdapter) -> AppResult<Self> {
        let listener = TcpListener::bind(config.http_address).await?;
        Ok(Self {
            listener,
            state: Arc::new(ServerState {
                author_adapter,
                authors_path: config.authors_path.clone(),
            }),
        })
    }

    /// Address the server is listening on.
    ///
    /// # Errors
    ///
    /// Returns an error if the socket address cannot be read.
    pub fn local_addr(&self) -> AppResult<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Accepts connections until `shutdown` resolves.
    ///
    /// # Errors
    ///
    /// Returns an error if the listener address cannot be read.
    pub async fn serve<F>(self, shutdown: F) -> AppResult<()>
    where
        F: Future<Output = ()>,
    {
        info!("HTTP server listening on http://{}", self.local_addr()?);

        tokio::pin!(shutdown);
        loop {
            tokio::select! {
                result = self.listener.accept() => {
                    match result {
                        Ok((stream, addr)) => {
                            debug!("Connection from {}", addr);

                            let io = TokioIo::new(stream);
                            let state = Arc::clone(&self.state);

                            tokio::spawn(async move {
                                let service = service_fn(move |req| {
                                    let state = Arc::clone(&state);
                                    async move {
                                        Ok::<_, Infallible>(handle_request(req, &state).await)
                                    }
                                });

                                if let Err(err) = http1::Builder::new()
                                    .serve_connection(io, service)
                                    .await
                                {
                                    if !err.is_incomplete_message() {
                                        warn!("Error serving connection from {}: {}", addr, err);
                                    }
                                }
                            });
                        }
                        Err(err) => {
                            warn!("Failed to accept connection: {}", err);
                        }
                    }
                }
                () = &mut shutdown => {
                    info!("HTTP server shutting down");
                    break;
                }
            }
        }

        Ok(())
    }

    /// Serves until ctrl-c is received.
    ///
    /// # Errors
    ///
    /// Returns an error if the listener address cannot be read.
    pub async fn serve_until_ctrl_c(self) -> AppResult<()> {
        self.serve(async {
            if let Err(err) = tokio::signal::ctrl_c().await {
                error!("Failed to listen for ctrl-c: {}", err);
            }
        })
        .await
    }
}

/// Handle an incoming HTTP request.
async fn handle_request<B>(req: Request<B>, state: &ServerState) -> Response<Full<Bytes>> {
    if req.method() != Method::GET {
        return make_response(
            StatusCode::METHOD_NOT_ALLOWED,
            "text/plain",
            "Method Not Allowed",
        );
    }

    let path = req.uri().path();
    if path == state.authors_path {
        let mut sink = HttpResponseSink::default();
        state.author_adapter.show_all_authors(&mut sink).await;
        sink.into_response()
    } else if path == "/health" {
        make_response(
            StatusCode::OK,
            "application/json",
            r#"{"status":"healthy"}"#,
        )
    } else {
        make_response(StatusCode::NOT_FOUND, "text/plain", "Not Found")
    }
}

impl HttpResponseSink {
    /// The response for the sent payload, or an internal error when nothing was sent.
    pub fn into_response(self) -> Response<Full<Bytes>> {
        self.response.unwrap_or_else(|| {
            make_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "text/plain",
                "Internal Server Error",
            )
        })
    }
}

impl ResponseSink for HttpResponseSink {
    fn send(&mut self, payload: AuthorListPayload) {
        let response = match &payload {
            AuthorListPayload::Authors(_) => match serde_json::to_string(&payload) {
                Ok(body) => make_response(StatusCode::OK, "application/json", &body),
                Err(err) => {
                    error!("Failed to serialize author list: {}", err);
                    make_response(
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "text/plain",
                        "Internal Server Error",
                    )
                }
            },
            AuthorListPayload::Message(message) => {
                make_response(StatusCode::OK, "text/plain; charset=utf-8", message)
            }
        };
        self.response = Some(response);
    }
}

/// Create an HTTP response.
fn make_response(status: StatusCode, content_type: &str, body: &str) -> Response<Full<Bytes>> {
    let mut response = Response::new(Full::new(Bytes::from(body.to_string())));
    *response.status_mut() = status;
    if let Ok(content_type) = header::HeaderValue::from_str(content_type) {
        response
            .headers_mut()
            .insert(header::CONTENT_TYPE, content_type);
    }
    response
}
