use std::convert::Infallible;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver};
use warp::http::StatusCode;
use warp::Filter;

/// What the local webhook endpoint saw for one request.
#[derive(Debug, Clone)]
pub struct ReceivedRequest {
    pub query: String,
    pub cache_control: Option<String>,
}

/// Starts a local endpoint that answers every request with `status`.
pub fn serve_status(status: u16) -> (String, UnboundedReceiver<ReceivedRequest>) {
    let (tx, rx) = mpsc::unbounded_channel();

    let route = warp::any()
        .and(warp::query::raw().or(warp::any().map(String::new)).unify())
        .and(warp::header::optional::<String>("cache-control"))
        .map(move |query: String, cache_control: Option<String>| {
            let _ = tx.send(ReceivedRequest { query, cache_control });
            let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            warp::reply::with_status(warp::reply(), status)
        });

    let (addr, server) = warp::serve(route).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);

    (format!("http://{}", addr), rx)
}

/// Starts a local endpoint that takes `delay` before answering.
pub fn serve_slow(delay: Duration) -> String {
    let route = warp::any().and_then(move || async move {
        tokio::time::sleep(delay).await;
        Ok::<_, Infallible>(warp::reply())
    });

    let (addr, server) = warp::serve(route).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);

    format!("http://{}", addr)
}

/// A local address with nothing listening on it.
pub fn closed_address() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
