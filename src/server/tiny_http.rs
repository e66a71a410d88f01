//! tiny_http server adapter
//!
//! Owns the socket: reads requests, hands them to the router and writes the
//! rendered replies back with JSON and CORS headers.

use std::io::Cursor;
use std::sync::Arc;
use std::thread;

use tiny_http::{Header, Request, Response, Server, StatusCode};

use crate::api::{ApiError, TriviaApi};

use super::router::{HttpReply, dispatch};

const RESPONSE_HEADERS: [(&str, &str); 4] = [
    ("Content-Type", "application/json"),
    ("Access-Control-Allow-Origin", "*"),
    ("Access-Control-Allow-Headers", "Content-Type,Authorization"),
    ("Access-Control-Allow-Methods", "GET,POST,DELETE"),
];

/// Bind `addr` and serve the API with `workers` threads until the process exits
pub fn serve(addr: &str, workers: usize, api: TriviaApi) -> anyhow::Result<()> {
    let server = Server::http(addr).map_err(|e| anyhow::anyhow!("Failed to start server: {e}"))?;
    log::info!("Listening on http://{addr}/api/v1 with {workers} worker(s)");
    run(Arc::new(server), workers, Arc::new(api))
}

/// Serve requests from an already-bound server
pub fn run(server: Arc<Server>, workers: usize, api: Arc<TriviaApi>) -> anyhow::Result<()> {
    let handles: Vec<_> = (0..workers.max(1))
        .map(|n| {
            let server = Arc::clone(&server);
            let api = Arc::clone(&api);
            thread::Builder::new()
                .name(format!("trivia-worker-{n}"))
                .spawn(move || {
                    for request in server.incoming_requests() {
                        handle(&api, request);
                    }
                })
        })
        .collect::<Result<_, _>>()?;

    for handle in handles {
        if handle.join().is_err() {
            log::error!("Worker thread terminated abnormally");
        }
    }
    Ok(())
}

fn handle(api: &TriviaApi, mut request: Request) {
    let reply = match read_body(&mut request) {
        Ok(body) => dispatch(api, request.method(), request.url(), &body),
        Err(e) => HttpReply::error(&e),
    };
    log::debug!("{} {} -> {}", request.method(), request.url(), reply.status);

    if let Err(e) = request.respond(to_response(reply)) {
        log::warn!("Failed to send response: {e}");
    }
}

fn read_body(request: &mut Request) -> Result<String, ApiError> {
    let mut body = String::new();
    request
        .as_reader()
        .read_to_string(&mut body)
        .map_err(|e| ApiError::bad_request(format!("Failed to read request body: {e}")))?;
    Ok(body)
}

fn to_response(reply: HttpReply) -> Response<Cursor<Vec<u8>>> {
    let data = reply.body.map(String::into_bytes).unwrap_or_default();
    RESPONSE_HEADERS
        .iter()
        .filter_map(|(name, value)| Header::from_bytes(*name, *value).ok())
        .fold(Response::from_data(data), |response, header| response.with_header(header))
        .with_status_code(StatusCode(reply.status))
}
