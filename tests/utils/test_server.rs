// tests/utils/test_server.rs
//
// Local hyper server for end-to-end lookups. Every request is recorded and
// answered by a route closure; the server stops when the handle is dropped.

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use hyper::header::{HeaderName, CONTENT_TYPE, COOKIE};
use hyper::service::{make_service_fn, service_fn};
use hyper::{Body, Request, Response, Server};
use tokio::sync::oneshot;

pub const LOGIN_PATH: &str = "/theperfectgiftcard/";

#[derive(Clone, Debug, Default)]
pub struct Captured {
    pub method: String,
    pub path: String,
    pub content_type: String,
    pub cookie: Option<String>,
    pub body: String,
}

type Route = Arc<dyn Fn(&Captured) -> Response<Body> + Send + Sync>;
type Log = Arc<Mutex<Vec<Captured>>>;

pub struct TestServer {
    /// Login endpoint on this server.
    pub url: String,
    log: Log,
    stop: Option<oneshot::Sender<()>>,
}

impl TestServer {
    pub fn requests(&self) -> Vec<Captured> {
        self.log.lock().unwrap().clone()
    }

    /// The single request this server saw; panics on any other count.
    pub fn only_request(&self) -> Captured {
        let mut reqs = self.requests();
        assert_eq!(reqs.len(), 1, "expected one request, got {reqs:?}");
        reqs.remove(0)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
    }
}

/// A page with the given status, served as HTML.
pub fn page(status: u16, body: Vec<u8>) -> Response<Body> {
    Response::builder()
        .status(status)
        .header(CONTENT_TYPE, "text/html; charset=utf-8")
        .body(Body::from(body))
        .unwrap()
}

/// Answers every request with the same page.
pub fn serve_page(status: u16, body: Vec<u8>) -> TestServer {
    serve(move |_| page(status, body.clone()))
}

pub fn serve(route: impl Fn(&Captured) -> Response<Body> + Send + Sync + 'static) -> TestServer {
    let route: Route = Arc::new(route);
    let log: Log = Arc::default();
    let (addr_tx, addr_rx) = mpsc::channel();
    let (stop_tx, stop_rx) = oneshot::channel::<()>();

    let server_log = log.clone();
    thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async move {
            let make_service = make_service_fn(move |_conn| {
                let (log, route) = (server_log.clone(), route.clone());
                async move {
                    Ok::<_, Infallible>(service_fn(move |req| handle(req, log.clone(), route.clone())))
                }
            });

            let server = Server::bind(&SocketAddr::from(([127, 0, 0, 1], 0))).serve(make_service);
            addr_tx.send(server.local_addr()).unwrap();

            let server = server.with_graceful_shutdown(async {
                stop_rx.await.ok();
            });
            if let Err(e) = server.await {
                eprintln!("Server error: {}", e);
            }
        });
    });

    let addr = addr_rx.recv().unwrap();
    TestServer {
        url: format!("http://{addr}{LOGIN_PATH}"),
        log,
        stop: Some(stop_tx),
    }
}

async fn handle(req: Request<Body>, log: Log, route: Route) -> Result<Response<Body>, Infallible> {
    let (parts, body) = req.into_parts();
    let header = |name: HeaderName| {
        parts
            .headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    let body = hyper::body::to_bytes(body).await.unwrap_or_default();

    let captured = Captured {
        method: parts.method.to_string(),
        path: parts.uri.path().to_string(),
        content_type: header(CONTENT_TYPE).unwrap_or_default(),
        cookie: header(COOKIE),
        body: String::from_utf8_lossy(&body).into_owned(),
    };
    let res = route(&captured);
    log.lock().unwrap().push(captured);
    Ok(res)
}
