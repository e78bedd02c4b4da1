//! Server module
//!
//! Listener setup, the accept loop, and per-connection serving.

pub mod browser;
pub mod signal;

use crate::config::Config;
use crate::handler::{self, DevHandler};
use crate::logger;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use socket2::{Domain, Protocol, Socket, Type};
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

/// Bind the listener, print the banner, schedule the browser, and serve
/// until interrupted.
pub async fn run(cfg: Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.socket_addr()?;

    let listener = match bind_listener(addr) {
        Ok(listener) => listener,
        Err(e) if e.kind() == io::ErrorKind::AddrInUse => {
            return Err(format!(
                "port {} is already in use! Stop the other server or change server.port",
                cfg.server.port
            )
            .into());
        }
        Err(e) => return Err(Box::new(e)),
    };

    logger::log_server_start(&cfg);

    if cfg.browser.open {
        browser::schedule_open(cfg.base_url(), Duration::from_secs(cfg.browser.delay_secs));
    }

    let handler = Arc::new(DevHandler::new(Arc::new(cfg)));
    accept_loop(listener, handler).await;

    logger::log_shutdown();
    Ok(())
}

/// Accept connections until the shutdown signal resolves.
async fn accept_loop(listener: TcpListener, handler: Arc<DevHandler>) {
    let shutdown = signal::shutdown_signal();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        handle_connection(stream, peer_addr, Arc::clone(&handler));
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            () = &mut shutdown => break,
        }
    }
}

/// Serve a single connection on a spawned task.
fn handle_connection(
    stream: tokio::net::TcpStream,
    peer_addr: SocketAddr,
    handler: Arc<DevHandler>,
) {
    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let conn = http1::Builder::new().serve_connection(
            io,
            service_fn(move |req| {
                let handler = Arc::clone(&handler);
                async move { handler::handle_request(req, handler, peer_addr).await }
            }),
        );

        if let Err(e) = conn.await {
            logger::log_connection_error(&e);
        }
    });
}

/// Create a non-blocking TCP listener bound to `addr`.
///
/// SO_REUSEADDR is set so a restart can rebind through TIME_WAIT, but
/// SO_REUSEPORT is not: a second instance on the same port must fail with
/// `AddrInUse` while the first keeps serving.
fn bind_listener(addr: SocketAddr) -> io::Result<TcpListener> {
    let domain = if addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;
    socket.set_reuse_address(true)?;
    socket.set_nonblocking(true)?;
    socket.bind(&addr.into())?;
    socket.listen(128)?;

    let std_listener: std::net::TcpListener = socket.into();
    TcpListener::from_std(std_listener)
}
