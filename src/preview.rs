//! In-process preview server for display handles.
//!
//! Registered documents are served from memory over a loopback HTTP port so
//! every catalog entry gets an ephemeral URL usable for rendering and for the
//! card's click-through. Handles die with the registration (or the process);
//! only the base64 payload in the catalog slot is durable.

use anyhow::{Context as _, anyhow};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tiny_http::{Header, Response, Server, StatusCode};
use tracing::{debug, error};

/// Helper to create HTTP headers, returning None if the bytes are invalid
fn create_header(name: &[u8], value: &[u8]) -> Option<Header> {
    Header::from_bytes(name, value).ok()
}

struct Document {
    bytes: Arc<Vec<u8>>,
    mime_type: String,
}

/// A registered document's ephemeral preview URL.
#[derive(Clone, Debug)]
pub struct DocumentHandle {
    pub id: u64,
    pub url: String,
}

/// Loopback HTTP server holding registered document bytes in memory.
pub struct PreviewServer {
    port: u16,
    next_id: AtomicU64,
    documents: Arc<RwLock<HashMap<u64, Document>>>,
    shutdown_flag: Arc<AtomicBool>,
    server_thread: Option<JoinHandle<()>>,
}

impl PreviewServer {
    /// Bind an ephemeral loopback port and start the serving thread.
    pub fn start() -> anyhow::Result<Self> {
        let server = Server::http("127.0.0.1:0")
            .map_err(|err| anyhow!("failed to bind preview server: {err}"))?;
        let port = server
            .server_addr()
            .to_ip()
            .context("preview server has no IP address")?
            .port();

        let documents: Arc<RwLock<HashMap<u64, Document>>> = Arc::new(RwLock::new(HashMap::new()));
        let documents_clone = documents.clone();
        let shutdown_flag = Arc::new(AtomicBool::new(false));
        let shutdown_flag_clone = shutdown_flag.clone();

        let server_thread = thread::spawn(move || {
            loop {
                if shutdown_flag_clone.load(Ordering::Relaxed) {
                    break;
                }

                match server.recv_timeout(Duration::from_millis(100)) {
                    Ok(Some(request)) => {
                        Self::serve_document(&documents_clone, request);
                    }
                    Ok(None) => {}
                    Err(err) => {
                        error!("preview server stopped receiving, handles will go dead: {err}");
                        break;
                    }
                }
            }
        });

        debug!("preview server listening on 127.0.0.1:{port}");

        Ok(Self {
            port,
            next_id: AtomicU64::new(0),
            documents,
            shutdown_flag,
            server_thread: Some(server_thread),
        })
    }

    /// Register document bytes and mint their display handle.
    pub fn register(&self, bytes: Arc<Vec<u8>>, mime_type: &str) -> DocumentHandle {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.documents.write().insert(
            id,
            Document {
                bytes,
                mime_type: mime_type.to_string(),
            },
        );
        DocumentHandle {
            id,
            url: format!("http://127.0.0.1:{}/doc/{}", self.port, id),
        }
    }

    /// Invalidate a handle; subsequent requests for it get 404.
    pub fn release(&self, id: u64) {
        self.documents.write().remove(&id);
    }

    /// Invalidate every handle at once (catalog clear).
    pub fn release_all(&self) {
        self.documents.write().clear();
    }

    fn serve_document(documents: &RwLock<HashMap<u64, Document>>, request: tiny_http::Request) {
        let id = request
            .url()
            .strip_prefix("/doc/")
            .and_then(|rest| rest.parse::<u64>().ok());

        let payload = id.and_then(|id| {
            let documents = documents.read();
            documents
                .get(&id)
                .map(|doc| (doc.bytes.clone(), doc.mime_type.clone()))
        });

        let Some((bytes, mime_type)) = payload else {
            let _ = request.respond(Response::empty(StatusCode(404)));
            return;
        };

        let mut response = Response::from_data(bytes.as_ref().clone());
        if let Some(header) = create_header(&b"Content-Type"[..], mime_type.as_bytes()) {
            response = response.with_header(header);
        }
        if let Some(header) =
            create_header(&b"Content-Length"[..], bytes.len().to_string().as_bytes())
        {
            response = response.with_header(header);
        }
        let _ = request.respond(response);
    }
}

impl Drop for PreviewServer {
    fn drop(&mut self) {
        self.shutdown_flag.store(true, Ordering::SeqCst);
        if let Some(handle) = self.server_thread.take() {
            let _ = handle.join();
        }
    }
}
