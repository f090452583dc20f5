use crossbeam::channel::Sender;
use log::debug;

use crate::{
    client::{ApiClient, ApiError},
    node::{CreateNodeRequest, Node},
};

/// A request the shell wants executed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiRequest {
    ListNodes,
    CurrentIp,
    CreateNode(CreateNodeRequest),
}

/// Result of an executed [`ApiRequest`], tagged by request kind.
#[derive(Debug)]
pub enum ApiReply {
    Nodes(Result<Vec<Node>, ApiError>),
    Ip(Result<String, ApiError>),
    Created(Result<Node, ApiError>),
}

/// Executes requests in the background and delivers each reply on `replies`.
///
/// Implementations must not block the caller: the shell dispatches from the
/// UI thread.
pub trait Backend {
    fn dispatch(&self, request: ApiRequest, replies: Sender<ApiReply>);
}

impl ApiClient {
    pub async fn execute(&self, request: ApiRequest) -> ApiReply {
        match request {
            ApiRequest::ListNodes => ApiReply::Nodes(self.list_nodes().await),
            ApiRequest::CurrentIp => ApiReply::Ip(self.current_ip().await),
            ApiRequest::CreateNode(req) => ApiReply::Created(self.create_node(&req).await),
        }
    }
}

/// Runs every request as an independent async task against the HTTP API.
///
/// Native builds spawn onto a tokio runtime, web builds onto the browser's
/// event loop. When a context is attached, a repaint is requested as soon as
/// a reply is sent so the UI picks it up without waiting for input.
pub struct HttpBackend {
    client: ApiClient,
    repaint: Option<egui::Context>,
    #[cfg(not(target_arch = "wasm32"))]
    runtime: tokio::runtime::Handle,
}

impl HttpBackend {
    #[cfg(not(target_arch = "wasm32"))]
    pub fn new(client: ApiClient, runtime: tokio::runtime::Handle) -> Self {
        Self {
            client,
            repaint: None,
            runtime,
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            repaint: None,
        }
    }

    pub fn with_repaint(mut self, ctx: egui::Context) -> Self {
        self.repaint = Some(ctx);
        self
    }
}

impl Backend for HttpBackend {
    fn dispatch(&self, request: ApiRequest, replies: Sender<ApiReply>) {
        let client = self.client.clone();
        let repaint = self.repaint.clone();

        let task = async move {
            debug!("executing {request:?}");
            let reply = client.execute(request).await;
            if replies.send(reply).is_err() {
                debug!("reply dropped: shell is gone");
                return;
            }
            if let Some(ctx) = repaint {
                ctx.request_repaint();
            }
        };

        #[cfg(not(target_arch = "wasm32"))]
        drop(self.runtime.spawn(task));

        #[cfg(target_arch = "wasm32")]
        wasm_bindgen_futures::spawn_local(task);
    }
}
