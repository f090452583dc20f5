use crossbeam::channel::{unbounded, Receiver, Sender};
use log::{error, info, warn};

use crate::{
    backend::{ApiReply, ApiRequest, Backend},
    client::ApiError,
    node::{CreateNodeRequest, Node},
};

#[derive(Debug, thiserror::Error)]
pub enum CreateError {
    #[error("Node name cannot be empty")]
    EmptyName,

    #[error("Your public IP address has not been resolved yet")]
    IpUnresolved,

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Outcome of a creation request, handed back to the form.
pub type CreateOutcome = Result<Node, CreateError>;

/// What the scene area should show for the current state.
#[derive(Debug, PartialEq)]
pub enum ShellView<'a> {
    Loading,
    Failed(&'a str),
    Ready(&'a [Node]),
}

/// Owns the session state: the node list, the resolved public IP and the
/// loading/error flags of the initial fetch.
///
/// Requests go out through the [`Backend`]; replies come back on a channel
/// that is drained by [`Shell::poll`] once per frame.
pub struct Shell {
    backend: Box<dyn Backend>,
    sender: Sender<ApiReply>,
    receiver: Receiver<ApiReply>,

    nodes: Vec<Node>,
    ip: Option<String>,
    loading: bool,
    error: Option<String>,
}

impl Shell {
    pub fn new(backend: impl Backend + 'static) -> Self {
        let (sender, receiver) = unbounded();
        Self {
            backend: Box::new(backend),
            sender,
            receiver,

            nodes: Vec::new(),
            ip: None,
            loading: false,
            error: None,
        }
    }

    /// Issues the two startup fetches. They run independently, whichever
    /// finishes first is applied first.
    pub fn start(&mut self) {
        self.load_nodes();
        self.resolve_ip();
    }

    pub fn load_nodes(&mut self) {
        self.loading = true;
        self.dispatch(ApiRequest::ListNodes);
    }

    pub fn resolve_ip(&mut self) {
        self.dispatch(ApiRequest::CurrentIp);
    }

    /// Submits a node with the trimmed `name` and the resolved IP.
    ///
    /// The outcome arrives later through [`Shell::poll`].
    ///
    /// # Errors
    ///
    /// Fails without touching the network if the name is blank
    /// ([`CreateError::EmptyName`]) or the IP is not resolved yet
    /// ([`CreateError::IpUnresolved`]).
    pub fn create_node(&mut self, name: &str) -> Result<(), CreateError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CreateError::EmptyName);
        }
        let Some(ip) = self.ip.clone() else {
            warn!("refusing to create node {name:?}: public ip unknown");
            return Err(CreateError::IpUnresolved);
        };

        info!("creating node {name:?} for ip {ip}");
        self.dispatch(ApiRequest::CreateNode(CreateNodeRequest {
            name: name.to_string(),
            ip,
        }));
        Ok(())
    }

    /// Applies every reply received so far and returns the creation outcomes
    /// among them, in arrival order.
    pub fn poll(&mut self) -> Vec<CreateOutcome> {
        let mut outcomes = Vec::new();
        while let Ok(reply) = self.receiver.try_recv() {
            if let Some(outcome) = self.apply(reply) {
                outcomes.push(outcome);
            }
        }
        outcomes
    }

    fn apply(&mut self, reply: ApiReply) -> Option<CreateOutcome> {
        match reply {
            ApiReply::Nodes(res) => {
                match res {
                    Ok(nodes) => {
                        self.nodes = nodes;
                        self.error = None;
                    }
                    Err(err) => {
                        error!("failed to load nodes: {err}");
                        self.nodes.clear();
                        self.error = Some(err.to_string());
                    }
                }
                self.loading = false;
                None
            }
            ApiReply::Ip(res) => {
                match res {
                    Ok(ip) => {
                        info!("resolved public ip {ip}");
                        self.ip = Some(ip);
                    }
                    Err(err) => warn!("failed to resolve public ip: {err}"),
                }
                None
            }
            ApiReply::Created(res) => Some(match res {
                Ok(node) => {
                    self.nodes.push(node.clone());
                    self.error = None;
                    Ok(node)
                }
                Err(err) => {
                    warn!("node creation failed: {err}");
                    Err(err.into())
                }
            }),
        }
    }

    fn dispatch(&self, request: ApiRequest) {
        self.backend.dispatch(request, self.sender.clone());
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn ip(&self) -> Option<&str> {
        self.ip.as_deref()
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn view(&self) -> ShellView<'_> {
        if self.loading {
            return ShellView::Loading;
        }
        if let Some(err) = &self.error {
            return ShellView::Failed(err);
        }
        ShellView::Ready(&self.nodes)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::{cell::RefCell, rc::Rc};

    use reqwest::StatusCode;

    use super::*;
    use crate::node::{NodeId, Position};

    /// Records dispatched requests; tests answer them by hand.
    #[derive(Clone, Default)]
    pub(crate) struct FakeBackend {
        pending: Rc<RefCell<Vec<(ApiRequest, Sender<ApiReply>)>>>,
    }

    impl FakeBackend {
        pub(crate) fn requests(&self) -> Vec<ApiRequest> {
            self.pending.borrow().iter().map(|(r, _)| r.clone()).collect()
        }

        pub(crate) fn reply(&self, reply: ApiReply) {
            let pending = self.pending.borrow();
            let (_, sender) = pending.last().expect("no request was dispatched");
            sender.send(reply).unwrap();
        }
    }

    impl Backend for FakeBackend {
        fn dispatch(&self, request: ApiRequest, replies: Sender<ApiReply>) {
            self.pending.borrow_mut().push((request, replies));
        }
    }

    pub(crate) fn node(id: u64, name: &str) -> Node {
        Node {
            id: NodeId::from(id),
            name: name.to_string(),
            ip: format!("10.0.0.{id}"),
            position: Position::new(id as f32, 0., 0.),
        }
    }

    pub(crate) fn ready_shell(nodes: Vec<Node>) -> (Shell, FakeBackend) {
        let fake = FakeBackend::default();
        let mut shell = Shell::new(fake.clone());
        shell.start();
        fake.reply(ApiReply::Nodes(Ok(nodes)));
        fake.reply(ApiReply::Ip(Ok("8.8.8.8".to_string())));
        assert!(shell.poll().is_empty());
        (shell, fake)
    }

    #[test]
    fn test_start_issues_both_fetches() {
        let fake = FakeBackend::default();
        let mut shell = Shell::new(fake.clone());
        shell.start();

        assert_eq!(
            fake.requests(),
            vec![ApiRequest::ListNodes, ApiRequest::CurrentIp]
        );
        assert!(shell.loading());
        assert_eq!(shell.view(), ShellView::Loading);
    }

    #[test]
    fn test_load_success_replaces_list() {
        let (shell, _) = ready_shell(vec![node(1, "Alpha"), node(2, "Beta")]);

        assert!(!shell.loading());
        assert_eq!(shell.error(), None);
        assert_eq!(shell.nodes().len(), 2);
        assert_eq!(shell.ip(), Some("8.8.8.8"));
        assert!(matches!(shell.view(), ShellView::Ready(nodes) if nodes.len() == 2));
    }

    #[test]
    fn test_empty_list_still_renders_scene() {
        let (shell, _) = ready_shell(vec![]);
        assert_eq!(shell.view(), ShellView::Ready(&[]));
    }

    #[test]
    fn test_load_failure_is_fail_closed() {
        let fake = FakeBackend::default();
        let mut shell = Shell::new(fake.clone());
        shell.start();
        fake.reply(ApiReply::Nodes(Err(ApiError::FetchNodes(
            StatusCode::INTERNAL_SERVER_ERROR,
        ))));
        shell.poll();

        assert!(!shell.loading());
        assert!(shell.nodes().is_empty());
        assert_eq!(shell.error(), Some("Failed to fetch nodes"));
        assert_eq!(shell.view(), ShellView::Failed("Failed to fetch nodes"));
    }

    #[test]
    fn test_ip_failure_is_swallowed() {
        let fake = FakeBackend::default();
        let mut shell = Shell::new(fake.clone());
        shell.start();
        fake.reply(ApiReply::Ip(Err(ApiError::ResolveIp(StatusCode::BAD_REQUEST))));
        fake.reply(ApiReply::Nodes(Ok(vec![node(1, "Alpha")])));
        shell.poll();

        assert_eq!(shell.ip(), None);
        assert_eq!(shell.error(), None);
        assert!(matches!(shell.view(), ShellView::Ready(_)));
    }

    #[test]
    fn test_create_without_ip_skips_network() {
        let fake = FakeBackend::default();
        let mut shell = Shell::new(fake.clone());
        shell.start();
        fake.reply(ApiReply::Nodes(Ok(vec![])));
        shell.poll();

        let err = shell.create_node("Alpha").unwrap_err();
        assert!(matches!(err, CreateError::IpUnresolved));
        assert_eq!(
            fake.requests(),
            vec![ApiRequest::ListNodes, ApiRequest::CurrentIp]
        );
    }

    #[test]
    fn test_create_blank_name_skips_network() {
        let (mut shell, fake) = ready_shell(vec![]);

        let err = shell.create_node("   ").unwrap_err();
        assert!(matches!(err, CreateError::EmptyName));
        assert_eq!(fake.requests().len(), 2);
    }

    #[test]
    fn test_create_sends_trimmed_name_and_ip() {
        let (mut shell, fake) = ready_shell(vec![]);

        shell.create_node("  Gamma ").unwrap();
        assert_eq!(
            fake.requests().last(),
            Some(&ApiRequest::CreateNode(CreateNodeRequest {
                name: "Gamma".to_string(),
                ip: "8.8.8.8".to_string(),
            }))
        );
    }

    #[test]
    fn test_create_success_appends_last() {
        let (mut shell, fake) = ready_shell(vec![node(1, "Alpha"), node(2, "Beta")]);

        shell.create_node("Gamma").unwrap();
        fake.reply(ApiReply::Created(Ok(node(3, "Gamma"))));
        let outcomes = shell.poll();

        assert_eq!(outcomes.len(), 1);
        assert_eq!(outcomes[0].as_ref().unwrap().name, "Gamma");
        let names: Vec<_> = shell.nodes().iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, ["Alpha", "Beta", "Gamma"]);
    }

    #[test]
    fn test_create_failure_keeps_list() {
        let before = vec![node(1, "Alpha"), node(2, "Beta")];
        let (mut shell, fake) = ready_shell(before.clone());

        shell.create_node("Alpha").unwrap();
        fake.reply(ApiReply::Created(Err(ApiError::Rejected(
            "Node name already taken".to_string(),
        ))));
        let outcomes = shell.poll();

        assert_eq!(outcomes.len(), 1);
        let err = outcomes[0].as_ref().unwrap_err();
        assert_eq!(err.to_string(), "Node name already taken");
        assert_eq!(shell.nodes(), before.as_slice());
        assert_eq!(shell.error(), None);
    }
}
