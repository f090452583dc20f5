mod backend;
mod camera;
mod client;
mod config;
mod draw;
mod form;
mod mesh;
mod node;
mod scene;
mod scene_view;
mod settings;
mod shell;

pub use self::backend::{ApiReply, ApiRequest, Backend, HttpBackend};
pub use self::camera::{OrbitCamera, Projected};
pub use self::client::{ApiClient, ApiError};
pub use self::config::{Config, ConfigError, API_URL_ENV, DEFAULT_API_URL};
pub use self::draw::{paint_scene, DrawContext};
pub use self::form::{
    friendly_message, CreationForm, GENERIC_FAILURE, IP_EXISTS, IP_EXISTS_FRIENDLY, NAME_TAKEN,
    NAME_TAKEN_FRIENDLY,
};
pub use self::mesh::{full_mesh, Mesh};
pub use self::node::{CreateNodeRequest, Node, NodeId, Position};
pub use self::scene::{
    build_scene, truncate_label, Halo, Label, Line, Scene, Sphere, LABEL_MAX_CHARS,
};
pub use self::scene_view::SceneView;
pub use self::settings::{SettingsNavigation, SettingsStyle, ACCENT};
pub use self::shell::{CreateError, CreateOutcome, Shell, ShellView};
