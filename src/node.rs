use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Server assigned node identifier.
///
/// The backend emits short alphanumeric strings, but numeric ids are accepted
/// as well. The value is opaque to the client and only compared for equality.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for NodeId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for NodeId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(serde_json::Number),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(s) => Self(s),
            Raw::Number(n) => Self(n.to_string()),
        })
    }
}

/// Position of a node in scene coordinates. Computed by the server.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Position {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

impl From<Position> for glam::Vec3 {
    fn from(p: Position) -> Self {
        Self::new(p.x, p.y, p.z)
    }
}

/// A named, IP-addressed entity displayed in the scene.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub name: String,
    pub ip: String,
    pub position: Position,
}

/// Body of the node creation request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateNodeRequest {
    pub name: String,
    pub ip: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_from_backend_json() {
        let json = r#"{"id":"aZ3kP0qx","name":"Alpha","ip":"8.8.8.8","position":{"x":0.25,"y":0.5,"z":-4.75}}"#;
        let node: Node = serde_json::from_str(json).unwrap();

        assert_eq!(node.id, NodeId::new("aZ3kP0qx"));
        assert_eq!(node.name, "Alpha");
        assert_eq!(node.ip, "8.8.8.8");
        assert_eq!(node.position, Position::new(0.25, 0.5, -4.75));
    }

    #[test]
    fn test_numeric_id_is_accepted() {
        let json = r#"{"id":2,"name":"Beta","ip":"1.1.1.1","position":{"x":1,"y":2,"z":3}}"#;
        let node: Node = serde_json::from_str(json).unwrap();

        assert_eq!(node.id, NodeId::from(2));
        assert_eq!(node.id.as_str(), "2");
    }

    #[test]
    fn test_numeric_id_full_unsigned_range() {
        let json = format!(
            r#"{{"id":{},"name":"Max","ip":"1.1.1.1","position":{{"x":0,"y":0,"z":0}}}}"#,
            u64::MAX
        );
        let node: Node = serde_json::from_str(&json).unwrap();
        assert_eq!(node.id, NodeId::from(u64::MAX));

        let id: NodeId = serde_json::from_str("-7").unwrap();
        assert_eq!(id.as_str(), "-7");
    }

    #[test]
    fn test_position_into_vec3() {
        let v = glam::Vec3::from(Position::new(1., -2., 3.5));
        assert_eq!(v, glam::Vec3::new(1., -2., 3.5));
    }

    #[test]
    fn test_create_request_body() {
        let req = CreateNodeRequest {
            name: "Gamma".to_string(),
            ip: "9.9.9.9".to_string(),
        };
        let value = serde_json::to_value(&req).unwrap();

        assert_eq!(value, serde_json::json!({"name": "Gamma", "ip": "9.9.9.9"}));
    }
}
