use egui::Color32;
use glam::Vec3;

use crate::{
    mesh::full_mesh,
    node::{Node, NodeId},
    settings::SettingsStyle,
};

/// Labels longer than this many characters are cut and get an ellipsis.
pub const LABEL_MAX_CHARS: usize = 15;
const ELLIPSIS: &str = "...";

/// Oversized translucent sphere behind a node, only its back faces are drawn.
#[derive(Clone, Debug, PartialEq)]
pub struct Halo {
    pub node: NodeId,
    pub center: Vec3,
    pub radius: f32,
    pub color: Color32,
    pub opacity: f32,
}

/// Opaque node sphere with a reflective material.
#[derive(Clone, Debug, PartialEq)]
pub struct Sphere {
    pub node: NodeId,
    pub center: Vec3,
    pub radius: f32,
    pub color: Color32,
    pub metalness: f32,
    pub roughness: f32,
    pub emissive_intensity: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    pub node: NodeId,
    pub anchor: Vec3,
    pub text: String,
    pub color: Color32,
    pub size: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Line {
    pub ends: (NodeId, NodeId),
    pub from: Vec3,
    pub to: Vec3,
    pub color: Color32,
    pub opacity: f32,
    pub width: f32,
}

/// Everything needed to draw a node list, in scene coordinates.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    pub halos: Vec<Halo>,
    pub spheres: Vec<Sphere>,
    pub labels: Vec<Label>,
    pub lines: Vec<Line>,
}

/// Cuts `name` to [`LABEL_MAX_CHARS`] characters followed by `...`.
pub fn truncate_label(name: &str) -> String {
    match name.char_indices().nth(LABEL_MAX_CHARS) {
        Some((cut, _)) => format!("{}{ELLIPSIS}", &name[..cut]),
        None => name.to_string(),
    }
}

/// Builds the scene for `nodes`: a halo, a sphere and a label per node and a
/// line for every unordered pair of nodes.
pub fn build_scene(nodes: &[Node], style: &SettingsStyle) -> Scene {
    let mut scene = Scene {
        halos: Vec::with_capacity(nodes.len()),
        spheres: Vec::with_capacity(nodes.len()),
        labels: Vec::with_capacity(nodes.len()),
        lines: Vec::new(),
    };

    for n in nodes {
        let center = Vec3::from(n.position);

        scene.halos.push(Halo {
            node: n.id.clone(),
            center,
            radius: style.node_radius * style.halo_scale,
            color: style.halo_color,
            opacity: style.halo_opacity,
        });

        scene.spheres.push(Sphere {
            node: n.id.clone(),
            center,
            radius: style.node_radius,
            color: style.node_color,
            metalness: style.node_metalness,
            roughness: style.node_roughness,
            emissive_intensity: style.node_emissive_intensity,
        });

        scene.labels.push(Label {
            node: n.id.clone(),
            anchor: center + Vec3::Y * (style.node_radius + style.label_offset),
            text: truncate_label(&n.name),
            color: style.label_color,
            size: style.label_size,
        });
    }

    let mesh = full_mesh(nodes);
    scene.lines.reserve(mesh.edge_count());
    for e in mesh.edge_indices() {
        let Some((a, b)) = mesh.edge_endpoints(e) else {
            continue;
        };
        let (a, b) = (&nodes[mesh[a]], &nodes[mesh[b]]);
        scene.lines.push(Line {
            ends: (a.id.clone(), b.id.clone()),
            from: a.position.into(),
            to: b.position.into(),
            color: style.line_color,
            opacity: style.line_opacity,
            width: style.line_width,
        });
    }

    scene
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::node::Position;

    fn node(id: u64, name: &str, pos: (f32, f32, f32)) -> Node {
        Node {
            id: NodeId::from(id),
            name: name.to_string(),
            ip: format!("10.0.0.{id}"),
            position: Position::new(pos.0, pos.1, pos.2),
        }
    }

    fn nodes(n: u64) -> Vec<Node> {
        (1..=n)
            .map(|i| node(i, &format!("Node-{i}"), (i as f32, 0., 0.)))
            .collect()
    }

    #[test]
    fn test_counts() {
        let style = SettingsStyle::default();
        for n in 0..10 {
            let scene = build_scene(&nodes(n), &style);
            let n = n as usize;
            assert_eq!(scene.spheres.len(), n);
            assert_eq!(scene.halos.len(), n);
            assert_eq!(scene.labels.len(), n);
            assert_eq!(scene.lines.len(), n * n.saturating_sub(1) / 2);
        }
    }

    #[test]
    fn test_three_nodes_give_three_lines() {
        let scene = build_scene(
            &[
                node(1, "Alpha", (0., 0., 0.)),
                node(2, "Beta", (1., 0., 0.)),
                node(3, "Gamma", (0., 1., 0.)),
            ],
            &SettingsStyle::default(),
        );

        let pairs: HashSet<_> = scene
            .lines
            .iter()
            .map(|l| {
                let (a, b) = (l.ends.0.as_str(), l.ends.1.as_str());
                if a < b {
                    (a.to_string(), b.to_string())
                } else {
                    (b.to_string(), a.to_string())
                }
            })
            .collect();
        let expected: HashSet<_> = [("1", "2"), ("1", "3"), ("2", "3")]
            .into_iter()
            .map(|(a, b)| (a.to_string(), b.to_string()))
            .collect();
        assert_eq!(pairs, expected);
    }

    #[test]
    fn test_line_endpoints_follow_positions() {
        let scene = build_scene(
            &[node(1, "A", (1., 2., 3.)), node(2, "B", (-1., -2., -3.))],
            &SettingsStyle::default(),
        );
        let line = &scene.lines[0];
        let ends = [line.from, line.to];
        assert!(ends.contains(&Vec3::new(1., 2., 3.)));
        assert!(ends.contains(&Vec3::new(-1., -2., -3.)));
    }

    #[test]
    fn test_halo_and_label_placement() {
        let style = SettingsStyle::default();
        let scene = build_scene(&[node(7, "Alpha", (1., 2., 3.))], &style);

        assert_eq!(scene.halos[0].radius, 0.6);
        assert_eq!(scene.halos[0].opacity, 0.2);
        assert_eq!(scene.spheres[0].center, Vec3::new(1., 2., 3.));
        assert_eq!(scene.spheres[0].radius, 0.5);
        assert_eq!(scene.labels[0].anchor, Vec3::new(1., 3., 3.));
        assert_eq!(scene.labels[0].text, "Alpha");
    }

    #[test]
    fn test_truncate_label() {
        assert_eq!(truncate_label(""), "");
        assert_eq!(truncate_label("Alpha"), "Alpha");
        assert_eq!(truncate_label("exactly15chars!"), "exactly15chars!");
        assert_eq!(truncate_label("sixteen chars!!!"), "sixteen chars!!...");
        assert_eq!(
            truncate_label("a-very-long-node-name"),
            "a-very-long-nod..."
        );
    }

    #[test]
    fn test_truncate_label_multibyte() {
        let name = "ノードノードノードノードノードノード";
        let label = truncate_label(name);
        assert_eq!(label.chars().count(), LABEL_MAX_CHARS + ELLIPSIS.len());
        assert!(label.starts_with("ノードノードノードノードノード"));
        assert!(label.ends_with("..."));
    }
}
