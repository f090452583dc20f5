use egui::{
    epaint::CircleShape, Align2, Color32, FontId, Painter, Rect, Shape, Stroke, StrokeKind, Vec2,
};
use glam::Vec3;

use crate::{
    camera::{OrbitCamera, Projected},
    scene::{Halo, Label, Scene, Sphere},
};

const LABEL_PADDING: Vec2 = Vec2::new(8., 4.);
const LABEL_ROUNDING: f32 = 4.;
const LABEL_BACKGROUND: Color32 = Color32::from_rgba_premultiplied(14, 14, 14, 204);

/// Direction of the point light in screen space (up and to the right).
const LIGHT_DIR: Vec2 = Vec2::new(0.577, -0.577);

/// Everything needed to paint a frame of the scene.
pub struct DrawContext<'a> {
    pub painter: &'a Painter,
    pub camera: &'a OrbitCamera,
    pub canvas: Rect,
}

/// Paints `scene` with a painter's algorithm: lines first, then halos and
/// spheres from far to near, labels last so they stay readable.
pub fn paint_scene(scene: &Scene, ctx: &DrawContext) {
    let mut shapes = Vec::with_capacity(scene.lines.len() + scene.spheres.len() * 3);

    for line in &scene.lines {
        let (Some(a), Some(b)) = (project(ctx, line.from), project(ctx, line.to)) else {
            continue;
        };
        shapes.push(Shape::line_segment(
            [a.pos, b.pos],
            Stroke::new(line.width, with_opacity(line.color, line.opacity)),
        ));
    }

    let mut bodies: Vec<_> = scene
        .halos
        .iter()
        .zip(&scene.spheres)
        .filter_map(|(halo, sphere)| project(ctx, sphere.center).map(|p| (p, halo, sphere)))
        .collect();
    bodies.sort_by(|(a, ..), (b, ..)| b.depth.total_cmp(&a.depth));

    for (p, halo, sphere) in &bodies {
        shapes.push(halo_shape(halo, p));
        shapes.extend(sphere_shapes(sphere, p));
    }

    ctx.painter.extend(shapes);

    let mut labels: Vec<_> = scene
        .labels
        .iter()
        .filter_map(|l| project(ctx, l.anchor).map(|p| (p, l)))
        .collect();
    labels.sort_by(|(a, _), (b, _)| b.depth.total_cmp(&a.depth));
    for (p, label) in labels {
        paint_label(ctx.painter, label, &p);
    }
}

fn project(ctx: &DrawContext, p: Vec3) -> Option<Projected> {
    ctx.camera.project(p, ctx.canvas)
}

fn with_opacity(color: Color32, opacity: f32) -> Color32 {
    let alpha = (opacity.clamp(0., 1.) * f32::from(color.a())).round() as u8;
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

fn halo_shape(halo: &Halo, p: &Projected) -> Shape {
    // only back faces are drawn, so the sphere in front covers the middle
    CircleShape::filled(
        p.pos,
        halo.radius * p.scale,
        with_opacity(halo.color, halo.opacity),
    )
    .into()
}

fn sphere_shapes(sphere: &Sphere, p: &Projected) -> [Shape; 3] {
    let radius = sphere.radius * p.scale;

    let body = shade(sphere.color, 0.55 + sphere.emissive_intensity * 0.5);
    let rim = shade(sphere.color, 0.25 + sphere.metalness * 0.1);

    // glossier surfaces get a smaller, sharper highlight
    let highlight_radius = radius * (0.2 + sphere.roughness);
    let highlight_alpha = 0.4 + sphere.metalness * 0.4;
    let highlight_pos = p.pos + LIGHT_DIR * radius * 0.45;

    [
        CircleShape {
            center: p.pos,
            radius,
            fill: body,
            stroke: Stroke::new(1., rim),
        }
        .into(),
        CircleShape::filled(
            p.pos - LIGHT_DIR * radius * 0.25,
            radius * 0.7,
            shade(sphere.color, 0.7),
        )
        .into(),
        CircleShape::filled(
            highlight_pos,
            highlight_radius,
            with_opacity(Color32::WHITE, highlight_alpha),
        )
        .into(),
    ]
}

fn shade(color: Color32, intensity: f32) -> Color32 {
    let k = intensity.clamp(0., 1.);
    Color32::from_rgb(
        (f32::from(color.r()) * k) as u8,
        (f32::from(color.g()) * k) as u8,
        (f32::from(color.b()) * k) as u8,
    )
}

fn paint_label(painter: &Painter, label: &Label, p: &Projected) {
    let galley = painter.layout_no_wrap(
        label.text.clone(),
        FontId::proportional(label.size),
        label.color,
    );
    let rect = Align2::CENTER_CENTER
        .anchor_size(p.pos, galley.size())
        .expand2(LABEL_PADDING);

    painter.rect_filled(rect, LABEL_ROUNDING, LABEL_BACKGROUND);
    painter.rect_stroke(
        rect,
        LABEL_ROUNDING,
        Stroke::new(1., with_opacity(label.color, 0.3)),
        StrokeKind::Inside,
    );
    painter.galley(rect.min + LABEL_PADDING, galley, label.color);
}
