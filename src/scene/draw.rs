use std::f64::consts::{PI, TAU};

use super::{Palette, Scene, Stroke, Surface, Vec2};

/// Side length of one hexagon in the background grid.
const HEX_SIZE: f64 = 36.0;

/// Horizontal sampling step of the ECG trace.
const ECG_STEP: f64 = 4.0;

/// Paint one frame of `scene`, back to front.
pub fn draw_frame<S: Surface + ?Sized>(scene: &Scene, palette: &Palette, offset: Vec2, surface: &mut S) {
    surface.clear(palette.background);
    surface.push_offset(offset);

    draw_beams(scene, palette, surface);
    draw_rings(scene, palette, surface);
    draw_silhouettes(scene, palette, surface);
    draw_hex_grid(scene, palette, surface);
    draw_ecg(scene, palette, surface);
    draw_helix(scene, palette, surface);
    draw_sparks(scene, palette, surface);
    draw_particles(scene, palette, surface);
    draw_node_graph(scene, palette, surface);

    surface.pop_offset();
}

fn draw_beams<S: Surface + ?Sized>(scene: &Scene, palette: &Palette, surface: &mut S) {
    let viewport = scene.viewport;
    let origin = Vec2::new(viewport.width / 2.0, -viewport.height * 0.1);
    let reach = viewport.width.hypot(viewport.height) * 1.2;

    for beam in &scene.beams {
        let wedge = [
            origin,
            origin + Vec2::from_angle(beam.angle - beam.spread) * reach,
            origin + Vec2::from_angle(beam.angle + beam.spread) * reach,
        ];
        surface.fill_polygon(&wedge, palette.beam, beam.alpha * palette.intensity);
    }
}

fn draw_rings<S: Surface + ?Sized>(scene: &Scene, palette: &Palette, surface: &mut S) {
    let center = Vec2::new(scene.viewport.width * 0.72, scene.viewport.height * 0.3);
    for ring in &scene.rings {
        let stroke = Stroke::new(palette.ring, 0.25 * palette.intensity, 1.0).dashed(ring.dash);
        surface.stroke_circle(center, ring.radius, stroke);

        let satellite = center + Vec2::from_angle(ring.rotation) * ring.radius;
        surface.fill_circle(satellite, 3.0, palette.ring, 0.8 * palette.intensity);
    }
}

fn draw_silhouettes<S: Surface + ?Sized>(scene: &Scene, palette: &Palette, surface: &mut S) {
    for silhouette in &scene.silhouettes {
        surface.fill_polygon(
            &silhouette.outline(),
            palette.silhouette,
            0.06 * palette.intensity,
        );
    }
}

/// Corners of a pointy-top hexagon.
fn hexagon(center: Vec2, size: f64) -> Vec<Vec2> {
    (0..=6)
        .map(|i| center + Vec2::from_angle(PI / 6.0 + TAU * i as f64 / 6.0) * size)
        .collect()
}

fn draw_hex_grid<S: Surface + ?Sized>(scene: &Scene, palette: &Palette, surface: &mut S) {
    let column = 3f64.sqrt() * HEX_SIZE;
    let row = 1.5 * HEX_SIZE;
    let columns = (scene.viewport.width / column).ceil() as usize + 1;
    let rows = (scene.viewport.height / row).ceil() as usize + 1;
    let stroke = Stroke::new(palette.grid, 0.12 * palette.intensity, 0.5);

    for r in 0..rows {
        let shift = if r % 2 == 1 { column / 2.0 } else { 0.0 };
        for c in 0..columns {
            let center = Vec2::new(c as f64 * column + shift, r as f64 * row);
            surface.polyline(&hexagon(center, HEX_SIZE), stroke);
        }
    }
}

fn draw_ecg<S: Surface + ?Sized>(scene: &Scene, palette: &Palette, surface: &mut S) {
    let steps = (scene.viewport.width / ECG_STEP).ceil() as usize;
    let points: Vec<Vec2> = (0..=steps)
        .map(|i| {
            let x = i as f64 * ECG_STEP;
            Vec2::new(x, scene.ecg.sample(x))
        })
        .collect();
    surface.polyline(&points, Stroke::new(palette.ecg, 0.5 * palette.intensity, 1.5));
}

fn draw_helix<S: Surface + ?Sized>(scene: &Scene, palette: &Palette, surface: &mut S) {
    let helix = &scene.helix;
    let height = scene.viewport.height;
    let steps = (height / 6.0).ceil() as usize;

    for (strand, color) in [(1.0, palette.helix), (-1.0, palette.helix_back)] {
        let points: Vec<Vec2> = (0..=steps)
            .map(|i| {
                let y = i as f64 * 6.0;
                Vec2::new(helix.strand_x(y, strand), y)
            })
            .collect();
        surface.polyline(&points, Stroke::new(color, 0.45 * palette.intensity, 1.5));
    }

    for rung in helix.rungs(height) {
        let alpha = (0.15 + 0.2 * rung.depth.abs()) * palette.intensity;
        surface.line(rung.left, rung.right, Stroke::new(palette.helix, alpha, 1.0));
    }
}

fn draw_sparks<S: Surface + ?Sized>(scene: &Scene, palette: &Palette, surface: &mut S) {
    for spark in &scene.sparks {
        surface.fill_rect(
            spark.position,
            spark.width,
            spark.height,
            palette.spark,
            spark.alpha * palette.intensity,
        );
    }
}

fn draw_particles<S: Surface + ?Sized>(scene: &Scene, palette: &Palette, surface: &mut S) {
    for particle in &scene.particles {
        surface.fill_circle(
            particle.position,
            particle.radius,
            palette.particle,
            particle.alpha * palette.intensity,
        );
    }
}

fn draw_node_graph<S: Surface + ?Sized>(scene: &Scene, palette: &Palette, surface: &mut S) {
    for edge in scene.edges() {
        let from = scene.nodes[edge.a].position;
        let to = scene.nodes[edge.b].position;
        let stroke = Stroke::new(palette.edge, 0.35 * edge.opacity * palette.intensity, 0.8);
        surface.line(from, to, stroke);
    }

    for node in &scene.nodes {
        let pulse = 0.75 + 0.25 * node.phase.sin();
        surface.fill_circle(node.position, node.radius, palette.node, pulse * palette.intensity);
    }
}
