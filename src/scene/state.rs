use std::f64::consts::{PI, TAU};

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{
    Beam, EcgTrace, Helix, MotionPreference, Node, Particle, Ring, SceneBudget, Silhouette, Spark,
    Vec2, Viewport,
};

/// Vertices per silhouette outline.
const SILHOUETTE_VERTICES: usize = 18;

/// What a node does when it crosses the viewport edge.
///
/// - `Reflect`: the velocity component is negated and the position is left
///   as is, so a node may sit up to one frame's movement outside the
///   viewport before the next tick carries it back.
/// - `Wrap`: the position re-enters from the opposite edge and the velocity
///   is unchanged. Positions always stay inside the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EdgePolicy {
    Reflect,
    #[default]
    Wrap,
}

/// Pair of nodes close enough to be joined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
    /// `1 - distance / radius`, in `(0, 1]`.
    pub opacity: f64,
}

/// Every procedural element of one background instance.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub viewport: Viewport,
    pub motion: MotionPreference,
    pub budget: SceneBudget,
    pub edge_policy: EdgePolicy,
    pub nodes: Vec<Node>,
    pub particles: Vec<Particle>,
    pub sparks: Vec<Spark>,
    pub beams: Vec<Beam>,
    pub rings: Vec<Ring>,
    pub silhouettes: Vec<Silhouette>,
    pub ecg: EcgTrace,
    pub helix: Helix,
    /// Ticks since seeding.
    pub frame: u64,
}

impl Scene {
    /// Seed a fresh scene sized for `viewport`.
    pub fn seed<R: Rng + ?Sized>(viewport: Viewport, motion: MotionPreference, rng: &mut R) -> Self {
        let budget = SceneBudget::for_viewport(viewport.class(), motion);
        let Viewport { width, height } = viewport;

        let nodes = (0..budget.nodes)
            .map(|_| Node {
                position: Vec2::new(rng.gen_range(0.0..width), rng.gen_range(0.0..height)),
                velocity: Vec2::new(rng.gen_range(-0.4..0.4), rng.gen_range(-0.4..0.4)),
                radius: rng.gen_range(1.2..2.8),
                phase: rng.gen_range(0.0..TAU),
            })
            .collect();

        let particles = (0..budget.particles)
            .map(|_| Particle {
                position: Vec2::new(rng.gen_range(0.0..width), rng.gen_range(0.0..height)),
                speed: rng.gen_range(0.15..0.6),
                radius: rng.gen_range(0.8..2.4),
                alpha: rng.gen_range(0.15..0.55),
            })
            .collect();

        let sparks = (0..budget.sparks)
            .map(|_| Spark {
                position: Vec2::new(rng.gen_range(0.0..width), rng.gen_range(0.0..height)),
                speed: rng.gen_range(0.6..1.6),
                width: rng.gen_range(1.0..2.0),
                height: rng.gen_range(4.0..12.0),
                alpha: rng.gen_range(0.2..0.6),
            })
            .collect();

        let beams = (0..budget.beams)
            .map(|_| Beam {
                angle: rng.gen_range(0.2 * PI..0.8 * PI),
                spread: rng.gen_range(0.03..0.08),
                speed: rng.gen_range(-0.002..0.002),
                alpha: rng.gen_range(0.04..0.1),
            })
            .collect();

        let base = width.min(height);
        let rings = (0..budget.rings)
            .map(|i| {
                // Alternate rings turn in opposite directions.
                let direction = if i % 2 == 0 { 1.0 } else { -1.0 };
                Ring {
                    radius: base * (0.18 + 0.1 * i as f64),
                    rotation: rng.gen_range(0.0..TAU),
                    speed: direction * rng.gen_range(0.002..0.006),
                    dash: rng.gen_range(4.0..10.0),
                }
            })
            .collect();

        let silhouettes = [(0.2, 0.75, 0.14), (0.82, 0.7, 0.12)]
            .iter()
            .map(|&(fx, fy, scale)| Silhouette {
                center: Vec2::new(width * fx, height * fy),
                radius_x: base * scale,
                radius_y: base * scale * 1.15,
                lobes: (0..SILHOUETTE_VERTICES)
                    .map(|_| rng.gen_range(0.85..1.15))
                    .collect(),
            })
            .collect();

        let ecg = EcgTrace {
            offset: rng.gen_range(0.0..super::ECG_PERIOD),
            speed: 2.0,
            baseline: height * 0.82,
            amplitude: (height * 0.08).min(60.0),
        };

        let helix = Helix {
            center_x: width * 0.9,
            amplitude: (width * 0.03).clamp(12.0, 36.0),
            wavelength: 220.0,
            phase: rng.gen_range(0.0..TAU),
            speed: 0.015,
            rung_spacing: 18.0,
        };

        Self {
            viewport,
            motion,
            budget,
            edge_policy: EdgePolicy::default(),
            nodes,
            particles,
            sparks,
            beams,
            rings,
            silhouettes,
            ecg,
            helix,
            frame: 0,
        }
    }

    pub fn with_edge_policy(mut self, policy: EdgePolicy) -> Self {
        self.edge_policy = policy;
        self
    }

    /// Advance every element by one frame.
    pub fn tick(&mut self) {
        let Viewport { width, height } = self.viewport;

        for node in &mut self.nodes {
            node.position = node.position + node.velocity;
            node.phase = (node.phase + 0.03) % TAU;
            match self.edge_policy {
                EdgePolicy::Reflect => {
                    if node.position.x < 0.0 || node.position.x > width {
                        node.velocity.x = -node.velocity.x;
                    }
                    if node.position.y < 0.0 || node.position.y > height {
                        node.velocity.y = -node.velocity.y;
                    }
                }
                EdgePolicy::Wrap => {
                    node.position.x = node.position.x.rem_euclid(width);
                    node.position.y = node.position.y.rem_euclid(height);
                }
            }
        }

        for particle in &mut self.particles {
            particle.position.y -= particle.speed;
            if particle.position.y < -particle.radius {
                particle.position.y = height + particle.radius;
            }
        }

        for spark in &mut self.sparks {
            spark.position.y -= spark.speed;
            if spark.position.y < -spark.height {
                spark.position.y = height + spark.height;
            }
        }

        for beam in &mut self.beams {
            beam.angle += beam.speed;
            // Keep beams pointing into the viewport.
            if beam.angle < 0.15 * PI || beam.angle > 0.85 * PI {
                beam.speed = -beam.speed;
            }
        }

        for ring in &mut self.rings {
            ring.rotation = (ring.rotation + ring.speed).rem_euclid(TAU);
        }

        self.ecg.offset = (self.ecg.offset + self.ecg.speed) % super::ECG_PERIOD;
        self.helix.phase = (self.helix.phase + self.helix.speed) % TAU;
        self.frame += 1;
    }

    /// Node pairs closer than the connection radius.
    pub fn edges(&self) -> Vec<Edge> {
        let radius = self.budget.connection_radius;
        let mut edges = Vec::new();
        for (a, first) in self.nodes.iter().enumerate() {
            for (b, second) in self.nodes.iter().enumerate().skip(a + 1) {
                let distance = first.position.distance(second.position);
                if distance < radius {
                    edges.push(Edge {
                        a,
                        b,
                        opacity: 1.0 - distance / radius,
                    });
                }
            }
        }
        edges
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn scene(policy: EdgePolicy) -> Scene {
        let mut rng = StdRng::seed_from_u64(42);
        Scene::seed(Viewport::new(1024.0, 768.0), MotionPreference::Full, &mut rng)
            .with_edge_policy(policy)
    }

    fn single_node(scene: &mut Scene, position: Vec2, velocity: Vec2) {
        scene.nodes = vec![Node {
            position,
            velocity,
            radius: 2.0,
            phase: 0.0,
        }];
    }

    #[test]
    fn seeds_counts_from_budget() {
        let scene = scene(EdgePolicy::Wrap);
        assert_eq!(scene.nodes.len(), scene.budget.nodes);
        assert_eq!(scene.particles.len(), scene.budget.particles);
        assert_eq!(scene.sparks.len(), scene.budget.sparks);
        assert_eq!(scene.beams.len(), scene.budget.beams);
        assert_eq!(scene.rings.len(), scene.budget.rings);
        assert_eq!(scene.silhouettes.len(), 2);
    }

    #[test]
    fn seeded_nodes_start_inside_viewport() {
        let scene = scene(EdgePolicy::Wrap);
        assert!(scene.nodes.iter().all(|n| scene.viewport.contains(n.position)));
    }

    #[test]
    fn wrap_keeps_nodes_inside_viewport() {
        let mut scene = scene(EdgePolicy::Wrap);
        for _ in 0..5_000 {
            scene.tick();
            assert!(scene.nodes.iter().all(|n| scene.viewport.contains(n.position)));
        }
    }

    #[test]
    fn wrap_reenters_from_opposite_edge() {
        let mut scene = scene(EdgePolicy::Wrap);
        single_node(&mut scene, Vec2::new(1023.8, 10.0), Vec2::new(0.4, 0.0));
        scene.tick();
        let node = scene.nodes[0];
        assert!(node.position.x < 1.0);
        assert_eq!(node.velocity.x, 0.4);
    }

    #[test]
    fn reflect_reverses_velocity_without_clamping() {
        let mut scene = scene(EdgePolicy::Reflect);
        single_node(&mut scene, Vec2::new(1023.8, 10.0), Vec2::new(0.4, 0.0));

        scene.tick();
        let node = scene.nodes[0];
        assert!(node.position.x > 1024.0);
        assert_eq!(node.velocity.x, -0.4);

        scene.tick();
        assert!(scene.nodes[0].position.x < 1024.0);
    }

    #[test]
    fn reflect_overshoot_is_bounded_by_one_step() {
        let mut scene = scene(EdgePolicy::Reflect);
        for _ in 0..5_000 {
            scene.tick();
            for node in &scene.nodes {
                assert!(node.position.x >= -0.4 && node.position.x <= 1024.4);
                assert!(node.position.y >= -0.4 && node.position.y <= 768.4);
            }
        }
    }

    #[test]
    fn edges_fade_with_distance() {
        let mut scene = scene(EdgePolicy::Wrap);
        let radius = scene.budget.connection_radius;
        scene.nodes = [0.0, radius / 2.0, radius * 3.0]
            .iter()
            .map(|&x| Node {
                position: Vec2::new(x + 10.0, 10.0),
                velocity: Vec2::ZERO,
                radius: 2.0,
                phase: 0.0,
            })
            .collect();

        let edges = scene.edges();
        assert_eq!(edges.len(), 1);
        assert_eq!((edges[0].a, edges[0].b), (0, 1));
        assert!((edges[0].opacity - 0.5).abs() < 1e-9);
    }

    #[test]
    fn particles_respawn_below_viewport() {
        let mut scene = scene(EdgePolicy::Wrap);
        scene.particles = vec![Particle {
            position: Vec2::new(5.0, -1.9),
            speed: 0.5,
            radius: 2.0,
            alpha: 0.3,
        }];
        scene.tick();
        assert_eq!(scene.particles[0].position.y, 768.0 + 2.0);
    }

    #[test]
    fn reseeding_with_same_seed_is_identical() {
        assert_eq!(scene(EdgePolicy::Wrap), scene(EdgePolicy::Wrap));
    }
}
