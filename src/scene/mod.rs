//! Ambient procedural background.
//!
//! A [`Scene`] holds every procedural element as plain value structs. It is
//! seeded in one go and replaced wholesale on re-initialisation (resize,
//! theme change, motion-preference change); nothing carries over between
//! seeds. [`RenderLoop`] owns the scene and the frame/listener lifecycle,
//! and [`draw_frame`] paints one frame onto any [`Surface`].

mod draw;
mod elements;
mod palette;
mod parallax;
mod render_loop;
mod state;
mod surface;

pub use draw::*;
pub use elements::*;
pub use palette::*;
pub use parallax::*;
pub use render_loop::*;
pub use state::*;
pub use surface::*;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::theme::Theme;

/// Widths below this are treated as mobile.
pub const MOBILE_BREAKPOINT: f64 = 768.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// Dimensions are clamped to at least one pixel.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
        }
    }

    pub fn class(&self) -> ViewportClass {
        if self.width < MOBILE_BREAKPOINT {
            ViewportClass::Mobile
        } else {
            ViewportClass::Desktop
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn contains(&self, point: Vec2) -> bool {
        (0.0..=self.width).contains(&point.x) && (0.0..=self.height).contains(&point.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewportClass {
    Mobile,
    Desktop,
}

/// The environment's `prefers-reduced-motion` setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MotionPreference {
    #[default]
    Full,
    Reduced,
}

impl MotionPreference {
    pub fn is_reduced(&self) -> bool {
        matches!(self, Self::Reduced)
    }
}

/// Element counts for one scene. A step function of viewport class and
/// motion preference only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SceneBudget {
    pub nodes: usize,
    pub particles: usize,
    pub sparks: usize,
    pub beams: usize,
    pub rings: usize,
    /// Nodes closer than this (in pixels) are joined by an edge.
    pub connection_radius: f64,
}

impl SceneBudget {
    pub fn for_viewport(class: ViewportClass, motion: MotionPreference) -> Self {
        use MotionPreference::*;
        use ViewportClass::*;

        match (class, motion) {
            (Desktop, Full) => Self {
                nodes: 70,
                particles: 40,
                sparks: 24,
                beams: 4,
                rings: 3,
                connection_radius: 140.0,
            },
            (Mobile, Full) => Self {
                nodes: 35,
                particles: 20,
                sparks: 12,
                beams: 2,
                rings: 2,
                connection_radius: 100.0,
            },
            (Desktop, Reduced) => Self {
                nodes: 40,
                particles: 15,
                sparks: 0,
                beams: 2,
                rings: 3,
                connection_radius: 140.0,
            },
            (Mobile, Reduced) => Self {
                nodes: 20,
                particles: 8,
                sparks: 0,
                beams: 1,
                rings: 2,
                connection_radius: 100.0,
            },
        }
    }
}

/// Render a single static frame of a freshly seeded scene as SVG.
///
/// `frames` ticks are simulated before the snapshot; zero gives the
/// reduced-motion frame. Only the final frame is drawn, and the result is
/// identical to pumping a [`RenderLoop`] for `frames` frames.
pub fn snapshot_svg(viewport: Viewport, theme: Theme, seed: u64, frames: u32) -> String {
    let motion = if frames == 0 {
        MotionPreference::Reduced
    } else {
        MotionPreference::Full
    };

    let mut rng = StdRng::seed_from_u64(seed);
    let mut scene = Scene::seed(viewport, motion, &mut rng);
    for _ in 0..frames {
        scene.tick();
    }

    let mut surface = SvgSurface::new(viewport);
    draw_frame(&scene, &Palette::for_theme(theme), Vec2::ZERO, &mut surface);
    surface.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_is_a_step_function_of_width() {
        let narrow = Viewport::new(320.0, 640.0).class();
        let almost = Viewport::new(767.0, 640.0).class();
        let wide = Viewport::new(768.0, 640.0).class();
        let huge = Viewport::new(3840.0, 2160.0).class();

        assert_eq!(narrow, almost);
        assert_eq!(wide, huge);
        assert_eq!(
            SceneBudget::for_viewport(narrow, MotionPreference::Full),
            SceneBudget::for_viewport(almost, MotionPreference::Full)
        );
        assert_ne!(
            SceneBudget::for_viewport(almost, MotionPreference::Full),
            SceneBudget::for_viewport(wide, MotionPreference::Full)
        );
    }

    #[test]
    fn reduced_motion_shrinks_budget() {
        for class in [ViewportClass::Mobile, ViewportClass::Desktop] {
            let full = SceneBudget::for_viewport(class, MotionPreference::Full);
            let reduced = SceneBudget::for_viewport(class, MotionPreference::Reduced);
            assert!(reduced.nodes < full.nodes);
            assert_eq!(reduced.sparks, 0);
        }
    }

    #[test]
    fn viewport_dimensions_are_clamped() {
        let viewport = Viewport::new(0.0, -5.0);
        assert_eq!(viewport.width, 1.0);
        assert_eq!(viewport.height, 1.0);
    }

    #[test]
    fn snapshot_is_deterministic_per_seed() {
        let viewport = Viewport::new(1280.0, 720.0);
        let a = snapshot_svg(viewport, Theme::Dark, 7, 0);
        let b = snapshot_svg(viewport, Theme::Dark, 7, 0);
        let c = snapshot_svg(viewport, Theme::Dark, 8, 0);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a.starts_with("<svg"));
    }

    #[test]
    fn snapshot_matches_pumped_render_loop() {
        let viewport = Viewport::new(1024.0, 768.0);
        let mut render =
            RenderLoop::start(ManualHost::default(), viewport, MotionPreference::Full, Theme::Light, 11);
        let mut surface = SvgSurface::new(viewport);
        for _ in 0..12 {
            render.run_pending_frame(&mut surface);
        }

        assert_eq!(snapshot_svg(viewport, Theme::Light, 11, 12), surface.finish());
    }

    #[test]
    fn largest_snapshot_draws_only_once() {
        let started = std::time::Instant::now();
        let svg = snapshot_svg(Viewport::new(3840.0, 2160.0), Theme::Dark, 1, 600);
        assert!(svg.ends_with("</svg>"));
        assert!(
            started.elapsed() < std::time::Duration::from_secs(5),
            "took {:?}",
            started.elapsed()
        );
    }
}
