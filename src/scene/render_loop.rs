use std::collections::BTreeSet;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::broadcast;

use super::{draw_frame, MotionPreference, Palette, Parallax, Scene, Surface, Vec2, Viewport};
use crate::theme::Theme;

/// Opaque id of a requested animation frame.
pub type FrameHandle = u64;

/// Environment callbacks the render loop subscribes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Listener {
    Resize,
    PointerMove,
    MotionChange,
    ThemeChange,
}

/// The runtime hosting the render loop: a paint-loop scheduler plus an
/// event-listener registry.
pub trait FrameHost {
    fn request_frame(&mut self) -> FrameHandle;
    fn cancel_frame(&mut self, handle: FrameHandle);
    fn attach(&mut self, listener: Listener);
    fn detach(&mut self, listener: Listener);
}

/// Host that records requests; frames run when the owner pumps them.
#[derive(Debug, Default)]
pub struct ManualHost {
    next_handle: FrameHandle,
    pending: BTreeSet<FrameHandle>,
    /// Total `request_frame` calls.
    pub requested: usize,
    /// Total `cancel_frame` calls.
    pub cancelled: usize,
    attached: BTreeSet<Listener>,
}

impl ManualHost {
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn is_attached(&self, listener: Listener) -> bool {
        self.attached.contains(&listener)
    }

    pub fn attached(&self) -> usize {
        self.attached.len()
    }
}

impl FrameHost for ManualHost {
    fn request_frame(&mut self) -> FrameHandle {
        self.next_handle += 1;
        self.requested += 1;
        self.pending.insert(self.next_handle);
        self.next_handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.cancelled += 1;
        self.pending.remove(&handle);
    }

    fn attach(&mut self, listener: Listener) {
        self.attached.insert(listener);
    }

    fn detach(&mut self, listener: Listener) {
        self.attached.remove(&listener);
    }
}

/// Owns the scene and its frame/listener lifecycle.
///
/// At most one frame is pending at any time. Every re-initialisation
/// cancels the pending frame before the scene is replaced. Under reduced
/// motion exactly one frame is drawn per seed and no pointer listener is
/// attached.
pub struct RenderLoop<H: FrameHost> {
    host: H,
    scene: Scene,
    palette: Palette,
    parallax: Parallax,
    theme: Theme,
    rng: StdRng,
    pending: Option<FrameHandle>,
    attached: BTreeSet<Listener>,
    frames_drawn: u64,
}

impl<H: FrameHost> RenderLoop<H> {
    /// Seed the scene, attach listeners and request the first frame.
    pub fn start(
        host: H,
        viewport: Viewport,
        motion: MotionPreference,
        theme: Theme,
        seed: u64,
    ) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let scene = Scene::seed(viewport, motion, &mut rng);

        let mut render = Self {
            host,
            scene,
            palette: Palette::for_theme(theme),
            parallax: Parallax::new(),
            theme,
            rng,
            pending: None,
            attached: BTreeSet::new(),
            frames_drawn: 0,
        };
        render.sync_listeners();
        render.schedule();
        render
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }

    pub fn has_pending_frame(&self) -> bool {
        self.pending.is_some()
    }

    /// Frame callback. Draws onto `surface` and, unless motion is reduced,
    /// requests the next frame.
    pub fn on_frame<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        self.pending = None;

        let offset = if self.scene.motion.is_reduced() {
            Vec2::ZERO
        } else {
            self.scene.tick();
            self.parallax.step()
        };

        draw_frame(&self.scene, &self.palette, offset, surface);
        self.frames_drawn += 1;

        if !self.scene.motion.is_reduced() {
            self.schedule();
        }
    }

    /// Run the pending frame, if there is one. Returns whether a frame ran.
    pub fn run_pending_frame<S: Surface + ?Sized>(&mut self, surface: &mut S) -> bool {
        if self.pending.is_none() {
            return false;
        }
        self.on_frame(surface);
        true
    }

    pub fn resize(&mut self, viewport: Viewport) {
        tracing::debug!(width = viewport.width, height = viewport.height, "Background resized");
        self.reinit(viewport, self.scene.motion);
    }

    pub fn set_theme(&mut self, theme: Theme) {
        tracing::debug!(theme = %theme, "Background theme changed");
        self.theme = theme;
        self.palette = Palette::for_theme(theme);
        self.reinit(self.scene.viewport, self.scene.motion);
    }

    pub fn set_motion(&mut self, motion: MotionPreference) {
        tracing::debug!(?motion, "Background motion preference changed");
        self.reinit(self.scene.viewport, motion);
    }

    /// Apply the latest queued theme change, if any. Returns whether one was applied.
    pub fn sync_theme(&mut self, changes: &mut broadcast::Receiver<Theme>) -> bool {
        let mut latest = None;
        loop {
            match changes.try_recv() {
                Ok(theme) => latest = Some(theme),
                Err(broadcast::error::TryRecvError::Lagged(_)) => continue,
                Err(_) => break,
            }
        }
        match latest {
            Some(theme) => {
                self.set_theme(theme);
                true
            }
            None => false,
        }
    }

    /// Ignored unless the pointer listener is attached.
    pub fn pointer_moved(&mut self, pointer: Vec2) {
        if self.attached.contains(&Listener::PointerMove) {
            self.parallax.point_at(pointer, self.scene.viewport);
        }
    }

    /// Detach every listener, cancel the pending frame and hand back the host.
    pub fn teardown(mut self) -> H {
        self.cancel_pending();
        for listener in std::mem::take(&mut self.attached) {
            self.host.detach(listener);
        }
        self.host
    }

    fn reinit(&mut self, viewport: Viewport, motion: MotionPreference) {
        self.cancel_pending();
        let policy = self.scene.edge_policy;
        self.scene = Scene::seed(viewport, motion, &mut self.rng).with_edge_policy(policy);
        self.parallax = Parallax::new();
        self.sync_listeners();
        self.schedule();
    }

    fn schedule(&mut self) {
        if self.pending.is_none() {
            self.pending = Some(self.host.request_frame());
        }
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.host.cancel_frame(handle);
        }
    }

    fn sync_listeners(&mut self) {
        let mut wanted = BTreeSet::from([
            Listener::Resize,
            Listener::MotionChange,
            Listener::ThemeChange,
        ]);
        if !self.scene.motion.is_reduced() {
            wanted.insert(Listener::PointerMove);
        }

        for listener in self.attached.difference(&wanted) {
            self.host.detach(*listener);
        }
        for listener in wanted.difference(&self.attached) {
            self.host.attach(*listener);
        }
        self.attached = wanted;
    }
}
