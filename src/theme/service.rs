use std::sync::{Arc, Mutex};

use tokio::sync::broadcast;

use super::{resolve_initial, ColorScheme, PreferenceStore, Theme, THEME_KEY};

const CHANNEL_CAPACITY: usize = 16;

/// Owner of the active theme.
///
/// Cloning is cheap and every clone shares the same state. A transition
/// updates the in-memory value, persists it and broadcasts it to subscribers,
/// all while holding the state lock so subscribers observe transitions in
/// the order they happened.
#[derive(Clone)]
pub struct ThemeService {
    current: Arc<Mutex<Theme>>,
    store: Arc<dyn PreferenceStore>,
    changes: broadcast::Sender<Theme>,
}

impl ThemeService {
    /// Build the service, resolving the initial theme from the store and the
    /// environment preference.
    pub fn new(store: Arc<dyn PreferenceStore>, environment: ColorScheme) -> Self {
        let persisted = match store.load(THEME_KEY) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Ignoring unreadable theme preference: {}", e);
                None
            }
        };
        let initial = resolve_initial(persisted.as_deref(), environment);
        tracing::debug!(theme = %initial, "Resolved initial theme");

        let (changes, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self {
            current: Arc::new(Mutex::new(initial)),
            store,
            changes,
        }
    }

    pub fn get(&self) -> Theme {
        *self.current.lock().expect("theme lock poisoned")
    }

    /// Switch to `theme`. Returns `false` (and does nothing) when it is
    /// already active.
    pub fn set(&self, theme: Theme) -> bool {
        let mut current = self.current.lock().expect("theme lock poisoned");
        if *current == theme {
            return false;
        }
        self.transition(&mut current, theme);
        true
    }

    /// Advance to the next theme in cycle order and return it.
    pub fn toggle(&self) -> Theme {
        let mut current = self.current.lock().expect("theme lock poisoned");
        let next = current.next();
        self.transition(&mut current, next);
        next
    }

    /// Receive every subsequent transition.
    pub fn subscribe(&self) -> broadcast::Receiver<Theme> {
        self.changes.subscribe()
    }

    fn transition(&self, current: &mut Theme, next: Theme) {
        tracing::debug!(from = %current, to = %next, "Theme transition");
        *current = next;

        if let Err(e) = self.store.save(THEME_KEY, next.as_str()) {
            tracing::error!("Failed to persist theme preference: {}", e);
        }

        // No receivers is fine: nobody is listening yet.
        let _ = self.changes.send(next);
    }
}

impl std::fmt::Debug for ThemeService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeService")
            .field("current", &self.get())
            .finish_non_exhaustive()
    }
}
