use serde::{Deserialize, Serialize};

use crate::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Colours for every scene layer under one theme.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    pub background: Rgb,
    pub beam: Rgb,
    pub ring: Rgb,
    pub silhouette: Rgb,
    pub grid: Rgb,
    pub ecg: Rgb,
    pub helix: Rgb,
    pub helix_back: Rgb,
    pub spark: Rgb,
    pub particle: Rgb,
    pub node: Rgb,
    pub edge: Rgb,
    /// Multiplier applied to every layer's alpha.
    pub intensity: f64,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                background: Rgb(248, 250, 252),
                beam: Rgb(14, 165, 233),
                ring: Rgb(99, 102, 241),
                silhouette: Rgb(236, 72, 153),
                grid: Rgb(148, 163, 184),
                ecg: Rgb(16, 185, 129),
                helix: Rgb(59, 130, 246),
                helix_back: Rgb(147, 197, 253),
                spark: Rgb(245, 158, 11),
                particle: Rgb(100, 116, 139),
                node: Rgb(37, 99, 235),
                edge: Rgb(96, 165, 250),
                intensity: 0.7,
            },
            Theme::Dark => Self {
                background: Rgb(2, 6, 23),
                beam: Rgb(56, 189, 248),
                ring: Rgb(129, 140, 248),
                silhouette: Rgb(244, 114, 182),
                grid: Rgb(51, 65, 85),
                ecg: Rgb(52, 211, 153),
                helix: Rgb(96, 165, 250),
                helix_back: Rgb(30, 64, 175),
                spark: Rgb(251, 191, 36),
                particle: Rgb(203, 213, 225),
                node: Rgb(125, 211, 252),
                edge: Rgb(56, 189, 248),
                intensity: 1.0,
            },
            Theme::Contrast => Self {
                background: Rgb(0, 0, 0),
                beam: Rgb(255, 255, 255),
                ring: Rgb(255, 255, 0),
                silhouette: Rgb(255, 255, 255),
                grid: Rgb(128, 128, 128),
                ecg: Rgb(0, 255, 0),
                helix: Rgb(0, 255, 255),
                helix_back: Rgb(0, 128, 128),
                spark: Rgb(255, 255, 0),
                particle: Rgb(255, 255, 255),
                node: Rgb(255, 255, 0),
                edge: Rgb(255, 255, 255),
                intensity: 1.0,
            },
        }
    }
}
