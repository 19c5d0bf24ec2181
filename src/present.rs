//! Presentation collaborator boundary
//!
//! The core never draws. Each frame a renderer asks the session for a
//! `FrameSnapshot`: plain serializable data with everything needed to
//! draw the menu, the playfield, or the game-over overlay. Pixel
//! layout, sprites, and fonts are entirely the renderer's business.

use serde::Serialize;

use crate::sim::Phase;

/// Actor as the renderer sees it
#[derive(Debug, Clone, Serialize)]
pub struct ActorView {
    pub x: f32,
    pub y: f32,
    /// Visual tilt in degrees, already clamped
    pub rotation: f32,
    /// Roster index, doubles as the sprite selector
    pub sprite: usize,
    pub name: String,
}

/// One obstacle pair; the renderer derives both barrier shapes from
/// the gap geometry
#[derive(Debug, Clone, Serialize)]
pub struct ObstacleView {
    pub x: f32,
    pub width: f32,
    pub gap_center: f32,
    pub gap_height: f32,
}

/// Read-only view of one frame
#[derive(Debug, Clone, Serialize)]
pub struct FrameSnapshot {
    pub phase: Phase,
    pub score: u32,
    pub high_score: u32,
    /// Menu selection index
    pub selected: usize,
    /// Variant names for the menu screen
    pub roster: Vec<String>,
    pub actor: ActorView,
    /// Spawn order, which is left-to-right on screen
    pub obstacles: Vec<ObstacleView>,
    pub ground_line: f32,
    pub screen_width: f32,
    pub screen_height: f32,
}
