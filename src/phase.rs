use egui::Color32;
use serde::{Deserialize, Serialize};

/// Identifies one of the three drawing prompts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhaseId {
    House,
    Tree,
    Person,
}

/// A single drawing prompt. Phases are static and never change at runtime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Phase {
    pub id: PhaseId,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    /// Accent pair (start, end) used for the phase header and continue button
    pub color: (Color32, Color32),
}

pub const PHASES: [Phase; 3] = [
    Phase {
        id: PhaseId::House,
        title: "Draw a House",
        description: "Draw a house as you imagine it. Include details like windows, doors, and surroundings. Let your intuition guide you.",
        icon: "🏠",
        color: (
            Color32::from_rgb(0x3B, 0x82, 0xF6),
            Color32::from_rgb(0x93, 0x33, 0xEA),
        ),
    },
    Phase {
        id: PhaseId::Tree,
        title: "Draw a Tree",
        description: "Draw a tree with roots, trunk, and branches. Show it as you envision a tree should look.",
        icon: "🌲",
        color: (
            Color32::from_rgb(0x22, 0xC5, 0x5E),
            Color32::from_rgb(0x0D, 0x94, 0x88),
        ),
    },
    Phase {
        id: PhaseId::Person,
        title: "Draw a Person",
        description: "Draw a person of any age or gender. Include as much detail as feels natural to you.",
        icon: "👤",
        color: (
            Color32::from_rgb(0xF9, 0x73, 0x16),
            Color32::from_rgb(0xDC, 0x26, 0x26),
        ),
    },
];

pub const LAST_PHASE: usize = PHASES.len() - 1;

/// How a phase relates to the one currently being drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseStatus {
    Completed,
    Current,
    Upcoming,
}

impl PhaseStatus {
    pub fn of(index: usize, current: usize) -> Self {
        match index.cmp(&current) {
            std::cmp::Ordering::Less => Self::Completed,
            std::cmp::Ordering::Equal => Self::Current,
            std::cmp::Ordering::Greater => Self::Upcoming,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::Current => "Current",
            Self::Upcoming => "Upcoming",
        }
    }
}

/// Fraction shown by the progress bar for the given phase index
pub fn progress_fraction(index: usize) -> f32 {
    index.min(LAST_PHASE) as f32 / LAST_PHASE as f32
}

/// Label of the continue button while `index` is the current phase
pub fn continue_label(index: usize) -> String {
    match PHASES.get(index + 1) {
        Some(next) => format!("Continue to {}", next.title),
        None => "Complete Analysis".to_owned(),
    }
}
