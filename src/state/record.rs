use uuid::Uuid;

use crate::phase::{PHASES, Phase};
use crate::surface::DrawingImage;

/// A finished phase's drawing. Records are only ever appended.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawingRecord {
    phase_index: usize,
    image: DrawingImage,
}

impl DrawingRecord {
    pub fn new(phase_index: usize, image: DrawingImage) -> Self {
        Self { phase_index, image }
    }

    pub fn id(&self) -> Uuid {
        self.image.id()
    }

    pub fn phase_index(&self) -> usize {
        self.phase_index
    }

    pub fn phase(&self) -> Option<&'static Phase> {
        PHASES.get(self.phase_index)
    }

    pub fn image(&self) -> &DrawingImage {
        &self.image
    }
}
