use std::collections::HashMap;

use egui::{Context, TextureHandle, TextureId, TextureOptions};
use uuid::Uuid;

use crate::state::DrawingRecord;

/// Textures for the finished-phase thumbnails, keyed by drawing id.
///
/// A drawing is decoded at most once; a failed decode is remembered so it
/// is not retried every frame.
#[derive(Default)]
pub struct ThumbnailCache {
    textures: HashMap<Uuid, Option<TextureHandle>>,
}

impl ThumbnailCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_load(&mut self, ctx: &Context, record: &DrawingRecord) -> Option<TextureId> {
        let entry = self.textures.entry(record.id()).or_insert_with(|| {
            match record.image().decode() {
                Ok(image) => Some(ctx.load_texture(
                    format!("thumbnail_{}", record.id()),
                    image,
                    TextureOptions::LINEAR,
                )),
                Err(err) => {
                    log::warn!("Could not decode drawing {}: {}", record.id(), err);
                    None
                }
            }
        });
        entry.as_ref().map(|handle| handle.id())
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}
