use egui::ColorImage;
use uuid::Uuid;

use crate::error::{SurfaceError, SurfaceResult};

/// PNG snapshot of the canvas taken when a phase is finished
#[derive(Clone, PartialEq, Eq)]
pub struct DrawingImage {
    id: Uuid,
    size: [usize; 2],
    png: Vec<u8>,
}

impl std::fmt::Debug for DrawingImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DrawingImage")
            .field("id", &self.id)
            .field("size", &self.size)
            .field("png_bytes", &self.png.len())
            .finish()
    }
}

impl DrawingImage {
    pub fn new(size: [usize; 2], png: Vec<u8>) -> Self {
        Self {
            id: Uuid::new_v4(),
            size,
            png,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn size(&self) -> [usize; 2] {
        self.size
    }

    pub fn png(&self) -> &[u8] {
        &self.png
    }

    /// Decode back into pixels, e.g. for a thumbnail texture
    pub fn decode(&self) -> SurfaceResult<ColorImage> {
        let decoded =
            image::load_from_memory_with_format(&self.png, image::ImageFormat::Png)?.to_rgba8();
        let size = [decoded.width() as usize, decoded.height() as usize];
        if size[0] == 0 || size[1] == 0 {
            return Err(SurfaceError::InvalidDimensions {
                width: size[0],
                height: size[1],
            });
        }
        Ok(ColorImage::from_rgba_unmultiplied(size, decoded.as_raw()))
    }
}
