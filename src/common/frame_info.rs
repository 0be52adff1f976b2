use image::{DynamicImage, GenericImageView};

/// Pixel dimensions of the image a set of predictions was produced for.
///
/// The decoder only needs the dimensions to denormalize box coordinates; the
/// pixel data itself stays with the external loading/rendering collaborators.
#[derive(Debug, Clone, Copy)]
pub struct FrameInfo {
    pub img_width: u32,
    pub img_height: u32,
}

impl FrameInfo {
    pub fn new(image: &DynamicImage) -> Self {
        let (img_width, img_height) = image.dimensions();
        Self {
            img_width,
            img_height,
        }
    }

    pub fn from_dims(img_width: u32, img_height: u32) -> Self {
        Self {
            img_width,
            img_height,
        }
    }
}

impl From<&DynamicImage> for FrameInfo {
    fn from(image: &DynamicImage) -> Self {
        Self::new(image)
    }
}
