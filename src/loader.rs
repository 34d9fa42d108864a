use std::path::Path;

use crate::config::MediaPaths;
use crate::error::ResourceError;
use crate::gallery::{Gallery, ResourceSlot};
use crate::types::PixelImage;

/// Largest edge we will accept from the decoder
///
/// Anything beyond this cannot be streamed through the presenter's texture
/// and is almost certainly a corrupt header.
const MAX_DIMENSION: u32 = 8192;

/// Decode an image file into a display-ready resource
///
/// Decoding is delegated to the `image` crate; whatever it produces is then
/// converted to the RGBA8 layout the framebuffer blits. Decode failures
/// (missing file, unreadable data) report as `Load`; a decoded image we
/// cannot convert reports as `Optimize`.
pub fn load_image(path: &Path) -> Result<PixelImage, ResourceError> {
    let decoded =
        image::open(path).map_err(|err| ResourceError::load(path, err.to_string()))?;
    optimize(decoded, path)
}

/// Convert a decoded image to the framebuffer's pixel format
fn optimize(decoded: image::DynamicImage, path: &Path) -> Result<PixelImage, ResourceError> {
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();

    if width == 0 || height == 0 {
        return Err(ResourceError::optimize(path, "image has zero extent"));
    }
    if width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(ResourceError::optimize(
            path,
            format!("image {width}x{height} exceeds the {MAX_DIMENSION} pixel limit"),
        ));
    }

    PixelImage::from_rgba8(width, height, rgba.into_raw())
        .ok_or_else(|| ResourceError::optimize(path, "decoded buffer has unexpected size"))
}

/// Load all five gallery resources
///
/// Fails on the first missing or undecodable file; nothing is retried and no
/// placeholder is substituted. The caller is expected to log the error and
/// head straight to teardown.
pub fn load_gallery(paths: &MediaPaths) -> Result<Gallery<PixelImage>, ResourceError> {
    Gallery::try_from_fn(|slot| {
        let path = paths.for_slot(slot);
        log::info!("loading {} image from {}", slot_name(slot), path.display());
        load_image(path)
    })
}

fn slot_name(slot: ResourceSlot) -> &'static str {
    match slot {
        ResourceSlot::Default => "default",
        ResourceSlot::Up => "up",
        ResourceSlot::Down => "down",
        ResourceSlot::Left => "left",
        ResourceSlot::Right => "right",
    }
}
