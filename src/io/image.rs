//! PNG export of the answer key as shaded cells on a ruled grid

use crate::io::configuration::CELL_PIXELS;
use crate::io::error::{Result, WordSearchError, file_system_error};
use crate::spatial::{AnswerKey, Position};
use image::{ImageBuffer, Rgba, RgbaImage};
use std::path::Path;

const PAPER: Rgba<u8> = Rgba([255, 255, 255, 255]);
const INK: Rgba<u8> = Rgba([40, 40, 40, 255]);
const HIGHLIGHT: Rgba<u8> = Rgba([255, 214, 102, 255]);

/// Draw the answer key: highlighted cells where words lie, grid lines between cells
pub fn render_key_image(key: &AnswerKey) -> RgbaImage {
    let side = key.size() as u32 * CELL_PIXELS + 1;

    ImageBuffer::from_fn(side, side, |px, py| {
        if px % CELL_PIXELS == 0 || py % CELL_PIXELS == 0 {
            return INK;
        }
        let cell = Position::new((px / CELL_PIXELS) as usize, (py / CELL_PIXELS) as usize);
        if key.is_marked(cell) { HIGHLIGHT } else { PAPER }
    })
}

/// Export the answer key as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_key_as_png(key: &AnswerKey, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| file_system_error(parent, "create directory", e))?;
    }

    render_key_image(key)
        .save(output_path)
        .map_err(|e| WordSearchError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}
