use image::DynamicImage;
use image::GenericImageView;
use image::imageops::FilterType;

/// Brightness ramp, darkest to brightest.
const RAMP: &[u8] = b" .:-=+*#%@";

/// Render `img` as ASCII, `columns` characters wide.
///
/// `width_ratio` compensates for terminal cells being taller than wide:
/// at 2.0 the character grid has half as many rows as a square mapping
/// would, which keeps the art's proportions on screen.
pub fn render(img: &DynamicImage, columns: u32, width_ratio: f32) -> String {
    let columns = columns.max(1);
    let (width, height) = img.dimensions();
    let rows = target_rows(width, height, columns, width_ratio);

    let luma = img
        .resize_exact(columns, rows, FilterType::Triangle)
        .to_luma8();

    let mut out = String::with_capacity((columns as usize + 1) * rows as usize);
    for y in 0..rows {
        for x in 0..columns {
            let v = luma.get_pixel(x, y).0[0] as usize;
            out.push(RAMP[v * (RAMP.len() - 1) / 255] as char);
        }
        out.push('\n');
    }
    out
}

/// Number of character rows for an image scaled to `columns` wide.
pub(super) fn target_rows(width: u32, height: u32, columns: u32, width_ratio: f32) -> u32 {
    if width == 0 || height == 0 {
        return 1;
    }
    let ratio = if width_ratio > 0.0 { width_ratio } else { 2.0 };
    let rows = (height as f32 * columns as f32) / (width as f32 * ratio);
    (rows.round() as u32).max(1)
}
