use crate::error::Result;
use crate::render::Document;

/// 1インチあたりのポイント数
pub const POINTS_PER_INCH: f64 = 72.0;

/// ポイント単位の長さをピクセル数に変換する
///
/// 丸めずに0方向へ切り捨てる。負の値やNaNは0になる。
pub fn points_to_pixels(points: f64, dpi: f64) -> u32 {
    // `as` は飽和変換（負数・NaNは0）
    (points * dpi / POINTS_PER_INCH) as u32
}

/// 指定ページのサイズをピクセル単位で返す
///
/// ページ範囲の検証はドキュメント側に任せる。
pub fn page_size_in_pixels(
    document: &Document,
    page_index: usize,
    dpi_x: f64,
    dpi_y: f64,
) -> Result<(u32, u32)> {
    let (width_points, height_points) = document.page_size_in_points(page_index)?;

    Ok((
        points_to_pixels(width_points, dpi_x),
        points_to_pixels(height_points, dpi_y),
    ))
}
