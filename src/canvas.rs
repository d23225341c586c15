use crate::error::{ConvertError, Result};

/// レンダラが扱える1辺の最大ピクセル数
pub const MAX_SIDE: u32 = u16::MAX as u32;

const WHITE: u8 = 0xFF;

/// 24bit RGB のピクセルバッファ（上の行から順に格納）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Canvas {
    /// 白で塗りつぶしたキャンバスを作る
    pub fn white(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 || width > MAX_SIDE || height > MAX_SIDE {
            return Err(ConvertError::CanvasSize { width, height });
        }

        let len = width as usize * height as usize * 3;
        Ok(Self {
            width,
            height,
            pixels: vec![WHITE; len],
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn as_raw(&self) -> &[u8] {
        &self.pixels
    }

    /// (x, y) のRGB値
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = (y as usize * self.width as usize + x as usize) * 3;
        let px = &self.pixels[offset..offset + 3];
        Some([px[0], px[1], px[2]])
    }

    /// premultiplied RGBA をキャンバスに重ねる
    ///
    /// 透明な部分は下地の白が残る。
    pub fn composite_premultiplied(&mut self, rgba: &[u8]) -> Result<()> {
        let expected = self.width as usize * self.height as usize * 4;
        if rgba.len() != expected {
            return Err(ConvertError::Render(format!(
                "expected {} bytes of RGBA data, got {}",
                expected,
                rgba.len()
            )));
        }

        for (dst, src) in self.pixels.chunks_exact_mut(3).zip(rgba.chunks_exact(4)) {
            let a = src[3];
            for (d, &s) in dst.iter_mut().zip(&src[..3]) {
                // premultiplied の over 合成: s + d * (1 - a)
                let under = *d as u32 * (255 - a as u32) / 255;
                *d = (s as u32 + under).min(255) as u8;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_canvas_is_white() {
        let canvas = Canvas::white(3, 2).unwrap();
        assert_eq!(canvas.as_raw().len(), 18);
        assert!(canvas.as_raw().iter().all(|&b| b == 0xFF));
        assert_eq!(canvas.pixel(2, 1), Some([0xFF; 3]));
        assert_eq!(canvas.pixel(3, 0), None);
    }

    #[test]
    fn rejects_degenerate_sizes() {
        assert!(matches!(
            Canvas::white(0, 10),
            Err(ConvertError::CanvasSize { width: 0, height: 10 })
        ));
        assert!(Canvas::white(MAX_SIDE + 1, 1).is_err());
        assert!(Canvas::white(MAX_SIDE, 1).is_ok());
    }

    #[test]
    fn transparent_pixels_stay_white() {
        let mut canvas = Canvas::white(2, 1).unwrap();
        // 不透明な赤 + 完全な透明
        canvas
            .composite_premultiplied(&[255, 0, 0, 255, 0, 0, 0, 0])
            .unwrap();
        assert_eq!(canvas.pixel(0, 0), Some([255, 0, 0]));
        assert_eq!(canvas.pixel(1, 0), Some([255, 255, 255]));
    }

    #[test]
    fn half_transparent_black_becomes_gray() {
        let mut canvas = Canvas::white(1, 1).unwrap();
        canvas.composite_premultiplied(&[0, 0, 0, 128]).unwrap();
        let [r, g, b] = canvas.pixel(0, 0).unwrap();
        assert_eq!((r, g, b), (127, 127, 127));
    }

    #[test]
    fn rejects_mismatched_buffer() {
        let mut canvas = Canvas::white(2, 2).unwrap();
        assert!(matches!(
            canvas.composite_premultiplied(&[0; 4]),
            Err(ConvertError::Render(_))
        ));
    }
}
