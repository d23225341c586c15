use crate::canvas::Canvas;
use crate::error::{ConvertError, Result};
use hayro::{InterpreterSettings, Pdf, RenderSettings};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// レンダリングエンジン。ドキュメントはここから開く
pub struct Engine {
    interpreter_settings: InterpreterSettings,
}

impl Engine {
    pub fn new() -> Self {
        Self {
            interpreter_settings: InterpreterSettings::default(),
        }
    }

    /// PDFファイルを読み込んでパースする
    pub fn open(&self, path: &Path) -> Result<Document<'_>> {
        let pdf_data = std::fs::read(path).map_err(|e| ConvertError::DocumentLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let pdf = Pdf::new(Arc::new(pdf_data)).map_err(|e| ConvertError::DocumentLoad {
            path: path.to_path_buf(),
            reason: format!("{:?}", e),
        })?;

        log::info!("loaded {} ({} pages)", path.display(), pdf.pages().len());

        Ok(Document {
            engine: self,
            path: path.to_path_buf(),
            pdf,
        })
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

/// 読み込み済みのPDFドキュメント
pub struct Document<'e> {
    engine: &'e Engine,
    path: PathBuf,
    pdf: Pdf,
}

impl<'e> Document<'e> {
    pub fn page_count(&self) -> usize {
        self.pdf.pages().len()
    }

    /// ページを取得する。範囲外ならページ読み込みエラー
    pub fn page(&self, index: usize) -> Result<Page<'_>> {
        let inner = self
            .pdf
            .pages()
            .get(index)
            .ok_or(ConvertError::PageLoad { page: index + 1 })?;

        Ok(Page {
            settings: &self.engine.interpreter_settings,
            index,
            inner,
        })
    }

    /// ページサイズ（ポイント単位、回転適用後）
    pub fn page_size_in_points(&self, index: usize) -> Result<(f64, f64)> {
        Ok(self.page(index)?.size_in_points())
    }
}

impl Drop for Document<'_> {
    fn drop(&mut self) {
        log::debug!("closing document {}", self.path.display());
    }
}

/// ドキュメント内の1ページ
pub struct Page<'d> {
    settings: &'d InterpreterSettings,
    index: usize,
    inner: &'d hayro_syntax::page::Page<'d>,
}

impl Page<'_> {
    pub fn size_in_points(&self) -> (f64, f64) {
        let (width, height) = self.inner.render_dimensions();
        (width as f64, height as f64)
    }

    /// キャンバス全体を描画先としてページを描画する
    pub fn render_into(&self, canvas: &mut Canvas) -> Result<()> {
        let (width_points, height_points) = self.size_in_points();
        let width = canvas.width();
        let height = canvas.height();

        // ページがキャンバス全体に収まる倍率
        let render_settings = RenderSettings {
            x_scale: (width as f64 / width_points) as f32,
            y_scale: (height as f64 / height_points) as f32,
            width: Some(pixmap_side(width)?.into()),
            height: Some(pixmap_side(height)?.into()),
        };

        let pixmap = hayro::render(self.inner, self.settings, &render_settings);
        log::debug!(
            "rendered page {} into {}x{} pixmap",
            self.index + 1,
            pixmap.width(),
            pixmap.height()
        );

        canvas.composite_premultiplied(&pixmap.take_u8())
    }
}

impl Drop for Page<'_> {
    fn drop(&mut self) {
        log::debug!("closing page {}", self.index + 1);
    }
}

fn pixmap_side(pixels: u32) -> Result<u16> {
    u16::try_from(pixels)
        .map_err(|_| ConvertError::Render(format!("{} pixels is too large", pixels)))
}
