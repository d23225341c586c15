pub mod bitmap;
pub mod canvas;
pub mod config;
pub mod error;
pub mod geometry;
pub mod render;

#[cfg(feature = "cli")]
pub mod cli;

pub use canvas::Canvas;
pub use config::Config;
pub use error::{ConvertError, Result};
pub use render::{Document, Engine, Page};

/// 変換結果のサイズ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conversion {
    pub width: u32,
    pub height: u32,
}

/// PDFの1ページをBMPファイルに変換する
///
/// 取得したハンドルはどの経路で抜けても逆順に解放される。
pub fn convert(config: &Config) -> Result<Conversion> {
    let engine = Engine::new();
    let document = engine.open(&config.input)?;

    let (width, height) =
        geometry::page_size_in_pixels(&document, config.page_index, config.dpi, config.dpi)?;
    log::info!("Page size: {} x {} pixels", width, height);

    let page = document.page(config.page_index)?;

    let mut canvas = Canvas::white(width, height)?;
    page.render_into(&mut canvas)?;

    bitmap::save(&config.output, &canvas)?;

    Ok(Conversion { width, height })
}
