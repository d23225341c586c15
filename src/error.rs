use std::path::PathBuf;

/// 変換処理で発生するエラー。いずれも終了コード1で終了する
#[derive(thiserror::Error, Debug)]
pub enum ConvertError {
    #[error("{0}")]
    InvalidArguments(String),

    #[error("Failed to load PDF document: {}: {reason}", path.display())]
    DocumentLoad { path: PathBuf, reason: String },

    /// `page` は1始まりのページ番号
    #[error("Failed to load PDF page {page}")]
    PageLoad { page: usize },

    #[error("Invalid canvas size: {width} x {height}")]
    CanvasSize { width: u32, height: u32 },

    #[error("Failed to render PDF page: {0}")]
    Render(String),

    #[error("Unable to save bitmap: {}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl ConvertError {
    pub(crate) fn invalid_arguments(message: impl Into<String>) -> Self {
        ConvertError::InvalidArguments(message.into())
    }

    /// 使い方を併せて表示すべきエラーかどうか
    pub fn is_usage_error(&self) -> bool {
        matches!(self, ConvertError::InvalidArguments(_))
    }
}

pub type Result<T, E = ConvertError> = std::result::Result<T, E>;
