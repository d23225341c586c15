use crate::error::{ConvertError, Result};
use std::path::PathBuf;

/// デフォルトのDPI（1ポイント = 1ピクセル）
pub const DEFAULT_DPI: f64 = 72.0;

/// 1回の変換に必要な設定。パース後は変更しない
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
    pub dpi: f64,
    /// 0始まりのページインデックス
    pub page_index: usize,
}

impl Config {
    /// 入力値を検証して設定を作る
    ///
    /// `page_number` はユーザー指定の1始まりのページ番号。
    /// DPIの範囲はここでは検証しない（不正なDPIはキャンバスサイズの検証で弾かれる）。
    pub fn new(
        input: Option<PathBuf>,
        output: Option<PathBuf>,
        dpi: f64,
        page_number: u32,
    ) -> Result<Self> {
        let input =
            input.ok_or_else(|| ConvertError::invalid_arguments("No input file specified"))?;
        let output =
            output.ok_or_else(|| ConvertError::invalid_arguments("No output file specified"))?;

        let page_index = i64::from(page_number) - 1;
        if page_index < 0 {
            return Err(ConvertError::invalid_arguments("Invalid page number"));
        }

        Ok(Self {
            input,
            output,
            dpi,
            page_index: page_index as usize,
        })
    }

    /// 表示用の1始まりのページ番号
    pub fn page_number(&self) -> usize {
        self.page_index + 1
    }
}
