use crate::canvas::Canvas;
use crate::error::{ConvertError, Result};
use image::codecs::bmp::BmpEncoder;
use image::{ExtendedColorType, ImageEncoder, ImageError};
use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// 書き込み途中のファイル。確定しなければ破棄時に削除する
struct PartialFile {
    path: PathBuf,
    keep: bool,
}

impl Drop for PartialFile {
    fn drop(&mut self) {
        if !self.keep {
            log::debug!("removing partial file {}", self.path.display());
            let _ = fs::remove_file(&self.path);
        }
    }
}

/// `out.bmp` -> `out.bmp.part`
pub fn partial_path(output_path: &Path) -> PathBuf {
    output_path.with_extension(
        output_path
            .extension()
            .and_then(|s| s.to_str())
            .map(|e| format!("{}.part", e))
            .unwrap_or_else(|| "part".into()),
    )
}

/// キャンバスを24bit BMPとして保存する
///
/// `.part` ファイルに書き出してからリネームするので、
/// 失敗しても既存の出力ファイルには触れない。
pub fn save(output_path: &Path, canvas: &Canvas) -> Result<()> {
    write_atomic(output_path, canvas).map_err(|source| ConvertError::Save {
        path: output_path.to_path_buf(),
        source,
    })
}

fn write_atomic(output_path: &Path, canvas: &Canvas) -> Result<(), ImageError> {
    let tmp_path = partial_path(output_path);
    let mut guard = PartialFile {
        path: tmp_path.clone(),
        keep: false,
    };

    let f = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&tmp_path)?;
    let mut writer = BufWriter::new(f);

    BmpEncoder::new(&mut writer).write_image(
        canvas.as_raw(),
        canvas.width(),
        canvas.height(),
        ExtendedColorType::Rgb8,
    )?;

    writer.flush()?;
    writer.get_ref().sync_all()?;
    drop(writer);

    fs::rename(&tmp_path, output_path)?;
    guard.keep = true;

    log::debug!("saved {}", output_path.display());
    Ok(())
}
