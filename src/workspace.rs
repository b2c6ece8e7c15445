//! 工作目录列举模块
//!
//! # 设计思路
//!
//! 本地模式下，侧边栏需要展示工作目录里有哪些图片文件，
//! 帮助用户确认 `1990年.jpg` / `2020年.jpg` 是否就位。
//!
//! # 实现思路
//!
//! - 只按扩展名（小写比较）过滤出图片文件，不读内容。
//! - 结果按文件名排序，保证展示稳定。
//! - 所有可能失败的操作均返回 `Result`，不使用 `expect()` / `unwrap()`。

use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::error::AppError;
use crate::resolver::LISTING_EXTENSIONS;

/// 工作目录图片清单。
#[derive(Debug, Clone, Serialize)]
pub struct WorkspaceListing {
    /// 被列举的目录（展示用）。
    pub dir: String,
    /// 目录内识别为图片的文件名，按名称排序。
    pub image_files: Vec<String>,
}

/// 文件名是否带有图片扩展名。
fn has_image_extension(name: &str) -> bool {
    let lower = name.to_lowercase();
    LISTING_EXTENSIONS
        .iter()
        .any(|ext| lower.ends_with(&format!(".{}", ext)))
}

/// 列举目录下的图片文件。
///
/// # 返回
/// - `Ok(WorkspaceListing)` — 目录可读，清单可能为空
/// - `Err(AppError::Workspace)` — 目录不可读
pub fn list_image_files(dir: &Path) -> Result<WorkspaceListing, AppError> {
    let entries = fs::read_dir(dir)
        .map_err(|e| AppError::Workspace(format!("读取目录 '{}' 失败: {}", dir.display(), e)))?;

    let mut image_files: Vec<String> = entries
        .flatten()
        .filter(|entry| entry.path().is_file())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| has_image_extension(name))
        .collect();
    image_files.sort();

    if image_files.is_empty() {
        log::info!("ℹ️ 目录 '{}' 中没有找到图片文件", dir.display());
    } else {
        log::info!(
            "📋 目录 '{}' 中找到 {} 个图片文件",
            dir.display(),
            image_files.len()
        );
    }

    Ok(WorkspaceListing {
        dir: dir.display().to_string(),
        image_files,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_filter_is_case_insensitive() {
        assert!(has_image_extension("1990年.jpg"));
        assert!(has_image_extension("2020年.JPG"));
        assert!(has_image_extension("map.PnG"));
        assert!(has_image_extension("old.bmp"));
        assert!(has_image_extension("anim.gif"));
    }

    #[test]
    fn extension_filter_rejects_non_image_files() {
        assert!(!has_image_extension("notes.txt"));
        assert!(!has_image_extension("app.py"));
        assert!(!has_image_extension("jpg"));
    }

    #[test]
    fn listing_missing_directory_returns_workspace_error() {
        let missing = Path::new("/definitely/not/a/real/dir");

        let result = list_image_files(missing);

        assert!(matches!(result, Err(AppError::Workspace(_))));
    }

    #[test]
    fn listing_returns_sorted_image_files_only() {
        let dir = std::env::temp_dir().join("urban-change-viewer-listing-test");
        fs::create_dir_all(&dir).expect("create test dir failed");
        fs::write(dir.join("b.png"), b"x").expect("write failed");
        fs::write(dir.join("a.jpg"), b"x").expect("write failed");
        fs::write(dir.join("notes.txt"), b"x").expect("write failed");

        let listing = list_image_files(&dir).expect("listing failed");

        assert_eq!(listing.image_files, vec!["a.jpg", "b.png"]);

        let _ = fs::remove_dir_all(&dir);
    }
}
