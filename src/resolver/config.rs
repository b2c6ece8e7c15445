//! # 配置模块
//!
//! ## 设计思路
//!
//! 将所有“可调策略”集中到 `ResolverConfig`，保证运行时行为可观测、可调整、可测试。
//! 固定文件名、占位图颜色等常量也集中在此，避免散落在各处。
//!
//! ## 实现思路
//!
//! - `Default` 提供与原始页面一致的生产配置（工作目录、800×600 占位图、Lanczos 重采样）。
//! - 槽位相关取值（本地路径、占位颜色）通过方法按 `Slot` 派生，不做字符串键查表。

use std::path::PathBuf;

use image::Rgb;
use image::imageops::FilterType;

use super::source::Slot;

/// 目录列举时认定为图片的扩展名（小写比较）。
pub const LISTING_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "bmp", "gif"];

/// 上传组件对外声明的类型白名单。
///
/// 仅用于前端提示；解码阶段不看扩展名，一律按字节内容尝试。
pub const UPLOAD_ALLOWED_TYPES: [&str; 3] = ["jpg", "jpeg", "png"];

/// 1990 槽位占位色（深蓝灰 `#2c3e50`）。
const PLACEHOLDER_COLOR_1990: [u8; 3] = [0x2c, 0x3e, 0x50];

/// 2020 槽位占位色（灰蓝 `#34495e`）。
const PLACEHOLDER_COLOR_2020: [u8; 3] = [0x34, 0x49, 0x5e];

/// 图片对解析配置。
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// 本地模式查找图片的目录。
    pub base_dir: PathBuf,
    /// 占位图宽度（像素）。
    pub placeholder_width: u32,
    /// 占位图高度（像素）。
    pub placeholder_height: u32,
    /// 读取原始字节时允许的最大文件体积（字节）。
    pub max_file_size: u64,
    /// 解码后的像素上限（`width * height`）。
    pub max_decoded_pixels: u64,
    /// 解码阶段允许的预计内存上限（按 RGBA 估算，字节）。
    pub max_decoded_bytes: u64,
    /// 尺寸对齐重采样使用的滤镜。
    pub resize_filter: FilterType,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("."),
            placeholder_width: 800,
            placeholder_height: 600,
            max_file_size: 50 * 1024 * 1024,
            max_decoded_pixels: 40_000_000,
            max_decoded_bytes: 160 * 1024 * 1024,
            resize_filter: FilterType::Lanczos3,
        }
    }
}

impl ResolverConfig {
    /// 槽位在本地模式下的固定文件路径（`<年份>年.jpg`）。
    pub fn local_path(&self, slot: Slot) -> PathBuf {
        self.base_dir.join(format!("{}年.jpg", slot.label()))
    }

    /// 槽位的占位图颜色。
    ///
    /// 两个槽位颜色固定且互不相同，保证占位状态下滑块对比仍肉眼可辨。
    pub fn placeholder_color(slot: Slot) -> Rgb<u8> {
        match slot {
            Slot::Y1990 => Rgb(PLACEHOLDER_COLOR_1990),
            Slot::Y2020 => Rgb(PLACEHOLDER_COLOR_2020),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_path_uses_year_keyed_file_names() {
        let config = ResolverConfig::default();

        assert!(
            config
                .local_path(Slot::Y1990)
                .ends_with("1990年.jpg")
        );
        assert!(
            config
                .local_path(Slot::Y2020)
                .ends_with("2020年.jpg")
        );
    }

    #[test]
    fn placeholder_colors_are_distinct_per_slot() {
        assert_ne!(
            ResolverConfig::placeholder_color(Slot::Y1990),
            ResolverConfig::placeholder_color(Slot::Y2020)
        );
    }

    #[test]
    fn default_placeholder_matches_page_geometry() {
        let config = ResolverConfig::default();

        assert_eq!(config.placeholder_width, 800);
        assert_eq!(config.placeholder_height, 600);
    }
}
