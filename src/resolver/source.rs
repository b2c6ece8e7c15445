//! # 数据源与中间模型
//!
//! ## 设计思路
//!
//! 将“外部输入语义”和“流水线中间结果”解耦：
//! - `Slot` 表示两个固定对比槽位（1990 / 2020）
//! - `ImageSource` 表示用户选择的图片来源
//! - `RawImageData` 表示已加载但未解码的字节
//! - `DecodedImage` 表示解码完成、可交给对比组件的位图

use image::{ColorType, DynamicImage, GenericImageView};
use serde::Serialize;

/// 对比槽位。
///
/// 页面上永远只有两个槽位：左侧“1990年”与右侧“2020年”。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Slot {
    #[serde(rename = "1990")]
    Y1990,
    #[serde(rename = "2020")]
    Y2020,
}

impl Slot {
    /// 固定槽位顺序（先 1990 后 2020）。
    pub const ALL: [Slot; 2] = [Slot::Y1990, Slot::Y2020];

    /// 槽位的年份标签，用于文件名、日志与前端展示。
    pub fn label(self) -> &'static str {
        match self {
            Slot::Y1990 => "1990",
            Slot::Y2020 => "2020",
        }
    }
}

/// 图片输入来源。
///
/// 一次页面渲染只选择一种来源；上传模式下每个槽位的字节可缺省
/// （表示“尚未上传”，属于正常状态而非错误）。
pub enum ImageSource {
    /// 从工作目录下的固定文件名读取（`1990年.jpg` / `2020年.jpg`）。
    Local,
    /// 使用前端上传的原始字节。
    Uploaded {
        buf_1990: Option<Vec<u8>>,
        buf_2020: Option<Vec<u8>>,
    },
}

impl ImageSource {
    /// 取指定槽位的上传字节（仅上传模式有值）。
    pub(crate) fn upload_buffer(&self, slot: Slot) -> Option<&[u8]> {
        match self {
            ImageSource::Local => None,
            ImageSource::Uploaded { buf_1990, buf_2020 } => match slot {
                Slot::Y1990 => buf_1990.as_deref(),
                Slot::Y2020 => buf_2020.as_deref(),
            },
        }
    }

    /// 来源标识（用于日志与槽位报告）。
    pub(crate) fn hint(&self) -> &'static str {
        match self {
            ImageSource::Local => "local-file",
            ImageSource::Uploaded { .. } => "upload",
        }
    }
}

/// 加载阶段输出：原始字节与来源信息。
pub(crate) struct RawImageData {
    /// 原始图片字节。
    pub(crate) bytes: Vec<u8>,
    /// 来源提示（用于日志与诊断）。
    pub(crate) source_hint: &'static str,
    /// 通过文件签名识别出的格式标签（如 `jpg` / `png`）。
    pub(crate) format_label: Option<&'static str>,
}

/// 解码阶段输出：可直接交给对比组件的位图。
///
/// 解析完成后，两个槽位各持有一个实例，且宽高保证一致；
/// 生命周期仅限一次页面渲染，渲染结束即丢弃。
pub struct DecodedImage {
    pub(crate) image: DynamicImage,
    pub(crate) format_label: Option<&'static str>,
}

impl DecodedImage {
    /// 图像宽度（像素）。
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// 图像高度（像素）。
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// 宽高二元组，便于尺寸比较。
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// 识别出的格式标签（占位图没有格式，返回 `None`）。
    pub fn format_label(&self) -> Option<&'static str> {
        self.format_label
    }

    /// 色彩模式描述（面向信息面板展示）。
    pub fn color_mode(&self) -> &'static str {
        match self.image.color() {
            ColorType::L8 => "L8",
            ColorType::La8 => "LA8",
            ColorType::Rgb8 => "RGB",
            ColorType::Rgba8 => "RGBA",
            ColorType::L16 => "L16",
            ColorType::La16 => "LA16",
            ColorType::Rgb16 => "RGB16",
            ColorType::Rgba16 => "RGBA16",
            ColorType::Rgb32F => "RGB32F",
            ColorType::Rgba32F => "RGBA32F",
            _ => "unknown",
        }
    }

    /// 借用底层位图（对比组件按像素读取）。
    pub fn as_image(&self) -> &DynamicImage {
        &self.image
    }

    /// 取出底层位图所有权。
    pub fn into_image(self) -> DynamicImage {
        self.image
    }
}
