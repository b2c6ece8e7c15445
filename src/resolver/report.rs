//! # 槽位报告与解析结果
//!
//! ## 设计思路
//!
//! `resolve` 对调用方永不报错，但前端仍需要知道每个槽位“到底发生了什么”，
//! 才能像原始页面一样显示“✅ 成功加载 / ⚠️ 使用占位图”提示。
//! 因此把每个槽位的终态连同图片一起返回，由展示层决定如何渲染。

use serde::Serialize;

use super::source::{DecodedImage, Slot};

/// 槽位终态（三种结局之一：本地命中 / 上传命中 / 占位替换）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SlotStatus {
    /// 真实图片解码成功。
    Loaded {
        /// 来源标识：`local-file` 或 `upload`。
        origin: &'static str,
    },
    /// 真实图片不可得，已替换为占位图。
    Placeholder {
        /// 失败原因（人类可读，直接用于警告提示）。
        reason: String,
    },
}

impl SlotStatus {
    /// 该槽位是否以占位图收场。
    pub fn is_placeholder(&self) -> bool {
        matches!(self, SlotStatus::Placeholder { .. })
    }
}

/// 单个槽位的解析报告。
#[derive(Debug, Clone, Serialize)]
pub struct SlotReport {
    pub slot: Slot,
    #[serde(flatten)]
    pub status: SlotStatus,
}

/// 尺寸对齐记录。
///
/// 仅当两个槽位输入尺寸不一致、1990 图被重采样时存在，
/// 对应原始页面的“🔄 调整图片尺寸”提示。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResampleNote {
    /// 1990 图的输入尺寸。
    pub from: (u32, u32),
    /// 对齐后的目标尺寸（即 2020 图的尺寸）。
    pub to: (u32, u32),
}

/// 解析结果：保证两张非空、宽高一致的图片，外加槽位报告。
pub struct ResolvedPair {
    pub img_1990: DecodedImage,
    pub img_2020: DecodedImage,
    pub report_1990: SlotReport,
    pub report_2020: SlotReport,
    pub resample_note: Option<ResampleNote>,
}

impl ResolvedPair {
    /// 按固定槽位顺序借用两张图。
    pub fn images(&self) -> [&DecodedImage; 2] {
        [&self.img_1990, &self.img_2020]
    }

    /// 按固定槽位顺序借用两份报告。
    pub fn reports(&self) -> [&SlotReport; 2] {
        [&self.report_1990, &self.report_2020]
    }
}
