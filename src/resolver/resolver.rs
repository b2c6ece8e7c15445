//! # 核心编排模块
//!
//! ## 设计思路
//!
//! `ImagePairResolver` 只负责流程编排与配置持有，不与任何前端框架绑定。
//! 处理链路固定为：
//! 1. 按来源加载槽位原始字节
//! 2. 解码为位图
//! 3. 任一步失败则替换为该槽位的占位图（失败仅影响本槽位）
//! 4. 两槽位尺寸不一致时，把 1990 图重采样到 2020 图的尺寸
//!
//! ## 实现思路
//!
//! - 每个槽位独立走完整链路，终态只有三种：本地命中 / 上传命中 / 占位替换。
//! - `resolve` 对调用方永不报错；失败原因进入 `SlotReport` 供前端提示。
//! - 配置在构造时固定，单次解析内不会漂移；解析无共享可变状态，可重复调用。
//! - 记录各阶段耗时日志，便于性能诊断。

use std::time::Instant;

use super::report::{ResampleNote, ResolvedPair, SlotReport, SlotStatus};
use super::source::{DecodedImage, ImageSource, Slot};
use super::{ResolveError, ResolverConfig};

/// 图片对解析器。
///
/// 封装配置并编排各子模块，产出保证非空、宽高一致的对比图片对。
pub struct ImagePairResolver {
    pub(super) config: ResolverConfig,
}

impl Default for ImagePairResolver {
    fn default() -> Self {
        Self::new(ResolverConfig::default())
    }
}

impl ImagePairResolver {
    /// 根据配置创建解析器。
    ///
    /// # 示例
    /// ```rust,ignore
    /// use urban_change_viewer::resolver::{ImagePairResolver, ImageSource, ResolverConfig};
    ///
    /// let resolver = ImagePairResolver::new(ResolverConfig::default());
    /// let pair = resolver.resolve(&ImageSource::Local);
    /// assert_eq!(pair.img_1990.dimensions(), pair.img_2020.dimensions());
    /// ```
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    /// 当前生效配置（只读）。
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// 解析图片对。
    ///
    /// 永不报错：任何失败都在槽位级被吸收为占位图替换，
    /// 返回的两张图保证非空且宽高完全一致。
    pub fn resolve(&self, source: &ImageSource) -> ResolvedPair {
        let started = Instant::now();

        let (img_1990, report_1990) = self.resolve_slot(Slot::Y1990, source);
        let (img_2020, report_2020) = self.resolve_slot(Slot::Y2020, source);
        let load_elapsed = started.elapsed();

        // 尺寸对齐方向固定：永远把 1990 图对齐到 2020 图，不反向
        let (img_1990, resample_note) = self.reconcile_dimensions(img_1990, &img_2020);

        log::info!(
            "⏱️ 图片对解析完成 - 槽位: {:?} 尺寸: {}x{} 耗时: 加载解码 {:?} / 总计 {:?}",
            [report_1990.slot.label(), report_2020.slot.label()],
            img_2020.width(),
            img_2020.height(),
            load_elapsed,
            started.elapsed()
        );

        ResolvedPair {
            img_1990,
            img_2020,
            report_1990,
            report_2020,
            resample_note,
        }
    }

    /// 解析单个槽位：加载 → 解码，失败则占位。
    fn resolve_slot(&self, slot: Slot, source: &ImageSource) -> (DecodedImage, SlotReport) {
        let attempt = match source {
            ImageSource::Local => self
                .load_from_local(slot)
                .and_then(|raw| self.decode_slot_image(raw)),
            ImageSource::Uploaded { .. } => self
                .load_from_upload(slot, source.upload_buffer(slot))
                .and_then(|raw| self.decode_slot_image(raw)),
        };

        match attempt {
            Ok(image) => {
                log::info!("✅ 成功加载: {}年图片（{}）", slot.label(), source.hint());
                let report = SlotReport {
                    slot,
                    status: SlotStatus::Loaded {
                        origin: source.hint(),
                    },
                };
                (image, report)
            }
            Err(err) => {
                self.log_slot_failure(slot, &err);
                let report = SlotReport {
                    slot,
                    status: SlotStatus::Placeholder {
                        reason: err.to_string(),
                    },
                };
                (self.synthesize_placeholder(slot), report)
            }
        }
    }

    /// 来源缺失属预期状态，提示级日志即可；其余失败升为警告级。
    fn log_slot_failure(&self, slot: Slot, err: &ResolveError) {
        if err.is_source_missing() {
            log::info!("ℹ️ {}年图片不可用，使用占位图：{}", slot.label(), err);
        } else {
            log::warn!("⚠️ 无法加载 {}年图片，使用占位图：{}", slot.label(), err);
        }
    }

    /// 尺寸对齐：1990 图与 2020 图宽高不同时，重采样前者。
    fn reconcile_dimensions(
        &self,
        img_1990: DecodedImage,
        img_2020: &DecodedImage,
    ) -> (DecodedImage, Option<ResampleNote>) {
        let from = img_1990.dimensions();
        let to = img_2020.dimensions();

        if from == to {
            return (img_1990, None);
        }

        log::info!(
            "🔄 调整图片尺寸: {}x{} → {}x{}（filter={:?}）",
            from.0,
            from.1,
            to.0,
            to.1,
            self.config.resize_filter
        );

        let resized = self.resample_to(img_1990, to);
        (resized, Some(ResampleNote { from, to }))
    }
}
