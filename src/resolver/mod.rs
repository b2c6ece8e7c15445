//! # 图片对解析模块（resolver）
//!
//! ## 设计思路
//!
//! 该模块将“来源选择 → 加载校验 → 解码 → 占位替换 → 尺寸对齐”
//! 按职责拆分为多个子模块，避免单文件膨胀与耦合。
//!
//! - `resolver`：编排整条解析链路
//! - `loader`：负责本地文件 / 上传字节加载与安全校验
//! - `pipeline`：负责解码、资源上限、占位合成、重采样
//! - `config/error/source/report`：配置、错误、数据模型、槽位报告
//!
//! ## 实现思路
//!
//! 对外仅暴露必要类型，内部细节保持 `mod` 私有。
//! 解析器无共享可变状态，单线程同步执行，一次页面渲染调用一次。
//!
//! ## 新同事快速上手
//!
//! 调用链：
//!
//! ```text
//! 前端选择来源
//!    ↓
//! resolver.rs（resolve：逐槽位编排 + 尺寸对齐 + 耗时日志）
//!    ├─ loader.rs（本地/上传加载 + 体积/签名校验）
//!    ├─ pipeline.rs（解码 + 像素限制 + 占位合成 + 重采样）
//!    └─ report.rs（槽位终态，供前端显示 ✅/⚠️ 提示）
//!    ↓
//! ResolvedPair（两张非空、宽高一致的图 + 槽位报告）
//! ```

mod config;
mod error;
mod loader;
mod pipeline;
mod report;
#[allow(clippy::module_inception)]
mod resolver;
mod source;

pub use config::{LISTING_EXTENSIONS, ResolverConfig, UPLOAD_ALLOWED_TYPES};
pub use error::ResolveError;
pub use report::{ResampleNote, ResolvedPair, SlotReport, SlotStatus};
pub use resolver::ImagePairResolver;
pub use source::{DecodedImage, ImageSource, Slot};
