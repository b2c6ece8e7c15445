//! # 城市变迁可视化 — 库入口
//!
//! ## 架构总览
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │              前端（滑块对比组件 / 地图 / 信息面板）       │
//! │                                                          │
//! │   来源选择（本地文件 / 上传）──→ 消费 PageModel JSON      │
//! └───────┬──────────────────────────────────────────────────┘
//!         ↕ 序列化边界 (serde_json, Result<T, AppError>)
//! ┌───────┼──────────────────────────────────────────────────┐
//! │       ↕              后端核心 (Rust)                      │
//! │                                                          │
//! │  ┌─ error ──────── AppError（统一错误类型）               │
//! │  │                                                       │
//! │  ├─ resolver ───── 图片对解析                            │
//! │  │   ├─ loader        本地/上传加载 + 签名校验            │
//! │  │   ├─ pipeline      解码·占位合成·尺寸对齐              │
//! │  │   └─ report        槽位终态（✅ 加载 / ⚠️ 占位）       │
//! │  │                                                       │
//! │  ├─ workspace ──── 工作目录图片清单                       │
//! │  └─ presentation ─ 静态城市数据 + 页面模型装配            │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 模块职责
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`error`] | 统一错误类型 `AppError`，解析之外所有可失败操作的返回类型 |
//! | [`resolver`] | 把用户选择的来源解析为两张非空、宽高一致的对比图片 |
//! | [`workspace`] | 列举工作目录中的图片文件（侧边栏清单） |
//! | [`presentation`] | 地图注记、时间线、统计卡片等静态数据与整页模型装配 |
//!
//! ## 核心约束
//!
//! - `resolver::ImagePairResolver::resolve` 永不报错：任何槽位失败都降级为
//!   该槽位的占位图，失败原因进入槽位报告。
//! - 解析结果的两张图宽高必然一致；不一致时 1990 图被重采样到 2020 图的尺寸
//!   （方向固定，不反向）。
//! - 整个核心单线程同步执行，一次页面渲染对应一次解析，无跨请求状态。

pub mod error;
pub mod presentation;
pub mod resolver;
pub mod workspace;
