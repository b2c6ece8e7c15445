//! 统一错误类型模块
//!
//! # 设计思路
//!
//! 定义全局统一的 `AppError` 枚举，替代各模块中分散的
//! `.map_err(|e| e.to_string())`、`format!(...)`、`expect()` 等不一致模式。
//!
//! 注意：图片解析链路的失败不会以错误形式离开 `resolve`（全部降级为占位图），
//! `AppError` 覆盖的是解析之外的辅助操作（目录列举、序列化、Base64 上传解码）。
//!
//! # 实现思路
//!
//! - 使用 `thiserror` 派生可读错误消息。
//! - 为 `ResolveError` 提供 `From` 转换，无需手动 map。
//! - 实现 `Serialize` 将错误序列化为字符串，便于 IPC 类前端直接消费。

use serde::Serialize;

use crate::resolver::ResolveError;

/// 应用级统一错误类型。
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 图片解析辅助操作错误（如上传 Base64 解码）。
    #[error("{0}")]
    Resolve(#[from] ResolveError),

    /// 文件系统 I/O 错误。
    #[error("文件系统错误: {0}")]
    Io(#[from] std::io::Error),

    /// 工作目录不可读。
    #[error("工作目录错误: {0}")]
    Workspace(String),

    /// 页面数据序列化失败。
    #[error("序列化错误: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// 将错误序列化为人类可读的字符串，供前端直接展示。
impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
