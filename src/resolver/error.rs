//! # 错误模型模块
//!
//! ## 设计思路
//!
//! 使用单一错误枚举承载图片解析链路中的所有错误来源，避免字符串拼接式错误处理。
//! 通过 `thiserror` 保持人类可读错误，同时让调用侧可按分支匹配。
//!
//! 注意：该错误永远不会越过 `resolve` 传播到调用方 —— 所有失败都在槽位级
//! 被吸收为占位图替换，错误文本仅进入槽位报告与日志。

/// 图片解析统一错误类型（槽位级，永不致命）。
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// 本地文件不存在，或上传模式下该槽位尚未提供字节。
    #[error("来源缺失：{0}")]
    SourceMissing(String),

    /// 文件系统读取失败。
    #[error("文件错误：{0}")]
    FileSystem(String),

    /// 字节存在但不是可解码的图片。
    #[error("解码错误：{0}")]
    Decode(String),

    /// 文件签名或编码格式不符合预期。
    #[error("格式错误：{0}")]
    InvalidFormat(String),

    /// 超出体积 / 像素 / 内存上限。
    #[error("资源限制：{0}")]
    ResourceLimit(String),
}

impl ResolveError {
    /// 是否属于“来源缺失”类失败。
    ///
    /// 缺失是预期状态（例如尚未上传），只需提示级消息；
    /// 其余失败说明字节存在但坏掉了，应以警告级消息呈现。
    pub fn is_source_missing(&self) -> bool {
        matches!(self, ResolveError::SourceMissing(_))
    }
}

impl From<ResolveError> for String {
    /// 兼容部分仍使用字符串错误的调用点。
    fn from(error: ResolveError) -> Self {
        error.to_string()
    }
}
