//! # 加载与校验模块
//!
//! ## 设计思路
//!
//! 统一处理两种来源（本地固定文件 / 前端上传字节）的原始字节加载，
//! 并在“尽可能早”的阶段执行输入校验（存在性、体积、文件签名），
//! 尽快失败，减少不必要的内存与 CPU 消耗。
//!
//! ## 实现思路
//!
//! - 本地文件：存在性 + metadata 体积限制 + 读取 + 签名校验。
//! - 上传字节：缺省视为正常的“尚未上传”状态 + 体积限制 + 签名校验。
//! - Base64（Data URL 或纯字符串）：先按编码长度估算体积再解码，防止先膨胀后拒绝。
//! - 所有失败统一映射到 `ResolveError`，由编排层吸收为占位图。

use base64::{Engine as _, engine::general_purpose};

use super::source::{RawImageData, Slot};
use super::{ImagePairResolver, ResolveError};

impl ImagePairResolver {
    /// 从本地固定路径加载槽位原始字节。
    pub(super) fn load_from_local(&self, slot: Slot) -> Result<RawImageData, ResolveError> {
        let path = self.config.local_path(slot);
        log::info!("📁 开始读取本地图片 - 槽位: {} 路径: {}", slot.label(), path.display());

        if !path.exists() {
            return Err(ResolveError::SourceMissing(format!(
                "文件不存在：{}",
                path.display()
            )));
        }

        let metadata = std::fs::metadata(&path)
            .map_err(|e| ResolveError::FileSystem(format!("无法读取文件信息：{}", e)))?;

        if metadata.len() > self.config.max_file_size {
            return Err(ResolveError::ResourceLimit(format!(
                "文件过大：{:.2} MB（限制：{:.2} MB）",
                metadata.len() as f64 / 1024.0 / 1024.0,
                self.config.max_file_size as f64 / 1024.0 / 1024.0
            )));
        }

        let bytes = std::fs::read(&path)
            .map_err(|e| ResolveError::FileSystem(format!("无法读取图片文件：{}", e)))?;
        let format_label = Self::validate_image_signature(&bytes)?;

        Ok(RawImageData {
            bytes,
            source_hint: "local-file",
            format_label: Some(format_label),
        })
    }

    /// 从上传缓冲加载槽位原始字节。
    ///
    /// `None` 表示该槽位尚未上传，按“来源缺失”处理（正常状态，非错误）。
    pub(super) fn load_from_upload(
        &self,
        slot: Slot,
        buffer: Option<&[u8]>,
    ) -> Result<RawImageData, ResolveError> {
        let bytes = buffer.ok_or_else(|| {
            ResolveError::SourceMissing(format!("{}年图片尚未上传", slot.label()))
        })?;

        log::info!(
            "⬆️ 开始处理上传图片 - 槽位: {} 体积: {} 字节",
            slot.label(),
            bytes.len()
        );

        if bytes.len() as u64 > self.config.max_file_size {
            return Err(ResolveError::ResourceLimit(format!(
                "上传体积过大：{:.2} MB（限制：{:.2} MB）",
                bytes.len() as f64 / 1024.0 / 1024.0,
                self.config.max_file_size as f64 / 1024.0 / 1024.0
            )));
        }

        let format_label = Self::validate_image_signature(bytes)?;

        Ok(RawImageData {
            bytes: bytes.to_vec(),
            source_hint: "upload",
            format_label: Some(format_label),
        })
    }

    /// 解码前端以 Base64（支持 Data URL 前缀）传来的上传内容。
    ///
    /// 仅做传输解码，不做图片校验；返回的字节随后照常走
    /// `ImageSource::Uploaded` 的槽位解析链路。
    pub fn upload_from_base64(&self, data: &str) -> Result<Vec<u8>, ResolveError> {
        let payload = match data.split_once(',') {
            Some((head, rest)) if head.starts_with("data:") => rest,
            _ => data,
        };
        let payload = payload.trim();

        if payload.is_empty() {
            return Err(ResolveError::InvalidFormat("Base64 内容为空".to_string()));
        }

        // Base64 每 4 字符约产出 3 字节，解码前先按编码长度拒绝超限输入
        let estimated = (payload.len() as u64 / 4).saturating_mul(3);
        if estimated > self.config.max_file_size {
            return Err(ResolveError::ResourceLimit(format!(
                "Base64 预计解码体积过大：{:.2} MB（限制：{:.2} MB）",
                estimated as f64 / 1024.0 / 1024.0,
                self.config.max_file_size as f64 / 1024.0 / 1024.0
            )));
        }

        general_purpose::STANDARD
            .decode(payload)
            .map_err(|e| ResolveError::InvalidFormat(format!("Base64 解码失败：{}", e)))
    }

    /// 校验字节签名确为图片类型，并返回识别出的格式标签。
    pub(super) fn validate_image_signature(bytes: &[u8]) -> Result<&'static str, ResolveError> {
        if bytes.is_empty() {
            return Err(ResolveError::InvalidFormat("图片内容为空".to_string()));
        }

        let kind = infer::get(bytes)
            .ok_or_else(|| ResolveError::InvalidFormat("无法识别图片类型".to_string()))?;

        if kind.matcher_type() != infer::MatcherType::Image {
            return Err(ResolveError::InvalidFormat(format!(
                "文件签名不是图片类型：{}",
                kind.mime_type()
            )));
        }

        Ok(kind.extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::ResolverConfig;

    #[test]
    fn load_from_local_reports_missing_file_as_source_missing() {
        let mut config = ResolverConfig::default();
        config.base_dir = std::env::temp_dir().join("urban-change-viewer-missing-dir");
        let resolver = ImagePairResolver::new(config);

        let result = resolver.load_from_local(Slot::Y1990);

        assert!(matches!(result, Err(ResolveError::SourceMissing(_))));
    }

    #[test]
    fn load_from_upload_treats_absent_buffer_as_source_missing() {
        let resolver = ImagePairResolver::new(ResolverConfig::default());

        let result = resolver.load_from_upload(Slot::Y2020, None);

        assert!(matches!(result, Err(ResolveError::SourceMissing(_))));
    }

    #[test]
    fn load_from_upload_rejects_non_image_payload() {
        let resolver = ImagePairResolver::new(ResolverConfig::default());

        let result = resolver.load_from_upload(Slot::Y1990, Some(b"hello world"));

        assert!(matches!(result, Err(ResolveError::InvalidFormat(_))));
    }

    #[test]
    fn load_from_upload_rejects_oversized_buffer_before_decode() {
        let mut config = ResolverConfig::default();
        config.max_file_size = 16;
        let resolver = ImagePairResolver::new(config);

        let result = resolver.load_from_upload(Slot::Y1990, Some(&[0u8; 64]));

        assert!(matches!(result, Err(ResolveError::ResourceLimit(_))));
    }

    #[test]
    fn signature_probe_recognizes_png_header() {
        let png_signature = [137_u8, 80, 78, 71, 13, 10, 26, 10, 0, 0, 0, 13];

        let label = ImagePairResolver::validate_image_signature(&png_signature)
            .expect("signature probe failed");

        assert_eq!(label, "png");
    }

    #[test]
    fn upload_from_base64_strips_data_url_prefix() {
        let resolver = ImagePairResolver::new(ResolverConfig::default());

        let bytes = resolver
            .upload_from_base64("data:image/png;base64,iVBORw0KGgo=")
            .expect("base64 decode failed");

        assert_eq!(&bytes[..4], &[137, 80, 78, 71]);
    }

    #[test]
    fn upload_from_base64_rejects_oversized_payload_before_decode() {
        let mut config = ResolverConfig::default();
        config.max_file_size = 32;
        let resolver = ImagePairResolver::new(config);

        let huge = "A".repeat(1024);
        let result = resolver.upload_from_base64(&huge);

        assert!(matches!(result, Err(ResolveError::ResourceLimit(_))));
    }
}
