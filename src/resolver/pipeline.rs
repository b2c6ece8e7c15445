//! # 解码与变换流水线模块
//!
//! ## 设计思路
//!
//! 将“字节 → 位图”的过程集中管理，并在关键节点增加资源上限控制。
//! 优先做尺寸检查，再进行完整解码，降低恶意输入触发高内存开销的风险。
//! 占位图合成与尺寸对齐重采样也在此实现，供编排层组合。
//!
//! ## 实现思路
//!
//! 1. 猜测格式并读取 header 尺寸
//! 2. 按像素与内存上限快速拒绝
//! 3. 完整解码
//! 4. 需要时用 `fast_image_resize` 做高质量重采样，失败回退 `image::resize_exact`

use fast_image_resize as fr;
use image::{DynamicImage, GenericImageView, ImageBuffer, ImageFormat, ImageReader, Rgba};
use std::io::Cursor;

use super::source::{DecodedImage, RawImageData, Slot};
use super::{ImagePairResolver, ResolveError, ResolverConfig};

impl ImagePairResolver {
    /// 将原始字节解码为槽位位图。
    pub(super) fn decode_slot_image(&self, raw: RawImageData) -> Result<DecodedImage, ResolveError> {
        let _format: ImageFormat = image::guess_format(&raw.bytes)
            .map_err(|e| ResolveError::InvalidFormat(format!("不支持的图片格式：{}", e)))?;

        let (header_width, header_height) = Self::inspect_dimensions_from_memory(&raw.bytes)?;
        self.validate_pixel_limits(header_width, header_height)?;
        self.validate_decoded_memory_limits(header_width, header_height)?;

        let decoded = image::load_from_memory(&raw.bytes)
            .map_err(|e| ResolveError::Decode(format!("图片解码失败：{}", e)))?;

        let (width, height) = decoded.dimensions();
        self.validate_pixel_limits(width, height)?;
        self.validate_decoded_memory_limits(width, height)?;

        if width == 0 || height == 0 {
            return Err(ResolveError::Decode("解码结果尺寸为零".to_string()));
        }

        log::info!(
            "✅ 图片解码成功 - 来源: {} 尺寸: {}x{} 格式: {}",
            raw.source_hint,
            width,
            height,
            raw.format_label.unwrap_or("unknown")
        );

        Ok(DecodedImage {
            image: decoded,
            format_label: raw.format_label,
        })
    }

    /// 合成槽位占位图（固定尺寸、槽位专属纯色）。
    ///
    /// 这是所有失败路径的终点，保证下游永远拿到有效位图。
    pub(super) fn synthesize_placeholder(&self, slot: Slot) -> DecodedImage {
        let color = ResolverConfig::placeholder_color(slot);
        let buffer = ImageBuffer::from_pixel(
            self.config.placeholder_width,
            self.config.placeholder_height,
            color,
        );

        DecodedImage {
            image: DynamicImage::ImageRgb8(buffer),
            format_label: None,
        }
    }

    /// 将位图重采样到指定尺寸。
    ///
    /// 优先走 `fast_image_resize`，失败时回退 `image::resize_exact`，
    /// 因此对调用方而言不会失败。
    pub(super) fn resample_to(&self, image: DecodedImage, target: (u32, u32)) -> DecodedImage {
        let (target_width, target_height) = target;
        let format_label = image.format_label;

        let resized = match Self::resize_with_fast_image_resize(
            &image.image,
            target_width,
            target_height,
            self.config.resize_filter,
        ) {
            Ok(resized) => resized,
            Err(err) => {
                log::warn!("⚠️ fast_image_resize 重采样失败，回退 image::resize_exact：{}", err);
                image
                    .image
                    .resize_exact(target_width, target_height, self.config.resize_filter)
            }
        };

        DecodedImage {
            image: resized,
            format_label,
        }
    }

    /// 仅通过内存中的图片头信息读取宽高。
    ///
    /// 用于在完整解码前做像素限制检查。
    fn inspect_dimensions_from_memory(bytes: &[u8]) -> Result<(u32, u32), ResolveError> {
        let cursor = Cursor::new(bytes);
        let reader = ImageReader::new(cursor)
            .with_guessed_format()
            .map_err(|e| ResolveError::InvalidFormat(format!("无法识别图片格式：{}", e)))?;

        reader
            .into_dimensions()
            .map_err(|e| ResolveError::InvalidFormat(format!("无法读取图片尺寸：{}", e)))
    }

    /// 校验像素数量是否超过配置上限。
    fn validate_pixel_limits(&self, width: u32, height: u32) -> Result<(), ResolveError> {
        let pixels = (width as u64)
            .checked_mul(height as u64)
            .ok_or_else(|| ResolveError::ResourceLimit("图片像素数溢出".to_string()))?;

        if pixels > self.config.max_decoded_pixels {
            return Err(ResolveError::ResourceLimit(format!(
                "图片像素过大：{} 像素（限制：{} 像素）",
                pixels, self.config.max_decoded_pixels
            )));
        }

        Ok(())
    }

    fn validate_decoded_memory_limits(&self, width: u32, height: u32) -> Result<(), ResolveError> {
        let estimated = (width as u64)
            .checked_mul(height as u64)
            .and_then(|pixels| pixels.checked_mul(4))
            .ok_or_else(|| ResolveError::ResourceLimit("图片解码内存估算溢出".to_string()))?;

        if estimated > self.config.max_decoded_bytes {
            return Err(ResolveError::ResourceLimit(format!(
                "图片解码预计内存过大：{:.2} MB（限制：{:.2} MB）",
                estimated as f64 / 1024.0 / 1024.0,
                self.config.max_decoded_bytes as f64 / 1024.0 / 1024.0
            )));
        }

        Ok(())
    }

    fn resize_with_fast_image_resize(
        image: &DynamicImage,
        target_width: u32,
        target_height: u32,
        filter: image::imageops::FilterType,
    ) -> Result<DynamicImage, ResolveError> {
        let src = image.to_rgba8();
        let (src_width, src_height) = src.dimensions();

        let src_image = fr::images::Image::from_vec_u8(
            src_width,
            src_height,
            src.into_raw(),
            fr::PixelType::U8x4,
        )
        .map_err(|e| ResolveError::Decode(format!("构建源图像缓冲失败：{}", e)))?;

        let mut dst_image = fr::images::Image::new(target_width, target_height, fr::PixelType::U8x4);

        let mut resizer = fr::Resizer::new();
        let options = fr::ResizeOptions::new().resize_alg(fr::ResizeAlg::Convolution(
            Self::to_fast_filter(filter),
        ));

        resizer
            .resize(&src_image, &mut dst_image, Some(&options))
            .map_err(|e| ResolveError::Decode(format!("fast_image_resize 执行失败：{}", e)))?;

        let rgba = ImageBuffer::<Rgba<u8>, Vec<u8>>::from_raw(
            target_width,
            target_height,
            dst_image.into_vec(),
        )
        .ok_or_else(|| ResolveError::Decode("fast_image_resize 输出缓冲长度异常".to_string()))?;

        Ok(DynamicImage::ImageRgba8(rgba))
    }

    fn to_fast_filter(filter: image::imageops::FilterType) -> fr::FilterType {
        match filter {
            image::imageops::FilterType::Nearest => fr::FilterType::Box,
            image::imageops::FilterType::Triangle => fr::FilterType::Bilinear,
            image::imageops::FilterType::CatmullRom => fr::FilterType::CatmullRom,
            image::imageops::FilterType::Gaussian => fr::FilterType::Mitchell,
            image::imageops::FilterType::Lanczos3 => fr::FilterType::Lanczos3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> ImagePairResolver {
        ImagePairResolver::new(ResolverConfig::default())
    }

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let buffer = ImageBuffer::from_pixel(width, height, image::Rgb([10u8, 20, 30]));
        let mut bytes = Vec::new();
        DynamicImage::ImageRgb8(buffer)
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .expect("png encode failed");
        bytes
    }

    #[test]
    fn decode_slot_image_accepts_valid_png() {
        let raw = RawImageData {
            bytes: png_bytes(32, 16),
            source_hint: "upload",
            format_label: Some("png"),
        };

        let decoded = resolver().decode_slot_image(raw).expect("decode failed");

        assert_eq!(decoded.dimensions(), (32, 16));
        assert_eq!(decoded.format_label(), Some("png"));
    }

    #[test]
    fn decode_slot_image_rejects_garbage_bytes() {
        let raw = RawImageData {
            bytes: b"definitely not an image".to_vec(),
            source_hint: "upload",
            format_label: None,
        };

        let result = resolver().decode_slot_image(raw);

        assert!(matches!(result, Err(ResolveError::InvalidFormat(_))));
    }

    #[test]
    fn decode_slot_image_rejects_images_over_pixel_limit() {
        let mut config = ResolverConfig::default();
        config.max_decoded_pixels = 64;
        let resolver = ImagePairResolver::new(config);

        let raw = RawImageData {
            bytes: png_bytes(32, 32),
            source_hint: "upload",
            format_label: Some("png"),
        };

        let result = resolver.decode_slot_image(raw);

        assert!(matches!(result, Err(ResolveError::ResourceLimit(_))));
    }

    #[test]
    fn placeholder_has_configured_geometry_and_slot_color() {
        let placeholder = resolver().synthesize_placeholder(Slot::Y1990);

        assert_eq!(placeholder.dimensions(), (800, 600));
        assert_eq!(placeholder.format_label(), None);

        let rgb = placeholder.as_image().to_rgb8();
        assert_eq!(
            *rgb.get_pixel(0, 0),
            ResolverConfig::placeholder_color(Slot::Y1990)
        );
    }

    #[test]
    fn resample_produces_exact_target_dimensions() {
        let raw = RawImageData {
            bytes: png_bytes(64, 48),
            source_hint: "upload",
            format_label: Some("png"),
        };
        let resolver = resolver();
        let decoded = resolver.decode_slot_image(raw).expect("decode failed");

        let resized = resolver.resample_to(decoded, (100, 40));

        assert_eq!(resized.dimensions(), (100, 40));
        assert_eq!(resized.format_label(), Some("png"));
    }
}
