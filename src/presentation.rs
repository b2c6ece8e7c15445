//! # 页面数据装配模块
//!
//! ## 设计思路
//!
//! 地图标注、时间线、统计卡片都是页面上的硬编码内容，本身没有状态与不变量。
//! 本模块把这些静态数据连同解析结果派生的图片信息装配为一个可序列化的
//! `PageModel`，前端（滑块组件 / 地图组件 / 信息面板）只消费这一份数据。
//!
//! ## 实现思路
//!
//! - 静态表使用 `once_cell::sync::Lazy` 构建一次。
//! - 图片信息面板从 `ResolvedPair` 逐槽位派生，不反向依赖前端。
//! - 序列化统一走 `serde`，前端拿到的就是最终 JSON。

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::resolver::{
    DecodedImage, ResampleNote, ResolvedPair, Slot, SlotReport, UPLOAD_ALLOWED_TYPES,
};

/// 城市基础信息。
#[derive(Debug, Clone, Serialize)]
pub struct CityProfile {
    pub name: &'static str,
    pub region: &'static str,
    /// 市中心纬度。
    pub latitude: f64,
    /// 市中心经度。
    pub longitude: f64,
    pub area_km2: u32,
    pub population_2020: &'static str,
}

/// 地图标注点（行政区标记）。
#[derive(Debug, Clone, Serialize)]
pub struct MapMarker {
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

/// 地图注记集合：中心标记、城区范围圆、行政区标记。
#[derive(Debug, Clone, Serialize)]
pub struct MapAnnotations {
    pub center: MapMarker,
    /// 城区范围圆半径（米）。
    pub city_radius_m: u32,
    pub districts: &'static [MapMarker],
}

/// 发展时间线条目。
#[derive(Debug, Clone, Serialize)]
pub struct TimelineEntry {
    pub year: &'static str,
    pub event: &'static str,
}

/// 统计卡片（标题 + 若干条目）。
#[derive(Debug, Clone, Serialize)]
pub struct StatCard {
    pub title: &'static str,
    pub lines: &'static [&'static str],
}

/// 城市画像（页面右侧信息面板的数据源）。
pub static CITY_PROFILE: Lazy<CityProfile> = Lazy::new(|| CityProfile {
    name: "深圳市",
    region: "中国广东省",
    latitude: 22.5431,
    longitude: 114.0579,
    area_km2: 1_997,
    population_2020: "约1,756万",
});

static DISTRICT_MARKERS: [MapMarker; 4] = [
    MapMarker { name: "福田区", latitude: 22.5410, longitude: 114.0596 },
    MapMarker { name: "南山区", latitude: 22.5319, longitude: 113.9305 },
    MapMarker { name: "罗湖区", latitude: 22.5483, longitude: 114.1120 },
    MapMarker { name: "宝安区", latitude: 22.5550, longitude: 113.8840 },
];

/// 地图注记（静态）。
pub static MAP_ANNOTATIONS: Lazy<MapAnnotations> = Lazy::new(|| MapAnnotations {
    center: MapMarker {
        name: "深圳市",
        latitude: CITY_PROFILE.latitude,
        longitude: CITY_PROFILE.longitude,
    },
    city_radius_m: 10_000,
    districts: &DISTRICT_MARKERS,
});

/// 发展时间线（静态）。
pub static TIMELINE: Lazy<Vec<TimelineEntry>> = Lazy::new(|| {
    vec![
        TimelineEntry { year: "1979年", event: "设立深圳经济特区" },
        TimelineEntry { year: "1990年", event: "特区建立10周年，快速发展期" },
        TimelineEntry { year: "2000年", event: "高新技术产业崛起" },
        TimelineEntry { year: "2010年", event: "成为国际化大都市" },
        TimelineEntry { year: "2020年", event: "粤港澳大湾区核心城市" },
    ]
});

/// 统计卡片（静态）。
pub static STAT_CARDS: Lazy<Vec<StatCard>> = Lazy::new(|| {
    vec![
        StatCard {
            title: "🏗️ 城市建设",
            lines: &[
                "1990年建筑面积: 约200 km²",
                "2020年建筑面积: 约900 km²",
                "增长率: 350%",
            ],
        },
        StatCard {
            title: "🌳 绿地变化",
            lines: &[
                "1990年绿地覆盖率: 约45%",
                "2020年绿地覆盖率: 约40%",
                "公园数量: 从50个增加到1200+",
            ],
        },
        StatCard {
            title: "🏢 经济发展",
            lines: &[
                "GDP增长: 从1990年的170亿元",
                "到2020年的2.76万亿元",
                "增长约 160倍",
            ],
        },
    ]
});

/// 单槽位图片信息（信息面板“尺寸/格式/模式”三行）。
#[derive(Debug, Clone, Serialize)]
pub struct ImageInfo {
    pub slot: Slot,
    pub width: u32,
    pub height: u32,
    pub format: Option<&'static str>,
    pub color_mode: &'static str,
}

impl ImageInfo {
    fn from_decoded(slot: Slot, image: &DecodedImage) -> Self {
        Self {
            slot,
            width: image.width(),
            height: image.height(),
            format: image.format_label(),
            color_mode: image.color_mode(),
        }
    }
}

/// 对比视图数据：槽位报告、图片信息、尺寸对齐记录。
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonView {
    pub reports: Vec<SlotReport>,
    pub images: Vec<ImageInfo>,
    pub resample_note: Option<ResampleNote>,
}

/// 整页数据模型，序列化后交给前端渲染。
#[derive(Debug, Clone, Serialize)]
pub struct PageModel {
    pub title: &'static str,
    pub city: CityProfile,
    pub comparison: ComparisonView,
    pub map: MapAnnotations,
    pub timeline: Vec<TimelineEntry>,
    pub stats: Vec<StatCard>,
    pub upload_allowed_types: Vec<&'static str>,
}

/// 从解析结果装配整页数据。
pub fn build_page_model(pair: &ResolvedPair) -> PageModel {
    let comparison = ComparisonView {
        reports: pair.reports().into_iter().cloned().collect(),
        images: vec![
            ImageInfo::from_decoded(Slot::Y1990, &pair.img_1990),
            ImageInfo::from_decoded(Slot::Y2020, &pair.img_2020),
        ],
        resample_note: pair.resample_note,
    };

    PageModel {
        title: "🏙️ 深圳城市变迁可视化",
        city: CITY_PROFILE.clone(),
        comparison,
        map: MAP_ANNOTATIONS.clone(),
        timeline: TIMELINE.clone(),
        stats: STAT_CARDS.clone(),
        upload_allowed_types: UPLOAD_ALLOWED_TYPES.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::{ImagePairResolver, ImageSource, ResolverConfig};

    #[test]
    fn timeline_is_chronological() {
        let years: Vec<&str> = TIMELINE.iter().map(|e| e.year).collect();
        let mut sorted = years.clone();
        sorted.sort();

        assert_eq!(years, sorted);
    }

    #[test]
    fn page_model_carries_both_slots() {
        let resolver = ImagePairResolver::new(ResolverConfig {
            base_dir: std::env::temp_dir().join("urban-change-viewer-empty"),
            ..ResolverConfig::default()
        });
        let pair = resolver.resolve(&ImageSource::Local);

        let page = build_page_model(&pair);

        assert_eq!(page.comparison.images.len(), 2);
        assert_eq!(page.comparison.reports.len(), 2);
        assert_eq!(page.comparison.images[0].slot, Slot::Y1990);
        assert_eq!(page.comparison.images[1].slot, Slot::Y2020);
    }

    #[test]
    fn page_model_serializes_to_json() {
        let resolver = ImagePairResolver::new(ResolverConfig {
            base_dir: std::env::temp_dir().join("urban-change-viewer-empty"),
            ..ResolverConfig::default()
        });
        let pair = resolver.resolve(&ImageSource::Local);
        let page = build_page_model(&pair);

        let json = serde_json::to_value(&page).expect("serialize failed");

        assert_eq!(json["city"]["name"], "深圳市");
        assert_eq!(json["map"]["districts"].as_array().map(|d| d.len()), Some(4));
        assert_eq!(json["comparison"]["images"][0]["slot"], "1990");
    }
}
