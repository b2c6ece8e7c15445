//! # 城市变迁可视化 — 应用入口
//!
//! 本文件仅负责日志初始化与一次完整的页面数据装配。
//! 业务逻辑分布在各子模块中，详见 `lib.rs` 架构文档。

use urban_change_viewer::presentation;
use urban_change_viewer::resolver::{ImagePairResolver, ImageSource, ResolverConfig};
use urban_change_viewer::workspace;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ResolverConfig::default();

    // 侧边栏：工作目录图片清单（失败只提示，不影响解析）
    match workspace::list_image_files(&config.base_dir) {
        Ok(listing) => {
            for name in &listing.image_files {
                log::info!("- {}", name);
            }
        }
        Err(err) => log::warn!("读取目录错误: {}", err),
    }

    // 一次页面渲染 = 一次解析（本地模式）
    let resolver = ImagePairResolver::new(config);
    let pair = resolver.resolve(&ImageSource::Local);
    let page = presentation::build_page_model(&pair);

    match serde_json::to_string_pretty(&page) {
        Ok(json) => println!("{}", json),
        Err(err) => log::error!("页面数据序列化失败: {}", err),
    }
}
