//! 解析器“永不崩溃”属性测试。
//!
//! 对任意（包括完全随机的）上传字节组合，`resolve` 必须正常返回，
//! 且两个槽位始终持有宽高一致、非零尺寸的图片。

use proptest::prelude::*;
use urban_change_viewer::resolver::{ImagePairResolver, ImageSource, ResolverConfig};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn resolve_never_panics_and_dimensions_always_match(
        buf_1990 in proptest::option::of(proptest::collection::vec(any::<u8>(), 0..512)),
        buf_2020 in proptest::option::of(proptest::collection::vec(any::<u8>(), 0..512)),
    ) {
        let resolver = ImagePairResolver::new(ResolverConfig::default());
        let source = ImageSource::Uploaded { buf_1990, buf_2020 };

        let pair = resolver.resolve(&source);

        prop_assert_eq!(pair.img_1990.dimensions(), pair.img_2020.dimensions());
        prop_assert!(pair.img_1990.width() > 0);
        prop_assert!(pair.img_1990.height() > 0);
    }
}
