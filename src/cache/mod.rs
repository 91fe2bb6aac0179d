//! 缓存层
//!
//! 通过插件注册表提供可切换的缓存后端（Moka 内存缓存 / Redis），
//! 用于缓存学习资料的嵌套读取表示。

pub mod object_cache;
pub mod register;
pub mod traits;

pub use traits::{CacheResult, ObjectCache};

/// 声明并注册一个缓存插件
///
/// 在进程启动时（ctor）把构造函数注册进插件注册表，
/// 运行时根据配置的 `cache.type` 查找并实例化。
#[macro_export]
macro_rules! declare_object_cache_plugin {
    ($name:literal, $plugin:ident) => {
        paste::paste! {
            #[ctor::ctor]
            fn [<__register_object_cache_ $plugin:snake>]() {
                $crate::cache::register::register_object_cache_plugin(
                    $name,
                    std::sync::Arc::new(|| {
                        Box::pin(async {
                            let cache = $plugin::new()
                                .map_err($crate::errors::StudyHubError::cache_connection)?;
                            Ok(Box::new(cache) as Box<dyn $crate::cache::ObjectCache>)
                        })
                            as $crate::cache::register::BoxedObjectCacheFuture
                    }),
                );
            }
        }
    };
}
