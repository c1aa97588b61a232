pub mod custom;
pub mod dispatch;
pub mod lookup;
pub mod overrides;
pub mod plugin_map;
pub mod valueless_map;

// Re-export main types
pub use custom::{load_from_json, CustomGroups};
pub use lookup::TailwindGroups;

use tailmerge_core::merge::merge_classes;
use tailmerge_core::types::ClassToken;

/// 使用内置 Tailwind 规则表合并类名
///
/// 两步：先展开 token（字符串 / 条件映射 / 嵌套列表），
/// 再按冲突组消解，后出现的类胜出。
///
/// # 示例
///
/// ```
/// use tailmerge_core::classes;
/// use tailmerge_tw_groups::tw_merge;
///
/// assert_eq!(tw_merge(&classes!["p-4", "p-8"]), "p-8");
/// assert_eq!(tw_merge(&classes!["p-4", "text-center"]), "p-4 text-center");
/// ```
pub fn tw_merge(tokens: &[ClassToken]) -> String {
    merge_classes(tokens, &TailwindGroups)
}
