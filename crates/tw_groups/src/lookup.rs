use tailmerge_core::merge::ConflictLookup;
use tailmerge_tw_parse::ClassShape;

use crate::dispatch::dispatch_group;
use crate::overrides;
use crate::plugin_map;
use crate::valueless_map;

/// 内置 Tailwind 冲突组表
///
/// 规则数据全部是编译期静态表，实例本身无状态。
pub struct TailwindGroups;

impl ConflictLookup for TailwindGroups {
    fn group_of(&self, shape: &ClassShape) -> Option<String> {
        // 任意属性类按属性名独立成组：
        // [display:block] 只与同属性的任意属性类冲突
        if let Some((prop, _value)) = shape.arbitrary_property() {
            return Some(format!("@{}", prop));
        }

        // 1. 全名查找（无值工具与枚举值工具）
        if let Some(group) = valueless_map::lookup(&shape.core) {
            return Some(group.to_string());
        }

        // 2. 按深度 0 的 `-` 切分，最长插件名优先
        for (base, value) in shape.split_candidates() {
            if let Some(group) = dispatch_group(base, value) {
                return Some(group.to_string());
            }
            if let Some(group) = plugin_map::lookup(base) {
                return Some(group.to_string());
            }
        }

        None
    }

    fn conflicts_of(&self, group: &str) -> Vec<String> {
        overrides::conflicts_of(group)
            .iter()
            .map(|s| s.to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tailmerge_tw_parse::parse_class;

    fn group_of(class: &str) -> Option<String> {
        let shape = parse_class(class).unwrap();
        TailwindGroups.group_of(&shape)
    }

    #[test]
    fn test_valueless_lookup() {
        assert_eq!(group_of("flex").as_deref(), Some("display"));
        assert_eq!(group_of("text-center").as_deref(), Some("text-align"));
    }

    #[test]
    fn test_plugin_lookup() {
        assert_eq!(group_of("p-4").as_deref(), Some("p"));
        assert_eq!(group_of("grid-cols-3").as_deref(), Some("grid-cols"));
        assert_eq!(group_of("min-w-full").as_deref(), Some("min-w"));
    }

    #[test]
    fn test_longest_plugin_wins() {
        // grid-cols-3 切为 grid-cols + 3，而不是 grid + cols-3
        assert_eq!(group_of("grid-cols-3").as_deref(), Some("grid-cols"));
        assert_eq!(group_of("justify-items-center").as_deref(), Some("justify-items"));
        assert_eq!(group_of("justify-center").as_deref(), Some("justify-content"));
    }

    #[test]
    fn test_dispatch_lookup() {
        assert_eq!(group_of("text-red-500").as_deref(), Some("text-color"));
        assert_eq!(group_of("text-[14px]").as_deref(), Some("font-size"));
        assert_eq!(group_of("bg-blue-500").as_deref(), Some("bg-color"));
        assert_eq!(group_of("border-2").as_deref(), Some("border-w"));
        assert_eq!(group_of("border-red-500").as_deref(), Some("border-color"));
    }

    #[test]
    fn test_alpha_ignored_for_grouping() {
        assert_eq!(group_of("bg-blue-500/50").as_deref(), Some("bg-color"));
        assert_eq!(group_of("w-1/2").as_deref(), Some("w"));
    }

    #[test]
    fn test_negative_shares_group() {
        assert_eq!(group_of("-m-4").as_deref(), Some("m"));
        assert_eq!(group_of("m-4").as_deref(), Some("m"));
    }

    #[test]
    fn test_arbitrary_value_shares_group() {
        assert_eq!(group_of("w-[13px]").as_deref(), Some("w"));
        assert_eq!(group_of("w-4").as_deref(), Some("w"));
    }

    #[test]
    fn test_arbitrary_property_group() {
        assert_eq!(group_of("[display:block]").as_deref(), Some("@display"));
        assert_eq!(group_of("[color:red]").as_deref(), Some("@color"));
    }

    #[test]
    fn test_unknown_class() {
        assert_eq!(group_of("btn-primary"), None);
        assert_eq!(group_of("foo"), None);
    }

    #[test]
    fn test_conflicts_delegation() {
        let conflicts = TailwindGroups.conflicts_of("p");
        assert!(conflicts.contains(&"px".to_string()));
        assert!(TailwindGroups.conflicts_of("display").is_empty());
    }
}
