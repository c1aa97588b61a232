use std::collections::HashSet;

use crate::flatten::flatten_tokens;
use crate::types::ClassToken;
use tailmerge_tw_parse::{parse_class, ClassShape};

/// 冲突组查询接口
///
/// 使用 trait 而不是具体类型：规则表体量大且依框架版本变化，
/// 由调用方注入（内置表见 tw_groups crate）。
pub trait ConflictLookup {
    /// 返回 class 所属的冲突组；None 表示未知类（按字面保留）
    fn group_of(&self, shape: &ClassShape) -> Option<String>;

    /// 返回该组同时覆盖的其他组（如 "p" 覆盖 "px"/"py"/…）
    fn conflicts_of(&self, _group: &str) -> Vec<String> {
        Vec::new()
    }
}

/// 两步合并：先展开 token，再按冲突组消解
///
/// 输出为单个空格分隔的字符串，无首尾空格；空输入得空串。
/// 按约定本函数不失败：解析不了的类按字面保留并去重。
pub fn merge_classes<L: ConflictLookup>(tokens: &[ClassToken], lookup: &L) -> String {
    resolve_conflicts(flatten_tokens(tokens), lookup)
}

/// 冲突消解
///
/// 从右往左扫描：后出现的类优先，其所在组与其覆盖的组
/// 记入已见集合，更早出现的同组类被丢弃。
/// 非冲突类保持相对顺序；冲突胜出者停留在较晚的位置。
pub fn resolve_conflicts<L: ConflictLookup>(classes: Vec<String>, lookup: &L) -> String {
    let mut seen: HashSet<String> = HashSet::new();
    let mut kept: Vec<String> = Vec::with_capacity(classes.len());

    for class in classes.into_iter().rev() {
        let mut resolved = None;
        if let Ok(shape) = parse_class(&class) {
            if let Some(group) = lookup.group_of(&shape) {
                resolved = Some((conflict_prefix(&shape), group));
            }
        }

        match resolved {
            Some((prefix, group)) => {
                if !seen.insert(format!("{}{}", prefix, group)) {
                    continue;
                }
                for other in lookup.conflicts_of(&group) {
                    seen.insert(format!("{}{}", prefix, other));
                }
                kept.push(class);
            }
            None => {
                // 未知类：仅做字面去重
                if seen.insert(format!("={}", class)) {
                    kept.push(class);
                }
            }
        }
    }

    kept.reverse();
    kept.join(" ")
}

/// 冲突 key 前缀：排序后的修饰符 + 重要性标记
///
/// 修饰符排序使 `hover:focus:p-4` 与 `focus:hover:p-4` 互相冲突；
/// 重要性标记分割 key 空间，`p-4!` 不与 `p-4` 冲突。
fn conflict_prefix(shape: &ClassShape) -> String {
    let mut mods: Vec<&str> = shape.modifiers.iter().map(String::as_str).collect();
    mods.sort_unstable();

    let mut prefix = String::new();
    for m in &mods {
        prefix.push_str(m);
        prefix.push(':');
    }
    if shape.important {
        prefix.push('!');
    }
    prefix
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classes;

    // 测试用的最小规则表
    struct SimpleGroups;

    impl ConflictLookup for SimpleGroups {
        fn group_of(&self, shape: &ClassShape) -> Option<String> {
            for (base, _value) in shape.split_candidates() {
                if matches!(base, "p" | "px" | "py" | "m" | "w" | "bg") {
                    return Some(base.to_string());
                }
            }
            None
        }

        fn conflicts_of(&self, group: &str) -> Vec<String> {
            match group {
                "p" => vec!["px".to_string(), "py".to_string()],
                _ => Vec::new(),
            }
        }
    }

    fn merge(tokens: &[ClassToken]) -> String {
        merge_classes(tokens, &SimpleGroups)
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(merge(&[]), "");
    }

    #[test]
    fn test_non_conflicting_preserved_in_order() {
        assert_eq!(merge(&classes!["p-4", "text-center"]), "p-4 text-center");
    }

    #[test]
    fn test_later_conflicting_wins() {
        assert_eq!(merge(&classes!["p-4", "p-8"]), "p-8");
    }

    #[test]
    fn test_survivor_keeps_later_position() {
        assert_eq!(merge(&classes!["p-4", "foo", "p-8"]), "foo p-8");
    }

    #[test]
    fn test_cross_group_override() {
        // p 覆盖 px/py
        assert_eq!(merge(&classes!["px-2", "py-3", "p-4"]), "p-4");
        // 反向不成立
        assert_eq!(merge(&classes!["p-4", "px-2"]), "p-4 px-2");
    }

    #[test]
    fn test_modifier_scoping() {
        assert_eq!(merge(&classes!["hover:p-4", "p-8"]), "hover:p-4 p-8");
        assert_eq!(merge(&classes!["hover:p-4", "hover:p-8"]), "hover:p-8");
    }

    #[test]
    fn test_modifier_order_insensitive() {
        assert_eq!(
            merge(&classes!["hover:focus:p-4", "focus:hover:p-8"]),
            "focus:hover:p-8"
        );
    }

    #[test]
    fn test_important_partitions_keys() {
        assert_eq!(merge(&classes!["p-4!", "p-8"]), "p-4! p-8");
        assert_eq!(merge(&classes!["p-4!", "p-8!"]), "p-8!");
        // 前缀与后缀语法互相冲突
        assert_eq!(merge(&classes!["!p-4", "p-8!"]), "p-8!");
    }

    #[test]
    fn test_negative_shares_group() {
        assert_eq!(merge(&classes!["-m-4", "m-8"]), "m-8");
    }

    #[test]
    fn test_alpha_shares_group() {
        assert_eq!(merge(&classes!["bg-black/50", "bg-white"]), "bg-white");
    }

    #[test]
    fn test_unknown_literal_dedup() {
        // 重复的未知类只保留一次，位置取较晚出现处
        assert_eq!(merge(&classes!["foo", "bar", "foo"]), "bar foo");
    }

    #[test]
    fn test_nullish_tokens_ignored() {
        assert_eq!(
            merge(&classes!["a", Option::<&str>::None, ("b", false), "b"]),
            "a b"
        );
    }

    #[test]
    fn test_nested_tokens_flattened() {
        let tokens = classes![vec![ClassToken::from("a"), ClassToken::from("b")], "c"];
        assert_eq!(merge(&tokens), "a b c");
    }

    #[test]
    fn test_whitespace_hygiene() {
        assert_eq!(merge(&classes!["  p-4   m-2 ", ""]), "p-4 m-2");
    }

    #[test]
    fn test_idempotence() {
        let once = merge(&classes!["p-4", "text-center", "w-8"]);
        let twice = merge(&classes![once.as_str()]);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_determinism() {
        let tokens = classes!["p-4", "p-8", "foo"];
        assert_eq!(merge(&tokens), merge(&tokens));
    }
}
