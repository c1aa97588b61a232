use indexmap::IndexMap;
use serde::Deserialize;
use std::collections::HashMap;
use tailmerge_core::merge::ConflictLookup;
use tailmerge_tw_parse::ClassShape;

/// 用户自定义冲突组表
///
/// 覆盖自定义设计系统的场景：组规则在运行期从 JSON 注入，
/// 与内置表实现同一查询接口，可替代或叠加使用。
pub struct CustomGroups {
    /// 全名类 → 组 ID
    classes: IndexMap<String, String>,
    /// 插件前缀 → 组 ID
    prefixes: IndexMap<String, String>,
    /// 组 ID → 被覆盖的组
    conflicts: HashMap<String, Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct GroupMapping {
    group: String,
    #[serde(default)]
    classes: Vec<String>,
    #[serde(default)]
    prefixes: Vec<String>,
    #[serde(default)]
    overrides: Vec<String>,
}

impl CustomGroups {
    /// 创建空表
    pub fn new() -> Self {
        Self {
            classes: IndexMap::new(),
            prefixes: IndexMap::new(),
            conflicts: HashMap::new(),
        }
    }

    /// 登记一个全名类
    pub fn insert_class(&mut self, class: impl Into<String>, group: impl Into<String>) {
        self.classes.insert(class.into(), group.into());
    }

    /// 登记一个插件前缀
    pub fn insert_prefix(&mut self, prefix: impl Into<String>, group: impl Into<String>) {
        self.prefixes.insert(prefix.into(), group.into());
    }

    /// 登记一组覆盖关系
    pub fn insert_conflicts(&mut self, group: impl Into<String>, overrides: Vec<String>) {
        self.conflicts.insert(group.into(), overrides);
    }

    /// 表是否为空
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty() && self.prefixes.is_empty()
    }
}

impl Default for CustomGroups {
    fn default() -> Self {
        Self::new()
    }
}

/// 从 JSON 字符串加载自定义组表
///
/// JSON 格式示例：
/// ```json
/// [
///   {
///     "group": "btn-size",
///     "classes": ["btn-compact"],
///     "prefixes": ["btn"],
///     "overrides": ["btn-pad"]
///   }
/// ]
/// ```
pub fn load_from_json(json_str: &str) -> Result<CustomGroups, serde_json::Error> {
    let mappings: Vec<GroupMapping> = serde_json::from_str(json_str)?;

    let mut table = CustomGroups::new();

    for mapping in mappings {
        for class in mapping.classes {
            table.insert_class(class, mapping.group.clone());
        }
        for prefix in mapping.prefixes {
            table.insert_prefix(prefix, mapping.group.clone());
        }
        if !mapping.overrides.is_empty() {
            table.insert_conflicts(mapping.group.clone(), mapping.overrides);
        }
    }

    Ok(table)
}

impl ConflictLookup for CustomGroups {
    fn group_of(&self, shape: &ClassShape) -> Option<String> {
        if let Some(group) = self.classes.get(&shape.core) {
            return Some(group.clone());
        }
        for (base, _value) in shape.split_candidates() {
            if let Some(group) = self.prefixes.get(base) {
                return Some(group.clone());
            }
        }
        None
    }

    fn conflicts_of(&self, group: &str) -> Vec<String> {
        self.conflicts.get(group).cloned().unwrap_or_default()
    }
}
