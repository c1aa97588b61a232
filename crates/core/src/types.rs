use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// 合并输入的一个 token
///
/// 建模为标签联合，展开时穷尽匹配。
/// 未识别的形状归一化为 Skip（惰性忽略，不报错）。
#[derive(Debug, Clone, PartialEq)]
pub enum ClassToken {
    /// 空格分隔的类名字符串
    Text(String),

    /// 条件映射：类名 → 是否包含（保持插入顺序）
    Toggle(IndexMap<String, bool>),

    /// 嵌套 token 列表（深度优先展开）
    Group(Vec<ClassToken>),

    /// 空占位（null / false / 未识别形状）
    Skip,
}

impl ClassToken {
    /// 从 JSON 值构造 token
    ///
    /// 全函数：任何形状都有定义，不存在失败路径。
    /// 字符串 → Text，数组 → Group，对象 → Toggle，
    /// 其余（null / 布尔 / 数字）→ Skip。
    pub fn from_json(value: &Value) -> ClassToken {
        match value {
            Value::String(s) => ClassToken::Text(s.clone()),
            Value::Array(items) => {
                ClassToken::Group(items.iter().map(ClassToken::from_json).collect())
            }
            Value::Object(entries) => {
                let map = entries
                    .iter()
                    .map(|(k, v)| (k.clone(), json_truthy(v)))
                    .collect();
                ClassToken::Toggle(map)
            }
            _ => ClassToken::Skip,
        }
    }
}

/// 条件映射的值按 JS 真值语义归一化
fn json_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(false, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

impl Default for ClassToken {
    fn default() -> Self {
        ClassToken::Skip
    }
}

impl<'de> Deserialize<'de> for ClassToken {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(ClassToken::from_json(&value))
    }
}

impl From<&str> for ClassToken {
    fn from(s: &str) -> Self {
        ClassToken::Text(s.to_string())
    }
}

impl From<String> for ClassToken {
    fn from(s: String) -> Self {
        ClassToken::Text(s)
    }
}

/// 条件包含：`("text-center", centered)`
impl From<(&str, bool)> for ClassToken {
    fn from((class, enabled): (&str, bool)) -> Self {
        if enabled {
            ClassToken::Text(class.to_string())
        } else {
            ClassToken::Skip
        }
    }
}

impl<T: Into<ClassToken>> From<Option<T>> for ClassToken {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => inner.into(),
            None => ClassToken::Skip,
        }
    }
}

impl From<Vec<ClassToken>> for ClassToken {
    fn from(items: Vec<ClassToken>) -> Self {
        ClassToken::Group(items)
    }
}

impl From<IndexMap<String, bool>> for ClassToken {
    fn from(map: IndexMap<String, bool>) -> Self {
        ClassToken::Toggle(map)
    }
}

/// 便捷构造 token 列表
///
/// # 示例
///
/// ```
/// use tailmerge_core::classes;
///
/// let tokens = classes!["p-4", ("text-center", true), Option::<&str>::None];
/// assert_eq!(tokens.len(), 3);
/// ```
#[macro_export]
macro_rules! classes {
    ($($token:expr),* $(,)?) => {
        vec![$($crate::types::ClassToken::from($token)),*]
    };
}
