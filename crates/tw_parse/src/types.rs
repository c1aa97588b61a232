use serde::{Deserialize, Serialize};

/// 解析后的 class 结构
///
/// 与完整的转换管线不同，合并场景只关心参与冲突判定的部分：
/// 修饰符、重要性标记、负值前缀、核心工具名与透明度后缀。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassShape {
    /// 修饰符列表（按出现顺序，如 ["md", "hover"]）
    pub modifiers: Vec<String>,

    /// 重要性标记（前缀 `!p-4` 或后缀 `p-4!`）
    pub important: bool,

    /// 负值前缀（如 `-m-4`）
    pub negative: bool,

    /// 核心部分：去除上述标记与透明度后缀的工具名
    /// （如 "p-4", "bg-blue-500", "[display:block]"）
    pub core: String,

    /// 透明度后缀（如 "bg-blue-500/50" 中的 "50"）
    pub alpha: Option<String>,
}

impl ClassShape {
    /// 是否为任意属性类（如 `[display:block]`）
    pub fn is_arbitrary_property(&self) -> bool {
        self.core.starts_with('[') && self.core.ends_with(']')
    }

    /// 拆出任意属性类的属性名和值
    ///
    /// `[display:block]` → `("display", "block")`
    pub fn arbitrary_property(&self) -> Option<(&str, &str)> {
        if !self.is_arbitrary_property() {
            return None;
        }
        let inner = &self.core[1..self.core.len() - 1];
        let colon = inner.find(':')?;
        let prop = &inner[..colon];
        if prop.is_empty() {
            return None;
        }
        Some((prop, &inner[colon + 1..]))
    }

    /// 按深度 0 的 `-` 产生 `(base, value)` 候选切分，最长 base 优先
    ///
    /// 方括号/圆括号内的 `-` 不参与切分，因此 `bg-[url(a-b)]`
    /// 只会在 `bg` 之后切开。
    ///
    /// # 示例
    ///
    /// ```
    /// use tailmerge_tw_parse::parse_class;
    ///
    /// let shape = parse_class("grid-cols-3").unwrap();
    /// let candidates = shape.split_candidates();
    /// assert_eq!(candidates, vec![("grid-cols", "3"), ("grid", "cols-3")]);
    /// ```
    pub fn split_candidates(&self) -> Vec<(&str, &str)> {
        let mut points = Vec::new();
        let mut depth = 0usize;

        for (i, ch) in self.core.char_indices() {
            match ch {
                '[' | '(' => depth += 1,
                ']' | ')' => depth = depth.saturating_sub(1),
                '-' if depth == 0 && i > 0 => points.push(i),
                _ => {}
            }
        }

        points
            .into_iter()
            .rev()
            .map(|i| (&self.core[..i], &self.core[i + 1..]))
            .collect()
    }
}

/// 取任意值方括号内的内容
///
/// `"[13px]"` → `Some("13px")`；非方括号值返回 `None`
pub fn arbitrary_content(value: &str) -> Option<&str> {
    if value.len() >= 2 && value.starts_with('[') && value.ends_with(']') {
        Some(&value[1..value.len() - 1])
    } else {
        None
    }
}

/// 拆出任意值内容的类型提示
///
/// `"length:var(--x)"` → `(Some("length"), "var(--x)")`
///
/// 提示必须是纯小写标识符；`url(https://a)` 这类内容中的冒号
/// 前缀含括号，不会被误认为提示。
pub fn split_hint(content: &str) -> (Option<&str>, &str) {
    if let Some(colon) = content.find(':') {
        let hint = &content[..colon];
        if !hint.is_empty() && hint.chars().all(|c| c.is_ascii_lowercase() || c == '-') {
            return (Some(hint), &content[colon + 1..]);
        }
    }
    (None, content)
}
