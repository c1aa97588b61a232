use crate::types::ClassShape;

/// 解析单个 class 字符串的结构
///
/// 支持的格式：
/// - 简单类：`p-4`, `flex`, `bg-red-500`
/// - 修饰符：`hover:bg-blue-500`, `md:p-4`, 任意变体 `[&:hover]:p-4`
/// - 负值：`-m-4`, `md:-top-1`
/// - 任意值：`w-[13px]`, `bg-[#ff0000]`
/// - 任意属性：`[display:block]`
/// - 透明度：`bg-blue-500/50`
/// - 重要性：前缀 `!p-4` 与后缀 `p-4!`
///
/// # 示例
///
/// ```
/// use tailmerge_tw_parse::parse_class;
///
/// let shape = parse_class("md:hover:bg-blue-500/50").unwrap();
/// assert_eq!(shape.modifiers, vec!["md", "hover"]);
/// assert_eq!(shape.core, "bg-blue-500");
/// assert_eq!(shape.alpha, Some("50".to_string()));
/// ```
pub fn parse_class(input: &str) -> Result<ClassShape, ParseError> {
    if input.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let (modifiers, rest) = split_modifiers(input)?;

    let mut core = rest;
    let mut important = false;

    // 前缀重要性（Tailwind v3 语法）
    if let Some(stripped) = core.strip_prefix('!') {
        important = true;
        core = stripped;
    }

    // 负值前缀
    let mut negative = false;
    if core.len() > 1 && core.starts_with('-') {
        negative = true;
        core = &core[1..];
    }

    // 后缀重要性（Tailwind v4 语法）
    // 括号平衡已在 split_modifiers 验证，结尾的 `!` 必然处于深度 0
    if let Some(stripped) = core.strip_suffix('!') {
        important = true;
        core = stripped;
    }

    let (core, alpha) = split_alpha(core);

    Ok(ClassShape {
        modifiers,
        important,
        negative,
        core: core.to_string(),
        alpha: alpha.map(str::to_string),
    })
}

/// 解析错误类型
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    EmptyInput,
    UnmatchedBracket,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::EmptyInput => write!(f, "Empty input"),
            ParseError::UnmatchedBracket => write!(f, "Unmatched bracket"),
        }
    }
}

impl std::error::Error for ParseError {}

/// 在深度 0 的 `:` 处切分修饰符
///
/// 方括号/圆括号内的 `:` 属于任意变体或任意值内容，不参与切分，
/// 因此 `[&:nth-child(3)]:p-4` 的修饰符是整个 `[&:nth-child(3)]`。
fn split_modifiers(input: &str) -> Result<(Vec<String>, &str), ParseError> {
    let mut modifiers = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;

    for (i, ch) in input.char_indices() {
        match ch {
            '[' | '(' => depth += 1,
            ']' | ')' => {
                depth = depth.checked_sub(1).ok_or(ParseError::UnmatchedBracket)?;
            }
            ':' if depth == 0 => {
                if i > start {
                    modifiers.push(input[start..i].to_string());
                }
                start = i + 1;
            }
            _ => {}
        }
    }

    if depth != 0 {
        return Err(ParseError::UnmatchedBracket);
    }

    Ok((modifiers, &input[start..]))
}

/// 在深度 0 的最后一个 `/` 处拆出透明度后缀
fn split_alpha(core: &str) -> (&str, Option<&str>) {
    let mut depth = 0usize;
    let mut slash = None;

    for (i, ch) in core.char_indices() {
        match ch {
            '[' | '(' => depth += 1,
            ']' | ')' => depth = depth.saturating_sub(1),
            '/' if depth == 0 => slash = Some(i),
            _ => {}
        }
    }

    match slash {
        Some(i) if i > 0 && i + 1 < core.len() => (&core[..i], Some(&core[i + 1..])),
        _ => (core, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_class() {
        let shape = parse_class("p-4").unwrap();
        assert!(shape.modifiers.is_empty());
        assert_eq!(shape.core, "p-4");
        assert!(!shape.negative);
        assert!(!shape.important);
        assert_eq!(shape.alpha, None);
    }

    #[test]
    fn test_class_without_value() {
        let shape = parse_class("flex").unwrap();
        assert_eq!(shape.core, "flex");
    }

    #[test]
    fn test_single_modifier() {
        let shape = parse_class("hover:bg-blue-500").unwrap();
        assert_eq!(shape.modifiers, vec!["hover"]);
        assert_eq!(shape.core, "bg-blue-500");
    }

    #[test]
    fn test_multiple_modifiers() {
        let shape = parse_class("md:hover:bg-blue-500").unwrap();
        assert_eq!(shape.modifiers, vec!["md", "hover"]);
        assert_eq!(shape.core, "bg-blue-500");
    }

    #[test]
    fn test_arbitrary_variant_modifier() {
        // 方括号内的冒号不切分修饰符
        let shape = parse_class("[&:nth-child(3)]:p-4").unwrap();
        assert_eq!(shape.modifiers, vec!["[&:nth-child(3)]"]);
        assert_eq!(shape.core, "p-4");
    }

    #[test]
    fn test_negative_value() {
        let shape = parse_class("-m-4").unwrap();
        assert!(shape.negative);
        assert_eq!(shape.core, "m-4");
    }

    #[test]
    fn test_negative_with_modifier() {
        let shape = parse_class("md:-top-1").unwrap();
        assert_eq!(shape.modifiers, vec!["md"]);
        assert!(shape.negative);
        assert_eq!(shape.core, "top-1");
    }

    #[test]
    fn test_arbitrary_value() {
        let shape = parse_class("w-[13px]").unwrap();
        assert_eq!(shape.core, "w-[13px]");
        assert_eq!(shape.alpha, None);
    }

    #[test]
    fn test_arbitrary_value_with_url() {
        // url 中的冒号与斜杠都在括号内，不影响切分
        let shape = parse_class("bg-[url(https://a.com/b.png)]").unwrap();
        assert!(shape.modifiers.is_empty());
        assert_eq!(shape.core, "bg-[url(https://a.com/b.png)]");
        assert_eq!(shape.alpha, None);
    }

    #[test]
    fn test_alpha_suffix() {
        let shape = parse_class("bg-blue-500/50").unwrap();
        assert_eq!(shape.core, "bg-blue-500");
        assert_eq!(shape.alpha, Some("50".to_string()));
    }

    #[test]
    fn test_fraction_value_reads_as_alpha() {
        // 分数值与透明度共用 `/`；组判定只依赖 core，不受影响
        let shape = parse_class("w-1/2").unwrap();
        assert_eq!(shape.core, "w-1");
        assert_eq!(shape.alpha, Some("2".to_string()));
    }

    #[test]
    fn test_important_prefix() {
        let shape = parse_class("!p-4").unwrap();
        assert!(shape.important);
        assert_eq!(shape.core, "p-4");
    }

    #[test]
    fn test_important_suffix() {
        let shape = parse_class("p-4!").unwrap();
        assert!(shape.important);
        assert_eq!(shape.core, "p-4");
    }

    #[test]
    fn test_important_negative_combined() {
        let shape = parse_class("!-m-4").unwrap();
        assert!(shape.important);
        assert!(shape.negative);
        assert_eq!(shape.core, "m-4");
    }

    #[test]
    fn test_complex_class() {
        let shape = parse_class("md:hover:bg-blue-500/50!").unwrap();
        assert_eq!(shape.modifiers, vec!["md", "hover"]);
        assert_eq!(shape.core, "bg-blue-500");
        assert_eq!(shape.alpha, Some("50".to_string()));
        assert!(shape.important);
    }

    #[test]
    fn test_arbitrary_property_class() {
        let shape = parse_class("[display:block]").unwrap();
        assert!(shape.modifiers.is_empty());
        assert_eq!(shape.core, "[display:block]");
    }

    #[test]
    fn test_nested_brackets() {
        let shape = parse_class("grid-cols-[repeat(3,minmax(0,1fr))]").unwrap();
        assert_eq!(shape.core, "grid-cols-[repeat(3,minmax(0,1fr))]");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse_class(""), Err(ParseError::EmptyInput));
    }

    #[test]
    fn test_unmatched_bracket() {
        assert_eq!(parse_class("w-[13px"), Err(ParseError::UnmatchedBracket));
        assert_eq!(parse_class("w-13px]"), Err(ParseError::UnmatchedBracket));
    }
}
