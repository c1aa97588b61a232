use tailmerge_tw_parse::{arbitrary_content, split_hint};

/// 语义重载插件的值类型分发
///
/// 同一插件按值类型落入不同冲突组：`text-red-500` 是颜色，
/// `text-[14px]` 是字号；`border-2` 是线宽，`border-rose-300` 是颜色。
/// 封闭枚举值（text-center、font-bold 等）已在 valueless_map 按全名建表，
/// 这里只处理开放值域。
pub fn dispatch_group(base: &str, value: &str) -> Option<&'static str> {
    match base {
        "text" => Some(if is_size_value(value) {
            "font-size"
        } else {
            "text-color"
        }),
        "font" => Some(if is_weight_value(value) {
            "font-weight"
        } else {
            "font-family"
        }),
        "bg" => Some(bg_group(value)),
        "border" => Some(border_group(value, "border-w", "border-color")),
        "border-t" => Some(border_group(value, "border-w-t", "border-color-t")),
        "border-r" => Some(border_group(value, "border-w-r", "border-color-r")),
        "border-b" => Some(border_group(value, "border-w-b", "border-color-b")),
        "border-l" => Some(border_group(value, "border-w-l", "border-color-l")),
        "border-x" => Some(border_group(value, "border-w-x", "border-color-x")),
        "border-y" => Some(border_group(value, "border-w-y", "border-color-y")),
        "divide" => Some(if is_border_style(value) {
            "divide-style"
        } else {
            "divide-color"
        }),
        "shadow" => Some(shadow_group(value)),
        "ring" => Some(if is_size_value(value) {
            "ring-w"
        } else {
            "ring-color"
        }),
        "ring-offset" => Some(if is_size_value(value) {
            "ring-offset-w"
        } else {
            "ring-offset-color"
        }),
        "stroke" => Some(if is_size_value(value) {
            "stroke-w"
        } else {
            "stroke-color"
        }),
        "decoration" => Some(if is_thickness_value(value) {
            "decoration-thickness"
        } else {
            "decoration-color"
        }),
        "outline" => Some(if is_size_value(value) {
            "outline-w"
        } else {
            "outline-color"
        }),
        // content-center 是 align-content，content-['..'] 是 CSS content 属性
        "content" => Some(if arbitrary_content(value).is_some() {
            "content"
        } else {
            "align-content"
        }),
        _ => None,
    }
}

fn bg_group(value: &str) -> &'static str {
    if value.starts_with("gradient-") {
        return "bg-image";
    }
    if let Some(content) = arbitrary_content(value) {
        let (hint, rest) = split_hint(content);
        return match hint {
            Some("image" | "url") => "bg-image",
            Some("length" | "size" | "percentage") => "bg-size",
            Some("position") => "bg-position",
            _ if rest.starts_with("url(")
                || rest.starts_with("image-set(")
                || rest.starts_with("linear-gradient(")
                || rest.starts_with("radial-gradient(")
                || rest.starts_with("conic-gradient(") =>
            {
                "bg-image"
            }
            _ => "bg-color",
        };
    }
    "bg-color"
}

fn border_group(value: &str, width: &'static str, color: &'static str) -> &'static str {
    // 按边的线型极少见，统一归入全局 border-style 组
    if is_border_style(value) {
        "border-style"
    } else if is_size_value(value) {
        width
    } else {
        color
    }
}

fn shadow_group(value: &str) -> &'static str {
    // 任意值可能是完整阴影（shadow-[0_1px_2px_#000]）或纯颜色
    if let Some(content) = arbitrary_content(value) {
        let (hint, rest) = split_hint(content);
        if hint == Some("color") || is_color_like(rest) {
            return "shadow-color";
        }
        return "shadow";
    }
    "shadow-color"
}

fn is_border_style(value: &str) -> bool {
    matches!(
        value,
        "solid" | "dashed" | "dotted" | "double" | "hidden" | "none"
    )
}

/// 数字或任意长度值（`2`、`0.5`、`[13px]`、`[length:var(--x)]`）
fn is_size_value(value: &str) -> bool {
    if value.parse::<f64>().is_ok() {
        return true;
    }
    match arbitrary_content(value) {
        Some(content) => {
            let (hint, rest) = split_hint(content);
            match hint {
                Some("length" | "size" | "percentage") => true,
                Some(_) => false,
                None => is_length_like(rest),
            }
        }
        None => false,
    }
}

/// 字重值：命名字重在 valueless_map 中，这里只认数字
fn is_weight_value(value: &str) -> bool {
    if value.parse::<u32>().is_ok() {
        return true;
    }
    matches!(arbitrary_content(value), Some(content) if content.parse::<u32>().is_ok())
}

/// 装饰线粗细：auto / from-font / 数字 / 任意长度
fn is_thickness_value(value: &str) -> bool {
    matches!(value, "auto" | "from-font") || is_size_value(value)
}

fn is_length_like(content: &str) -> bool {
    content.starts_with("calc(")
        || content
            .chars()
            .next()
            .map_or(false, |c| c.is_ascii_digit() || c == '.')
}

fn is_color_like(content: &str) -> bool {
    content.starts_with('#')
        || content.starts_with("rgb(")
        || content.starts_with("rgba(")
        || content.starts_with("hsl(")
        || content.starts_with("hsla(")
        || content.starts_with("oklch(")
        || content.starts_with("oklab(")
        || content.starts_with("color(")
}
