use phf::phf_map;

/// 全名类到冲突组 ID 的映射
///
/// 覆盖两类工具：
/// - 无值工具（flex, hidden, italic, …）
/// - 值为封闭枚举的工具（text-center, font-bold, object-cover, …）
///
/// 枚举值工具按全名建表后，dispatch 只需处理开放值域
/// （颜色、任意值），分发逻辑大幅简化。
static VALUELESS_GROUP_MAP: phf::Map<&'static str, &'static str> = phf_map! {
    // Display
    "block" => "display",
    "inline-block" => "display",
    "inline" => "display",
    "flex" => "display",
    "inline-flex" => "display",
    "table" => "display",
    "inline-table" => "display",
    "table-caption" => "display",
    "table-cell" => "display",
    "table-column" => "display",
    "table-column-group" => "display",
    "table-footer-group" => "display",
    "table-header-group" => "display",
    "table-row-group" => "display",
    "table-row" => "display",
    "flow-root" => "display",
    "grid" => "display",
    "inline-grid" => "display",
    "contents" => "display",
    "list-item" => "display",
    "hidden" => "display",

    // Position
    "static" => "position",
    "fixed" => "position",
    "absolute" => "position",
    "relative" => "position",
    "sticky" => "position",

    // Visibility
    "visible" => "visibility",
    "invisible" => "visibility",
    "collapse" => "visibility",

    // Typography (排版)
    "italic" => "font-style",
    "not-italic" => "font-style",
    "antialiased" => "font-smoothing",
    "subpixel-antialiased" => "font-smoothing",
    "underline" => "text-decoration",
    "overline" => "text-decoration",
    "line-through" => "text-decoration",
    "no-underline" => "text-decoration",
    "uppercase" => "text-transform",
    "lowercase" => "text-transform",
    "capitalize" => "text-transform",
    "normal-case" => "text-transform",
    "truncate" => "text-overflow",
    "text-ellipsis" => "text-overflow",
    "text-clip" => "text-overflow",
    "text-left" => "text-align",
    "text-center" => "text-align",
    "text-right" => "text-align",
    "text-justify" => "text-align",
    "text-start" => "text-align",
    "text-end" => "text-align",
    "text-wrap" => "text-wrap",
    "text-nowrap" => "text-wrap",
    "text-balance" => "text-wrap",
    "text-pretty" => "text-wrap",
    "text-xs" => "font-size",
    "text-sm" => "font-size",
    "text-base" => "font-size",
    "text-lg" => "font-size",
    "text-xl" => "font-size",
    "text-2xl" => "font-size",
    "text-3xl" => "font-size",
    "text-4xl" => "font-size",
    "text-5xl" => "font-size",
    "text-6xl" => "font-size",
    "text-7xl" => "font-size",
    "text-8xl" => "font-size",
    "text-9xl" => "font-size",
    "font-thin" => "font-weight",
    "font-extralight" => "font-weight",
    "font-light" => "font-weight",
    "font-normal" => "font-weight",
    "font-medium" => "font-weight",
    "font-semibold" => "font-weight",
    "font-bold" => "font-weight",
    "font-extrabold" => "font-weight",
    "font-black" => "font-weight",
    "font-sans" => "font-family",
    "font-serif" => "font-family",
    "font-mono" => "font-family",

    // Flex
    "flex-row" => "flex-direction",
    "flex-row-reverse" => "flex-direction",
    "flex-col" => "flex-direction",
    "flex-col-reverse" => "flex-direction",
    "flex-wrap" => "flex-wrap",
    "flex-wrap-reverse" => "flex-wrap",
    "flex-nowrap" => "flex-wrap",
    "flex-auto" => "flex",
    "flex-initial" => "flex",
    "flex-none" => "flex",
    "grow" => "flex-grow",
    "shrink" => "flex-shrink",

    // Borders (边框)
    "border-solid" => "border-style",
    "border-dashed" => "border-style",
    "border-dotted" => "border-style",
    "border-double" => "border-style",
    "border-hidden" => "border-style",
    "border-none" => "border-style",
    "border-collapse" => "border-collapse",
    "border-separate" => "border-collapse",
    "border" => "border-w",
    "border-t" => "border-w-t",
    "border-r" => "border-w-r",
    "border-b" => "border-w-b",
    "border-l" => "border-w-l",
    "border-x" => "border-w-x",
    "border-y" => "border-w-y",
    "divide-solid" => "divide-style",
    "divide-dashed" => "divide-style",
    "divide-dotted" => "divide-style",
    "divide-double" => "divide-style",
    "divide-none" => "divide-style",
    "divide-x" => "divide-x",
    "divide-y" => "divide-y",
    "rounded" => "rounded",
    "rounded-t" => "rounded-t",
    "rounded-r" => "rounded-r",
    "rounded-b" => "rounded-b",
    "rounded-l" => "rounded-l",
    "rounded-tl" => "rounded-tl",
    "rounded-tr" => "rounded-tr",
    "rounded-br" => "rounded-br",
    "rounded-bl" => "rounded-bl",
    "ring" => "ring-w",
    "ring-inset" => "ring-w-inset",
    "outline" => "outline-style",
    "outline-none" => "outline-style",
    "outline-solid" => "outline-style",
    "outline-dashed" => "outline-style",
    "outline-dotted" => "outline-style",
    "outline-double" => "outline-style",
    "decoration-solid" => "decoration-style",
    "decoration-double" => "decoration-style",
    "decoration-dotted" => "decoration-style",
    "decoration-dashed" => "decoration-style",
    "decoration-wavy" => "decoration-style",

    // Effects (效果)
    "shadow" => "shadow",
    "shadow-sm" => "shadow",
    "shadow-md" => "shadow",
    "shadow-lg" => "shadow",
    "shadow-xl" => "shadow",
    "shadow-2xl" => "shadow",
    "shadow-inner" => "shadow",
    "shadow-none" => "shadow",

    // Transforms (变换)
    "transform" => "transform",
    "transform-gpu" => "transform",
    "transform-cpu" => "transform",
    "transform-none" => "transform",

    // Object fit
    "object-contain" => "object-fit",
    "object-cover" => "object-fit",
    "object-fill" => "object-fit",
    "object-none" => "object-fit",
    "object-scale-down" => "object-fit",

    // Background 枚举值（bg 的开放值域由 dispatch 分发）
    "bg-fixed" => "bg-attachment",
    "bg-local" => "bg-attachment",
    "bg-scroll" => "bg-attachment",
    "bg-top" => "bg-position",
    "bg-bottom" => "bg-position",
    "bg-center" => "bg-position",
    "bg-left" => "bg-position",
    "bg-right" => "bg-position",
    "bg-left-top" => "bg-position",
    "bg-left-bottom" => "bg-position",
    "bg-right-top" => "bg-position",
    "bg-right-bottom" => "bg-position",
    "bg-repeat" => "bg-repeat",
    "bg-no-repeat" => "bg-repeat",
    "bg-repeat-x" => "bg-repeat",
    "bg-repeat-y" => "bg-repeat",
    "bg-repeat-round" => "bg-repeat",
    "bg-repeat-space" => "bg-repeat",
    "bg-auto" => "bg-size",
    "bg-cover" => "bg-size",
    "bg-contain" => "bg-size",
    "bg-none" => "bg-image",

    // Tables (表格)
    "table-auto" => "table-layout",
    "table-fixed" => "table-layout",

    // Misc (其他)
    "sr-only" => "sr",
    "not-sr-only" => "sr",
    "container" => "container",
    "isolate" => "isolation",
    "isolation-auto" => "isolation",
    "box-border" => "box-sizing",
    "box-content" => "box-sizing",
};

/// 按全名查询冲突组
pub fn lookup(class: &str) -> Option<&'static str> {
    VALUELESS_GROUP_MAP.get(class).copied()
}
