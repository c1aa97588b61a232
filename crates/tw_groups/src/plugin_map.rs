use phf::phf_map;

/// 单义插件名到冲突组 ID 的映射
///
/// 语义重载的插件（text / font / bg / border / shadow 等）不在此表中，
/// 由 dispatch 按值类型分发；无值工具与枚举值工具在 valueless_map 中按全名建表。
/// 使用 phf 在编译期生成完美哈希表，零运行时开销。
static PLUGIN_GROUP_MAP: phf::Map<&'static str, &'static str> = phf_map! {
    // Spacing (间距)
    "p" => "p",
    "px" => "px",
    "py" => "py",
    "pt" => "pt",
    "pr" => "pr",
    "pb" => "pb",
    "pl" => "pl",
    "m" => "m",
    "mx" => "mx",
    "my" => "my",
    "mt" => "mt",
    "mr" => "mr",
    "mb" => "mb",
    "ml" => "ml",
    "space-x" => "space-x",
    "space-y" => "space-y",
    "scroll-m" => "scroll-m",
    "scroll-p" => "scroll-p",

    // Sizing (尺寸)
    "w" => "w",
    "h" => "h",
    "size" => "size",
    "min-w" => "min-w",
    "min-h" => "min-h",
    "max-w" => "max-w",
    "max-h" => "max-h",

    // Position (定位)
    "top" => "top",
    "right" => "right",
    "bottom" => "bottom",
    "left" => "left",
    "inset" => "inset",
    "inset-x" => "inset-x",
    "inset-y" => "inset-y",
    "z" => "z-index",
    "float" => "float",
    "clear" => "clear",

    // Flex & Grid
    "basis" => "flex-basis",
    "grow" => "flex-grow",
    "shrink" => "flex-shrink",
    "order" => "order",
    "flex" => "flex",
    "grid-cols" => "grid-cols",
    "grid-rows" => "grid-rows",
    "grid-flow" => "grid-flow",
    "auto-cols" => "auto-cols",
    "auto-rows" => "auto-rows",
    "col-span" => "col-span",
    "col-start" => "col-start",
    "col-end" => "col-end",
    "row-span" => "row-span",
    "row-start" => "row-start",
    "row-end" => "row-end",
    "gap" => "gap",
    "gap-x" => "gap-x",
    "gap-y" => "gap-y",

    // Alignment (对齐)
    "justify" => "justify-content",
    "justify-items" => "justify-items",
    "justify-self" => "justify-self",
    "items" => "align-items",
    "self" => "align-self",
    "place-content" => "place-content",
    "place-items" => "place-items",
    "place-self" => "place-self",

    // Typography (排版)
    // 注意：text 和 font 不在此 map 中，它们是语义重载的
    // （color / font-size / text-align，weight / family），由 dispatch 分发
    "leading" => "line-height",
    "tracking" => "letter-spacing",
    "indent" => "text-indent",
    "align" => "vertical-align",
    "whitespace" => "white-space",
    "break" => "word-break",
    "break-after" => "break-after",
    "break-before" => "break-before",
    "break-inside" => "break-inside",
    "line-clamp" => "line-clamp",
    "list" => "list-style",
    "underline-offset" => "text-underline-offset",

    // Gradient color stops (渐变色)
    "from" => "gradient-from",
    "via" => "gradient-via",
    "to" => "gradient-to",

    // Background 附属插件（bg 本体由 dispatch 分发）
    "bg-clip" => "bg-clip",
    "bg-origin" => "bg-origin",

    // Borders (边框)
    "rounded" => "rounded",
    "rounded-t" => "rounded-t",
    "rounded-r" => "rounded-r",
    "rounded-b" => "rounded-b",
    "rounded-l" => "rounded-l",
    "rounded-tl" => "rounded-tl",
    "rounded-tr" => "rounded-tr",
    "rounded-br" => "rounded-br",
    "rounded-bl" => "rounded-bl",
    "divide-x" => "divide-x",
    "divide-y" => "divide-y",
    "outline-offset" => "outline-offset",

    // Effects (效果)
    "opacity" => "opacity",
    "mix-blend" => "mix-blend",
    "bg-blend" => "bg-blend",

    // Filters (滤镜)
    "blur" => "blur",
    "brightness" => "brightness",
    "contrast" => "contrast",
    "grayscale" => "grayscale",
    "hue-rotate" => "hue-rotate",
    "invert" => "invert",
    "saturate" => "saturate",
    "sepia" => "sepia",
    "drop-shadow" => "drop-shadow",
    "backdrop-blur" => "backdrop-blur",
    "backdrop-brightness" => "backdrop-brightness",
    "backdrop-contrast" => "backdrop-contrast",
    "backdrop-grayscale" => "backdrop-grayscale",
    "backdrop-hue-rotate" => "backdrop-hue-rotate",
    "backdrop-invert" => "backdrop-invert",
    "backdrop-opacity" => "backdrop-opacity",
    "backdrop-saturate" => "backdrop-saturate",
    "backdrop-sepia" => "backdrop-sepia",

    // Tables (表格)
    "caption" => "caption-side",

    // Transitions & Animation (过渡与动画)
    "transition" => "transition",
    "duration" => "duration",
    "delay" => "delay",
    "ease" => "ease",
    "animate" => "animate",

    // Transforms (变换)
    "scale" => "scale",
    "scale-x" => "scale-x",
    "scale-y" => "scale-y",
    "rotate" => "rotate",
    "translate-x" => "translate-x",
    "translate-y" => "translate-y",
    "skew-x" => "skew-x",
    "skew-y" => "skew-y",
    "origin" => "transform-origin",

    // Interactivity (交互)
    "cursor" => "cursor",
    "select" => "user-select",
    "resize" => "resize",
    "snap" => "snap",
    "touch" => "touch",
    "will-change" => "will-change",
    "pointer-events" => "pointer-events",
    "accent" => "accent-color",
    "caret" => "caret-color",

    // SVG
    "fill" => "fill",

    // Misc (其他)
    "aspect" => "aspect-ratio",
    "columns" => "columns",
    "object" => "object-position",
    "overflow" => "overflow",
    "overflow-x" => "overflow-x",
    "overflow-y" => "overflow-y",
    "overscroll" => "overscroll",
    "overscroll-x" => "overscroll-x",
    "overscroll-y" => "overscroll-y",
};

/// 查询插件名所属的冲突组
pub fn lookup(base: &str) -> Option<&'static str> {
    PLUGIN_GROUP_MAP.get(base).copied()
}
