/// 跨组覆盖关系
///
/// 一个简写工具同时设置多个子轴，后出现的简写应将先出现的
/// 子轴工具一并挤掉（`px-2 p-4` → `p-4`）。反向不成立：
/// 后出现的子轴工具只覆盖自己的轴（`p-4 px-2` 两者都保留）。
struct GroupConflict {
    group: &'static str,
    overrides: &'static [&'static str],
}

static GROUP_CONFLICTS: &[GroupConflict] = &[
    // Spacing (间距)
    GroupConflict {
        group: "p",
        overrides: &["px", "py", "pt", "pr", "pb", "pl"],
    },
    GroupConflict {
        group: "px",
        overrides: &["pr", "pl"],
    },
    GroupConflict {
        group: "py",
        overrides: &["pt", "pb"],
    },
    GroupConflict {
        group: "m",
        overrides: &["mx", "my", "mt", "mr", "mb", "ml"],
    },
    GroupConflict {
        group: "mx",
        overrides: &["mr", "ml"],
    },
    GroupConflict {
        group: "my",
        overrides: &["mt", "mb"],
    },

    // Sizing (尺寸)
    GroupConflict {
        group: "size",
        overrides: &["w", "h"],
    },

    // Position (定位)
    GroupConflict {
        group: "inset",
        overrides: &["inset-x", "inset-y", "top", "right", "bottom", "left"],
    },
    GroupConflict {
        group: "inset-x",
        overrides: &["right", "left"],
    },
    GroupConflict {
        group: "inset-y",
        overrides: &["top", "bottom"],
    },

    // Gap
    GroupConflict {
        group: "gap",
        overrides: &["gap-x", "gap-y"],
    },

    // Border radius (圆角)
    GroupConflict {
        group: "rounded",
        overrides: &[
            "rounded-t",
            "rounded-r",
            "rounded-b",
            "rounded-l",
            "rounded-tl",
            "rounded-tr",
            "rounded-br",
            "rounded-bl",
        ],
    },
    GroupConflict {
        group: "rounded-t",
        overrides: &["rounded-tl", "rounded-tr"],
    },
    GroupConflict {
        group: "rounded-r",
        overrides: &["rounded-tr", "rounded-br"],
    },
    GroupConflict {
        group: "rounded-b",
        overrides: &["rounded-br", "rounded-bl"],
    },
    GroupConflict {
        group: "rounded-l",
        overrides: &["rounded-tl", "rounded-bl"],
    },

    // Border width / color (边框线宽与颜色)
    GroupConflict {
        group: "border-w",
        overrides: &[
            "border-w-t",
            "border-w-r",
            "border-w-b",
            "border-w-l",
            "border-w-x",
            "border-w-y",
        ],
    },
    GroupConflict {
        group: "border-w-x",
        overrides: &["border-w-r", "border-w-l"],
    },
    GroupConflict {
        group: "border-w-y",
        overrides: &["border-w-t", "border-w-b"],
    },
    GroupConflict {
        group: "border-color",
        overrides: &[
            "border-color-t",
            "border-color-r",
            "border-color-b",
            "border-color-l",
            "border-color-x",
            "border-color-y",
        ],
    },
    GroupConflict {
        group: "border-color-x",
        overrides: &["border-color-r", "border-color-l"],
    },
    GroupConflict {
        group: "border-color-y",
        overrides: &["border-color-t", "border-color-b"],
    },

    // Overflow / overscroll
    GroupConflict {
        group: "overflow",
        overrides: &["overflow-x", "overflow-y"],
    },
    GroupConflict {
        group: "overscroll",
        overrides: &["overscroll-x", "overscroll-y"],
    },

    // 字号工具同时设置行高（text-lg 自带 line-height）
    GroupConflict {
        group: "font-size",
        overrides: &["line-height"],
    },
];

/// 查询某组覆盖的其他组
pub fn conflicts_of(group: &str) -> &'static [&'static str] {
    GROUP_CONFLICTS
        .iter()
        .find(|entry| entry.group == group)
        .map(|entry| entry.overrides)
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shorthand_overrides_axes() {
        assert!(conflicts_of("p").contains(&"px"));
        assert!(conflicts_of("p").contains(&"pl"));
        assert!(conflicts_of("inset").contains(&"top"));
        assert!(conflicts_of("size").contains(&"w"));
    }

    #[test]
    fn test_axis_does_not_override_shorthand() {
        assert!(!conflicts_of("px").contains(&"p"));
        assert!(!conflicts_of("top").contains(&"inset"));
    }

    #[test]
    fn test_font_size_resets_line_height() {
        assert_eq!(conflicts_of("font-size"), &["line-height"]);
    }

    #[test]
    fn test_unrelated_group_empty() {
        assert!(conflicts_of("display").is_empty());
        assert!(conflicts_of("unknown").is_empty());
    }
}
