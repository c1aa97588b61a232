/// 基本使用示例：展示类名合并的冲突消解
///
/// 运行示例：
/// ```bash
/// cargo run --example merge_classes -p tailmerge-tw-groups
/// ```
use tailmerge_core::classes;
use tailmerge_core::merge::merge_classes;
use tailmerge_tw_groups::{load_from_json, tw_merge};

fn main() {
    println!("=== Tailmerge 基本使用示例 ===\n");

    // 1. 示例 1：同组冲突，后者胜出
    println!("--- 示例 1: 同组冲突 ---");
    let merged = tw_merge(&classes!["p-4", "p-8"]);
    println!("输入: p-4 p-8");
    println!("输出: {}", merged);

    // 2. 示例 2：条件 token 与嵌套列表
    println!("\n--- 示例 2: 条件 token ---");
    let is_active = true;
    let merged = tw_merge(&classes![
        "px-3 py-1",
        ("bg-blue-500", is_active),
        ("bg-gray-200", !is_active),
        Option::<&str>::None,
    ]);
    println!("输入: px-3 py-1 + 条件背景色");
    println!("输出: {}", merged);

    // 3. 示例 3：简写覆盖子轴
    println!("\n--- 示例 3: 简写覆盖 ---");
    let merged = tw_merge(&classes!["px-2", "py-3", "p-4"]);
    println!("输入: px-2 py-3 p-4");
    println!("输出: {} (p 同时覆盖 px/py)", merged);

    // 4. 示例 4：重载插件按值类型分组
    println!("\n--- 示例 4: 值类型分组 ---");
    let merged = tw_merge(&classes!["text-red-500", "text-center", "text-lg", "text-blue-600"]);
    println!("输入: text-red-500 text-center text-lg text-blue-600");
    println!("输出: {} (颜色轴冲突，对齐与字号保留)", merged);

    // 5. 示例 5：自定义组表
    println!("\n--- 示例 5: 自定义组表 ---");
    let json = r#"[
        { "group": "btn-size", "prefixes": ["btn"] }
    ]"#;
    let table = load_from_json(json).expect("Failed to load custom groups");
    let merged = merge_classes(&classes!["btn-sm", "btn-lg"], &table);
    println!("输入: btn-sm btn-lg (自定义 btn 组)");
    println!("输出: {}", merged);

    println!("\n=== 示例完成 ===");
}
