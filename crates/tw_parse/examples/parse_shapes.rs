/// 演示 class 结构解析
///
/// 展示 parse_class 如何拆出参与冲突判定的各个部分
///
/// ```bash
/// cargo run --example parse_shapes -p tailmerge-tw-parse
/// ```
use tailmerge_tw_parse::parse_class;

fn main() {
    println!("=== Class 结构解析示例 ===\n");

    let samples = [
        "p-4",
        "md:hover:bg-blue-500/50",
        "!-m-4",
        "w-[13px]",
        "[display:block]",
        "[&:nth-child(3)]:underline",
    ];

    for class in samples {
        let shape = parse_class(class).unwrap();
        println!("类名: {}", class);
        println!("    修饰符: {:?}", shape.modifiers);
        println!("    核心: {}", shape.core);
        if shape.negative {
            println!("    负值: true");
        }
        if shape.important {
            println!("    重要性: true");
        }
        if let Some(alpha) = &shape.alpha {
            println!("    透明度: {}", alpha);
        }
        println!("    切分候选: {:?}", shape.split_candidates());
        println!();
    }
}
