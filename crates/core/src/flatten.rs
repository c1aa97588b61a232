use crate::types::ClassToken;

/// 将 token 序列按深度优先展开为有序类名列表
///
/// 功能：
/// - 字符串按空白切分为单个类名
/// - 条件映射按插入顺序遍历，仅保留标记为真的键
/// - 嵌套列表递归展开
/// - Skip 不产生任何类名
pub fn flatten_tokens(tokens: &[ClassToken]) -> Vec<String> {
    let mut out = Vec::new();
    for token in tokens {
        push_token(token, &mut out);
    }
    out
}

fn push_token(token: &ClassToken, out: &mut Vec<String>) {
    match token {
        ClassToken::Text(text) => {
            out.extend(text.split_whitespace().map(str::to_string));
        }
        ClassToken::Toggle(entries) => {
            for (name, enabled) in entries {
                if *enabled {
                    out.extend(name.split_whitespace().map(str::to_string));
                }
            }
        }
        ClassToken::Group(items) => {
            for item in items {
                push_token(item, out);
            }
        }
        ClassToken::Skip => {}
    }
}

/// 仅展开拼接，不做冲突消解
pub fn join_classes(tokens: &[ClassToken]) -> String {
    flatten_tokens(tokens).join(" ")
}
