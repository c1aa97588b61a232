use wasm_bindgen::prelude::*;

use tailmerge_core::flatten::join_classes;
use tailmerge_core::types::ClassToken;

// ── JS 侧输入解析 ─────────────────────────────────────────────

/// 将 JS 值转换为 token 列表
///
/// 合并接口按约定不失败：无法反序列化的输入退化为空列表，
/// 单个值中未识别的形状由 from_json 归一化为 Skip。
fn parse_tokens(input: JsValue) -> Vec<ClassToken> {
    if input.is_undefined() || input.is_null() {
        return Vec::new();
    }

    let value: serde_json::Value =
        serde_wasm_bindgen::from_value(input).unwrap_or(serde_json::Value::Null);

    match value {
        serde_json::Value::Array(items) => items.iter().map(ClassToken::from_json).collect(),
        other => vec![ClassToken::from_json(&other)],
    }
}

// ── WASM 导出函数 ─────────────────────────────────────────────

/// 初始化 panic hook（自动调用）
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// 合并类名：展开 token 后按冲突组消解，后出现的类胜出
///
/// @param tokens - token 数组；元素可为字符串、嵌套数组、
///                 条件对象（类名 → 布尔）或 null/undefined
/// @returns 合并后的类名字符串
#[wasm_bindgen(js_name = "twMerge")]
pub fn tw_merge(tokens: JsValue) -> String {
    tailmerge_tw_groups::tw_merge(&parse_tokens(tokens))
}

/// 仅展开拼接 token，不做冲突消解
///
/// @param tokens - 与 twMerge 相同的 token 形状
/// @returns 拼接后的类名字符串
#[wasm_bindgen(js_name = "twJoin")]
pub fn tw_join(tokens: JsValue) -> String {
    join_classes(&parse_tokens(tokens))
}
