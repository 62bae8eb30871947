//! 标识符编码：`[name]`、`[schema].[name]`。

use crate::value::Value;

/// 把名字（或名字列表）编码为方括号引用的标识符。
///
/// - 列表逐项编码后以 `, ` 连接，嵌套列表会被递归拍平。
/// - 非字符串先取其自然字符串形式。
/// - `forbid_qualified` 为 false 时，只在第一个 `.` 处拆成两段分别引用。
pub fn escape_id(value: &Value, forbid_qualified: bool) -> String {
    let mut out = String::new();
    write_id(&mut out, value, forbid_qualified);
    out
}

fn write_id(out: &mut String, value: &Value, forbid_qualified: bool) {
    match value {
        Value::List(items) => {
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_id(out, item, forbid_qualified);
            }
        }
        Value::String(s) => write_name(out, s, forbid_qualified),
        other => write_name(out, &other.to_natural_string(), forbid_qualified),
    }
}

fn write_name(out: &mut String, name: &str, forbid_qualified: bool) {
    match name.split_once('.') {
        Some((qualifier, rest)) if !forbid_qualified => {
            quote_segment(out, qualifier);
            out.push('.');
            quote_segment(out, rest);
        }
        _ => quote_segment(out, name),
    }
}

fn quote_segment(out: &mut String, segment: &str) {
    out.push('[');
    for ch in segment.chars() {
        if ch == ']' {
            out.push_str("]]");
        } else {
            out.push(ch);
        }
    }
    out.push(']');
}
