//! 值编码：把 `Value` 转为可直接拼入 SQL 的字面量。
//!
//! 安全警告：字面量拼接永远不如参数化查询安全；只在无法使用参数绑定时使用。

use crate::escape_id::escape_id;
use crate::timezone::TimeZone;
use crate::value::{SqlMap, Value, number_to_string};

/// 编码选项。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EscapeOptions {
    /// 为 true 时，`Map` 不展开为 `[k] = v`，而是按其自然字符串形式当作字符串编码。
    pub stringify_objects: bool,
    /// 日期编码时使用的时区。
    pub time_zone: TimeZone,
}

impl EscapeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stringify_objects(mut self, v: bool) -> Self {
        self.stringify_objects = v;
        self
    }

    pub fn time_zone(mut self, tz: impl Into<TimeZone>) -> Self {
        self.time_zone = tz.into();
        self
    }
}

/// 按默认选项编码。
pub fn escape(value: &Value) -> String {
    escape_with(value, &EscapeOptions::default())
}

pub fn escape_with(value: &Value, opts: &EscapeOptions) -> String {
    let mut out = String::new();
    encode_value(&mut out, value, opts.stringify_objects, &opts.time_zone);
    out
}

pub(crate) fn encode_value(
    out: &mut String,
    value: &Value,
    stringify_objects: bool,
    tz: &TimeZone,
) {
    match value {
        Value::Undefined | Value::Null => out.push_str("NULL"),
        Value::Custom(c) => out.push_str(&c.to_sql_string()),
        Value::Raw(r) => out.push_str(r.as_str()),
        Value::Bool(b) => out.push(if *b { '1' } else { '0' }),
        Value::I64(n) => out.push_str(&n.to_string()),
        Value::U64(n) => out.push_str(&n.to_string()),
        Value::F64(n) => out.push_str(&number_to_string(*n)),
        Value::Date(d) => match d.format_in(tz) {
            Some(s) => quote_string(out, &s),
            None => out.push_str("NULL"),
        },
        Value::List(items) => encode_list(out, items, tz),
        Value::Map(m) if !stringify_objects => encode_map(out, m, tz),
        Value::String(s) => quote_string(out, s),
        other => quote_string(out, &other.to_natural_string()),
    }
}

/// 列表：元素以 `, ` 连接；元素本身是列表时编码为 `(...)` 分组（多行 VALUES）。
fn encode_list(out: &mut String, items: &[Value], tz: &TimeZone) {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        match item {
            Value::List(inner) => {
                out.push('(');
                encode_list(out, inner, tz);
                out.push(')');
            }
            _ => encode_value(out, item, true, tz),
        }
    }
}

/// 映射：`[k] = v, ...`，跳过函数条目。
fn encode_map(out: &mut String, m: &SqlMap, tz: &TimeZone) {
    let mut first = true;
    for (key, value) in m.iter() {
        if matches!(value, Value::Function(_)) {
            continue;
        }
        if !first {
            out.push_str(", ");
        }
        first = false;
        out.push_str(&escape_id(&Value::from(key.to_string()), false));
        out.push_str(" = ");
        encode_value(out, value, true, tz);
    }
}

/// 单引号包裹并转义；单次线性扫描，已写出的转义字符不会被再次处理。
pub(crate) fn quote_string(out: &mut String, s: &str) {
    out.reserve(s.len() + 2);
    out.push('\'');
    for ch in s.chars() {
        match ch {
            '\u{0008}' => out.push_str("\\b"),
            '\u{000c}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{001a}' => out.push_str("\\Z"),
            '/' => out.push_str("\\/"),
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("''"),
            _ => out.push(ch),
        }
    }
    out.push('\'');
}
