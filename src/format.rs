//! SQL 模板插值：把 `?` 替换为编码后的值，`??` 替换为编码后的标识符。
//!
//! - 只识别恰好一个 `?` 与恰好两个 `??`；三个及以上连续的 `?` 原样保留且不消耗参数。
//! - 参数按出现顺序依次消耗；多余的参数被忽略，缺少参数的占位符原样保留。

use crate::escape::{EscapeOptions, encode_value};
use crate::escape_id::escape_id;
use crate::value::{SqlMap, Value};

/// `format` 的参数。
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FormatArgs {
    /// 没有参数：模板原样返回。
    #[default]
    None,
    /// 按位置依次消耗。
    Positional(Vec<Value>),
    /// 单个非列表值：每个占位符都使用它，不推进游标。
    Single(Value),
}

impl From<()> for FormatArgs {
    fn from(_: ()) -> Self {
        Self::None
    }
}

impl From<Value> for FormatArgs {
    fn from(v: Value) -> Self {
        match v {
            Value::Undefined | Value::Null => Self::None,
            Value::List(items) => Self::Positional(items),
            other => Self::Single(other),
        }
    }
}

impl From<SqlMap> for FormatArgs {
    fn from(v: SqlMap) -> Self {
        Self::Single(Value::Map(v))
    }
}

impl<T: Into<Value>> From<Vec<T>> for FormatArgs {
    fn from(v: Vec<T>) -> Self {
        Self::Positional(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for FormatArgs {
    fn from(v: [T; N]) -> Self {
        Self::Positional(v.into_iter().map(Into::into).collect())
    }
}

/// 扫描过程中的参数游标。
#[derive(Debug)]
enum ArgCursor<'a> {
    Positional { args: &'a [Value], pos: usize },
    Repeat(&'a Value),
}

impl<'a> ArgCursor<'a> {
    /// 消耗一个占位符：位置模式下无论是否取到参数都会前进一格。
    fn advance(&mut self) -> Option<&'a Value> {
        match self {
            Self::Positional { args, pos } => {
                let args: &'a [Value] = *args;
                let v = args.get(*pos);
                *pos += 1;
                v
            }
            Self::Repeat(v) => Some(*v),
        }
    }
}

/// 按默认选项插值。
pub fn format(template: &str, args: impl Into<FormatArgs>) -> String {
    format_with(template, args, &EscapeOptions::default())
}

pub fn format_with(template: &str, args: impl Into<FormatArgs>, opts: &EscapeOptions) -> String {
    let args = args.into();
    let mut cursor = match &args {
        FormatArgs::None => return template.to_string(),
        FormatArgs::Positional(v) if v.is_empty() => return template.to_string(),
        FormatArgs::Positional(v) => ArgCursor::Positional { args: v, pos: 0 },
        FormatArgs::Single(v) => ArgCursor::Repeat(v),
    };

    let mut out = String::with_capacity(template.len() + 16);
    let mut rest = template;
    while let Some(start) = rest.find('?') {
        out.push_str(&rest[..start]);
        let run = rest[start..].bytes().take_while(|&b| b == b'?').count();
        let token = &rest[start..start + run];

        match run {
            1 => match cursor.advance() {
                Some(v) => encode_value(&mut out, v, opts.stringify_objects, &opts.time_zone),
                None => push_unreplaced(&mut out, token),
            },
            2 => match cursor.advance() {
                Some(v) => out.push_str(&escape_id(v, false)),
                None => push_unreplaced(&mut out, token),
            },
            _ => out.push_str(token),
        }

        rest = &rest[start + run..];
    }
    out.push_str(rest);
    out
}

fn push_unreplaced(out: &mut String, token: &str) {
    #[cfg(feature = "tracing")]
    tracing::trace!(placeholder = token, "not enough args, placeholder left as is");
    out.push_str(token);
}
