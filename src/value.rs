//! 可被编码为 SQL 的值类型。

use crate::raw::Raw;
use crate::timezone::TimeZone;
use crate::valuer::ToSqlString;
use std::borrow::Cow;
use std::fmt;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};

/// 日期格式：`YYYY-MM-DD HH:MM:SS.mmm`。
const DATE_FORMAT: &[time::format_description::BorrowedFormatItem<'static>] = format_description!(
    "[year]-[month]-[day] [hour]:[minute]:[second].[subsecond digits:3]"
);

/// 参与编码的值。
///
/// 变体在构造时就确定了编码方式：`Custom` 自带 SQL 文本，`Object` 自带字符串形式，
/// 编码器不会在运行时去“探测”某个值有没有这些能力。
#[derive(Clone, Default)]
pub enum Value {
    /// 缺省值（没有传参）。
    #[default]
    Undefined,
    Null,
    Bool(bool),
    I64(i64),
    U64(u64),
    F64(f64),
    String(Cow<'static, str>),
    Date(SqlDate),
    Raw(Raw),
    List(Vec<Value>),
    Map(SqlMap),
    /// 函数值：只保留名字；作为 `Map` 的条目时会被跳过。
    Function(Cow<'static, str>),
    Custom(Box<dyn ToSqlString>),
    /// 只有字符串形式的不透明对象。
    Object(Cow<'static, str>),
}

impl Value {
    /// 用任意 `Display` 值构造一个不透明对象，字符串形式在此刻确定。
    pub fn object(v: impl fmt::Display) -> Self {
        Self::Object(Cow::Owned(v.to_string()))
    }

    pub fn function(name: impl Into<Cow<'static, str>>) -> Self {
        Self::Function(name.into())
    }

    pub fn custom(v: impl ToSqlString + 'static) -> Self {
        Self::Custom(Box::new(v))
    }

    /// 将 `Option<T>` 映射为 `Value`：`None => Null`，`Some(v) => v.into()`。
    pub fn from_option<T: Into<Value>>(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Self::Null,
        }
    }

    pub fn is_nullish(&self) -> bool {
        matches!(self, Self::Undefined | Self::Null)
    }

    /// 值的种类名，用于错误信息。
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::I64(_) | Self::U64(_) | Self::F64(_) => "number",
            Self::String(_) => "string",
            Self::Date(_) => "date",
            Self::Raw(_) => "raw",
            Self::List(_) => "list",
            Self::Map(_) => "map",
            Self::Function(_) => "function",
            Self::Custom(_) => "custom",
            Self::Object(_) => "object",
        }
    }

    /// 值的“自然字符串形式”：标识符编码处理非字符串、以及 stringify 对象时使用。
    pub fn to_natural_string(&self) -> String {
        match self {
            Self::Undefined | Self::Null => "null".to_string(),
            Self::Bool(b) => b.to_string(),
            Self::I64(n) => n.to_string(),
            Self::U64(n) => n.to_string(),
            Self::F64(n) => number_to_string(*n),
            Self::String(s) => s.to_string(),
            Self::Date(d) => d
                .format_in(&TimeZone::Local)
                .unwrap_or_else(|| "Invalid Date".to_string()),
            Self::Raw(r) => r.sql.clone(),
            Self::List(items) => {
                let parts: Vec<String> = items.iter().map(Value::to_natural_string).collect();
                format!("[{}]", parts.join(", "))
            }
            Self::Map(m) => {
                let parts: Vec<String> = m
                    .iter()
                    .map(|(k, v)| format!("{k}: {}", v.to_natural_string()))
                    .collect();
                format!("{{{}}}", parts.join(", "))
            }
            Self::Function(name) => name.to_string(),
            Self::Custom(c) => c.to_sql_string(),
            Self::Object(s) => s.to_string(),
        }
    }
}

/// 数字的十进制形式：`-0` 输出 `0`，非有限值输出 `NaN` / `Infinity` / `-Infinity`。
pub(crate) fn number_to_string(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        (if n > 0.0 { "Infinity" } else { "-Infinity" }).to_string()
    } else if n == 0.0 {
        "0".to_string()
    } else {
        n.to_string()
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => f.write_str("Undefined"),
            Self::Null => f.write_str("Null"),
            Self::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
            Self::I64(v) => f.debug_tuple("I64").field(v).finish(),
            Self::U64(v) => f.debug_tuple("U64").field(v).finish(),
            Self::F64(v) => f.debug_tuple("F64").field(v).finish(),
            Self::String(v) => f.debug_tuple("String").field(v).finish(),
            Self::Date(v) => f.debug_tuple("Date").field(v).finish(),
            Self::Raw(v) => f.debug_tuple("Raw").field(v).finish(),
            Self::List(v) => f.debug_tuple("List").field(v).finish(),
            Self::Map(v) => f.debug_tuple("Map").field(v).finish(),
            Self::Function(v) => f.debug_tuple("Function").field(v).finish(),
            Self::Custom(v) => f.debug_tuple("Custom").field(v).finish(),
            Self::Object(v) => f.debug_tuple("Object").field(v).finish(),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Undefined, Self::Undefined) | (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::I64(a), Self::I64(b)) => a == b,
            (Self::U64(a), Self::U64(b)) => a == b,
            (Self::F64(a), Self::F64(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Date(a), Self::Date(b)) => a == b,
            (Self::Raw(a), Self::Raw(b)) => a == b,
            (Self::List(a), Self::List(b)) => a == b,
            (Self::Map(a), Self::Map(b)) => a == b,
            (Self::Function(a), Self::Function(b)) => a == b,
            (Self::Object(a), Self::Object(b)) => a == b,
            (Self::Custom(_), _) | (_, Self::Custom(_)) => false,
            _ => false,
        }
    }
}

/// 日期值；`None` 表示无效日期（编码为 `NULL`）。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SqlDate(Option<OffsetDateTime>);

impl SqlDate {
    pub fn new(dt: OffsetDateTime) -> Self {
        Self(Some(dt))
    }

    pub fn invalid() -> Self {
        Self(None)
    }

    /// 以 Unix 毫秒时间戳构造（UTC）；NaN、无穷或超出范围时得到无效日期。
    pub fn from_unix_millis(ms: f64) -> Self {
        if !ms.is_finite() {
            return Self::invalid();
        }
        let nanos = (ms.trunc() as i128).checked_mul(1_000_000);
        Self(nanos.and_then(|n| OffsetDateTime::from_unix_timestamp_nanos(n).ok()))
    }

    /// 解析 RFC 3339 字符串；解析失败时得到无效日期。
    pub fn parse_rfc3339(s: &str) -> Self {
        Self(OffsetDateTime::parse(s, &Rfc3339).ok())
    }

    pub fn is_valid(&self) -> bool {
        self.0.is_some()
    }

    pub fn get(&self) -> Option<OffsetDateTime> {
        self.0
    }

    /// 把时刻换算到 `tz` 后，格式化为 `YYYY-MM-DD HH:MM:SS.mmm`（不带引号）。
    pub(crate) fn format_in(&self, tz: &TimeZone) -> Option<String> {
        let wall: PrimitiveDateTime = tz.wall_clock(self.0?)?;
        wall.format(DATE_FORMAT).ok()
    }
}

impl From<OffsetDateTime> for SqlDate {
    fn from(v: OffsetDateTime) -> Self {
        Self::new(v)
    }
}

/// 保持插入顺序的 字符串 → 值 映射。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SqlMap {
    entries: Vec<(String, Value)>,
}

impl SqlMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// 插入一个条目；key 已存在时原地替换（位置不变）。
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for SqlMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut m = SqlMap::new();
        for (k, v) in iter {
            m.insert(k, v);
        }
        m
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Self::Null
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Self::I64(v as i64)
                }
            }
        )*
    };
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Self::U64(v as u64)
                }
            }
        )*
    };
}

impl_from_signed!(i8, i16, i32, i64);
impl_from_unsigned!(u8, u16, u32, u64);

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Self::F64(v as f64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::F64(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(Cow::Owned(v))
    }
}

impl From<&'static str> for Value {
    fn from(v: &'static str) -> Self {
        Self::String(Cow::Borrowed(v))
    }
}

impl From<OffsetDateTime> for Value {
    fn from(v: OffsetDateTime) -> Self {
        Self::Date(SqlDate::new(v))
    }
}

impl From<SqlDate> for Value {
    fn from(v: SqlDate) -> Self {
        Self::Date(v)
    }
}

impl From<Raw> for Value {
    fn from(v: Raw) -> Self {
        Self::Raw(v)
    }
}

impl From<SqlMap> for Value {
    fn from(v: SqlMap) -> Self {
        Self::Map(v)
    }
}

impl From<Box<dyn ToSqlString>> for Value {
    fn from(v: Box<dyn ToSqlString>) -> Self {
        Self::Custom(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        Self::from_option(v)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Self::List(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(v: [T; N]) -> Self {
        Self::List(v.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use time::macros::datetime;

    #[test]
    fn from_option_some_and_none() {
        assert_eq!(Value::from_option(Some(123_i64)), Value::I64(123));
        assert_eq!(Value::from_option::<i64>(None), Value::Null);
    }

    #[test]
    fn from_unit_is_null() {
        let v: Value = ().into();
        assert_eq!(v, Value::Null);
    }

    #[test]
    fn from_vec_and_array_is_list() {
        let v: Value = vec![1_i64, 2].into();
        assert_eq!(v, Value::List(vec![Value::I64(1), Value::I64(2)]));
        let v: Value = ["a", "b"].into();
        assert_eq!(v, Value::List(vec!["a".into(), "b".into()]));
    }

    #[test]
    fn number_forms() {
        assert_eq!(number_to_string(5.0), "5");
        assert_eq!(number_to_string(1.5), "1.5");
        assert_eq!(number_to_string(-0.0), "0");
        assert_eq!(number_to_string(f64::NAN), "NaN");
        assert_eq!(number_to_string(f64::INFINITY), "Infinity");
        assert_eq!(number_to_string(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn sql_date_from_unix_millis() {
        let d = SqlDate::from_unix_millis(1_336_390_923_002.0);
        assert_eq!(d.get(), Some(datetime!(2012-05-07 11:42:03.002 UTC)));
        assert!(!SqlDate::from_unix_millis(f64::NAN).is_valid());
        assert!(!SqlDate::from_unix_millis(1e300).is_valid());
    }

    #[test]
    fn sql_date_parse_rfc3339() {
        let d = SqlDate::parse_rfc3339("2012-05-07T11:42:03.002Z");
        assert_eq!(d.get(), Some(datetime!(2012-05-07 11:42:03.002 UTC)));
        assert!(!SqlDate::parse_rfc3339("not a date").is_valid());
    }

    #[test]
    fn sql_map_keeps_insert_order_and_replaces_in_place() {
        let m = SqlMap::new().with("b", 1_i64).with("a", 2_i64).with("b", 3_i64);
        let keys: Vec<&str> = m.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["b", "a"]);
        assert_eq!(m.get("b"), Some(&Value::I64(3)));
        assert_eq!(m.len(), 2);
    }

    #[test]
    fn natural_strings() {
        assert_eq!(Value::Null.to_natural_string(), "null");
        assert_eq!(Value::from(42_i64).to_natural_string(), "42");
        assert_eq!(Value::from(true).to_natural_string(), "true");
        assert_eq!(Value::from(vec![1_i64, 2]).to_natural_string(), "[1, 2]");
        let m = SqlMap::new().with("nested", true);
        assert_eq!(Value::from(m).to_natural_string(), "{nested: true}");
        assert_eq!(
            Value::from(SqlDate::invalid()).to_natural_string(),
            "Invalid Date"
        );
        assert_eq!(Value::object("foo").to_natural_string(), "foo");
    }
}
