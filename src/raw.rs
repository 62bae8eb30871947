//! Raw：原样拼入 SQL 的片段。

use crate::error::SqlStringError;
use crate::value::Value;
use crate::valuer::ToSqlString;
use std::fmt;

/// 标记为原样输出（不会加引号，也不会转义）。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Raw {
    pub(crate) sql: String,
}

impl Raw {
    pub fn new(sql: impl Into<String>) -> Self {
        Self { sql: sql.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.sql
    }

    pub fn into_string(self) -> String {
        self.sql
    }
}

impl ToSqlString for Raw {
    fn to_sql_string(&self) -> String {
        self.sql.clone()
    }
}

impl fmt::Display for Raw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sql)
    }
}

impl TryFrom<Value> for Raw {
    type Error = SqlStringError;

    fn try_from(v: Value) -> Result<Self, Self::Error> {
        match v {
            Value::String(s) => Ok(Raw::new(s.into_owned())),
            Value::Undefined => Err(SqlStringError::InvalidArgument(
                "raw sql is missing".to_string(),
            )),
            other => Err(SqlStringError::InvalidArgument(format!(
                "raw sql must be a string, got {}",
                other.kind()
            ))),
        }
    }
}

/// 从动态值构造 `Raw`；只接受字符串，其余（包括缺省值）立即报错。
pub fn raw(sql: impl Into<Value>) -> Result<Raw, SqlStringError> {
    Raw::try_from(sql.into())
}
