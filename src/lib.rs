//! halo-sqlstring：把值编码为 T-SQL 字面量 / 方括号标识符，并按 `?` / `??` 占位符拼接 SQL。
//!
//! ```
//! use halo_sqlstring::{format, sql_args};
//!
//! let sql = format("SELECT * FROM ?? WHERE id = ?", sql_args!["users", 42]);
//! assert_eq!(sql, "SELECT * FROM [users] WHERE id = 42");
//! ```

pub mod error;
pub mod escape;
pub mod escape_id;
#[cfg(test)]
mod escape_id_tests;
pub mod format;
pub mod macros;
pub mod raw;
pub mod timezone;
pub mod value;
pub mod valuer;

pub use crate::error::SqlStringError;
pub use crate::escape::{EscapeOptions, escape, escape_with};
pub use crate::escape_id::escape_id;
pub use crate::format::{FormatArgs, format, format_with};
pub use crate::raw::{Raw, raw};
pub use crate::timezone::{TimeZone, parse_offset};
pub use crate::value::{SqlDate, SqlMap, Value};
pub use crate::valuer::ToSqlString;

/// 便捷命名空间：允许 `use halo_sqlstring::sqlstring::{...}` 形式导入。
pub mod sqlstring {
    pub use crate::*;
}
