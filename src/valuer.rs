//! ToSqlString：自带 SQL 文本的值。
//!
//! 实现者返回的文本会被原样拼入 SQL（不加引号、不转义），调用方需自行保证其安全。

/// 可以自行产出 SQL 片段的 trait。
pub trait ToSqlString: dyn_clone::DynClone + std::fmt::Debug + Send + Sync {
    fn to_sql_string(&self) -> String;
}

dyn_clone::clone_trait_object!(ToSqlString);
