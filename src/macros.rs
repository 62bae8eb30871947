//! 宏集合：不定长参数的便捷写法，无需手动创建 `Vec<Value>`。

/// 把任意个 `Into<Value>` 收集为 `Vec<Value>`。
#[macro_export]
macro_rules! sql_args {
    () => {
        Vec::<$crate::Value>::new()
    };
    ($($value:expr),+ $(,)?) => {{
        let mut values = Vec::<$crate::Value>::new();
        $(
            values.push($crate::Value::from($value));
        )*
        values
    }};
}

/// `format_sql!("SELECT * FROM ?? WHERE id = ?", "users", 42)`。
#[macro_export]
macro_rules! format_sql {
    ($template:expr $(,)?) => {
        $crate::format($template, $crate::FormatArgs::None)
    };
    ($template:expr, $($value:expr),+ $(,)?) => {
        $crate::format($template, $crate::sql_args!($($value),+))
    };
}
