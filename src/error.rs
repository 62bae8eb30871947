//! 错误类型。
//!
//! 编码与插值本身是全函数（不会失败）；只有构造 `Raw` 时会校验入参。

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum SqlStringError {
    #[error("sqlstring invalid argument: {0}")]
    InvalidArgument(String),
}
