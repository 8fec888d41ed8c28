//! 错误类型定义

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("非法的顶点名称: {0:?}")]
    InvalidName(String),

    #[error("顶点已存在: {0}")]
    DuplicateName(String),

    #[error("顶点不存在: {0}")]
    UnknownVertex(String),

    #[error("文件首行必须为 directed 或 undirected, 实际为 {0:?}")]
    MalformedHeader(String),

    #[error("IO 错误: {0}")]
    IoError(#[from] std::io::Error),

    #[error("序列化错误: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::SerializationError(err.to_string())
    }
}
