use crate::error::Error as RfdErr;
pub type Result<T> = std::result::Result<T, RfdErr>;
