//! 时间类型模块
//!
//! 后端使用 `LocalDateTime`（无时区）：
//! - 分类接口使用 `yyyy-MM-dd HH:mm:ss` 格式
//! - 文章、用户接口使用 ISO-8601 格式（`2024-10-24T08:30:00`，可能带小数秒）
//!
//! `Timestamp` 同时接受两种格式，统一以 `yyyy-MM-dd HH:mm:ss` 输出。

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// 统一的显示/序列化格式
pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// 可接受的解析格式（按顺序尝试）
const PARSE_FORMATS: [&str; 3] = [DISPLAY_FORMAT, "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

// =========================================================
// Timestamp - 服务端生成的本地时间
// =========================================================

/// 服务端分配的本地时间（创建时间、更新时间）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    #[inline]
    pub const fn new(inner: NaiveDateTime) -> Self {
        Self(inner)
    }

    /// 解析后端返回的时间字符串
    ///
    /// 返回 None 如果所有格式都无法匹配
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        PARSE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
            .map(Self)
    }

    #[inline]
    pub fn as_naive(&self) -> &NaiveDateTime {
        &self.0
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(inner: NaiveDateTime) -> Self {
        Self(inner)
    }
}

impl From<Timestamp> for NaiveDateTime {
    fn from(ts: Timestamp) -> Self {
        ts.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DISPLAY_FORMAT))
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Timestamp::parse(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("无法解析的时间格式: {}", raw)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_both_backend_formats() {
        let spaced = Timestamp::parse("2024-10-24 08:30:00").unwrap();
        let iso = Timestamp::parse("2024-10-24T08:30:00").unwrap();
        assert_eq!(spaced, iso);
        assert_eq!(spaced.to_string(), "2024-10-24 08:30:00");
    }

    #[test]
    fn test_parse_fractional_seconds() {
        let ts = Timestamp::parse("2024-10-24T08:30:00.123456").unwrap();
        assert_eq!(ts.to_string(), "2024-10-24 08:30:00");
    }

    #[test]
    fn test_reject_garbage() {
        assert!(Timestamp::parse("yesterday").is_none());
        let res: Result<Timestamp, _> = serde_json::from_str("\"24/10/2024\"");
        assert!(res.is_err());
    }
}
