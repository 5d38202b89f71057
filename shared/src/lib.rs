//! 前后端共享的领域模型与接口协议
//!
//! 这里只有数据定义，没有任何 I/O。

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub mod date;
pub mod protocol;
pub mod validation;

pub use date::Timestamp;

// =========================================================
// 常量定义 (Constants)
// =========================================================

/// 业务成功码
pub const CODE_SUCCESS: i64 = 0;

/// 用户资料：不做任何结构约束的键值记录
pub type UserProfile = serde_json::Map<String, Value>;

// =========================================================
// 统一响应包装 (Envelope)
// =========================================================

/// 后端统一响应结构
///
/// `code` 为 0 表示业务成功，其余（包括缺失）都视为业务失败。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T = Value> {
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default, alias = "msg")]
    pub message: Option<String>,
    #[serde(default)]
    pub data: T,
}

impl<T> Envelope<T> {
    pub fn is_success(&self) -> bool {
        self.code == Some(CODE_SUCCESS)
    }

    /// 可展示给用户的失败消息（空白消息视为缺失）
    pub fn failure_message(&self) -> Option<&str> {
        self.message
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
    }
}

impl<T: Default> Envelope<T> {
    pub fn success(data: T) -> Self {
        Self {
            code: Some(CODE_SUCCESS),
            message: Some("Operation successful".to_string()),
            data,
        }
    }

    pub fn error(code: i64, message: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            message: Some(message.into()),
            data: T::default(),
        }
    }
}

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// 文章发布状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ArticleState {
    Published,
    #[default]
    Draft,
}

impl ArticleState {
    pub const ALL: [ArticleState; 2] = [ArticleState::Published, ArticleState::Draft];

    pub fn as_str(&self) -> &'static str {
        match self {
            ArticleState::Published => "Published",
            ArticleState::Draft => "Draft",
        }
    }

    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s {
            "Published" => Some(ArticleState::Published),
            "Draft" => Some(ArticleState::Draft),
            _ => None,
        }
    }
}

impl std::fmt::Display for ArticleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 文章分类
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub category_name: String,
    pub category_alias: String,
    #[serde(default, skip_serializing)]
    pub create_user: Option<i64>,
    #[serde(default, skip_serializing)]
    pub create_time: Option<Timestamp>,
    #[serde(default, skip_serializing)]
    pub update_time: Option<Timestamp>,
}

/// 文章
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: String,
    pub content: String,
    pub cover_img: String,
    pub state: ArticleState,
    pub category_id: i64,
    #[serde(default, skip_serializing)]
    pub create_user: Option<i64>,
    #[serde(default, skip_serializing)]
    pub create_time: Option<Timestamp>,
    #[serde(default, skip_serializing)]
    pub update_time: Option<Timestamp>,
}

/// 用户
///
/// 密码永远不会出现在响应中。
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub user_pic: Option<String>,
    #[serde(default, skip_serializing)]
    pub create_time: Option<Timestamp>,
    #[serde(default, skip_serializing)]
    pub update_time: Option<Timestamp>,
}

impl User {
    /// 按 `User` 结构解读资料；字段不全时返回 None
    pub fn from_profile(profile: &UserProfile) -> Option<Self> {
        serde_json::from_value(Value::Object(profile.clone())).ok()
    }

    /// 界面显示名：优先昵称，其次用户名
    pub fn display_name(&self) -> &str {
        self.nickname
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&self.username)
    }
}

/// 分页结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageBean<T> {
    #[serde(default)]
    pub total: u64,
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

impl<T> Default for PageBean<T> {
    fn default() -> Self {
        Self {
            total: 0,
            items: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_envelope_success_code() {
        let env: Envelope = serde_json::from_value(json!({
            "code": 0, "message": "Operation successful", "data": { "id": 1 }
        }))
        .unwrap();
        assert!(env.is_success());
        assert_eq!(env.data, json!({ "id": 1 }));
    }

    #[test]
    fn test_envelope_missing_code_is_failure() {
        let env: Envelope = serde_json::from_value(json!({ "data": 1 })).unwrap();
        assert_eq!(env.code, None);
        assert!(!env.is_success());
    }

    #[test]
    fn test_envelope_accepts_msg_alias() {
        let env: Envelope = serde_json::from_value(json!({ "code": 1, "msg": "User exist" })).unwrap();
        assert_eq!(env.failure_message(), Some("User exist"));
        assert_eq!(env.data, Value::Null);
    }

    #[test]
    fn test_envelope_blank_message_is_missing() {
        let env: Envelope = Envelope::error(1, "   ");
        assert_eq!(env.failure_message(), None);
    }

    #[test]
    fn test_category_wire_shape() {
        let cat: Category = serde_json::from_value(json!({
            "id": 3,
            "categoryName": "Rust",
            "categoryAlias": "rs",
            "createUser": 1,
            "createTime": "2024-10-24 08:30:00",
            "updateTime": "2024-10-25 09:00:00"
        }))
        .unwrap();
        assert_eq!(cat.id, Some(3));
        assert_eq!(cat.create_time.unwrap().to_string(), "2024-10-24 08:30:00");

        // 时间与创建者由服务端维护，不回传
        let out = serde_json::to_value(&cat).unwrap();
        assert_eq!(
            out,
            json!({ "id": 3, "categoryName": "Rust", "categoryAlias": "rs" })
        );
    }

    #[test]
    fn test_article_iso_timestamps() {
        let article: Article = serde_json::from_value(json!({
            "id": 9,
            "title": "Hello",
            "content": "<p>body</p>",
            "coverImg": "https://img.example.com/a.png",
            "state": "Published",
            "categoryId": 3,
            "createTime": "2024-10-24T08:30:00"
        }))
        .unwrap();
        assert_eq!(article.state, ArticleState::Published);
        assert!(article.update_time.is_none());
    }

    #[test]
    fn test_user_display_name() {
        let mut user = User {
            id: 1,
            username: "maojie".into(),
            ..Default::default()
        };
        assert_eq!(user.display_name(), "maojie");
        user.nickname = Some("MJ".into());
        assert_eq!(user.display_name(), "MJ");
    }
}
