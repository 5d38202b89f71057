use crate::validation::{self, ValidationResult};
use crate::{Article, ArticleState, Category, PageBean, UserProfile};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the request struct is carried on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// Nothing is sent besides the path.
    None,
    /// Fields become the URL query string.
    Query,
    /// `application/x-www-form-urlencoded` body.
    Form,
    /// JSON body.
    Json,
    /// `multipart/form-data` body carrying the request's [`FilePart`].
    Multipart,
}

/// One file inside a `multipart/form-data` body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilePart {
    /// Form field name the backend binds the file to.
    pub field: String,
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl FilePart {
    pub fn new(
        field: impl Into<String>,
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            field: field.into(),
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
pub trait ApiRequest: Serialize {
    /// The payload type carried in the envelope's `data` on success.
    type Response: DeserializeOwned;
    /// The URL path, relative to the API base.
    const PATH: &'static str;
    /// The HTTP method.
    const METHOD: HttpMethod;
    /// How the request fields are encoded.
    const ENCODING: Encoding;

    /// Local checks run before anything is sent.
    fn validate(&self) -> ValidationResult {
        Ok(())
    }

    /// The file sent with [`Encoding::Multipart`].
    fn file(&self) -> Option<&FilePart> {
        None
    }
}

// =========================================================
// 用户 (User)
// =========================================================

/// Register a new account
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

impl ApiRequest for RegisterRequest {
    type Response = ();
    const PATH: &'static str = "/user/register";
    const METHOD: HttpMethod = HttpMethod::Post;
    const ENCODING: Encoding = Encoding::Form;

    fn validate(&self) -> ValidationResult {
        validation::username(&self.username)?;
        validation::password("password", &self.password)
    }
}

/// Sign in; the payload is the session token
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl ApiRequest for LoginRequest {
    type Response = String;
    const PATH: &'static str = "/user/login";
    const METHOD: HttpMethod = HttpMethod::Post;
    const ENCODING: Encoding = Encoding::Form;

    fn validate(&self) -> ValidationResult {
        validation::username(&self.username)?;
        validation::password("password", &self.password)
    }
}

impl From<RegisterRequest> for LoginRequest {
    fn from(req: RegisterRequest) -> Self {
        Self {
            username: req.username,
            password: req.password,
        }
    }
}

/// Fetch the signed-in user's profile
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserInfoRequest;

impl ApiRequest for UserInfoRequest {
    type Response = UserProfile;
    const PATH: &'static str = "/user/userInfo";
    const METHOD: HttpMethod = HttpMethod::Get;
    const ENCODING: Encoding = Encoding::None;
}

/// Update nickname and email
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub id: i64,
    pub nickname: String,
    pub email: String,
}

impl ApiRequest for UpdateUserRequest {
    // 后端把提示文案放在 data 里
    type Response = Option<String>;
    const PATH: &'static str = "/user/update";
    const METHOD: HttpMethod = HttpMethod::Put;
    const ENCODING: Encoding = Encoding::Json;

    fn validate(&self) -> ValidationResult {
        validation::nickname(&self.nickname)?;
        validation::email(&self.email)
    }
}

/// Replace the avatar URL
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAvatarRequest {
    pub avatar_url: String,
}

impl ApiRequest for UpdateAvatarRequest {
    type Response = Option<String>;
    const PATH: &'static str = "/user/updateAvatar";
    const METHOD: HttpMethod = HttpMethod::Patch;
    const ENCODING: Encoding = Encoding::Form;

    fn validate(&self) -> ValidationResult {
        validation::url("avatarUrl", &self.avatar_url)
    }
}

/// Change password; the backend revokes the current token on success
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResetPasswordRequest {
    pub old_pwd: String,
    pub new_pwd: String,
    pub re_pwd: String,
}

impl ApiRequest for ResetPasswordRequest {
    type Response = ();
    const PATH: &'static str = "/user/updatePwd";
    const METHOD: HttpMethod = HttpMethod::Patch;
    const ENCODING: Encoding = Encoding::Json;

    fn validate(&self) -> ValidationResult {
        validation::required("old_pwd", &self.old_pwd)?;
        validation::password("new_pwd", &self.new_pwd)?;
        validation::required("re_pwd", &self.re_pwd)?;
        validation::matches("re_pwd", &self.new_pwd, &self.re_pwd)
    }
}

// =========================================================
// 分类 (Category)
// =========================================================

/// List all categories of the signed-in user
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListCategoriesRequest;

impl ApiRequest for ListCategoriesRequest {
    type Response = Vec<Category>;
    const PATH: &'static str = "/category";
    const METHOD: HttpMethod = HttpMethod::Get;
    const ENCODING: Encoding = Encoding::None;
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryDetailRequest {
    pub id: i64,
}

impl ApiRequest for CategoryDetailRequest {
    type Response = Category;
    const PATH: &'static str = "/category/detail";
    const METHOD: HttpMethod = HttpMethod::Get;
    const ENCODING: Encoding = Encoding::Query;
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCategoryRequest {
    pub category_name: String,
    pub category_alias: String,
}

impl ApiRequest for AddCategoryRequest {
    type Response = ();
    const PATH: &'static str = "/category";
    const METHOD: HttpMethod = HttpMethod::Post;
    const ENCODING: Encoding = Encoding::Json;

    fn validate(&self) -> ValidationResult {
        validation::required("categoryName", &self.category_name)?;
        validation::required("categoryAlias", &self.category_alias)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCategoryRequest {
    pub id: i64,
    pub category_name: String,
    pub category_alias: String,
}

impl ApiRequest for UpdateCategoryRequest {
    type Response = ();
    const PATH: &'static str = "/category";
    const METHOD: HttpMethod = HttpMethod::Put;
    const ENCODING: Encoding = Encoding::Json;

    fn validate(&self) -> ValidationResult {
        validation::required("categoryName", &self.category_name)?;
        validation::required("categoryAlias", &self.category_alias)
    }
}

impl From<&Category> for UpdateCategoryRequest {
    fn from(c: &Category) -> Self {
        Self {
            id: c.id.unwrap_or_default(),
            category_name: c.category_name.clone(),
            category_alias: c.category_alias.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteCategoryRequest {
    pub id: i64,
}

impl ApiRequest for DeleteCategoryRequest {
    type Response = ();
    const PATH: &'static str = "/category";
    const METHOD: HttpMethod = HttpMethod::Delete;
    const ENCODING: Encoding = Encoding::Query;
}

// =========================================================
// 文章 (Article)
// =========================================================

/// Paged article list with optional filters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListArticlesRequest {
    pub page_num: u32,
    pub page_size: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<ArticleState>,
}

impl Default for ListArticlesRequest {
    fn default() -> Self {
        Self {
            page_num: 1,
            page_size: 3,
            category_id: None,
            state: None,
        }
    }
}

impl ApiRequest for ListArticlesRequest {
    type Response = PageBean<Article>;
    const PATH: &'static str = "/article";
    const METHOD: HttpMethod = HttpMethod::Get;
    const ENCODING: Encoding = Encoding::Query;
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArticleDetailRequest {
    pub id: i64,
}

impl ApiRequest for ArticleDetailRequest {
    type Response = Article;
    const PATH: &'static str = "/article/detail";
    const METHOD: HttpMethod = HttpMethod::Get;
    const ENCODING: Encoding = Encoding::Query;
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddArticleRequest {
    pub title: String,
    pub content: String,
    pub cover_img: String,
    pub state: ArticleState,
    pub category_id: i64,
}

fn validate_article(title: &str, content: &str, cover_img: &str) -> ValidationResult {
    validation::title(title)?;
    validation::required("content", content)?;
    validation::url("coverImg", cover_img)
}

impl ApiRequest for AddArticleRequest {
    type Response = ();
    const PATH: &'static str = "/article";
    const METHOD: HttpMethod = HttpMethod::Post;
    const ENCODING: Encoding = Encoding::Json;

    fn validate(&self) -> ValidationResult {
        validate_article(&self.title, &self.content, &self.cover_img)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateArticleRequest {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub cover_img: String,
    pub state: ArticleState,
    pub category_id: i64,
}

impl ApiRequest for UpdateArticleRequest {
    type Response = Option<String>;
    const PATH: &'static str = "/article";
    const METHOD: HttpMethod = HttpMethod::Put;
    const ENCODING: Encoding = Encoding::Json;

    fn validate(&self) -> ValidationResult {
        validate_article(&self.title, &self.content, &self.cover_img)
    }
}

impl From<&Article> for UpdateArticleRequest {
    fn from(a: &Article) -> Self {
        Self {
            id: a.id.unwrap_or_default(),
            title: a.title.clone(),
            content: a.content.clone(),
            cover_img: a.cover_img.clone(),
            state: a.state,
            category_id: a.category_id,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteArticleRequest {
    pub id: i64,
}

impl ApiRequest for DeleteArticleRequest {
    type Response = ();
    const PATH: &'static str = "/article";
    const METHOD: HttpMethod = HttpMethod::Delete;
    const ENCODING: Encoding = Encoding::Query;
}

// =========================================================
// 文件上传 (Upload)
// =========================================================

/// Upload a file; the backend stores it and answers with the hosted URL
#[derive(Debug, Clone, Default, Serialize)]
pub struct UploadRequest {
    #[serde(skip)]
    pub file: FilePart,
}

impl UploadRequest {
    /// Multipart field name the backend reads
    pub const FIELD: &'static str = "file";

    /// An empty `content_type` (the browser could not tell) becomes `application/octet-stream`.
    pub fn new(file_name: impl Into<String>, content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        let mut content_type = content_type.into();
        if content_type.is_empty() {
            content_type = "application/octet-stream".to_string();
        }
        Self {
            file: FilePart::new(Self::FIELD, file_name, content_type, bytes),
        }
    }
}

impl ApiRequest for UploadRequest {
    type Response = String;
    const PATH: &'static str = "/upload";
    const METHOD: HttpMethod = HttpMethod::Post;
    const ENCODING: Encoding = Encoding::Multipart;

    fn validate(&self) -> ValidationResult {
        validation::upload_file(&self.file.file_name, self.file.bytes.len())
    }

    fn file(&self) -> Option<&FilePart> {
        Some(&self.file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_list_articles_skips_empty_filters() {
        let req = ListArticlesRequest::default();
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({ "pageNum": 1, "pageSize": 3 })
        );
    }

    #[test]
    fn test_reset_password_requires_matching_confirmation() {
        let req = ResetPasswordRequest {
            old_pwd: "oldpass".into(),
            new_pwd: "newpass1".into(),
            re_pwd: "newpass2".into(),
        };
        let err = req.validate().unwrap_err();
        assert_eq!(err.field, "re_pwd");
    }

    #[test]
    fn test_update_article_from_existing() {
        let article = Article {
            id: Some(4),
            title: "t".into(),
            content: "c".into(),
            cover_img: "https://x/y.png".into(),
            state: ArticleState::Published,
            category_id: 2,
            ..Default::default()
        };
        let req = UpdateArticleRequest::from(&article);
        assert_eq!(req.id, 4);
        assert!(req.validate().is_ok());
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({
                "id": 4,
                "title": "t",
                "content": "c",
                "coverImg": "https://x/y.png",
                "state": "Published",
                "categoryId": 2
            })
        );
    }

    #[test]
    fn test_endpoint_metadata() {
        assert_eq!(LoginRequest::PATH, "/user/login");
        assert_eq!(LoginRequest::ENCODING, Encoding::Form);
        assert_eq!(UpdateAvatarRequest::METHOD, HttpMethod::Patch);
        assert_eq!(DeleteCategoryRequest::ENCODING, Encoding::Query);
        assert_eq!(UploadRequest::ENCODING, Encoding::Multipart);
    }

    #[test]
    fn test_upload_requires_named_non_empty_file() {
        let ok = UploadRequest::new("cover.png", "image/png", vec![1, 2, 3]);
        assert!(ok.validate().is_ok());
        assert_eq!(ok.file().map(|f| f.field.as_str()), Some("file"));

        let empty = UploadRequest::new("cover.png", "image/png", Vec::new());
        assert_eq!(empty.validate().unwrap_err().field, "file");

        // 后端按扩展名生成存储文件名
        let no_ext = UploadRequest::new("cover", "image/png", vec![1]);
        assert_eq!(no_ext.validate().unwrap_err().field, "file");

        let untyped = UploadRequest::new("notes.bin", "", vec![1]);
        assert_eq!(untyped.file.content_type, "application/octet-stream");
    }
}
