//! 表单校验
//!
//! 规则与后端的参数校验保持一致，在发请求前就拦下明显不合法的输入。

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {reason}")]
pub struct ValidationError {
    pub field: &'static str,
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

pub type ValidationResult = Result<(), ValidationError>;

/// 对应后端 `^\S{min,max}$`
pub fn non_blank_len(field: &'static str, value: &str, min: usize, max: usize) -> ValidationResult {
    if value.chars().any(char::is_whitespace) {
        return Err(ValidationError::new(field, "must not contain whitespace"));
    }
    let len = value.chars().count();
    if len < min || len > max {
        return Err(ValidationError::new(
            field,
            format!("must be {} to {} characters", min, max),
        ));
    }
    Ok(())
}

pub fn required(field: &'static str, value: &str) -> ValidationResult {
    if value.trim().is_empty() {
        return Err(ValidationError::new(field, "is required"));
    }
    Ok(())
}

pub fn username(value: &str) -> ValidationResult {
    non_blank_len("username", value, 5, 16)
}

pub fn password(field: &'static str, value: &str) -> ValidationResult {
    non_blank_len(field, value, 5, 16)
}

pub fn nickname(value: &str) -> ValidationResult {
    non_blank_len("nickname", value, 1, 10)
}

pub fn title(value: &str) -> ValidationResult {
    non_blank_len("title", value, 1, 10)
}

/// 粗粒度的邮箱形状检查：`local@domain.tld`
pub fn email(value: &str) -> ValidationResult {
    let invalid = || ValidationError::new("email", "is not a valid email address");
    let (local, domain) = value.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || value.chars().any(char::is_whitespace) || domain.contains('@') {
        return Err(invalid());
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) if !host.is_empty() && !tld.is_empty() => Ok(()),
        _ => Err(invalid()),
    }
}

/// http(s) 链接
pub fn url(field: &'static str, value: &str) -> ValidationResult {
    let rest = value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"))
        .ok_or_else(|| ValidationError::new(field, "must be an http(s) URL"))?;
    if rest.is_empty() || rest.starts_with('/') || value.chars().any(char::is_whitespace) {
        return Err(ValidationError::new(field, "must be an http(s) URL"));
    }
    Ok(())
}

pub fn matches(field: &'static str, value: &str, confirmation: &str) -> ValidationResult {
    if value != confirmation {
        return Err(ValidationError::new(field, "the two entries do not match"));
    }
    Ok(())
}

/// 上传的文件：非空，且文件名带扩展名
pub fn upload_file(file_name: &str, size: usize) -> ValidationResult {
    if size == 0 {
        return Err(ValidationError::new("file", "please choose a file"));
    }
    match file_name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => Ok(()),
        _ => Err(ValidationError::new("file", "file name needs an extension")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_bounds() {
        assert!(username("abcd").is_err());
        assert!(username("abcde").is_ok());
        assert!(username("a".repeat(16).as_str()).is_ok());
        assert!(username("a".repeat(17).as_str()).is_err());
        assert!(username("abc de").is_err());
    }

    #[test]
    fn test_title_counts_chars_not_bytes() {
        assert!(title("文章标题").is_ok());
        assert!(title("").is_err());
    }

    #[test]
    fn test_email_shape() {
        assert!(email("mj@example.com").is_ok());
        assert!(email("mj@example").is_err());
        assert!(email("@example.com").is_err());
        assert!(email("mj@@example.com").is_err());
        assert!(email("m j@example.com").is_err());
    }

    #[test]
    fn test_url_scheme() {
        assert!(url("coverImg", "https://img.example.com/a.png").is_ok());
        assert!(url("coverImg", "http://x").is_ok());
        assert!(url("coverImg", "ftp://x").is_err());
        assert!(url("coverImg", "https://").is_err());
    }

    #[test]
    fn test_error_display() {
        let err = matches("re_pwd", "a", "b").unwrap_err();
        assert_eq!(err.to_string(), "re_pwd: the two entries do not match");
    }
}
