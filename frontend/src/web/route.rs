//! 路由定义模块 - 领域模型
//!
//! 这是纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 定义了应用的所有路由及其属性。

use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AppRoute {
    /// 登录 / 注册页面
    #[default]
    Login,
    /// 文章分类管理 (需要认证)
    ArticleCategory,
    /// 文章管理 (需要认证，也是 `/` 的重定向目标)
    ArticleManage,
    /// 更换头像 (需要认证)
    UserAvatar,
    /// 基本资料 (需要认证)
    UserInfo,
    /// 重置密码 (需要认证)
    UserResetPassword,
    /// 页面未找到
    NotFound,
}

impl AppRoute {
    /// 控制台外壳内的所有页面，按菜单顺序
    pub const SHELL: [AppRoute; 5] = [
        AppRoute::ArticleCategory,
        AppRoute::ArticleManage,
        AppRoute::UserInfo,
        AppRoute::UserAvatar,
        AppRoute::UserResetPassword,
    ];

    /// 将 URL path 解析为路由枚举
    ///
    /// `/` 解析为文章管理，路由服务会把地址栏替换为规范路径。
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = if path.len() > 1 {
            path.trim_end_matches('/')
        } else {
            path
        };
        match path {
            "/login" => Self::Login,
            "/" | "" | "/article/manage" => Self::ArticleManage,
            "/article/category" => Self::ArticleCategory,
            "/user/avatar" => Self::UserAvatar,
            "/user/info" => Self::UserInfo,
            "/user/resetPassword" => Self::UserResetPassword,
            _ => Self::NotFound,
        }
    }

    /// 获取路由对应的规范 URL path
    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::ArticleCategory => "/article/category",
            Self::ArticleManage => "/article/manage",
            Self::UserAvatar => "/user/avatar",
            Self::UserInfo => "/user/info",
            Self::UserResetPassword => "/user/resetPassword",
            Self::NotFound => "/404",
        }
    }

    /// 菜单中显示的标题
    pub fn title(&self) -> &'static str {
        match self {
            Self::Login => "Sign in",
            Self::ArticleCategory => "Article Categories",
            Self::ArticleManage => "Article Management",
            Self::UserAvatar => "Change Avatar",
            Self::UserInfo => "Basic Profile",
            Self::UserResetPassword => "Reset Password",
            Self::NotFound => "Not Found",
        }
    }

    /// 是否渲染在控制台外壳（侧边菜单 + 顶栏）中
    pub fn in_shell(&self) -> bool {
        Self::SHELL.contains(self)
    }

    /// **核心守卫逻辑：定义该路由是否需要认证**
    pub fn requires_auth(&self) -> bool {
        self.in_shell()
    }

    /// 定义已认证用户是否应该离开此路由（如登录页）
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::Login)
    }

    /// 获取认证失败时的重定向目标
    pub fn auth_failure_redirect() -> Self {
        Self::Login
    }

    /// 获取认证成功时的重定向目标（从登录页）
    pub fn auth_success_redirect() -> Self {
        Self::ArticleManage
    }

    /// 守卫：给定认证状态，返回实际应该进入的路由
    pub fn guard(self, is_authenticated: bool) -> Self {
        if self.requires_auth() && !is_authenticated {
            Self::auth_failure_redirect()
        } else if self.should_redirect_when_authenticated() && is_authenticated {
            Self::auth_success_redirect()
        } else {
            self
        }
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_resolves_to_article_manage() {
        assert_eq!(AppRoute::from_path("/"), AppRoute::ArticleManage);
        assert_eq!(AppRoute::from_path("/").to_path(), "/article/manage");
    }

    #[test]
    fn test_every_route_round_trips() {
        for route in AppRoute::SHELL.into_iter().chain([AppRoute::Login]) {
            assert_eq!(AppRoute::from_path(route.to_path()), route);
        }
    }

    #[test]
    fn test_query_and_trailing_slash_are_ignored() {
        assert_eq!(AppRoute::from_path("/user/info/"), AppRoute::UserInfo);
        assert_eq!(AppRoute::from_path("/login?from=x"), AppRoute::Login);
        assert_eq!(AppRoute::from_path("/nope"), AppRoute::NotFound);
    }

    #[test]
    fn test_guard_redirects() {
        assert_eq!(AppRoute::UserInfo.guard(false), AppRoute::Login);
        assert_eq!(AppRoute::UserInfo.guard(true), AppRoute::UserInfo);
        assert_eq!(AppRoute::Login.guard(true), AppRoute::ArticleManage);
        assert_eq!(AppRoute::Login.guard(false), AppRoute::Login);
        // 404 对任何人都可见
        assert_eq!(AppRoute::NotFound.guard(false), AppRoute::NotFound);
    }
}
