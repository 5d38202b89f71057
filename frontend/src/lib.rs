//! BackControl 控制台前端
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web::route`: 路由定义（领域模型）
//! - `web::router`: 路由服务（核心引擎）
//! - `web::toast`: 全局提示
//! - `auth`: 会话状态与请求流水线的装配
//! - `components`: UI 组件层

mod auth;
mod components {
    pub mod article;
    pub mod category;
    mod feedback;
    mod icons;
    pub mod layout;
    pub mod login;
    pub mod reset_password;
    mod upload;
    pub mod user_avatar;
    pub mod user_info;
}

use crate::auth::SessionSignals;
use crate::components::article::ArticlePage;
use crate::components::category::CategoryPage;
use crate::components::layout::Layout;
use crate::components::login::LoginPage;
use crate::components::reset_password::ResetPasswordPage;
use crate::components::user_avatar::UserAvatarPage;
use crate::components::user_info::UserInfoPage;

use leptos::prelude::*;

// 原生 Web API 封装模块
// 此模块提供对浏览器原生 API 的轻量级封装，替代 gloo-* 系列 crate，
// 以减小 WASM 二进制体积。
pub(crate) mod web {
    mod dialog;
    pub mod file;
    mod http;
    pub mod route;
    pub mod router;
    mod storage;
    pub mod toast;

    pub use dialog::confirm;
    pub use http::FetchHttpClient;
    pub use storage::LocalStorage;
}

use web::route::AppRoute;
use web::router::{RouterOutlet, provide_router};
use web::toast::{ToastService, Toaster};

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。外壳内的页面只渲染内容区。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::ArticleCategory => view! { <CategoryPage /> }.into_any(),
        AppRoute::ArticleManage => view! { <ArticlePage /> }.into_any(),
        AppRoute::UserInfo => view! { <UserInfoPage /> }.into_any(),
        AppRoute::UserAvatar => view! { <UserAvatarPage /> }.into_any(),
        AppRoute::UserResetPassword => view! { <ResetPasswordPage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Page not found"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 全局提示
    let toasts = ToastService::new();
    provide_context(toasts);

    // 2. 从 LocalStorage 恢复会话
    let session = SessionSignals::load();

    // 3. 获取认证状态信号，用于注入路由服务（解耦！）
    let router = provide_router(session.is_authenticated_signal());

    // 4. 组装请求流水线：401 时清空会话并跳转登录页
    let auth_ctx = session.connect(toasts, router);
    provide_context(auth_ctx);

    // 外壳只在进入/离开控制台时重建，切换菜单只替换内容区
    let in_shell = Memo::new(move |_| router.current_route().get().in_shell());

    view! {
        <Toaster />
        {move || if in_shell.get() {
            view! {
                <Layout>
                    <RouterOutlet matcher=route_matcher />
                </Layout>
            }
            .into_any()
        } else {
            view! { <RouterOutlet matcher=route_matcher /> }.into_any()
        }}
    }
}
