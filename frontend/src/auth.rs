//! 认证模块
//!
//! 管理会话状态（令牌与用户资料），与路由系统解耦。
//! 路由服务通过注入的认证信号来检查认证状态；
//! 持久化容器的变更通过订阅同步到信号，界面只读信号。

use std::rc::Rc;

use backcontrol::config::{VAR_AUTH_HEADER, VAR_BASE_URL, VAR_LOGIN_PATH};
use backcontrol::{ClientConfig, ClientResult, ConsoleApi, Pipeline, SessionStores};
use backcontrol_shared::User;
use backcontrol_shared::protocol::LoginRequest;
use leptos::prelude::*;

use crate::web::router::RouterService;
use crate::web::toast::ToastService;
use crate::web::{FetchHttpClient, LocalStorage};

pub type Api = ConsoleApi<FetchHttpClient>;

/// 非 Send 的服务对象，放在本地存储的 `StoredValue` 中
struct Services {
    api: Api,
    stores: SessionStores,
}

/// 认证上下文
///
/// 包含信号和服务句柄，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// 当前用户资料
    pub profile: ReadSignal<Option<User>>,
    services: StoredValue<Services, leptos::prelude::LocalStorage>,
}

impl AuthContext {
    /// API 服务句柄
    pub fn api(&self) -> Api {
        self.services.with_value(|s| s.api.clone())
    }

    fn stores(&self) -> SessionStores {
        self.services.with_value(|s| s.stores.clone())
    }
}

/// 编译期注入的配置，未设置时使用默认值
fn client_config() -> ClientConfig {
    ClientConfig::from_lookup(|name| {
        let value = match name {
            VAR_BASE_URL => option_env!("BACKCONTROL_API_BASE"),
            VAR_AUTH_HEADER => option_env!("BACKCONTROL_AUTH_HEADER"),
            VAR_LOGIN_PATH => option_env!("BACKCONTROL_LOGIN_PATH"),
            _ => None,
        };
        value.map(str::to_string)
    })
}

/// 会话信号：从持久化容器恢复，并订阅其后续变更
pub struct SessionSignals {
    stores: SessionStores,
    token: ReadSignal<String>,
    profile: ReadSignal<Option<User>>,
}

impl SessionSignals {
    pub fn load() -> Self {
        let stores = SessionStores::load(Rc::new(LocalStorage));

        let (token, set_token) = signal(stores.token.token());
        let (profile, set_profile) = signal(stores.user_info.user());

        stores.token.subscribe(move |t| set_token.set(t.clone()));
        stores
            .user_info
            .subscribe(move |info| set_profile.set(User::from_profile(info)));

        Self {
            stores,
            token,
            profile,
        }
    }

    /// 获取认证状态信号（用于路由服务注入）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let token = self.token;
        Signal::derive(move || !token.get().is_empty())
    }

    /// 接上提示与路由，组装请求流水线
    pub fn connect(self, toasts: ToastService, router: RouterService) -> AuthContext {
        let pipeline = Pipeline::standard(
            client_config(),
            FetchHttpClient,
            self.stores.token.clone(),
            Rc::new(toasts),
            Rc::new(router),
            self.stores.as_session_stores(),
        );

        AuthContext {
            profile: self.profile,
            services: StoredValue::new_local(Services {
                api: ConsoleApi::new(Rc::new(pipeline)),
                stores: self.stores,
            }),
        }
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// 登录：成功后令牌写入容器，路由服务监听到认证变化会自动跳转
pub async fn login(ctx: &AuthContext, req: LoginRequest) -> ClientResult<()> {
    let stores = ctx.stores();
    ctx.api().login(&stores, req).await
}

/// 拉取当前用户资料并写入容器
///
/// 失败只记日志：提示已经由请求流水线弹出，401 也已跳转登录页。
pub async fn refresh_profile(ctx: &AuthContext) {
    let stores = ctx.stores();
    if let Err(e) = ctx.api().refresh_profile(&stores).await {
        web_sys::console::warn_1(&format!("[Auth] 刷新用户资料失败: {}", e).into());
    }
}

/// 注销并清除状态
///
/// 导航将由路由服务的认证状态监听自动处理。
pub fn logout(ctx: &AuthContext) {
    let stores = ctx.stores();
    ctx.api().logout(&stores);
}
