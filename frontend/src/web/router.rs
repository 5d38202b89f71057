//! 路由服务模块 - 核心引擎
//!
//! 封装了 web_sys 的 History API，实现高内聚：
//! 所有对 window.history 的操作都集中在此模块。
//! 实现了"监听 -> 验证 -> 处理 -> 加载"的导航流程。

use backcontrol::Navigator;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use super::route::AppRoute;

/// 获取当前浏览器路径
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// 写入 History 状态
///
/// `use_push` 为 false 时使用 replaceState（用于重定向）。
fn write_history_state(path: &str, use_push: bool) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = if use_push {
                history.push_state_with_url(&JsValue::NULL, "", Some(path))
            } else {
                history.replace_state_with_url(&JsValue::NULL, "", Some(path))
            };
        }
    }
}

fn log(message: &str) {
    web_sys::console::log_1(&format!("[Router] {}", message).into());
}

/// 路由器服务
///
/// 封装所有路由操作，通过 Signal 驱动界面更新。
/// 通过注入认证检查信号实现与认证系统的解耦。
#[derive(Clone, Copy)]
pub struct RouterService {
    /// 当前路由（只读信号）
    current_route: ReadSignal<AppRoute>,
    /// 设置当前路由（写入信号）
    set_route: WriteSignal<AppRoute>,
    /// 认证状态检查（注入的信号，实现解耦）
    is_authenticated: Signal<bool>,
}

impl RouterService {
    /// 创建新的路由服务
    ///
    /// 地址栏是 `/` 这类非规范路径时替换为规范路径，守卫交给 `setup_auth_redirect`。
    fn new(is_authenticated: Signal<bool>) -> Self {
        let path = current_path();
        let initial_route = AppRoute::from_path(&path);
        if initial_route != AppRoute::NotFound && initial_route.to_path() != path {
            write_history_state(initial_route.to_path(), false);
        }
        let (current_route, set_route) = signal(initial_route);

        Self {
            current_route,
            set_route,
            is_authenticated,
        }
    }

    /// 获取当前路由信号
    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// **核心方法：导航与守卫**
    ///
    /// 流程：请求 -> 验证(Guard) -> 处理 -> 加载
    pub fn navigate(&self, path: &str) {
        let target_route = AppRoute::from_path(path);
        self.navigate_to_route(target_route, true);
    }

    /// 导航到指定路由
    pub fn go(&self, route: AppRoute) {
        self.navigate_to_route(route, true);
    }

    /// * `use_push` - true 使用 pushState, false 使用 replaceState
    fn navigate_to_route(&self, target_route: AppRoute, use_push: bool) {
        let is_auth = self.is_authenticated.get_untracked();

        // --- Step 1: 验证目标路由 ---
        let resolved = target_route.guard(is_auth);
        if resolved != target_route {
            log(&format!("{} is not reachable. Redirecting to {}.", target_route, resolved));
        }

        // --- Step 2: 加载页面 (更新状态) ---
        write_history_state(resolved.to_path(), use_push);
        self.set_route.set(resolved);
    }

    /// 初始化浏览器后退/前进按钮监听
    fn init_popstate_listener(&self) {
        let set_route = self.set_route;
        let is_authenticated = self.is_authenticated;

        let closure = Closure::<dyn Fn()>::new(move || {
            let target_route = AppRoute::from_path(&current_path());

            // popstate 时也执行守卫逻辑
            let resolved = target_route.guard(is_authenticated.get_untracked());
            if resolved != target_route {
                write_history_state(resolved.to_path(), false);
            }
            set_route.set(resolved);
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }

    /// 设置认证状态变化时的自动重定向
    fn setup_auth_redirect(&self) {
        let current_route = self.current_route;
        let set_route = self.set_route;
        let is_authenticated = self.is_authenticated;

        Effect::new(move |_| {
            let is_auth = is_authenticated.get();
            let route = current_route.get_untracked();
            let resolved = route.guard(is_auth);

            if resolved != route {
                write_history_state(resolved.to_path(), true);
                set_route.set(resolved);
                if is_auth {
                    log("Auth state changed: logged in, redirecting to article management.");
                } else {
                    log("Auth state changed: logged out, redirecting to login.");
                }
            }
        });
    }
}

/// 会话失效时由请求流水线调用
impl Navigator for RouterService {
    fn navigate(&self, path: &str) {
        RouterService::navigate(self, path);
    }
}

/// 提供路由服务到 Context 并初始化
pub fn provide_router(is_authenticated: Signal<bool>) -> RouterService {
    let router = RouterService::new(is_authenticated);

    // 初始化监听器
    router.init_popstate_listener();
    router.setup_auth_redirect();

    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure provide_router was called.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由出口组件
///
/// 根据当前路由状态渲染对应的组件。
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收当前路由，返回对应视图
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}

/// 站内链接：拦截点击，改走路由服务
#[component]
pub fn Link(
    route: AppRoute,
    #[prop(into)] class: Signal<String>,
    children: Children,
) -> impl IntoView {
    let router = use_router();

    let on_click = move |ev: leptos::web_sys::MouseEvent| {
        ev.prevent_default();
        router.go(route);
    };

    view! {
        <a href=route.to_path() class=class on:click=on_click>
            {children()}
        </a>
    }
}
