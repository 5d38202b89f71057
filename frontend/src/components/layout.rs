use crate::auth::{logout, refresh_profile, use_auth};
use crate::components::icons::*;
use crate::web::confirm;
use crate::web::route::AppRoute;
use crate::web::router::{Link, use_router};
use leptos::prelude::*;
use leptos::task::spawn_local;

fn menu_icon(route: AppRoute) -> AnyView {
    match route {
        AppRoute::ArticleCategory => view! { <Folder attr:class="h-4 w-4" /> }.into_any(),
        AppRoute::ArticleManage => view! { <FileText attr:class="h-4 w-4" /> }.into_any(),
        AppRoute::UserInfo => view! { <UserIcon attr:class="h-4 w-4" /> }.into_any(),
        AppRoute::UserAvatar => view! { <Camera attr:class="h-4 w-4" /> }.into_any(),
        AppRoute::UserResetPassword => view! { <KeyRound attr:class="h-4 w-4" /> }.into_any(),
        _ => ().into_any(),
    }
}

/// 控制台外壳：侧边菜单 + 顶栏 + 内容区
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    // 进入控制台时拉取一次资料，失败的提示由请求流水线负责
    spawn_local(async move {
        refresh_profile(&auth).await;
    });

    let display_name = move || {
        auth.profile
            .get()
            .map(|u| u.display_name().to_string())
            .unwrap_or_default()
    };
    let avatar = move || auth.profile.get().and_then(|u| u.user_pic);

    let on_logout = move |_| {
        if confirm("Are you sure you want to sign out?") {
            logout(&auth);
        }
    };

    view! {
        <div class="drawer lg:drawer-open min-h-screen">
            <input id="console-drawer" type="checkbox" class="drawer-toggle" />
            <div class="drawer-content flex flex-col bg-base-200">
                <div class="navbar bg-base-100 shadow">
                    <div class="flex-1 gap-2">
                        <label for="console-drawer" class="btn btn-ghost lg:hidden">"☰"</label>
                        <span class="text-lg font-semibold">
                            {move || router.current_route().get().title()}
                        </span>
                    </div>
                    <div class="flex-none gap-3 items-center">
                        <span class="text-sm text-base-content/70">
                            "Signed in as " <strong>{display_name}</strong>
                        </span>
                        <div class="avatar placeholder">
                            <div class="w-10 rounded-full bg-neutral text-neutral-content">
                                {move || match avatar() {
                                    Some(url) => view! { <img src=url alt="avatar" /> }.into_any(),
                                    None => view! { <UserIcon attr:class="h-6 w-6" /> }.into_any(),
                                }}
                            </div>
                        </div>
                        <button on:click=on_logout class="btn btn-outline btn-error btn-sm gap-2">
                            <LogOut attr:class="h-4 w-4" /> "Sign out"
                        </button>
                    </div>
                </div>
                <main class="p-4 md:p-8">
                    {children()}
                </main>
            </div>
            <div class="drawer-side">
                <label for="console-drawer" class="drawer-overlay"></label>
                <aside class="w-64 min-h-full bg-base-100">
                    <div class="p-4 text-xl font-bold text-primary">"BackControl"</div>
                    <ul class="menu p-2 gap-1">
                        {AppRoute::SHELL
                            .into_iter()
                            .map(|route| {
                                let class = move || {
                                    if router.current_route().get() == route {
                                        "active".to_string()
                                    } else {
                                        String::new()
                                    }
                                };
                                view! {
                                    <li>
                                        <Link route=route class=class>
                                            {menu_icon(route)}
                                            {route.title()}
                                        </Link>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </aside>
            </div>
        </div>
    }
}
