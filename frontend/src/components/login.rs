use crate::auth::{login, use_auth};
use crate::components::feedback::{ErrorAlert, SubmitButton, local_error};
use crate::components::icons::ShieldCheck;
use crate::web::toast::use_toasts;
use backcontrol::Severity;
use backcontrol_shared::protocol::{LoginRequest, RegisterRequest};
use backcontrol_shared::validation;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 登录 / 注册页面
///
/// 登录成功只写入令牌，跳转由路由服务监听认证状态完成。
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let toasts = use_toasts();

    let (is_register, set_is_register) = signal(false);
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (re_password, set_re_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let switch_mode = move |register: bool| {
        set_is_register.set(register);
        set_password.set(String::new());
        set_re_password.set(String::new());
        set_error_msg.set(None);
    };

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error_msg.set(None);

        if is_register.get() {
            // 确认密码只在前端校验
            if let Err(e) = validation::matches("rePassword", &password.get(), &re_password.get())
            {
                set_error_msg.set(Some(e.to_string()));
                return;
            }

            let req = RegisterRequest {
                username: username.get(),
                password: password.get(),
            };
            set_is_submitting.set(true);
            spawn_local(async move {
                match auth.api().user_register(req).await {
                    Ok(()) => {
                        toasts.push(Severity::Success, "Registration successful");
                        switch_mode(false);
                    }
                    Err(e) => set_error_msg.set(local_error(&e)),
                }
                set_is_submitting.set(false);
            });
        } else {
            let req = LoginRequest {
                username: username.get(),
                password: password.get(),
            };
            set_is_submitting.set(true);
            spawn_local(async move {
                match login(&auth, req).await {
                    Ok(()) => toasts.push(Severity::Success, "Login successful"),
                    Err(e) => set_error_msg.set(local_error(&e)),
                }
                set_is_submitting.set(false);
            });
        }
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <div class="flex flex-col items-center gap-2">
                        <div class="p-3 bg-primary/10 rounded-2xl text-primary">
                            <ShieldCheck attr:class="h-8 w-8" />
                        </div>
                        <h1 class="text-3xl font-bold">
                            {move || if is_register.get() { "Register" } else { "Sign in" }}
                        </h1>
                        <p class="text-base-content/70">"BackControl admin console"</p>
                    </div>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <ErrorAlert message=error_msg />

                        <div class="form-control">
                            <label class="label" for="username">
                                <span class="label-text">"Username"</span>
                            </label>
                            <input
                                id="username"
                                type="text"
                                placeholder="5 to 16 characters"
                                on:input=move |ev| set_username.set(event_target_value(&ev))
                                prop:value=username
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"Password"</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                placeholder="••••••••"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <Show when=move || is_register.get()>
                            <div class="form-control">
                                <label class="label" for="re_password">
                                    <span class="label-text">"Confirm password"</span>
                                </label>
                                <input
                                    id="re_password"
                                    type="password"
                                    placeholder="••••••••"
                                    on:input=move |ev| set_re_password.set(event_target_value(&ev))
                                    prop:value=re_password
                                    class="input input-bordered"
                                    required
                                />
                            </div>
                        </Show>
                        <div class="form-control mt-6">
                            {move || if is_register.get() {
                                view! { <SubmitButton busy=is_submitting label="Register" busy_label="Registering..." /> }.into_any()
                            } else {
                                view! { <SubmitButton busy=is_submitting label="Sign in" busy_label="Signing in..." /> }.into_any()
                            }}
                        </div>
                        <div class="text-center text-sm">
                            {move || if is_register.get() {
                                view! {
                                    <a class="link link-primary" on:click=move |_| switch_mode(false)>
                                        "Back to sign in"
                                    </a>
                                }.into_any()
                            } else {
                                view! {
                                    <a class="link link-primary" on:click=move |_| switch_mode(true)>
                                        "Create an account"
                                    </a>
                                }.into_any()
                            }}
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
