use crate::auth::{logout, use_auth};
use crate::components::feedback::{ErrorAlert, SubmitButton, local_error};
use crate::web::toast::use_toasts;
use backcontrol::Severity;
use backcontrol_shared::protocol::ResetPasswordRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 重置密码；成功后清空会话，需要用新密码重新登录
#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let auth = use_auth();
    let toasts = use_toasts();

    let (old_pwd, set_old_pwd) = signal(String::new());
    let (new_pwd, set_new_pwd) = signal(String::new());
    let (re_pwd, set_re_pwd) = signal(String::new());
    let (saving, set_saving) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error_msg.set(None);

        let req = ResetPasswordRequest {
            old_pwd: old_pwd.get(),
            new_pwd: new_pwd.get(),
            re_pwd: re_pwd.get(),
        };

        set_saving.set(true);
        spawn_local(async move {
            match auth.api().user_reset_password(req).await {
                Ok(()) => {
                    toasts.push(Severity::Success, "Password changed, please sign in again");
                    set_saving.set(false);
                    logout(&auth);
                }
                Err(e) => {
                    set_error_msg.set(local_error(&e));
                    set_saving.set(false);
                }
            }
        });
    };

    let field = move |id: &'static str,
                      label: &'static str,
                      value: ReadSignal<String>,
                      set_value: WriteSignal<String>| {
        view! {
            <div class="form-control">
                <label class="label" for=id>
                    <span class="label-text">{label}</span>
                </label>
                <input
                    id=id
                    type="password"
                    placeholder="5 to 16 characters"
                    on:input=move |ev| set_value.set(event_target_value(&ev))
                    prop:value=value
                    class="input input-bordered"
                    required
                />
            </div>
        }
    };

    view! {
        <div class="card bg-base-100 shadow-xl max-w-xl">
            <form class="card-body" on:submit=on_submit>
                <h3 class="card-title">"Reset Password"</h3>
                <ErrorAlert message=error_msg />
                {field("old_pwd", "Current password", old_pwd, set_old_pwd)}
                {field("new_pwd", "New password", new_pwd, set_new_pwd)}
                {field("re_pwd", "Confirm new password", re_pwd, set_re_pwd)}
                <div class="form-control mt-6">
                    <SubmitButton busy=saving label="Change password" busy_label="Saving..." />
                </div>
            </form>
        </div>
    }
}
