use crate::auth::{refresh_profile, use_auth};
use crate::components::feedback::{ErrorAlert, SubmitButton, local_error};
use crate::web::toast::use_toasts;
use backcontrol::Severity;
use backcontrol_shared::protocol::UpdateUserRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 基本资料：修改昵称与邮箱
#[component]
pub fn UserInfoPage() -> impl IntoView {
    let auth = use_auth();
    let toasts = use_toasts();

    let (nickname, set_nickname) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (saving, set_saving) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    // 资料到达（或刷新）后回填表单
    Effect::new(move |_| {
        if let Some(user) = auth.profile.get() {
            set_nickname.set(user.nickname.unwrap_or_default());
            set_email.set(user.email.unwrap_or_default());
        }
    });

    let username = move || auth.profile.get().map(|u| u.username).unwrap_or_default();

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error_msg.set(None);

        let Some(id) = auth.profile.get_untracked().map(|u| u.id) else {
            set_error_msg.set(Some("Profile is not loaded yet".to_string()));
            return;
        };
        let req = UpdateUserRequest {
            id,
            nickname: nickname.get(),
            email: email.get(),
        };

        set_saving.set(true);
        spawn_local(async move {
            match auth.api().user_info_update(req).await {
                Ok(msg) => {
                    toasts.push(
                        Severity::Success,
                        msg.unwrap_or_else(|| "Profile updated".to_string()),
                    );
                    refresh_profile(&auth).await;
                }
                Err(e) => set_error_msg.set(local_error(&e)),
            }
            set_saving.set(false);
        });
    };

    view! {
        <div class="card bg-base-100 shadow-xl max-w-xl">
            <form class="card-body" on:submit=on_submit>
                <h3 class="card-title">"Basic Profile"</h3>
                <ErrorAlert message=error_msg />

                <div class="form-control">
                    <label class="label" for="profile_username">
                        <span class="label-text">"Username"</span>
                    </label>
                    <input id="profile_username" type="text" class="input input-bordered" prop:value=username disabled />
                </div>
                <div class="form-control">
                    <label class="label" for="profile_nickname">
                        <span class="label-text">"Nickname"</span>
                    </label>
                    <input
                        id="profile_nickname"
                        type="text"
                        placeholder="1 to 10 characters"
                        on:input=move |ev| set_nickname.set(event_target_value(&ev))
                        prop:value=nickname
                        class="input input-bordered"
                        required
                    />
                </div>
                <div class="form-control">
                    <label class="label" for="profile_email">
                        <span class="label-text">"Email"</span>
                    </label>
                    <input
                        id="profile_email"
                        type="email"
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                        prop:value=email
                        class="input input-bordered"
                        required
                    />
                </div>
                <div class="form-control mt-6">
                    <SubmitButton busy=saving label="Save changes" busy_label="Saving..." />
                </div>
            </form>
        </div>
    }
}
