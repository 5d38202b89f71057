use crate::auth::{refresh_profile, use_auth};
use crate::components::feedback::{ErrorAlert, SubmitButton, local_error};
use crate::components::icons::UserIcon;
use crate::components::upload::UploadButton;
use crate::web::toast::use_toasts;
use backcontrol::Severity;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 更换头像：先上传图片拿到托管地址，再提交为新头像；也可以直接填写链接
#[component]
pub fn UserAvatarPage() -> impl IntoView {
    let auth = use_auth();
    let toasts = use_toasts();

    let (avatar_url, set_avatar_url) = signal(
        auth.profile
            .get_untracked()
            .and_then(|u| u.user_pic)
            .unwrap_or_default(),
    );
    let (saving, set_saving) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error_msg.set(None);
        set_saving.set(true);

        let url = avatar_url.get();
        spawn_local(async move {
            match auth.api().user_avatar_update(url).await {
                Ok(msg) => {
                    toasts.push(
                        Severity::Success,
                        msg.unwrap_or_else(|| "Avatar updated".to_string()),
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
                <h3 class="card-title">"Change Avatar"</h3>
                <ErrorAlert message=error_msg />

                <div class="flex justify-center py-4">
                    <div class="avatar placeholder">
                        <div class="w-32 rounded-full bg-neutral text-neutral-content">
                            {move || {
                                let url = avatar_url.get();
                                if url.trim().is_empty() {
                                    view! { <UserIcon attr:class="h-16 w-16" /> }.into_any()
                                } else {
                                    view! { <img src=url alt="avatar preview" /> }.into_any()
                                }
                            }}
                        </div>
                    </div>
                </div>

                <div class="flex justify-center">
                    <UploadButton
                        label="Choose image"
                        on_uploaded=move |url: String| set_avatar_url.set(url)
                        error=set_error_msg
                    />
                </div>

                <div class="form-control">
                    <label class="label" for="avatar_url">
                        <span class="label-text">"Avatar URL"</span>
                    </label>
                    <input
                        id="avatar_url"
                        type="url"
                        placeholder="https://"
                        on:input=move |ev| set_avatar_url.set(event_target_value(&ev))
                        prop:value=avatar_url
                        class="input input-bordered"
                        required
                    />
                </div>
                <div class="form-control mt-6">
                    <SubmitButton busy=saving label="Upload avatar" busy_label="Uploading..." />
                </div>
            </form>
        </div>
    }
}
