use crate::auth::use_auth;
use crate::components::feedback::local_error;
use crate::components::icons::Camera;
use crate::web::file::read_picked;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos::web_sys::HtmlInputElement;

/// 选择图片并上传，成功后把托管地址交给 `on_uploaded`
///
/// 上传走同一条请求流水线，服务端失败的提示由流水线负责；这里只显示本地错误。
#[component]
pub fn UploadButton(
    #[prop(into)] label: String,
    #[prop(into)] on_uploaded: Callback<String>,
    error: WriteSignal<Option<String>>,
) -> impl IntoView {
    let auth = use_auth();
    let (uploading, set_uploading) = signal(false);

    let on_change = move |ev: leptos::web_sys::Event| {
        let input: HtmlInputElement = event_target(&ev);
        error.set(None);
        set_uploading.set(true);

        spawn_local(async move {
            match read_picked(&input).await {
                Ok(Some(file)) => {
                    match auth.api().upload(file.name, file.content_type, file.bytes).await {
                        Ok(url) => on_uploaded.run(url),
                        Err(e) => error.set(local_error(&e)),
                    }
                }
                Ok(None) => {}
                Err(e) => {
                    web_sys::console::error_1(&format!("[Upload] {}", e).into());
                    error.set(Some("Could not read the selected file".to_string()));
                }
            }
            // 允许再次选择同一个文件
            input.set_value("");
            set_uploading.set(false);
        });
    };

    view! {
        <label class="btn btn-outline gap-2" class:btn-disabled=move || uploading.get()>
            {move || if uploading.get() {
                view! { <span class="loading loading-spinner loading-sm"></span> }.into_any()
            } else {
                view! { <Camera attr:class="h-4 w-4" /> }.into_any()
            }}
            {label}
            <input type="file" accept="image/*" class="hidden" on:change=on_change />
        </label>
    }
}
