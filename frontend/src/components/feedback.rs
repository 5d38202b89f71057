use backcontrol::ClientError;
use leptos::prelude::*;

/// 只有本地拦下的错误需要在表单里显示；其余错误已经由请求流水线弹出提示
pub fn local_error(err: &ClientError) -> Option<String> {
    match err {
        ClientError::Validation(e) => Some(e.to_string()),
        ClientError::Precondition(msg) => Some(msg.clone()),
        _ => None,
    }
}

/// 表单内的错误提示
#[component]
pub fn ErrorAlert(message: ReadSignal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div role="alert" class="alert alert-error text-sm py-2">
                <svg xmlns="http://www.w3.org/2000/svg" class="stroke-current shrink-0 h-6 w-6" fill="none" viewBox="0 0 24 24"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M10 14l2-2m0 0l2-2m-2 2l-2-2m2 2l2 2m7-2a9 9 0 11-18 0 9 9 0 0118 0z" /></svg>
                <span>{move || message.get().unwrap_or_default()}</span>
            </div>
        </Show>
    }
}

/// 提交按钮，提交期间显示加载状态
#[component]
pub fn SubmitButton(
    busy: ReadSignal<bool>,
    #[prop(into)] label: String,
    #[prop(into)] busy_label: String,
) -> impl IntoView {
    view! {
        <button type="submit" class="btn btn-primary" disabled=move || busy.get()>
            {move || if busy.get() {
                view! { <span class="loading loading-spinner"></span> {busy_label.clone()} }.into_any()
            } else {
                label.clone().into_any()
            }}
        </button>
    }
}

/// 模态框：`open` 控制显示，关闭（Esc 或遮罩）时回写 `open`
#[component]
pub fn Modal(
    open: RwSignal<bool>,
    #[prop(into)] title: Signal<String>,
    children: Children,
) -> impl IntoView {
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();

    Effect::new(move |_| {
        if let Some(dialog) = dialog_ref.get() {
            if open.get() {
                if !dialog.open() {
                    let _ = dialog.show_modal();
                }
            } else if dialog.open() {
                dialog.close();
            }
        }
    });

    view! {
        <dialog class="modal" node_ref=dialog_ref on:close=move |_| open.set(false)>
            <div class="modal-box">
                <h3 class="font-bold text-lg mb-4">{move || title.get()}</h3>
                {children()}
            </div>
            <form method="dialog" class="modal-backdrop">
                <button>"close"</button>
            </form>
        </dialog>
    }
}
