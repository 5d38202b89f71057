//! 全局提示（toast）
//!
//! 请求流水线通过 `Notifier` trait 调用，组件也可以直接用 `use_toasts()` 弹出提示。

use backcontrol::{Notifier, Severity};
use leptos::prelude::*;
use std::time::Duration;

/// 每条提示的显示时长
const TOAST_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub severity: Severity,
    pub message: String,
}

/// 提示队列
#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn toasts(&self) -> ReadSignal<Vec<Toast>> {
        self.toasts.read_only()
    }

    pub fn push(&self, severity: Severity, message: impl Into<String>) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);

        self.toasts.update(|list| {
            list.push(Toast {
                id,
                severity,
                message: message.into(),
            })
        });

        // 3秒后移除
        let toasts = self.toasts;
        set_timeout(
            move || toasts.update(|list| list.retain(|t| t.id != id)),
            TOAST_DURATION,
        );
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|list| list.retain(|t| t.id != id));
    }
}

impl Notifier for ToastService {
    fn notify(&self, severity: Severity, message: &str) {
        self.push(severity, message);
    }
}

/// 从 Context 获取提示服务
pub fn use_toasts() -> ToastService {
    use_context::<ToastService>().expect("ToastService should be provided")
}

fn alert_class(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => "alert alert-success shadow-lg",
        Severity::Info => "alert alert-info shadow-lg",
        Severity::Warning => "alert alert-warning shadow-lg",
        Severity::Error => "alert alert-error shadow-lg",
    }
}

/// 提示渲染出口，挂在应用根部
#[component]
pub fn Toaster() -> impl IntoView {
    let service = use_toasts();

    view! {
        <div class="toast toast-top toast-end z-50">
            <For
                each=move || service.toasts().get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=alert_class(toast.severity) on:click=move |_| service.dismiss(id)>
                            <span>{toast.message}</span>
                        </div>
                    }
                }
            />
        </div>
    }
}
