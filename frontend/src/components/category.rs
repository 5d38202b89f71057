use crate::auth::use_auth;
use crate::components::feedback::{ErrorAlert, Modal, SubmitButton, local_error};
use crate::components::icons::*;
use crate::web::confirm;
use crate::web::toast::use_toasts;
use backcontrol::Severity;
use backcontrol_shared::Category;
use backcontrol_shared::protocol::{AddCategoryRequest, UpdateCategoryRequest};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 分类表单状态：`id` 为 None 时是新增
#[derive(Clone, Copy)]
struct CategoryForm {
    id: RwSignal<Option<i64>>,
    name: RwSignal<String>,
    alias: RwSignal<String>,
}

impl CategoryForm {
    fn new() -> Self {
        Self {
            id: RwSignal::new(None),
            name: RwSignal::new(String::new()),
            alias: RwSignal::new(String::new()),
        }
    }

    fn reset(&self) {
        self.id.set(None);
        self.name.set(String::new());
        self.alias.set(String::new());
    }

    fn fill(&self, category: &Category) {
        self.id.set(category.id);
        self.name.set(category.category_name.clone());
        self.alias.set(category.category_alias.clone());
    }
}

#[component]
pub fn CategoryPage() -> impl IntoView {
    let auth = use_auth();
    let toasts = use_toasts();

    let (categories, set_categories) = signal(Vec::<Category>::new());
    let (loading, set_loading) = signal(true);

    let form = CategoryForm::new();
    let dialog_open = RwSignal::new(false);
    let (saving, set_saving) = signal(false);
    let (form_error, set_form_error) = signal(Option::<String>::None);

    let load_categories = move || {
        set_loading.set(true);
        spawn_local(async move {
            if let Ok(data) = auth.api().category_list().await {
                set_categories.set(data);
            }
            set_loading.set(false);
        });
    };

    // 初始加载
    load_categories();

    let open_add = move |_| {
        form.reset();
        set_form_error.set(None);
        dialog_open.set(true);
    };

    let open_edit = move |category: Category| {
        form.fill(&category);
        set_form_error.set(None);
        dialog_open.set(true);
    };

    let handle_delete = move |category: Category| {
        let Some(id) = category.id else { return };
        let prompt = format!("Delete category \"{}\"?", category.category_name);
        if !confirm(&prompt) {
            return;
        }
        spawn_local(async move {
            if auth.api().category_delete(id).await.is_ok() {
                toasts.push(Severity::Success, "Category deleted");
                load_categories();
            }
        });
    };

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        set_form_error.set(None);
        set_saving.set(true);

        let name = form.name.get();
        let alias = form.alias.get();
        let id = form.id.get();

        spawn_local(async move {
            let api = auth.api();
            let result = match id {
                Some(id) => {
                    api.category_update(UpdateCategoryRequest {
                        id,
                        category_name: name,
                        category_alias: alias,
                    })
                    .await
                }
                None => {
                    api.category_add(AddCategoryRequest {
                        category_name: name,
                        category_alias: alias,
                    })
                    .await
                }
            };

            match result {
                Ok(()) => {
                    let msg = if id.is_some() { "Category updated" } else { "Category added" };
                    toasts.push(Severity::Success, msg);
                    dialog_open.set(false);
                    load_categories();
                }
                Err(e) => set_form_error.set(local_error(&e)),
            }
            set_saving.set(false);
        });
    };

    let dialog_title = move || {
        if form.id.get().is_some() {
            "Edit category".to_string()
        } else {
            "Add category".to_string()
        }
    };

    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body">
                <div class="flex items-center justify-between">
                    <h3 class="card-title">"Article Categories"</h3>
                    <button class="btn btn-primary gap-2" on:click=open_add>
                        <Plus attr:class="h-4 w-4" /> "Add category"
                    </button>
                </div>

                <div class="overflow-x-auto w-full">
                    <table class="table table-zebra w-full">
                        <thead>
                            <tr>
                                <th>"#"</th>
                                <th>"Name"</th>
                                <th>"Alias"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <Show when=move || loading.get() && categories.with(|c| c.is_empty())>
                                <tr>
                                    <td colspan="4" class="text-center py-8 text-base-content/50">
                                        <span class="loading loading-spinner loading-md"></span> " Loading..."
                                    </td>
                                </tr>
                            </Show>
                            <Show when=move || !loading.get() && categories.with(|c| c.is_empty())>
                                <tr>
                                    <td colspan="4" class="text-center py-8 text-base-content/50">
                                        "No categories yet."
                                    </td>
                                </tr>
                            </Show>
                            <For
                                each=move || categories.get().into_iter().enumerate()
                                key=|(_, c)| (c.id, c.category_name.clone(), c.category_alias.clone())
                                children=move |(index, category)| {
                                    let for_edit = category.clone();
                                    let for_delete = category.clone();
                                    view! {
                                        <tr>
                                            <td>{index + 1}</td>
                                            <td>{category.category_name}</td>
                                            <td class="font-mono text-sm opacity-70">{category.category_alias}</td>
                                            <td class="flex gap-2">
                                                <button class="btn btn-ghost btn-sm btn-square" on:click=move |_| open_edit(for_edit.clone())>
                                                    <Pencil attr:class="h-4 w-4" />
                                                </button>
                                                <button class="btn btn-ghost btn-sm btn-square text-error" on:click=move |_| handle_delete(for_delete.clone())>
                                                    <Trash2 attr:class="h-4 w-4" />
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>
            </div>
        </div>

        <Modal open=dialog_open title=Signal::derive(dialog_title)>
            <form on:submit=on_submit class="space-y-4">
                <ErrorAlert message=form_error />
                <div class="form-control">
                    <label for="category_name" class="label">
                        <span class="label-text">"Name"</span>
                    </label>
                    <input id="category_name" required
                        type="text"
                        on:input=move |ev| form.name.set(event_target_value(&ev))
                        prop:value=form.name
                        class="input input-bordered w-full"
                    />
                </div>
                <div class="form-control">
                    <label for="category_alias" class="label">
                        <span class="label-text">"Alias"</span>
                    </label>
                    <input id="category_alias" required
                        type="text"
                        on:input=move |ev| form.alias.set(event_target_value(&ev))
                        prop:value=form.alias
                        class="input input-bordered w-full"
                    />
                </div>
                <div class="modal-action">
                    <button type="button" class="btn" on:click=move |_| dialog_open.set(false)>"Cancel"</button>
                    <SubmitButton busy=saving label="Save" busy_label="Saving..." />
                </div>
            </form>
        </Modal>
    }
}
