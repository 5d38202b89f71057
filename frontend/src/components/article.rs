//! 文章管理页
//!
//! 顶部按分类 / 状态筛选，表格分页展示，新增与编辑共用一个模态框。

use crate::auth::use_auth;
use crate::components::feedback::{ErrorAlert, Modal, local_error};
use crate::components::icons::*;
use crate::components::upload::UploadButton;
use crate::web::confirm;
use crate::web::toast::use_toasts;
use backcontrol::Severity;
use backcontrol_shared::protocol::{AddArticleRequest, ListArticlesRequest, UpdateArticleRequest};
use backcontrol_shared::validation::ValidationError;
use backcontrol_shared::{Article, ArticleState, Category};
use leptos::prelude::*;
use leptos::task::spawn_local;

const PAGE_SIZES: [u32; 4] = [3, 5, 10, 15];

/// 文章表单状态：`id` 为 None 时是新增
#[derive(Clone, Copy)]
struct ArticleForm {
    id: RwSignal<Option<i64>>,
    title: RwSignal<String>,
    category_id: RwSignal<Option<i64>>,
    cover_img: RwSignal<String>,
    content: RwSignal<String>,
    state: RwSignal<ArticleState>,
}

impl ArticleForm {
    fn new() -> Self {
        Self {
            id: RwSignal::new(None),
            title: RwSignal::new(String::new()),
            category_id: RwSignal::new(None),
            cover_img: RwSignal::new(String::new()),
            content: RwSignal::new(String::new()),
            state: RwSignal::new(ArticleState::Draft),
        }
    }

    fn reset(&self) {
        self.id.set(None);
        self.title.set(String::new());
        self.category_id.set(None);
        self.cover_img.set(String::new());
        self.content.set(String::new());
        self.state.set(ArticleState::Draft);
    }

    fn fill(&self, article: &Article) {
        self.id.set(article.id);
        self.title.set(article.title.clone());
        self.category_id.set(Some(article.category_id));
        self.cover_img.set(article.cover_img.clone());
        self.content.set(article.content.clone());
        self.state.set(article.state);
    }

    /// 转换为新增请求；分类必选
    fn to_add_request(&self) -> Result<AddArticleRequest, ValidationError> {
        let category_id = self
            .category_id
            .get()
            .ok_or_else(|| ValidationError::new("categoryId", "please select a category"))?;
        Ok(AddArticleRequest {
            title: self.title.get(),
            content: self.content.get(),
            cover_img: self.cover_img.get(),
            state: self.state.get(),
            category_id,
        })
    }
}

fn category_name(categories: &[Category], id: i64) -> String {
    categories
        .iter()
        .find(|c| c.id == Some(id))
        .map(|c| c.category_name.clone())
        .unwrap_or_else(|| "-".to_string())
}

#[component]
pub fn ArticlePage() -> impl IntoView {
    let auth = use_auth();
    let toasts = use_toasts();

    // 筛选与分页
    let filter_category = RwSignal::new(Option::<i64>::None);
    let filter_state = RwSignal::new(Option::<ArticleState>::None);
    let page_num = RwSignal::new(1u32);
    let page_size = RwSignal::new(ListArticlesRequest::default().page_size);

    let (categories, set_categories) = signal(Vec::<Category>::new());
    let (articles, set_articles) = signal(Vec::<Article>::new());
    let (total, set_total) = signal(0u64);
    let (loading, set_loading) = signal(true);

    let form = ArticleForm::new();
    let dialog_open = RwSignal::new(false);
    let (saving, set_saving) = signal(false);
    let (form_error, set_form_error) = signal(Option::<String>::None);

    let load = move || {
        let req = ListArticlesRequest {
            page_num: page_num.get_untracked(),
            page_size: page_size.get_untracked(),
            category_id: filter_category.get_untracked(),
            state: filter_state.get_untracked(),
        };
        set_loading.set(true);
        spawn_local(async move {
            if let Ok((cats, page)) = auth.api().article_page_with_categories(req).await {
                set_categories.set(cats);
                set_total.set(page.total);
                set_articles.set(page.items);
            }
            set_loading.set(false);
        });
    };

    load();

    let search = move |_| {
        page_num.set(1);
        load();
    };

    let reset_filters = move |_| {
        filter_category.set(None);
        filter_state.set(None);
        page_num.set(1);
        load();
    };

    let page_count = move || {
        let size = u64::from(page_size.get().max(1));
        total.get().div_ceil(size).max(1) as u32
    };

    let at_first = move || page_num.get() <= 1;
    let at_last = move || page_num.get() >= page_count();

    let go_page = move |n: u32| {
        page_num.set(n.clamp(1, page_count()));
        load();
    };

    let open_add = move |_| {
        form.reset();
        set_form_error.set(None);
        dialog_open.set(true);
    };

    // 编辑前拉取完整详情
    let open_edit = move |id: i64| {
        set_form_error.set(None);
        spawn_local(async move {
            if let Ok(article) = auth.api().article_detail(id).await {
                form.fill(&article);
                dialog_open.set(true);
            }
        });
    };

    let handle_delete = move |article: Article| {
        let Some(id) = article.id else { return };
        if !confirm(&format!("Delete article \"{}\"?", article.title)) {
            return;
        }
        spawn_local(async move {
            if auth.api().article_delete(id).await.is_ok() {
                toasts.push(Severity::Success, "Article deleted");
                load();
            }
        });
    };

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        set_form_error.set(None);

        let add = match form.to_add_request() {
            Ok(req) => req,
            Err(e) => {
                set_form_error.set(Some(e.to_string()));
                return;
            }
        };
        let id = form.id.get();

        set_saving.set(true);
        spawn_local(async move {
            let api = auth.api();
            let result = match id {
                Some(id) => {
                    let req = UpdateArticleRequest {
                        id,
                        title: add.title,
                        content: add.content,
                        cover_img: add.cover_img,
                        state: add.state,
                        category_id: add.category_id,
                    };
                    api.article_update(req).await.map(|_| ())
                }
                None => api.article_add(add).await,
            };

            match result {
                Ok(()) => {
                    let msg = if id.is_some() { "Article updated" } else { "Article added" };
                    toasts.push(Severity::Success, msg);
                    dialog_open.set(false);
                    load();
                }
                Err(e) => set_form_error.set(local_error(&e)),
            }
            set_saving.set(false);
        });
    };

    let dialog_title = move || {
        if form.id.get().is_some() {
            "Edit article".to_string()
        } else {
            "Add article".to_string()
        }
    };

    let category_options = move || {
        categories
            .get()
            .into_iter()
            .filter_map(|c| {
                let id = c.id?;
                Some(view! { <option value=id.to_string()>{c.category_name}</option> })
            })
            .collect_view()
    };

    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body space-y-4">
                <div class="flex items-center justify-between">
                    <h3 class="card-title">"Article Management"</h3>
                    <button class="btn btn-primary gap-2" on:click=open_add>
                        <Plus attr:class="h-4 w-4" /> "Add article"
                    </button>
                </div>

                // 筛选
                <div class="flex flex-wrap items-end gap-4">
                    <label class="form-control">
                        <span class="label-text">"Category"</span>
                        <select
                            class="select select-bordered"
                            prop:value=move || filter_category.get().map(|id| id.to_string()).unwrap_or_default()
                            on:change=move |ev| filter_category.set(event_target_value(&ev).parse().ok())
                        >
                            <option value="">"All"</option>
                            {category_options}
                        </select>
                    </label>
                    <label class="form-control">
                        <span class="label-text">"State"</span>
                        <select
                            class="select select-bordered"
                            prop:value=move || filter_state.get().map(|s| s.as_str()).unwrap_or_default()
                            on:change=move |ev| filter_state.set(ArticleState::from_str_opt(&event_target_value(&ev)))
                        >
                            <option value="">"All"</option>
                            {ArticleState::ALL
                                .into_iter()
                                .map(|s| view! { <option value=s.as_str()>{s.as_str()}</option> })
                                .collect_view()}
                        </select>
                    </label>
                    <button class="btn btn-primary" on:click=search>"Search"</button>
                    <button class="btn" on:click=reset_filters>"Reset"</button>
                </div>

                <div class="overflow-x-auto w-full">
                    <table class="table table-zebra w-full">
                        <thead>
                            <tr>
                                <th>"Title"</th>
                                <th>"Category"</th>
                                <th class="hidden md:table-cell">"Created"</th>
                                <th>"State"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <Show when=move || loading.get() && articles.with(|a| a.is_empty())>
                                <tr>
                                    <td colspan="5" class="text-center py-8 text-base-content/50">
                                        <span class="loading loading-spinner loading-md"></span> " Loading..."
                                    </td>
                                </tr>
                            </Show>
                            <Show when=move || !loading.get() && articles.with(|a| a.is_empty())>
                                <tr>
                                    <td colspan="5" class="text-center py-8 text-base-content/50">
                                        "No articles found."
                                    </td>
                                </tr>
                            </Show>
                            <For
                                each=move || articles.get()
                                key=|a| (a.id, a.title.clone(), a.state, a.category_id)
                                children=move |article| {
                                    let id = article.id;
                                    let for_delete = article.clone();
                                    let created = article
                                        .create_time
                                        .map(|t| t.to_string())
                                        .unwrap_or_default();
                                    let category_id = article.category_id;
                                    let badge = if article.state == ArticleState::Published {
                                        "badge badge-success"
                                    } else {
                                        "badge badge-ghost"
                                    };
                                    view! {
                                        <tr>
                                            <td class="font-semibold">{article.title}</td>
                                            <td>{move || categories.with(|c| category_name(c, category_id))}</td>
                                            <td class="hidden md:table-cell font-mono text-xs opacity-70">{created}</td>
                                            <td>
                                                <span class=badge>
                                                    {article.state.as_str()}
                                                </span>
                                            </td>
                                            <td class="flex gap-2">
                                                <button class="btn btn-ghost btn-sm btn-square" on:click=move |_| {
                                                    if let Some(id) = id {
                                                        open_edit(id);
                                                    }
                                                }>
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

                // 分页
                <div class="flex flex-wrap items-center justify-end gap-4">
                    <span class="text-sm opacity-70">{move || format!("Total {}", total.get())}</span>
                    <select
                        class="select select-bordered select-sm"
                        prop:value=move || page_size.get().to_string()
                        on:change=move |ev| {
                            if let Ok(size) = event_target_value(&ev).parse::<u32>() {
                                page_size.set(size);
                                page_num.set(1);
                                load();
                            }
                        }
                    >
                        {PAGE_SIZES
                            .into_iter()
                            .map(|n| view! { <option value=n.to_string()>{format!("{} / page", n)}</option> })
                            .collect_view()}
                    </select>
                    <div class="join">
                        <button class="join-item btn btn-sm" disabled=at_first on:click=move |_| go_page(page_num.get().saturating_sub(1))>"«"</button>
                        <button class="join-item btn btn-sm btn-disabled">
                            {move || format!("{} / {}", page_num.get(), page_count())}
                        </button>
                        <button class="join-item btn btn-sm" disabled=at_last on:click=move |_| go_page(page_num.get() + 1)>"»"</button>
                    </div>
                </div>
            </div>
        </div>

        <Modal open=dialog_open title=Signal::derive(dialog_title)>
            <form on:submit=on_submit class="space-y-4">
                <ErrorAlert message=form_error />
                <div class="form-control">
                    <label for="article_title" class="label">
                        <span class="label-text">"Title"</span>
                    </label>
                    <input id="article_title" required
                        type="text"
                        placeholder="1 to 10 characters"
                        on:input=move |ev| form.title.set(event_target_value(&ev))
                        prop:value=form.title
                        class="input input-bordered w-full"
                    />
                </div>
                <div class="form-control">
                    <label for="article_category" class="label">
                        <span class="label-text">"Category"</span>
                    </label>
                    <select id="article_category"
                        class="select select-bordered w-full"
                        prop:value=move || form.category_id.get().map(|id| id.to_string()).unwrap_or_default()
                        on:change=move |ev| form.category_id.set(event_target_value(&ev).parse().ok())
                    >
                        <option value="" disabled>"Select a category"</option>
                        {category_options}
                    </select>
                </div>
                <div class="form-control">
                    <label for="article_cover" class="label">
                        <span class="label-text">"Cover image"</span>
                    </label>
                    <div class="flex items-center gap-4">
                        {move || {
                            let url = form.cover_img.get();
                            (!url.trim().is_empty()).then(|| view! {
                                <img src=url alt="cover preview" class="h-16 w-24 object-cover rounded" />
                            })
                        }}
                        <UploadButton
                            label="Upload cover"
                            on_uploaded=move |url: String| form.cover_img.set(url)
                            error=set_form_error
                        />
                    </div>
                    <input id="article_cover" required
                        type="url"
                        placeholder="https://"
                        on:input=move |ev| form.cover_img.set(event_target_value(&ev))
                        prop:value=form.cover_img
                        class="input input-bordered w-full mt-2"
                    />
                </div>
                <div class="form-control">
                    <label for="article_content" class="label">
                        <span class="label-text">"Content"</span>
                    </label>
                    <textarea id="article_content" required
                        rows="6"
                        on:input=move |ev| form.content.set(event_target_value(&ev))
                        prop:value=form.content
                        class="textarea textarea-bordered w-full"
                    ></textarea>
                </div>
                <div class="modal-action">
                    <button type="button" class="btn" on:click=move |_| dialog_open.set(false)>"Cancel"</button>
                    <button type="submit" class="btn btn-outline" disabled=move || saving.get()
                        on:click=move |_| form.state.set(ArticleState::Draft)>
                        "Save as draft"
                    </button>
                    <button type="submit" class="btn btn-primary" disabled=move || saving.get()
                        on:click=move |_| form.state.set(ArticleState::Published)>
                        {move || if saving.get() { "Saving..." } else { "Publish" }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}
