use contracts::system::auth::RegisterRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::message::use_messages;
use crate::system::auth::{api, context::do_login, context::use_auth};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AuthTab {
    Login,
    Register,
    ResetPassword,
}

impl AuthTab {
    const ALL: [AuthTab; 3] = [AuthTab::Login, AuthTab::Register, AuthTab::ResetPassword];

    fn title(&self) -> &'static str {
        match self {
            AuthTab::Login => "ログイン",
            AuthTab::Register => "新規登録",
            AuthTab::ResetPassword => "パスワード再設定",
        }
    }
}

#[component]
pub fn AuthPage() -> impl IntoView {
    let (active_tab, set_active_tab) = signal(AuthTab::Login);

    view! {
        <div id="auth-section" class="auth-container">
            <div class="auth-box">
                <h1>"原価計算システム"</h1>
                <div class="auth-tabs">
                    {AuthTab::ALL.into_iter().map(|tab| view! {
                        <button
                            class="tab-btn"
                            class:active=move || active_tab.get() == tab
                            on:click=move |_| set_active_tab.set(tab)
                        >
                            {tab.title()}
                        </button>
                    }).collect_view()}
                </div>

                {move || match active_tab.get() {
                    AuthTab::Login => view! { <LoginForm /> }.into_any(),
                    AuthTab::Register => view! {
                        <RegisterForm on_registered=Callback::new(move |_| set_active_tab.set(AuthTab::Login)) />
                    }.into_any(),
                    AuthTab::ResetPassword => view! { <PasswordResetForm /> }.into_any(),
                }}
            </div>
        </div>
    }
}

#[component]
fn LoginForm() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (_, set_auth_state) = use_auth();
    let messages = use_messages();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let email_val = email.get_untracked();
        let password_val = password.get_untracked();

        spawn_local(async move {
            match do_login(email_val, password_val, set_auth_state).await {
                // The gate switches to the app, which loads the first section.
                Ok(()) => messages.success("ログインに成功しました"),
                Err(e) => messages.error(e.user_message("ログインに失敗しました")),
            }
        });
    };

    view! {
        <form id="login-form" class="auth-form active" on:submit=on_submit>
            <div class="form-group">
                <label for="login-email">"メールアドレス"</label>
                <input
                    type="email"
                    id="login-email"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                    required
                />
            </div>
            <div class="form-group">
                <label for="login-password">"パスワード"</label>
                <input
                    type="password"
                    id="login-password"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                    required
                />
            </div>
            <button type="submit" class="btn btn-primary">"ログイン"</button>
        </form>
    }
}

#[component]
fn RegisterForm(on_registered: Callback<()>) -> impl IntoView {
    let (store_id, set_store_id) = signal(String::new());
    let (store_name, set_store_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let messages = use_messages();

    let reset = move || {
        set_store_id.set(String::new());
        set_store_name.set(String::new());
        set_email.set(String::new());
        set_password.set(String::new());
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let request = RegisterRequest {
            store_id: store_id.get_untracked(),
            store_name: store_name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
        };

        spawn_local(async move {
            match api::register(&request).await {
                Ok(()) => {
                    messages.success("登録に成功しました。ログインしてください。");
                    reset();
                    on_registered.try_run(());
                }
                Err(e) => messages.error(e.user_message("登録に失敗しました")),
            }
        });
    };

    view! {
        <form id="register-form" class="auth-form active" on:submit=on_submit>
            <div class="form-group">
                <label for="register-store-id">"店舗ID"</label>
                <input
                    type="text"
                    id="register-store-id"
                    minlength="3"
                    prop:value=move || store_id.get()
                    on:input=move |ev| set_store_id.set(event_target_value(&ev))
                    required
                />
            </div>
            <div class="form-group">
                <label for="register-store-name">"店舗名"</label>
                <input
                    type="text"
                    id="register-store-name"
                    prop:value=move || store_name.get()
                    on:input=move |ev| set_store_name.set(event_target_value(&ev))
                    required
                />
            </div>
            <div class="form-group">
                <label for="register-email">"メールアドレス"</label>
                <input
                    type="email"
                    id="register-email"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                    required
                />
            </div>
            <div class="form-group">
                <label for="register-password">"パスワード (8文字以上)"</label>
                <input
                    type="password"
                    id="register-password"
                    minlength="8"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                    required
                />
            </div>
            <button type="submit" class="btn btn-primary">"登録"</button>
        </form>
    }
}

#[component]
fn PasswordResetForm() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let messages = use_messages();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let email_val = email.get_untracked();

        spawn_local(async move {
            match api::request_password_reset(email_val).await {
                Ok(()) => {
                    set_email.set(String::new());
                    messages.info("パスワード再設定用のメールを送信しました");
                }
                Err(e) => messages.error(e.user_message("送信に失敗しました")),
            }
        });
    };

    view! {
        <form id="reset-form" class="auth-form active" on:submit=on_submit>
            <div class="form-group">
                <label for="reset-email">"メールアドレス"</label>
                <input
                    type="email"
                    id="reset-email"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                    required
                />
            </div>
            <button type="submit" class="btn btn-primary">"再設定メールを送信"</button>
        </form>
    }
}
