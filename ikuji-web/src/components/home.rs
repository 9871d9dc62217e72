use ikuji_core::Mode;
use leptos::prelude::*;

#[server]
pub async fn ask_expert(mode: Mode, question: String) -> Result<String, ServerFnError> {
    use crate::server;
    use std::time::Instant;

    let start = Instant::now();

    let result = server::ai::ask_expert(mode, &question).await;
    let duration_ms = start.elapsed().as_millis();

    match &result {
        Ok(_) => {
            tracing::info!(
                mode = ?mode,
                question = %question,
                duration_ms = %duration_ms,
                "Question answered"
            );
        }
        Err(e) => {
            tracing::error!(
                mode = ?mode,
                question = %question,
                error = %e,
                duration_ms = %duration_ms,
                "Question failed"
            );
        }
    }

    result.map_err(|e| ServerFnError::new(e.to_string()))
}

#[server]
pub async fn api_key_configured() -> Result<bool, ServerFnError> {
    // Only reports presence, never the key itself
    Ok(crate::server::config::get().is_ok())
}

#[component]
pub fn Home() -> impl IntoView {
    let (mode, set_mode) = signal(Mode::Nutrition);

    // Credential gate: checked once per page load
    let key_ready = Resource::new(|| (), |_| async { api_key_configured().await });

    view! {
        <div class="home-container">
            <header class="hero">
                <h1>"🍼 育児質問アプリ"</h1>
                <p class="tagline">"AI専門家があなたの子育ての疑問にお答えします"</p>
            </header>

            <section class="mode-guide">
                <h5>"🥗 動作モード1: " {Mode::Nutrition.label()}</h5>
                <p>{Mode::Nutrition.description()}</p>
                <h5>"😴 動作モード2: " {Mode::Sleep.label()}</h5>
                <p>{Mode::Sleep.description()}</p>
            </section>

            <fieldset class="mode-selector">
                <legend>"動作モードを選択してください。"</legend>
                <ModeOption mode=Mode::Nutrition selected=mode set_selected=set_mode/>
                <ModeOption mode=Mode::Sleep selected=mode set_selected=set_mode/>
            </fieldset>

            <hr class="divider"/>

            // Setup banner replaces the form while the key is missing
            <Suspense fallback=|| view! { <div class="loading-message">"読み込み中..."</div> }>
                {move || key_ready.get().map(|configured| match configured {
                    Ok(true) => view! { <QuestionForm mode=mode/> }.into_any(),
                    _ => view! { <SetupInstructions/> }.into_any(),
                })}
            </Suspense>
        </div>
    }
}

/// One radio option of the mode selector
#[component]
fn ModeOption(
    mode: Mode,
    selected: ReadSignal<Mode>,
    set_selected: WriteSignal<Mode>,
) -> impl IntoView {
    view! {
        <label class="mode-option">
            <input
                type="radio"
                name="mode"
                prop:checked=move || selected.get() == mode
                on:change=move |_| set_selected.set(mode)
            />
            <span>{mode.label()}</span>
        </label>
    }
}

/// Blocking banner shown when `OPENAI_API_KEY` is not configured
#[component]
fn SetupInstructions() -> impl IntoView {
    view! {
        <div class="error-message">
            <span class="icon">"⚠️"</span>
            <span>"OpenAI APIキーが設定されていません。環境変数 OPENAI_API_KEY を設定してください。"</span>
        </div>
        <div class="info-message">
            <span class="icon">"ℹ️"</span>
            <span>"サーバーにデプロイしている場合は、環境変数 OPENAI_API_KEY を設定してからアプリを再起動してください。"</span>
        </div>
        <div class="info-message">
            <span class="icon">"ℹ️"</span>
            <span>"ローカル環境の場合は、.envファイルに OPENAI_API_KEY=your_api_key を設定してください。"</span>
        </div>
    }
}

/// Question input, submit button, and answer/error display
#[component]
fn QuestionForm(mode: ReadSignal<Mode>) -> impl IntoView {
    let (question, set_question) = signal(String::new());
    let (answer, set_answer) = signal(Option::<String>::None);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);

    let do_ask = move || {
        // One in-flight call at a time
        if loading.get() {
            return;
        }

        let text = question.get();
        if text.trim().is_empty() {
            set_error.set(Some(
                "質問を入力してから「質問する」ボタンを押してください。".to_string(),
            ));
            return;
        }

        let current_mode = mode.get();

        set_loading.set(true);
        set_error.set(None);

        leptos::task::spawn_local(async move {
            match ask_expert(current_mode, text).await {
                Ok(response) => {
                    set_answer.set(Some(response));
                    set_error.set(None);
                }
                Err(e) => {
                    set_error.set(Some(format!("エラーが発生しました: {}", e)));
                    leptos::logging::error!("API Error: {}", e);
                }
            }
            set_loading.set(false);
        });
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        do_ask();
    };

    view! {
        <form class="question-form" on:submit=on_submit>
            <label class="question-label">{move || mode.get().input_label()}</label>
            <textarea
                class="question-input"
                placeholder=move || mode.get().placeholder()
                rows="4"
                prop:value=question
                on:input=move |ev| set_question.set(event_target_value(&ev))
                prop:disabled=loading
            />

            <button type="submit" class="ask-button" prop:disabled=loading>
                "質問する"
            </button>
        </form>

        // 回答を生成中...
        {move || loading.get().then(|| view! {
            <div class="loading-message">
                <span class="spinner"></span>
                <span>"回答を生成中..."</span>
            </div>
        })}

        // Validation and service errors share one inline banner
        {move || error.get().map(|err| view! {
            <div class="error-message">
                <span class="icon">"⚠️"</span>
                <span>{err}</span>
            </div>
        })}

        // 回答
        {move || answer.get().map(|text| view! {
            <div class="answer-container">
                <h3 class="answer-heading">"回答"</h3>
                <p class="answer-text">{text}</p>
            </div>
        })}
    }
}
