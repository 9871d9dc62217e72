use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::components::home::Home;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/ikuji-web.css"/>
        <Title text="育児質問アプリ - AI専門家が子育ての疑問にお答えします"/>
        <Meta name="description" content="子どもの栄養と睡眠についてAI専門家に質問できるアプリ"/>

        <Router>
            <main>
                <Routes fallback=|| "Page not found.">
                    <Route path=path!("/") view=Home/>
                </Routes>
            </main>
        </Router>
    }
}
