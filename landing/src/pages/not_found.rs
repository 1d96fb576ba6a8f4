use crate::sections::{Footer, Nav};
use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Nav in_page=false />
        <main>
            <section class="page-header">
                <div class="container">
                    <h1 class="page-title">"404"</h1>
                    <p class="page-description">"Nothing here. "<a href="/">"Back to the start"</a></p>
                </div>
            </section>
        </main>
        <Footer />
    }
}
