// Home page - the whole pitch on one scrolling page
use crate::sections::{ContextSection, Footer, Hero, Nav, Revenue, Solution, Team};
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Nav />
        <main>
            <Hero />
            <ContextSection />
            <Solution />
            <Revenue />
            <Team />
        </main>
        <Footer />
    }
}
