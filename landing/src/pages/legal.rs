// Legal placeholder pages linked from the footer
use crate::config::use_site_config;
use crate::sections::{Footer, Nav};
use leptos::prelude::*;

#[component]
pub fn PrivacyPage() -> impl IntoView {
    view! {
        <LegalPage title="Privacy Policy">
            <p>
                "This site sets no cookies and runs no analytics. Messages sent to our "
                "contact address are used only to answer them."
            </p>
        </LegalPage>
    }
}

#[component]
pub fn ImprintPage() -> impl IntoView {
    let config = use_site_config();
    view! {
        <LegalPage title="Imprint">
            <p>{config.brand}" (in formation)"</p>
            <p>"Contact: "<a href=config.mailto()>{config.contact_email}</a></p>
        </LegalPage>
    }
}

#[component]
fn LegalPage(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <Nav in_page=false />
        <main>
            <section class="page-header">
                <div class="container">
                    <h1 class="page-title">{title}</h1>
                    <p class="page-description">"Placeholder, final text pending legal review."</p>
                </div>
            </section>
            <section class="legal">
                <div class="container legal-body">
                    {children()}
                </div>
            </section>
        </main>
        <Footer />
    }
}
