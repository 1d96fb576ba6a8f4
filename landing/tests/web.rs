//! Browser tests for the landing page behaviours.
//!
//! Run with `wasm-pack test --headless --firefox landing`.

#![cfg(target_arch = "wasm32")]

use leptos::prelude::*;
use tessa_landing::DomError;
use std::cell::Cell;
use std::rc::Rc;

use tessa_landing::behavior::{
    Reveal, RevealState, Threshold, follow_anchor, observe_once, scroll_to_section,
};
use tessa_landing::sections::Nav;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Event, EventInit, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Fresh mount point so tests never see each other's DOM.
fn container() -> HtmlElement {
    let el: HtmlElement = document().create_element("div").unwrap().unchecked_into();
    document().body().unwrap().append_child(&el).unwrap();
    el
}

async fn sleep(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    wasm_bindgen_futures::JsFuture::from(promise).await.unwrap();
}

/// Poll `done` every 50ms for up to two seconds.
async fn wait_until(done: impl Fn() -> bool) -> bool {
    for _ in 0..40 {
        if done() {
            return true;
        }
        sleep(50).await;
    }
    done()
}

/// Fixed-position mount point that stays in the viewport whatever the scroll.
fn pinned_container() -> HtmlElement {
    let root = container();
    let style = root.style();
    style.set_property("position", "fixed").unwrap();
    style.set_property("top", "0").unwrap();
    style.set_property("left", "0").unwrap();
    root
}

fn scroll_y() -> f64 {
    web_sys::window().unwrap().scroll_y().unwrap()
}

fn query(root: &HtmlElement, selector: &str) -> HtmlElement {
    root.query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("no element matches {selector}"))
        .unchecked_into()
}

fn cancelable_click() -> Event {
    let init = EventInit::new();
    init.set_cancelable(true);
    Event::new_with_event_init_dict("click", &init).unwrap()
}

#[wasm_bindgen_test]
fn scroll_to_present_section_succeeds() {
    let root = container();
    root.set_inner_html(r#"<section id="present-section" style="height: 2000px"></section>"#);

    assert_eq!(scroll_to_section("present-section"), Ok(()));
}

#[wasm_bindgen_test]
fn scroll_to_absent_section_is_an_error_not_a_panic() {
    assert_eq!(
        scroll_to_section("no-such-section"),
        Err(DomError::MissingSection("no-such-section".into()))
    );
}

#[wasm_bindgen_test]
fn anchor_to_absent_section_is_ignored() {
    let event = cancelable_click();
    assert!(!follow_anchor(&event, "#no-such-section"));
    // The jump is still suppressed so the URL hash stays untouched.
    assert!(event.default_prevented());
}

#[wasm_bindgen_test]
fn non_fragment_links_keep_default_behaviour() {
    let event = cancelable_click();
    assert!(!follow_anchor(&event, "/privacy"));
    assert!(!event.default_prevented());
}

#[wasm_bindgen_test]
async fn reveal_starts_hidden_and_shows_once_in_view() {
    let root = pinned_container();
    let _handle = leptos::mount::mount_to(root.clone(), || {
        view! {
            <Reveal threshold=0.0 classes="hello">
                <p>"hello"</p>
            </Reveal>
        }
    });

    let hello = query(&root, ".hello");
    assert!(hello.class_list().contains("reveal"));
    assert!(!hello.class_list().contains("is-visible"));
    assert!(wait_until(|| hello.class_list().contains("is-visible")).await);

    // Scrolling away never hides it again.
    root.style().set_property("top", "5000px").unwrap();
    sleep(200).await;
    assert!(hello.class_list().contains("is-visible"));

    root.remove();
}

#[wasm_bindgen_test]
async fn menu_toggles_and_closes_on_link_selection() {
    let root = container();
    let _handle = leptos::mount::mount_to(root.clone(), || view! { <Nav /> });

    let links = query(&root, ".nav-links");
    assert!(!links.class_list().contains("open"));

    query(&root, ".nav-toggle").click();
    sleep(20).await;
    assert!(links.class_list().contains("open"));

    // No #team section is mounted here: the menu still closes, nothing throws.
    query(&root, r##"a[href="#team"]"##).click();
    sleep(20).await;
    assert!(!links.class_list().contains("open"));
    root.remove();
}

#[wasm_bindgen_test]
async fn menu_link_scrolls_to_section_and_closes_overlay() {
    let root = container();
    root.set_inner_html(
        r#"<div style="height: 3000px"></div><section id="team" style="height: 2000px"></section>"#,
    );
    let _handle = leptos::mount::mount_to(root.clone(), || view! { <Nav /> });
    web_sys::window().unwrap().scroll_to_with_x_and_y(0.0, 0.0);
    sleep(50).await;

    query(&root, ".nav-toggle").click();
    sleep(20).await;
    let links = query(&root, ".nav-links");
    assert!(links.class_list().contains("open"));

    query(&root, r##"a[href="#team"]"##).click();
    sleep(20).await;
    assert!(!links.class_list().contains("open"));
    assert!(wait_until(|| scroll_y() > 2000.0).await);
    // The jump was suppressed, so the hash never changed.
    assert_ne!(web_sys::window().unwrap().location().hash().unwrap(), "#team");

    root.remove();
}

#[wasm_bindgen_test]
async fn anchor_to_present_section_scrolls_there() {
    let root = container();
    root.set_inner_html(
        r#"<div style="height: 3000px"></div><section id="economics-target" style="height: 2000px"></section>"#,
    );
    web_sys::window().unwrap().scroll_to_with_x_and_y(0.0, 0.0);
    sleep(50).await;

    let event = cancelable_click();
    assert!(follow_anchor(&event, "#economics-target"));
    assert!(event.default_prevented());
    assert!(wait_until(|| scroll_y() > 2000.0).await);

    root.remove();
    web_sys::window().unwrap().scroll_to_with_x_and_y(0.0, 0.0);
}

#[wasm_bindgen_test]
async fn reveals_are_independent_and_keep_their_delay() {
    let root = pinned_container();
    let _handle = leptos::mount::mount_to(root.clone(), || {
        view! {
            <Reveal threshold=0.0 classes="near">
                <p>"near"</p>
            </Reveal>
            <div style="height: 20000px"></div>
            <Reveal threshold=0.0 delay_ms=250 classes="far">
                <p>"far"</p>
            </Reveal>
        }
    });

    let near = query(&root, ".near");
    let far = query(&root, ".far");
    assert!(wait_until(|| near.class_list().contains("is-visible")).await);
    sleep(200).await;
    assert!(!far.class_list().contains("is-visible"));
    assert_eq!(
        far.get_attribute("style").as_deref(),
        Some("transition-delay: 250ms")
    );

    root.remove();
}

#[wasm_bindgen_test]
async fn observation_disconnects_after_first_trigger() {
    let root = pinned_container();
    root.set_inner_html(r#"<p class="watched">watched</p>"#);
    let watched = query(&root, ".watched");

    let fired = Rc::new(Cell::new(0u32));
    let counter = Rc::clone(&fired);
    let observation = observe_once(&watched, Threshold::new(0.0), move || {
        counter.set(counter.get() + 1);
    })
    .unwrap();
    assert!(observation.is_active());
    assert_eq!(observation.state(), RevealState::Hidden);

    assert!(wait_until(|| !observation.is_active()).await);
    assert_eq!(observation.state(), RevealState::Revealed);
    assert_eq!(fired.get(), 1);

    // Moving out and back in again does not fire a second time.
    root.style().set_property("top", "5000px").unwrap();
    sleep(100).await;
    root.style().set_property("top", "0").unwrap();
    sleep(200).await;
    assert_eq!(fired.get(), 1);

    // A second disconnect is a no-op; dropping keeps it inactive.
    observation.disconnect();
    assert!(!observation.is_active());
    drop(observation);
    assert_eq!(fired.get(), 1);

    root.remove();
}

#[wasm_bindgen_test]
fn dropping_an_unfired_observation_disconnects_it() {
    let root = container();
    root.set_inner_html(r#"<div style="height: 20000px"></div><p class="below">below</p>"#);
    let below = query(&root, ".below");

    let observation = observe_once(&below, Threshold::default(), || {}).unwrap();
    assert!(observation.is_active());
    observation.disconnect();
    assert!(!observation.is_active());
    assert_eq!(observation.state(), RevealState::Hidden);
    drop(observation);

    root.remove();
}

#[wasm_bindgen_test]
async fn navbar_style_follows_scroll_offset() {
    let root = container();
    root.set_inner_html(r#"<div style="height: 4000px"></div>"#);
    let _handle = leptos::mount::mount_to(root.clone(), || view! { <Nav /> });
    let window = web_sys::window().unwrap();

    window.scroll_to_with_x_and_y(0.0, 0.0);
    sleep(50).await;
    let nav = query(&root, "nav");
    assert!(!nav.class_list().contains("scrolled"));

    window.scroll_to_with_x_and_y(0.0, 200.0);
    sleep(100).await;
    assert!(nav.class_list().contains("scrolled"));

    window.scroll_to_with_x_and_y(0.0, 0.0);
    sleep(100).await;
    assert!(!nav.class_list().contains("scrolled"));
}
