// TESSA Landing Page - Leptos 0.8 Edition
// Built by the TESSA Team (c)2025

fn main() {
    tessa_landing::start();
}
