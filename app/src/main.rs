// src/main.rs: Body Lab studio front end (Rust + Yew + WASM)
mod account;
mod app;
mod avatar;
mod calendar;
mod carousel;
mod config;
mod hooks;
mod pages;
mod scroll;
mod studio;

fn main() {
    yew::Renderer::<app::App>::new().render();
}
