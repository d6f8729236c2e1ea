// src/main.rs
mod api;
mod app;
mod board;
mod config;
mod controller;
mod models;
mod view;

fn main() {
    yew::Renderer::<app::App>::new().render();
}
