use macroquad::prelude::Conf;

mod actions;
mod app;
mod constants;
mod controls;
mod hud;
mod projection;
mod render;
mod state;

fn window_conf() -> Conf {
    app::window_conf()
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    app::run().await;
}
