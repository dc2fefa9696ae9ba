use log::{debug, error};
use snakeblocks::{
    app::State,
    models::snake::snake_game::{MILLIS_BETWEEN_FRAMES, WIDTH},
};

fn main() {
    if std::env::var_os("RUST_LOG").is_none() {
        std::env::set_var("RUST_LOG", "snakeblocks=debug");
    }
    env_logger::init();
    debug!("Debug on. Ticking every {MILLIS_BETWEEN_FRAMES}ms on a {WIDTH} wide board");
    if let Err(e) = iced::application("Snake Game", State::update, State::view)
        .window_size(iced::Size::new(480.0, 560.0))
        .subscription(State::subscription)
        .run()
    {
        error!("Snake Game stopped with an error: {e}");
    }
}
