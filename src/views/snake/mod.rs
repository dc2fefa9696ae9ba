pub mod board_canvas;
pub mod game_over_screen;
pub mod snake_game_screen;
pub mod snake_mediator;
