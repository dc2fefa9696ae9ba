//! Draws a [`GameState`] as filled squares on an iced canvas.
use iced::{
    mouse,
    widget::canvas::{self, Canvas, Frame, Geometry},
    Color, Element, Length, Point, Rectangle, Renderer, Size, Theme,
};

use crate::{
    app::Message,
    models::snake::{
        block::Block,
        snake_game::{GameState, HEIGHT, WIDTH},
    },
};

pub const BACKGROUND_COLOR: Color = Color::BLACK;
pub const SNAKE_COLOR: Color = Color {
    r: 0.0,
    g: 0.5,
    b: 0.0,
    a: 1.0,
};
pub const SNACK_COLOR: Color = Color {
    r: 1.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

#[derive(Debug)]
pub struct BoardCanvas {
    state: GameState,
}

impl BoardCanvas {
    #[must_use]
    pub fn new(state: GameState) -> Self {
        Self { state }
    }

    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn view<'a>(self) -> Element<'a, Message> {
        Canvas::<_, Message, Theme, Renderer>::new(self)
            .width(Length::Fixed(WIDTH as f32))
            .height(Length::Fixed(HEIGHT as f32))
            .into()
    }
}

impl canvas::Program<Message> for BoardCanvas {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        // a new frame every draw, so nothing from the last tick survives
        let mut frame = Frame::new(renderer, bounds.size());
        frame.fill_rectangle(Point::ORIGIN, bounds.size(), BACKGROUND_COLOR);
        for block in self.state.snake_blocks() {
            fill_block(&mut frame, block, SNAKE_COLOR);
        }
        fill_block(&mut frame, &self.state.snack_block(), SNACK_COLOR);
        vec![frame.into_geometry()]
    }
}

#[allow(clippy::cast_precision_loss)]
fn fill_block(frame: &mut Frame, block: &Block, color: Color) {
    let (x, y) = block.position;
    let (w, h) = block.size;
    let top_left = Point::new(x as f32 - w as f32 / 2.0, y as f32 - h as f32 / 2.0);
    frame.fill_rectangle(top_left, Size::new(w as f32, h as f32), color);
}
