//! Presents a card over a phone-sized viewport, drags it down with a quick
//! flick, and lets it dismiss itself once it slides off screen.
//!
//! Run with `RUST_LOG=debug cargo run --example present_card` to watch the
//! state machine's decisions.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use scroll_card::prelude::*;

const FRAME: Duration = Duration::from_millis(16);

/// A list of fixed-height rows, standing in for a table view.
struct RowList {
    rows: usize,
    row_height: f32,
    origin: (f32, f32),
}

impl CardContent for RowList {
    fn layout(&mut self, constraints: Constraints) -> Size {
        constraints.constrain(Size::new(constraints.max_width, self.rows as f32 * self.row_height))
    }

    fn set_origin(&mut self, x: f32, y: f32) {
        self.origin = (x, y);
    }

    fn detach(&mut self) {
        log::info!("Row list detached at {:?}", self.origin);
    }
}

fn run_frames(card: &mut ScrollableCard, viewport: Rect) {
    while card.advance(FRAME) {
        if card
            .take_change_flags()
            .contains(ChangeFlags::NEEDS_LAYOUT)
        {
            card.layout(viewport);
        }
    }
    card.layout(viewport);
}

fn main() -> Result<(), ConfigError> {
    env_logger::init();

    let viewport = Rect::new(0.0, 0.0, 375.0, 812.0);
    let dismissed = Rc::new(Cell::new(false));
    let dismissed_flag = dismissed.clone();

    let content = RowList {
        rows: 12,
        row_height: 44.0,
        origin: (0.0, 0.0),
    };
    let mut card = ScrollableCard::new(
        CardConfig::new(CardSizing::Fixed(600.0), 0.0)
            .title("Test")
            .can_drag(true),
        content,
    )?
    .on_state_change(|state| println!("card is now {:?}", state))
    .on_dismiss(move || dismissed_flag.set(true));

    card.layout(viewport);
    card.did_appear();
    run_frames(&mut card, viewport);
    println!(
        "opened: frame {:?}, overlay {:.2}",
        card.frame(),
        card.appearance().overlay_opacity
    );

    // Grab the header and flick down
    let x = viewport.width / 2.0;
    let mut y = card.frame().y + 30.0;
    card.event(&Event::MouseDown {
        x,
        y,
        button: MouseButton::Left,
    });
    for _ in 0..6 {
        y += 25.0;
        card.advance(FRAME);
        card.event(&Event::MouseMove { x, y });
    }
    card.advance(FRAME);
    y += 30.0;
    card.event(&Event::MouseUp {
        x,
        y,
        button: MouseButton::Left,
    });
    run_frames(&mut card, viewport);

    println!(
        "after flick: state {:?}, dismissed {}",
        card.state(),
        dismissed.get()
    );
    Ok(())
}
