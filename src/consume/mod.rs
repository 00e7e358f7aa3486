//! Pool consumption operators.
//!
//! Dice rolls, fixed-width integer draws, the coin-flip symbol string,
//! and the categorical eight-ball draw. All operators destructively pop
//! bits from the pool and propagate exhaustion as typed failures rather
//! than truncating their result.

mod eight_ball;
mod operators;

pub use eight_ball::{eight_ball_response, EIGHT_BALL_RESPONSES};
pub use operators::{
    draw_category, draw_int, draw_symbol_string, roll_dice, DrawError,
    DEFAULT_REJECTION_BUDGET,
};
