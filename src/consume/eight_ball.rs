//! Eight-ball response table.

/// The fixed eight-ball response table.
///
/// Twenty classic responses, carried over in full. The categorical draw
/// is 4 bits wide, so only indices 0 through 15 are reachable from the
/// pool; the last four entries are retained for table completeness and
/// direct lookups.
pub const EIGHT_BALL_RESPONSES: [&str; 20] = [
    "It is certain",
    "It is decidedly so",
    "Without a doubt",
    "Yes, definitely",
    "You may rely on it",
    "As I see it, yes",
    "Most likely",
    "Outlook good",
    "Yes",
    "Signs point to yes",
    "Reply hazy, try again",
    "Ask again later",
    "Better not tell you now",
    "Cannot predict now",
    "Concentrate and ask again",
    "Don't count on it",
    "My reply is no",
    "My sources say no",
    "Outlook not so good",
    "Very doubtful",
];

/// Looks up the response for a category index.
///
/// Returns `None` for indices beyond the table.
pub fn eight_ball_response(category: u8) -> Option<&'static str> {
    EIGHT_BALL_RESPONSES.get(category as usize).copied()
}
