//! Gift card activation-code generation.

use tracing::debug;
use uuid::Uuid;

/// Length of a generated gift card code.
const CODE_LENGTH: usize = 13;

/// Generate a fresh gift card activation code.
///
/// The code is the first 13 characters of a random v4 UUID in its
/// hyphenated form, e.g. `"1fa0e4a5-72b9"`. That is short enough to read
/// over the phone and collision-resistant at order volumes, but it is not
/// globally unique: callers that need a hard uniqueness guarantee must
/// enforce it where the code is stored.
///
/// Thread-safe; each call draws fresh randomness from the OS.
#[must_use]
pub fn generate_gift_card_code() -> String {
    let mut code = Uuid::new_v4().to_string();
    code.truncate(CODE_LENGTH);
    debug!("generated gift card code");
    code
}
