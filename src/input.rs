use crate::counter::Action;

/// Maps a keyboard event to a counter action. Keys outside the fixed
/// binding set (and `r`/`R` without Ctrl or Meta) map to nothing.
pub fn action_for(key: &str, ctrl: bool, meta: bool) -> Option<Action> {
    match key {
        "ArrowUp" | "+" => Some(Action::Increment),
        "ArrowDown" | "-" => Some(Action::Decrement),
        "r" | "R" if ctrl || meta => Some(Action::Reset),
        _ => None,
    }
}
