use crate::cursor::TokenCursor;

/// Apply `rule` `times` times in a row and report whether every application
/// succeeded. The cursor always ends where it started.
pub fn repeat_probe<C, F>(cursor: &mut C, level: usize, mut rule: F, times: usize) -> bool
where
    C: TokenCursor + ?Sized,
    F: FnMut(&mut C, usize) -> bool,
{
    let marker = cursor.mark();
    let mut matched = true;
    for _ in 0..times {
        matched = rule(cursor, level);
        if !matched {
            break;
        }
    }
    marker.rollback(cursor);
    matched
}
