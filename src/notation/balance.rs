use crate::notation::TokenStack;

/// Checks that every `(` is closed by a matching `)` and that no `)` shows
/// up without one. Other characters are ignored.
pub fn is_balanced(text: &str) -> bool {
    let mut markers = TokenStack::new();

    for ch in text.chars() {
        match ch {
            '(' => markers.push('('),
            ')' => {
                if markers.peek() == Some(&'(') {
                    markers.pop();
                } else {
                    return false;
                }
            }
            _ => {}
        }
    }

    markers.is_empty()
}
