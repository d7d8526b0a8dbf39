/// LIFO stack used while converting and evaluating expressions.
///
/// The element count is kept alongside the storage and must always agree
/// with it.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenStack<T> {
    items: Vec<T>,
    size: usize,
}

impl<T> TokenStack<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            size: 0,
        }
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
        self.size += 1;
    }

    pub fn pop(&mut self) -> Option<T> {
        let item = self.items.pop()?;
        self.size -= 1;
        Some(item)
    }

    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn size(&self) -> usize {
        self.size
    }
}

impl<T> Default for TokenStack<T> {
    fn default() -> Self {
        Self::new()
    }
}
