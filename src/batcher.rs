use std::vec::IntoIter;

/// Splits a list of items into consecutive batches of at most `size` items.
pub struct Batcher<T> {
    size: usize,
    items: IntoIter<T>,
}

impl<T> Batcher<T> {
    pub fn new(items: Vec<T>, size: usize) -> Self {
        Self {
            items: items.into_iter(),
            size: size.max(1),
        }
    }
}

impl<T> Iterator for Batcher<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let items: Vec<T> = self.items.by_ref().take(self.size).collect();
        if items.is_empty() {
            None
        } else {
            Some(items)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Batcher;

    #[test]
    fn batches() {
        let batches: Vec<_> = Batcher::new((0..7).collect(), 3).collect();
        assert_eq!(batches, vec![vec![0, 1, 2], vec![3, 4, 5], vec![6]]);
        assert_eq!(Batcher::new(Vec::<u8>::new(), 3).count(), 0);
        assert_eq!(Batcher::new(vec![1, 2], 0).count(), 2);
    }
}
