pub(crate) trait SplitEvenly<T> {
    /// Split into `parts` consecutive groups whose sizes differ by at most
    /// one, preserving order. `parts` is clamped to `1..=len`.
    fn split_evenly(self, parts: usize) -> Vec<Vec<T>>;
}

impl<T> SplitEvenly<T> for Vec<T> {
    fn split_evenly(self, parts: usize) -> Vec<Vec<T>> {
        let len = self.len();
        let parts = parts.clamp(1, len.max(1));
        let base = len / parts;
        let extra = len % parts;
        let mut items = self.into_iter();
        (0..parts)
            .map(|idx| {
                items
                    .by_ref()
                    .take(base + usize::from(idx < extra))
                    .collect()
            })
            .collect()
    }
}
