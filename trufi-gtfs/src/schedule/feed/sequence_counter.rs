/// hands out run-local ids in insertion order, starting at zero.
#[derive(Debug, Clone, Default)]
pub struct SequenceCounter {
    next: u32,
}

impl SequenceCounter {
    pub fn new() -> SequenceCounter {
        SequenceCounter::default()
    }

    pub fn next_id(&mut self) -> u32 {
        let id = self.next;
        self.next += 1;
        id
    }
}
