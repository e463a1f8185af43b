use crate::utils::Result;

/// Groups an identity stream into ordered chunks of at most `size` values.
/// Chunk boundaries follow arrival order only; the final chunk may be
/// short. An upstream error is yielded once and ends the iteration.
pub struct Batches<I> {
    identities: I,
    size: usize,
    done: bool,
}

impl<I> Batches<I> {
    pub fn new(identities: I, size: usize) -> Self {
        assert!(size > 0, "chunk size must be positive");
        Self {
            identities,
            size,
            done: false,
        }
    }
}

impl<I> Iterator for Batches<I>
where
    I: Iterator<Item = Result<String>>,
{
    type Item = Result<Vec<String>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let mut chunk = Vec::new();
        while chunk.len() < self.size {
            match self.identities.next() {
                Some(Ok(identity)) => chunk.push(identity),
                Some(Err(e)) => {
                    self.done = true;
                    return Some(Err(e));
                }
                None => {
                    self.done = true;
                    break;
                }
            }
        }
        if chunk.is_empty() {
            None
        } else {
            Some(Ok(chunk))
        }
    }
}
