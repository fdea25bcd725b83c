use std::{
    mem::replace,
    ops::{Index as IndexRO, IndexMut},
};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub(crate) struct Index(usize);
impl Index {
    #[inline(always)]
    pub(crate) const fn new(value: usize) -> Self {
        Self(value)
    }
}

#[derive(Debug)]
enum Entry<T> {
    Occupied(T),
    Free(Option<Index>)
}

// ASSERT: user is responsible for dangling references
#[derive(Debug)]
pub(crate) struct Arena<T> {
    items: Vec<Entry<T>>,
    free: Option<Index>,
    len: usize
}
impl<T> Arena<T> {
    #[inline]
    pub const fn new() -> Self {
        Self { items: Vec::new(), free: None, len: 0 }
    }
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { items: Vec::with_capacity(capacity), free: None, len: 0 }
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }
    #[inline]
    pub fn insert(&mut self, value: T) -> Index {
        self.len += 1;
        match self.free {
            Some(head) => {
                let next = replace(&mut self.items[head.0], Entry::Occupied(value));
                match next {
                    Entry::Free(next) => self.free = next,
                    _ => panic!("this should never happen!")
                }
                head
            },
            None => {
                let index = Index(self.items.len());
                self.items.push(Entry::Occupied(value));
                index
            }
        }
    }
    #[inline]
    pub fn remove(&mut self, index: Index) -> Option<T> {
        let entry = self.items.get_mut(index.0)?;
        match entry {
            Entry::Occupied(_) => {
                let old = replace(entry, Entry::Free(self.free));
                self.free = Some(index);
                self.len -= 1;
                match old {
                    Entry::Occupied(value) => Some(value),
                    _ => panic!("this should never happen!")
                }
            },
            _ => None
        }
    }
    /// Drops every slot past the first `keep` and forgets the free list.
    ///
    /// The first `keep` slots have to be occupied.
    #[inline]
    pub fn truncate(&mut self, keep: usize) {
        self.items.truncate(keep);
        self.free = None;
        self.len = self.items.len();
    }
    #[inline]
    pub fn get(&self, index: Index) -> Option<&T> {
        match self.items.get(index.0) {
            Some(Entry::Occupied(value)) => Some(value),
            _ => None
        }
    }
    #[inline]
    pub fn get_mut(&mut self, index: Index) -> Option<&mut T> {
        match self.items.get_mut(index.0) {
            Some(Entry::Occupied(value)) => Some(value),
            _ => None
        }
    }
}
impl<T> IndexRO<Index> for Arena<T> {
    type Output = T;
    #[inline]
    fn index(&self, index: Index) -> &Self::Output {
        self.get(index).unwrap()
    }
}
impl<T> IndexMut<Index> for Arena<T> {
    #[inline]
    fn index_mut(&mut self, index: Index) -> &mut Self::Output {
        self.get_mut(index).unwrap()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn free_list_reuses_slots() {
        let mut arena = Arena::with_capacity(4);
        let a = arena.insert('a');
        let b = arena.insert('b');
        let c = arena.insert('c');
        assert_eq!(arena.len(), 3);
        assert_eq!(arena.remove(b), Some('b'));
        assert_eq!(arena.remove(b), None);
        assert_eq!(arena.get(b), None);
        let d = arena.insert('d');
        assert_eq!(d, b, "freed slot has to be reused first");
        assert_eq!(arena[a], 'a');
        assert_eq!(arena[c], 'c');
        assert_eq!(arena[d], 'd');
        arena[d] = 'e';
        assert_eq!(arena.get(d), Some(&'e'));
    }
    #[test]
    fn truncate_keeps_prefix() {
        let mut arena = Arena::new();
        let keep = arena.insert(0);
        let dropped = arena.insert(1);
        arena.insert(2);
        arena.remove(dropped);
        arena.truncate(1);
        assert_eq!(arena.len(), 1);
        assert_eq!(arena[keep], 0);
        assert_eq!(arena.get(dropped), None);
        assert_eq!(arena.insert(3), dropped, "slots after the prefix are handed out again");
    }
}
