use crate::arena::Index;

pub(crate) type NodeIndex = Index;

/// Permanent sentinel standing in for every missing child, always black.
pub(crate) const NIL: NodeIndex = Index::new(0);
/// Permanent super-root, its right child is the real root.
pub(crate) const HEADER: NodeIndex = Index::new(1);

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Color {
    Red = 0,
    Black = 1,
}

#[derive(Debug)]
pub(crate) struct Node<T> {
    /// `None` only for the sentinel and the header.
    pub element: Option<T>,
    pub color: Color,
    pub children: [NodeIndex; 2]
}

impl<T> Node<T> {
    #[inline]
    pub const fn new(element: T, color: Color) -> Self {
        Self {
            element: Some(element),
            color,
            children: [NIL, NIL]
        }
    }
    #[inline]
    pub const fn reserved() -> Self {
        Self {
            element: None,
            color: Color::Black,
            children: [NIL, NIL]
        }
    }
    #[inline(always)]
    pub const fn is_black(&self) -> bool {
        match self.color {
            Color::Black => true,
            Color::Red => false
        }
    }
    #[inline(always)]
    pub const fn is_red(&self) -> bool {
        match self.color {
            Color::Black => false,
            Color::Red => true
        }
    }
}
