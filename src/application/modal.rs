//! Generic show/hide container
//!
//! A closed modal holds nothing. Closing hands back whatever was inside so
//! the caller decides whether to keep or drop it.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal<T> {
    Closed,
    Open(T),
}

impl<T> Default for Modal<T> {
    fn default() -> Self {
        Modal::Closed
    }
}

impl<T> Modal<T> {
    /// Open with `content`, replacing anything already shown
    pub fn open(&mut self, content: T) {
        *self = Modal::Open(content);
    }

    pub fn close(&mut self) -> Option<T> {
        match std::mem::replace(self, Modal::Closed) {
            Modal::Open(content) => Some(content),
            Modal::Closed => None,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Modal::Open(_))
    }

    pub fn get(&self) -> Option<&T> {
        match self {
            Modal::Open(content) => Some(content),
            Modal::Closed => None,
        }
    }

    pub fn get_mut(&mut self) -> Option<&mut T> {
        match self {
            Modal::Open(content) => Some(content),
            Modal::Closed => None,
        }
    }
}
