use crate::PageRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    FetchPage(PageRequest),
}
