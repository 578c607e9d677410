// Domain layer - UI element tree and page metadata
pub mod element;
pub mod page;
