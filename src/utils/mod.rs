pub mod pagination;

pub use pagination::{ListContext, PAGINATE_BY, Page, PageError, Paginator};
