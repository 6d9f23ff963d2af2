mod errors;
mod library_service;

pub use errors::{InvalidReturnReason, LibraryError, MissingEntity, Result};
pub use library_service::{
    ReturnReceipt, ServiceDependencies, add_book, add_member, issue_book, return_book,
    show_inventory, show_inventory_matching,
};
