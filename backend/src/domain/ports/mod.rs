//! Domain ports for the hexagonal boundary.

mod book_catalogue;

#[cfg(test)]
pub use book_catalogue::MockBookCatalogue;
pub use book_catalogue::BookCatalogue;
