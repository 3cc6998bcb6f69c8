mod document;
pub use document::*;

#[cfg(test)]
mod test;
