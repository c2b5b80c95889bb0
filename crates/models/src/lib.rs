pub mod errors;
pub mod db;
pub mod users;

#[cfg(test)]
mod tests;
