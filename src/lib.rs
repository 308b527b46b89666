pub mod app;
pub mod cli;
pub mod config;
pub mod i18n;
pub mod output;
pub mod product;
pub mod site;

#[cfg(test)]
mod tests;
