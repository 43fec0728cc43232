pub mod codegen;
pub mod errors;
pub mod kinds;
pub mod loader;
pub mod model;
pub mod orchestrator;

#[cfg(test)]
mod tests;
