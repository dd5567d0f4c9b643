mod registry;

pub use registry::LanguageRegistry;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
