// src/macros.rs
#[macro_export]
macro_rules! s {
    // Owned-string shorthand

    () => {
        ::std::string::String::new()
    };
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}
