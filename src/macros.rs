// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression: literals, consts, or vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! cells {
    // Owned table row shorthand: cells!["a", name, &team]
    ($($cell:expr),* $(,)?) => {
        vec![$( ::std::string::String::from($cell) ),*]
    };
}
