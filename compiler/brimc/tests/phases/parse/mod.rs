//! Scanner and parser behavior observed through the driver.

mod grammar;
mod lexer;
