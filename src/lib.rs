//! # Design Patterns: Creational and Structural
//!
//! Three small, self-contained pattern demonstrations:
//!
//! ## Abstract Factory
//! - Two correlated product families (`BlackAnimal`, `WhiteAnimal`)
//! - One factory per variant (`CatFactory`, `DogFactory`)
//! - Client code written only against the traits
//!
//! ## Factory Method
//! - A `Creator` trait with one required factory method
//! - Shared behaviour built on top of it as a provided method
//!
//! ## Decorator
//! - Generic wrappers that layer behaviour behind the same trait
//! - Borrowed, owned and boxed stacks
//!
//! Run the demonstrations with:
//! ```bash
//! cargo run --bin abstract_factory
//! cargo run --bin factory_method
//! cargo run --bin decorator
//! ```

pub mod abstract_factory;
pub mod console;
pub mod decorator;
pub mod error;
pub mod factory_method;
pub mod logging;

pub use error::{DemoError, Result};
