//! Abstract Factory: one factory per variant, two correlated product families.
//!
//! Every factory hands out a [`BlackAnimal`] and a [`WhiteAnimal`] of the same
//! variant. Client code only ever sees the traits, so swapping `CatFactory`
//! for `DogFactory` (or a factory defined in another crate) changes nothing
//! on the client side.

use crate::console::{banner, separator};
use crate::error::Result;
use std::io::Write;
use tracing::{debug, info};

// ============================================================================
// Product families
// ============================================================================

/// First product family.
pub trait BlackAnimal {
    fn speak(&self) -> String;
}

/// Second product family. Can collaborate with any [`BlackAnimal`], but the
/// result only makes sense when both come from the same factory.
pub trait WhiteAnimal {
    fn speak(&self) -> String;

    /// No variant check happens here: a dog happily narrates a cat.
    fn interact_with(&self, collaborator: &dyn BlackAnimal) -> String;
}

// ============================================================================
// Concrete products
// ============================================================================

pub struct BlackCat;

impl BlackAnimal for BlackCat {
    fn speak(&self) -> String {
        "Meow.".to_string()
    }
}

pub struct BlackDog;

impl BlackAnimal for BlackDog {
    fn speak(&self) -> String {
        "Woof.".to_string()
    }
}

pub struct WhiteCat;

impl WhiteAnimal for WhiteCat {
    fn speak(&self) -> String {
        "White Meow.".to_string()
    }

    fn interact_with(&self, collaborator: &dyn BlackAnimal) -> String {
        format!(
            "The black animals come here and speak ( {} )",
            collaborator.speak()
        )
    }
}

pub struct WhiteDog;

impl WhiteAnimal for WhiteDog {
    fn speak(&self) -> String {
        "White Woof.".to_string()
    }

    fn interact_with(&self, collaborator: &dyn BlackAnimal) -> String {
        format!(
            "the black animals come here and speak ( {} )",
            collaborator.speak()
        )
    }
}

// ============================================================================
// Factories
// ============================================================================

/// Creates one member of each family. Every call allocates a new product.
pub trait AnimalsFactory {
    fn create_black_animal(&self) -> Box<dyn BlackAnimal>;
    fn create_white_animal(&self) -> Box<dyn WhiteAnimal>;
}

pub struct CatFactory;

impl AnimalsFactory for CatFactory {
    fn create_black_animal(&self) -> Box<dyn BlackAnimal> {
        debug!(variant = "cat", "creating black animal");
        Box::new(BlackCat)
    }

    fn create_white_animal(&self) -> Box<dyn WhiteAnimal> {
        debug!(variant = "cat", "creating white animal");
        Box::new(WhiteCat)
    }
}

pub struct DogFactory;

impl AnimalsFactory for DogFactory {
    fn create_black_animal(&self) -> Box<dyn BlackAnimal> {
        debug!(variant = "dog", "creating black animal");
        Box::new(BlackDog)
    }

    fn create_white_animal(&self) -> Box<dyn WhiteAnimal> {
        debug!(variant = "dog", "creating white animal");
        Box::new(WhiteDog)
    }
}

// ============================================================================
// Client
// ============================================================================

/// Runs one demonstration against `factory`, writing exactly three lines.
///
/// Works with concrete factories and with `dyn AnimalsFactory` alike. Both
/// products are dropped when this returns.
pub fn client_code<F, W>(factory: &F, out: &mut W) -> Result<()>
where
    F: AnimalsFactory + ?Sized,
    W: Write,
{
    info!("running abstract factory client");
    let black_animal = factory.create_black_animal();
    let white_animal = factory.create_white_animal();

    writeln!(out, "{}", black_animal.speak())?;
    writeln!(out, "{}", white_animal.speak())?;
    writeln!(out, "{}", white_animal.interact_with(black_animal.as_ref()))?;
    Ok(())
}

/// Full demonstration: the same client code against each built-in factory.
pub fn demo<W: Write>(out: &mut W) -> Result<()> {
    banner(out, "Client: Testing client code with the first factory type:")?;
    client_code(&CatFactory, out)?;
    separator(out)?;
    banner(
        out,
        "Client: Testing the same client code with the second factory type:",
    )?;
    client_code(&DogFactory, out)?;
    Ok(())
}
