//! Factory Method: a creator defers the choice of product to one overridable
//! method and builds the rest of its behaviour on top of it.

use crate::console::{banner, separator};
use crate::error::Result;
use std::io::Write;
use tracing::{debug, info};

pub trait Animal {
    fn speak(&self) -> String;
}

pub struct Dog;

impl Animal for Dog {
    fn speak(&self) -> String {
        "{wof}".to_string()
    }
}

pub struct Cat;

impl Animal for Cat {
    fn speak(&self) -> String {
        "{meow}".to_string()
    }
}

pub trait Creator {
    /// The factory method. Implementors only decide which animal to build.
    fn create_life(&self) -> Box<dyn Animal>;

    fn life_action(&self) -> String {
        let life = self.create_life();
        format!("Creator: let's life do some action: {}", life.speak())
    }
}

pub struct DogCreator;

impl Creator for DogCreator {
    fn create_life(&self) -> Box<dyn Animal> {
        debug!(variant = "dog", "creating animal");
        Box::new(Dog)
    }
}

pub struct CatCreator;

impl Creator for CatCreator {
    fn create_life(&self) -> Box<dyn Animal> {
        debug!(variant = "cat", "creating animal");
        Box::new(Cat)
    }
}

pub fn client_code<C, W>(creator: &C, out: &mut W) -> Result<()>
where
    C: Creator + ?Sized,
    W: Write,
{
    info!("running factory method client");
    writeln!(
        out,
        "Client: I'm not aware of the creator's class, but different animals created."
    )?;
    writeln!(out, "{}", creator.life_action())?;
    Ok(())
}

pub fn demo<W: Write>(out: &mut W) -> Result<()> {
    banner(out, "App: Launched with the dogCreator.")?;
    client_code(&DogCreator, out)?;
    separator(out)?;
    banner(out, "App: Launched with the catCreator.")?;
    client_code(&CatCreator, out)?;
    Ok(())
}
