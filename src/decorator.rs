//! Decorator: wrap a component behind the same trait to layer behaviour.
//!
//! Decorators are generic over what they wrap. Because `&C` and `Box<C>` are
//! components too, a component can be decorated by reference and stay usable
//! on its own, or decorated by value when the caller wants to hand over the
//! whole stack (including `Box<dyn Component>` built at runtime).

use crate::console::{banner, separator};
use crate::error::Result;
use std::io::Write;
use tracing::{debug, info};

pub trait Component {
    fn operation(&self) -> String;
}

impl<C: Component + ?Sized> Component for &C {
    fn operation(&self) -> String {
        (**self).operation()
    }
}

impl<C: Component + ?Sized> Component for Box<C> {
    fn operation(&self) -> String {
        (**self).operation()
    }
}

pub struct ConcreteComponent;

impl Component for ConcreteComponent {
    fn operation(&self) -> String {
        "ConcreteComponent".to_string()
    }
}

pub struct DecoratorA<C> {
    wrapped: C,
}

impl<C: Component> DecoratorA<C> {
    pub fn new(wrapped: C) -> Self {
        debug!(layer = "A", "decorating component");
        Self { wrapped }
    }
}

impl<C: Component> Component for DecoratorA<C> {
    fn operation(&self) -> String {
        format!("ConcreteDecoratorA({})", self.wrapped.operation())
    }
}

pub struct DecoratorB<C> {
    wrapped: C,
}

impl<C: Component> DecoratorB<C> {
    pub fn new(wrapped: C) -> Self {
        debug!(layer = "B", "decorating component");
        Self { wrapped }
    }
}

impl<C: Component> Component for DecoratorB<C> {
    fn operation(&self) -> String {
        format!("ConcreteDecoratorB({})", self.wrapped.operation())
    }
}

/// Writes a `RESULT:` line for any component, decorated or not.
pub fn client_code<C, W>(component: &C, out: &mut W) -> Result<()>
where
    C: Component + ?Sized,
    W: Write,
{
    writeln!(out, "RESULT: {}", component.operation())?;
    Ok(())
}

/// Full demonstration: a plain component, then two stacked decorators that
/// borrow it.
pub fn demo<W: Write>(out: &mut W) -> Result<()> {
    info!("running decorator demo");
    let simple = ConcreteComponent;
    banner(out, "Client: I've got a simple component:")?;
    client_code(&simple, out)?;
    separator(out)?;

    let decorator1 = DecoratorA::new(&simple);
    let decorator2 = DecoratorB::new(&decorator1);
    banner(out, "Client: Now I've got a decorated component:")?;
    client_code(&decorator1, out)?;
    client_code(&decorator2, out)?;
    Ok(())
}
