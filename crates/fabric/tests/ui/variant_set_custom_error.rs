use std::borrow::Cow;
use std::convert::Infallible;
use vfab::prelude::*;

#[vfab::fabric_error]
pub enum ParseError {
    #[error("Empty input{}", format_context(.context))]
    Empty { context: Option<Cow<'static, str>> },

    #[error("Fabric error{}: {source}", format_context(.context))]
    Fabric { source: FabricError, context: Option<Cow<'static, str>> },
}

impl From<Infallible> for ParseError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

trait Token {
    fn text(&self) -> &str;
}

struct Word(String);
struct Raw(String);

impl Token for Word {
    fn text(&self) -> &str {
        &self.0
    }
}

impl Token for Raw {
    fn text(&self) -> &str {
        &self.0
    }
}

impl Construct<(&'static str,)> for Word {
    type Error = ParseError;
    fn construct((input,): (&'static str,)) -> Result<Self, ParseError> {
        if input.is_empty() {
            return Err(ParseError::Empty { context: None });
        }
        Ok(Self(input.to_owned()))
    }
}

impl Construct<(&'static str,)> for Raw {
    type Error = Infallible;
    fn construct((input,): (&'static str,)) -> Result<Self, Infallible> {
        Ok(Self(input.to_owned()))
    }
}

#[variant_set(interface = dyn Token, args = (&'static str,), error = ParseError)]
enum Tokens {
    Word(Word),
    Raw(Raw),
}

fn main() {
    assert!(matches!(Factory::<Tokens>::create(0, ("",)), Err(ParseError::Empty { .. })));
    assert!(matches!(Factory::<Tokens>::create(2, ("x",)), Err(ParseError::Fabric { .. })));

    let raw = Factory::<Tokens>::create(1, ("",)).ok().unwrap();
    assert_eq!(raw.get().unwrap().text(), "");
}
