use crate::*;
use std::fmt;

macro_rules! impl_name {
    ($name:ident) => {
        impl $name {
            pub fn plain(&self) -> &str {
                let $name(name) = self;
                name
            }
        }
        impl From<&str> for $name {
            fn from(name: &str) -> Self {
                $name(name.to_string())
            }
        }
        impl From<String> for $name {
            fn from(name: String) -> Self {
                $name(name)
            }
        }
        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.plain())
            }
        }
    };
}

impl_name!(LabelName);
impl_name!(TypeName);
impl_name!(Code);

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            | Argument::Number(n) => write!(f, "{}", n),
            | Argument::Label(label) => write!(f, "{}", label),
            | Argument::Type(ty) => write!(f, "{}", ty),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.argument {
            | Some(arg) => write!(f, "{} {}", self.instruction, arg),
            | None => write!(f, "{}", self.instruction),
        }
    }
}
