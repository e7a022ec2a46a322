use roster_derive::roster_error;
use std::borrow::Cow;

#[roster_error]
pub enum ManifestError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Not enough seats for flight {flight}{}", format_context(.context))]
    Full { flight: String, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn main() {}
