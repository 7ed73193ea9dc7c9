use std::borrow::Cow;

/// A specialized [`UiError`] enum of this crate.
#[derive(Debug, thiserror::Error)]
pub enum UiError {
    /// A style key that has no bundle in the closed variant/size tables.
    #[error("Unknown {kind} '{key}'{}", format_context(.context))]
    UnknownVariant {
        kind: &'static str,
        key: Cow<'static, str>,
        context: Option<Cow<'static, str>>,
    },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal ui error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// Attaches human readable context to a failed [`UiError`] result.
pub trait UiErrorExt<T> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, UiError>;
}

impl<T> UiErrorExt<T> for Result<T, UiError> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Self {
        self.map_err(|mut e| {
            match &mut e {
                UiError::UnknownVariant { context: c, .. } | UiError::Internal { context: c, .. } => {
                    *c = Some(context.into());
                },
            }
            e
        })
    }
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}
