//! Composable, possibly-asynchronous conversions used to turn raw argument text into typed
//! values.

use std::marker::PhantomData;

/// Error produced when a value can't be decoded.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct DecodeError {
    /// Description of what was wrong with the value.
    pub message: String,
}

impl DecodeError {
    /// Returns a new decode error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Result of decoding a value.
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Trait implemented by fallible conversions from `I` to [`Decoder::Output`].
///
/// Decoding may suspend (e.g. to open a file), which is why the conversion is async.
#[async_trait::async_trait]
pub trait Decoder<I: Send + 'static>: Send + Sync {
    /// The type of decoded values.
    type Output: Send + 'static;

    /// Decodes the given input.
    ///
    /// # Arguments
    ///
    /// * `input` - The value to decode.
    async fn decode(&self, input: I) -> DecodeResult<Self::Output>;

    /// Returns a short description of the decoded type, for help output.
    fn description(&self) -> Option<&str> {
        None
    }
}

#[async_trait::async_trait]
impl<I: Send + 'static, D: Decoder<I> + ?Sized> Decoder<I> for Box<D> {
    type Output = D::Output;

    async fn decode(&self, input: I) -> DecodeResult<Self::Output> {
        (**self).decode(input).await
    }

    fn description(&self) -> Option<&str> {
        (**self).description()
    }
}

/// Decoder returning its input unchanged. See [`identity`].
pub struct Identity<T>(PhantomData<fn() -> T>);

impl<T> Clone for Identity<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Identity<T> {}

impl<T> Default for Identity<T> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

#[async_trait::async_trait]
impl<T: Send + 'static> Decoder<T> for Identity<T> {
    type Output = T;

    async fn decode(&self, input: T) -> DecodeResult<T> {
        Ok(input)
    }
}

/// Returns the neutral decoder, which never fails and returns its input.
pub const fn identity<T>() -> Identity<T> {
    Identity(PhantomData)
}

/// Decoder chaining two decoders. See [`extend`].
#[derive(Clone)]
pub struct Extend<F1, F2> {
    first: F1,
    second: F2,
}

#[async_trait::async_trait]
impl<I, F1, F2> Decoder<I> for Extend<F1, F2>
where
    I: Send + 'static,
    F1: Decoder<I>,
    F2: Decoder<F1::Output>,
{
    type Output = F2::Output;

    async fn decode(&self, input: I) -> DecodeResult<Self::Output> {
        let intermediate = self.first.decode(input).await?;
        self.second.decode(intermediate).await
    }

    fn description(&self) -> Option<&str> {
        self.second.description().or_else(|| self.first.description())
    }
}

/// Composes two decoders: `first` runs on the input and, if it succeeds, `second` runs on
/// its output. A failure of `first` is returned as-is without invoking `second`.
///
/// # Arguments
///
/// * `first` - The decoder applied to the input.
/// * `second` - The decoder applied to the output of `first`.
pub const fn extend<F1, F2>(first: F1, second: F2) -> Extend<F1, F2> {
    Extend { first, second }
}

/// Decoder backed by a synchronous function. See [`decode_fn`].
pub struct FnDecoder<F, I> {
    f: F,
    description: Option<String>,
    _input: PhantomData<fn(I)>,
}

impl<F, I> FnDecoder<F, I> {
    /// Sets the description reported for help output.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[async_trait::async_trait]
impl<F, I, O> Decoder<I> for FnDecoder<F, I>
where
    I: Send + 'static,
    O: Send + 'static,
    F: Fn(I) -> DecodeResult<O> + Send + Sync,
{
    type Output = O;

    async fn decode(&self, input: I) -> DecodeResult<O> {
        (self.f)(input)
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// Lifts a synchronous, fallible function into a decoder.
///
/// # Arguments
///
/// * `f` - The conversion to perform.
pub const fn decode_fn<F, I, O>(f: F) -> FnDecoder<F, I>
where
    F: Fn(I) -> DecodeResult<O> + Send + Sync,
{
    FnDecoder {
        f,
        description: None,
        _input: PhantomData,
    }
}
