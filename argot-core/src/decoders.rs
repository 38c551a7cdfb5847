//! Primitive decoders for the common argument types.

use std::marker::PhantomData;
use std::str::FromStr;

use crate::decoder::{DecodeError, DecodeResult, Decoder, Identity, identity};

/// Returns a decoder accepting any string as-is.
pub const fn string() -> Identity<String> {
    identity()
}

/// Parses the textual form of a boolean: exactly `true` or `false`.
///
/// # Arguments
///
/// * `value` - The text to parse.
pub fn parse_bool(value: &str) -> DecodeResult<bool> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(DecodeError::new(std::format!(
            "expected value to be either \"true\" or \"false\". got: \"{other}\""
        ))),
    }
}

/// Decoder for the strings `true` and `false`. See [`boolean`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Boolean;

#[async_trait::async_trait]
impl Decoder<String> for Boolean {
    type Output = bool;

    async fn decode(&self, input: String) -> DecodeResult<bool> {
        parse_bool(&input)
    }

    fn description(&self) -> Option<&str> {
        Some("a boolean")
    }
}

/// Returns a decoder for the strings `true` and `false`.
pub const fn boolean() -> Boolean {
    Boolean
}

/// Decoder for any type implementing [`FromStr`]. See [`number`].
pub struct Number<T>(PhantomData<fn() -> T>);

impl<T> Clone for Number<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Number<T> {}

#[async_trait::async_trait]
impl<T> Decoder<String> for Number<T>
where
    T: FromStr + Send + 'static,
{
    type Output = T;

    async fn decode(&self, input: String) -> DecodeResult<T> {
        input
            .trim()
            .parse::<T>()
            .map_err(|_| DecodeError::new("Not a number"))
    }

    fn description(&self) -> Option<&str> {
        Some("a number")
    }
}

/// Returns a decoder for numbers of type `T`.
pub const fn number<T>() -> Number<T> {
    Number(PhantomData)
}

/// Decoder counting the `true` occurrences of a repeated flag. See [`count`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Count;

#[async_trait::async_trait]
impl Decoder<Vec<bool>> for Count {
    type Output = usize;

    async fn decode(&self, input: Vec<bool>) -> DecodeResult<usize> {
        Ok(input.into_iter().filter(|enabled| *enabled).count())
    }
}

/// Returns a decoder counting how many times a flag was enabled, e.g. for `-vvv`.
pub const fn count() -> Count {
    Count
}

/// Decoder applying an inner decoder to every element of a list. See [`each`].
#[derive(Clone)]
pub struct Each<D>(D);

#[async_trait::async_trait]
impl<D: Decoder<String>> Decoder<Vec<String>> for Each<D> {
    type Output = Vec<D::Output>;

    async fn decode(&self, input: Vec<String>) -> DecodeResult<Self::Output> {
        let mut values = Vec::with_capacity(input.len());
        for item in input {
            values.push(self.0.decode(item).await?);
        }
        Ok(values)
    }

    fn description(&self) -> Option<&str> {
        self.0.description()
    }
}

/// Returns a decoder for a list of raw values, decoding each with `decoder`. Stops at the
/// first element that fails.
pub const fn each<D>(decoder: D) -> Each<D> {
    Each(decoder)
}

/// Decoder keeping only the last of several raw values. See [`last`].
#[derive(Clone)]
pub struct Last<D>(D);

#[async_trait::async_trait]
impl<D: Decoder<String>> Decoder<Vec<String>> for Last<D> {
    type Output = D::Output;

    async fn decode(&self, input: Vec<String>) -> DecodeResult<Self::Output> {
        match input.into_iter().last() {
            Some(value) => self.0.decode(value).await,
            None => Err(DecodeError::new("No value provided")),
        }
    }

    fn description(&self) -> Option<&str> {
        self.0.description()
    }
}

/// Returns a decoder for a list of raw values that decodes only the last one, so that a
/// repeated option overrides earlier occurrences.
pub const fn last<D>(decoder: D) -> Last<D> {
    Last(decoder)
}
