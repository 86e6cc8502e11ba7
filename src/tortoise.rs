use core::cmp::Ordering;
use core::fmt;
use core::num::ParseFloatError;

use thiserror::Error;

/// The marker that introduces the shell thickness inside a descriptor.
pub const SHELL_THICKNESS_KEY: &str = "shellThickness=";

/// The thickness assumed for a descriptor that carries no usable thickness.
///
/// Nothing that [`str::parse`] accepts for `f64` orders below it under
/// [`f64::total_cmp`] except a negative NaN, so tortoises without a thickness
/// sort first among tortoises sharing a nickname.
pub const MIN_SHELL_THICKNESS: f64 = f64::NEG_INFINITY;

/// Why a descriptor did not yield a shell thickness.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DescriptorError {
    /// The tortoise has no descriptor at all.
    #[error("tortoise has no descriptor")]
    Missing,
    /// The descriptor does not contain `shellThickness=`.
    #[error("descriptor has no `shellThickness=` attribute")]
    MissingThickness,
    /// The text after `shellThickness=` is not a number.
    #[error("shell thickness `{raw}` is not a number")]
    InvalidThickness {
        raw: String,
        #[source]
        source: ParseFloatError,
    },
}

/// A tortoise used as a map key.
///
/// A tortoise is identified by an optional nickname and an optional free-form
/// descriptor. The descriptor may embed a numeric attribute written as
/// `shellThickness=<float>`, which is parsed on demand and never stored.
///
/// # Equality, hashing and order
///
/// Two tortoises are equal when both the nickname and the descriptor text are
/// equal, and the hash covers both fields, so equal tortoises always hash the
/// same.
///
/// Ordering sorts by nickname (absent first), then by shell thickness
/// ascending, where a missing or malformed thickness counts as
/// [`MIN_SHELL_THICKNESS`]. Descriptors such as `shellThickness=3.1` and
/// `shellThickness=3.10` denote different tortoises yet share a sort key;
/// [`Tortoise::cmp_sort_key`] reports them as equal while [`Ord`] breaks the
/// tie on the raw descriptor text so that it stays consistent with [`Eq`].
///
/// # Examples
///
/// ```
/// use tortoise_maps::Tortoise;
///
/// let thin = Tortoise::with_descriptor("Броня", "shellThickness=2.9");
/// let thick = Tortoise::with_descriptor("Броня", "shellThickness=3.1");
///
/// assert!(thin < thick);
/// assert_eq!(thick.shell_thickness(), 3.1);
/// assert_ne!(thin, thick);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Tortoise {
    nickname: Option<String>,
    descriptor: Option<String>,
}

impl Tortoise {
    /// Creates a tortoise with a nickname and no descriptor.
    #[must_use]
    pub fn new(nickname: impl Into<String>) -> Self {
        Tortoise {
            nickname: Some(nickname.into()),
            descriptor: None,
        }
    }

    /// Creates a tortoise with a nickname and a descriptor.
    #[must_use]
    pub fn with_descriptor(nickname: impl Into<String>, descriptor: impl Into<String>) -> Self {
        Tortoise {
            nickname: Some(nickname.into()),
            descriptor: Some(descriptor.into()),
        }
    }

    /// Creates a tortoise whose descriptor is exactly `shellThickness=<thickness>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tortoise_maps::Tortoise;
    ///
    /// let kazka = Tortoise::with_shell_thickness("Казка", 3.3);
    /// assert_eq!(kazka, Tortoise::with_descriptor("Казка", "shellThickness=3.3"));
    /// ```
    #[must_use]
    pub fn with_shell_thickness(nickname: impl Into<String>, thickness: f64) -> Self {
        Self::with_descriptor(nickname, format!("{SHELL_THICKNESS_KEY}{thickness}"))
    }

    /// Creates a tortoise from optional parts; either field may be absent.
    #[must_use]
    pub fn from_parts(nickname: Option<String>, descriptor: Option<String>) -> Self {
        Tortoise { nickname, descriptor }
    }

    /// The nickname, if any.
    #[must_use]
    pub fn nickname(&self) -> Option<&str> {
        self.nickname.as_deref()
    }

    /// The raw descriptor text, if any.
    #[must_use]
    pub fn descriptor(&self) -> Option<&str> {
        self.descriptor.as_deref()
    }

    /// Parses the shell thickness out of the descriptor.
    ///
    /// The number runs from just after the first `shellThickness=` up to the
    /// next `,` or `;` (or the end of the descriptor), with surrounding
    /// whitespace ignored.
    ///
    /// # Errors
    ///
    /// Returns a [`DescriptorError`] if the descriptor is absent, lacks the
    /// attribute, or the attribute is not a number.
    ///
    /// # Examples
    ///
    /// ```
    /// use tortoise_maps::{DescriptorError, Tortoise};
    ///
    /// let zevs = Tortoise::with_descriptor("Зевс", "colour=olive; shellThickness=3.9");
    /// assert_eq!(zevs.try_shell_thickness(), Ok(3.9));
    ///
    /// let nameless = Tortoise::new("Зевс");
    /// assert_eq!(nameless.try_shell_thickness(), Err(DescriptorError::Missing));
    /// ```
    pub fn try_shell_thickness(&self) -> Result<f64, DescriptorError> {
        let descriptor = self.descriptor.as_deref().ok_or(DescriptorError::Missing)?;
        parse_shell_thickness(descriptor)
    }

    /// Returns the shell thickness, or [`MIN_SHELL_THICKNESS`] when it cannot
    /// be parsed.
    #[must_use]
    pub fn shell_thickness(&self) -> f64 {
        self.try_shell_thickness().unwrap_or(MIN_SHELL_THICKNESS)
    }

    /// Compares two tortoises by sort key only: nickname, then shell thickness.
    ///
    /// Unlike [`Ord::cmp`], this returns [`Ordering::Equal`] for tortoises whose
    /// descriptors differ only in formatting.
    ///
    /// # Examples
    ///
    /// ```
    /// use core::cmp::Ordering;
    /// use tortoise_maps::Tortoise;
    ///
    /// let a = Tortoise::with_descriptor("Гном", "shellThickness=1.8");
    /// let b = Tortoise::with_descriptor("Гном", "shellThickness=1.80");
    ///
    /// assert_eq!(a.cmp_sort_key(&b), Ordering::Equal);
    /// assert_ne!(a.cmp(&b), Ordering::Equal);
    /// ```
    #[must_use]
    pub fn cmp_sort_key(&self, other: &Self) -> Ordering {
        self.nickname
            .cmp(&other.nickname)
            .then_with(|| self.shell_thickness().total_cmp(&other.shell_thickness()))
    }
}

fn parse_shell_thickness(descriptor: &str) -> Result<f64, DescriptorError> {
    let (_, rest) = descriptor
        .split_once(SHELL_THICKNESS_KEY)
        .ok_or(DescriptorError::MissingThickness)?;
    let raw = rest.find([',', ';']).map_or(rest, |end| &rest[..end]).trim();
    raw.parse().map_err(|source| DescriptorError::InvalidThickness {
        raw: raw.to_owned(),
        source,
    })
}

impl PartialOrd for Tortoise {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tortoise {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_sort_key(other)
            .then_with(|| self.descriptor.cmp(&other.descriptor))
    }
}

impl fmt::Display for Tortoise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.nickname {
            Some(nickname) => write!(f, "Tortoise{{nickname='{nickname}'")?,
            None => f.write_str("Tortoise{nickname=<none>")?,
        }
        if let Some(descriptor) = &self.descriptor {
            write!(f, ", descriptor='{descriptor}'")?;
        }
        f.write_str("}")
    }
}
