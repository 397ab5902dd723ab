//! The rider a fare is quoted for.

use crate::auth::{InvalidAge, Principal};

/// Who is travelling, as far as fares are concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rider {
    /// No authenticated member; no age discount applies.
    #[default]
    Anonymous,
    /// An authenticated member of known age.
    Member { age: u32 },
}

impl Rider {
    pub fn member(age: u32) -> Self {
        Rider::Member { age }
    }

    /// Returns the rider's age, if known.
    pub fn age(&self) -> Option<u32> {
        match self {
            Rider::Anonymous => None,
            Rider::Member { age } => Some(*age),
        }
    }

    /// Builds a rider from the principal of an authentication context.
    ///
    /// No principal means an anonymous rider.
    ///
    /// # Examples
    ///
    /// ```
    /// use subway_line::auth::Principal;
    /// use subway_line::fare::Rider;
    ///
    /// let principal = Principal::new().with_attribute("age", "15");
    /// assert_eq!(Rider::from_principal(Some(&principal)).unwrap(), Rider::member(15));
    /// assert_eq!(Rider::from_principal(None).unwrap(), Rider::Anonymous);
    /// ```
    pub fn from_principal(principal: Option<&Principal>) -> Result<Self, InvalidAge> {
        match principal {
            None => Ok(Rider::Anonymous),
            Some(principal) => principal.age().map(Rider::member),
        }
    }
}
