use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use thiserror::Error;
use time::{
    Date, OffsetDateTime, UtcOffset,
    format_description::{self, well_known::Rfc3339},
};

/// A date and time in the UTC time zone.
///
/// Values are always normalized to UTC, so calendar fields such as
/// [`UtcDateTime::year`] never depend on the offset they were parsed with
/// or on the local time zone of the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UtcDateTime(OffsetDateTime);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UtcDateTimeError {
    #[error("invalid date time string format `{0}`")]
    InvalidFormat(String),
}

const DATE_FORMAT: &str = "[year]-[month]-[day]";

impl UtcDateTime {
    /// Calendar year in UTC.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn parse_rfc3339<S: AsRef<str>>(input: S) -> Result<Self, UtcDateTimeError> {
        OffsetDateTime::parse(input.as_ref(), &Rfc3339)
            .map_err(|_| UtcDateTimeError::InvalidFormat(input.as_ref().into()))
            .map(Self::from)
    }

    /// Parses a plain `YYYY-MM-DD` date as midnight UTC.
    pub fn parse_date<S: AsRef<str>>(input: S) -> Result<Self, UtcDateTimeError> {
        let invalid = || UtcDateTimeError::InvalidFormat(input.as_ref().into());
        let format = format_description::parse(DATE_FORMAT).map_err(|_| invalid())?;
        Date::parse(input.as_ref(), &format)
            .map(Self::from)
            .map_err(|_| invalid())
    }

    pub fn format_rfc3339(&self) -> Result<String, time::error::Format> {
        self.0.format(&Rfc3339)
    }
}

impl Display for UtcDateTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.format_rfc3339() {
            Ok(odt) => odt.fmt(f),
            Err(_) => "INVALID_UTC_DATE_TIME".fmt(f),
        }
    }
}

impl FromStr for UtcDateTime {
    type Err = UtcDateTimeError;

    /// Accepts either an RFC 3339 timestamp or a plain date.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_rfc3339(s)
            .or_else(|_| Self::parse_date(s))
            .map_err(|_| UtcDateTimeError::InvalidFormat(s.into()))
    }
}

impl From<OffsetDateTime> for UtcDateTime {
    fn from(value: OffsetDateTime) -> Self {
        Self(value.to_offset(UtcOffset::UTC))
    }
}

impl From<Date> for UtcDateTime {
    fn from(value: Date) -> Self {
        Self(value.midnight().assume_utc())
    }
}

#[cfg(feature = "serde")]
const _: () = {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for UtcDateTime {
        fn serialize<S>(
            &self,
            serializer: S,
        ) -> Result<<S as Serializer>::Ok, <S as Serializer>::Error>
        where
            S: Serializer,
        {
            let s = self.to_string();
            serializer.serialize_str(&s)
        }
    }

    impl<'de> Deserialize<'de> for UtcDateTime {
        fn deserialize<D>(deserializer: D) -> Result<Self, <D as Deserializer<'de>>::Error>
        where
            D: Deserializer<'de>,
        {
            use serde::de;
            let s = String::deserialize(deserializer)?;
            Self::from_str(&s).map_err(de::Error::custom)
        }
    }
};
