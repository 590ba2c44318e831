//! Human-readable rendering of shapes, used by their `Display` impls.
//!
//! Only members that are present are listed, as `Name: value` pairs in
//! declaration order. The output is meant for diagnostics and is not a
//! serialization format.

use std::collections::BTreeMap;
use std::fmt;

use itertools::Itertools;

use crate::timestamp::Timestamp;
use crate::token::{StringEnum, Token};

/// A member value that can appear in a shape rendering.
pub trait Render {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

struct Rendered<'a, T: ?Sized>(&'a T);

impl<T: Render + ?Sized> fmt::Display for Rendered<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.render(f)
    }
}

macro_rules! render_with_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Render for $ty {
                fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::Display::fmt(self, f)
                }
            }
        )*
    };
}

render_with_display!(String, bool, i32, i64, Timestamp);

impl<E: StringEnum> Render for Token<E> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<T: Render> Render for Vec<T> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.iter().map(Rendered).format(", "))
    }
}

impl<V: Render> Render for BTreeMap<String, V> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{{}}}",
            self.iter()
                .format_with(", ", |(key, value), g| g(&format_args!(
                    "{key}={}",
                    Rendered(value)
                )))
        )
    }
}

/// Writes the brace-delimited member list of a shape.
pub struct Members<'a, 'f> {
    f: &'a mut fmt::Formatter<'f>,
    empty: bool,
}

impl<'a, 'f> Members<'a, 'f> {
    pub fn begin(f: &'a mut fmt::Formatter<'f>) -> Result<Self, fmt::Error> {
        f.write_str("{")?;
        Ok(Self { f, empty: true })
    }

    pub fn member<T: Render>(&mut self, name: &str, value: &Option<T>) -> fmt::Result {
        let Some(value) = value else {
            return Ok(());
        };
        if !self.empty {
            self.f.write_str(", ")?;
        }
        self.empty = false;
        write!(self.f, "{name}: ")?;
        value.render(self.f)
    }

    pub fn finish(self) -> fmt::Result {
        self.f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::Feature;

    struct Sample {
        name: Option<String>,
        count: Option<i32>,
        features: Option<Vec<Token<Feature>>>,
        labels: Option<BTreeMap<String, String>>,
    }

    impl fmt::Display for Sample {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let mut members = Members::begin(f)?;
            members.member("Name", &self.name)?;
            members.member("Count", &self.count)?;
            members.member("Features", &self.features)?;
            members.member("Labels", &self.labels)?;
            members.finish()
        }
    }

    #[test]
    fn skips_absent_members() {
        let sample = Sample {
            name: None,
            count: Some(3),
            features: None,
            labels: None,
        };
        assert_eq!(sample.to_string(), "{Count: 3}");
    }

    #[test]
    fn renders_lists_and_maps() {
        let sample = Sample {
            name: Some("lobby".to_string()),
            count: None,
            features: Some(vec![Feature::Bluetooth.into(), "HOLOGRAM".into()]),
            labels: Some(BTreeMap::from([
                ("b".to_string(), "2".to_string()),
                ("a".to_string(), "1".to_string()),
            ])),
        };
        assert_eq!(
            sample.to_string(),
            "{Name: lobby, Features: [BLUETOOTH, HOLOGRAM], Labels: {a=1, b=2}}"
        );
    }

    #[test]
    fn renders_empty_braces_without_members() {
        let sample = Sample {
            name: None,
            count: None,
            features: None,
            labels: None,
        };
        assert_eq!(sample.to_string(), "{}");
    }
}
