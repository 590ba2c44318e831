//! Generators for the service's closed string sets and shapes.
//!
//! A shape member is declared as `"WireName" member: kind Type`, where `kind`
//! is one of:
//!
//! - `text`: a `String`
//! - `token`: a string backed by the enumeration `Type`, stored as [`crate::Token`]
//! - `copy`: a `Copy` scalar (`i32`, `i64`, `bool`, [`crate::Timestamp`])
//! - `shape`: a nested shape
//! - `list`: an ordered list of `Type`
//! - `map`: a `BTreeMap` from `String` to `Type`

macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $token:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord,
            ::serde::Serialize, ::serde::Deserialize,
        )]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $token)]
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const VALUES: &'static [Self] = &[$(Self::$variant),+];

            /// Canonical string of this variant.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $token,)+
                }
            }

            /// Exact, case-sensitive lookup by canonical string.
            pub fn lookup(value: &str) -> Result<Self, $crate::LookupError> {
                <Self as $crate::StringEnum>::lookup(value)
            }
        }

        impl $crate::StringEnum for $name {
            const NAME: &'static str = stringify!($name);

            fn values() -> &'static [Self] {
                Self::VALUES
            }

            fn as_str(&self) -> &'static str {
                $name::as_str(self)
            }

            fn table() -> &'static ::std::collections::HashMap<&'static str, Self> {
                static TABLE: ::once_cell::sync::Lazy<
                    ::std::collections::HashMap<&'static str, $name>,
                > = ::once_cell::sync::Lazy::new(|| {
                    $name::VALUES.iter().map(|v| (v.as_str(), *v)).collect()
                });
                &TABLE
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::LookupError;
            fn from_str(value: &str) -> Result<Self, $crate::LookupError> {
                Self::lookup(value)
            }
        }

        impl ::std::convert::TryFrom<&str> for $name {
            type Error = $crate::LookupError;
            fn try_from(value: &str) -> Result<Self, $crate::LookupError> {
                Self::lookup(value)
            }
        }

        impl ::std::convert::TryFrom<String> for $name {
            type Error = $crate::LookupError;
            fn try_from(value: String) -> Result<Self, $crate::LookupError> {
                Self::lookup(&value)
            }
        }

        impl From<$name> for $crate::Token<$name> {
            fn from(value: $name) -> Self {
                $crate::Token::Known(value)
            }
        }

        impl PartialEq<$name> for $crate::Token<$name> {
            fn eq(&self, other: &$name) -> bool {
                self.known() == Some(*other)
            }
        }
    };
}

macro_rules! member_type {
    (token $ty:ty) => { $crate::Token<$ty> };
    (list $ty:ty) => { ::std::vec::Vec<$ty> };
    (map $ty:ty) => { ::std::collections::BTreeMap<::std::string::String, $ty> };
    ($kind:ident $ty:ty) => { $ty };
}

macro_rules! member_getter {
    ($(#[$doc:meta])* $member:ident: text $ty:ty) => {
        $(#[$doc])*
        pub fn $member(&self) -> Option<&str> {
            self.$member.as_deref()
        }
    };
    ($(#[$doc:meta])* $member:ident: token $ty:ty) => {
        $(#[$doc])*
        pub fn $member(&self) -> Option<&$crate::Token<$ty>> {
            self.$member.as_ref()
        }
    };
    ($(#[$doc:meta])* $member:ident: copy $ty:ty) => {
        $(#[$doc])*
        pub fn $member(&self) -> Option<$ty> {
            self.$member
        }
    };
    ($(#[$doc:meta])* $member:ident: shape $ty:ty) => {
        $(#[$doc])*
        pub fn $member(&self) -> Option<&$ty> {
            self.$member.as_ref()
        }
    };
    ($(#[$doc:meta])* $member:ident: list $ty:ty) => {
        $(#[$doc])*
        pub fn $member(&self) -> Option<&[$ty]> {
            self.$member.as_deref()
        }
    };
    ($(#[$doc:meta])* $member:ident: map $ty:ty) => {
        $(#[$doc])*
        pub fn $member(&self) -> Option<&::std::collections::BTreeMap<::std::string::String, $ty>> {
            self.$member.as_ref()
        }
    };
}

macro_rules! member_setters {
    ($member:ident: list $ty:ty) => {
        ::paste::paste! {
            /// Appends an item, creating the list on first use.
            pub fn $member(mut self, input: impl Into<$ty>) -> Self {
                self.$member.get_or_insert_with(::std::vec::Vec::new).push(input.into());
                self
            }

            /// Appends every item, creating the list on first use.
            pub fn [<extend_ $member>]<I>(mut self, items: I) -> Self
            where
                I: IntoIterator,
                I::Item: Into<$ty>,
            {
                self.$member
                    .get_or_insert_with(::std::vec::Vec::new)
                    .extend(items.into_iter().map(Into::into));
                self
            }

            /// Replaces the whole collection.
            pub fn [<set_ $member>](mut self, input: Option<::std::vec::Vec<$ty>>) -> Self {
                self.$member = input;
                self
            }
        }
    };
    ($member:ident: map $ty:ty) => {
        ::paste::paste! {
            /// Inserts an entry, creating the map on first use.
            pub fn $member(mut self, key: impl Into<::std::string::String>, value: impl Into<$ty>) -> Self {
                self.$member
                    .get_or_insert_with(::std::collections::BTreeMap::new)
                    .insert(key.into(), value.into());
                self
            }

            /// Replaces the whole collection.
            pub fn [<set_ $member>](
                mut self,
                input: Option<::std::collections::BTreeMap<::std::string::String, $ty>>,
            ) -> Self {
                self.$member = input;
                self
            }
        }
    };
    ($member:ident: $kind:ident $ty:ty) => {
        ::paste::paste! {
            /// Sets the member.
            pub fn $member(mut self, input: impl Into<member_type!($kind $ty)>) -> Self {
                self.$member = Some(input.into());
                self
            }

            /// Replaces the member, clearing it on `None`.
            pub fn [<set_ $member>](mut self, input: Option<member_type!($kind $ty)>) -> Self {
                self.$member = input;
                self
            }
        }
    };
}

macro_rules! shape {
    (
        $(#[$meta:meta])*
        $name:ident {
            $(
                $(#[$mmeta:meta])*
                $wire:literal $member:ident: $kind:ident $ty:ty
            ),* $(,)?
        }
    ) => {
        ::paste::paste! {
            $(#[$meta])*
            #[derive(
                Clone, Debug, Default, PartialEq, Eq, Hash,
                ::serde::Serialize, ::serde::Deserialize,
            )]
            pub struct $name {
                $(
                    #[serde(rename = $wire, default, skip_serializing_if = "Option::is_none")]
                    $member: Option<member_type!($kind $ty)>,
                )*
            }

            impl $name {
                /// Creates an empty builder.
                pub fn builder() -> [<$name Builder>] {
                    [<$name Builder>]::default()
                }

                /// Creates a builder preloaded with every member of this value.
                pub fn to_builder(&self) -> [<$name Builder>] {
                    [<$name Builder>] {
                        $( $member: self.$member.clone(), )*
                    }
                }

                $( member_getter!($(#[$mmeta])* $member: $kind $ty); )*
            }

            /// Builder of the shape with the same name.
            #[derive(Clone, Debug, Default, PartialEq, Eq)]
            pub struct [<$name Builder>] {
                $( $member: Option<member_type!($kind $ty)>, )*
            }

            impl [<$name Builder>] {
                $( member_setters!($member: $kind $ty); )*

                /// Consumes the builder and returns the shape. Never fails.
                pub fn build(self) -> $name {
                    $name {
                        $( $member: self.$member, )*
                    }
                }
            }

            impl From<[<$name Builder>]> for $name {
                fn from(builder: [<$name Builder>]) -> Self {
                    builder.build()
                }
            }

            impl ::std::fmt::Display for $name {
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    #[allow(unused_mut)]
                    let mut members = $crate::render::Members::begin(f)?;
                    $( members.member($wire, &self.$member)?; )*
                    members.finish()
                }
            }

            impl $crate::render::Render for $name {
                fn render(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    ::std::fmt::Display::fmt(self, f)
                }
            }

            impl $crate::Shape for $name {
                const NAME: &'static str = stringify!($name);
            }
        }
    };
}
