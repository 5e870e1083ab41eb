//! Declarative helpers for closed token domains.

/// Declares a closed, string-tokened domain (an axis value set, a theme
/// token, ...).
///
/// The generated enum parses with [`FromStr`](std::str::FromStr), rejecting
/// anything outside the domain with a
/// [`ConfigurationError`](crate::ConfigurationError), and (de)serializes
/// through the same check.
macro_rules! token_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident ($kind:literal) {
            $( $(#[$vmeta:meta])* $variant:ident => $token:literal ),+ $(,)?
        }
        default $default:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ::serde::Deserialize)]
        #[serde(try_from = "String")]
        $vis enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every member of the domain, in declaration order.
            pub const ALL: &'static [$name] = &[$( $name::$variant ),+];

            /// The literal token for this value.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $token ),+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::style::ConfigurationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $token => Ok($name::$variant), )+
                    _ => Err($crate::style::ConfigurationError::InvalidToken {
                        kind: $kind,
                        value: s.to_string(),
                        allowed: vec![$( $token ),+],
                    }),
                }
            }
        }

        impl TryFrom<String> for $name {
            type Error = $crate::style::ConfigurationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }

        impl From<$name> for &'static str {
            fn from(value: $name) -> Self {
                value.as_str()
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }
    };
}

/// Like [`token_enum!`] for numeric domains (grid columns, clamp lines,
/// heading levels). The numeric value is validated the same way a string
/// token is: a number outside the declared set is rejected.
macro_rules! numeric_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident ($kind:literal) {
            $( $variant:ident => $num:literal ),+ $(,)?
        }
        default $default:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, ::serde::Deserialize)]
        #[serde(try_from = "u8")]
        $vis enum $name {
            $( $variant ),+
        }

        impl $name {
            /// Every member of the domain, in declaration order.
            pub const ALL: &'static [$name] = &[$( $name::$variant ),+];

            /// The numeric value.
            pub const fn get(self) -> u8 {
                match self {
                    $( $name::$variant => $num ),+
                }
            }

            /// The value as an axis token (`"3"`).
            pub const fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => stringify!($num) ),+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}", self.get())
            }
        }

        impl TryFrom<u8> for $name {
            type Error = $crate::style::ConfigurationError;

            fn try_from(value: u8) -> Result<Self, Self::Error> {
                match value {
                    $( $num => Ok($name::$variant), )+
                    _ => Err($crate::style::ConfigurationError::InvalidToken {
                        kind: $kind,
                        value: value.to_string(),
                        allowed: vec![$( stringify!($num) ),+],
                    }),
                }
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::style::ConfigurationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let invalid = || $crate::style::ConfigurationError::InvalidToken {
                    kind: $kind,
                    value: s.to_string(),
                    allowed: vec![$( stringify!($num) ),+],
                };
                let n: u8 = s.parse().map_err(|_| invalid())?;
                Self::try_from(n).map_err(|_| invalid())
            }
        }

        impl From<$name> for u8 {
            fn from(value: $name) -> Self {
                value.get()
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_u8(self.get())
            }
        }
    };
}

/// Builds a [`StyleAxis`](crate::style::StyleAxis) literal for a static
/// component table.
///
/// ```ignore
/// axis!("align" default "start" {
///     "start" => [StyleDirective::Class("items-start")],
///     "center" => [StyleDirective::Class("items-center")],
/// })
/// ```
macro_rules! axis {
    ($name:literal default $default:literal {
        $( $value:literal => [ $( $directive:expr ),* $(,)? ] ),+ $(,)?
    }) => {
        $crate::style::StyleAxis {
            name: $name,
            default: $default,
            values: &[
                $( $crate::style::AxisValue {
                    value: $value,
                    directives: &[ $( $directive ),* ],
                } ),+
            ],
        }
    };
}
