/// Define an enumeration with known variants and an unknown representation.
///
/// Discriminant fields such as the EtherType or the IP protocol number are registries where most
/// bit-patterns are not assigned to anything this crate decodes. The generated enum has a variant
/// for every value we dispatch on and an `Unknown` variant carrying everything else, so conversion
/// from the wire value is total.
///
/// # Example
///
/// ```
/// # use framedecode::enum_with_unknown;
/// # fn main() { }
/// enum_with_unknown! {
///     #[derive(Hash)]
///     pub enum IpVersion(u8) {
///         IpV4 = 4,
///         IpV6 = 6,
///     }
/// }
/// ```
// Copyright (C) 2016 whitequark@whitequark.org
#[macro_export]
macro_rules! enum_with_unknown {
    (
        $( #[$enum_attr:meta] )*
        pub enum $name:ident($ty:ty) {
            $(
              $( #[$variant_attr:meta] )*
              $variant:ident = $value:expr
            ),+ $(,)*
        }
    ) => {
        #[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
        $( #[$enum_attr] )*
        pub enum $name {
            $(
              $( #[$variant_attr] )*
              $variant
            ),*,
            /// A value this crate does not dispatch on.
            ///
            /// Decoding never fails on such a value, the containing layer keeps it verbatim and
            /// hands the remaining bytes to the raw fallback.
            Unknown($ty)
        }

        impl ::core::convert::From<$ty> for $name {
            fn from(value: $ty) -> Self {
                match value {
                    $( $value => $name::$variant ),*,
                    other => $name::Unknown(other)
                }
            }
        }

        impl ::core::convert::From<$name> for $ty {
            fn from(value: $name) -> Self {
                match value {
                    $( $name::$variant => $value ),*,
                    $name::Unknown(other) => other
                }
            }
        }
    }
}

/// Declare a dynamically sized, read-only byte wrapper.
///
/// Use this to give a byte slice the structure of a protocol header. This macro performs two
/// basic actions:
/// * Define a type with the indicated structure, documentation, attributes. The type can not have
///   any generic arguments and can only wrap a simple byte slice.
/// * Define a private method `fn __from_macro_new_unchecked(&[u8]) -> &Self` for conversion from
///   a byte slice.
///
/// ## Usage
///
/// You can currently only use a tuple type with a single member, a `[u8]`.
///
/// ```
/// # use framedecode::byte_wrapper;
/// byte_wrapper! {
///     /// A udp packet.
///     pub struct udp([u8]);
/// }
///
/// impl udp {
///     pub fn from_slice(slice: &[u8]) -> &Self {
///         Self::__from_macro_new_unchecked(slice)
///     }
/// }
///
/// let data = [0x20, 0x00, 0x00, 0x20, 0x00, 0x00, 0x08, 0x00];
/// let _= udp::from_slice(&data);
/// ```
#[macro_export]
macro_rules! byte_wrapper {
    (
        $( #[$attr:meta] )*
        pub struct $name:ident([u8])$(;)*
    ) => {
        #[allow(non_camel_case_types)]
        #[repr(transparent)]
        $( #[$attr] )*
        pub struct $name([u8]);

        impl $name {
            #[allow(dead_code)]
            fn __from_macro_new_unchecked(data: &[u8]) -> &Self {
                // SAFETY: this is safe due to repr(transparent)
                unsafe { &*(data as *const [u8] as *const Self) }
            }
        }
    }
}

#[cfg(feature = "log")]
macro_rules! net_log {
    ($level:expr, $($arg:tt)+) => {
        if let Some(level) = $crate::diag::Level::as_log($level) {
            ::log::log!(level, $($arg)+)
        }
    };
}

#[cfg(not(feature = "log"))]
macro_rules! net_log {
    ($level:expr, $($arg:tt)+) => {{ let _ = $level; let _ = format_args!($($arg)+); }};
}
