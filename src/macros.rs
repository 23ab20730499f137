//! Accessor and sink-table generation macros
//!
//! These macros eliminate repetitive match / lookup code. They use `paste`
//! internally for identifier concatenation.

/// Generate is_xxx, as_xxx, as_xxx_mut for enums with typed variants
///
/// Uses paste's `:camel` modifier to convert method name to variant name.
///
/// # Example
/// ```ignore
/// impl Node {
///     // element -> Element, text -> Text
///     impl_enum_accessors!(element, text);
/// }
/// ```
#[macro_export]
macro_rules! impl_enum_accessors {
    ($($variant:ident),* $(,)?) => {
        ::paste::paste! {
            $(
                #[doc = "Check if this is a " [<$variant:camel>] " node"]
                #[inline]
                pub fn [<is_ $variant>](&self) -> bool {
                    matches!(self, Self::[<$variant:camel>](_))
                }

                #[doc = "Try to get as " $variant " reference"]
                #[inline]
                pub fn [<as_ $variant>](&self) -> Option<&[<$variant:camel>]> {
                    match self { Self::[<$variant:camel>](v) => Some(v), _ => None }
                }

                #[doc = "Try to get as mutable " $variant " reference"]
                #[inline]
                pub fn [<as_ $variant _mut>](&mut self) -> Option<&mut [<$variant:camel>]> {
                    match self { Self::[<$variant:camel>](v) => Some(v), _ => None }
                }
            )*
        }
    };
}

/// Declare a table of sink handles bound to DOM ids of the host page
///
/// Generates, for `name = "domId"` pairs:
/// - a struct with one `SinkHandle` per entry
/// - `NAME_ID` constants holding the DOM ids
/// - `IDS`, every DOM id the table requires, in declaration order
/// - `resolve(&Document)`, failing with `MissingContainer` on the first absent id
///
/// # Example
/// ```ignore
/// sink_table! {
///     /// Hero sinks
///     pub struct HeroSinks {
///         name = "heroName",
///         title = "heroTitle",
///     }
/// }
/// ```
#[macro_export]
macro_rules! sink_table {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $($field:ident = $dom_id:literal),* $(,)?
        }
    ) => {
        ::paste::paste! {
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq)]
            pub struct $name {
                $(
                    #[doc = "Container `#" $dom_id "`"]
                    pub $field: $crate::template::SinkHandle,
                )*
            }

            impl $name {
                $(
                    #[doc = "DOM id of the `" $field "` sink"]
                    pub const [<$field:upper _ID>]: &'static str = $dom_id;
                )*

                /// Every DOM id this table requires, in declaration order
                pub const IDS: &'static [&'static str] = &[$($dom_id),*];

                /// Every handle of the table, in declaration order
                pub fn handles(&self) -> Vec<$crate::template::SinkHandle> {
                    vec![$(self.$field),*]
                }

                /// Resolve every sink against an indexed document
                pub fn resolve(doc: &$crate::node::Document) -> $crate::error::FolioResult<Self> {
                    Ok(Self {
                        $(
                            $field: $crate::template::SinkHandle::resolve(
                                doc,
                                stringify!($field),
                                $dom_id,
                            )?,
                        )*
                    })
                }
            }
        }
    };
}
