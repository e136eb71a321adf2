//! Declarative adapter for plain structs.

/// Implements [`Navigable`](crate::value::Navigable) and
/// [`Record`](crate::value::Record) for a struct by listing its fields.
///
/// Fields are exposed under their Rust name, or under an explicit name with
/// the `"Name" => field` form. Every listed field must itself be
/// `Navigable`; unlisted fields are invisible to paths.
///
/// # Example
///
/// ```
/// use dotpath::impl_record;
///
/// struct Point { x: i32, y: i32 }
/// impl_record!(Point { x, y });
///
/// struct Account { id: u64, display_name: Option<String> }
/// impl_record!(Account { "Id" => id, "DisplayName" => display_name });
///
/// let point = Point { x: 1, y: 2 };
/// let y = dotpath::resolve("y", &point).unwrap().unwrap();
/// assert_eq!(y.downcast_ref::<i32>(), Some(&2));
/// ```
#[macro_export]
macro_rules! impl_record {
    ($ty:ty { $($field:ident),* $(,)? }) => {
        $crate::impl_record!($ty { $(stringify!($field) => $field),* });
    };
    ($ty:ty { $($name:expr => $field:ident),* $(,)? }) => {
        impl $crate::value::Navigable for $ty {
            fn shape(&self) -> $crate::value::Shape<'_> {
                $crate::value::Shape::Record(self)
            }
        }

        impl $crate::value::Record for $ty {
            fn field(&self, name: &str) -> ::std::option::Option<&dyn $crate::value::Navigable> {
                $(
                    if name == $name {
                        return ::std::option::Option::Some(&self.$field as &dyn $crate::value::Navigable);
                    }
                )*
                ::std::option::Option::None
            }

            fn field_names(&self) -> ::std::vec::Vec<&str> {
                ::std::vec![$($name),*]
            }
        }
    };
}
