//! [`Navigable`] implementations for standard library types.

use std::collections::{BTreeMap, HashMap, VecDeque};
use std::ptr::NonNull;
use std::rc::Rc;
use std::sync::Arc;

use indexmap::IndexMap;

use super::shape::{AsMapKey, Entries, MapKey, Mapping, Navigable, Scalar, Sequence, Shape};

// --- Scalars ---

macro_rules! impl_scalar {
    ($variant:ident => $($ty:ty),+) => {
        $(
            impl Navigable for $ty {
                fn shape(&self) -> Shape<'_> {
                    Shape::Scalar(Scalar::$variant((*self).into()))
                }
            }
        )+
    };
}

impl_scalar!(Int => i8, i16, i32, i64);
impl_scalar!(Uint => u8, u16, u32, u64);
impl_scalar!(Float => f32, f64);
impl_scalar!(Bool => bool);
impl_scalar!(Char => char);

impl Navigable for isize {
    fn shape(&self) -> Shape<'_> {
        Shape::Scalar(Scalar::Int(*self as i64))
    }
}

impl Navigable for usize {
    fn shape(&self) -> Shape<'_> {
        Shape::Scalar(Scalar::Uint(*self as u64))
    }
}

impl Navigable for String {
    fn shape(&self) -> Shape<'_> {
        Shape::Scalar(Scalar::Str(self))
    }
}

impl Navigable for &'static str {
    fn shape(&self) -> Shape<'_> {
        Shape::Scalar(Scalar::Str(self))
    }
}

// --- Indirection ---

impl<T: Navigable> Navigable for Option<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Indirect(self.as_ref().map(|v| v as &dyn Navigable))
    }
}

macro_rules! impl_indirect {
    ($($ptr:ident),+) => {
        $(
            impl<T: Navigable> Navigable for $ptr<T> {
                fn shape(&self) -> Shape<'_> {
                    Shape::Indirect(Some(&**self as &dyn Navigable))
                }
            }
        )+
    };
}

impl_indirect!(Box, Rc, Arc);

// --- Opaque references ---

impl<T: ?Sized + 'static> Navigable for *const T {
    fn shape(&self) -> Shape<'_> {
        Shape::Opaque
    }
}

impl<T: ?Sized + 'static> Navigable for *mut T {
    fn shape(&self) -> Shape<'_> {
        Shape::Opaque
    }
}

impl<T: ?Sized + 'static> Navigable for NonNull<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Opaque
    }
}

// --- Sequences ---

impl<T: Navigable> Sequence for Vec<T> {
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn element(&self, index: usize) -> Option<&dyn Navigable> {
        self.get(index).map(|v| v as &dyn Navigable)
    }
}

impl<T: Navigable> Navigable for Vec<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Sequence(self)
    }
}

impl<T: Navigable, const N: usize> Sequence for [T; N] {
    fn len(&self) -> usize {
        N
    }

    fn element(&self, index: usize) -> Option<&dyn Navigable> {
        self.get(index).map(|v| v as &dyn Navigable)
    }
}

impl<T: Navigable, const N: usize> Navigable for [T; N] {
    fn shape(&self) -> Shape<'_> {
        Shape::Sequence(self)
    }
}

impl<T: Navigable> Sequence for VecDeque<T> {
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn element(&self, index: usize) -> Option<&dyn Navigable> {
        self.get(index).map(|v| v as &dyn Navigable)
    }
}

impl<T: Navigable> Navigable for VecDeque<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Sequence(self)
    }
}

// --- Map keys ---

impl AsMapKey for String {
    fn as_map_key(&self) -> MapKey<'_> {
        MapKey::Str(self)
    }
}

impl AsMapKey for &'static str {
    fn as_map_key(&self) -> MapKey<'_> {
        MapKey::Str(self)
    }
}

impl AsMapKey for bool {
    fn as_map_key(&self) -> MapKey<'_> {
        MapKey::Bool(*self)
    }
}

impl AsMapKey for char {
    fn as_map_key(&self) -> MapKey<'_> {
        MapKey::Other
    }
}

macro_rules! impl_int_key {
    ($($ty:ty),+) => {
        $(
            impl AsMapKey for $ty {
                fn as_map_key(&self) -> MapKey<'_> {
                    i64::try_from(*self).map_or(MapKey::Other, MapKey::Int)
                }
            }
        )+
    };
}

impl_int_key!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

// --- Mappings ---

macro_rules! impl_mapping {
    ($map:ident<K, V $(, $s:ident)?>) => {
        impl<K, V $(, $s)?> Mapping for $map<K, V $(, $s)?>
        where
            K: AsMapKey + 'static,
            V: Navigable,
            $($s: 'static,)?
        {
            fn entries(&self) -> Entries<'_> {
                Box::new(
                    self.iter()
                        .map(|(k, v)| (k.as_map_key(), v as &dyn Navigable)),
                )
            }

            fn len(&self) -> usize {
                $map::len(self)
            }
        }

        impl<K, V $(, $s)?> Navigable for $map<K, V $(, $s)?>
        where
            K: AsMapKey + 'static,
            V: Navigable,
            $($s: 'static,)?
        {
            fn shape(&self) -> Shape<'_> {
                Shape::Mapping(self)
            }
        }
    };
}

impl_mapping!(HashMap<K, V, S>);
impl_mapping!(IndexMap<K, V, S>);
impl_mapping!(BTreeMap<K, V>);
