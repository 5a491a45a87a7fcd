//! The [`Reflect`] trait and its implementations for standard types.

use std::any::Any;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::rc::Rc;
use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, SyncSender};

use indexmap::IndexMap;

use crate::descriptor::{Kind, TypeDescriptor};

/// Types that can describe their own shape to the schema walker.
///
/// Implemented here for primitives and standard containers, and generated
/// for structs by `#[derive(Reflect)]`. Smart pointers and references are
/// transparent: they describe the type they point to.
pub trait Reflect {
    fn type_descriptor() -> TypeDescriptor;
}

macro_rules! impl_reflect_scalar {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl Reflect for $ty {
                fn type_descriptor() -> TypeDescriptor {
                    TypeDescriptor::of::<Self>(Kind::$kind)
                }
            }
        )*
    };
}

impl_reflect_scalar! {
    () => Invalid,
    bool => Bool,
    i8 => Int8,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    isize => Int,
    u8 => Uint8,
    u16 => Uint16,
    u32 => Uint32,
    u64 => Uint64,
    usize => Uint,
    i128 => Int128,
    u128 => Uint128,
    f32 => Float32,
    f64 => Float64,
    char => Char,
    String => String,
    str => String,
    dyn Any => Dynamic,
    dyn Any + Send => Dynamic,
    dyn Any + Send + Sync => Dynamic,
    serde_json::Value => Dynamic,
}

macro_rules! impl_reflect_transparent {
    ($($ptr:ident),*) => {
        $(
            impl<T: Reflect + ?Sized> Reflect for $ptr<T> {
                fn type_descriptor() -> TypeDescriptor {
                    T::type_descriptor()
                }
            }
        )*
    };
}

impl_reflect_transparent!(Box, Rc, Arc);

impl<T: Reflect + ?Sized> Reflect for &T {
    fn type_descriptor() -> TypeDescriptor {
        T::type_descriptor()
    }
}

impl<T: Reflect + ?Sized> Reflect for &mut T {
    fn type_descriptor() -> TypeDescriptor {
        T::type_descriptor()
    }
}

impl<T: Reflect> Reflect for Option<T> {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::of::<Self>(Kind::Optional {
            referent: T::type_descriptor,
        })
    }
}

impl<T: Reflect> Reflect for Vec<T> {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::of::<Self>(Kind::Sequence {
            elem: T::type_descriptor,
        })
    }
}

impl<T: Reflect> Reflect for VecDeque<T> {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::of::<Self>(Kind::Sequence {
            elem: T::type_descriptor,
        })
    }
}

impl<T: Reflect> Reflect for [T] {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::of::<Self>(Kind::Sequence {
            elem: T::type_descriptor,
        })
    }
}

impl<T: Reflect, const N: usize> Reflect for [T; N] {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::of::<Self>(Kind::Array {
            elem: T::type_descriptor,
            len: N,
        })
    }
}

macro_rules! impl_reflect_map {
    ($($map:ident),*) => {
        $(
            impl<K: Reflect, V: Reflect, S> Reflect for $map<K, V, S> {
                fn type_descriptor() -> TypeDescriptor {
                    TypeDescriptor::of::<Self>(Kind::Map {
                        key: K::type_descriptor,
                        value: V::type_descriptor,
                    })
                }
            }
        )*
    };
}

impl_reflect_map!(HashMap, IndexMap);

impl<K: Reflect, V: Reflect> Reflect for BTreeMap<K, V> {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::of::<Self>(Kind::Map {
            key: K::type_descriptor,
            value: V::type_descriptor,
        })
    }
}

macro_rules! impl_reflect_fn {
    ($($arg:ident),*) => {
        impl<R, $($arg),*> Reflect for fn($($arg),*) -> R {
            fn type_descriptor() -> TypeDescriptor {
                TypeDescriptor::of::<Self>(Kind::Function)
            }
        }
    };
}

impl_reflect_fn!();
impl_reflect_fn!(A);
impl_reflect_fn!(A, B);
impl_reflect_fn!(A, B, C);
impl_reflect_fn!(A, B, C, D);

macro_rules! impl_reflect_channel {
    ($($chan:ident),*) => {
        $(
            impl<T> Reflect for $chan<T> {
                fn type_descriptor() -> TypeDescriptor {
                    TypeDescriptor::of::<Self>(Kind::Channel)
                }
            }
        )*
    };
}

impl_reflect_channel!(Sender, SyncSender, Receiver);
